//! Extracts the server-reported execution time from EXPLAIN ANALYZE output.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{BenchError, Result};

lazy_static! {
    // Anchored at the start of a line, e.g. "Execution Time: 12.345 ms".
    static ref EXEC_TIME_MS_RE: Regex =
        Regex::new(r"(?i)^execution\s+time\s*:\s*(\d+(?:\.\d+)?)").unwrap();
}

/// Scan plan lines for the first execution-time line and return its value
/// in milliseconds. Later matching lines are ignored.
///
/// A missing line means the plan output format is unexpected, which is
/// fatal for the trial, not a transient condition.
pub fn execution_time_ms<I, S>(lines: I) -> Result<f64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        if let Some(captures) = EXEC_TIME_MS_RE.captures(line.as_ref()) {
            let value = captures[1]
                .parse::<f64>()
                .map_err(|_| BenchError::ExecTimeMissing)?;
            return Ok(value);
        }
    }

    Err(BenchError::ExecTimeMissing)
}
