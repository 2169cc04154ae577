//! Database seam: the session traits the trial engine runs against, plus
//! the fixed statement shapes the harness issues.

pub mod postgres;

use async_trait::async_trait;

use crate::error::Result;

pub use postgres::PgBackend;

/// A connectable database target. Two sessions are opened per benchmark
/// run: one for the import phase, a fresh one for the timed phase.
#[async_trait]
pub trait Backend {
    type Session: Session;

    async fn connect(&self) -> Result<Self::Session>;
}

/// One open database session. Every statement takes effect immediately;
/// no explicit transaction spans multiple calls.
#[async_trait]
pub trait Session: Send {
    /// Execute one or more statements, discarding any result rows.
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Execute a query and return its output as text lines, one per row.
    async fn query_plan(&mut self, sql: &str) -> Result<Vec<String>>;

    /// On-disk size of a relation in bytes. The relation name is passed as
    /// a bound parameter, never interpolated into the statement.
    async fn relation_size(&mut self, relation: &str) -> Result<i64>;

    async fn close(self) -> Result<()>;
}

/// Quote a trusted identifier for direct inclusion in a statement.
/// Embedded double quotes are doubled, per SQL identifier rules.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", quote_ident(table))
}

pub fn drop_index(index: &str) -> String {
    format!("DROP INDEX IF EXISTS {}", quote_ident(index))
}

pub fn create_gist_index(index: &str, table: &str, column: &str) -> String {
    format!(
        "CREATE INDEX {} ON {} USING GIST({})",
        quote_ident(index),
        quote_ident(table),
        quote_ident(column)
    )
}

/// Self-join counting geometry pairs whose bounding boxes intersect,
/// wrapped so the server reports its own execution time.
pub fn explain_spatial_join(table: &str, column: &str) -> String {
    let table = quote_ident(table);
    let column = quote_ident(column);
    format!(
        "EXPLAIN ANALYZE SELECT COUNT(*) FROM {table} a, {table} b WHERE a.{column} && b.{column}",
        table = table,
        column = column
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_plain() {
        assert_eq!(quote_ident("roads_rdr"), "\"roads_rdr\"");
    }

    #[test]
    fn test_quote_ident_doubles_embedded_quotes() {
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_drop_statements_are_idempotent_shapes() {
        assert_eq!(drop_table("t"), "DROP TABLE IF EXISTS \"t\"");
        assert_eq!(drop_index("t_idx"), "DROP INDEX IF EXISTS \"t_idx\"");
    }

    #[test]
    fn test_create_gist_index_shape() {
        assert_eq!(
            create_gist_index("t_idx", "t", "geom"),
            "CREATE INDEX \"t_idx\" ON \"t\" USING GIST(\"geom\")"
        );
    }

    #[test]
    fn test_spatial_join_shape() {
        assert_eq!(
            explain_spatial_join("t", "geom"),
            "EXPLAIN ANALYZE SELECT COUNT(*) FROM \"t\" a, \"t\" b \
             WHERE a.\"geom\" && b.\"geom\""
        );
    }
}
