//! tokio-postgres implementation of the database seam.

use async_trait::async_trait;
use tokio_postgres::{NoTls, SimpleQueryMessage};
use tracing::{debug, info};

use crate::config::ConnectionTarget;
use crate::error::{BenchError, Result};

use super::{Backend, Session};

pub struct PgBackend {
    config: tokio_postgres::Config,
    addr: String,
}

impl PgBackend {
    pub fn new(target: &ConnectionTarget) -> Self {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&target.host)
            .port(target.port)
            .user(&target.user)
            .dbname(&target.dbname);
        if let Some(ref password) = target.password {
            config.password(password);
        }

        Self {
            config,
            addr: target.addr(),
        }
    }
}

#[async_trait]
impl Backend for PgBackend {
    type Session = PgSession;

    async fn connect(&self) -> Result<PgSession> {
        info!("Connecting to {}", self.addr);

        let (client, connection) = self.config.connect(NoTls).await.map_err(|e| {
            BenchError::Connection(format!("failed to connect to {}: {}", self.addr, e))
        })?;

        // The connection object drives the socket; it resolves once the
        // client is dropped.
        tokio::spawn(connection);

        Ok(PgSession { client })
    }
}

pub struct PgSession {
    client: tokio_postgres::Client,
}

#[async_trait]
impl Session for PgSession {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        debug!("Executing: {}", first_line(sql));

        self.client
            .batch_execute(sql)
            .await
            .map_err(statement_error)
    }

    async fn query_plan(&mut self, sql: &str) -> Result<Vec<String>> {
        debug!("Executing: {}", first_line(sql));

        let messages = self
            .client
            .simple_query(sql)
            .await
            .map_err(statement_error)?;

        let mut lines = Vec::new();
        for message in messages {
            if let SimpleQueryMessage::Row(row) = message {
                lines.push(row.get(0).unwrap_or_default().to_string());
            }
        }
        Ok(lines)
    }

    async fn relation_size(&mut self, relation: &str) -> Result<i64> {
        let row = self
            .client
            .query_one("SELECT pg_relation_size($1::regclass)", &[&relation])
            .await
            .map_err(statement_error)?;

        Ok(row.get(0))
    }

    async fn close(self) -> Result<()> {
        // Dropping the client terminates the spawned connection task.
        drop(self.client);
        Ok(())
    }
}

fn statement_error(e: tokio_postgres::Error) -> BenchError {
    BenchError::Statement(e.to_string())
}

fn first_line(sql: &str) -> &str {
    sql.lines().next().unwrap_or("").trim()
}
