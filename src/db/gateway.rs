// src/db/gateway.rs

use chrono::NaiveDate;
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    FromRow, PgPool,
};

use crate::{common::error::AppError, config::DatabaseConfig};

/// Valor ligado a um placeholder posicional (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Date(NaiveDate),
}

/// Texto SQL + lista de parâmetros na ordem dos placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl ReportQuery {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Guarda o valor e devolve o placeholder que o referencia.
    pub fn bind(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("${}", self.params.len())
    }

    pub fn push_sql(&mut self, clause: &str) {
        self.sql.push(' ');
        self.sql.push_str(clause);
    }
}

// Único ponto de contato com o banco: pool + execução de SELECTs parametrizados.
#[derive(Clone)]
pub struct QueryGateway {
    pool: PgPool,
}

impl QueryGateway {
    pub fn connect_lazy(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.connect_options()?);

        tracing::info!(
            max_connections = config.max_connections,
            "✅ Pool de conexões configurado (conecta na primeira consulta)"
        );

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run<T>(&self, query: &ReportQuery) -> Result<Vec<T>, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %query.sql, params = query.params.len(), "executando consulta");

        let mut statement = sqlx::query_as::<_, T>(&query.sql);
        for param in &query.params {
            statement = match param {
                SqlParam::Text(value) => statement.bind(value.as_str()),
                SqlParam::Int(value) => statement.bind(*value),
                SqlParam::Date(value) => statement.bind(*value),
            };
        }

        // Sem retry: erro de banco sobe direto para quem renderiza a página
        let rows = statement.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Espera as conexões em uso voltarem e fecha as ociosas.
    pub async fn shutdown(&self) {
        tracing::info!("Fechando pool de conexões...");
        self.pool.close().await;
        tracing::info!("Pool de conexões fechado.");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
