// src/config.rs

pub mod settings;

use std::sync::Arc;

use crate::{
    db::{QueryGateway, ReportRepository},
    services::ReportService,
    views::templates::Templates,
};
pub use settings::{DatabaseConfig, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub gateway: QueryGateway,
    pub report_service: ReportService,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(db_config: &DatabaseConfig) -> anyhow::Result<Self> {
        // O pool só abre conexões na primeira consulta
        let gateway = QueryGateway::connect_lazy(db_config)?;

        Self::with_gateway(gateway)
    }

    pub fn with_gateway(gateway: QueryGateway) -> anyhow::Result<Self> {
        // --- Monta o gráfico de dependências ---
        let report_repo = ReportRepository::new(gateway.clone());
        let report_service = ReportService::new(report_repo);
        let templates = Arc::new(Templates::new()?);

        Ok(Self {
            gateway,
            report_service,
            templates,
        })
    }
}
