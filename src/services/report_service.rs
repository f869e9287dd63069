// src/services/report_service.rs

use crate::{
    common::error::AppError,
    db::ReportRepository,
    models::{
        filters::ReportRequest,
        report::{DashboardKpis, ReportData},
    },
};

#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
}

impl ReportService {
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    // Cada relatório = uma consulta na sua view. Nada é recalculado aqui.
    pub async fn load(&self, request: &ReportRequest) -> Result<ReportData, AppError> {
        let data = match request {
            ReportRequest::SalesCategory => {
                ReportData::SalesCategory(self.repo.get_sales_by_category().await?)
            }
            ReportRequest::TopProducts(params) => {
                ReportData::TopProducts(self.repo.get_top_products(params.limit).await?)
            }
            ReportRequest::CustomerSummary(params) => {
                ReportData::CustomerSummary(self.repo.get_customers_with_purchases(params).await?)
            }
            ReportRequest::OrderStatus => {
                ReportData::OrderStatus(self.repo.get_orders_by_status().await?)
            }
            ReportRequest::DailySales(params) => ReportData::DailySales(
                self.repo
                    .get_daily_summary(params.start_date, params.end_date)
                    .await?,
            ),
        };

        tracing::debug!(report = %data.id(), rows = data.len(), "relatório carregado");
        Ok(data)
    }

    pub async fn get_kpis(&self) -> Result<DashboardKpis, AppError> {
        self.repo.get_kpis().await
    }
}
