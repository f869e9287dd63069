// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reportes E-Commerce",
        description = "Reportes de solo lectura sobre vistas de PostgreSQL"
    ),
    paths(
        handlers::api::get_report,
        handlers::api::get_kpis,
    ),
    components(
        schemas(
            models::report::ReportId,
            models::report::ReportData,
            models::report::CategorySales,
            models::report::TopProduct,
            models::report::CustomerPurchases,
            models::report::OrderStatusSummary,
            models::report::DailySales,
            models::report::DashboardKpis,
        )
    ),
    tags(
        (name = "Reportes", description = "Ventas, productos, clientes, órdenes y resumen diario")
    )
)]
pub struct ApiDoc;
