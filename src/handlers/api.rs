// src/handlers/api.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        filters::{RawQuery, ReportRequest},
        report::{DashboardKpis, ReportData, ReportId},
    },
};

// GET /api/reports/{id}
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = "Reportes",
    responses(
        (
            status = 200,
            description = "Filas del reporte, en el orden de la vista",
            body = ReportData
        ),
        (status = 404, description = "Reporte desconocido"),
        (status = 500, description = "Falla de base de datos")
    ),
    params(
        ("id" = ReportId, Path, description = "Identificador del reporte"),
        (
            "query" = Option<String>,
            Query,
            description = "Texto a buscar en nombre o email (customer-summary)"
        ),
        ("page" = Option<i64>, Query, description = "Página, >= 1 (customer-summary)"),
        ("limit" = Option<i64>, Query, description = "Filas por página [5,100] o top N [1,50]"),
        ("startDate" = Option<String>, Query, description = "YYYY-MM-DD (daily-sales)"),
        ("endDate" = Option<String>, Query, description = "YYYY-MM-DD (daily-sales)"),
        ("minVentas" = Option<f64>, Query, description = "Aceptado en top-products, sin efecto")
    )
)]
pub async fn get_report(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(raw): Query<RawQuery>,
) -> Result<impl IntoResponse, AppError> {
    let report_id = id.parse::<ReportId>()?;
    let request = ReportRequest::from_query(report_id, &raw);

    let data = app_state.report_service.load(&request).await?;

    Ok((StatusCode::OK, Json(data)))
}

// GET /api/kpis
#[utoipa::path(
    get,
    path = "/api/kpis",
    tag = "Reportes",
    responses(
        (status = 200, description = "Indicadores de la página principal", body = DashboardKpis)
    )
)]
pub async fn get_kpis(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let kpis = app_state.report_service.get_kpis().await?;

    Ok((StatusCode::OK, Json(kpis)))
}

// GET /api/health
pub async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    if app_state.gateway.is_closed() {
        (StatusCode::SERVICE_UNAVAILABLE, "SHUTTING DOWN")
    } else {
        (StatusCode::OK, "OK")
    }
}
