// src/handlers/pages.rs

use axum::{
    extract::{Path, Query, State},
    response::Html,
};

use crate::{
    common::error::PageError,
    config::AppState,
    middleware::i18n::Locale,
    models::{
        filters::{RawQuery, ReportRequest},
        report::ReportId,
    },
};

// GET /
pub async fn home(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<Html<String>, PageError> {
    let kpis = app_state
        .report_service
        .get_kpis()
        .await
        .map_err(|e| e.to_page_error(&locale, &app_state.templates))?;

    let html = app_state
        .templates
        .render_home(&kpis, &locale)
        .map_err(|e| e.to_page_error(&locale, &app_state.templates))?;

    Ok(Html(html))
}

// GET /reports/{id}
pub async fn report(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    Query(raw): Query<RawQuery>,
) -> Result<Html<String>, PageError> {
    // Id inválido = 404 antes de qualquer acesso ao banco
    let report_id = id
        .parse::<ReportId>()
        .map_err(|e| e.to_page_error(&locale, &app_state.templates))?;

    let request = ReportRequest::from_query(report_id, &raw);

    let data = app_state
        .report_service
        .load(&request)
        .await
        .map_err(|e| e.to_page_error(&locale, &app_state.templates))?;

    let html = app_state
        .templates
        .render_report(&request, &data, &locale)
        .map_err(|e| e.to_page_error(&locale, &app_state.templates))?;

    Ok(Html(html))
}
