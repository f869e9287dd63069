// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{middleware::i18n::Locale, views::templates::Templates};

// Usado só se o próprio template de erro falhar
const FALLBACK_ERROR_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"es\">\n\
    <head><meta charset=\"utf-8\"><title>Error</title></head>\n\
    <body><h1>Error</h1><a href=\"/\">Volver al Dashboard</a></body>\n</html>\n";

#[derive(Debug, Error)]
pub enum AppError {
    // Único erro de validação que chega ao usuário: id de relatório fora do enum
    #[error("Relatório não encontrado: {0}")]
    ReportNotFound(String),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro de template: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ReportNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converte o erro na página HTML correspondente (404 ou falha genérica).
    pub fn to_page_error(self, locale: &Locale, templates: &Templates) -> PageError {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Falha ao renderizar página: {}", self);
        }

        let body = templates.render_error(status, locale).unwrap_or_else(|e| {
            tracing::error!("Falha ao renderizar página de erro: {}", e);
            FALLBACK_ERROR_PAGE.to_string()
        });

        PageError { status, body }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            AppError::ReportNotFound(_) => "Reporte no encontrado.",
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                "Ocurrió un error inesperado."
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

// Resposta de erro das páginas: status + HTML já renderizado, sem detalhes internos.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub body: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}
