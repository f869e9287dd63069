// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

pub const DEFAULT_LANG: &str = "es";

// Extrator de idioma (primeiro idioma do Accept-Language)
#[derive(Debug, Clone)]
pub struct Locale(pub String);

impl Locale {
    pub fn from_header(header_str: Option<&str>) -> Self {
        let lang = header_str
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first()
                    // "pt-BR" -> "pt", "en" -> "en"
                    .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            })
            .filter(|lang| !lang.is_empty() && lang != "*")
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Locale(lang)
    }

    /// Formato de data usado nas tabelas: inglês usa mês/dia, o resto dia/mês.
    pub fn date_format(&self) -> &'static str {
        if self.0 == "en" { "%m/%d/%Y" } else { "%d/%m/%Y" }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANG.to_string())
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_str = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok());

        Ok(Locale::from_header(header_str))
    }
}
