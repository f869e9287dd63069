// src/views/templates.rs

use axum::http::StatusCode;
use serde::Serialize;
use tera::{Context, Tera};

use super::{format, table::TableView};
use crate::{
    common::error::AppError,
    middleware::i18n::Locale,
    models::{
        filters::ReportRequest,
        report::{DashboardKpis, ReportData, ReportId},
    },
};

const TOP_LIMIT_OPTIONS: [i64; 3] = [5, 10, 20];

// Templates embutidos no binário e compilados uma vez no startup
pub struct Templates {
    tera: Tera,
}

#[derive(Debug, Serialize)]
struct NavItem {
    slug: &'static str,
    label: &'static str,
    title: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct KpiCard {
    title: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
struct LimitOption {
    value: i64,
    active: bool,
}

#[derive(Debug, Serialize)]
struct SearchControls {
    query: String,
    page: i64,
    limit: i64,
    prev_page: i64,
    next_page: i64,
    has_prev: bool,
}

#[derive(Debug, Serialize)]
struct DateControls {
    start_date: String,
    end_date: String,
}

#[derive(Debug, Serialize)]
struct Layout {
    lang: String,
    version: &'static str,
    active_report: &'static str,
    nav: Vec<NavItem>,
}

impl Layout {
    fn new(locale: &Locale, active: Option<ReportId>) -> Self {
        Self {
            lang: locale.0.clone(),
            version: env!("CARGO_PKG_VERSION"),
            active_report: active.map(ReportId::slug).unwrap_or(""),
            nav: ReportId::ALL
                .into_iter()
                .map(|id| NavItem {
                    slug: id.slug(),
                    label: id.nav_label(),
                    title: id.title(),
                    description: id.description(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HomePage {
    #[serde(flatten)]
    layout: Layout,
    kpis: Vec<KpiCard>,
}

#[derive(Debug, Serialize)]
struct ReportPage {
    #[serde(flatten)]
    layout: Layout,
    title: &'static str,
    table: TableView,
    top_limits: Option<Vec<LimitOption>>,
    search: Option<SearchControls>,
    date_filter: Option<DateControls>,
}

#[derive(Debug, Serialize)]
struct ErrorPage {
    #[serde(flatten)]
    layout: Layout,
    title: &'static str,
    message: &'static str,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("home.html", include_str!("../../templates/home.html")),
            ("report.html", include_str!("../../templates/report.html")),
            ("error.html", include_str!("../../templates/error.html")),
        ])?;
        Ok(Self { tera })
    }

    pub fn render_home(&self, kpis: &DashboardKpis, locale: &Locale) -> Result<String, AppError> {
        let page = HomePage {
            layout: Layout::new(locale, None),
            kpis: vec![
                KpiCard {
                    title: "Ingresos Totales",
                    value: format::money_grouped(kpis.total_ingresos),
                },
                KpiCard {
                    title: "Total Órdenes",
                    value: format::count_grouped(kpis.total_ordenes),
                },
                KpiCard {
                    title: "Estado Principal",
                    value: kpis
                        .top_status
                        .clone()
                        .filter(|s| !s.is_empty())
                        .unwrap_or_else(|| "N/A".to_string()),
                },
            ],
        };

        self.render("home.html", &page)
    }

    pub fn render_report(
        &self,
        request: &ReportRequest,
        data: &ReportData,
        locale: &Locale,
    ) -> Result<String, AppError> {
        let id = request.id();

        let top_limits = match request {
            ReportRequest::TopProducts(params) => Some(
                TOP_LIMIT_OPTIONS
                    .into_iter()
                    .map(|value| LimitOption {
                        value,
                        active: value == params.limit,
                    })
                    .collect(),
            ),
            _ => None,
        };

        let search = match request {
            ReportRequest::CustomerSummary(params) => Some(SearchControls {
                query: params.query.clone().unwrap_or_default(),
                page: params.page,
                limit: params.limit,
                prev_page: (params.page - 1).max(1),
                next_page: params.page.saturating_add(1),
                has_prev: params.page > 1,
            }),
            _ => None,
        };

        let date_filter = match request {
            ReportRequest::DailySales(params) => Some(DateControls {
                start_date: params.start_date.map(|d| d.to_string()).unwrap_or_default(),
                end_date: params.end_date.map(|d| d.to_string()).unwrap_or_default(),
            }),
            _ => None,
        };

        let page = ReportPage {
            layout: Layout::new(locale, Some(id)),
            title: id.title(),
            table: TableView::from_report(data, locale),
            top_limits,
            search,
            date_filter,
        };

        self.render("report.html", &page)
    }

    /// Página de 404 ou de falha genérica, sem detalhes internos.
    pub fn render_error(&self, status: StatusCode, locale: &Locale) -> Result<String, AppError> {
        let (title, message) = if status == StatusCode::NOT_FOUND {
            ("404 - No encontrado", "El reporte solicitado no existe.")
        } else {
            (
                "Error",
                "No fue posible generar el reporte. Intente nuevamente más tarde.",
            )
        };

        let page = ErrorPage {
            layout: Layout::new(locale, None),
            title,
            message,
        };

        self.render("error.html", &page)
    }

    fn render<T: Serialize>(&self, name: &str, page: &T) -> Result<String, AppError> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(name, &context)?)
    }
}
