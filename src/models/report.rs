// src/models/report.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::common::error::AppError;

// Os cinco relatórios expostos. Qualquer outro id é 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportId {
    SalesCategory,
    TopProducts,
    CustomerSummary,
    OrderStatus,
    DailySales,
}

impl ReportId {
    pub const ALL: [ReportId; 5] = [
        ReportId::SalesCategory,
        ReportId::TopProducts,
        ReportId::CustomerSummary,
        ReportId::OrderStatus,
        ReportId::DailySales,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ReportId::SalesCategory => "sales-category",
            ReportId::TopProducts => "top-products",
            ReportId::CustomerSummary => "customer-summary",
            ReportId::OrderStatus => "order-status",
            ReportId::DailySales => "daily-sales",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportId::SalesCategory => "Ventas por Categoría",
            ReportId::TopProducts => "Productos Más Vendidos",
            ReportId::CustomerSummary => "Resumen de Clientes",
            ReportId::OrderStatus => "Estado de Órdenes",
            ReportId::DailySales => "Ventas Diarias",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            ReportId::SalesCategory => "Ventas por Categoría",
            ReportId::TopProducts => "Productos Top",
            ReportId::CustomerSummary => "Clientes VIP",
            ReportId::OrderStatus => "Status Órdenes",
            ReportId::DailySales => "Ventas Diarias",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportId::SalesCategory => {
                "Analiza cuáles categorías generan más ingresos y volumen de ventas."
            }
            ReportId::TopProducts => "Ranking de productos top con detalles de stock e ingresos.",
            ReportId::CustomerSummary => {
                "Identifica a tus mejores clientes (VIP) y sus hábitos de compra."
            }
            ReportId::OrderStatus => {
                "Monitorea el flujo de pedidos desde pendiente hasta entregado."
            }
            ReportId::DailySales => "Seguimiento de ingresos día a día con acumulados.",
        }
    }
}

impl FromStr for ReportId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportId::ALL
            .into_iter()
            .find(|id| id.slug() == s)
            .ok_or_else(|| AppError::ReportNotFound(s.to_string()))
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// --- Linhas das views (colunas com cast explícito no SELECT) ---

// vw_ventas_por_categoria
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CategorySales {
    pub categoria_id: i64,
    pub categoria: String,
    pub total_ordenes: i64,
    pub monto_total: Decimal,
    pub pct_del_total: Decimal,
}

// vw_productos_mas_vendidos
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TopProduct {
    pub ranking: i64,
    pub producto_id: i64,
    pub producto: String,
    pub categoria: String,
    pub unidades_vendidas: i64,
    pub ingresos_totales: Decimal,
    pub precio_actual: Decimal,
    pub stock_actual: i64,
}

// vw_usuarios_con_compras
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CustomerPurchases {
    pub usuario_id: i64,
    pub nombre: String,
    pub email: String,
    pub total_ordenes: i64,
    pub gasto_total: Decimal,
    pub gasto_promedio: Decimal,
    pub nivel_cliente: String,
    pub activo: bool,
}

// vw_ordenes_por_status
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OrderStatusSummary {
    pub status: String,
    pub status_label: String,
    pub cantidad: i64,
    pub monto_total: Decimal,
    pub monto_promedio: Decimal,
    pub pct_del_total: Decimal,
}

// vw_resumen_diario
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DailySales {
    #[schema(value_type = String, format = Date, example = "2026-01-15")]
    pub fecha: NaiveDate,
    pub ordenes_del_dia: i64,
    pub ingreso_del_dia: Decimal,
    pub ingreso_acumulado: Decimal,
}

/// Resultado de um relatório, já tipado pela view de origem.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "report", content = "rows", rename_all = "kebab-case")]
pub enum ReportData {
    SalesCategory(Vec<CategorySales>),
    TopProducts(Vec<TopProduct>),
    CustomerSummary(Vec<CustomerPurchases>),
    OrderStatus(Vec<OrderStatusSummary>),
    DailySales(Vec<DailySales>),
}

impl ReportData {
    pub fn id(&self) -> ReportId {
        match self {
            ReportData::SalesCategory(_) => ReportId::SalesCategory,
            ReportData::TopProducts(_) => ReportId::TopProducts,
            ReportData::CustomerSummary(_) => ReportId::CustomerSummary,
            ReportData::OrderStatus(_) => ReportId::OrderStatus,
            ReportData::DailySales(_) => ReportId::DailySales,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ReportData::SalesCategory(rows) => rows.len(),
            ReportData::TopProducts(rows) => rows.len(),
            ReportData::CustomerSummary(rows) => rows.len(),
            ReportData::OrderStatus(rows) => rows.len(),
            ReportData::DailySales(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Cards do topo da home
#[derive(Debug, Clone, Default, Serialize, FromRow, ToSchema)]
pub struct DashboardKpis {
    pub total_ingresos: Decimal,
    pub total_ordenes: i64,
    pub top_status: Option<String>,
}
