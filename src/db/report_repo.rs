// src/db/report_repo.rs

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::gateway::{QueryGateway, ReportQuery, SqlParam},
    models::{
        filters::SearchParams,
        report::{
            CategorySales, CustomerPurchases, DailySales, DashboardKpis, OrderStatusSummary,
            TopProduct,
        },
    },
};

// Colunas de cada view com o tipo que o Rust espera decodificar.
// Os valores numéricos podem vir como texto/decimal dependendo da view.
const CATEGORY_COLUMNS: &str = "categoria_id::bigint AS categoria_id, \
    categoria::text AS categoria, \
    total_ordenes::bigint AS total_ordenes, \
    monto_total::numeric AS monto_total, \
    pct_del_total::numeric AS pct_del_total";

const TOP_PRODUCT_COLUMNS: &str = "ranking::bigint AS ranking, \
    producto_id::bigint AS producto_id, \
    producto::text AS producto, \
    categoria::text AS categoria, \
    unidades_vendidas::bigint AS unidades_vendidas, \
    ingresos_totales::numeric AS ingresos_totales, \
    precio_actual::numeric AS precio_actual, \
    stock_actual::bigint AS stock_actual";

const CUSTOMER_COLUMNS: &str = "usuario_id::bigint AS usuario_id, \
    nombre::text AS nombre, \
    email::text AS email, \
    total_ordenes::bigint AS total_ordenes, \
    gasto_total::numeric AS gasto_total, \
    gasto_promedio::numeric AS gasto_promedio, \
    nivel_cliente::text AS nivel_cliente, \
    activo::boolean AS activo";

const ORDER_STATUS_COLUMNS: &str = "status::text AS status, \
    status_label::text AS status_label, \
    cantidad::bigint AS cantidad, \
    monto_total::numeric AS monto_total, \
    monto_promedio::numeric AS monto_promedio, \
    pct_del_total::numeric AS pct_del_total";

const DAILY_COLUMNS: &str = "fecha::date AS fecha, \
    ordenes_del_dia::bigint AS ordenes_del_dia, \
    ingreso_del_dia::numeric AS ingreso_del_dia, \
    ingreso_acumulado::numeric AS ingreso_acumulado";

// 1. Vendas por categoria
pub fn sales_by_category_query() -> ReportQuery {
    let mut query = ReportQuery::new(format!(
        "SELECT {CATEGORY_COLUMNS} FROM vw_ventas_por_categoria"
    ));
    query.push_sql("ORDER BY monto_total DESC");
    query
}

// 2. Produtos mais vendidos (ranking já vem calculado pela view)
pub fn top_products_query(limit: i64) -> ReportQuery {
    let mut query = ReportQuery::new(format!(
        "SELECT {TOP_PRODUCT_COLUMNS} FROM vw_productos_mas_vendidos"
    ));
    query.push_sql("ORDER BY ranking ASC");
    let limit = query.bind(SqlParam::Int(limit));
    query.push_sql(&format!("LIMIT {limit}"));
    query
}

// 3. Clientes com compras: busca opcional + paginação, ordem fixa por gasto
pub fn customers_with_purchases_query(params: &SearchParams) -> ReportQuery {
    let mut query = ReportQuery::new(format!(
        "SELECT {CUSTOMER_COLUMNS} FROM vw_usuarios_con_compras"
    ));

    if let Some(search) = params.query.as_deref() {
        let pattern = query.bind(SqlParam::Text(format!("%{}%", escape_like(search))));
        query.push_sql(&format!("WHERE nombre ILIKE {pattern} OR email ILIKE {pattern}"));
    }

    query.push_sql("ORDER BY gasto_total DESC");

    let limit = query.bind(SqlParam::Int(params.limit));
    let offset = query.bind(SqlParam::Int(params.offset()));
    query.push_sql(&format!("LIMIT {limit} OFFSET {offset}"));
    query
}

// 4. Ordens por status
pub fn orders_by_status_query() -> ReportQuery {
    let mut query = ReportQuery::new(format!(
        "SELECT {ORDER_STATUS_COLUMNS} FROM vw_ordenes_por_status"
    ));
    query.push_sql("ORDER BY monto_total DESC");
    query
}

// 5. Resumo diário. Só a data final, sem inicial, não filtra.
pub fn daily_summary_query(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> ReportQuery {
    let mut query = ReportQuery::new(format!("SELECT {DAILY_COLUMNS} FROM vw_resumen_diario"));

    match (start_date, end_date) {
        (Some(start), Some(end)) => {
            let start = query.bind(SqlParam::Date(start));
            let end = query.bind(SqlParam::Date(end));
            query.push_sql(&format!("WHERE fecha BETWEEN {start} AND {end}"));
        }
        (Some(start), None) => {
            let start = query.bind(SqlParam::Date(start));
            query.push_sql(&format!("WHERE fecha >= {start}"));
        }
        _ => {}
    }

    query.push_sql("ORDER BY fecha ASC");
    query
}

// KPIs da home, somados no próprio SQL a partir da view de status
pub fn dashboard_kpis_query() -> ReportQuery {
    ReportQuery::new(
        "SELECT COALESCE(SUM(monto_total), 0)::numeric AS total_ingresos, \
         COALESCE(SUM(cantidad), 0)::bigint AS total_ordenes, \
         (SELECT status_label::text FROM vw_ordenes_por_status \
         ORDER BY cantidad DESC LIMIT 1) AS top_status \
         FROM vw_ordenes_por_status",
    )
}

/// Escapa `\`, `%` e `_` para o ILIKE tratar a busca como texto literal.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Clone)]
pub struct ReportRepository {
    gateway: QueryGateway,
}

impl ReportRepository {
    pub fn new(gateway: QueryGateway) -> Self {
        Self { gateway }
    }

    pub async fn get_sales_by_category(&self) -> Result<Vec<CategorySales>, AppError> {
        self.gateway.run(&sales_by_category_query()).await
    }

    pub async fn get_top_products(&self, limit: i64) -> Result<Vec<TopProduct>, AppError> {
        self.gateway.run(&top_products_query(limit)).await
    }

    pub async fn get_customers_with_purchases(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<CustomerPurchases>, AppError> {
        self.gateway.run(&customers_with_purchases_query(params)).await
    }

    pub async fn get_orders_by_status(&self) -> Result<Vec<OrderStatusSummary>, AppError> {
        self.gateway.run(&orders_by_status_query()).await
    }

    pub async fn get_daily_summary(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailySales>, AppError> {
        self.gateway.run(&daily_summary_query(start_date, end_date)).await
    }

    pub async fn get_kpis(&self) -> Result<DashboardKpis, AppError> {
        let rows: Vec<DashboardKpis> = self.gateway.run(&dashboard_kpis_query()).await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }
}
