// src/views/table.rs

use serde::Serialize;

use super::format;
use crate::{middleware::i18n::Locale, models::report::ReportData};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    // Classe CSS do selo (só o nível do cliente usa)
    pub badge: Option<&'static str>,
    pub strong: bool,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge: None,
            strong: false,
        }
    }

    fn strong(text: impl Into<String>) -> Self {
        Self {
            strong: true,
            ..Self::plain(text)
        }
    }

    fn badge(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            badge: Some(class),
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

pub fn tier_badge_class(tier: &str) -> &'static str {
    match tier {
        "VIP" => "badge-vip",
        "Frecuente" => "badge-frecuente",
        _ => "badge-default",
    }
}

impl TableView {
    pub fn from_report(data: &ReportData, locale: &Locale) -> Self {
        match data {
            ReportData::SalesCategory(rows) => Self {
                headers: vec!["Categoría", "Total Órdenes", "Monto Total", "% del Total"],
                rows: rows
                    .iter()
                    .map(|row| {
                        vec![
                            Cell::plain(&row.categoria),
                            Cell::plain(row.total_ordenes.to_string()),
                            Cell::plain(format::money(row.monto_total)),
                            Cell::plain(format::percent(row.pct_del_total)),
                        ]
                    })
                    .collect(),
            },
            ReportData::TopProducts(rows) => Self {
                headers: vec![
                    "Ranking",
                    "Producto",
                    "Categoría",
                    "U. Vendidas",
                    "Ingresos",
                    "Stock",
                    "Precio",
                ],
                rows: rows
                    .iter()
                    .map(|row| {
                        vec![
                            Cell::plain(format!("#{}", row.ranking)),
                            Cell::plain(&row.producto),
                            Cell::plain(&row.categoria),
                            Cell::plain(row.unidades_vendidas.to_string()),
                            Cell::plain(format::money(row.ingresos_totales)),
                            Cell::plain(row.stock_actual.to_string()),
                            Cell::plain(format::money(row.precio_actual)),
                        ]
                    })
                    .collect(),
            },
            ReportData::CustomerSummary(rows) => Self {
                headers: vec![
                    "Cliente",
                    "Email",
                    "Nivel",
                    "Total Órdenes",
                    "Gasto Total",
                    "Promedio",
                ],
                rows: rows
                    .iter()
                    .map(|row| {
                        vec![
                            Cell::plain(&row.nombre),
                            Cell::plain(&row.email),
                            Cell::badge(&row.nivel_cliente, tier_badge_class(&row.nivel_cliente)),
                            Cell::plain(row.total_ordenes.to_string()),
                            Cell::plain(format::money(row.gasto_total)),
                            Cell::plain(format::money(row.gasto_promedio)),
                        ]
                    })
                    .collect(),
            },
            ReportData::OrderStatus(rows) => Self {
                headers: vec![
                    "Estado",
                    "Cantidad",
                    "Monto Total",
                    "Ticket Promedio",
                    "% del Total",
                ],
                rows: rows
                    .iter()
                    .map(|row| {
                        vec![
                            Cell::strong(&row.status_label),
                            Cell::plain(row.cantidad.to_string()),
                            Cell::plain(format::money(row.monto_total)),
                            Cell::plain(format::money(row.monto_promedio)),
                            Cell::plain(format::percent(row.pct_del_total)),
                        ]
                    })
                    .collect(),
            },
            ReportData::DailySales(rows) => Self {
                headers: vec!["Fecha", "Órdenes", "Ingreso Diario", "Ingreso Acumulado"],
                rows: rows
                    .iter()
                    .map(|row| {
                        vec![
                            Cell::plain(format::date(row.fecha, locale)),
                            Cell::plain(row.ordenes_del_dia.to_string()),
                            Cell::plain(format::money(row.ingreso_del_dia)),
                            Cell::plain(format::money(row.ingreso_acumulado)),
                        ]
                    })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{CustomerPurchases, DailySales, TopProduct};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn customer(tier: &str) -> CustomerPurchases {
        CustomerPurchases {
            usuario_id: 7,
            nombre: "Ana Pérez".into(),
            email: "ana@example.com".into(),
            total_ordenes: 12,
            gasto_total: Decimal::new(150_050, 2),
            gasto_promedio: Decimal::new(125_041_667, 6),
            nivel_cliente: tier.into(),
            activo: true,
        }
    }

    #[test]
    fn customer_rows_format_money_and_tier() {
        let data = ReportData::CustomerSummary(vec![customer("VIP"), customer("Ocasional")]);
        let table = TableView::from_report(&data, &Locale::default());

        assert_eq!(table.headers.len(), 6);
        let first = &table.rows[0];
        assert_eq!(first[0].text, "Ana Pérez");
        assert_eq!(first[2].badge, Some("badge-vip"));
        assert_eq!(first[4].text, "$1500.50");
        assert_eq!(first[5].text, "$125.04");
        assert_eq!(table.rows[1][2].badge, Some("badge-default"));
    }

    #[test]
    fn top_product_ranking_is_prefixed() {
        let data = ReportData::TopProducts(vec![TopProduct {
            ranking: 1,
            producto_id: 3,
            producto: "Teclado".into(),
            categoria: "Periféricos".into(),
            unidades_vendidas: 40,
            ingresos_totales: Decimal::new(80_000, 2),
            precio_actual: Decimal::new(2_000, 2),
            stock_actual: 5,
        }]);
        let table = TableView::from_report(&data, &Locale::default());
        assert_eq!(table.rows[0][0].text, "#1");
        assert_eq!(table.rows[0][6].text, "$20.00");
    }

    #[test]
    fn daily_dates_use_locale() {
        let data = ReportData::DailySales(vec![DailySales {
            fecha: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            ordenes_del_dia: 3,
            ingreso_del_dia: Decimal::new(300, 0),
            ingreso_acumulado: Decimal::new(4_500, 0),
        }]);
        let table = TableView::from_report(&data, &Locale("en".into()));
        assert_eq!(table.rows[0][0].text, "01/31/2026");
        assert_eq!(table.rows[0][3].text, "$4500.00");
    }

    #[test]
    fn tier_classes() {
        assert_eq!(tier_badge_class("VIP"), "badge-vip");
        assert_eq!(tier_badge_class("Frecuente"), "badge-frecuente");
        assert_eq!(tier_badge_class("Nuevo"), "badge-default");
    }
}
