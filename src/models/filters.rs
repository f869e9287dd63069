// src/models/filters.rs
//
// Parâmetros de query string dos relatórios. Três formatos são permissivos
// (valor inválido vira default, nunca erro); o id do relatório é estrito e
// fica em `ReportId::from_str`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use validator::Validate;

use super::report::ReportId;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_TOP_LIMIT: i64 = 10;

pub type RawQuery = HashMap<String, String>;

// --- Busca + paginação ---
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SearchParams {
    pub query: Option<String>,

    #[validate(range(min = 1))]
    pub page: i64,

    #[validate(range(min = 5, max = 100))]
    pub limit: i64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchParams {
    pub fn from_query(raw: &RawQuery) -> Self {
        let mut params = Self {
            query: raw.get("query").filter(|q| !q.trim().is_empty()).cloned(),
            page: parse_int(raw.get("page")).unwrap_or(DEFAULT_PAGE),
            limit: parse_int(raw.get("limit")).unwrap_or(DEFAULT_LIMIT),
        };

        // Campo fora da faixa volta para o default, os demais ficam
        if let Err(errors) = params.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("page") {
                params.page = DEFAULT_PAGE;
            }
            if fields.contains_key("limit") {
                params.limit = DEFAULT_LIMIT;
            }
        }

        params
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

// --- Intervalo de datas (busca + paginação + datas) ---
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRangeParams {
    pub search: SearchParams,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRangeParams {
    pub fn from_query(raw: &RawQuery) -> Self {
        Self {
            search: SearchParams::from_query(raw),
            start_date: raw.get("startDate").and_then(|s| parse_calendar_date(s)),
            end_date: raw.get("endDate").and_then(|s| parse_calendar_date(s)),
        }
    }
}

// --- Top N (limit re-limitado a [1, 50]) ---
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct TopProductsParams {
    pub query: Option<String>,

    #[validate(range(min = 1))]
    pub page: i64,

    #[validate(range(min = 1, max = 50))]
    pub limit: i64,

    // Aceito e validado, mas nenhuma consulta usa
    pub min_ventas: Option<Decimal>,
}

impl Default for TopProductsParams {
    fn default() -> Self {
        Self {
            query: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_TOP_LIMIT,
            min_ventas: None,
        }
    }
}

impl TopProductsParams {
    pub fn from_query(raw: &RawQuery) -> Self {
        let mut params = Self {
            query: raw.get("query").filter(|q| !q.trim().is_empty()).cloned(),
            page: parse_int(raw.get("page")).unwrap_or(DEFAULT_PAGE),
            limit: parse_int(raw.get("limit")).unwrap_or(DEFAULT_TOP_LIMIT),
            min_ventas: raw
                .get("minVentas")
                .and_then(|s| s.trim().parse::<Decimal>().ok())
                .filter(|v| !v.is_sign_negative()),
        };

        if let Err(errors) = params.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("page") {
                params.page = DEFAULT_PAGE;
            }
            if fields.contains_key("limit") {
                params.limit = DEFAULT_TOP_LIMIT;
            }
        }

        params
    }
}

/// Id já validado + parâmetros no formato que aquele relatório aceita.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRequest {
    SalesCategory,
    TopProducts(TopProductsParams),
    CustomerSummary(SearchParams),
    OrderStatus,
    DailySales(DateRangeParams),
}

impl ReportRequest {
    pub fn from_query(id: ReportId, raw: &RawQuery) -> Self {
        match id {
            ReportId::SalesCategory => ReportRequest::SalesCategory,
            ReportId::TopProducts => ReportRequest::TopProducts(TopProductsParams::from_query(raw)),
            ReportId::CustomerSummary => {
                ReportRequest::CustomerSummary(SearchParams::from_query(raw))
            }
            ReportId::OrderStatus => ReportRequest::OrderStatus,
            ReportId::DailySales => ReportRequest::DailySales(DateRangeParams::from_query(raw)),
        }
    }

    pub fn id(&self) -> ReportId {
        match self {
            ReportRequest::SalesCategory => ReportId::SalesCategory,
            ReportRequest::TopProducts(_) => ReportId::TopProducts,
            ReportRequest::CustomerSummary(_) => ReportId::CustomerSummary,
            ReportRequest::OrderStatus => ReportId::OrderStatus,
            ReportRequest::DailySales(_) => ReportId::DailySales,
        }
    }
}

fn parse_int(raw: Option<&String>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

/// Aceita só `YYYY-MM-DD` com data de calendário válida.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(pairs: &[(&str, &str)]) -> RawQuery {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn search_defaults_when_absent() {
        assert_eq!(SearchParams::from_query(&raw(&[])), SearchParams::default());
    }

    #[test]
    fn search_keeps_valid_values() {
        let params =
            SearchParams::from_query(&raw(&[("query", "ana"), ("page", "3"), ("limit", "25")]));
        assert_eq!(params.query.as_deref(), Some("ana"));
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn search_defaults_each_invalid_field_independently() {
        let params =
            SearchParams::from_query(&raw(&[("query", "ana"), ("page", "0"), ("limit", "20")]));
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
        assert_eq!(params.query.as_deref(), Some("ana"));

        let params = SearchParams::from_query(&raw(&[("page", "abc"), ("limit", "4")]));
        assert_eq!((params.page, params.limit), (1, 10));

        let params = SearchParams::from_query(&raw(&[("page", "2"), ("limit", "101")]));
        assert_eq!((params.page, params.limit), (2, 10));
    }

    #[test]
    fn blank_search_text_is_absent() {
        assert_eq!(SearchParams::from_query(&raw(&[("query", "")])).query, None);
        assert_eq!(SearchParams::from_query(&raw(&[("query", "   ")])).query, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = SearchParams::from_query(&raw(&[("orderBy", "email"), ("page", "2")]));
        assert_eq!(params.page, 2);
    }

    #[test]
    fn top_products_limit_bounds() {
        assert_eq!(TopProductsParams::from_query(&raw(&[("limit", "1")])).limit, 1);
        assert_eq!(TopProductsParams::from_query(&raw(&[("limit", "50")])).limit, 50);
        assert_eq!(TopProductsParams::from_query(&raw(&[("limit", "51")])).limit, 10);
        assert_eq!(TopProductsParams::from_query(&raw(&[("limit", "0")])).limit, 10);
        assert_eq!(TopProductsParams::from_query(&raw(&[])).limit, 10);
    }

    #[test]
    fn min_ventas_is_accepted_when_non_negative() {
        let params = TopProductsParams::from_query(&raw(&[("minVentas", "2.5")]));
        assert_eq!(params.min_ventas, Some(Decimal::new(25, 1)));

        assert_eq!(TopProductsParams::from_query(&raw(&[("minVentas", "-1")])).min_ventas, None);
        assert_eq!(TopProductsParams::from_query(&raw(&[("minVentas", "x")])).min_ventas, None);
    }

    #[test]
    fn dates_must_be_calendar_dates() {
        assert_eq!(
            parse_calendar_date("2026-02-28"),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
        for bad in ["2026-02-30", "2026-2-01", "26-02-01", "2026/02/01", "", "2026-02-01T00:00"] {
            assert_eq!(parse_calendar_date(bad), None, "{bad}");
        }
    }

    #[test]
    fn date_range_drops_malformed_dates_only() {
        let params = DateRangeParams::from_query(&raw(&[
            ("startDate", "2026-01-01"),
            ("endDate", "ontem"),
        ]));
        assert_eq!(params.start_date, NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(params.end_date, None);
    }

    #[test]
    fn request_uses_the_shape_of_each_report() {
        let q = raw(&[("limit", "40")]);
        match ReportRequest::from_query(ReportId::TopProducts, &q) {
            ReportRequest::TopProducts(p) => assert_eq!(p.limit, 40),
            other => panic!("{other:?}"),
        }
        // 40 também cabe na faixa da busca (5..=100)
        match ReportRequest::from_query(ReportId::CustomerSummary, &q) {
            ReportRequest::CustomerSummary(p) => assert_eq!(p.limit, 40),
            other => panic!("{other:?}"),
        }
        for id in ReportId::ALL {
            assert_eq!(ReportRequest::from_query(id, &q).id(), id);
        }
    }

    proptest! {
        #[test]
        fn offset_is_page_minus_one_times_limit(page in 1i64..1_000_000, limit in 5i64..=100) {
            let params = SearchParams::from_query(&raw(&[
                ("page", page.to_string().as_str()),
                ("limit", limit.to_string().as_str()),
            ]));
            prop_assert_eq!(params.page, page);
            prop_assert_eq!(params.limit, limit);
            prop_assert_eq!(params.offset(), (page - 1) * limit);
        }

        #[test]
        fn out_of_range_pagination_falls_back_to_defaults(
            page in i64::MIN..1,
            limit in prop_oneof![i64::MIN..5, 101i64..i64::MAX],
        ) {
            let params = SearchParams::from_query(&raw(&[
                ("page", page.to_string().as_str()),
                ("limit", limit.to_string().as_str()),
            ]));
            prop_assert_eq!(params.page, DEFAULT_PAGE);
            prop_assert_eq!(params.limit, DEFAULT_LIMIT);
        }

        #[test]
        fn non_numeric_pagination_falls_back_to_defaults(page in "[a-z ]*", limit in "[a-z.]*") {
            let params = SearchParams::from_query(&raw(&[
                ("page", page.as_str()),
                ("limit", limit.as_str()),
            ]));
            prop_assert_eq!(params.page, DEFAULT_PAGE);
            prop_assert_eq!(params.limit, DEFAULT_LIMIT);
        }

        #[test]
        fn top_limit_outside_bounds_is_defaulted(
            limit in prop_oneof![i64::MIN..1, 51i64..i64::MAX]
        ) {
            let raw_limit = limit.to_string();
            let params = TopProductsParams::from_query(&raw(&[("limit", raw_limit.as_str())]));
            prop_assert_eq!(params.limit, DEFAULT_TOP_LIMIT);
        }
    }
}
