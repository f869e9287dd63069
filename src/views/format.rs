// src/views/format.rs

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::middleware::i18n::Locale;

fn two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `$1234.50`
pub fn money(value: Decimal) -> String {
    format!("${:.2}", two_places(value))
}

/// `$1,234.50` (cards da home)
pub fn money_grouped(value: Decimal) -> String {
    let rounded = two_places(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("${sign}{}.{frac_part}", group_thousands(int_part))
}

pub fn count_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&digits))
}

pub fn percent(value: Decimal) -> String {
    format!("{value}%")
}

pub fn date(value: NaiveDate, locale: &Locale) -> String {
    value.format(locale.date_format()).to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(dec("1234.5")), "$1234.50");
        assert_eq!(money(dec("10")), "$10.00");
        assert_eq!(money(dec("0.005")), "$0.01");
        assert_eq!(money(dec("99.994")), "$99.99");
    }

    #[test]
    fn grouped_money_uses_thousand_separators() {
        assert_eq!(money_grouped(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(money_grouped(dec("999.9")), "$999.90");
        assert_eq!(money_grouped(Decimal::ZERO), "$0.00");
        assert_eq!(money_grouped(dec("-1500")), "$-1,500.00");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(count_grouped(0), "0");
        assert_eq!(count_grouped(1000), "1,000");
        assert_eq!(count_grouped(123456789), "123,456,789");
    }

    #[test]
    fn percent_keeps_database_scale() {
        assert_eq!(percent(dec("12.50")), "12.50%");
    }

    #[test]
    fn dates_follow_locale() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(date(d, &Locale("es".into())), "09/03/2026");
        assert_eq!(date(d, &Locale("en".into())), "03/09/2026");
    }
}
