//! Category and currency listings

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Currency};

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "")]
    selected: &'static str,
}

/// Table of supported currencies, marking `current`
pub fn format_currency_table(currencies: &[Currency], current: &Currency) -> String {
    let rows = currencies.iter().map(|c| CurrencyRow {
        code: c.code,
        symbol: c.symbol,
        name: c.name,
        selected: if c.code == current.code { "*" } else { "" },
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Comma-separated category names, in menu order
pub fn format_category_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_table_marks_current() {
        let eur = Currency::find("EUR").unwrap();
        let table = format_currency_table(Currency::all(), &eur);
        let eur_line = table.lines().find(|l| l.contains("EUR")).unwrap();
        assert!(eur_line.contains('*'));
        let usd_line = table.lines().find(|l| l.contains("USD")).unwrap();
        assert!(!usd_line.contains('*'));
    }

    #[test]
    fn test_category_list() {
        assert_eq!(
            format_category_list(Category::all()),
            "Food, Transportation, Entertainment, Healthcare, Shopping, Bills, Education, Other"
        );
    }
}
