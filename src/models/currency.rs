//! Display currencies
//!
//! Currencies are labels only: switching currency changes the symbol used
//! when formatting amounts, never the amounts themselves.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// A currency the tracker can display amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Supported currencies; the first entry is the fallback
pub const CURRENCIES: &[Currency] = &[
    Currency::new("USD", "$", "US Dollar"),
    Currency::new("EUR", "€", "Euro"),
    Currency::new("GBP", "£", "British Pound"),
    Currency::new("JPY", "¥", "Japanese Yen"),
    Currency::new("INR", "₹", "Indian Rupee"),
    Currency::new("CAD", "C$", "Canadian Dollar"),
    Currency::new("AUD", "A$", "Australian Dollar"),
    Currency::new("CNY", "¥", "Chinese Yuan"),
    Currency::new("CHF", "CHF", "Swiss Franc"),
    Currency::new("PHP", "₱", "Philippine Peso"),
    Currency::new("MXN", "Mex$", "Mexican Peso"),
    Currency::new("BRL", "R$", "Brazilian Real"),
    Currency::new("KRW", "₩", "South Korean Won"),
    Currency::new("ZAR", "R", "South African Rand"),
];

impl Currency {
    pub const fn new(code: &'static str, symbol: &'static str, name: &'static str) -> Self {
        Self { code, symbol, name }
    }

    /// Look up a currency by ISO code (case-insensitive)
    pub fn find(code: &str) -> Option<Currency> {
        let code = code.trim();
        CURRENCIES
            .iter()
            .copied()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// All supported currencies
    pub fn all() -> &'static [Currency] {
        CURRENCIES
    }

    /// Format an amount with this currency's symbol
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(self.symbol)
    }
}

impl Default for Currency {
    fn default() -> Self {
        CURRENCIES[0]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.symbol, self.name, self.code)
    }
}
