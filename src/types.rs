//! Type definitions for currency formatting
//!
//! This module defines the per-currency display rules and the option sets
//! that control how an amount is rendered.

use serde::Deserialize;

/// Display rule for a single currency
///
/// Omitted fields in the embedded table fall back to the neutral rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyRule {
    /// Currency symbol, e.g. "$" or "€"
    pub symbol: String,
    /// Whether the symbol precedes the number
    pub symbol_first: bool,
    /// Decimal mark between units and sub-units
    pub decimal_mark: String,
    /// Separator inserted every three integer digits
    pub thousands_separator: String,
    /// Name of the minor unit; empty when the currency has none (e.g. Yen)
    pub sub_unit: String,
}

impl CurrencyRule {
    /// The rule used for codes missing from the table: no symbol, "." and ","
    /// separators, no sub-unit.
    pub fn neutral() -> Self {
        Self {
            symbol: String::new(),
            symbol_first: false,
            decimal_mark: ".".to_string(),
            thousands_separator: ",".to_string(),
            sub_unit: String::new(),
        }
    }

    /// Whether amounts in this currency carry a fractional part
    pub fn has_sub_unit(&self) -> bool {
        !self.sub_unit.is_empty()
    }
}

impl Default for CurrencyRule {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Fully resolved display options
///
/// Every field always holds a value; use [`FormatOption`] or
/// [`OptionOverrides`] to change only some of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Show the decimal mark and two fractional digits
    pub with_cents: bool,
    /// Append a space and the currency code
    pub with_currency: bool,
    /// Show the currency symbol
    pub with_symbol: bool,
    /// Put a space between symbol and number
    pub with_symbol_space: bool,
    /// Group integer digits by thousands
    pub with_thousands_separator: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            with_cents: true,
            with_currency: false,
            with_symbol: true,
            with_symbol_space: false,
            with_thousands_separator: true,
        }
    }
}

impl FormatOptions {
    pub fn with_cents(mut self, val: bool) -> Self {
        self.with_cents = val;
        self
    }

    pub fn with_currency(mut self, val: bool) -> Self {
        self.with_currency = val;
        self
    }

    pub fn with_symbol(mut self, val: bool) -> Self {
        self.with_symbol = val;
        self
    }

    pub fn with_symbol_space(mut self, val: bool) -> Self {
        self.with_symbol_space = val;
        self
    }

    pub fn with_thousands_separator(mut self, val: bool) -> Self {
        self.with_thousands_separator = val;
        self
    }
}

/// A single option instruction; each variant sets exactly one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOption {
    /// Sets `with_cents`
    Cents(bool),
    /// Sets `with_currency`
    Currency(bool),
    /// Sets `with_symbol`
    Symbol(bool),
    /// Sets `with_symbol_space`
    SymbolSpace(bool),
    /// Sets `with_thousands_separator`
    ThousandsSeparator(bool),
}

/// Sparse option overrides, typically deserialized from a config document
///
/// Absent (or `null`) keys keep their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionOverrides {
    /// Currency code to format in; `"USD"` when absent
    pub currency: Option<String>,
    pub with_cents: Option<bool>,
    pub with_currency: Option<bool>,
    pub with_symbol: Option<bool>,
    pub with_symbol_space: Option<bool>,
    pub with_thousands_separator: Option<bool>,
}
