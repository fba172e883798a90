//! Currency rule table
//!
//! This module loads the per-currency display rules embedded in
//! `currency/currencies.toml` and provides lookups by currency code.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{FormatError, Result};
use crate::types::CurrencyRule;

/// Read-only table of currency rules keyed by upper-case code
struct CurrencyTable {
    rules: HashMap<String, CurrencyRule>,
}

// Global singleton, initialised on first lookup
static CURRENCY_TABLE: OnceLock<CurrencyTable> = OnceLock::new();

impl CurrencyTable {
    /// Create the table from the embedded TOML data
    fn new() -> Self {
        match Self::parse(include_str!("currency/currencies.toml")) {
            Ok(table) => table,
            Err(e) => {
                // Every code degrades to the neutral rule from here on
                tracing::error!(error = %e, "failed to load embedded currency table");
                Self {
                    rules: HashMap::new(),
                }
            }
        }
    }

    /// Parse a TOML document of `[CODE]` tables
    fn parse(toml_str: &str) -> Result<Self> {
        let parsed: HashMap<String, CurrencyRule> =
            toml::from_str(toml_str).map_err(|e| FormatError::RuleTable(e.to_string()))?;

        let rules = parsed
            .into_iter()
            .map(|(code, rule)| (normalize_code(&code), rule))
            .collect();

        Ok(Self { rules })
    }

    /// Get the global currency table instance
    fn get() -> &'static Self {
        CURRENCY_TABLE.get_or_init(Self::new)
    }

    fn rule(&self, code: &str) -> Option<&CurrencyRule> {
        self.rules.get(&normalize_code(code))
    }
}

/// Canonical form of a currency code ("usd" -> "USD")
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Get the rule for a currency code, if the table has one
pub fn lookup(code: &str) -> Option<CurrencyRule> {
    CurrencyTable::get().rule(code).cloned()
}

/// Get the rule for a currency code, falling back to [`CurrencyRule::neutral`]
pub fn rule_or_neutral(code: &str) -> CurrencyRule {
    lookup(code).unwrap_or_else(|| {
        tracing::debug!(code, "unknown currency code, using neutral rule");
        CurrencyRule::neutral()
    })
}

/// List all currency codes in the table, sorted
pub fn list_available_currencies() -> Vec<String> {
    let mut codes: Vec<String> = CurrencyTable::get().rules.keys().cloned().collect();
    codes.sort();
    codes
}
