//! Attaching the currency symbol to a rendered number

use crate::types::{CurrencyRule, FormatOptions};

/// Place the rule's symbol before or after `numeric`
///
/// The sign is not handled here; callers prefix it to the whole result.
/// A rule without a symbol leaves `numeric` untouched.
pub fn attach_symbol(numeric: &str, rule: &CurrencyRule, options: &FormatOptions) -> String {
    if rule.symbol.is_empty() {
        return numeric.to_string();
    }

    let space = if options.with_symbol_space { " " } else { "" };

    if rule.symbol_first {
        format!("{}{}{}", rule.symbol, space, numeric)
    } else {
        format!("{}{}{}", numeric, space, rule.symbol)
    }
}
