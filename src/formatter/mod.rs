//! Currency formatting module
//!
//! This module renders an amount in a currency according to the currency's
//! rule and a set of display options. The main entry point is [`format`].

pub mod grouping;
pub mod split;
pub mod symbol;

use crate::currency;
use crate::error::{FormatError, Result};
use crate::types::{CurrencyRule, FormatOption, FormatOptions, OptionOverrides};

use grouping::group_thousands;
use split::split_value;
use symbol::attach_symbol;

/// Format an amount according to the currency's rules and options
///
/// Unknown currency codes are formatted with [`CurrencyRule::neutral`].
///
/// # Arguments
/// * `amount` - The amount to format
/// * `code` - ISO currency code, matched case-insensitively
/// * `opts` - Option instructions applied over the defaults, in order
///
/// # Returns
/// * `Result<String>` - The formatted amount, or `InvalidAmount` for NaN and
///   infinite values
///
/// # Examples
/// ```
/// use currency_format::{format, with_cents, with_currency};
///
/// assert_eq!(format(1000.0, "USD", &[]).unwrap(), "$1,000.00");
/// assert_eq!(format(10.0, "USD", &[with_cents(false)]).unwrap(), "$10");
/// assert_eq!(format(10.0, "CAD", &[with_currency(true)]).unwrap(), "$10.00 CAD");
/// ```
pub fn format(amount: f64, code: &str, opts: &[FormatOption]) -> Result<String> {
    format_with_options(amount, code, &FormatOptions::resolve(opts))
}

/// Like [`format`], but an unknown currency code is an error
pub fn format_strict(amount: f64, code: &str, opts: &[FormatOption]) -> Result<String> {
    check_amount(amount)?;
    let rule = strict_rule(code)?;
    Ok(render(amount, code, &rule, &FormatOptions::resolve(opts)))
}

/// Format with already resolved options
pub fn format_with_options(amount: f64, code: &str, options: &FormatOptions) -> Result<String> {
    check_amount(amount)?;
    let rule = currency::rule_or_neutral(code);
    Ok(render(amount, code, &rule, options))
}

/// Format with sparse overrides; the currency comes from the overrides
/// (`"USD"` when absent)
///
/// # Examples
/// ```
/// use currency_format::{format_with_overrides, OptionOverrides};
///
/// let overrides = OptionOverrides {
///     currency: Some("eur".to_string()),
///     with_symbol_space: Some(true),
///     ..Default::default()
/// };
/// assert_eq!(format_with_overrides(10.0, &overrides).unwrap(), "€ 10.00");
/// ```
pub fn format_with_overrides(amount: f64, overrides: &OptionOverrides) -> Result<String> {
    format_with_options(amount, overrides.currency_code(), &overrides.resolve())
}

/// Like [`format_with_overrides`], but an unknown currency code is an error
pub fn format_with_overrides_strict(amount: f64, overrides: &OptionOverrides) -> Result<String> {
    check_amount(amount)?;
    let code = overrides.currency_code();
    let rule = strict_rule(code)?;
    Ok(render(amount, code, &rule, &overrides.resolve()))
}

fn check_amount(amount: f64) -> Result<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(FormatError::InvalidAmount(amount))
    }
}

fn strict_rule(code: &str) -> Result<CurrencyRule> {
    currency::lookup(code).ok_or_else(|| FormatError::UnknownCurrency(code.to_string()))
}

/// Compose the final string for a finite amount
fn render(amount: f64, code: &str, rule: &CurrencyRule, options: &FormatOptions) -> String {
    tracing::trace!(code, ?options, "formatting amount");

    let split = split_value(amount);

    let mut result = if options.with_thousands_separator {
        group_thousands(&split.integer_digits, &rule.thousands_separator)
    } else {
        split.integer_digits.clone()
    };

    // Currencies without a sub-unit never show cents, whatever the options say
    if options.with_cents && rule.has_sub_unit() {
        result.push_str(&rule.decimal_mark);
        result.push_str(&split.fractional);
    }

    if options.with_symbol {
        result = attach_symbol(&result, rule, options);
    }

    if options.with_currency {
        result.push(' ');
        result.push_str(&currency::normalize_code(code));
    }

    format!("{}{}", split.sign(), result)
}
