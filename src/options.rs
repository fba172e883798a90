//! Option resolution
//!
//! Options start from [`FormatOptions::default`] and are changed either by an
//! ordered list of [`FormatOption`] instructions or by a sparse
//! [`OptionOverrides`] record. Both always yield a complete `FormatOptions`.

use crate::types::{FormatOption, FormatOptions, OptionOverrides};

/// Currency used by [`OptionOverrides`] when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

/// Should display cents or not (default true)
pub fn with_cents(val: bool) -> FormatOption {
    FormatOption::Cents(val)
}

/// Should append the currency code or not (default false)
pub fn with_currency(val: bool) -> FormatOption {
    FormatOption::Currency(val)
}

/// Should display the symbol or not (default true)
pub fn with_symbol(val: bool) -> FormatOption {
    FormatOption::Symbol(val)
}

/// Should add a space between symbol and number or not (default false)
pub fn with_symbol_space(val: bool) -> FormatOption {
    FormatOption::SymbolSpace(val)
}

/// Should group thousands or not (default true)
pub fn with_thousands_separator(val: bool) -> FormatOption {
    FormatOption::ThousandsSeparator(val)
}

impl FormatOption {
    /// Write this instruction's field into `options`
    pub fn apply(&self, options: &mut FormatOptions) {
        match *self {
            FormatOption::Cents(val) => options.with_cents = val,
            FormatOption::Currency(val) => options.with_currency = val,
            FormatOption::Symbol(val) => options.with_symbol = val,
            FormatOption::SymbolSpace(val) => options.with_symbol_space = val,
            FormatOption::ThousandsSeparator(val) => options.with_thousands_separator = val,
        }
    }
}

impl FormatOptions {
    /// Defaults with `opts` applied in order; later instructions win
    pub fn resolve(opts: &[FormatOption]) -> Self {
        let mut options = Self::default();
        for opt in opts {
            opt.apply(&mut options);
        }
        options
    }
}

impl OptionOverrides {
    /// Merge the present fields over `base`
    pub fn apply_to(&self, base: FormatOptions) -> FormatOptions {
        FormatOptions {
            with_cents: self.with_cents.unwrap_or(base.with_cents),
            with_currency: self.with_currency.unwrap_or(base.with_currency),
            with_symbol: self.with_symbol.unwrap_or(base.with_symbol),
            with_symbol_space: self.with_symbol_space.unwrap_or(base.with_symbol_space),
            with_thousands_separator: self
                .with_thousands_separator
                .unwrap_or(base.with_thousands_separator),
        }
    }

    /// Merge the present fields over the defaults
    pub fn resolve(&self) -> FormatOptions {
        self.apply_to(FormatOptions::default())
    }

    /// The requested currency code, or [`DEFAULT_CURRENCY`]
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}
