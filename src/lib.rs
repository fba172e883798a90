pub mod currency;
pub mod error;
pub mod formatter;
pub mod options;
pub mod types;

// Main API
pub use error::{FormatError, Result};
pub use formatter::{
    format, format_strict, format_with_options, format_with_overrides,
    format_with_overrides_strict,
};
pub use options::{
    with_cents, with_currency, with_symbol, with_symbol_space, with_thousands_separator,
};
pub use types::*;
