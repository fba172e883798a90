//! Error type for currency formatting

use std::fmt;

/// Error type for formatting operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The currency code is not in the rule table (strict formatting only)
    UnknownCurrency(String),
    /// The amount is NaN or infinite
    InvalidAmount(f64),
    /// The embedded currency table could not be parsed
    RuleTable(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownCurrency(code) => write!(f, "Unknown currency code: {}", code),
            FormatError::InvalidAmount(amount) => {
                write!(f, "Invalid amount: {} is not a finite number", amount)
            }
            FormatError::RuleTable(msg) => write!(f, "Error parsing currency table: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

pub type Result<T> = std::result::Result<T, FormatError>;
