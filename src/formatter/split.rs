//! Splitting an amount into sign, integer digits and two fractional digits

/// An amount decomposed for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitValue {
    /// Whether the amount was below zero
    pub negative: bool,
    /// Whole units of the absolute value as decimal digits
    pub integer_digits: String,
    /// Fractional remainder rounded to exactly two digits
    pub fractional: String,
}

impl SplitValue {
    /// "-" for negative amounts, "" otherwise
    pub fn sign(&self) -> &'static str {
        if self.negative { "-" } else { "" }
    }
}

/// Split a finite amount into its display parts
///
/// The fractional remainder is rounded half away from zero; a remainder that
/// rounds up to a full unit carries into the integer digits.
///
/// # Examples
/// ```
/// use currency_format::formatter::split::split_value;
///
/// let split = split_value(-1234.5);
/// assert_eq!(split.sign(), "-");
/// assert_eq!(split.integer_digits, "1234");
/// assert_eq!(split.fractional, "50");
/// ```
pub fn split_value(amount: f64) -> SplitValue {
    let negative = amount < 0.0;
    let abs_value = amount.abs();

    let mut integer_part = abs_value.trunc();
    let mut cents = (abs_value.fract() * 100.0).round();
    if cents >= 100.0 {
        integer_part += 1.0;
        cents = 0.0;
    }

    SplitValue {
        negative,
        // {:.0} prints the exact integer value without an upper bound on width
        integer_digits: format!("{:.0}", integer_part),
        fractional: format!("{:02}", cents as u8),
    }
}
