//! Thousands grouping of integer digit strings

/// Insert `separator` every three digits counted from the right
///
/// Inputs of up to three characters are returned unchanged.
///
/// # Examples
/// ```
/// use currency_format::formatter::grouping::group_thousands;
///
/// assert_eq!(group_thousands("1234567891", ","), "1,234,567,891");
/// assert_eq!(group_thousands("123", ","), "123");
/// ```
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() <= 3 {
        return digits.to_string();
    }

    // Leading group holds the 1-3 digits left over after full groups
    let head = match chars.len() % 3 {
        0 => 3,
        n => n,
    };
    let (first, rest) = chars.split_at(head);

    let mut result =
        String::with_capacity(digits.len() + (chars.len() - 1) / 3 * separator.len());
    result.extend(first);
    for group in rest.chunks(3) {
        result.push_str(separator);
        result.extend(group);
    }

    result
}
