use currency_format::{
    FormatError, FormatOptions, format, format_strict, format_with_options, with_cents,
    with_currency, with_symbol, with_symbol_space, with_thousands_separator,
};

#[test]
fn test_basic_format() {
    assert_eq!(format(10.0, "USD", &[]).unwrap(), "$10.00");
    assert_eq!(format(10.0, "EUR", &[]).unwrap(), "€10.00");
    assert_eq!(format(1234.56, "GBP", &[]).unwrap(), "£1,234.56");
}

#[test]
fn test_negative_format() {
    assert_eq!(format(-10.0, "USD", &[]).unwrap(), "-$10.00");
    assert_eq!(format(-1234.5, "SEK", &[]).unwrap(), "-1 234,50kr");
    assert_eq!(
        format(-10.0, "USD", &[with_symbol_space(true), with_currency(true)]).unwrap(),
        "-$ 10.00 USD"
    );
}

#[test]
fn test_locale_separators() {
    assert_eq!(format(1234567.89, "BRL", &[]).unwrap(), "R$1.234.567,89");
    assert_eq!(format(1234567.89, "RUB", &[]).unwrap(), "1.234.567,89₽");
    assert_eq!(format(1234567.89, "PLN", &[]).unwrap(), "1 234 567,89zł");
    assert_eq!(
        format(1234567.89, "BRL", &[with_thousands_separator(false)]).unwrap(),
        "R$1234567,89"
    );
}

#[test]
fn test_currencies_without_sub_unit() {
    assert_eq!(format(10.0, "JPY", &[]).unwrap(), "¥10");
    assert_eq!(format(1_000_000.0, "JPY", &[]).unwrap(), "¥1,000,000");
    assert_eq!(format(50000.0, "KRW", &[]).unwrap(), "₩50,000");
    assert_eq!(format(1500.0, "CLP", &[with_cents(true)]).unwrap(), "$1.500");
}

#[test]
fn test_all_options_off() {
    let opts = [
        with_cents(false),
        with_symbol(false),
        with_thousands_separator(false),
    ];
    assert_eq!(format(1234567.0, "USD", &opts).unwrap(), "1234567");
}

#[test]
fn test_currency_suffix_uses_canonical_code() {
    assert_eq!(
        format(10.0, "cad", &[with_currency(true)]).unwrap(),
        "$10.00 CAD"
    );
}

#[test]
fn test_unknown_currency_is_permissive() {
    assert_eq!(format(1234.5, "XYZ", &[]).unwrap(), "1,234");
    assert_eq!(
        format(1234.5, "XYZ", &[with_currency(true)]).unwrap(),
        "1,234 XYZ"
    );
}

#[test]
fn test_unknown_currency_is_strict() {
    assert_eq!(
        format_strict(10.0, "XYZ", &[]),
        Err(FormatError::UnknownCurrency("XYZ".to_string()))
    );
    assert_eq!(format_strict(10.0, "usd", &[]).unwrap(), "$10.00");
}

#[test]
fn test_invalid_amounts() {
    for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = format(amount, "USD", &[]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidAmount(_)));
        assert!(err.to_string().contains("not a finite number"));
    }
}

#[test]
fn test_rounding() {
    assert_eq!(format(0.994, "USD", &[]).unwrap(), "$0.99");
    assert_eq!(format(0.996, "USD", &[]).unwrap(), "$1.00");
    assert_eq!(format(999.999, "USD", &[]).unwrap(), "$1,000.00");
    assert_eq!(format(0.05, "USD", &[]).unwrap(), "$0.05");
}

#[test]
fn test_round_trip_for_currencies_with_sub_unit() {
    let amounts = [0.0, 0.01, 0.5, 1.99, 10.0, 1234.56, 98765.43, 1_000_000.07];
    let options = FormatOptions::default()
        .with_symbol(false)
        .with_thousands_separator(false);

    for code in currency_format::currency::list_available_currencies() {
        let rule = currency_format::currency::lookup(&code).unwrap();
        if !rule.has_sub_unit() {
            continue;
        }
        for amount in amounts {
            let text = format_with_options(amount, &code, &options).unwrap();
            let parsed: f64 = text.replace(rule.decimal_mark.as_str(), ".").parse().unwrap();
            assert!(
                (parsed - amount).abs() < 0.005,
                "{} {} rendered as {}",
                code,
                amount,
                text
            );
        }
    }
}
