use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use salon_client_core::format::{
    format_currency, format_date, format_naive_date, format_number, gregorian_to_jalali, to_persian_digits,
};
use salon_client_core::FormatError;

#[test]
fn integers_get_persian_digits_and_grouping() {
    assert_eq!(format_number(0.0), "۰");
    assert_eq!(format_number(234.0), "۲۳۴");
    assert_eq!(format_number(1000.0), "۱٬۰۰۰");
    assert_eq!(format_number(1_200_000.0), "۱٬۲۰۰٬۰۰۰");
}

#[test]
fn fractions_are_trimmed_to_three_digits() {
    assert_eq!(format_number(4.8), "۴٫۸");
    assert_eq!(format_number(1234.5678), "۱٬۲۳۴٫۵۶۸");
    assert_eq!(format_number(2.0004), "۲");
}

#[test]
fn negatives_use_minus_sign() {
    assert_eq!(format_number(-1500.0), "\u{200E}\u{2212}۱٬۵۰۰");
    assert_eq!(format_number(-0.0), "۰");
}

#[test]
fn non_finite_values() {
    assert_eq!(format_number(f64::NAN), "ناعدد");
    assert_eq!(format_number(f64::INFINITY), "∞");
}

#[test]
fn currency_appends_toman() {
    assert_eq!(format_currency(2_450_000.0), "۲٬۴۵۰٬۰۰۰ تومان");
}

#[test]
fn jalali_conversion_known_dates() {
    assert_eq!(gregorian_to_jalali(2024, 3, 20), (1403, 1, 1));
    assert_eq!(gregorian_to_jalali(2025, 3, 21), (1404, 1, 1));
    assert_eq!(gregorian_to_jalali(2024, 10, 19), (1403, 7, 28));
    assert_eq!(gregorian_to_jalali(2000, 1, 1), (1378, 10, 11));
}

#[test]
fn dates_format_as_solar_hijri() {
    assert_eq!(format_date("2024-10-19").unwrap(), "۱۴۰۳/۷/۲۸");
    assert_eq!(format_date("2024-03-20T10:30:00+03:30").unwrap(), "۱۴۰۳/۱/۱");
    assert_eq!(
        format_naive_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()),
        "۱۳۷۸/۱۰/۱۱"
    );
}

#[test]
fn malformed_dates_are_errors() {
    assert_eq!(
        format_date("yesterday"),
        Err(FormatError::InvalidDate("yesterday".to_string()))
    );
    assert!(format_date("2024-13-01").is_err());
}

#[test]
fn digit_conversion_leaves_other_chars() {
    assert_eq!(to_persian_digits("10:00 - ab"), "۱۰:۰۰ - ab");
}

#[test]
fn large_values_keep_every_digit() {
    assert_eq!(format_number(1e17), "۱۰۰٬۰۰۰٬۰۰۰٬۰۰۰٬۰۰۰٬۰۰۰");
    assert_eq!(format_number(-1e17), "\u{200E}\u{2212}۱۰۰٬۰۰۰٬۰۰۰٬۰۰۰٬۰۰۰٬۰۰۰");
    assert_eq!(format_currency(1e18), "۱٬۰۰۰٬۰۰۰٬۰۰۰٬۰۰۰٬۰۰۰٬۰۰۰ تومان");
}
