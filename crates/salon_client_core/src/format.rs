//! fa-IR number, currency and date formatting, matching what the browser's
//! `Intl` formatters print for the `fa-IR` locale.

use crate::error::FormatError;
use chrono::{DateTime, Datelike, NaiveDate};

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const GROUP_SEPARATOR: char = '\u{066C}';
const DECIMAL_SEPARATOR: char = '\u{066B}';
const NEGATIVE_PREFIX: &str = "\u{200E}\u{2212}";
const MAX_FRACTION_DIGITS: usize = 3;

pub const CURRENCY_SUFFIX: &str = " تومان";

/// Replaces ASCII digits with Persian digits; everything else passes through.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// `1200000` -> `۱٬۲۰۰٬۰۰۰`, `4.8` -> `۴٫۸`. At most three fraction digits.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "ناعدد".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { format!("{}∞", NEGATIVE_PREFIX) } else { "∞".to_string() };
    }

    // Exact decimal expansion of the f64; no integer cast, so large values keep their digits.
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (!fraction.is_empty() || integer.bytes().any(|b| b != b'0')) {
        out.push_str(NEGATIVE_PREFIX);
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    to_persian_digits(&out)
}

/// Amount in tomans: `۲٬۴۵۰٬۰۰۰ تومان`.
pub fn format_currency(amount: f64) -> String {
    format!("{}{}", format_number(amount), CURRENCY_SUFFIX)
}

/// Accepts `YYYY-MM-DD` or RFC 3339 and prints the Solar Hijri date, e.g. `۱۴۰۳/۷/۲۸`.
pub fn format_date(input: &str) -> Result<String, FormatError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| FormatError::InvalidDate(input.to_string()))?;
    Ok(format_naive_date(date))
}

pub fn format_naive_date(date: NaiveDate) -> String {
    let (y, m, d) = gregorian_to_jalali(date.year() as i64, date.month() as i64, date.day() as i64);
    to_persian_digits(&format!("{}/{}/{}", y, m, d))
}

/// Gregorian -> Solar Hijri (Jalali) calendar, as (year, month, day).
pub fn gregorian_to_jalali(gy: i64, gm: i64, gd: i64) -> (i64, i64, i64) {
    const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd
        + DAYS_BEFORE_MONTH[(gm - 1) as usize];
    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }
    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };
    (jy, jm, jd)
}
