use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a gas bill amount cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid gas bill '{input}': expected a whole number of pesos")]
pub struct ParseGasBillError {
    input: String,
}

/// Normalizes input for number parsing: trims whitespace, a leading `$`
/// and commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a monthly gas bill such as `"1,200"` or `"$800"` into whole pesos.
///
/// Range checks are left to the wizard so that out-of-range amounts are
/// reported as a validation failure on the gas bill step.
pub fn parse_gas_bill(s: &str) -> Result<u32, ParseGasBillError> {
    normalize_number_input(s).parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid gas bill: {}", e);
        ParseGasBillError {
            input: s.to_string(),
        }
    })
}

/// Formats a number with es-MX digit grouping (`18000` → `"18,000"`).
///
/// Fractional digits, if any, are kept after a `.` without trailing zeros.
pub fn format_grouped(value: Decimal) -> String {
    let normalized = value.normalize();
    let digits = normalized.abs().trunc().to_string();
    let fraction = normalized.abs().fract();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if !fraction.is_zero() {
        let fraction = fraction.to_string();
        grouped.push_str(fraction.trim_start_matches('0'));
    }

    if normalized.is_sign_negative() && !normalized.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a peso amount for display (`-5760` → `"-$5,760"`).
pub fn format_currency(value: Decimal) -> String {
    let grouped = format_grouped(value);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${grouped}"),
    }
}
