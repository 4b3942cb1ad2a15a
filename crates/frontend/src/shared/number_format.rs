//! Price formatting for product cards.
//!
//! Grid cards and the favorites panel deliberately use different formats:
//! grid cards show `Rs.3,500.00`, favorites rows show `Rs 3,500`.

const THOUSANDS_SEPARATOR: char = ',';

/// Вставляет разделитель каждые 3 цифры с конца целой части
fn group_thousands(integer_part: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(THOUSANDS_SEPARATOR);
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Grouped number with at most three fraction digits, trailing zeros dropped.
///
/// # Примеры
///
/// ```
/// use storefront::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234567.5), "1,234,567.5");
/// ```
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.3}", value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let grouped = group_thousands(integer_part);
    if decimal_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, decimal_part)
    }
}

/// Rounded, grouped integer.
pub fn format_grouped_int(value: f64) -> String {
    group_thousands(&format!("{:.0}", value))
}

/// Price label on shop and home cards.
pub fn format_card_price(value: f64) -> String {
    format!("Rs.{}.00", format_grouped_int(value))
}

/// Price label in the favorites panel.
pub fn format_favorite_price(value: f64) -> String {
    format!("Rs {}", format_grouped(value))
}
