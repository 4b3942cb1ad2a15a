//! Разбор CSV-выгрузки опубликованной таблицы в записи товаров.
//!
//! Формат простой: первая строка - заголовки, дальше по одной записи на
//! строку, разделитель - запятая. Кавычки и экранирование не поддерживаются:
//! запятая внутри значения разрежет ячейку на две. Это известное ограничение
//! формата выгрузки, а не ошибка разбора.
//!
//! Разбор никогда не падает: нечисловые `id`/`price` становятся `0`,
//! недостающие ячейки - пустыми строками.

use super::aggregate::ProductRecord;
use csv::{ReaderBuilder, StringRecord, Trim};

const DELIMITER: u8 = b',';

/// Parses raw sheet text into records, preserving row order.
pub fn parse_records(raw: &str) -> Vec<ProductRecord> {
    // Strip UTF-8 BOM if present
    let text = raw.trim_start_matches('\u{FEFF}');

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .delimiter(DELIMITER)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            log::warn!("Failed to read sheet headers: {}", e);
            return Vec::new();
        }
    };

    reader
        .records()
        .filter_map(|result| match result {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("Skipping malformed sheet row: {}", e);
                None
            }
        })
        // строка из одних пробелов читается как одна пустая ячейка
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .map(|row| record_from_row(&headers, &row))
        .collect()
}

fn record_from_row(headers: &StringRecord, row: &StringRecord) -> ProductRecord {
    let mut record = ProductRecord::default();

    for (idx, header) in headers.iter().enumerate() {
        let value = row.get(idx).unwrap_or("");

        match header {
            "id" => record.id = lenient_number(value) as i64,
            "price" => record.price = lenient_number(value),
            "category" => record.category = value.to_string(),
            "name" => record.name = value.to_string(),
            "image" => record.image = value.to_string(),
            "" => {}
            other => {
                record.extra.insert(other.to_string(), value.to_string());
            }
        }
    }

    record
}

/// Converts the leading decimal literal of `value` to a number.
///
/// Trailing garbage is ignored (`"12px"` is `12`); a value without a leading
/// number is `0`.
pub fn lenient_number(value: &str) -> f64 {
    let bytes = value.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return 0.0;
    }
    let mut end = i;

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    match value[..end].parse::<f64>() {
        // -0 и бесконечности приводим к нулю
        Ok(n) if n.is_finite() && n != 0.0 => n,
        _ => 0.0,
    }
}
