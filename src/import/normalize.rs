//! Turn raw spreadsheet rows into submittable JSON records

use calamine::Data;
use log::debug;
use serde_json::{Map, Value};

use crate::schema::{Category, FieldDef, FieldKind, LIST_DELIMITER};

/// A normalized record, keyed by schema field name, ready to POST.
pub type Record = Map<String, Value>;

/// Normalize raw rows against a category schema.
///
/// Cells bind to fields by column position. Rows where any required field
/// is empty after coercion are dropped; they are debug-logged but not
/// reported individually, so the only user-visible trace is a reduced
/// record total.
pub fn normalize_rows(category: Category, rows: &[Vec<Data>]) -> Vec<Record> {
    let schema = category.schema();
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let record = normalize_row(schema, row);
            if record.is_none() {
                // idx 0 is the first data row; +2 gives the 1-based
                // spreadsheet row number after the header.
                debug!("Skipping row {}: missing required fields", idx + 2);
            }
            record
        })
        .collect()
}

fn normalize_row(schema: &[FieldDef], row: &[Data]) -> Option<Record> {
    let mut record = Record::new();
    for (col, field) in schema.iter().enumerate() {
        let raw = cell_to_string(row.get(col));
        let value = coerce(field.kind, &raw);
        if field.required && !is_present(field.kind, &value) {
            return None;
        }
        record.insert(field.name.to_string(), value);
    }
    Some(record)
}

fn coerce(kind: FieldKind, raw: &str) -> Value {
    match kind {
        FieldKind::Text => Value::String(raw.trim().to_string()),
        FieldKind::Choice => {
            // Single-valued field: tolerate accidental "A&B" input by
            // keeping only the first segment.
            let first = raw.split(LIST_DELIMITER).next().unwrap_or("");
            Value::String(first.trim().to_string())
        }
        FieldKind::Number => {
            // Unparseable input coerces to 0 rather than rejecting the
            // row. Longstanding admin-upload behavior; keep it.
            let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
            number_value(parsed)
        }
        FieldKind::List => {
            let parts: Vec<Value> = raw
                .split(LIST_DELIMITER)
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| Value::String(part.to_string()))
                .collect();
            Value::Array(parts)
        }
    }
}

fn is_present(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Text | FieldKind::Choice => {
            value.as_str().is_some_and(|s| !s.is_empty())
        }
        FieldKind::Number => value.as_f64().is_some_and(|n| n != 0.0),
        FieldKind::List => value.as_array().is_some_and(|a| !a.is_empty()),
    }
}

/// Whole numbers serialize as integers so ticket sizes round-trip without
/// a trailing `.0`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

fn cell_to_string(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Some(Data::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
