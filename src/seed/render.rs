// Rendering of records into SQL INSERT statements.
// The quoting rules match what SQLite/D1 expects: blank fields become NULL
// rather than empty strings, and single quotes are doubled.

use crate::config::TableSpec;
use crate::seed::Record;

// Quote a single value for embedding in a VALUES list. Absent values and
// whitespace-only values both render as the NULL token; everything else is
// wrapped in single quotes with embedded quotes doubled.
pub fn quote_value(value: Option<&str>) -> String {
    match value {
        None => "NULL".to_string(),
        Some(v) if v.trim().is_empty() => "NULL".to_string(),
        Some(v) => format!("'{}'", v.replace('\'', "''")),
    }
}

// Build one INSERT statement for a record. Values are looked up by the
// spec's declared column names, in declared order, regardless of the order
// the CSV happened to store them in.
pub fn render_insert(spec: &TableSpec, record: &Record) -> String {
    let columns = spec.columns.join(", ");
    let values = spec
        .columns
        .iter()
        .map(|col| quote_value(record.get(col)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO {} ({}) VALUES ({});", spec.table, columns, values)
}
