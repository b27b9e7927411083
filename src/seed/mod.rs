// Seed pipeline: CSV rows in, INSERT statements out.

pub mod reader;
pub mod render;
pub mod run;

use std::collections::HashMap;

// One CSV data row, keyed by header column name. A column that was not
// present in the row at all is simply absent from the map, which keeps
// "missing field" distinct from "empty string" (both render as NULL, but
// only because the renderer says so, not because they are conflated here).
#[derive(Debug, Clone, Default)]
pub struct Record {
    data: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    // Insert a field value under its header name.
    pub fn set(&mut self, column: &str, value: &str) {
        self.data.insert(column.to_string(), value.to_string());
    }

    // Look up a field by column name. None means the column was missing
    // from the row, not that it was blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_fields_are_distinguishable() {
        let mut record = Record::new();
        record.set("name", "");
        assert_eq!(record.get("name"), Some(""));
        assert_eq!(record.get("missing"), None);
    }
}
