// Table configuration: which tables to seed, from which CSV files, with
// which columns. The list is built once at startup and never mutated, so
// the run order is always the declaration order.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

// One output table: its name, the CSV file that feeds it, and the column
// names in the order they must appear in the generated INSERT statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    pub table: String,
    pub csv_path: String,
    pub columns: Vec<String>,
}

// Load table specifications from a JSON config file. The file holds an
// array of specs; array order defines processing order.
pub fn load_config(
    path: &Path,
) -> Result<Vec<TableSpec>, Box<dyn std::error::Error + Send + Sync>> {
    let file = File::open(path)
        .map_err(|e| format!("cannot open config {}: {}", path.display(), e))?;
    let specs: Vec<TableSpec> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("invalid config {}: {}", path.display(), e))?;
    Ok(specs)
}

// Built-in configuration matching the seed data layout this tool was
// written for. Used when no --config file is given.
pub fn default_tables() -> Vec<TableSpec> {
    vec![
        TableSpec {
            table: "page_images".to_string(),
            csv_path: "db-seed-data/page_images.csv".to_string(),
            columns: vec![
                "page_id".to_string(),
                "img_file_name".to_string(),
                "publish_date".to_string(),
                "column_type".to_string(),
                "page_type".to_string(),
                "special_name".to_string(),
                "column_id".to_string(),
            ],
        },
        TableSpec {
            table: "columns_meta_data".to_string(),
            csv_path: "db-seed-data/columns_meta_data.csv".to_string(),
            columns: vec![
                "column_id".to_string(),
                "publish_date".to_string(),
                "column_type".to_string(),
                "special_name".to_string(),
                "first_img_file_name".to_string(),
                "column_title".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_file_preserves_declaration_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tables.json");
        let mut f = File::create(&path).expect("create config");
        write!(
            f,
            r#"[
                {{"table": "b_second", "csv_path": "b.csv", "columns": ["x"]}},
                {{"table": "a_first", "csv_path": "a.csv", "columns": ["y", "z"]}}
            ]"#
        )
        .expect("write config");

        let specs = load_config(&path).expect("load config");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].table, "b_second");
        assert_eq!(specs[1].table, "a_first");
        assert_eq!(specs[1].columns, vec!["y", "z"]);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_config(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("cannot open config"));
    }

    #[test]
    fn default_tables_cover_both_seed_csvs() {
        let specs = default_tables();
        assert_eq!(specs[0].table, "page_images");
        assert_eq!(specs[1].table, "columns_meta_data");
        assert!(specs.iter().all(|s| !s.columns.is_empty()));
    }
}
