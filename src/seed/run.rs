// Run orchestrator: walks the configured tables in declaration order and
// appends one output block per table to a single SQL file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::TableSpec;
use crate::logger;
use crate::progress::ProgressManager;
use crate::seed::{reader, render};

// Totals for the completion summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub tables_written: usize,
    pub tables_skipped: usize,
    pub statements: usize,
}

// Generate the full seed SQL file. The output is truncated up front and
// written incrementally, one table at a time; a table whose CSV file is
// missing is skipped with a warning and leaves no trace in the output.
// Malformed CSV data aborts the run, keeping whatever was already written.
pub fn run_seed(
    specs: &[TableSpec],
    base_dir: &Path,
    output_path: &Path,
    progress: &ProgressManager,
) -> Result<RunSummary, Box<dyn std::error::Error + Send + Sync>> {
    let out = File::create(output_path)
        .map_err(|e| format!("cannot create {}: {}", output_path.display(), e))?;
    let mut out = BufWriter::new(out);

    let bar = progress.new_table_bar(specs.len() as u64);
    let mut summary = RunSummary::default();

    for spec in specs {
        let csv_path = base_dir.join(&spec.csv_path);

        if !csv_path.exists() {
            logger::warn(&format!(
                "CSV file not found at '{}'. Skipping table '{}'.",
                csv_path.display(),
                spec.table
            ));
            summary.tables_skipped += 1;
            if let Some(b) = &bar {
                b.inc(1);
            }
            continue;
        }

        logger::info(&format!(
            "Processing '{}' for table '{}'...",
            csv_path.display(),
            spec.table
        ));

        writeln!(out)?;
        writeln!(out, "-- Data for table: {}", spec.table)?;

        let mut write_err = None;
        let count = reader::read_records(&csv_path, |record| {
            if write_err.is_some() {
                return;
            }
            let statement = render::render_insert(spec, &record);
            if let Err(e) = writeln!(out, "{}", statement) {
                write_err = Some(e);
            }
        })?;
        if let Some(e) = write_err {
            return Err(Box::new(e));
        }

        if count == 0 {
            logger::info(&format!("CSV file was empty for table: {}.", spec.table));
        } else {
            logger::info(&format!(
                "Generated {} inserts for {}.",
                count, spec.table
            ));
        }
        summary.tables_written += 1;
        summary.statements += count;
        if let Some(b) = &bar {
            b.inc(1);
        }
    }

    if let Some(b) = &bar {
        b.finish();
    }
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableSpec;
    use std::fs;

    fn spec(table: &str, csv_path: &str, columns: &[&str]) -> TableSpec {
        TableSpec {
            table: table.to_string(),
            csv_path: csv_path.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn quiet_progress() -> ProgressManager {
        ProgressManager::new(false)
    }

    #[test]
    fn missing_csv_skips_the_table_without_a_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("a.csv"), "id\n1\n").expect("write csv");

        let specs = vec![
            spec("present", "a.csv", &["id"]),
            spec("ghost", "missing.csv", &["id"]),
        ];
        let output = dir.path().join("seed.sql");
        let summary =
            run_seed(&specs, dir.path(), &output, &quiet_progress()).expect("run");

        assert_eq!(summary.tables_written, 1);
        assert_eq!(summary.tables_skipped, 1);

        let sql = fs::read_to_string(&output).expect("read output");
        assert!(sql.contains("-- Data for table: present"));
        assert!(!sql.contains("ghost"));
    }

    #[test]
    fn empty_csv_writes_header_comment_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("empty.csv"), "id,name\n").expect("write csv");

        let specs = vec![spec("empty_table", "empty.csv", &["id", "name"])];
        let output = dir.path().join("seed.sql");
        let summary =
            run_seed(&specs, dir.path(), &output, &quiet_progress()).expect("run");

        assert_eq!(summary.statements, 0);
        let sql = fs::read_to_string(&output).expect("read output");
        assert!(sql.contains("-- Data for table: empty_table"));
        assert!(!sql.contains("INSERT INTO"));
    }

    #[test]
    fn statements_follow_record_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("t.csv"), "id\n3\n1\n2\n").expect("write csv");

        let specs = vec![spec("t", "t.csv", &["id"])];
        let output = dir.path().join("seed.sql");
        run_seed(&specs, dir.path(), &output, &quiet_progress()).expect("run");

        let sql = fs::read_to_string(&output).expect("read output");
        let positions: Vec<usize> = ["('3')", "('1')", "('2')"]
            .iter()
            .map(|needle| sql.find(needle).expect("statement present"))
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn rerun_is_byte_identical() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("t.csv"),
            "name,note\nO'Brien,\nRuth,slugger\n",
        )
        .expect("write csv");

        let specs = vec![spec("players", "t.csv", &["name", "note"])];
        let first = dir.path().join("first.sql");
        let second = dir.path().join("second.sql");
        run_seed(&specs, dir.path(), &first, &quiet_progress()).expect("first run");
        run_seed(&specs, dir.path(), &second, &quiet_progress()).expect("second run");

        let a = fs::read(&first).expect("read first");
        let b = fs::read(&second).expect("read second");
        assert_eq!(a, b);
    }

    #[test]
    fn output_is_truncated_between_runs() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("t.csv"), "id\n1\n").expect("write csv");
        let output = dir.path().join("seed.sql");
        fs::write(&output, "-- stale content from an earlier run\n").expect("seed stale");

        let specs = vec![spec("t", "t.csv", &["id"])];
        run_seed(&specs, dir.path(), &output, &quiet_progress()).expect("run");

        let sql = fs::read_to_string(&output).expect("read output");
        assert!(!sql.contains("stale content"));
        assert!(sql.contains("INSERT INTO t (id) VALUES ('1');"));
    }
}
