// CSV input: streams data rows as Records keyed by the header row.
// Rows shorter than the header leave the trailing columns absent, which the
// renderer later turns into NULL.

use std::path::Path;

use crate::logger;
use crate::seed::Record;

// Read a CSV file and hand each data row to the caller as a Record.
// Returns the number of records produced. A structurally broken row or an
// encoding error aborts the whole read; there is no row-skip recovery.
pub fn read_records<F>(
    path: &Path,
    mut on_record: F,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>
where
    F: FnMut(Record),
{
    logger::debug(&format!("read_records: opening {}", path.display()));

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;

    let headers = reader.headers()?.clone();
    logger::debug(&format!(
        "read_records: {} columns in header of {}",
        headers.len(),
        path.display()
    ));

    let mut count = 0usize;
    for result in reader.records() {
        let row = result.map_err(|e| format!("bad row in {}: {}", path.display(), e))?;
        let mut record = Record::new();
        for (column, value) in headers.iter().zip(row.iter()) {
            record.set(column, value);
        }
        on_record(record);
        count += 1;
    }

    logger::debug(&format!(
        "read_records: {} records from {}",
        count,
        path.display()
    ));
    Ok(count)
}
