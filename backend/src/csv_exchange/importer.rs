use crate::csv_exchange::error::ImportError;
use crate::csv_exchange::record::TabularRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::collections::HashMap;

/// The only content type accepted for uploads.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Returns `true` when an upload declares itself as CSV.
pub fn has_csv_format(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.trim().eq_ignore_ascii_case(CSV_CONTENT_TYPE))
        .unwrap_or(false)
}

/// Parses an uploaded CSV file into records of type `R`.
///
/// The first record is the header. Its cells are trimmed and matched against
/// the declared columns of `R` ignoring case and order; the file must carry
/// exactly those columns and nothing else. Every following row is then read
/// by column name, so the resulting records always hold values in declared
/// order regardless of how the file laid them out. Values are trimmed too,
/// quoted ones included.
///
/// A row that does not have one value per header cell fails the whole
/// import with `ImportError::HeaderMismatch`; no partial list is returned.
pub fn import<R: TabularRecord>(bytes: &[u8], file_name: &str) -> Result<Vec<R>, ImportError> {
    let descriptor = R::descriptor();

    let text = std::str::from_utf8(bytes).map_err(|e| {
        warn!("{}: upload is not valid UTF-8", file_name);
        ImportError::Unreadable {
            file_name: file_name.to_string(),
            reason: e.to_string(),
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let observed: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::Unreadable {
            file_name: file_name.to_string(),
            reason: e.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mismatch = || ImportError::HeaderMismatch {
        file_name: file_name.to_string(),
        observed: observed.clone(),
        expected: descriptor.expected_columns(),
    };

    let positions = match column_positions(descriptor.columns, &observed) {
        Some(positions) => positions,
        None => {
            warn!(
                "{}: header {:?} does not match the {} columns",
                file_name, observed, R::KIND
            );
            return Err(mismatch());
        }
    };

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let line = index + 2;
        let row = row.map_err(|e| {
            debug!("{}: line {} rejected: {}", file_name, line, e);
            mismatch()
        })?;

        let values = positions
            .iter()
            .map(|&position| row.get(position).map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                debug!("{}: line {} is missing columns", file_name, line);
                mismatch()
            })?;

        records.push(R::from_values(values));
    }

    info!(
        "Imported {} {} record(s) from {}",
        records.len(),
        R::KIND,
        file_name
    );
    Ok(records)
}

/// Resolves, for each declared column, the index of the observed header cell
/// carrying it. `None` unless the observed header is exactly the declared set.
fn column_positions(declared: &[&str], observed: &[String]) -> Option<Vec<usize>> {
    if observed.len() != declared.len() {
        return None;
    }

    let by_name: HashMap<String, usize> = observed
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.to_lowercase(), idx))
        .collect();

    declared
        .iter()
        .map(|column| by_name.get(&column.to_lowercase()).copied())
        .collect()
}
