use crate::csv_exchange::error::ExportError;
use crate::csv_exchange::record::TabularRecord;
use crate::csv_exchange::schema::SchemaDescriptor;
use chrono::{Local, NaiveDate};
use csv::{Terminator, Writer, WriterBuilder};
use log::{info, warn};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// A CSV file produced by `CsvExporter`.
///
/// The exporter never removes what it wrote; whoever holds the artifact is
/// responsible for it, usually through `consume`.
#[derive(Debug)]
pub struct ExportArtifact {
    path: PathBuf,
    file_name: String,
}

impl ExportArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Suggested download name, e.g. `apartment_2024-05-01.csv`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Reads the whole file into memory and deletes it.
    pub fn consume(self) -> io::Result<Vec<u8>> {
        let bytes = fs::read(&self.path)?;
        fs::remove_file(&self.path)?;
        Ok(bytes)
    }
}

/// Writes template and full-data CSV exports into one directory.
///
/// Template exports always land in `<kind>_template.csv` and full exports in
/// `<kind>_<date>.csv`, so two exports of the same kind on the same day
/// overwrite each other. Callers that need isolation give each export its own
/// directory.
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        CsvExporter {
            output_dir: output_dir.into(),
        }
    }

    /// Exports `records`, or the template when `template` is set, dating the
    /// file with today's local date.
    pub fn export<R: TabularRecord>(
        &self,
        records: &[R],
        template: bool,
    ) -> Result<ExportArtifact, ExportError> {
        self.export_dated(records, template, Local::now().date_naive())
    }

    pub fn export_dated<R: TabularRecord>(
        &self,
        records: &[R],
        template: bool,
        date: NaiveDate,
    ) -> Result<ExportArtifact, ExportError> {
        let descriptor = R::descriptor();
        let file_name = if template {
            descriptor.template_file_name()
        } else {
            descriptor.dated_file_name(date)
        };
        let path = self.output_dir.join(&file_name);

        let written = if template {
            write_template(&path, descriptor)
        } else {
            write_records(&path, descriptor, records)
        };

        match written {
            Ok(()) => {
                if template {
                    info!("Wrote {} template to {}", R::KIND, path.display());
                } else {
                    info!(
                        "Exported {} {} record(s) to {}",
                        records.len(),
                        R::KIND,
                        path.display()
                    );
                }
                Ok(ExportArtifact { path, file_name })
            }
            Err(e) => {
                warn!("Export to {} failed: {}", path.display(), e);
                // the half-written file must not outlive the failure
                let _ = fs::remove_file(&path);
                Err(ExportError::WriteFailed {
                    file_name,
                    cause: e.to_string(),
                })
            }
        }
    }
}

/// Spreadsheet dialect: comma separated, quoted only when needed, CRLF rows.
fn spreadsheet_writer(path: &Path) -> csv::Result<Writer<File>> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(path)
}

fn write_template(path: &Path, descriptor: &SchemaDescriptor) -> csv::Result<()> {
    let mut writer = spreadsheet_writer(path)?;
    writer.write_record(descriptor.columns)?;
    writer.write_record(descriptor.sample_row)?;
    writer.flush()?;
    Ok(())
}

fn write_records<R: TabularRecord>(
    path: &Path,
    descriptor: &SchemaDescriptor,
    records: &[R],
) -> csv::Result<()> {
    let mut writer = spreadsheet_writer(path)?;
    writer.write_record(descriptor.export_header())?;
    for record in records {
        let id = record.id().unwrap_or("");
        writer.write_record(std::iter::once(id).chain(record.values()))?;
    }
    writer.flush()?;
    Ok(())
}
