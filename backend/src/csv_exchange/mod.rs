//! CSV bulk data exchange for back-office entities.
//!
//! Two symmetric directions share one column contract per entity kind:
//!
//! - `importer::import` turns an uploaded file into typed records. The header
//!   must carry exactly the declared columns (any order, any letter case);
//!   anything else is rejected with an `ImportError` describing what was
//!   found and what was expected.
//!
//! - `CsvExporter` writes either a template (declared header plus one sample
//!   row) or a full export (`ID` plus the declared header, one row per
//!   record) and hands back an `ExportArtifact` the caller must consume.
//!
//! The contracts themselves live in `schema` as static data, and `record`
//! binds each record type from the `common` crate to its contract.

pub mod error;
pub mod exporter;
pub mod importer;
pub mod record;
pub mod schema;

pub use error::{ExportError, ImportError};
pub use exporter::{CsvExporter, ExportArtifact};
pub use importer::{has_csv_format, import};
pub use record::TabularRecord;
