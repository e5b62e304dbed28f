//! CSV import and export endpoints for the back-office entities.
//!
//! Every route lives under `/api/{resource}`, where `resource` is one of
//! `customers`, `apartments`, `contracts` or `users`. Unknown resources are
//! answered with `404 Not Found`.
//!
//! The provided routes are:
//! - `POST /api/{resource}/import`: multipart upload. Every part named `file`
//!   must be sent as `text/csv`; all files are parsed in order against the
//!   resource's column contract and the combined records come back as a JSON
//!   array. A file with the wrong header (or a row that does not fit it)
//!   rejects the whole request with `400 Bad Request`.
//!
//! - `GET /api/{resource}/export/template`: downloads the template file, i.e.
//!   the expected header plus one sample row.
//!
//! - `POST /api/{resource}/export`: takes a JSON array of records and
//!   downloads them as CSV with a leading `ID` column.
//!
//! Downloads are written into a scratch directory of their own under the
//! configured export directory, read back into memory, and deleted before
//! the response is sent.

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::model::entity_kind::EntityKind;

/// Evaluates `$body` with `$record` aliased to the record type of `$kind`.
macro_rules! with_record_type {
    ($kind:expr, $record:ident => $body:expr) => {
        match $kind {
            common::model::entity_kind::EntityKind::Customer => {
                type $record = common::model::customer::CustomerRecord;
                $body
            }
            common::model::entity_kind::EntityKind::Apartment => {
                type $record = common::model::apartment::ApartmentRecord;
                $body
            }
            common::model::entity_kind::EntityKind::Contract => {
                type $record = common::model::contract::ContractRecord;
                $body
            }
            common::model::entity_kind::EntityKind::User => {
                type $record = common::model::user::UserRecord;
                $body
            }
        }
    };
}

mod error;
mod export;
mod import;
#[cfg(test)]
mod tests;

use error::EntityServiceError;

const API_PATH: &str = "/api/{resource}";

/// Configures and returns the Actix scope for entity import/export routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/import", post().to(import::process))
        .route("/export/template", get().to(export::process_template))
        .route("/export", post().to(export::process_records))
}

fn resolve_kind(resource: &str) -> Result<EntityKind, EntityServiceError> {
    EntityKind::from_resource(resource)
        .ok_or_else(|| EntityServiceError::UnknownResource(resource.to_string()))
}
