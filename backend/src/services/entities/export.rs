use super::error::EntityServiceError;
use super::resolve_kind;
use crate::config::AppConfig;
use crate::csv_exchange::{CsvExporter, ExportArtifact, ExportError, TabularRecord};
use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Bytes of a consumed export plus the name to download them under.
struct Download {
    file_name: String,
    bytes: Vec<u8>,
}

/// Handler for `GET /api/{resource}/export/template`.
pub(crate) async fn process_template(
    resource: web::Path<String>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    respond(
        &resource,
        export_template(&resource, config.export_dir.clone()).await,
    )
}

/// Handler for `POST /api/{resource}/export`; the body is a JSON array of
/// records of the resource's type.
pub(crate) async fn process_records(
    resource: web::Path<String>,
    body: web::Bytes,
    config: web::Data<AppConfig>,
) -> impl Responder {
    respond(
        &resource,
        export_records(&resource, body, config.export_dir.clone()).await,
    )
}

fn respond(resource: &str, result: Result<Download, EntityServiceError>) -> HttpResponse {
    match result {
        Ok(download) => HttpResponse::Ok()
            .content_type(ContentType::octet_stream())
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(download.file_name)],
            })
            .body(download.bytes),
        Err(e) => {
            warn!("Export of {} failed: {}", resource, e);
            HttpResponse::build(e.status_code()).body(format!("Error: {}", e))
        }
    }
}

async fn export_template(
    resource: &str,
    export_dir: PathBuf,
) -> Result<Download, EntityServiceError> {
    let kind = resolve_kind(resource)?;
    run_export(export_dir, move |exporter| {
        with_record_type!(kind, R => exporter.export::<R>(&[], true))
    })
    .await
}

async fn export_records(
    resource: &str,
    body: web::Bytes,
    export_dir: PathBuf,
) -> Result<Download, EntityServiceError> {
    let kind = resolve_kind(resource)?;
    with_record_type!(kind, R => export_body::<R>(body, export_dir).await)
}

async fn export_body<R>(
    body: web::Bytes,
    export_dir: PathBuf,
) -> Result<Download, EntityServiceError>
where
    R: TabularRecord + DeserializeOwned + Send + 'static,
{
    let records: Vec<R> = serde_json::from_slice(&body)
        .map_err(|e| EntityServiceError::InvalidBody(e.to_string()))?;
    run_export(export_dir, move |exporter| exporter.export(&records, false)).await
}

/// Runs `write` on the blocking pool against a scratch directory created for
/// this request only, then reads the artifact back and deletes it. The
/// scratch directory itself is removed when it goes out of scope.
async fn run_export<F>(export_dir: PathBuf, write: F) -> Result<Download, EntityServiceError>
where
    F: FnOnce(&CsvExporter) -> Result<ExportArtifact, ExportError> + Send + 'static,
{
    web::block(move || -> Result<Download, EntityServiceError> {
        let scratch = tempfile::Builder::new()
            .prefix("export-")
            .tempdir_in(&export_dir)?;
        let artifact = write(&CsvExporter::new(scratch.path()))?;
        let file_name = artifact.file_name().to_string();
        debug!("Reading back {}", artifact.path().display());
        let bytes = artifact.consume()?;
        Ok(Download { file_name, bytes })
    })
    .await?
}
