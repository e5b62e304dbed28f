use super::error::EntityServiceError;
use super::resolve_kind;
use crate::config::AppConfig;
use crate::csv_exchange::{has_csv_format, import, TabularRecord};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use log::{info, warn};
use serde::Serialize;

/// Name of the multipart field carrying CSV files.
const FILE_FIELD: &str = "file";

/// One uploaded file, fully buffered.
struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

/// HTTP handler wrapper that converts the import result to an `HttpResponse`.
///
/// - On success: `200 OK` with the imported records as a JSON array.
/// - On failure: the status of the `EntityServiceError` with its message.
pub(crate) async fn process(
    resource: web::Path<String>,
    payload: Multipart,
    config: web::Data<AppConfig>,
) -> impl Responder {
    match import_uploads(&resource, payload, config.max_upload_bytes).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Import into {} rejected: {}", resource.as_str(), e);
            HttpResponse::build(e.status_code()).body(format!("Error: {}", e))
        }
    }
}

async fn import_uploads(
    resource: &str,
    payload: Multipart,
    max_upload_bytes: usize,
) -> Result<HttpResponse, EntityServiceError> {
    let kind = resolve_kind(resource)?;
    let uploads = collect_uploads(payload, max_upload_bytes).await?;
    if uploads.is_empty() {
        return Err(EntityServiceError::MissingFile);
    }

    info!("Importing {} file(s) as {}", uploads.len(), kind);
    with_record_type!(kind, R => import_all::<R>(uploads).await)
}

/// Imports every upload in order on the blocking pool; the first bad file
/// fails the request.
async fn import_all<R>(uploads: Vec<Upload>) -> Result<HttpResponse, EntityServiceError>
where
    R: TabularRecord + Serialize + Send + 'static,
{
    let records = web::block(move || -> Result<Vec<R>, EntityServiceError> {
        let mut records = Vec::new();
        for upload in &uploads {
            records.extend(import::<R>(&upload.bytes, &upload.file_name)?);
        }
        Ok(records)
    })
    .await??;
    Ok(HttpResponse::Ok().json(records))
}

/// Buffers every `file` part of the form, checking content type. The bytes
/// of all file parts together may not exceed `max_upload_bytes`. Parts with
/// other names are skipped.
async fn collect_uploads(
    mut payload: Multipart,
    max_upload_bytes: usize,
) -> Result<Vec<Upload>, EntityServiceError> {
    let mut uploads = Vec::new();
    let mut total_bytes = 0;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if field_name.as_deref() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string());

        if !has_csv_format(content_type.as_deref()) {
            return Err(EntityServiceError::UnsupportedFile {
                file_name,
                content_type,
            });
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            total_bytes += chunk.len();
            if total_bytes > max_upload_bytes {
                return Err(EntityServiceError::PayloadTooLarge {
                    file_name,
                    limit: max_upload_bytes,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        uploads.push(Upload { file_name, bytes });
    }

    Ok(uploads)
}
