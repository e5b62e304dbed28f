use super::configure_routes;
use crate::config::AppConfig;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::tempdir;

const BOUNDARY: &str = "rental-test-boundary";

fn config_for(export_dir: &Path) -> web::Data<AppConfig> {
    web::Data::new(AppConfig {
        export_dir: export_dir.to_path_buf(),
        max_upload_bytes: 1024,
        ..AppConfig::default()
    })
}

/// Builds a multipart body from `(field, file name, content type, content)`.
fn multipart_body(parts: &[(&str, &str, &str, &str)]) -> String {
    let mut body = String::new();
    for (field, file_name, content_type, content) in parts {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
             Content-Type: {}\r\n\r\n{}\r\n",
            BOUNDARY, field, file_name, content_type, content
        ));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

fn upload(uri: &str, parts: &[(&str, &str, &str, &str)]) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(multipart_body(parts))
}

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn imports_customers_from_uploaded_csv() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let csv = "full name,CITIZEN ID,Address,Date of birth,Phone number\n\
               Anna,ID123,123 Main St,1990-01-01,5551234\n";
    let req = upload(
        "/api/customers/import",
        &[("file", "customers.csv", "text/csv", csv)],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([{
            "fullName": "Anna",
            "citizenId": "ID123",
            "address": "123 Main St",
            "dob": "1990-01-01",
            "phoneNumber": "5551234"
        }])
    );
}

#[actix_web::test]
async fn combines_several_files_in_order() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let first = "Address,Number of room,Retail price\n1 First St,1,100\n";
    let second = "retail price,address,number of room\n200,2 Second St,2\n";
    let req = upload(
        "/api/apartments/import",
        &[
            ("file", "a.csv", "text/csv", first),
            ("note", "ignored.txt", "text/plain", "not a csv"),
            ("file", "b.csv", "text/csv", second),
        ],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["address"], "1 First St");
    assert_eq!(body[1]["address"], "2 Second St");
    assert_eq!(body[1]["retailPrice"], "200");
}

#[actix_web::test]
async fn rejects_wrong_header_with_diagnostics() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let req = upload(
        "/api/apartments/import",
        &[("file", "people.csv", "text/csv", "Full name,Address\nAnna,Main St\n")],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let text = body_text(&test::read_body(resp).await);
    assert!(text.starts_with("Error: Invalid CSV header"), "{}", text);
    assert!(text.contains("people.csv"));
    assert!(text.contains("Expected: [Address, Number of room, Retail price]"));
}

#[actix_web::test]
async fn rejects_non_csv_uploads_and_missing_files() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let wrong_type = upload(
        "/api/users/import",
        &[("file", "users.xlsx", "application/vnd.ms-excel", "binary")],
    )
    .to_request();
    let resp = test::call_service(&app, wrong_type).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let no_file = upload(
        "/api/users/import",
        &[("json", "meta.json", "application/json", "{}")],
    )
    .to_request();
    let resp = test::call_service(&app, no_file).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(&test::read_body(resp).await), "Error: Missing file");
}

#[actix_web::test]
async fn rejects_files_over_the_upload_limit() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let mut csv = String::from("Address,Number of room,Retail price\n");
    while csv.len() <= 1024 {
        csv.push_str("42 Long Road,3,2500000\n");
    }
    let req = upload(
        "/api/apartments/import",
        &[("file", "big.csv", "text/csv", csv.as_str())],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn limit_applies_to_all_files_of_a_request() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    // each file is well under the limit on its own
    let csv = "Address,Number of room,Retail price\n1 First St,1,100\n";
    let names: Vec<String> = (0..50).map(|i| format!("part-{}.csv", i)).collect();
    let parts: Vec<(&str, &str, &str, &str)> = names
        .iter()
        .map(|name| ("file", name.as_str(), "text/csv", csv))
        .collect();
    let req = upload("/api/apartments/import", &parts).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let text = body_text(&test::read_body(resp).await);
    assert!(text.contains("limit of 1024 bytes"), "{}", text);
}

#[actix_web::test]
async fn unknown_resource_is_not_found() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/invoices/export/template")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn downloads_template_and_cleans_up() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/apartments/export/template")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("apartment_template.csv"));

    let text = body_text(&test::read_body(resp).await);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Address,Number of room,Retail price");

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[actix_web::test]
async fn exports_posted_records_with_id_column() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let records = json!([
        {
            "id": "u-1",
            "fullName": "Hoàng Gia Kiệt",
            "username": "kiet",
            "email": "kiet@example.com",
            "createDate": "2024-03-12",
            "role": "STAFF",
            "active": "true"
        },
        {
            "fullName": "No Id, Yet",
            "username": "noid",
            "email": "noid@example.com",
            "createDate": "2024-03-13",
            "role": "MANAGER",
            "active": "false"
        }
    ]);
    let req = test::TestRequest::post()
        .uri("/api/users/export")
        .set_json(&records)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let text = body_text(&test::read_body(resp).await);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "ID,Full name,Username,Email,Create date,Role,Is Active",
            "u-1,Hoàng Gia Kiệt,kiet,kiet@example.com,2024-03-12,STAFF,true",
            ",\"No Id, Yet\",noid,noid@example.com,2024-03-13,MANAGER,false",
        ]
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[actix_web::test]
async fn malformed_export_body_is_a_bad_request() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(dir.path()))
            .service(configure_routes()),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contracts/export")
        .set_json(json!([{ "customerId": 42 }]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn missing_export_directory_is_a_server_error() {
    let dir = tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(config_for(&dir.path().join("gone")))
            .service(configure_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/customers/export/template")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
