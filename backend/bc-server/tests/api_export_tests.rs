//! Integration tests for the xlsx export endpoints
mod common;

use crate::common::{admin_token, create_test_app, download, employee_token, send};

use std::io::{Cursor, Read};

use axum::http::{StatusCode, header};
use serde_json::json;

const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Contents of one part of the workbook package
fn workbook_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[tokio::test]
async fn test_export_users_as_admin() {
    let app = create_test_app().await;
    employee_token(&app.state, "alice").await;
    let token = admin_token(&app.state).await;

    let (status, headers, bytes) = download(&app.state, "/export-users", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], XLSX);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=Users.xlsx"
    );
    assert!(bytes.starts_with(b"PK"));

    let strings = workbook_part(&bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("Username"));
    assert!(strings.contains("alice@example.com"));
    assert!(strings.contains("employee"));
    assert!(strings.contains("admin"));
    assert!(workbook_part(&bytes, "xl/workbook.xml").contains("name=\"Users\""));
}

#[tokio::test]
async fn test_export_users_requires_admin() {
    let app = create_test_app().await;
    let employee = employee_token(&app.state, "alice").await;

    let (anonymous, _, _) = download(&app.state, "/export-users", None).await;
    let (forbidden, _, _) = download(&app.state, "/export-users", Some(&employee)).await;

    assert_eq!(anonymous, StatusCode::UNAUTHORIZED);
    assert_eq!(forbidden, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_export_critical_systems_merges_both_update_paths() {
    let app = create_test_app().await;
    send(
        &app.state,
        "POST",
        "/update-critical-system",
        Some(json!({
            "system": "Payroll",
            "maxDowntime": 4,
            "recoveryBuffer": 1,
            "priority": 1,
            "calculatedRTO": 3
        })),
        None,
    )
    .await;
    send(
        &app.state,
        "PUT",
        "/update-rto",
        Some(json!({"system": "Order Management", "mad": 1, "buffer": 1, "priority": 1, "rto": 2.5})),
        None,
    )
    .await;

    let (status, headers, bytes) = download(&app.state, "/export-critical-systems", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], XLSX);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=Critical_Systems_Analysis.xlsx"
    );

    let strings = workbook_part(&bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("System Name"));
    assert!(strings.contains("Payroll"));
    assert!(strings.contains("Order Management"));
    // Impact is only known for systems in the reference table
    assert!(strings.contains("High revenue loss, operational halt"));

    let sheet = workbook_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<v>2.5</v>"));
    assert!(sheet.contains("<v>3</v>"));
}

#[tokio::test]
async fn test_export_critical_systems_when_empty_has_header_only() {
    let app = create_test_app().await;

    let (status, _, bytes) = download(&app.state, "/export-critical-systems", None).await;

    assert_eq!(status, StatusCode::OK);
    let strings = workbook_part(&bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("Calculated RTO"));
    assert!(!workbook_part(&bytes, "xl/worksheets/sheet1.xml").contains("r=\"A2\""));
}
