use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use decora_designs::router::build_router;
use decora_designs::state::AppState;
use decora_testing::auth::{MockBearer, TEST_JWT_SECRET};

const BOUNDARY: &str = "x-test-boundary";

struct TestApp {
    server: TestServer,
    artifact_root: tempfile::TempDir,
    _upload_root: tempfile::TempDir,
}

fn test_app() -> TestApp {
    let artifact_root = tempfile::tempdir().unwrap();
    let upload_root = tempfile::tempdir().unwrap();
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        http: reqwest::Client::new(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        synthesis_url: "http://localhost:0".to_owned(),
        synthesis_api_key: "test-key".to_owned(),
        synthesis_model: "test-model".to_owned(),
        artifact_root: artifact_root.path().to_path_buf(),
        upload_root: upload_root.path().to_path_buf(),
        remote_timeout: std::time::Duration::from_secs(1),
    };
    TestApp {
        server: TestServer::new(build_router(state)).unwrap(),
        artifact_root,
        _upload_root: upload_root,
    }
}

fn bearer(user_id: Uuid) -> String {
    format!("Bearer {}", MockBearer::new(user_id).token(TEST_JWT_SECRET))
}

/// Hand-rolled multipart body: (field name, optional file name, value).
fn multipart_body(fields: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                     Content-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

#[tokio::test]
async fn healthz_is_public() {
    let app = test_app();
    let response = app.server.get("/healthz").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn listing_requires_a_token() {
    let app = test_app();
    let response = app.server.get("/designs").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn listing_rejects_a_garbage_token() {
    let app = test_app();
    let response = app
        .server
        .get("/designs")
        .add_header("authorization", "Bearer not-a-jwt")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn generation_rejects_request_without_image() {
    let app = test_app();
    let body = multipart_body(&[("roomType", None, Uuid::new_v4().to_string().as_bytes())]);
    let response = app
        .server
        .post("/designs")
        .add_header("authorization", bearer(Uuid::new_v4()))
        .content_type(&format!("multipart/form-data; boundary={BOUNDARY}"))
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["kind"], "MISSING_IMAGE");
}

#[tokio::test]
async fn generation_rejects_request_without_room_type() {
    let app = test_app();
    let body = multipart_body(&[("images", Some("room.png"), b"png-bytes")]);
    let response = app
        .server
        .post("/designs")
        .add_header("authorization", bearer(Uuid::new_v4()))
        .content_type(&format!("multipart/form-data; boundary={BOUNDARY}"))
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["kind"], "MISSING_ROOM_TYPE");
}

#[tokio::test]
async fn generation_rejects_blank_room_type() {
    let app = test_app();
    let body = multipart_body(&[
        ("images", Some("room.png"), b"png-bytes"),
        ("roomType", None, b"   "),
    ]);
    let response = app
        .server
        .post("/designs")
        .add_header("authorization", bearer(Uuid::new_v4()))
        .content_type(&format!("multipart/form-data; boundary={BOUNDARY}"))
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["kind"], "MISSING_ROOM_TYPE");
}

#[tokio::test]
async fn generation_rejects_malformed_room_type() {
    let app = test_app();
    let body = multipart_body(&[
        ("images", Some("room.png"), b"png-bytes"),
        ("roomType", None, b"living-room"),
    ]);
    let response = app
        .server
        .post("/designs")
        .add_header("authorization", bearer(Uuid::new_v4()))
        .content_type(&format!("multipart/form-data; boundary={BOUNDARY}"))
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["kind"], "INVALID_ROOM_TYPE");
}

#[tokio::test]
async fn generation_rejects_non_numeric_price() {
    let app = test_app();
    let body = multipart_body(&[
        ("images", Some("room.png"), b"png-bytes"),
        ("roomType", None, Uuid::new_v4().to_string().as_bytes()),
        ("price", None, b"a-lot"),
    ]);
    let response = app
        .server
        .post("/designs")
        .add_header("authorization", bearer(Uuid::new_v4()))
        .content_type(&format!("multipart/form-data; boundary={BOUNDARY}"))
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["kind"], "INVALID_PRICE");
}

#[tokio::test]
async fn generation_rejects_missing_bearer_before_reading_the_body() {
    let app = test_app();
    let body = multipart_body(&[("images", Some("room.png"), b"png-bytes")]);
    let response = app
        .server
        .post("/designs")
        .content_type(&format!("multipart/form-data; boundary={BOUNDARY}"))
        .bytes(body.into())
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn stored_artifacts_are_served_read_only() {
    let app = test_app();
    let user_id = Uuid::new_v4();
    let dir = app.artifact_root.path().join(user_id.to_string());
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("generated_image_1700000000000.png"), b"png-bytes").unwrap();

    let response = app
        .server
        .get(&format!(
            "/generated_images/{user_id}/generated_image_1700000000000.png"
        ))
        .await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"png-bytes");
}
