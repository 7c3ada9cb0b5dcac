use crate::AppState;
use crate::database::CatPicRepository;
use crate::database::sqlite::SqliteCatPicRepository;
use crate::features::catpics::catpics_router;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tower::ServiceExt;

pub const BOUNDARY: &str = "------------------------catpicsboundary7MA4YWxkTrZu0gW";

// a fresh in-memory database with the cat_pics table in place.
// pinned to a single connection that never recycles, otherwise the memory db vanishes
pub async fn setup_test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    SqliteCatPicRepository::new(pool.clone())
        .ensure_schema()
        .await
        .expect("Failed to create schema");

    pool
}

// the real router, wired to the given pool
pub fn app_for(pool: &Pool<Sqlite>) -> Router {
    let repo: Arc<dyn CatPicRepository> = Arc::new(SqliteCatPicRepository::new(pool.clone()));
    catpics_router().with_state(AppState { repo })
}

pub async fn setup_app() -> (Router, Pool<Sqlite>) {
    let pool = setup_test_pool().await;
    (app_for(&pool), pool)
}

// hand-rolled multipart/form-data body with a single file part
pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(content.len() + 256);
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

// a well-formed multipart body without any parts
pub fn empty_multipart_body() -> Vec<u8> {
    format!("--{BOUNDARY}--\r\n").into_bytes()
}

pub fn multipart_request(method: &str, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// POST a catpic through the router and hand back the new id
pub async fn upload(app: &Router, content: &[u8]) -> String {
    let response = send(
        app,
        multipart_request("POST", "/catpics", multipart_body("catpic", "cat.jpg", content)),
    )
    .await;
    assert_eq!(response.status(), 201);

    let json = body_json(response).await;
    json["id"].as_str().expect("id in create response").to_string()
}

// multipart body holding only a plain text field, no file part
pub fn text_only_multipart_body(field: &str, value: &str) -> Vec<u8> {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n--{BOUNDARY}--\r\n"
    )
    .into_bytes()
}
