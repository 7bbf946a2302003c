#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cinedex_core::movie::{Genre, Movie};
use cinedex_store::MovieRepo;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cinedex_api::config::ServerConfig;
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        seed_path: None,
    }
}

/// Build the full application router over a collection seeded with `movies`.
pub fn build_test_app(movies: Vec<Movie>) -> Router {
    let state = AppState::new(MovieRepo::with_movies(movies), test_config());
    build_app_router(state)
}

/// The single-record dataset used by most tests.
pub fn matrix() -> Movie {
    Movie {
        id: "a1".to_string(),
        title: "Matrix".to_string(),
        year: 1999,
        director: "Wachowski".to_string(),
        duration: 136,
        poster: "http://x.com/p.jpg".to_string(),
        genre: vec![Genre::Action, Genre::SciFi],
        rate: 8.0,
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
