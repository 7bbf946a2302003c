//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses `tower::ServiceExt` to send requests directly to the router. Each
//! test builds its own collection, so tests never share state.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    body_json, build_test_app, delete, get, matrix, patch_json, post_json, send,
};
use serde_json::{json, Value};

fn new_movie_body() -> Value {
    json!({
        "title": "Heat",
        "year": 1995,
        "director": "Michael Mann",
        "duration": 170,
        "poster": "https://example.com/heat.jpg",
        "genre": ["Crime", "Drama"]
    })
}

fn matrix_json() -> Value {
    serde_json::to_value(matrix()).unwrap()
}

// ---------------------------------------------------------------------------
// GET /movies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_all_movies() {
    let app = build_test_app(vec![matrix()]);
    let response = get(app, "/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!([matrix_json()]));
}

#[tokio::test]
async fn list_filters_by_genre_case_insensitively() {
    let app = build_test_app(vec![matrix()]);

    let lower = body_json(get(app.clone(), "/movies?genre=sci-fi").await).await;
    let upper = body_json(get(app.clone(), "/movies?genre=Sci-Fi").await).await;
    let none = body_json(get(app, "/movies?genre=Horror").await).await;

    assert_eq!(lower, json!([matrix_json()]));
    assert_eq!(lower, upper);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn empty_genre_param_lists_everything() {
    let app = build_test_app(vec![matrix()]);
    let json = body_json(get(app, "/movies?genre=").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// GET /movies/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_returns_the_movie() {
    let app = build_test_app(vec![matrix()]);
    let response = get(app, "/movies/a1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, matrix_json());
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = build_test_app(vec![matrix()]);
    let response = get(app, "/movies/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Movie not found" })
    );
}

// ---------------------------------------------------------------------------
// POST /movies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_id_and_default_rate() {
    let app = build_test_app(Vec::new());
    let response = post_json(app.clone(), "/movies", new_movie_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_str().expect("id should be a string");
    assert!(!id.is_empty());
    assert_eq!(created["title"], "Heat");
    assert_eq!(created["rate"], 3.0);

    let fetched = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_ignores_client_supplied_id_and_unknown_fields() {
    let app = build_test_app(vec![matrix()]);
    let mut body = new_movie_body();
    body["id"] = json!("a1");
    body["studio"] = json!("Warner");

    let response = post_json(app.clone(), "/movies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_ne!(created["id"], "a1");
    assert!(created.get("studio").is_none());

    let all = body_json(get(app, "/movies").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0], matrix_json());
}

#[tokio::test]
async fn create_without_title_returns_400_with_issue() {
    let app = build_test_app(Vec::new());
    let mut body = new_movie_body();
    body.as_object_mut().unwrap().remove("title");

    let response = post_json(app.clone(), "/movies", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let issues = json["error"].as_array().expect("error should be an array");
    assert!(issues
        .iter()
        .any(|i| i["field"] == "title" && i["message"] == "title is required"));

    let all = body_json(get(app, "/movies").await).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn create_with_unknown_genre_returns_400() {
    let app = build_test_app(Vec::new());
    let mut body = new_movie_body();
    body["genre"] = json!(["Drama", "Western"]);

    let response = post_json(app, "/movies", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"][0]["field"], "genre");
    assert_eq!(json["error"][0]["kind"], "invalid_enum");
    assert_eq!(json["error"][0]["index"], 1);
}

#[tokio::test]
async fn create_with_future_year_returns_400() {
    let app = build_test_app(Vec::new());
    let body = json!({
        "title": "X",
        "year": 2050,
        "director": "D",
        "duration": 100,
        "poster": "http://y.com",
        "genre": ["Drama"]
    });

    let response = post_json(app, "/movies", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"][0]["field"], "year");
    assert_eq!(json["error"][0]["kind"], "too_big");
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let app = build_test_app(Vec::new());
    let request = Request::post("/movies")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn create_without_body_returns_400_with_issues() {
    let app = build_test_app(Vec::new());
    let request = Request::post("/movies").body(Body::empty()).unwrap();

    let response = send(app.clone(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let issues = json["error"].as_array().unwrap();
    assert!(issues.iter().any(|issue| issue["field"] == "title"));
    assert!(issues.iter().all(|issue| issue["kind"] == "required"));

    assert_eq!(body_json(get(app, "/movies").await).await, json!([]));
}

// ---------------------------------------------------------------------------
// PATCH /movies/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_merges_supplied_fields() {
    let app = build_test_app(vec![matrix()]);
    let response = patch_json(app.clone(), "/movies/a1", json!({ "rate": 9 })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = matrix_json();
    expected["rate"] = json!(9.0);
    assert_eq!(body_json(response).await, expected);

    let fetched = body_json(get(app, "/movies/a1").await).await;
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn patch_cannot_change_id() {
    let app = build_test_app(vec![matrix()]);
    let response = patch_json(
        app.clone(),
        "/movies/a1",
        json!({ "id": "b2", "title": "New" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], "a1");
    assert_eq!(json["title"], "New");

    assert_eq!(
        get(app, "/movies/b2").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn patch_with_invalid_field_returns_400_and_changes_nothing() {
    let app = build_test_app(vec![matrix()]);
    let response = patch_json(app.clone(), "/movies/a1", json!({ "rate": 11 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"][0]["field"], "rate");

    let fetched = body_json(get(app, "/movies/a1").await).await;
    assert_eq!(fetched, matrix_json());
}

#[tokio::test]
async fn patch_unknown_id_returns_404() {
    let app = build_test_app(vec![matrix()]);
    let response = patch_json(app, "/movies/nope", json!({ "title": "Ghost" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Movie not found" })
    );
}

#[tokio::test]
async fn patch_validates_before_lookup() {
    let app = build_test_app(Vec::new());
    let response = patch_json(app, "/movies/nope", json!({ "year": 1800 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_without_body_returns_the_unchanged_movie() {
    let app = build_test_app(vec![matrix()]);
    let request = Request::patch("/movies/a1").body(Body::empty()).unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, matrix_json());
}

#[tokio::test]
async fn patch_without_body_on_unknown_id_returns_404() {
    let app = build_test_app(vec![matrix()]);
    let request = Request::patch("/movies/nope").body(Body::empty()).unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Movie not found" })
    );
}

// ---------------------------------------------------------------------------
// DELETE /movies/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_the_movie() {
    let app = build_test_app(vec![matrix()]);
    let response = delete(app.clone(), "/movies/a1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "deleted" }));

    assert_eq!(
        get(app.clone(), "/movies/a1").await.status(),
        StatusCode::NOT_FOUND
    );

    let again = delete(app, "/movies/a1").await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(again).await,
        json!({ "message": "Movie not found" })
    );
}
