//! Handlers for the `/movies` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::movie::Movie;
use cinedex_core::movie_schema::{validate_create, validate_partial};
use cinedex_core::types::MovieId;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /movies?genre=
///
/// List every movie, or only those tagged with `genre` (case-insensitive).
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> Json<Vec<Movie>> {
    let movies = match params.genre() {
        Some(genre) => state.movies.list_by_genre(genre).await,
        None => state.movies.list_all().await,
    };

    Json(movies)
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .movies
        .find_by_id(&id)
        .await
        .ok_or_else(|| not_found(id))?;

    Ok(Json(movie))
}

/// POST /movies
///
/// Validate a full record and append it under a new id. Returns 201.
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let input = json_body(body)?;
    let validated = validate_create(&input)?;

    let movie = state.movies.create(validated).await;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Validate a partial record and merge it into the existing movie. The body
/// is validated before the id is looked up.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let input = json_body(body)?;
    let patch = validate_partial(&input)?;

    let movie = state
        .movies
        .update(&id, patch)
        .await
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.movies.delete(&id).await {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(Json(MessageResponse { message: "deleted" }))
}

fn not_found(id: MovieId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// A request without a JSON content type carries no body and is read as `{}`,
/// so it still goes through validation. Malformed JSON is a plain 400.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Map::new())),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
