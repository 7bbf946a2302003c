//! The movie collection: an ordered, in-memory sequence of records.
//!
//! Every mutation holds the write lock for its whole duration, and reads
//! hold the read lock, so a reader sees the collection either before or
//! after a mutation, never in between.

use cinedex_core::movie::{CreateMovie, Movie, UpdateMovie};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Owns all movie records. Wrap in `Arc` to share across handlers.
#[derive(Debug, Default)]
pub struct MovieRepo {
    movies: RwLock<Vec<Movie>>,
}

impl MovieRepo {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection starting from `movies`, in the given order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// All records in insertion order.
    pub async fn list_all(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    /// Records tagged with `genre`, compared case-insensitively against each
    /// genre name. No match yields an empty list.
    pub async fn list_by_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .filter(|movie| movie.has_genre(genre))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
    }

    /// Append a new record under a freshly generated id and return it.
    pub async fn create(&self, input: CreateMovie) -> Movie {
        let mut movies = self.movies.write().await;

        let mut id = Uuid::new_v4().to_string();
        while movies.iter().any(|movie| movie.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let movie = Movie::new(id, input);
        movies.push(movie.clone());

        tracing::debug!(movie_id = %movie.id, count = movies.len(), "Movie appended");
        movie
    }

    /// Merge `patch` into the record with `id`, keeping its position.
    /// Returns `None` and changes nothing when the id is unknown.
    pub async fn update(&self, id: &str, patch: UpdateMovie) -> Option<Movie> {
        let mut movies = self.movies.write().await;
        let movie = movies.iter_mut().find(|movie| movie.id == id)?;
        movie.apply(patch);

        tracing::debug!(movie_id = %id, "Movie merged");
        Some(movie.clone())
    }

    /// Remove the record with `id`. Later records shift down by one.
    pub async fn delete(&self, id: &str) -> bool {
        let mut movies = self.movies.write().await;
        let Some(index) = movies.iter().position(|movie| movie.id == id) else {
            return false;
        };
        movies.remove(index);

        tracing::debug!(movie_id = %id, count = movies.len(), "Movie removed");
        true
    }

    pub async fn count(&self) -> usize {
        self.movies.read().await.len()
    }
}
