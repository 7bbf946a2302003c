//! Movie record types and the partial-update merge.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// Rating given to records that arrive without one.
pub const DEFAULT_RATE: f64 = 3.0;

/// The closed set of genres a movie may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Crime,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Crime,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// Wire names, in the same order as [`Genre::ALL`].
    pub const NAMES: &'static [&'static str] = &[
        "Action",
        "Adventure",
        "Crime",
        "Comedy",
        "Drama",
        "Fantasy",
        "Horror",
        "Thriller",
        "Sci-Fi",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Case-insensitive exact comparison against a wire name. Whitespace is
    /// significant: `" action"` does not match.
    pub fn matches_name(self, name: &str) -> bool {
        self.as_str().to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: i64,
    pub poster: String,
    pub genre: Vec<Genre>,
    #[serde(default = "default_rate")]
    pub rate: f64,
}

impl Movie {
    /// Build a stored record from validated input and a freshly issued id.
    pub fn new(id: MovieId, input: CreateMovie) -> Self {
        let CreateMovie {
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        } = input;

        Self {
            id,
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        }
    }

    /// Overwrite every field present in `patch`; absent fields keep their value.
    /// The id is not part of [`UpdateMovie`] and therefore never changes.
    pub fn apply(&mut self, patch: UpdateMovie) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }

    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|g| g.matches_name(name))
    }
}

fn default_rate() -> f64 {
    DEFAULT_RATE
}

/// Validated input for creating a movie. Carries no id; the store issues one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: i64,
    pub poster: String,
    pub genre: Vec<Genre>,
    #[serde(default = "default_rate")]
    pub rate: f64,
}

/// Validated partial update. Every field is optional and the id is not settable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl UpdateMovie {
    pub fn is_empty(&self) -> bool {
        *self == UpdateMovie::default()
    }
}
