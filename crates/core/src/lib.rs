//! Domain types and pure validation logic for the movie catalogue.
//!
//! Nothing in this crate touches I/O; the store and api crates build on it.

pub mod error;
pub mod movie;
pub mod movie_schema;
pub mod types;
pub mod validation;
