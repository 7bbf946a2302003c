//! In-memory movie collection and the dataset it is seeded from.

pub mod error;
pub mod repositories;
pub mod seed;

pub use error::SeedError;
pub use repositories::MovieRepo;
