//! Request handlers.
//!
//! Handlers validate input through `cinedex_core`, delegate to the
//! collection in `cinedex_store`, and map misses and rejections via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod movies;
