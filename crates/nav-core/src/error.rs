//! Core error type.
//!
//! `nav-spatial` wraps `CoreError` as one variant of its own error enum via
//! `#[from]`, so `?` works across the crate boundary.

use thiserror::Error;

/// Errors produced by `nav-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid speed {0} km/h: must be a finite positive number")]
    InvalidSpeed(f64),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
