//! Spatial-subsystem error type.

use thiserror::Error;

use nav_core::{CityId, CoreError};

/// Errors produced by `nav-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    // ── Per-query failures ────────────────────────────────────────────────
    #[error("city {0} is not part of the network")]
    InvalidCity(CityId),

    #[error("no road connection from {from} to {to}")]
    Unreachable { from: CityId, to: CityId },

    /// A predecessor step has no matching edge.  Indicates a bug, not bad
    /// input.
    #[error("internal inconsistency: no edge from {from} to {to} on reconstructed path")]
    InternalInconsistency { from: CityId, to: CityId },

    // ── Network construction ──────────────────────────────────────────────
    #[error("city {0} not registered")]
    CityNotFound(CityId),

    #[error("city {0} registered twice")]
    DuplicateCity(CityId),

    #[error("city name {name:?} already used by city {existing}")]
    DuplicateCityName { name: String, existing: CityId },

    #[error("city {id} exceeds capacity of {capacity} ids")]
    CapacityExceeded { id: CityId, capacity: usize },

    #[error("road from city {0} back to itself")]
    SelfLoop(CityId),

    #[error("invalid road distance {0} km: must be a finite positive number")]
    InvalidDistance(f64),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SpatialError {
    /// Short machine-readable tag for reporters.
    pub fn reason(&self) -> &'static str {
        match self {
            SpatialError::InvalidCity(_)                 => "invalid-city",
            SpatialError::Unreachable { .. }             => "unreachable",
            SpatialError::InternalInconsistency { .. }   => "internal",
            SpatialError::CityNotFound(_)
            | SpatialError::DuplicateCity(_)
            | SpatialError::DuplicateCityName { .. }
            | SpatialError::CapacityExceeded { .. }
            | SpatialError::SelfLoop(_)
            | SpatialError::InvalidDistance(_)           => "invalid-network",
            SpatialError::Parse(_)                       => "parse",
            SpatialError::Io(_)                          => "io",
            SpatialError::Core(_)                        => "core",
        }
    }
}

pub type SpatialResult<T> = Result<T, SpatialError>;
