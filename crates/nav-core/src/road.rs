//! Road attributes: traffic severity and road classification.
//!
//! Both enums are closed.  Every lookup (`multiplier`, `label`) is an
//! exhaustive `match`, so adding a variant is a compile error until every
//! table is extended.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── TrafficLevel ──────────────────────────────────────────────────────────────

/// Congestion on a road, ordered from least to most severe.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrafficLevel {
    /// Free-flowing road.
    #[default]
    Clear,
    /// Normal traffic.
    Moderate,
    /// Rush-hour traffic.
    Heavy,
    /// Severe blockage.
    Jammed,
}

impl TrafficLevel {
    /// All levels in ascending severity.
    pub const ALL: [TrafficLevel; 4] = [
        TrafficLevel::Clear,
        TrafficLevel::Moderate,
        TrafficLevel::Heavy,
        TrafficLevel::Jammed,
    ];

    /// Factor applied to free-flow travel time.
    #[inline]
    pub const fn multiplier(self) -> f64 {
        match self {
            TrafficLevel::Clear    => 1.0,
            TrafficLevel::Moderate => 1.2,
            TrafficLevel::Heavy    => 1.5,
            TrafficLevel::Jammed   => 2.5,
        }
    }

    /// Human-readable label used in itinerary tables.
    pub const fn label(self) -> &'static str {
        match self {
            TrafficLevel::Clear    => "Clear",
            TrafficLevel::Moderate => "Moderate",
            TrafficLevel::Heavy    => "Heavy",
            TrafficLevel::Jammed   => "Jammed",
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrafficLevel {
    type Err = CoreError;

    /// Accepts the labels plus the `low`/`high` aliases used by older data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" | "low"     => Ok(TrafficLevel::Clear),
            "moderate"          => Ok(TrafficLevel::Moderate),
            "heavy" | "high"    => Ok(TrafficLevel::Heavy),
            "jammed"            => Ok(TrafficLevel::Jammed),
            other => Err(CoreError::Parse(format!(
                "invalid traffic level {other:?}: expected clear, moderate, heavy, or jammed"
            ))),
        }
    }
}

// ── RoadClass ─────────────────────────────────────────────────────────────────

/// Road category.  Affects fuel efficiency only, never travel time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoadClass {
    Motorway,
    #[default]
    Highway,
    /// Stop-and-go roads; costs 4 km/L of efficiency.
    Local,
}

impl RoadClass {
    pub const fn label(self) -> &'static str {
        match self {
            RoadClass::Motorway => "Motorway",
            RoadClass::Highway  => "Highway",
            RoadClass::Local    => "Local",
        }
    }
}

impl fmt::Display for RoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoadClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "motorway" => Ok(RoadClass::Motorway),
            "highway"  => Ok(RoadClass::Highway),
            "local"    => Ok(RoadClass::Local),
            other => Err(CoreError::Parse(format!(
                "invalid road class {other:?}: expected motorway, highway, or local"
            ))),
        }
    }
}
