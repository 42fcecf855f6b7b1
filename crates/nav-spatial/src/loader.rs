//! CSV network loader.
//!
//! # CSV format
//!
//! Two files.  Cities, one row per city:
//!
//! ```csv
//! id,name
//! 1,Karachi
//! 2,Hyderabad
//! ```
//!
//! Roads, one row per undirected road:
//!
//! ```csv
//! from,to,distance_km,traffic,class,name
//! 1,2,165,jammed,motorway,M-9 Motorway
//! ```
//!
//! **`traffic`** is one of `clear`, `moderate`, `heavy`, `jammed` (`low` and
//! `high` are accepted aliases).  **`class`** is one of `motorway`,
//! `highway`, `local`.  Both are case-insensitive.
//!
//! Rows are added in file order, which fixes each city's adjacency order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::{CityId, RoadClass, TrafficLevel};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::{SpatialError, SpatialResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    id:   u32,
    name: String,
}

#[derive(Deserialize)]
struct RoadRecord {
    from:        u32,
    to:          u32,
    distance_km: f64,
    traffic:     String,
    class:       String,
    name:        String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network from a cities CSV and a roads CSV on disk.
pub fn load_network_csv(
    cities: &Path,
    roads: &Path,
    capacity: usize,
) -> SpatialResult<RoadNetwork> {
    let cities = std::fs::File::open(cities)?;
    let roads = std::fs::File::open(roads)?;
    load_network_reader(cities, roads, capacity)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for embedded data (`include_str!` wrapped in a `Cursor` or passed
/// as `&[u8]`) and for tests.
pub fn load_network_reader<C: Read, R: Read>(
    cities: C,
    roads: R,
    capacity: usize,
) -> SpatialResult<RoadNetwork> {
    let mut b = RoadNetworkBuilder::with_city_capacity(capacity);

    let mut city_reader = csv::Reader::from_reader(cities);
    for result in city_reader.deserialize::<CityRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        b.add_city(CityId(row.id), row.name.trim())?;
    }

    let mut road_reader = csv::Reader::from_reader(roads);
    for result in road_reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        let traffic: TrafficLevel = row.traffic.parse()?;
        let class: RoadClass = row.class.parse()?;
        b.add_road(
            CityId(row.from),
            CityId(row.to),
            row.distance_km,
            traffic,
            class,
            row.name.trim(),
        )?;
    }

    Ok(b.build())
}
