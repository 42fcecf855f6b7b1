//! Pakistan inter-city road network.
//!
//! 15 cities and 19 roads, embedded from `data/*.csv` so the binary runs
//! without any files next to it.  `--cities`/`--roads` load a different
//! network through the same loader.

use std::path::Path;

use nav_spatial::{load_network_csv, load_network_reader, RoadNetwork, SpatialResult};

const CITIES_CSV: &str = include_str!("../data/cities.csv");
const ROADS_CSV: &str = include_str!("../data/roads.csv");

/// Build the embedded network.
pub fn build_network(capacity: usize) -> SpatialResult<RoadNetwork> {
    load_network_reader(CITIES_CSV.as_bytes(), ROADS_CSV.as_bytes(), capacity)
}

/// Build the embedded network, or load one from disk if both paths are set.
pub fn load(
    cities: Option<&Path>,
    roads: Option<&Path>,
    capacity: usize,
) -> SpatialResult<RoadNetwork> {
    match (cities, roads) {
        (Some(c), Some(r)) => load_network_csv(c, r, capacity),
        _ => build_network(capacity),
    }
}
