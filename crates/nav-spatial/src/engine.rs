//! Single-source fastest-time search.
//!
//! [`shortest_path_tree`] runs Dijkstra's algorithm from one source over the
//! whole network and returns a [`PathTable`] holding, for every city, the
//! minimal travel time, the predecessor on a fastest path, and the distance
//! and fuel accumulated along that path.
//!
//! # Cost units
//!
//! Times are `f64` minutes, distances kilometres, fuel litres.  Edge cost is
//! [`nav_core::cost::travel_minutes`], which is strictly positive for every
//! road the builder accepts, so Dijkstra's non-negativity requirement holds.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use nav_core::cost::fuel_litres;
use nav_core::{CityId, Speed};

use crate::network::RoadNetwork;
use crate::{SpatialError, SpatialResult};

// ── PathTable ─────────────────────────────────────────────────────────────────

/// Per-query search state, indexed by `CityId`.
///
/// Owned by exactly one query.  Unreached cities hold `f64::INFINITY` time,
/// `CityId::INVALID` predecessor and zero distance/fuel.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTable {
    pub source: CityId,
    pub speed: Speed,
    /// Minimal elapsed minutes from `source`.
    pub min_time: Vec<f64>,
    /// Previous city on a fastest path; `INVALID` for the source and
    /// unreached cities.
    pub predecessor: Vec<CityId>,
    /// Kilometres along the fastest path.
    pub distance_km: Vec<f64>,
    /// Litres burned along the fastest path.
    pub fuel_l: Vec<f64>,
}

impl PathTable {
    fn new(slots: usize, source: CityId, speed: Speed) -> Self {
        let mut table = Self {
            source,
            speed,
            min_time:    vec![f64::INFINITY; slots],
            predecessor: vec![CityId::INVALID; slots],
            distance_km: vec![0.0; slots],
            fuel_l:      vec![0.0; slots],
        };
        table.min_time[source.index()] = 0.0;
        table
    }

    /// Minimal travel time to `city` in minutes, `None` if unreachable.
    pub fn time_to(&self, city: CityId) -> Option<f64> {
        self.min_time
            .get(city.index())
            .copied()
            .filter(|t| t.is_finite())
    }

    #[inline]
    pub fn is_reachable(&self, city: CityId) -> bool {
        self.time_to(city).is_some()
    }

    /// Predecessor of `city`, `None` for the source or unreached cities.
    pub fn predecessor(&self, city: CityId) -> Option<CityId> {
        self.predecessor
            .get(city.index())
            .copied()
            .filter(|&p| p != CityId::INVALID)
    }

    /// Kilometres along the fastest path to `city` (0 if unreachable).
    pub fn distance_to(&self, city: CityId) -> f64 {
        self.distance_km.get(city.index()).copied().unwrap_or(0.0)
    }

    /// Litres along the fastest path to `city` (0 if unreachable).
    pub fn fuel_to(&self, city: CityId) -> f64 {
        self.fuel_l.get(city.index()).copied().unwrap_or(0.0)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Fastest paths from `source` to every city at a constant `speed`.
///
/// Fails with [`SpatialError::InvalidCity`] if `source` is not registered.
/// Runs until the frontier is empty; the returned table is final for every
/// city.
pub fn shortest_path_tree(
    network: &RoadNetwork,
    source: CityId,
    speed: Speed,
) -> SpatialResult<PathTable> {
    if !network.contains(source) {
        return Err(SpatialError::InvalidCity(source));
    }

    let mut table = PathTable::new(network.slot_count(), source, speed);

    // Min-heap on (time, city).  A city may sit in the heap several times;
    // entries older than its current best time are skipped on pop.
    let mut frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, CityId)>> = BinaryHeap::new();
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    let mut settled = 0usize;
    while let Some(Reverse((OrderedFloat(time), city))) = frontier.pop() {
        if time > table.min_time[city.index()] {
            continue;
        }
        settled += 1;

        for edge in network.neighbors(city) {
            let next = edge.to;
            let candidate = time + edge.travel_minutes(speed);

            if candidate < table.min_time[next.index()] {
                let road = edge.road;
                table.min_time[next.index()]    = candidate;
                table.predecessor[next.index()] = city;
                table.distance_km[next.index()] = table.distance_km[city.index()] + road.distance_km;
                table.fuel_l[next.index()] =
                    table.fuel_l[city.index()] + fuel_litres(road.distance_km, speed, road.class);

                trace!(%city, %next, road = %road.name, minutes = candidate, "relaxed");
                frontier.push(Reverse((OrderedFloat(candidate), next)));
            }
        }
    }

    debug!(%source, speed = speed.kmh(), settled, "shortest-path tree complete");
    Ok(table)
}
