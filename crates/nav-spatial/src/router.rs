//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Applications call routing through the [`Router`] trait, so an A* or a
//! precomputed-table router can replace [`DijkstraRouter`] without touching
//! the caller.
//!
//! # Totals
//!
//! Route totals (distance, time, fuel) come from the search table, where
//! they are accumulated edge by edge during relaxation.  They are not
//! recomputed from the reconstructed legs.

use nav_core::config::PETROL_PRICE;
use nav_core::cost::fuel_cost;
use nav_core::{CityId, PlannerConfig, Speed};
use tracing::debug;

use crate::engine::shortest_path_tree;
use crate::network::RoadNetwork;
use crate::path::{reconstruct, Leg};
use crate::{SpatialError, SpatialResult};

// ── RouteQuery ────────────────────────────────────────────────────────────────

/// One route request: where from, where to, how fast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteQuery {
    pub source: CityId,
    pub destination: CityId,
    pub speed: Speed,
}

impl RouteQuery {
    pub fn new(source: CityId, destination: CityId, speed: Speed) -> Self {
        Self { source, destination, speed }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query, ready for reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub origin: CityId,
    pub destination: CityId,
    pub origin_name: String,
    pub destination_name: String,
    pub speed: Speed,
    /// Legs in travel order.  Empty when origin equals destination.
    pub legs: Vec<Leg>,
    pub total_distance_km: f64,
    pub total_minutes: f64,
    pub total_fuel_l: f64,
    /// `total_fuel_l` times the configured price per litre.
    pub fuel_cost: f64,
}

impl Route {
    /// Total time split into whole hours and remaining whole minutes
    /// (truncated, never rounded up).
    pub fn hours_minutes(&self) -> (u64, u64) {
        let minutes = self.total_minutes.max(0.0) as u64;
        (minutes / 60, minutes % 60)
    }

    /// `true` if the origin and destination are the same city.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync`; the network is read-only during a
/// query, so several queries may run against one `RoadNetwork`.
pub trait Router: Send + Sync {
    /// Compute the fastest route for `query`.
    ///
    /// Fails with [`SpatialError::InvalidCity`] if either endpoint is not
    /// registered and [`SpatialError::Unreachable`] if no path exists.
    fn route(&self, network: &RoadNetwork, query: &RouteQuery) -> SpatialResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Full single-source Dijkstra per query, then path reconstruction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DijkstraRouter {
    fuel_price_per_litre: f64,
}

impl DijkstraRouter {
    pub fn new(config: &PlannerConfig) -> Self {
        Self { fuel_price_per_litre: config.fuel_price_per_litre }
    }

    pub fn fuel_price_per_litre(&self) -> f64 {
        self.fuel_price_per_litre
    }
}

impl Default for DijkstraRouter {
    fn default() -> Self {
        Self { fuel_price_per_litre: PETROL_PRICE }
    }
}

impl Router for DijkstraRouter {
    fn route(&self, network: &RoadNetwork, query: &RouteQuery) -> SpatialResult<Route> {
        let RouteQuery { source, destination, speed } = *query;
        for city in [source, destination] {
            if !network.contains(city) {
                return Err(SpatialError::InvalidCity(city));
            }
        }

        debug!(%source, %destination, speed = speed.kmh(), "routing");
        let table = shortest_path_tree(network, source, speed)?;
        let Some(total_minutes) = table.time_to(destination) else {
            return Err(SpatialError::Unreachable { from: source, to: destination });
        };
        let legs = reconstruct(network, &table, destination)?;

        let total_fuel_l = table.fuel_to(destination);
        Ok(Route {
            origin: source,
            destination,
            origin_name: network.city_name(source).unwrap_or_default().to_owned(),
            destination_name: network.city_name(destination).unwrap_or_default().to_owned(),
            speed,
            legs,
            total_distance_km: table.distance_to(destination),
            total_minutes,
            total_fuel_l,
            fuel_cost: fuel_cost(total_fuel_l, self.fuel_price_per_litre),
        })
    }
}
