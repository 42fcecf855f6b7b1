//! Turning a [`PathTable`] into an ordered list of legs.

use tracing::error;

use nav_core::cost::fuel_litres;
use nav_core::{CityId, RoadClass, RoadId, TrafficLevel};

use crate::engine::PathTable;
use crate::network::{EdgeRef, RoadNetwork};
use crate::{SpatialError, SpatialResult};

/// One directly connected road segment of a route.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    pub from: CityId,
    pub to: CityId,
    pub from_name: String,
    pub to_name: String,
    pub road: RoadId,
    pub road_name: String,
    pub traffic: TrafficLevel,
    pub class: RoadClass,
    pub distance_km: f64,
    /// Traffic-adjusted minutes for this leg alone.
    pub minutes: f64,
    /// Litres burned on this leg alone.
    pub fuel_l: f64,
}

/// Legs of the fastest path from `table.source` to `destination`, in
/// travel order.
///
/// Returns an empty list when `destination` is the source.  Fails with
/// [`SpatialError::Unreachable`] if the destination was never reached, and
/// with [`SpatialError::InternalInconsistency`] if a predecessor step has
/// no matching edge in `network`.
pub fn reconstruct(
    network: &RoadNetwork,
    table: &PathTable,
    destination: CityId,
) -> SpatialResult<Vec<Leg>> {
    if !table.is_reachable(destination) {
        return Err(SpatialError::Unreachable { from: table.source, to: destination });
    }

    // Walk predecessors back to the source.  A walk longer than the number
    // of slots means the predecessor links form a cycle.
    let mut cities = vec![destination];
    let mut cur = destination;
    while let Some(prev) = table.predecessor(cur) {
        if cities.len() > table.predecessor.len() {
            return Err(inconsistency(prev, cur));
        }
        cities.push(prev);
        cur = prev;
    }
    if cur != table.source {
        return Err(inconsistency(table.source, cur));
    }
    cities.reverse();

    cities
        .windows(2)
        .map(|step| -> SpatialResult<Leg> {
            let (u, v) = (step[0], step[1]);
            let edge = fastest_edge(network, table, u, v).ok_or_else(|| inconsistency(u, v))?;
            Ok(make_leg(network, table, edge))
        })
        .collect()
}

/// Among `u`'s outgoing edges that lead to `v`, the one with the smallest
/// travel time (first one on ties).
fn fastest_edge<'a>(
    network: &'a RoadNetwork,
    table: &PathTable,
    u: CityId,
    v: CityId,
) -> Option<EdgeRef<'a>> {
    network
        .neighbors(u)
        .filter(|e| e.to == v)
        .min_by(|a, b| {
            a.travel_minutes(table.speed)
                .total_cmp(&b.travel_minutes(table.speed))
        })
}

fn make_leg(network: &RoadNetwork, table: &PathTable, edge: EdgeRef<'_>) -> Leg {
    let name = |c: CityId| network.city_name(c).unwrap_or_default().to_owned();
    let road = edge.road;
    Leg {
        from: edge.from,
        to: edge.to,
        from_name: name(edge.from),
        to_name: name(edge.to),
        road: edge.road_id,
        road_name: road.name.clone(),
        traffic: road.traffic,
        class: road.class,
        distance_km: road.distance_km,
        minutes: edge.travel_minutes(table.speed),
        fuel_l: fuel_litres(road.distance_km, table.speed, road.class),
    }
}

fn inconsistency(from: CityId, to: CityId) -> SpatialError {
    error!(%from, %to, "reconstructed path step has no matching edge");
    SpatialError::InternalInconsistency { from, to }
}
