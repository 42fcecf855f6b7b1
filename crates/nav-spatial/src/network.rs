//! Road network representation and builder.
//!
//! # Data layout
//!
//! Cities are stored in id-indexed slots: slot `i` holds the name of
//! `CityId(i)` or `None` if no city was registered with that id.
//!
//! Outgoing edges use **Compressed Sparse Row (CSR)** format.  Given a
//! `CityId c`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ city_out_start[c] .. city_out_start[c+1] ]
//! ```
//!
//! Within one city's slice, edges appear in the order their roads were
//! added.
//!
//! # Roads vs. edges
//!
//! A [`Road`] is the undirected record (distance, traffic, class, name).
//! Each road yields two directed edges, one per direction, that both store
//! the same `RoadId`.  Forward and reverse edges therefore cannot disagree
//! on any attribute.

use rustc_hash::FxHashMap;
use tracing::debug;

use nav_core::config::DEFAULT_CITY_CAPACITY;
use nav_core::cost::travel_minutes;
use nav_core::{CityId, EdgeId, RoadClass, RoadId, Speed, TrafficLevel};

use crate::{SpatialError, SpatialResult};

// ── Road ──────────────────────────────────────────────────────────────────────

/// An undirected road segment between two cities.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    /// Endpoint given first when the road was registered.
    pub a: CityId,
    /// Endpoint given second when the road was registered.
    pub b: CityId,
    /// Length in kilometres.  Always finite and positive.
    pub distance_km: f64,
    pub traffic: TrafficLevel,
    pub class: RoadClass,
    /// Display name, e.g. `"M-9 Motorway"`.
    pub name: String,
}

/// A directed edge together with the road it belongs to.
#[derive(Copy, Clone, Debug)]
pub struct EdgeRef<'a> {
    pub id: EdgeId,
    pub from: CityId,
    pub to: CityId,
    pub road_id: RoadId,
    pub road: &'a Road,
}

impl EdgeRef<'_> {
    /// Traffic-adjusted minutes to drive this edge at `speed`.
    #[inline]
    pub fn travel_minutes(&self, speed: Speed) -> f64 {
        travel_minutes(self.road.distance_km, speed, self.road.traffic)
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected road graph stored as directed CSR adjacency.
///
/// Immutable once built; safe to share between threads.  Do not construct
/// directly; use [`RoadNetworkBuilder`].
#[derive(Debug)]
pub struct RoadNetwork {
    // ── City data ─────────────────────────────────────────────────────────
    /// City names indexed by `CityId`.  `None` marks an unused id.
    city_names: Vec<Option<String>>,
    city_count: usize,
    /// Lower-cased name → id.
    name_index: FxHashMap<String, CityId>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `city_names.len() + 1`.
    pub city_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    pub edge_from: Vec<CityId>,
    pub edge_to: Vec<CityId>,
    pub edge_road: Vec<RoadId>,

    // ── Road data (indexed by RoadId) ─────────────────────────────────────
    roads: Vec<Road>,
}

impl RoadNetwork {
    /// Construct a network with no cities or roads.
    ///
    /// Every routing request against it fails with
    /// [`SpatialError::InvalidCity`].
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of registered cities.
    pub fn city_count(&self) -> usize {
        self.city_count
    }

    /// Number of id slots (`max registered id + 1`).  Per-query tables are
    /// sized to this.
    pub fn slot_count(&self) -> usize {
        self.city_names.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Number of directed edges (twice the road count).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.city_count == 0
    }

    // ── Cities ────────────────────────────────────────────────────────────

    /// `true` if a city was registered under `id`.
    #[inline]
    pub fn contains(&self, id: CityId) -> bool {
        matches!(self.city_names.get(id.index()), Some(Some(_)))
    }

    /// Display name of `id`, or `None` if it is not registered.
    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.city_names.get(id.index())?.as_deref()
    }

    /// Registered cities in ascending id order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &str)> + '_ {
        self.city_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| name.as_deref().map(|n| (CityId(i as u32), n)))
    }

    /// Smallest and largest registered id, or `None` for an empty network.
    pub fn id_range(&self) -> Option<(CityId, CityId)> {
        let first = self.cities().next()?.0;
        let last = self.cities().last()?.0;
        Some((first, last))
    }

    /// Case-insensitive lookup by display name.
    pub fn find_city(&self, name: &str) -> Option<CityId> {
        self.name_index.get(&name.trim().to_lowercase()).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `city`, in
    /// road insertion order.  Empty for unknown ids.
    #[inline]
    pub fn out_edges(&self, city: CityId) -> impl Iterator<Item = EdgeId> + '_ {
        let (start, end) = self.out_range(city);
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `city` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, city: CityId) -> usize {
        let (start, end) = self.out_range(city);
        end - start
    }

    /// Resolve an edge id into its endpoints and road.
    ///
    /// # Panics
    /// Panics if `edge` did not come from this network.
    #[inline]
    pub fn edge(&self, edge: EdgeId) -> EdgeRef<'_> {
        let i = edge.index();
        let road_id = self.edge_road[i];
        EdgeRef {
            id: edge,
            from: self.edge_from[i],
            to: self.edge_to[i],
            road_id,
            road: &self.roads[road_id.index()],
        }
    }

    /// Outgoing edges of `city`, resolved.
    pub fn neighbors(&self, city: CityId) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.out_edges(city).map(move |e| self.edge(e))
    }

    /// The opposite-direction twin of `edge` (same road, swapped endpoints).
    /// Never `edge` itself.
    pub fn reverse_edge(&self, edge: EdgeId) -> Option<EdgeId> {
        let fwd = self.edge(edge);
        self.out_edges(fwd.to).find(|&e| {
            e != edge
                && self.edge_road[e.index()] == fwd.road_id
                && self.edge_to[e.index()] == fwd.from
        })
    }

    pub fn road(&self, id: RoadId) -> Option<&Road> {
        self.roads.get(id.index())
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    fn out_range(&self, city: CityId) -> (usize, usize) {
        match (
            self.city_out_start.get(city.index()),
            self.city_out_start.get(city.index() + 1),
        ) {
            (Some(&start), Some(&end)) => (start as usize, end as usize),
            _ => (0, 0),
        }
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// Cities must be added before the roads that reference them.  City ids
/// must be below the builder's capacity; city names must be unique
/// (case-insensitive).  Id slots are allocated as ids are registered, so a
/// large capacity costs nothing up front.
///
/// # Example
///
/// ```
/// use nav_core::{CityId, RoadClass, TrafficLevel};
/// use nav_spatial::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let khi = b.add_city(CityId(1), "Karachi").unwrap();
/// let hyd = b.add_city(CityId(2), "Hyderabad").unwrap();
/// b.add_road(khi, hyd, 165.0, TrafficLevel::Jammed, RoadClass::Motorway, "M-9 Motorway").unwrap();
/// let net = b.build();
/// assert_eq!(net.city_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
#[derive(Debug)]
pub struct RoadNetworkBuilder {
    capacity:   usize,
    /// Grows to `max registered id + 1`.
    slots:      Vec<Option<String>>,
    name_index: FxHashMap<String, CityId>,
    roads:      Vec<Road>,
    raw_edges:  Vec<RawEdge>,
}

#[derive(Debug)]
struct RawEdge {
    from: CityId,
    to:   CityId,
    road: RoadId,
}

impl RoadNetworkBuilder {
    /// Builder accepting ids `0..DEFAULT_CITY_CAPACITY`.
    pub fn new() -> Self {
        Self::with_city_capacity(DEFAULT_CITY_CAPACITY)
    }

    /// Builder accepting ids `0..capacity`.
    pub fn with_city_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            slots:      Vec::new(),
            name_index: FxHashMap::default(),
            roads:      Vec::new(),
            raw_edges:  Vec::new(),
        }
    }

    /// Exclusive upper bound on accepted city ids.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Register a city under `id`.
    ///
    /// Fails with [`SpatialError::CapacityExceeded`] if `id` is not below
    /// the capacity, [`SpatialError::DuplicateCity`] if `id` is taken and
    /// [`SpatialError::DuplicateCityName`] if another city already uses the
    /// name.
    pub fn add_city(&mut self, id: CityId, name: impl Into<String>) -> SpatialResult<CityId> {
        if id == CityId::INVALID || id.index() >= self.capacity {
            return Err(SpatialError::CapacityExceeded { id, capacity: self.capacity });
        }
        if matches!(self.slots.get(id.index()), Some(Some(_))) {
            return Err(SpatialError::DuplicateCity(id));
        }
        let name = name.into();
        let key = name.trim().to_lowercase();
        if let Some(&existing) = self.name_index.get(&key) {
            return Err(SpatialError::DuplicateCityName { name, existing });
        }

        if self.slots.len() <= id.index() {
            self.slots.resize(id.index() + 1, None);
        }
        self.slots[id.index()] = Some(name);
        self.name_index.insert(key, id);
        Ok(id)
    }

    /// Add an undirected road between `a` and `b`.
    ///
    /// Appends one directed edge per direction; both reference the returned
    /// `RoadId`.  Both endpoints must be registered and distinct.
    pub fn add_road(
        &mut self,
        a: CityId,
        b: CityId,
        distance_km: f64,
        traffic: TrafficLevel,
        class: RoadClass,
        name: impl Into<String>,
    ) -> SpatialResult<RoadId> {
        for id in [a, b] {
            if !matches!(self.slots.get(id.index()), Some(Some(_))) {
                return Err(SpatialError::CityNotFound(id));
            }
        }
        if a == b {
            return Err(SpatialError::SelfLoop(a));
        }
        if !(distance_km.is_finite() && distance_km > 0.0) {
            return Err(SpatialError::InvalidDistance(distance_km));
        }

        let road = RoadId(self.roads.len() as u32);
        self.roads.push(Road { a, b, distance_km, traffic, class, name: name.into() });
        self.raw_edges.push(RawEdge { from: a, to: b, road });
        self.raw_edges.push(RawEdge { from: b, to: a, road });
        Ok(road)
    }

    pub fn city_count(&self) -> usize {
        self.name_index.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    pub fn build(self) -> RoadNetwork {
        let city_names = self.slots;
        let city_count = self.name_index.len();
        let slot_count = city_names.len();

        // Stable sort keeps per-city insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<CityId> = raw.iter().map(|e| e.from).collect();
        let edge_to:   Vec<CityId> = raw.iter().map(|e| e.to).collect();
        let edge_road: Vec<RoadId> = raw.iter().map(|e| e.road).collect();

        let mut city_out_start = vec![0u32; slot_count + 1];
        for e in &raw {
            city_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=slot_count {
            city_out_start[i] += city_out_start[i - 1];
        }
        debug_assert_eq!(city_out_start[slot_count] as usize, raw.len());

        debug!(cities = city_count, roads = self.roads.len(), "road network built");

        RoadNetwork {
            city_names,
            city_count,
            name_index: self.name_index,
            city_out_start,
            edge_from,
            edge_to,
            edge_road,
            roads: self.roads,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
