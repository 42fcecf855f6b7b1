//! Unit tests for nav-spatial.
//!
//! All tests use hand-crafted networks so they run without any data files.

#[cfg(test)]
mod helpers {
    use nav_core::{CityId, RoadClass, Speed, TrafficLevel};
    use crate::{RoadNetwork, RoadNetworkBuilder};

    pub fn kmh(v: f64) -> Speed {
        Speed::new(v).unwrap()
    }

    /// Four cities, three roads:
    ///
    /// ```text
    ///   A(1) ──100 km, jammed──── C(3)      D(4)  (isolated)
    ///     \                      /
    ///   60 km clear        60 km clear
    ///     motorway           local
    ///        \              /
    ///         ──── B(2) ────
    /// ```
    ///
    /// At 60 km/h: A→C direct = 100 × 2.5 = 250 min; A→B→C = 60 + 60 = 120
    /// min.  The two-hop path wins.
    pub fn triangle() -> (RoadNetwork, [CityId; 4]) {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_city(CityId(1), "Alpha").unwrap();
        let bb = b.add_city(CityId(2), "Bravo").unwrap();
        let c = b.add_city(CityId(3), "Charlie").unwrap();
        let d = b.add_city(CityId(4), "Delta").unwrap();

        b.add_road(a, c, 100.0, TrafficLevel::Jammed, RoadClass::Motorway, "Direct").unwrap();
        b.add_road(a, bb, 60.0, TrafficLevel::Clear, RoadClass::Motorway, "West").unwrap();
        b.add_road(bb, c, 60.0, TrafficLevel::Clear, RoadClass::Local, "East").unwrap();

        (b.build(), [a, bb, c, d])
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use nav_core::config::DEFAULT_CITY_CAPACITY;
    use nav_core::{CityId, RoadClass, RoadId, TrafficLevel};
    use crate::{RoadNetworkBuilder, SpatialError};

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.city_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
        assert!(net.id_range().is_none());
    }

    #[test]
    fn single_road() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_city(CityId(1), "Karachi").unwrap();
        let c = b.add_city(CityId(2), "Hyderabad").unwrap();
        b.add_road(a, c, 165.0, TrafficLevel::Jammed, RoadClass::Motorway, "M-9").unwrap();
        let net = b.build();
        assert_eq!(net.city_count(), 2);
        assert_eq!(net.road_count(), 1);
        assert_eq!(net.edge_count(), 2); // bidirectional
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 1);
    }

    #[test]
    fn capacity_exceeded_is_an_error() {
        let mut b = RoadNetworkBuilder::with_city_capacity(3);
        b.add_city(CityId(2), "Last slot").unwrap();
        let err = b.add_city(CityId(3), "Too far").unwrap_err();
        assert!(matches!(err, SpatialError::CapacityExceeded { id: CityId(3), capacity: 3 }));
    }

    #[test]
    fn huge_capacity_allocates_only_registered_slots() {
        let mut b = RoadNetworkBuilder::with_city_capacity(usize::MAX);
        assert_eq!(b.capacity(), usize::MAX);
        b.add_city(CityId(3), "Sukkur").unwrap();
        assert!(matches!(
            b.add_city(CityId::INVALID, "Sentinel"),
            Err(SpatialError::CapacityExceeded { .. })
        ));
        let net = b.build();
        assert_eq!(net.slot_count(), 4);
        assert_eq!(net.city_count(), 1);
    }

    #[test]
    fn default_capacity() {
        assert_eq!(RoadNetworkBuilder::new().capacity(), DEFAULT_CITY_CAPACITY);
    }

    #[test]
    fn duplicate_city_rejected() {
        let mut b = RoadNetworkBuilder::new();
        b.add_city(CityId(1), "Karachi").unwrap();
        assert!(matches!(
            b.add_city(CityId(1), "Again"),
            Err(SpatialError::DuplicateCity(CityId(1)))
        ));
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut b = RoadNetworkBuilder::new();
        b.add_city(CityId(1), "Lahore").unwrap();
        let err = b.add_city(CityId(2), " LAHORE").unwrap_err();
        assert!(matches!(
            err,
            SpatialError::DuplicateCityName { ref name, existing: CityId(1) } if name == " LAHORE"
        ));
        assert_eq!(err.reason(), "invalid-network");
        assert_eq!(b.city_count(), 1);
        assert_eq!(b.build().find_city("lahore"), Some(CityId(1)));
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_city(CityId(1), "Quetta").unwrap();
        assert!(matches!(
            b.add_road(a, a, 12.0, TrafficLevel::Clear, RoadClass::Local, "Ring Road"),
            Err(SpatialError::SelfLoop(CityId(1)))
        ));
        assert_eq!(b.road_count(), 0);
    }

    #[test]
    fn road_to_unknown_city_rejected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_city(CityId(1), "Karachi").unwrap();
        let err = b
            .add_road(a, CityId(9), 10.0, TrafficLevel::Clear, RoadClass::Local, "Nowhere")
            .unwrap_err();
        assert!(matches!(err, SpatialError::CityNotFound(CityId(9))));
    }

    #[test]
    fn non_positive_distance_rejected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_city(CityId(1), "A").unwrap();
        let c = b.add_city(CityId(2), "C").unwrap();
        for bad in [0.0, -5.0, f64::NAN] {
            assert!(matches!(
                b.add_road(a, c, bad, TrafficLevel::Clear, RoadClass::Local, "x"),
                Err(SpatialError::InvalidDistance(_))
            ));
        }
        assert_eq!(b.road_count(), 0);
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let (net, [a, b, c, _]) = super::helpers::triangle();
        let from_a: Vec<_> = net.neighbors(a).map(|e| e.to).collect();
        assert_eq!(from_a, vec![c, b]);
        let from_c: Vec<_> = net.neighbors(c).map(|e| e.to).collect();
        assert_eq!(from_c, vec![a, b]);
    }

    #[test]
    fn city_lookup() {
        let (net, [a, _, c, d]) = super::helpers::triangle();
        assert_eq!(net.city_name(c), Some("Charlie"));
        assert_eq!(net.city_name(CityId(0)), None);
        assert_eq!(net.city_name(CityId(99)), None);
        assert_eq!(net.find_city("  charlie "), Some(c));
        assert_eq!(net.find_city("Echo"), None);
        assert_eq!(net.id_range(), Some((a, d)));
        assert!(net.contains(d));
        assert!(!net.contains(CityId(0)));
        assert_eq!(net.out_degree(d), 0);
        assert_eq!(net.out_edges(CityId(1_000)).count(), 0);
    }

    #[test]
    fn slots_follow_largest_id() {
        let (net, _) = super::helpers::triangle();
        assert_eq!(net.slot_count(), 5); // ids 0..=4, slot 0 unused
        assert_eq!(net.cities().count(), 4);
    }

    #[test]
    fn road_lookup_by_id() {
        let (net, [a, b, ..]) = super::helpers::triangle();
        let west = net.neighbors(a).find(|e| e.to == b).unwrap();
        let road = net.road(west.road_id).unwrap();
        assert_eq!(road.name, "West");
        assert_eq!((road.a, road.b), (a, b));
        assert!(net.road(RoadId(3)).is_none());
        assert!(net.road(RoadId::INVALID).is_none());
    }
}

// ── Road symmetry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod symmetry {
    use proptest::prelude::*;

    use nav_core::{CityId, EdgeId, RoadClass, TrafficLevel};
    use crate::{RoadNetwork, RoadNetworkBuilder};

    fn assert_symmetric(net: &RoadNetwork) {
        for (city, _) in net.cities() {
            for e in net.out_edges(city) {
                let fwd = net.edge(e);
                let rev = net.reverse_edge(e).expect("every edge has a twin");
                assert_ne!(rev, e);
                let rev = net.edge(rev);
                assert_eq!(rev.from, fwd.to);
                assert_eq!(rev.to, fwd.from);
                assert_eq!(rev.road.distance_km, fwd.road.distance_km);
                assert_eq!(rev.road.traffic, fwd.road.traffic);
                assert_eq!(rev.road.class, fwd.road.class);
                assert_eq!(rev.road.name, fwd.road.name);
            }
        }
    }

    #[test]
    fn triangle_is_symmetric() {
        let (net, _) = super::helpers::triangle();
        assert_symmetric(&net);
    }

    #[test]
    fn twin_is_a_different_edge() {
        let (net, _) = super::helpers::triangle();
        for e in (0..net.edge_count() as u32).map(EdgeId) {
            let twin = net.reverse_edge(e).unwrap();
            assert_ne!(twin, e);
            assert_eq!(net.reverse_edge(twin), Some(e));
        }
    }

    proptest! {
        #[test]
        fn generated_networks_are_symmetric(
            roads in prop::collection::vec(
                (1u32..8, 1u32..8, 1.0f64..1_000.0, 0usize..4, 0usize..3)
                    .prop_filter("endpoints must differ", |r| r.0 != r.1),
                0..30,
            )
        ) {
            let mut b = RoadNetworkBuilder::new();
            for id in 1..8 {
                b.add_city(CityId(id), format!("City {id}")).unwrap();
            }
            for (i, (u, v, d, t, c)) in roads.iter().enumerate() {
                let class = [RoadClass::Motorway, RoadClass::Highway, RoadClass::Local][*c];
                b.add_road(CityId(*u), CityId(*v), *d, TrafficLevel::ALL[*t], class, format!("R{i}"))
                    .unwrap();
            }
            let net = b.build();
            prop_assert_eq!(net.edge_count(), 2 * roads.len());
            assert_symmetric(&net);
        }
    }
}

// ── Shortest-path engine ──────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use nav_core::CityId;
    use crate::{shortest_path_tree, SpatialError};
    use super::helpers::{kmh, triangle};

    #[test]
    fn two_hop_beats_jammed_direct_road() {
        let (net, [a, b, c, _]) = triangle();
        let table = shortest_path_tree(&net, a, kmh(60.0)).unwrap();

        assert_eq!(table.time_to(a), Some(0.0));
        assert_eq!(table.time_to(b), Some(60.0));
        assert_eq!(table.time_to(c), Some(120.0));
        assert_eq!(table.predecessor(c), Some(b));
        assert_eq!(table.predecessor(b), Some(a));
        assert_eq!(table.predecessor(a), None);
        assert_eq!(table.distance_to(c), 120.0);
        // 60 km motorway at 16 km/L + 60 km local at 12 km/L
        assert_eq!(table.fuel_to(c), 3.75 + 5.0);
    }

    #[test]
    fn unreachable_city_keeps_infinity() {
        let (net, [a, _, _, d]) = triangle();
        let table = shortest_path_tree(&net, a, kmh(60.0)).unwrap();
        assert!(!table.is_reachable(d));
        assert_eq!(table.min_time[d.index()], f64::INFINITY);
        assert_eq!(table.predecessor(d), None);
        assert_eq!(table.distance_to(d), 0.0);
    }

    #[test]
    fn invalid_source() {
        let (net, _) = triangle();
        assert!(matches!(
            shortest_path_tree(&net, CityId(17), kmh(60.0)),
            Err(SpatialError::InvalidCity(CityId(17)))
        ));
        assert!(matches!(
            shortest_path_tree(&net, CityId(0), kmh(60.0)),
            Err(SpatialError::InvalidCity(CityId(0)))
        ));
    }

    #[test]
    fn faster_speed_shrinks_times_proportionally() {
        let (net, [a, _, c, _]) = triangle();
        let slow = shortest_path_tree(&net, a, kmh(60.0)).unwrap();
        let fast = shortest_path_tree(&net, a, kmh(120.0)).unwrap();
        assert_eq!(fast.time_to(c).unwrap() * 2.0, slow.time_to(c).unwrap());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let (net, [_, b, _, _]) = triangle();
        let first = shortest_path_tree(&net, b, kmh(75.0)).unwrap();
        let second = shortest_path_tree(&net, b, kmh(75.0)).unwrap();
        assert_eq!(first, second);
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use nav_core::{CityId, RoadClass, TrafficLevel};
    use crate::{reconstruct, shortest_path_tree, RoadNetworkBuilder, SpatialError};
    use super::helpers::{kmh, triangle};

    #[test]
    fn legs_in_travel_order() {
        let (net, [a, b, c, _]) = triangle();
        let table = shortest_path_tree(&net, a, kmh(60.0)).unwrap();
        let legs = reconstruct(&net, &table, c).unwrap();

        assert_eq!(legs.len(), 2);
        assert_eq!((legs[0].from, legs[0].to), (a, b));
        assert_eq!((legs[1].from, legs[1].to), (b, c));
        assert_eq!(legs[0].road_name, "West");
        assert_eq!(legs[1].road_name, "East");
        assert_eq!(legs[1].from_name, "Bravo");
        assert_eq!(legs[1].to_name, "Charlie");
        assert_eq!(legs[1].class, RoadClass::Local);
        assert_eq!(legs.iter().map(|l| l.minutes).sum::<f64>(), 120.0);
    }

    #[test]
    fn source_to_itself_has_no_legs() {
        let (net, [a, ..]) = triangle();
        let table = shortest_path_tree(&net, a, kmh(60.0)).unwrap();
        assert!(reconstruct(&net, &table, a).unwrap().is_empty());
    }

    #[test]
    fn unreachable_destination() {
        let (net, [a, _, _, d]) = triangle();
        let table = shortest_path_tree(&net, a, kmh(60.0)).unwrap();
        assert!(matches!(
            reconstruct(&net, &table, d),
            Err(SpatialError::Unreachable { .. })
        ));
    }

    #[test]
    fn missing_edge_is_internal_inconsistency() {
        let (net, [a, _, _, d]) = triangle();
        let mut table = shortest_path_tree(&net, a, kmh(60.0)).unwrap();
        // Forge a predecessor link that no road backs.
        table.min_time[d.index()] = 10.0;
        table.predecessor[d.index()] = a;

        let err = reconstruct(&net, &table, d).unwrap_err();
        assert!(matches!(err, SpatialError::InternalInconsistency { from, to } if from == a && to == d));
        assert_eq!(err.reason(), "internal");
    }

    #[test]
    fn predecessor_cycle_is_internal_inconsistency() {
        let (net, [a, b, c, _]) = triangle();
        let mut table = shortest_path_tree(&net, a, kmh(60.0)).unwrap();
        table.predecessor[b.index()] = c;
        assert!(matches!(
            reconstruct(&net, &table, c),
            Err(SpatialError::InternalInconsistency { .. })
        ));
    }

    #[test]
    fn parallel_roads_report_the_faster_one() {
        let mut b = RoadNetworkBuilder::new();
        let x = b.add_city(CityId(1), "X").unwrap();
        let y = b.add_city(CityId(2), "Y").unwrap();
        b.add_road(x, y, 50.0, TrafficLevel::Jammed, RoadClass::Highway, "Old Road").unwrap();
        b.add_road(x, y, 50.0, TrafficLevel::Clear, RoadClass::Motorway, "Bypass").unwrap();
        let net = b.build();

        let table = shortest_path_tree(&net, x, kmh(100.0)).unwrap();
        let legs = reconstruct(&net, &table, y).unwrap();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].road_name, "Bypass");
        assert_eq!(legs[0].traffic, TrafficLevel::Clear);
        assert_eq!(table.time_to(y), Some(30.0));
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use nav_core::config::PETROL_PRICE;
    use nav_core::{CityId, PlannerConfig};
    use crate::{DijkstraRouter, RoadNetwork, RouteQuery, Router, SpatialError};
    use super::helpers::{kmh, triangle};

    #[test]
    fn route_totals_and_cost() {
        let (net, [a, _, c, _]) = triangle();
        let route = DijkstraRouter::default()
            .route(&net, &RouteQuery::new(a, c, kmh(60.0)))
            .unwrap();

        assert_eq!(route.origin_name, "Alpha");
        assert_eq!(route.destination_name, "Charlie");
        assert_eq!(route.legs.len(), 2);
        assert_eq!(route.total_distance_km, 120.0);
        assert_eq!(route.total_minutes, 120.0);
        assert_eq!(route.hours_minutes(), (2, 0));
        assert_eq!(route.total_fuel_l, 8.75);
        assert_eq!(route.fuel_cost, 8.75 * 280.0);
    }

    #[test]
    fn configured_fuel_price() {
        let (net, [a, b, _, _]) = triangle();
        let cfg = PlannerConfig { fuel_price_per_litre: 100.0, ..Default::default() };
        let router = DijkstraRouter::new(&cfg);
        assert_eq!(router.fuel_price_per_litre(), 100.0);
        assert_eq!(DijkstraRouter::default().fuel_price_per_litre(), PETROL_PRICE);
        let route = router.route(&net, &RouteQuery::new(a, b, kmh(60.0))).unwrap();
        assert_eq!(route.total_fuel_l, 3.75);
        assert_eq!(route.fuel_cost, 375.0);
    }

    #[test]
    fn same_city_is_trivial() {
        let (net, [_, b, _, _]) = triangle();
        let route = DijkstraRouter::default()
            .route(&net, &RouteQuery::new(b, b, kmh(90.0)))
            .unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.total_minutes, 0.0);
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.total_fuel_l, 0.0);
        assert_eq!(route.fuel_cost, 0.0);
    }

    #[test]
    fn invalid_destination_fails_before_search() {
        let (net, [a, ..]) = triangle();
        let err = DijkstraRouter::default()
            .route(&net, &RouteQuery::new(a, CityId(16), kmh(60.0)))
            .unwrap_err();
        assert!(matches!(err, SpatialError::InvalidCity(CityId(16))));
        assert_eq!(err.reason(), "invalid-city");
    }

    #[test]
    fn empty_network_rejects_every_city() {
        let net = RoadNetwork::empty();
        assert!(net.is_empty());
        for (from, to) in [(0, 0), (1, 2), (3, 3)] {
            let err = DijkstraRouter::default()
                .route(&net, &RouteQuery::new(CityId(from), CityId(to), kmh(60.0)))
                .unwrap_err();
            assert!(matches!(err, SpatialError::InvalidCity(c) if c == CityId(from)));
        }
    }

    #[test]
    fn disconnected_pair_is_unreachable() {
        let (net, [a, _, _, d]) = triangle();
        let err = DijkstraRouter::default()
            .route(&net, &RouteQuery::new(a, d, kmh(60.0)))
            .unwrap_err();
        assert!(matches!(err, SpatialError::Unreachable { from, to } if from == a && to == d));
        assert_eq!(err.reason(), "unreachable");
    }

    #[test]
    fn repeated_queries_are_identical() {
        let (net, [a, _, c, _]) = triangle();
        let router = DijkstraRouter::default();
        let q = RouteQuery::new(c, a, kmh(110.0));
        assert_eq!(router.route(&net, &q).unwrap(), router.route(&net, &q).unwrap());
    }

    #[test]
    fn hours_minutes_truncates() {
        let (net, [a, b, _, _]) = triangle();
        // 60 km at 47 km/h ≈ 76.6 min → 1 h 16 m
        let route = DijkstraRouter::default()
            .route(&net, &RouteQuery::new(a, b, kmh(47.0)))
            .unwrap();
        assert_eq!(route.hours_minutes(), (1, 16));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use nav_core::{CityId, RoadClass, TrafficLevel};
    use crate::{load_network_csv, load_network_reader, SpatialError};

    const CITIES: &str = "id,name\n1,Karachi\n2,Hyderabad\n3,Sukkur\n";

    #[test]
    fn loads_cities_and_roads() {
        let roads = "\
from,to,distance_km,traffic,class,name
1,2,165,jammed,motorway,M-9 Motorway
2,3,330,Moderate,HIGHWAY,N-5 National Hwy
";
        let net = load_network_reader(Cursor::new(CITIES), Cursor::new(roads), 20).unwrap();
        assert_eq!(net.city_count(), 3);
        assert_eq!(net.road_count(), 2);
        assert_eq!(net.find_city("sukkur"), Some(CityId(3)));

        let road = &net.roads()[1];
        assert_eq!(road.name, "N-5 National Hwy");
        assert_eq!(road.traffic, TrafficLevel::Moderate);
        assert_eq!(road.class, RoadClass::Highway);
        assert_eq!(road.distance_km, 330.0);
    }

    #[test]
    fn bad_traffic_label() {
        let roads = "from,to,distance_km,traffic,class,name\n1,2,165,awful,motorway,M-9\n";
        let err = load_network_reader(Cursor::new(CITIES), Cursor::new(roads), 20).unwrap_err();
        assert!(matches!(err, SpatialError::Core(_)));
    }

    #[test]
    fn malformed_row() {
        let roads = "from,to,distance_km,traffic,class,name\n1,two,165,clear,motorway,M-9\n";
        let err = load_network_reader(Cursor::new(CITIES), Cursor::new(roads), 20).unwrap_err();
        assert!(matches!(err, SpatialError::Parse(_)));
    }

    #[test]
    fn duplicate_names_in_file() {
        let cities = "id,name\n1,Karachi\n2,karachi\n";
        let roads = "from,to,distance_km,traffic,class,name\n";
        let err = load_network_reader(Cursor::new(cities), Cursor::new(roads), 20).unwrap_err();
        assert!(matches!(err, SpatialError::DuplicateCityName { existing: CityId(1), .. }));
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cities = dir.path().join("cities.csv");
        let roads = dir.path().join("roads.csv");
        std::fs::write(&cities, CITIES).unwrap();
        std::fs::write(&roads, "from,to,distance_km,traffic,class,name\n1,3,500,heavy,highway,N-55\n").unwrap();

        let net = load_network_csv(&cities, &roads, 20).unwrap();
        assert_eq!(net.city_count(), 3);
        assert_eq!(net.roads()[0].traffic, TrafficLevel::Heavy);
        assert_eq!(net.neighbors(CityId(3)).next().map(|e| e.to), Some(CityId(1)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cities = dir.path().join("cities.csv");
        std::fs::write(&cities, CITIES).unwrap();

        let err = load_network_csv(&cities, &dir.path().join("absent.csv"), 20).unwrap_err();
        assert!(matches!(err, SpatialError::Io(_)));
        assert_eq!(err.reason(), "io");
    }

    #[test]
    fn capacity_applies_to_loaded_ids() {
        let roads = "from,to,distance_km,traffic,class,name\n";
        let err = load_network_reader(Cursor::new(CITIES), Cursor::new(roads), 3).unwrap_err();
        assert!(matches!(err, SpatialError::CapacityExceeded { id: CityId(3), capacity: 3 }));
    }
}
