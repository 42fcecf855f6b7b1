//! Time and fuel cost model.
//!
//! Stateless functions of a single road segment.  Path-level totals are the
//! sum of per-segment values; nothing here depends on route history.
//!
//! # Fuel efficiency
//!
//! | Condition          | Efficiency (km/L)                          |
//! |--------------------|--------------------------------------------|
//! | base               | 16.0, or 12.0 on `Local` roads             |
//! | speed > 90         | `max(5.0, base - (speed - 90)² / 400)`     |
//! | speed < 40         | `base - 3.0`                               |
//! | 40 ≤ speed ≤ 90    | `base`                                     |

use crate::{RoadClass, Speed, TrafficLevel};

/// Baseline efficiency of a standard car, km/L.
pub const BASE_EFFICIENCY_KM_PER_L: f64 = 16.0;

/// Efficiency penalty on local roads, km/L.
pub const LOCAL_ROAD_PENALTY_KM_PER_L: f64 = 4.0;

/// Efficiency penalty below [`LOW_SPEED_KMH`], km/L.
pub const LOW_SPEED_PENALTY_KM_PER_L: f64 = 3.0;

/// Lower bound of the high-speed efficiency curve, km/L.
pub const MIN_EFFICIENCY_KM_PER_L: f64 = 5.0;

pub const LOW_SPEED_KMH: f64 = 40.0;
pub const HIGH_SPEED_KMH: f64 = 90.0;

/// Elapsed minutes to drive `distance_km` at `speed` under `traffic`.
#[inline]
pub fn travel_minutes(distance_km: f64, speed: Speed, traffic: TrafficLevel) -> f64 {
    (distance_km / speed.kmh()) * 60.0 * traffic.multiplier()
}

/// Distance covered per litre at `speed` on a road of class `class`.
pub fn fuel_efficiency_km_per_l(speed: Speed, class: RoadClass) -> f64 {
    let mut base = BASE_EFFICIENCY_KM_PER_L;
    if class == RoadClass::Local {
        base -= LOCAL_ROAD_PENALTY_KM_PER_L;
    }

    let kmh = speed.kmh();
    if kmh > HIGH_SPEED_KMH {
        // Aerodynamic drag: quadratic in the excess over 90 km/h.
        let excess = kmh - HIGH_SPEED_KMH;
        (base - excess * excess / 400.0).max(MIN_EFFICIENCY_KM_PER_L)
    } else if kmh < LOW_SPEED_KMH {
        base - LOW_SPEED_PENALTY_KM_PER_L
    } else {
        base
    }
}

/// Litres burned over `distance_km` at `speed` on a road of class `class`.
#[inline]
pub fn fuel_litres(distance_km: f64, speed: Speed, class: RoadClass) -> f64 {
    distance_km / fuel_efficiency_km_per_l(speed, class)
}

/// Money spent on `litres` of fuel.
#[inline]
pub fn fuel_cost(litres: f64, price_per_litre: f64) -> f64 {
    litres * price_per_litre
}
