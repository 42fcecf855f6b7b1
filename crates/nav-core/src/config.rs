//! Planner configuration.

use crate::{CoreError, CoreResult};

/// Petrol price per litre, PKR.
pub const PETROL_PRICE: f64 = 280.0;

/// Diesel price per litre, PKR.  Not the default; set
/// `fuel_price_per_litre` to this for a diesel vehicle.
pub const DIESEL_PRICE: f64 = 295.0;

/// Maximum number of city id slots (ids `0..capacity`) a network accepts
/// unless configured otherwise.
pub const DEFAULT_CITY_CAPACITY: usize = 20;

/// Largest accepted `city_capacity`.  Ids are `u32` and `u32::MAX` is the
/// invalid sentinel, so no id can reach this value.
pub const MAX_CITY_CAPACITY: usize = u32::MAX as usize;

/// Top-level planner configuration.
///
/// Typically loaded from a JSON file by the application crate; every field
/// has a default so partial files are accepted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Fuel price per litre used for the cost estimate.  Default: petrol.
    pub fuel_price_per_litre: f64,

    /// Lowest speed the query collector accepts, km/h.
    pub min_speed_kmh: f64,

    /// Highest speed the query collector accepts, km/h.
    pub max_speed_kmh: f64,

    /// City id slots available to the network builder.  An upper bound on
    /// ids, not an allocation size.
    pub city_capacity: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fuel_price_per_litre: PETROL_PRICE,
            min_speed_kmh:        40.0,
            max_speed_kmh:        160.0,
            city_capacity:        DEFAULT_CITY_CAPACITY,
        }
    }
}

impl PlannerConfig {
    /// Check internal consistency.  Call after loading from a file.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.fuel_price_per_litre.is_finite() && self.fuel_price_per_litre > 0.0) {
            return Err(CoreError::Config(format!(
                "fuel_price_per_litre must be positive, got {}",
                self.fuel_price_per_litre
            )));
        }
        if !(self.min_speed_kmh > 0.0 && self.min_speed_kmh <= self.max_speed_kmh)
            || !self.max_speed_kmh.is_finite()
        {
            return Err(CoreError::Config(format!(
                "speed bounds must satisfy 0 < min <= max, got {}..{}",
                self.min_speed_kmh, self.max_speed_kmh
            )));
        }
        if self.city_capacity == 0 || self.city_capacity > MAX_CITY_CAPACITY {
            return Err(CoreError::Config(format!(
                "city_capacity must be in 1..={MAX_CITY_CAPACITY}, got {}",
                self.city_capacity
            )));
        }
        Ok(())
    }

    /// `true` if `kmh` lies within the accepted speed range (inclusive).
    #[inline]
    pub fn accepts_speed(&self, kmh: f64) -> bool {
        (self.min_speed_kmh..=self.max_speed_kmh).contains(&kmh)
    }
}
