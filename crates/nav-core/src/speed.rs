//! Validated driving speed.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Average driving speed in km/h, assumed constant over a whole route.
///
/// Always finite and strictly positive, so the cost functions in
/// [`crate::cost`] never divide by zero.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Speed(f64);

impl Speed {
    /// Wrap `kmh`, rejecting zero, negative, NaN and infinite values.
    pub fn new(kmh: f64) -> CoreResult<Self> {
        if kmh.is_finite() && kmh > 0.0 {
            Ok(Speed(kmh))
        } else {
            Err(CoreError::InvalidSpeed(kmh))
        }
    }

    #[inline]
    pub fn kmh(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Speed {
    type Error = CoreError;
    fn try_from(kmh: f64) -> CoreResult<Self> {
        Speed::new(kmh)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> f64 {
        speed.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}
