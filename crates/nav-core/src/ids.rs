//! Typed identifiers.
//!
//! All ids wrap a `u32` and are `Copy + Ord + Hash`.  The inner integer is
//! `pub` so seed data and tests can write `CityId(4)` directly; use
//! `.index()` when indexing a per-city or per-edge `Vec`.

use std::fmt;

/// Generate a `u32` id newtype.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel for "no id" (`u32::MAX`).
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// The `INVALID` sentinel, so unset ids never alias a real one.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        /// Bare number, as users type it.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            #[inline(always)]
            fn from(n: u32) -> Self {
                $name(n)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a registered city.  Seed data uses small positive ids.
    pub struct CityId;
}

typed_id! {
    /// Index of an undirected road record.  Both directed edges of a road
    /// point back at the same `RoadId`.
    pub struct RoadId;
}

typed_id! {
    /// Index of a directed adjacency entry in the CSR edge arrays.
    pub struct EdgeId;
}
