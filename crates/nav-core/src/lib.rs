//! `nav-core` — foundational types for the route navigator.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `CityId`, `RoadId`, `EdgeId`                           |
//! | [`road`]     | `TrafficLevel`, `RoadClass`                            |
//! | [`speed`]    | `Speed` (validated km/h)                               |
//! | [`cost`]     | travel time, fuel efficiency, fuel and cost functions  |
//! | [`config`]   | `PlannerConfig`                                        |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod cost;
pub mod error;
pub mod ids;
pub mod road;
pub mod speed;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{CityId, EdgeId, RoadId};
pub use road::{RoadClass, TrafficLevel};
pub use speed::Speed;
