//! `nav-spatial` — road network, loading, and fastest-route search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR), `RoadNetworkBuilder`, `Road`           |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`                   |
//! | [`engine`]  | `shortest_path_tree`, `PathTable`                           |
//! | [`path`]    | `reconstruct`, `Leg`                                        |
//! | [`router`]  | `Router` trait, `RouteQuery`, `Route`, `DijkstraRouter`     |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `nav-core` types.       |

pub mod engine;
pub mod error;
pub mod loader;
pub mod network;
pub mod path;
pub mod router;

#[cfg(test)]
mod tests;

pub use engine::{shortest_path_tree, PathTable};
pub use error::{SpatialError, SpatialResult};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{EdgeRef, Road, RoadNetwork, RoadNetworkBuilder};
pub use path::{reconstruct, Leg};
pub use router::{DijkstraRouter, Route, RouteQuery, Router};
