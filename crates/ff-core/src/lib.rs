//! `ff-core` — foundational types for the `freightflow` simulation engine.
//!
//! This crate is a dependency of every other `ff-*` crate.  It intentionally
//! has no `ff-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`                                    |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`rng`]         | `SimRng` (seedable run-level randomness)              |
//! | [`connection`]  | `ConnectionKind` enum (road, rail, port, …)           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod connection;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use connection::ConnectionKind;
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use rng::{derive_seed, SimRng};
