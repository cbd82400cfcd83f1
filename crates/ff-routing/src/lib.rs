//! `ff-routing` — shortest-path and alternative-path search.
//!
//! Routing is **total**: every query yields a [`Route`].  Unreachable
//! destinations produce a degenerate single-node route rather than an error,
//! matching how the simulator treats unroutable shipments (skip, don't
//! abort).
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`route`] | `Route` — ordered node sequence with hop iteration           |
//! | [`path`]  | `shortest_path`, `alternative_path`, `derive_alternative`    |

pub mod path;
pub mod route;


pub use path::{alternative_path, alternative_with_removed, derive_alternative, shortest_path};
pub use route::Route;
