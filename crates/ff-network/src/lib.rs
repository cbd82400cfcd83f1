//! `ff-network` — freight network graph and capacity model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`network`]  | `FreightNetwork` (CSR + name interning), `FreightNetworkBuilder`, `EdgeSpec` |
//! | [`capacity`] | `CapacityProfile` (Simulation / Display), `capacity_for_all_edges` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod capacity;
pub mod network;

#[cfg(test)]
mod tests;

pub use capacity::{capacity_for_all_edges, CapacityProfile};
pub use network::{
    edge_key_for, EdgeSpec, FreightNetwork, FreightNetworkBuilder, RejectReason, RejectedEdge,
    EDGE_KEY_SEPARATOR,
};
