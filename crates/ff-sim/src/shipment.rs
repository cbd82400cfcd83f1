//! Shipments: what the simulator routes.
//!
//! Shipments normally arrive from an external control surface; the generator
//! here covers the demo/testing case of uniformly random origin-destination
//! pairs.

use ff_core::SimRng;
use ff_network::FreightNetwork;

/// A single freight order: move `quantity` units from `origin` to
/// `destination`.  Endpoints are node *names*; the simulator resolves them
/// against the network and skips shipments naming unknown nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shipment {
    pub origin:      String,
    pub destination: String,
    pub quantity:    u64,
}

impl Shipment {
    pub fn new(
        origin:      impl Into<String>,
        destination: impl Into<String>,
        quantity:    u64,
    ) -> Self {
        Self {
            origin:      origin.into(),
            destination: destination.into(),
            quantity,
        }
    }
}

/// Generate `count` random unit-quantity shipments between distinct nodes.
///
/// Origin and destination are drawn uniformly; the destination is redrawn
/// until it differs from the origin.  Returns an empty list when the network
/// has fewer than two nodes (no distinct pair exists).
pub fn generate_shipments(
    network: &FreightNetwork,
    count:   usize,
    rng:     &mut SimRng,
) -> Vec<Shipment> {
    let n = network.node_count();
    if n < 2 {
        return Vec::new();
    }

    let mut shipments = Vec::with_capacity(count);
    for _ in 0..count {
        let origin = rng.gen_range(0..n);
        let mut destination = rng.gen_range(0..n);
        while destination == origin {
            destination = rng.gen_range(0..n);
        }
        shipments.push(Shipment {
            origin:      network.node_name[origin].clone(),
            destination: network.node_name[destination].clone(),
            quantity:    1,
        });
    }
    shipments
}
