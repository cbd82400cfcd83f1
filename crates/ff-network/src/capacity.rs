//! Edge capacity model: daily throughput from distance band and
//! infrastructure kind.
//!
//! # Two profiles, on purpose
//!
//! Capacities have historically been computed in two places with *different*
//! constants: the routing/metrics path uses one set of distance bands and
//! multipliers, the map-display path another.  Unifying them would silently
//! change simulation outcomes, so both sets are kept as explicitly named
//! profiles.  Routing decisions and bottleneck metrics use
//! [`CapacityProfile::Simulation`]; [`CapacityProfile::Display`] exists for
//! consumers that must match what the map shows.
//!
//! The declared per-edge `daily_capacity` field is deliberately **not**
//! consulted here — neither capacity call site ever read it.  It stays
//! available via `FreightNetwork::declared_capacity`.

use rustc_hash::FxHashMap;

use ff_core::{ConnectionKind, EdgeId};

use crate::network::FreightNetwork;

/// Named constant set for capacity derivation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapacityProfile {
    /// Constants used by the routing simulator and the metrics aggregator.
    Simulation,
    /// Constants used by the map-display path.
    Display,
}

impl CapacityProfile {
    /// Base daily capacity by distance band.
    ///
    /// Bands share their thresholds (600 km, 200 km) across profiles; only
    /// the per-band unit counts differ.
    fn base_units(self, distance_km: f64) -> u32 {
        match self {
            CapacityProfile::Simulation => {
                if distance_km > 600.0 {
                    4000
                } else if distance_km > 200.0 {
                    1500
                } else {
                    500
                }
            }
            CapacityProfile::Display => {
                if distance_km > 600.0 {
                    8000
                } else if distance_km > 200.0 {
                    4000
                } else {
                    1500
                }
            }
        }
    }

    /// Infrastructure multiplier.  Unspecified (and any future kind) is 1.0.
    fn multiplier(self, kind: ConnectionKind) -> f64 {
        match (self, kind) {
            (CapacityProfile::Simulation, ConnectionKind::Rail)    => 1.3,
            (CapacityProfile::Display,    ConnectionKind::Rail)    => 1.5,
            (CapacityProfile::Simulation, ConnectionKind::Highway) => 1.2,
            (CapacityProfile::Display,    ConnectionKind::Highway) => 1.3,
            (_,                           ConnectionKind::Port)    => 2.0,
            (_,                           ConnectionKind::Air)     => 3.0,
            (_, ConnectionKind::Road | ConnectionKind::Unspecified) => 1.0,
            (_, _) => 1.0,
        }
    }

    /// Modeled daily capacity of `edge` in units/day.
    ///
    /// Effective distance is the edge's explicit distance when present, else
    /// the haversine distance between its endpoints.  The product of base
    /// units and multiplier is rounded to the nearest integer.  Every band is
    /// positive, so the result is ≥ 1; consumers dividing by a capacity that
    /// may come from elsewhere should still clamp (see `ff-sim` metrics).
    pub fn capacity(self, network: &FreightNetwork, edge: EdgeId) -> u32 {
        let distance_km = network.effective_distance_km(edge);
        let base = self.base_units(distance_km);
        let kind = network.edge_connection[edge.index()];
        (base as f64 * self.multiplier(kind)).round() as u32
    }
}

/// Compute capacities for **every** edge in the network, keyed by the
/// externally visible `"from→to"` edge key.
///
/// Batch entry point for the external KPI layer, which consumes a full
/// capacity mapping per invocation.  Pure function of the network state:
/// calling it twice on an unchanged network yields identical mappings.
pub fn capacity_for_all_edges(
    network: &FreightNetwork,
    profile: CapacityProfile,
) -> FxHashMap<String, u32> {
    let mut out = FxHashMap::default();
    out.reserve(network.edge_count());
    for i in 0..network.edge_count() {
        let edge = EdgeId(i as u32);
        out.insert(network.edge_key(edge), profile.capacity(network, edge));
    }
    out
}
