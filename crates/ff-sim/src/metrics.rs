//! Network-load metrics: post-pass over all edges after a simulation run.

use ff_core::EdgeId;
use ff_network::{CapacityProfile, FreightNetwork};

use crate::usage::UsageMap;

/// Summary of how loaded the network is after a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkMetrics {
    /// Number of edges whose load factor exceeds 1.0.
    pub bottleneck_count: usize,
    /// The highest load factor seen on any edge.
    pub max_load: f64,
    /// The edge achieving `max_load`; `None` when no edge has positive load.
    pub worst_edge: Option<EdgeId>,
}

impl NetworkMetrics {
    /// Aggregate over **every** edge of the network, not just edges with
    /// usage, in `EdgeId` order.
    ///
    /// Load factor is `used / capacity` with the capacity clamped to ≥ 1 —
    /// the model always yields a positive capacity, but the clamp keeps the
    /// division safe for any future capacity source.  Ties on `max_load`
    /// keep the first-encountered edge.
    pub fn aggregate(
        network: &FreightNetwork,
        combined: &UsageMap,
        profile:  CapacityProfile,
    ) -> NetworkMetrics {
        let mut metrics = NetworkMetrics {
            bottleneck_count: 0,
            max_load:         0.0,
            worst_edge:       None,
        };

        for i in 0..network.edge_count() {
            let edge = EdgeId(i as u32);
            let used = combined.get(edge);
            let capacity = profile.capacity(network, edge).max(1);
            let load = used as f64 / capacity as f64;

            if load > metrics.max_load {
                metrics.max_load = load;
                metrics.worst_edge = Some(edge);
            }
            if load > 1.0 {
                metrics.bottleneck_count += 1;
            }
        }

        metrics
    }

    /// External key of the worst edge, or the empty string when none.
    pub fn worst_edge_key(&self, network: &FreightNetwork) -> String {
        self.worst_edge
            .map(|edge| network.edge_key(edge))
            .unwrap_or_default()
    }
}

/// The `n` most loaded edges with positive load, by descending load factor.
///
/// Equal loads keep `EdgeId` (insertion) order.  The map display surfaces
/// the top few of these as the bottleneck list.
pub fn top_bottlenecks(
    network:  &FreightNetwork,
    combined: &UsageMap,
    profile:  CapacityProfile,
    n:        usize,
) -> Vec<(EdgeId, f64)> {
    let mut loaded: Vec<(EdgeId, f64)> = (0..network.edge_count())
        .filter_map(|i| {
            let edge = EdgeId(i as u32);
            let used = combined.get(edge);
            if used == 0 {
                return None;
            }
            let capacity = profile.capacity(network, edge).max(1);
            Some((edge, used as f64 / capacity as f64))
        })
        .collect();

    loaded.sort_by(|a, b| b.1.total_cmp(&a.1)); // stable: ties keep id order
    loaded.truncate(n);
    loaded
}
