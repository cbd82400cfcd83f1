//! Per-edge usage maps and the accumulator that builds them.
//!
//! # Two accumulation semantics, on purpose
//!
//! A simulation run produces three maps with *different* units:
//!
//! - **combined** — quantity-weighted: every hop of a chosen route gains the
//!   shipment's full quantity.
//! - **main** / **alt** — hop-count-weighted: every hop gains exactly 1,
//!   regardless of quantity, on whichever side the shipment was routed.
//!
//! The asymmetry is preserved under distinct maps rather than unified; the
//! external consumers (heatmap vs. route-share overlays) were built against
//! exactly these units.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use ff_core::EdgeId;
use ff_network::FreightNetwork;
use ff_routing::Route;

// ── UsageMap ──────────────────────────────────────────────────────────────────

/// Immutable snapshot of accumulated per-edge usage.  Keys absent from the
/// map are implicitly zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageMap {
    used: FxHashMap<EdgeId, u64>,
}

impl UsageMap {
    /// Accumulated value for `edge`; 0 when the edge was never used.
    #[inline]
    pub fn get(&self, edge: EdgeId) -> u64 {
        self.used.get(&edge).copied().unwrap_or(0)
    }

    /// Number of edges with a non-zero entry.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Iterate over (edge, value) entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, u64)> + '_ {
        self.used.iter().map(|(&e, &v)| (e, v))
    }

    /// Export as a name-keyed map (`"from→to"` keys, sorted) for external
    /// consumers — the visualization and KPI layers key edges by name.
    pub fn to_keyed(&self, network: &FreightNetwork) -> BTreeMap<String, u64> {
        self.used
            .iter()
            .map(|(&edge, &v)| (network.edge_key(edge), v))
            .collect()
    }

    fn add(&mut self, edge: EdgeId, amount: u64) {
        *self.used.entry(edge).or_insert(0) += amount;
    }
}

// ── UsageAccumulator ──────────────────────────────────────────────────────────

/// Owned, exclusively-held accumulation state for one simulation run.
/// Populated via [`record`](Self::record), then frozen with
/// [`finish`](Self::finish); the snapshots are never mutated afterwards.
pub(crate) struct UsageAccumulator {
    combined: UsageMap,
    main:     UsageMap,
    alt:      UsageMap,
}

impl UsageAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            combined: UsageMap::default(),
            main:     UsageMap::default(),
            alt:      UsageMap::default(),
        }
    }

    /// Record one routed shipment: quantity per hop into `combined`, one per
    /// hop into `main` or `alt` depending on the chosen side.  Routes with
    /// no hops (trivial or not-found) accumulate nothing.
    pub(crate) fn record(
        &mut self,
        network:  &FreightNetwork,
        route:    &Route,
        quantity: u64,
        via_main: bool,
    ) {
        for (from, to) in route.hops() {
            // Hops of a found route are edges of the network they were
            // searched on; a miss here would mean the route and network are
            // out of sync, and the hop is skipped.
            let Some(edge) = network.edge_between(from, to) else {
                continue;
            };
            self.combined.add(edge, quantity);
            if via_main {
                self.main.add(edge, 1);
            } else {
                self.alt.add(edge, 1);
            }
        }
    }

    /// Freeze into immutable snapshots: (combined, main, alt).
    pub(crate) fn finish(self) -> (UsageMap, UsageMap, UsageMap) {
        (self.combined, self.main, self.alt)
    }
}
