//! Dijkstra shortest-path search and the randomized alternative-path
//! derivation.
//!
//! # Edge weights
//!
//! The weight of an edge is its **explicit** distance when the loader
//! supplied one, else exactly `1.0` — *not* the haversine fallback the
//! capacity model uses.  On a network without explicit distances the search
//! therefore minimizes hop count.  This is deliberate: mixing computed
//! geographic distances into the weights would change which routes existing
//! scenarios pick.
//!
//! # Tie-breaking
//!
//! The search uses a binary min-heap ordered by `(cost, NodeId)`.  Among
//! equally cheap frontier nodes the lowest `NodeId` — node *insertion
//! order* — is settled first, and strict-`<` relaxation keeps the
//! first-found predecessor among equal-cost paths.  Both rules together make
//! the "first found" route reproducible for a given network.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ff_core::{EdgeId, NodeId, SimRng};
use ff_network::FreightNetwork;

use crate::route::Route;

// ── Cost ordering ─────────────────────────────────────────────────────────────

/// Path cost wrapper giving `f64` a total order for heap use.  Costs are
/// finite and non-negative (unit or km weights), so `total_cmp` is a proper
/// ordering here.
#[derive(Copy, Clone, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

// ── Shortest path ─────────────────────────────────────────────────────────────

/// Compute the main (shortest) route from `start` to `end`.
///
/// Returns `[start]` when `start == end`, and the degenerate single-node
/// route `[end]` when no path exists — never an error.  Both ids must have
/// been issued by `network`'s builder.
pub fn shortest_path(network: &FreightNetwork, start: NodeId, end: NodeId) -> Route {
    dijkstra(network, start, end, None)
}

/// Dijkstra with an optional single excluded edge (the "derived network" of
/// the alternative-path search, without copying the graph).
fn dijkstra(
    network:  &FreightNetwork,
    start:    NodeId,
    end:      NodeId,
    excluded: Option<EdgeId>,
) -> Route {
    let n = network.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = predecessor node on the best path; INVALID for unreached nodes.
    let mut prev = vec![NodeId::INVALID; n];

    dist[start.index()] = 0.0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), start)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == end {
            break;
        }

        // Skip stale heap entries.
        if cost.0 > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            if Some(edge) == excluded {
                continue;
            }
            let neighbor = network.edge_to[edge.index()];
            let weight = network.edge_distance_km[edge.index()].unwrap_or(1.0);
            let new_cost = cost.0 + weight;

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    // Walk predecessors back from `end`.  An unreachable destination has no
    // predecessor, leaving the single-node route [end].
    let mut nodes = vec![end];
    let mut cur = end;
    while cur != start {
        let p = prev[cur.index()];
        if p == NodeId::INVALID {
            break;
        }
        nodes.push(p);
        cur = p;
    }
    nodes.reverse();
    Route::new(nodes)
}

// ── Alternative path ──────────────────────────────────────────────────────────

/// Compute a best-effort structurally different route from `start` to `end`.
///
/// Computes the main route, then delegates to [`derive_alternative`].
/// Repeated calls with the same inputs may return different routes — the
/// randomness is intentional; seed the supplied [`SimRng`] for
/// reproducibility.
pub fn alternative_path(
    network: &FreightNetwork,
    start:   NodeId,
    end:     NodeId,
    rng:     &mut SimRng,
) -> Route {
    let route_a = shortest_path(network, start, end);
    derive_alternative(network, &route_a, rng)
}

/// Derive an alternative to an already-computed main route.
///
/// One edge of `route_a` is picked uniformly at random (by edge index along
/// the path) and excluded from a re-search.  Routes with fewer than 3 nodes
/// have no meaningful alternative and are returned unchanged — in that case
/// **nothing is drawn** from `rng`, which keeps the per-shipment draw order
/// of the simulator fixed.
pub fn derive_alternative(
    network: &FreightNetwork,
    route_a: &Route,
    rng:     &mut SimRng,
) -> Route {
    if route_a.len() < 3 {
        return route_a.clone();
    }
    let hop_index = rng.gen_range(0..route_a.hop_count());
    alternative_with_removed(network, route_a, hop_index)
}

/// Deterministic core of the alternative-path derivation: re-search with the
/// `hop_index`-th edge of `route_a` excluded, falling back to `route_a` when
/// the re-search finds no path.
///
/// Exposed for tests and tooling that need a forced edge choice.
pub fn alternative_with_removed(
    network:   &FreightNetwork,
    route_a:   &Route,
    hop_index: usize,
) -> Route {
    debug_assert!(hop_index < route_a.hop_count());

    let nodes = route_a.nodes();
    let start = nodes[0];
    let end = nodes[nodes.len() - 1];

    let (from, to) = (nodes[hop_index], nodes[hop_index + 1]);
    // Hops of a found route are edges of the network it was searched on.
    let excluded = network.edge_between(from, to);

    let route_b = dijkstra(network, start, end, excluded);
    if route_b.len() < 2 {
        return route_a.clone();
    }
    route_b
}
