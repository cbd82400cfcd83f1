//! Freight network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_distance_km`,
//! `edge_connection`, …) are sorted by source node and indexed by `EdgeId`.
//! The sort is stable, so outgoing edges of one node keep their insertion
//! order — the order in which the external loader supplied them.
//!
//! # Name interning
//!
//! Nodes are identified externally by unique string names.  The builder
//! interns each name to a dense `NodeId` in insertion order; `NodeId` order
//! therefore *is* insertion order, which is what makes routing tie-breaks
//! reproducible (see `ff-routing`).
//!
//! # Lenient construction
//!
//! Topology arrives pre-parsed from an external transport layer and may be
//! inconsistent.  `build()` never fails: edges referencing unknown node
//! names, and duplicate (from, to) pairs, are skipped with a
//! `tracing::warn!` and recorded on the built network for inspection.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use ff_core::{ConnectionKind, EdgeId, GeoPoint, NodeId};

/// Separator used in externally visible edge keys (`"A→B"`).
pub const EDGE_KEY_SEPARATOR: char = '→';

// ── Edge attributes ───────────────────────────────────────────────────────────

/// Loader-supplied attributes of a directed edge.  All fields optional except
/// the connection tag, which defaults to [`ConnectionKind::Unspecified`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSpec {
    /// Explicit length in kilometres.  When absent, consumers that need a
    /// distance (the capacity model) fall back to the haversine distance
    /// between the endpoints; the router falls back to a unit hop weight.
    pub distance_km: Option<f64>,
    /// Infrastructure kind driving the capacity multiplier.
    pub connection: ConnectionKind,
    /// Explicit speed in km/h.  Carried for external consumers; not used by
    /// the core model.
    pub speed_kmh: Option<f64>,
    /// Declared daily capacity.  Carried and exposed but never consulted by
    /// the capacity model (see `capacity` module docs).
    pub daily_capacity: Option<u32>,
}

/// Why an edge submitted to the builder was not admitted into the graph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RejectReason {
    /// One or both endpoint names are absent from the node collection.
    UnknownEndpoint,
    /// An earlier edge with the same (from, to) pair was already admitted.
    DuplicatePair,
}

/// Record of a skipped edge, kept on the built network as a diagnostic.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RejectedEdge {
    pub from:   String,
    pub to:     String,
    pub reason: RejectReason,
}

// ── FreightNetwork ────────────────────────────────────────────────────────────

/// Directed freight graph in CSR format plus name interning.
///
/// Read-only after construction; a simulation run never mutates it, so any
/// number of runs may share one network.  The per-node and per-edge arrays
/// are `pub` for direct indexed access on hot paths.  Do not construct
/// directly; use [`FreightNetworkBuilder`].
pub struct FreightNetwork {
    // ── Node data (indexed by NodeId = insertion order) ───────────────────
    /// Unique name of each node.
    pub node_name: Vec<String>,

    /// Geographic position of each node.
    pub node_pos: Vec<GeoPoint>,

    /// Transport-mode tags of each node (e.g. "port", "airport", "rail").
    /// Opaque to the core; carried for external consumers.
    pub node_modes: Vec<Vec<String>>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but needed when
    /// iterating all edges without a node context (metrics, capacity export).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Explicit length in kilometres, when the loader supplied one.
    pub edge_distance_km: Vec<Option<f64>>,

    /// Infrastructure kind of each edge.
    pub edge_connection: Vec<ConnectionKind>,

    /// Explicit speed in km/h, when supplied.
    pub edge_speed_kmh: Vec<Option<f64>>,

    /// Declared daily capacity, when supplied.
    pub edge_daily_capacity: Vec<Option<u32>>,

    // ── Lookup tables ─────────────────────────────────────────────────────
    name_index: FxHashMap<String, NodeId>,
    pair_index: FxHashMap<(NodeId, NodeId), EdgeId>,

    rejected: Vec<RejectedEdge>,
}

impl FreightNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_name.is_empty()
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    /// Resolve a node name to its id, if present.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Name of a node.  Panics on an id not issued by this network's builder.
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Look up the directed edge between two nodes, if one exists.
    /// Edges are identified by their ordered pair, so there is at most one.
    #[inline]
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.pair_index.get(&(from, to)).copied()
    }

    /// Source and destination of an edge.
    #[inline]
    pub fn edge_endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        (self.edge_from[edge.index()], self.edge_to[edge.index()])
    }

    // ── Derived edge attributes ───────────────────────────────────────────

    /// Effective distance of an edge in kilometres: the explicit distance if
    /// the loader supplied one, else the haversine distance between the
    /// endpoint coordinates.
    pub fn effective_distance_km(&self, edge: EdgeId) -> f64 {
        match self.edge_distance_km[edge.index()] {
            Some(km) => km,
            None => {
                let (from, to) = self.edge_endpoints(edge);
                self.node_pos[from.index()].distance_km(self.node_pos[to.index()])
            }
        }
    }

    /// Declared daily capacity, when the loader supplied one.  Not used by
    /// the capacity model; exposed for external consumers.
    #[inline]
    pub fn declared_capacity(&self, edge: EdgeId) -> Option<u32> {
        self.edge_daily_capacity[edge.index()]
    }

    // ── External edge keys ────────────────────────────────────────────────

    /// Externally visible key of an edge: `"<from>→<to>"`.
    pub fn edge_key(&self, edge: EdgeId) -> String {
        let (from, to) = self.edge_endpoints(edge);
        edge_key_for(self.node_name(from), self.node_name(to))
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// Edges submitted to the builder but not admitted into the graph.
    pub fn rejected_edges(&self) -> &[RejectedEdge] {
        &self.rejected
    }
}

/// Build the externally visible key for a directed node pair.
pub fn edge_key_for(from: &str, to: &str) -> String {
    format!("{from}{EDGE_KEY_SEPARATOR}{to}")
}

// ── FreightNetworkBuilder ─────────────────────────────────────────────────────

/// Construct a [`FreightNetwork`] incrementally, then call
/// [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order; edges may
/// reference nodes added later.  `build()` resolves names, drops invalid
/// edges (with diagnostics), sorts edges by source node, and constructs the
/// CSR arrays.
///
/// # Example
///
/// ```
/// use ff_core::GeoPoint;
/// use ff_network::{EdgeSpec, FreightNetworkBuilder};
///
/// let mut b = FreightNetworkBuilder::new();
/// b.add_node("Hamburg", GeoPoint::new(53.55, 9.99));
/// b.add_node("Munich", GeoPoint::new(48.14, 11.58));
/// b.add_edge("Hamburg", "Munich", EdgeSpec {
///     distance_km: Some(612.0),
///     ..EdgeSpec::default()
/// });
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 1); // directed — no return edge implied
/// ```
pub struct FreightNetworkBuilder {
    names:      Vec<String>,
    positions:  Vec<GeoPoint>,
    modes:      Vec<Vec<String>>,
    name_index: FxHashMap<String, NodeId>,
    raw_edges:  Vec<RawEdge>,
}

struct RawEdge {
    from: String,
    to:   String,
    spec: EdgeSpec,
}

impl FreightNetworkBuilder {
    pub fn new() -> Self {
        Self {
            names:      Vec::new(),
            positions:  Vec::new(),
            modes:      Vec::new(),
            name_index: FxHashMap::default(),
            raw_edges:  Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading a large topology.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            names:      Vec::with_capacity(nodes),
            positions:  Vec::with_capacity(nodes),
            modes:      Vec::with_capacity(nodes),
            name_index: FxHashMap::default(),
            raw_edges:  Vec::with_capacity(edges),
        }
    }

    /// Add a node without transport-mode tags.  See
    /// [`add_node_with_modes`](Self::add_node_with_modes).
    pub fn add_node(&mut self, name: impl Into<String>, pos: GeoPoint) -> NodeId {
        self.add_node_with_modes(name, pos, Vec::new())
    }

    /// Add a node and return its `NodeId` (sequential from 0, in insertion
    /// order).
    ///
    /// A repeated name keeps the first definition: the existing id is
    /// returned and the new position/tags are ignored, with a warning.
    pub fn add_node_with_modes(
        &mut self,
        name:  impl Into<String>,
        pos:   GeoPoint,
        modes: Vec<String>,
    ) -> NodeId {
        let name = name.into();
        if let Some(&existing) = self.name_index.get(&name) {
            warn!(node = %name, "duplicate node name, keeping first definition");
            return existing;
        }
        let id = NodeId(self.names.len() as u32);
        self.name_index.insert(name.clone(), id);
        self.names.push(name);
        self.positions.push(pos);
        self.modes.push(modes);
        id
    }

    /// Add a **directed** edge between two node names.
    ///
    /// Names are resolved at `build()` time, so edges may be added before
    /// their endpoints.  An edge with an endpoint that never materializes is
    /// skipped during `build()` — never an error.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, spec: EdgeSpec) {
        self.raw_edges.push(RawEdge { from: from.into(), to: to.into(), spec });
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`FreightNetwork`].
    ///
    /// Invalid edges (unknown endpoint, duplicate pair) are dropped with a
    /// `warn!` and recorded on the network.  Time complexity: O(E log E) for
    /// the edge sort.
    pub fn build(self) -> FreightNetwork {
        let node_count = self.names.len();

        // ── Resolve names, drop invalid edges ─────────────────────────────
        let mut rejected  = Vec::new();
        let mut resolved: Vec<(NodeId, NodeId, EdgeSpec)> =
            Vec::with_capacity(self.raw_edges.len());
        let mut seen_pairs: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();

        for raw in self.raw_edges {
            let (from, to) = match (
                self.name_index.get(&raw.from),
                self.name_index.get(&raw.to),
            ) {
                (Some(&f), Some(&t)) => (f, t),
                _ => {
                    warn!(from = %raw.from, to = %raw.to, "edge references unknown node, skipping");
                    rejected.push(RejectedEdge {
                        from:   raw.from,
                        to:     raw.to,
                        reason: RejectReason::UnknownEndpoint,
                    });
                    continue;
                }
            };
            if !seen_pairs.insert((from, to)) {
                warn!(from = %raw.from, to = %raw.to, "duplicate edge pair, keeping first");
                rejected.push(RejectedEdge {
                    from:   raw.from,
                    to:     raw.to,
                    reason: RejectReason::DuplicatePair,
                });
                continue;
            }
            resolved.push((from, to, raw.spec));
        }

        // Stable sort by source node: outgoing edges of one node keep their
        // insertion order.
        resolved.sort_by_key(|&(from, _, _)| from.0);

        // ── Build edge arrays from sorted resolved edges ──────────────────
        let edge_count = resolved.len();
        let mut edge_from           = Vec::with_capacity(edge_count);
        let mut edge_to             = Vec::with_capacity(edge_count);
        let mut edge_distance_km    = Vec::with_capacity(edge_count);
        let mut edge_connection     = Vec::with_capacity(edge_count);
        let mut edge_speed_kmh      = Vec::with_capacity(edge_count);
        let mut edge_daily_capacity = Vec::with_capacity(edge_count);
        let mut pair_index: FxHashMap<(NodeId, NodeId), EdgeId> = FxHashMap::default();

        for (i, (from, to, spec)) in resolved.iter().enumerate() {
            edge_from.push(*from);
            edge_to.push(*to);
            edge_distance_km.push(spec.distance_km);
            edge_connection.push(spec.connection);
            edge_speed_kmh.push(spec.speed_kmh);
            edge_daily_capacity.push(spec.daily_capacity);
            pair_index.insert((*from, *to), EdgeId(i as u32));
        }

        // ── Build CSR row pointer (node_out_start) ────────────────────────
        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &resolved {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        FreightNetwork {
            node_name: self.names,
            node_pos: self.positions,
            node_modes: self.modes,
            node_out_start,
            edge_from,
            edge_to,
            edge_distance_km,
            edge_connection,
            edge_speed_kmh,
            edge_daily_capacity,
            name_index: self.name_index,
            pair_index,
            rejected,
        }
    }
}

impl Default for FreightNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
