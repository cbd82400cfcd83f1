//! Route type: an ordered node sequence from origin to destination.

use ff_core::NodeId;
use ff_network::FreightNetwork;

/// The result of a path search: the visited nodes in order, inclusive of
/// both endpoints.
///
/// A route always holds at least one node.  When the destination is
/// unreachable the search yields the single-node route `[end]`; callers
/// detect this with [`starts_at`](Self::starts_at) (a found route begins at
/// the search origin) or simply by `hop_count() == 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    nodes: Vec<NodeId>,
}

impl Route {
    pub(crate) fn new(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty());
        Route { nodes }
    }

    /// The visited nodes in order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes on the route (≥ 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges traversed; 0 for trivial and not-found routes.
    pub fn hop_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Consecutive (from, to) node pairs along the route.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// `true` when the route begins at `start` — i.e. the search actually
    /// reached the destination (or start == end).  A failed search produces
    /// `[end]`, which begins at the destination instead.
    pub fn starts_at(&self, start: NodeId) -> bool {
        self.nodes.first() == Some(&start)
    }

    /// Node names along the route, for external consumers keyed by name.
    pub fn names<'net>(&self, network: &'net FreightNetwork) -> Vec<&'net str> {
        self.nodes.iter().map(|&n| network.node_name(n)).collect()
    }
}
