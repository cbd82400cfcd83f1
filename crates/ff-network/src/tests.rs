//! Unit tests for ff-network.

#[cfg(test)]
mod helpers {
    use ff_core::{ConnectionKind, GeoPoint};

    use crate::{EdgeSpec, FreightNetwork, FreightNetworkBuilder};

    /// Three nodes in a line with explicit 100 km road edges:
    /// A → B → C.
    pub fn line_network() -> FreightNetwork {
        let mut b = FreightNetworkBuilder::new();
        b.add_node("A", GeoPoint::new(0.0, 0.0));
        b.add_node("B", GeoPoint::new(0.0, 1.0));
        b.add_node("C", GeoPoint::new(0.0, 2.0));
        b.add_edge("A", "B", road(100.0));
        b.add_edge("B", "C", road(100.0));
        b.build()
    }

    pub fn road(distance_km: f64) -> EdgeSpec {
        EdgeSpec {
            distance_km: Some(distance_km),
            connection: ConnectionKind::Road,
            ..EdgeSpec::default()
        }
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ff_core::{ConnectionKind, GeoPoint};

    use super::helpers::{line_network, road};
    use crate::{EdgeSpec, FreightNetworkBuilder, RejectReason};

    #[test]
    fn empty_build() {
        let net = FreightNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn line_structure() {
        let net = line_network();
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.edge_count(), 2);

        let a = net.node_id("A").unwrap();
        let b = net.node_id("B").unwrap();
        let c = net.node_id("C").unwrap();

        assert_eq!(net.node_name(a), "A");
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(b), 1);
        assert_eq!(net.out_degree(c), 0); // directed — no return edges

        let ab = net.edge_between(a, b).unwrap();
        assert_eq!(net.edge_endpoints(ab), (a, b));
        assert!(net.edge_between(b, a).is_none());
    }

    #[test]
    fn node_ids_follow_insertion_order() {
        let net = line_network();
        let a = net.node_id("A").unwrap();
        let b = net.node_id("B").unwrap();
        let c = net.node_id("C").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn unknown_endpoint_edge_is_skipped_and_recorded() {
        let mut b = FreightNetworkBuilder::new();
        b.add_node("A", GeoPoint::new(0.0, 0.0));
        b.add_node("B", GeoPoint::new(0.0, 1.0));
        b.add_edge("A", "B", road(10.0));
        b.add_edge("A", "Nowhere", road(10.0));
        b.add_edge("Ghost", "B", road(10.0));
        let net = b.build();

        assert_eq!(net.edge_count(), 1);
        let rejected = net.rejected_edges();
        assert_eq!(rejected.len(), 2);
        assert!(rejected
            .iter()
            .all(|r| r.reason == RejectReason::UnknownEndpoint));
        assert_eq!(rejected[0].to, "Nowhere");
        assert_eq!(rejected[1].from, "Ghost");
    }

    #[test]
    fn duplicate_pair_keeps_first() {
        let mut b = FreightNetworkBuilder::new();
        b.add_node("A", GeoPoint::new(0.0, 0.0));
        b.add_node("B", GeoPoint::new(0.0, 1.0));
        b.add_edge("A", "B", road(10.0));
        b.add_edge("A", "B", road(999.0));
        let net = b.build();

        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.edge_distance_km[0], Some(10.0));
        assert_eq!(net.rejected_edges().len(), 1);
        assert_eq!(net.rejected_edges()[0].reason, RejectReason::DuplicatePair);
    }

    #[test]
    fn duplicate_node_name_keeps_first() {
        let mut b = FreightNetworkBuilder::new();
        let first = b.add_node("A", GeoPoint::new(0.0, 0.0));
        let again = b.add_node("A", GeoPoint::new(50.0, 50.0));
        assert_eq!(first, again);
        let net = b.build();
        assert_eq!(net.node_count(), 1);
        assert_eq!(net.node_pos[0], GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn edges_may_precede_their_nodes() {
        let mut b = FreightNetworkBuilder::new();
        b.add_edge("A", "B", road(10.0));
        b.add_node("A", GeoPoint::new(0.0, 0.0));
        b.add_node("B", GeoPoint::new(0.0, 1.0));
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        assert!(net.rejected_edges().is_empty());
    }

    #[test]
    fn csr_out_edges_point_away_from_source() {
        let net = line_network();
        let a = net.node_id("A").unwrap();
        for e in net.out_edges(a) {
            assert_eq!(net.edge_from[e.index()], a);
        }
    }

    #[test]
    fn node_modes_are_carried() {
        let mut b = FreightNetworkBuilder::new();
        b.add_node_with_modes(
            "Rotterdam",
            GeoPoint::new(51.92, 4.48),
            vec!["port".into(), "rail".into()],
        );
        let net = b.build();
        assert_eq!(net.node_modes[0], vec!["port", "rail"]);
    }

    #[test]
    fn edge_key_uses_arrow_separator() {
        let net = line_network();
        let a = net.node_id("A").unwrap();
        let b = net.node_id("B").unwrap();
        let ab = net.edge_between(a, b).unwrap();
        assert_eq!(net.edge_key(ab), "A→B");
    }

    #[test]
    fn effective_distance_prefers_explicit() {
        let mut b = FreightNetworkBuilder::new();
        b.add_node("A", GeoPoint::new(0.0, 0.0));
        b.add_node("B", GeoPoint::new(1.0, 0.0)); // ~111 km apart
        b.add_edge("A", "B", road(250.0));
        b.add_edge("B", "A", EdgeSpec { connection: ConnectionKind::Road, ..EdgeSpec::default() });
        let net = b.build();

        let a = net.node_id("A").unwrap();
        let bn = net.node_id("B").unwrap();
        let ab = net.edge_between(a, bn).unwrap();
        let ba = net.edge_between(bn, a).unwrap();

        assert_eq!(net.effective_distance_km(ab), 250.0);
        let fallback = net.effective_distance_km(ba);
        assert!((fallback - 111.19).abs() < 0.5, "got {fallback}");
    }
}

// ── Capacity model ────────────────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use ff_core::{ConnectionKind, EdgeId, GeoPoint};

    use crate::{capacity_for_all_edges, CapacityProfile, EdgeSpec, FreightNetwork, FreightNetworkBuilder};

    /// One edge per connection kind, all with the given explicit distance.
    fn kind_network(distance_km: f64) -> FreightNetwork {
        let kinds = [
            ConnectionKind::Unspecified,
            ConnectionKind::Road,
            ConnectionKind::Highway,
            ConnectionKind::Rail,
            ConnectionKind::Port,
            ConnectionKind::Air,
        ];
        let mut b = FreightNetworkBuilder::new();
        b.add_node("Hub", GeoPoint::new(0.0, 0.0));
        for kind in kinds {
            b.add_node(kind.as_str(), GeoPoint::new(0.0, 1.0));
            b.add_edge(
                "Hub",
                kind.as_str(),
                EdgeSpec {
                    distance_km: Some(distance_km),
                    connection: kind,
                    ..EdgeSpec::default()
                },
            );
        }
        b.build()
    }

    fn capacity_of(net: &FreightNetwork, kind: ConnectionKind, profile: CapacityProfile) -> u32 {
        let hub = net.node_id("Hub").unwrap();
        let to = net.node_id(kind.as_str()).unwrap();
        let edge = net.edge_between(hub, to).unwrap();
        profile.capacity(net, edge)
    }

    #[test]
    fn simulation_bands() {
        for (dist, expected) in [(601.0, 4000), (300.0, 1500), (200.0, 500), (50.0, 500)] {
            let net = kind_network(dist);
            assert_eq!(
                capacity_of(&net, ConnectionKind::Road, CapacityProfile::Simulation),
                expected,
                "distance {dist}"
            );
        }
    }

    #[test]
    fn display_bands() {
        for (dist, expected) in [(601.0, 8000), (300.0, 4000), (200.0, 1500), (50.0, 1500)] {
            let net = kind_network(dist);
            assert_eq!(
                capacity_of(&net, ConnectionKind::Road, CapacityProfile::Display),
                expected,
                "distance {dist}"
            );
        }
    }

    #[test]
    fn multipliers_differ_between_profiles() {
        let net = kind_network(100.0);
        // Simulation short band base 500: rail ×1.3 → 650, highway ×1.2 → 600.
        assert_eq!(capacity_of(&net, ConnectionKind::Rail, CapacityProfile::Simulation), 650);
        assert_eq!(capacity_of(&net, ConnectionKind::Highway, CapacityProfile::Simulation), 600);
        // Display short band base 1500: rail ×1.5 → 2250, highway ×1.3 → 1950.
        assert_eq!(capacity_of(&net, ConnectionKind::Rail, CapacityProfile::Display), 2250);
        assert_eq!(capacity_of(&net, ConnectionKind::Highway, CapacityProfile::Display), 1950);
    }

    #[test]
    fn port_and_air_shared_across_profiles() {
        let net = kind_network(100.0);
        assert_eq!(capacity_of(&net, ConnectionKind::Port, CapacityProfile::Simulation), 1000);
        assert_eq!(capacity_of(&net, ConnectionKind::Air, CapacityProfile::Simulation), 1500);
        assert_eq!(capacity_of(&net, ConnectionKind::Port, CapacityProfile::Display), 3000);
        assert_eq!(capacity_of(&net, ConnectionKind::Air, CapacityProfile::Display), 4500);
    }

    #[test]
    fn unspecified_matches_road() {
        let net = kind_network(300.0);
        for profile in [CapacityProfile::Simulation, CapacityProfile::Display] {
            assert_eq!(
                capacity_of(&net, ConnectionKind::Unspecified, profile),
                capacity_of(&net, ConnectionKind::Road, profile),
            );
        }
    }

    #[test]
    fn monotone_in_multiplier_ordering() {
        // road ≤ highway ≤ rail ≤ port ≤ air for equal distance, both profiles.
        let ordering = [
            ConnectionKind::Road,
            ConnectionKind::Highway,
            ConnectionKind::Rail,
            ConnectionKind::Port,
            ConnectionKind::Air,
        ];
        for dist in [100.0, 300.0, 700.0] {
            let net = kind_network(dist);
            for profile in [CapacityProfile::Simulation, CapacityProfile::Display] {
                let caps: Vec<u32> = ordering
                    .iter()
                    .map(|&k| capacity_of(&net, k, profile))
                    .collect();
                assert!(
                    caps.windows(2).all(|w| w[0] <= w[1]),
                    "not monotone at {dist} km under {profile:?}: {caps:?}"
                );
            }
        }
    }

    #[test]
    fn haversine_fallback_selects_band() {
        // No explicit distance; endpoints ~667 km apart → long band.
        let mut b = FreightNetworkBuilder::new();
        b.add_node("A", GeoPoint::new(0.0, 0.0));
        b.add_node("B", GeoPoint::new(6.0, 0.0));
        b.add_edge("A", "B", EdgeSpec::default());
        let net = b.build();
        assert_eq!(
            CapacityProfile::Simulation.capacity(&net, EdgeId(0)),
            4000
        );
    }

    #[test]
    fn declared_capacity_is_exposed_but_ignored() {
        let mut b = FreightNetworkBuilder::new();
        b.add_node("A", GeoPoint::new(0.0, 0.0));
        b.add_node("B", GeoPoint::new(0.0, 1.0));
        b.add_edge(
            "A",
            "B",
            EdgeSpec {
                distance_km: Some(100.0),
                connection: ConnectionKind::Road,
                daily_capacity: Some(7),
                ..EdgeSpec::default()
            },
        );
        let net = b.build();
        assert_eq!(net.declared_capacity(EdgeId(0)), Some(7));
        // The model does not consult the declared value.
        assert_eq!(CapacityProfile::Simulation.capacity(&net, EdgeId(0)), 500);
    }

    #[test]
    fn batch_export_covers_all_edges_and_is_idempotent() {
        let net = super::helpers::line_network();
        let first = capacity_for_all_edges(&net, CapacityProfile::Simulation);
        let second = capacity_for_all_edges(&net, CapacityProfile::Simulation);
        assert_eq!(first.len(), net.edge_count());
        assert_eq!(first, second);
        assert_eq!(first["A→B"], 500);
        assert_eq!(first["B→C"], 500);
    }
}
