//! The simulation run: route every shipment, accumulate usage, aggregate
//! metrics.
//!
//! # Determinism
//!
//! A run is a pure function of the network, the shipment list, the share,
//! and the supplied [`SimRng`].  Random draws happen in a fixed order —
//! per shipment, in list order:
//!
//! 1. the alternative-path edge-removal index, drawn **only** when the main
//!    route has at least 3 nodes;
//! 2. the main/alt coin flip, always drawn.
//!
//! Shipments naming unknown nodes are skipped before either draw.  With a
//! fixed seed, two runs produce identical outcomes bit for bit.

use tracing::warn;

use ff_core::SimRng;
use ff_network::{CapacityProfile, FreightNetwork};
use ff_routing::{derive_alternative, shortest_path};

use crate::error::{SimError, SimResult};
use crate::metrics::NetworkMetrics;
use crate::shipment::Shipment;
use crate::usage::{UsageAccumulator, UsageMap};

/// Everything a simulation run produces.  Owned by the caller; the run that
/// built it holds no references back into it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationOutcome {
    /// Quantity-weighted usage over both route kinds.
    pub combined_usage: UsageMap,
    /// Hop-traversal counts of shipments routed via their main route.
    pub main_usage: UsageMap,
    /// Hop-traversal counts of shipments routed via their alternative route.
    pub alt_usage: UsageMap,
    /// Load metrics aggregated over `combined_usage` with the Simulation
    /// capacity profile.
    pub metrics: NetworkMetrics,
    /// Shipments dropped because an endpoint name was unknown.
    pub skipped_shipments: usize,
}

/// Route `shipments` over `network`, splitting traffic between main and
/// alternative routes.
///
/// `main_route_share` ∈ [0, 1] is the probability that a shipment's *entire*
/// quantity travels its main (shortest) route; otherwise it travels the
/// alternative route.  The split happens per shipment by independent coin
/// flip — in expectation, across many shipments, the population divides by
/// the share; no single shipment is ever split.
///
/// Shipments whose endpoints resolve but cannot be connected produce
/// degenerate routes and accumulate nothing; they are not errors.
pub fn simulate(
    network:          &FreightNetwork,
    shipments:        &[Shipment],
    main_route_share: f64,
    rng:              &mut SimRng,
) -> SimResult<SimulationOutcome> {
    if network.is_empty() {
        return Err(SimError::EmptyNetwork);
    }
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&main_route_share) {
        return Err(SimError::InvalidShare(main_route_share));
    }

    let mut usage = UsageAccumulator::new();
    let mut skipped_shipments = 0usize;

    for shipment in shipments {
        let (Some(origin), Some(destination)) = (
            network.node_id(&shipment.origin),
            network.node_id(&shipment.destination),
        ) else {
            warn!(
                origin = %shipment.origin,
                destination = %shipment.destination,
                "shipment references unknown node, skipping"
            );
            skipped_shipments += 1;
            continue;
        };

        let route_a = shortest_path(network, origin, destination);
        let route_b = derive_alternative(network, &route_a, rng);

        let via_main = rng.random::<f64>() < main_route_share;
        let chosen = if via_main { &route_a } else { &route_b };

        usage.record(network, chosen, shipment.quantity, via_main);
    }

    let (combined_usage, main_usage, alt_usage) = usage.finish();
    let metrics =
        NetworkMetrics::aggregate(network, &combined_usage, CapacityProfile::Simulation);

    Ok(SimulationOutcome {
        combined_usage,
        main_usage,
        alt_usage,
        metrics,
        skipped_shipments,
    })
}

/// Run `replications` independent simulations of the same scenario on
/// Rayon's thread pool.
///
/// Each replication owns its RNG (seed derived from `base_seed` and the
/// replication index) and its usage maps; the network is shared read-only.
/// This is the only concurrency the engine supports — state is never shared
/// between runs.
#[cfg(feature = "parallel")]
pub fn simulate_replications(
    network:          &FreightNetwork,
    shipments:        &[Shipment],
    main_route_share: f64,
    base_seed:        u64,
    replications:     usize,
) -> SimResult<Vec<SimulationOutcome>> {
    use rayon::prelude::*;

    use ff_core::rng::derive_seed;

    (0..replications as u64)
        .into_par_iter()
        .map(|index| {
            let mut rng = SimRng::new(derive_seed(base_seed, index));
            simulate(network, shipments, main_route_share, &mut rng)
        })
        .collect()
}
