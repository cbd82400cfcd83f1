//! `ff-sim` — the freightflow routing simulator.
//!
//! # Run shape
//!
//! ```text
//! for each shipment (in list order):
//!   ① main route        — Dijkstra shortest path
//!   ② alternative route — remove one random edge of ①, re-search,
//!                         fall back to ① when disconnected
//!   ③ coin flip         — entire quantity goes via ① with probability
//!                         main_route_share, else via ②
//!   ④ accumulate        — quantity per hop into combined usage,
//!                         1 per hop into main or alt usage
//! then: aggregate load metrics over combined usage (Simulation profile)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | [`simulate_replications`] runs on Rayon's thread pool.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ff_core::SimRng;
//! use ff_sim::{generate_shipments, simulate};
//!
//! let mut rng = SimRng::new(42);
//! let shipments = generate_shipments(&network, 500, &mut rng);
//! let outcome = simulate(&network, &shipments, 0.8, &mut rng)?;
//! println!("bottlenecks: {}", outcome.metrics.bottleneck_count);
//! ```

pub mod error;
pub mod metrics;
pub mod shipment;
pub mod sim;
pub mod usage;


pub use error::{SimError, SimResult};
pub use metrics::{top_bottlenecks, NetworkMetrics};
pub use shipment::{generate_shipments, Shipment};
pub use sim::{simulate, SimulationOutcome};
pub use usage::UsageMap;

#[cfg(feature = "parallel")]
pub use sim::simulate_replications;
