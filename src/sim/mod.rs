//! Simulation driving.
//!
//! # Components
//! - [`Simulation`] - One page table plus statistics, fed a trace in order
//! - [`simulate`] - One-shot entry point returning the fault count
//! - [`sweep`] - Independent simulations over several capacities
//! - [`SimStats`] - Hit/fault/eviction counters

mod simulation;
mod stats;
mod sweep;

pub use simulation::{simulate, Simulation};
pub use stats::{SimStats, StatsSnapshot};
pub use sweep::{sweep, SweepResult};
