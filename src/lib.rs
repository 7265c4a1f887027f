//! agingsim - A page replacement simulator using aging-counter LRU approximation.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           agingsim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Driver (main.rs + trace/)                   │   │
//! │  │   CLI args → FrameCapacity     trace file → [PageId]     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (sim/)                           │   │
//! │  │      simulate / Simulation / sweep + SimStats            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Replacer (replacer/)                        │   │
//! │  │   AgingPageTable: PageId → u8 age, evict smallest age    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameCapacity, Error, config)
//! - [`replacer`] - The aging page table
//! - [`sim`] - Simulation driving, statistics and capacity sweeps
//! - [`trace`] - Reading access traces
//!
//! # Quick Start
//! ```
//! use agingsim::trace::parse_trace_str;
//! use agingsim::{simulate, FrameCapacity};
//!
//! let trace = parse_trace_str("1 2 3 1 2 4").unwrap();
//! let capacity: FrameCapacity = "3".parse().unwrap();
//!
//! assert_eq!(simulate(&trace, capacity), 4);
//! ```

pub mod common;
pub mod replacer;
pub mod sim;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameCapacity, PageId, Result};

pub use replacer::{AccessOutcome, AgingPageTable};
pub use sim::{simulate, sweep, SimStats, Simulation, StatsSnapshot, SweepResult};
