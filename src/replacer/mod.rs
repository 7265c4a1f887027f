//! Page replacement policy implementations (replacers).
//!
//! Currently implements:
//! - [`AgingPageTable`] - 8-bit aging-counter approximation of LRU

mod aging;

pub use aging::{AccessOutcome, AgingPageTable};
