//! Common types and utilities shared across the simulator.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers and bounds (PageId, FrameCapacity)

mod capacity;
pub mod config;
pub mod error;
mod page_id;

pub use capacity::FrameCapacity;
pub use error::{Error, Result};
pub use page_id::PageId;
