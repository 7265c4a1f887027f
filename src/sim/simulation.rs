//! Simulation - drives an aging page table over an access trace.

use log::debug;

use crate::common::{FrameCapacity, PageId};
use crate::replacer::{AccessOutcome, AgingPageTable};
use crate::sim::{SimStats, StatsSnapshot};

/// One independent run of the aging policy.
///
/// Owns its page table and statistics outright. Several simulations can
/// exist in the same process without sharing anything.
///
/// # Usage
/// ```
/// use agingsim::{FrameCapacity, PageId, Simulation};
///
/// let mut sim = Simulation::new(FrameCapacity::try_from(3usize).unwrap());
/// sim.run([1, 2, 3, 1, 2, 4].map(PageId::new));
///
/// assert_eq!(sim.faults(), 4);
/// assert_eq!(sim.stats().hits, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    table: AgingPageTable,
    stats: SimStats,
}

impl Simulation {
    /// Create a fresh simulation with an empty resident set.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            table: AgingPageTable::new(capacity),
            stats: SimStats::new(),
        }
    }

    /// Apply a single access.
    pub fn step(&mut self, page_id: PageId) -> AccessOutcome {
        let outcome = self.table.access(page_id);
        self.stats.record(outcome);
        outcome
    }

    /// Apply every access of `trace` in order.
    ///
    /// Returns the total fault count after the last access.
    pub fn run<I>(&mut self, trace: I) -> u64
    where
        I: IntoIterator<Item = PageId>,
    {
        for page_id in trace {
            self.step(page_id);
        }

        debug!(
            "run finished with {}: {}",
            self.table.capacity(),
            self.stats.snapshot()
        );
        self.faults()
    }

    /// Total page faults so far.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.table.faults()
    }

    /// Snapshot of the hit/fault/eviction counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// The underlying page table, for inspection.
    pub fn table(&self) -> &AgingPageTable {
        &self.table
    }
}

/// Run `trace` against an empty table of `capacity` frames and return the
/// number of page faults.
///
/// # Example
/// ```
/// use agingsim::{simulate, FrameCapacity, PageId};
///
/// let trace: Vec<PageId> = [1, 2, 1, 2, 1, 2].into_iter().map(PageId::new).collect();
/// assert_eq!(simulate(&trace, FrameCapacity::try_from(2usize).unwrap()), 2);
/// ```
pub fn simulate(trace: &[PageId], capacity: FrameCapacity) -> u64 {
    Simulation::new(capacity).run(trace.iter().copied())
}
