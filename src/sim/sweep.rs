//! Capacity sweep - the same trace against several frame counts.
//!
//! Each capacity gets its own [`Simulation`], so runs never share a page
//! table. Work is spread over a small pool of scoped threads; within a
//! single run, accesses are still applied strictly in trace order.

use std::num::NonZeroUsize;
use std::thread;

use log::info;
use parking_lot::Mutex;

use crate::common::{FrameCapacity, PageId};
use crate::sim::{Simulation, StatsSnapshot};

/// Result of one run in a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Frame count used for this run.
    pub capacity: FrameCapacity,

    /// Final counters of the run.
    pub stats: StatsSnapshot,
}

impl SweepResult {
    /// Total page faults of the run.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }
}

/// Simulate `trace` once per entry of `capacities`.
///
/// Results come back in the same order as `capacities`; duplicates are
/// simulated again rather than deduplicated.
///
/// # Example
/// ```
/// use agingsim::{sweep, FrameCapacity, PageId};
///
/// let trace: Vec<PageId> = [1, 2, 3, 1, 2, 4].into_iter().map(PageId::new).collect();
/// let capacities = [1usize, 3].map(|n| FrameCapacity::try_from(n).unwrap());
///
/// let results = sweep(&trace, &capacities);
/// assert_eq!(results[0].faults(), 6);
/// assert_eq!(results[1].faults(), 4);
/// ```
pub fn sweep(trace: &[PageId], capacities: &[FrameCapacity]) -> Vec<SweepResult> {
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(capacities.len());

    info!(
        "sweeping {} capacities over {} accesses with {} workers",
        capacities.len(),
        trace.len(),
        workers
    );

    let pending = Mutex::new(capacities.iter().copied().enumerate());
    let finished: Mutex<Vec<(usize, SweepResult)>> =
        Mutex::new(Vec::with_capacity(capacities.len()));

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                // Release the queue lock before simulating
                let next = pending.lock().next();
                let Some((index, capacity)) = next else {
                    break;
                };

                let mut sim = Simulation::new(capacity);
                sim.run(trace.iter().copied());

                finished.lock().push((
                    index,
                    SweepResult {
                        capacity,
                        stats: sim.stats(),
                    },
                ));
            });
        }
    });

    let mut results = finished.into_inner();
    results.sort_unstable_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}
