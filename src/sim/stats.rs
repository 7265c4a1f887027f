//! Simulation statistics tracking.

use std::fmt;

use crate::replacer::AccessOutcome;

/// Counters maintained by a [`Simulation`](crate::sim::Simulation).
///
/// A simulation is single-threaded, so these are plain integers updated
/// through `&mut self`. Use [`SimStats::snapshot`] to get a copy for
/// display or comparison.
///
/// # Example
/// ```
/// use agingsim::replacer::AccessOutcome;
/// use agingsim::SimStats;
///
/// let mut stats = SimStats::new();
/// stats.record(AccessOutcome::Fault);
/// stats.record(AccessOutcome::Hit);
/// assert_eq!(stats.snapshot().hit_rate(), 0.5);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SimStats {
    /// Total accesses processed.
    accesses: u64,

    /// Accesses whose page was already resident.
    hits: u64,

    /// Accesses whose page was not resident.
    faults: u64,

    /// Faults that had to remove a resident page first.
    evictions: u64,
}

impl SimStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for the outcome of one access.
    pub fn record(&mut self, outcome: AccessOutcome) {
        self.accesses += 1;
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Fault => self.faults += 1,
            AccessOutcome::Evicted { .. } => {
                self.faults += 1;
                self.evictions += 1;
            }
        }
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            accesses: self.accesses,
            hits: self.hits,
            faults: self.faults,
            evictions: self.evictions,
        }
    }
}

/// A point-in-time copy of simulation statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub accesses: u64,
    pub hits: u64,
    pub faults: u64,
    pub evictions: u64,
}

impl StatsSnapshot {
    /// Fraction of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    #[test]
    fn test_stats_new() {
        let stats = SimStats::new();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot, StatsSnapshot::default());
        assert_eq!(snapshot.hit_rate(), 0.0);
        assert_eq!(snapshot.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SimStats::new();

        stats.record(AccessOutcome::Fault);
        stats.record(AccessOutcome::Evicted {
            victim: PageId::new(1),
            age: 0,
        });
        stats.record(AccessOutcome::Hit);
        stats.record(AccessOutcome::Hit);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.accesses, 4);
        assert_eq!(snapshot.hits, 2);
        assert_eq!(snapshot.faults, 2);
        assert_eq!(snapshot.evictions, 1);
        assert_eq!(snapshot.hit_rate(), 0.5);
        assert_eq!(snapshot.fault_rate(), 0.5);
    }

    #[test]
    fn test_stats_display() {
        let snapshot = StatsSnapshot {
            accesses: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", snapshot);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("evictions: 5"));
        assert!(display.contains("80.00%"));
    }
}
