//! Aging replacement policy.
//!
//! Approximates LRU with an 8-bit shift register per resident page. Every
//! access shifts all registers right by one bit and sets the high bit of the
//! page being touched, so a page's age byte is a bitmap of the rounds in
//! which it was accessed (most recent round in the high bit).
//!
//! ```text
//!  round:        t-0  t-1  t-2  ...  t-7
//!  age byte:   [  1 |  0 |  1 | ... |  0 ]   = 0b1010_0000 = 160
//!                 ^ touched this round
//! ```
//!
//! The victim on a full-table miss is the page with the numerically smallest
//! age byte. History older than eight rounds is lost, which is the defining
//! approximation of this policy compared to true LRU.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::common::config::MRU_BIT;
use crate::common::{FrameCapacity, PageId};

/// What happened during a single [`AgingPageTable::access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was resident. No fault.
    Hit,

    /// The page was not resident and a free frame was available.
    Fault,

    /// The page was not resident and `victim` was evicted to make room.
    Evicted {
        /// The page that was removed.
        victim: PageId,
        /// The victim's age byte at the moment it was selected.
        age: u8,
    },
}

impl AccessOutcome {
    /// Whether the access was a hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit)
    }

    /// Whether the access caused a page fault (with or without eviction).
    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// The evicted page, if any.
    #[inline]
    pub fn victim(&self) -> Option<PageId> {
        match self {
            AccessOutcome::Evicted { victim, .. } => Some(*victim),
            _ => None,
        }
    }
}

/// A bounded page table that evicts by aging-counter recency.
///
/// # Structure
/// ```text
/// ┌──────────────────────────────────────────┐
/// │             AgingPageTable               │
/// │  ┌─────────────────────────┐  ┌───────┐  │
/// │  │ ages: PageId → u8       │  │faults │  │
/// │  │ (≤ capacity entries)    │  │  u64  │  │
/// │  └─────────────────────────┘  └───────┘  │
/// └──────────────────────────────────────────┘
/// ```
///
/// # Tie Breaking
/// The resident set is a `BTreeMap`, so the eviction scan visits pages in
/// ascending identifier order and the first minimum wins: among pages
/// sharing the smallest age, the one with the smallest identifier is
/// evicted. Callers should not rely on this; only that exactly one page
/// leaves.
///
/// # Thread Safety
/// Not shared. Each simulation owns its table, and accesses must be applied
/// strictly in trace order because aging depends on relative ordering.
///
/// # Example
/// ```
/// use agingsim::replacer::{AccessOutcome, AgingPageTable};
/// use agingsim::{FrameCapacity, PageId};
///
/// let mut table = AgingPageTable::new(FrameCapacity::try_from(1usize).unwrap());
///
/// assert_eq!(table.access(PageId::new(5)), AccessOutcome::Fault);
/// assert_eq!(table.access(PageId::new(5)), AccessOutcome::Hit);
/// assert!(table.access(PageId::new(6)).victim() == Some(PageId::new(5)));
/// assert_eq!(table.faults(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AgingPageTable {
    /// Resident pages and their age bytes.
    ages: BTreeMap<PageId, u8>,

    /// Maximum number of resident pages.
    capacity: FrameCapacity,

    /// Number of misses so far.
    faults: u64,
}

impl AgingPageTable {
    /// Create an empty table with room for `capacity` pages.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            ages: BTreeMap::new(),
            capacity,
            faults: 0,
        }
    }

    // ========================================================================
    // Public API: Access
    // ========================================================================

    /// Record an access to `page_id`.
    ///
    /// Steps, in order:
    /// 1. Shift every resident age byte right by one bit.
    /// 2. If `page_id` is resident, set its high bit and return [`AccessOutcome::Hit`].
    /// 3. Otherwise count a fault, evict the smallest-aged page if the table
    ///    is full, and admit `page_id` with age [`MRU_BIT`].
    pub fn access(&mut self, page_id: PageId) -> AccessOutcome {
        self.age_all();

        if let Some(age) = self.ages.get_mut(&page_id) {
            *age |= MRU_BIT;
            trace!("hit {} (age {:#010b})", page_id, *age);
            return AccessOutcome::Hit;
        }

        self.faults += 1;

        let outcome = if self.ages.len() >= self.capacity.get() {
            match self.select_victim() {
                Some((victim, age)) => {
                    self.ages.remove(&victim);
                    debug!("fault {}: evicted {} (age {:#010b})", page_id, victim, age);
                    AccessOutcome::Evicted { victim, age }
                }
                // Empty table at capacity cannot happen
                None => AccessOutcome::Fault,
            }
        } else {
            trace!("fault {}: free frame", page_id);
            AccessOutcome::Fault
        };

        self.ages.insert(page_id, MRU_BIT);
        outcome
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.ages.len()
    }

    /// Whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Configured frame capacity.
    #[inline]
    pub fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    /// Total page faults recorded so far.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// Whether `page_id` is resident.
    #[inline]
    pub fn contains(&self, page_id: PageId) -> bool {
        self.ages.contains_key(&page_id)
    }

    /// Current age byte of `page_id`, or `None` if it is not resident.
    #[inline]
    pub fn age_of(&self, page_id: PageId) -> Option<u8> {
        self.ages.get(&page_id).copied()
    }

    /// Resident pages with their age bytes, in ascending page order.
    pub fn resident(&self) -> impl Iterator<Item = (PageId, u8)> + '_ {
        self.ages.iter().map(|(&page_id, &age)| (page_id, age))
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Decay every resident age byte by one round.
    fn age_all(&mut self) {
        for age in self.ages.values_mut() {
            *age >>= 1;
        }
    }

    /// Find the resident page with the smallest age byte.
    ///
    /// `min_by_key` keeps the first of equal minimums, so ties go to the
    /// smallest page identifier.
    fn select_victim(&self) -> Option<(PageId, u8)> {
        self.ages
            .iter()
            .min_by_key(|(_, &age)| age)
            .map(|(&page_id, &age)| (page_id, age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{AGE_BITS, AGE_ZERO};

    fn table(frames: usize) -> AgingPageTable {
        AgingPageTable::new(FrameCapacity::try_from(frames).unwrap())
    }

    fn pid(id: i64) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_new_table_is_empty() {
        let t = table(4);
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.faults(), 0);
        assert_eq!(t.capacity().get(), 4);
    }

    #[test]
    fn test_miss_admits_with_high_bit() {
        let mut t = table(2);

        assert_eq!(t.access(pid(1)), AccessOutcome::Fault);
        assert_eq!(t.age_of(pid(1)), Some(MRU_BIT));
        assert_eq!(t.faults(), 1);
    }

    #[test]
    fn test_aging_shifts_every_entry() {
        let mut t = table(3);

        t.access(pid(1));
        t.access(pid(2));
        t.access(pid(3));

        assert_eq!(t.age_of(pid(1)), Some(0b0010_0000));
        assert_eq!(t.age_of(pid(2)), Some(0b0100_0000));
        assert_eq!(t.age_of(pid(3)), Some(0b1000_0000));
    }

    #[test]
    fn test_hit_sets_high_bit_after_aging() {
        let mut t = table(2);

        t.access(pid(1));
        t.access(pid(2));
        // 1: 64 -> aged to 32 -> OR 128 = 160
        assert_eq!(t.access(pid(1)), AccessOutcome::Hit);
        assert_eq!(t.age_of(pid(1)), Some(0b1010_0000));
        assert_eq!(t.age_of(pid(2)), Some(0b0100_0000));
        assert_eq!(t.faults(), 2);
    }

    #[test]
    fn test_repeated_hits_saturate() {
        let mut t = table(1);

        for _ in 0..20 {
            t.access(pid(9));
        }

        assert_eq!(t.age_of(pid(9)), Some(u8::MAX));
        assert_eq!(t.faults(), 1);
    }

    #[test]
    fn test_evicts_page_not_retouched() {
        let mut t = table(3);

        for id in [1, 2, 3, 1, 2] {
            t.access(pid(id));
        }

        let outcome = t.access(pid(4));
        assert_eq!(outcome.victim(), Some(pid(3)));
        assert!(!t.contains(pid(3)));
        assert!(t.contains(pid(4)));
        assert_eq!(t.len(), 3);
        assert_eq!(t.faults(), 4);
    }

    #[test]
    fn test_eviction_reports_victim_age() {
        let mut t = table(2);

        t.access(pid(1));
        t.access(pid(2));
        // Before selection: 1 aged to 32, 2 aged to 64
        assert_eq!(
            t.access(pid(3)),
            AccessOutcome::Evicted {
                victim: pid(1),
                age: 0b0010_0000
            }
        );
    }

    #[test]
    fn test_tie_goes_to_smallest_page_id() {
        let mut t = table(3);

        // 7 is the true LRU page, but after the horizon 3 and 7 both read 0
        for id in [7, 3, 5] {
            t.access(pid(id));
        }
        for _ in 0..AGE_BITS {
            t.access(pid(5));
        }
        assert_eq!(t.age_of(pid(7)), Some(AGE_ZERO));
        assert_eq!(t.age_of(pid(3)), Some(AGE_ZERO));

        assert_eq!(t.access(pid(9)).victim(), Some(pid(3)));
        assert!(t.contains(pid(7)));
    }

    #[test]
    fn test_capacity_one_keeps_latest() {
        let mut t = table(1);

        assert!(t.access(pid(1)).is_fault());
        assert_eq!(t.access(pid(2)).victim(), Some(pid(1)));
        assert_eq!(t.access(pid(3)).victim(), Some(pid(2)));
        assert!(t.access(pid(3)).is_hit());

        let resident: Vec<_> = t.resident().map(|(p, _)| p).collect();
        assert_eq!(resident, vec![pid(3)]);
        assert_eq!(t.faults(), 3);
    }

    #[test]
    fn test_age_horizon_is_eight_rounds() {
        // Page 0 is touched once, then the hot page 1 is hit AGE_BITS times.
        let mut t = table(2);

        t.access(pid(0));
        for _ in 0..AGE_BITS {
            t.access(pid(1));
        }

        assert_eq!(t.age_of(pid(0)), Some(AGE_ZERO));
        assert_eq!(t.age_of(pid(1)), Some(u8::MAX));

        // Further rounds cannot make it any older
        t.access(pid(1));
        assert_eq!(t.age_of(pid(0)), Some(AGE_ZERO));
    }

    #[test]
    fn test_resident_in_page_order() {
        let mut t = table(4);

        for id in [30, -2, 10] {
            t.access(pid(id));
        }

        let pages: Vec<_> = t.resident().map(|(p, _)| p.0).collect();
        assert_eq!(pages, vec![-2, 10, 30]);
    }
}
