//! In place sort algorithms over a sequence of [Bid], ordered ascending by title.
//!
//! Titles are compared lexicographically by bytes. None of the algorithms is stable.

use std::fmt::{Display, Formatter};

use crate::bid::Bid;
use crate::error::BidError;

/// Sort algorithm selector
///
/// # Examples
/// ```
/// use bid_sort::bid::Bid;
/// use bid_sort::sort::{is_sorted, Algorithm};
/// let mut bids = vec![
///     Bid::new().with_str_title("Vaccuum"),
///     Bid::new().with_str_title("Chair"),
///     Bid::new().with_str_title("Apple"),
/// ];
/// Algorithm::Quick.sort(&mut bids);
/// assert!(is_sorted(&bids));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Plain selection sort
    Selection,
    /// Selection sort placing both the minimum and the maximum on every pass
    UpgradedSelection,
    /// Quicksort with a midpoint pivot
    Quick,
}

impl Algorithm {
    /// All algorithms in menu order
    pub fn all() -> [Algorithm; 3] {
        [Algorithm::Selection, Algorithm::UpgradedSelection, Algorithm::Quick]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::UpgradedSelection => "Upgraded Selection Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Sort the complete sequence in place.
    pub fn sort(&self, bids: &mut [Bid]) {
        let n = bids.len();
        match self {
            Algorithm::Selection => selection_sort(bids),
            Algorithm::UpgradedSelection => upgraded_selection_sort_range(bids, n),
            Algorithm::Quick => quick_sort_all(bids),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Selection sort by title. O(n^2) comparisons, at most n - 1 swaps.
pub fn selection_sort(bids: &mut [Bid]) {
    for i in 0..bids.len() {
        let mut index_smallest = i;
        for j in i + 1..bids.len() {
            if bids[j].title() < bids[index_smallest].title() {
                index_smallest = j;
            }
        }

        if i != index_smallest {
            bids.swap(i, index_smallest);
        }
    }
}

/// Selection sort of the first `n` bids, tracking the minimum and the maximum on every pass so
/// that each pass fixes both ends of the unsorted window.
///
/// Whole records are swapped, every bid keeps its own id, fund and amount.
///
/// Returns [BidError::Range] when `n` exceeds the number of bids.
pub fn upgraded_selection_sort(bids: &mut [Bid], n: usize) -> Result<(), BidError> {
    if n > bids.len() {
        return Err(BidError::Range { begin: 0, end: n - 1, len: bids.len() });
    }
    upgraded_selection_sort_range(bids, n);
    Ok(())
}

fn upgraded_selection_sort_range(bids: &mut [Bid], n: usize) {
    if n < 2 {
        return;
    }

    let mut i = 0;
    let mut j = n - 1;
    while i < j {
        let mut min_i = i;
        let mut max_i = i;
        for k in i..=j {
            if bids[k].title() > bids[max_i].title() {
                max_i = k;
            } else if bids[k].title() < bids[min_i].title() {
                min_i = k;
            }
        }

        bids.swap(i, min_i);
        // the maximum sat at i and has just moved to min_i
        if max_i == i {
            max_i = min_i;
        }
        bids.swap(j, max_i);

        i += 1;
        j -= 1;
    }
}

/// Quicksort of the inclusive range `[begin, end]`.
///
/// An empty or single element range is a no-op. A range with either bound past the last bid is
/// rejected with [BidError::Range] before any bid is moved, except `(0, 0)` on an empty
/// sequence.
///
/// # Examples
/// ```
/// use bid_sort::bid::Bid;
/// use bid_sort::sort::quick_sort;
/// let mut bids = vec![Bid::new().with_str_title("b"), Bid::new().with_str_title("a")];
/// quick_sort(&mut bids, 0, 1).unwrap();
/// assert_eq!(bids[0].title(), "a");
/// assert!(quick_sort(&mut bids, 0, 2).is_err());
/// ```
pub fn quick_sort(bids: &mut [Bid], begin: usize, end: usize) -> Result<(), BidError> {
    if bids.is_empty() && begin == 0 && end == 0 {
        return Ok(());
    }
    if begin >= bids.len() {
        return Err(BidError::Range { begin, end, len: bids.len() });
    }
    check_range(bids, begin, end)?;
    if begin >= end {
        return Ok(());
    }
    quick_sort_range(bids, begin, end);
    Ok(())
}

/// Quicksort of the complete sequence
pub fn quick_sort_all(bids: &mut [Bid]) {
    if bids.len() > 1 {
        let end = bids.len() - 1;
        quick_sort_range(bids, 0, end);
    }
}

// Recurse into the smaller side and loop on the larger one, the stack depth stays
// logarithmic whatever the input order.
fn quick_sort_range(bids: &mut [Bid], mut begin: usize, mut end: usize) {
    while begin < end {
        let j = partition_range(bids, begin, end);
        if j - begin < end - j {
            quick_sort_range(bids, begin, j);
            begin = j + 1;
        } else {
            quick_sort_range(bids, j + 1, end);
            end = j;
        }
    }
}

/// Partition the inclusive range `[begin, end]` around the title found at its midpoint.
///
/// On return every bid in `[begin, split]` has a title not greater than the pivot and every bid
/// in `[split + 1, end]` a title not less than it. For `begin < end` the split index is in
/// `[begin, end - 1]`, so both sides are non-empty.
pub fn partition(bids: &mut [Bid], begin: usize, end: usize) -> Result<usize, BidError> {
    if begin > end {
        return Err(BidError::Range { begin, end, len: bids.len() });
    }
    check_range(bids, begin, end)?;
    Ok(partition_range(bids, begin, end))
}

fn partition_range(bids: &mut [Bid], begin: usize, end: usize) -> usize {
    let mid = begin + (end - begin) / 2;
    // the pivot value is fixed for the whole pass even when its record is swapped away
    let pivot = bids[mid].title().clone();

    let mut l = begin;
    let mut h = end;
    loop {
        while bids[l].title() < &pivot {
            l += 1;
        }
        while &pivot < bids[h].title() {
            h -= 1;
        }
        debug_assert!(l <= end && h >= begin);

        if l >= h {
            debug_assert!(begin == end || h < end);
            return h;
        }

        bids.swap(l, h);
        l += 1;
        h -= 1;
    }
}

fn check_range(bids: &[Bid], begin: usize, end: usize) -> Result<(), BidError> {
    if end >= bids.len() {
        Err(BidError::Range { begin, end, len: bids.len() })
    } else {
        Ok(())
    }
}

/// Check that every adjacent pair of bids is in ascending title order.
pub fn is_sorted(bids: &[Bid]) -> bool {
    bids.windows(2).all(|w| w[0].title() <= w[1].title())
}
