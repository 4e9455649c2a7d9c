//! Match ranges and range merging.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A half-open byte range into the original display string.
///
/// Produced by match finding, or supplied externally for stored user
/// highlights. `end > start` for every range this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl MatchRange {
    /// Creates a range from explicit endpoints.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for degenerate (empty or inverted) ranges.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<Range<usize>> for MatchRange {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Merges overlapping or touching ranges into a flat, sorted set.
///
/// Sorts by start position, then sweeps left to right: a range whose start
/// is at or before the current range's end extends it, anything else starts
/// a new range. The result is sorted with no overlaps and no degenerates.
pub fn merge_ranges(mut ranges: Vec<MatchRange>) -> Vec<MatchRange> {
    ranges.retain(|r| !r.is_empty());
    if ranges.len() <= 1 {
        return ranges;
    }

    ranges.sort_by_key(|r| r.start);

    let mut merged = Vec::with_capacity(ranges.len());
    let mut current = ranges[0];

    for range in ranges.into_iter().skip(1) {
        if range.start <= current.end {
            // Overlapping or adjacent - extend current range
            current.end = current.end.max(range.end);
        } else {
            // Gap - push current and start new
            merged.push(current);
            current = range;
        }
    }
    merged.push(current);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_combines_overlapping() {
        let merged = merge_ranges(vec![
            MatchRange::new(0, 5),
            MatchRange::new(3, 8),
        ]);
        assert_eq!(merged, vec![MatchRange::new(0, 8)]);
    }

    #[test]
    fn merge_combines_adjacent() {
        let merged = merge_ranges(vec![
            MatchRange::new(0, 5),
            MatchRange::new(5, 10),
        ]);
        assert_eq!(merged, vec![MatchRange::new(0, 10)]);
    }

    #[test]
    fn merge_preserves_disjoint() {
        let merged = merge_ranges(vec![
            MatchRange::new(10, 15),
            MatchRange::new(0, 5),
        ]);
        assert_eq!(merged, vec![MatchRange::new(0, 5), MatchRange::new(10, 15)]);
    }

    #[test]
    fn merge_handles_containment() {
        let merged = merge_ranges(vec![
            MatchRange::new(0, 20),
            MatchRange::new(5, 10),
        ]);
        assert_eq!(merged, vec![MatchRange::new(0, 20)]);
    }

    #[test]
    fn merge_drops_degenerates() {
        let merged = merge_ranges(vec![
            MatchRange::new(5, 5),
            MatchRange::new(0, 3),
            MatchRange::new(7, 2),
        ]);
        assert_eq!(merged, vec![MatchRange::new(0, 3)]);
    }

    #[test]
    fn merge_handles_empty() {
        assert!(merge_ranges(Vec::new()).is_empty());
    }
}
