//! Scroll-position bookkeeping for the project showcase highlight.
//!
//! The mapping from a window scroll offset to the active entry is kept as a
//! pure function so it can be tested without a DOM. The stateful part
//! ([`HighlightTracker`]) only adds the "freeze last valid value" rule: an
//! observation that lands outside the container keeps the previous index
//! instead of clamping to the nearest edge.

/// Maps a vertical scroll offset to the index of the entry currently in view.
///
/// Each of `entries` stacked blocks is assumed to occupy an equal share of the
/// container's height. Returns `None` when the offset falls outside the
/// container's bounds, when there are no entries, or when the container has no
/// measurable height yet.
pub fn active_entry(
    scroll_y: f64,
    container_top: f64,
    container_height: f64,
    entries: usize,
) -> Option<usize> {
    if entries == 0 || container_height <= 0.0 {
        return None;
    }
    let relative = scroll_y - container_top;
    if relative < 0.0 {
        return None;
    }
    let per_entry = container_height / entries as f64;
    let index = (relative / per_entry).floor() as usize;
    if index < entries {
        Some(index)
    } else {
        None
    }
}

/// Remembers the last valid active index across scroll observations.
///
/// Once an index has been observed, scrolling past either edge of the
/// container does not unset it - the highlight stays on the last entry that
/// was in view. This is deliberately not boundary clamping; during fast
/// scrolling the two behave differently.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTracker {
    active: Option<usize>,
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one scroll observation through [`active_entry`] and returns the
    /// current active index, retaining the previous one when the observation
    /// is out of bounds or the container is unmeasured.
    pub fn observe(
        &mut self,
        scroll_y: f64,
        container_top: f64,
        container_height: f64,
        entries: usize,
    ) -> Option<usize> {
        if let Some(index) = active_entry(scroll_y, container_top, container_height, entries) {
            self.active = Some(index);
        }
        self.active
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: f64 = 800.0;
    const HEIGHT: f64 = 3000.0;
    const N: usize = 3;

    #[test]
    fn test_top_of_container_is_first_entry() {
        assert_eq!(active_entry(TOP, TOP, HEIGHT, N), Some(0));
    }

    #[test]
    fn test_bottom_of_container_is_last_entry() {
        assert_eq!(active_entry(TOP + HEIGHT - 1.0, TOP, HEIGHT, N), Some(N - 1));
    }

    #[test]
    fn test_every_position_within_bounds_has_exactly_one_entry() {
        let mut y = TOP;
        while y < TOP + HEIGHT {
            let index = active_entry(y, TOP, HEIGHT, N).expect("in-bounds position must map");
            assert!(index < N, "index {index} out of range at y={y}");
            y += 50.0;
        }
    }

    #[test]
    fn test_entry_boundaries() {
        let per_entry = HEIGHT / N as f64;
        // last pixel of an entry still belongs to it
        assert_eq!(active_entry(TOP + per_entry - 1.0, TOP, HEIGHT, N), Some(0));
        // first pixel of the next share flips the index
        assert_eq!(active_entry(TOP + per_entry, TOP, HEIGHT, N), Some(1));
        assert_eq!(active_entry(TOP + 2.0 * per_entry, TOP, HEIGHT, N), Some(2));
    }

    #[test]
    fn test_outside_bounds_is_none() {
        assert_eq!(active_entry(TOP - 1.0, TOP, HEIGHT, N), None);
        assert_eq!(active_entry(TOP + HEIGHT, TOP, HEIGHT, N), None);
        assert_eq!(active_entry(0.0, TOP, HEIGHT, N), None);
    }

    #[test]
    fn test_single_entry_spans_whole_container() {
        assert_eq!(active_entry(TOP, TOP, HEIGHT, 1), Some(0));
        assert_eq!(active_entry(TOP + HEIGHT - 1.0, TOP, HEIGHT, 1), Some(0));
    }

    #[test]
    fn test_unmeasured_or_empty_container_is_none() {
        assert_eq!(active_entry(TOP, TOP, 0.0, N), None);
        assert_eq!(active_entry(TOP, TOP, -1.0, N), None);
        assert_eq!(active_entry(TOP, TOP, HEIGHT, 0), None);
    }

    #[test]
    fn test_tracker_starts_unset() {
        let tracker = HighlightTracker::new();
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_tracker_stays_unset_until_first_valid_observation() {
        let mut tracker = HighlightTracker::new();
        assert_eq!(tracker.observe(0.0, TOP, HEIGHT, N), None);
        assert_eq!(tracker.observe(TOP + 100.0, TOP, HEIGHT, N), Some(0));
    }

    #[test]
    fn test_tracker_freezes_last_valid_index_past_the_bottom() {
        let mut tracker = HighlightTracker::new();
        tracker.observe(TOP + HEIGHT - 1.0, TOP, HEIGHT, N);
        // scrolled past the container - last valid index persists
        assert_eq!(tracker.observe(TOP + HEIGHT + 500.0, TOP, HEIGHT, N), Some(N - 1));
    }

    #[test]
    fn test_tracker_freezes_last_valid_index_above_the_top() {
        let mut tracker = HighlightTracker::new();
        tracker.observe(TOP + 10.0, TOP, HEIGHT, N);
        assert_eq!(tracker.observe(TOP - 300.0, TOP, HEIGHT, N), Some(0));
    }

    #[test]
    fn test_tracker_does_not_clamp_on_fast_scroll() {
        let mut tracker = HighlightTracker::new();
        tracker.observe(TOP + HEIGHT / 2.0, TOP, HEIGHT, N);
        let mid = tracker.active();
        // a jump straight past the bottom must keep the mid index, not snap to N-1
        assert_eq!(tracker.observe(TOP + HEIGHT * 2.0, TOP, HEIGHT, N), mid);
    }

    #[test]
    fn test_tracker_recovers_after_leaving_bounds() {
        let mut tracker = HighlightTracker::new();
        tracker.observe(TOP + HEIGHT - 1.0, TOP, HEIGHT, N);
        tracker.observe(TOP + HEIGHT * 2.0, TOP, HEIGHT, N);
        assert_eq!(tracker.observe(TOP + 1.0, TOP, HEIGHT, N), Some(0));
    }

    #[test]
    fn test_tracker_skips_unmeasured_container() {
        let mut tracker = HighlightTracker::new();
        tracker.observe(TOP + 100.0, TOP, HEIGHT, N);
        // measurement lost (e.g. detached node) - state simply does not update
        assert_eq!(tracker.observe(TOP + 2500.0, TOP, 0.0, N), Some(0));
    }
}
