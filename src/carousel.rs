/// Horizontal wheel distance (px) needed to page the carousel once.
pub const WHEEL_PAGE_THRESHOLD: f64 = 50.0;
/// Technology tags shown on a collapsed timeline card.
pub const VISIBLE_TAGS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Prev,
    Next,
}

/// Snap-index state of a fixed-length card strip. Does not wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    /// Index of a programmatic scroll that has not reached its offset yet.
    pending: Option<usize>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            pending: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_scroll_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Returns whether the index moved.
    pub fn scroll_prev(&mut self) -> bool {
        if !self.can_scroll_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Returns whether the index moved.
    pub fn scroll_next(&mut self) -> bool {
        if !self.can_scroll_next() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn page(&mut self, direction: PageDirection) -> bool {
        match direction {
            PageDirection::Prev => self.scroll_prev(),
            PageDirection::Next => self.scroll_next(),
        }
    }

    /// Out-of-range indices clamp to the last card.
    pub fn scroll_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.len.saturating_sub(1));
        self.index
    }

    /// Like `scroll_to`, but `track` keeps the chosen index until the strip
    /// settles on that card's offset.
    pub fn seek(&mut self, index: usize) -> usize {
        let index = self.scroll_to(index);
        self.pending = Some(index);
        index
    }

    /// Updates the index from a scroll offset, picking the nearest snap point.
    ///
    /// Cards whose offset lies past `max_scroll` can never reach the leading
    /// edge; once the strip rests at its end the current index is kept if it
    /// is one of those cards, otherwise the last card is reported.
    pub fn track(&mut self, scroll_left: f64, stride: f64, max_scroll: f64) -> usize {
        if stride <= 0.0 || !scroll_left.is_finite() {
            return self.index;
        }
        let max_scroll = max_scroll.max(0.0);
        if let Some(target) = self.pending {
            let landing = self.offset_of(target, stride).min(max_scroll);
            if (scroll_left - landing).abs() > 1.0 {
                return self.index;
            }
            self.pending = None;
            return self.index;
        }
        if max_scroll > 0.0 && scroll_left >= max_scroll - 1.0 {
            if self.offset_of(self.index, stride) >= max_scroll - 1.0 {
                return self.index;
            }
            return self.scroll_to(self.len.saturating_sub(1));
        }
        let nearest = (scroll_left.max(0.0) / stride).round() as usize;
        self.scroll_to(nearest)
    }

    pub fn offset_of(&self, index: usize, stride: f64) -> f64 {
        index as f64 * stride
    }

    pub fn counter(&self) -> String {
        if self.is_empty() {
            return "0 of 0".to_string();
        }
        format!("{} of {}", self.index + 1, self.len)
    }
}

/// Turns continuous horizontal wheel input into discrete page steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPager {
    threshold: f64,
    accumulated: f64,
}

impl Default for WheelPager {
    fn default() -> Self {
        Self::new(WHEEL_PAGE_THRESHOLD)
    }
}

impl WheelPager {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            accumulated: 0.0,
        }
    }

    /// Whether a wheel event belongs to the carousel rather than the page.
    pub fn captures(delta_x: f64, delta_y: f64) -> bool {
        delta_x != 0.0 && delta_x.abs() > delta_y.abs()
    }

    pub fn push(&mut self, delta_x: f64, delta_y: f64) -> Option<PageDirection> {
        if !Self::captures(delta_x, delta_y) {
            return None;
        }
        if self.accumulated != 0.0 && self.accumulated.signum() != delta_x.signum() {
            self.accumulated = 0.0;
        }
        self.accumulated += delta_x;
        if self.accumulated.abs() < self.threshold {
            return None;
        }
        let direction = if self.accumulated > 0.0 {
            PageDirection::Next
        } else {
            PageDirection::Prev
        };
        self.accumulated = 0.0;
        Some(direction)
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

/// Splits a tag list into the shown prefix and the hidden count.
pub fn visible_tags(tags: &[String], expanded: bool) -> (&[String], usize) {
    if expanded || tags.len() <= VISIBLE_TAGS {
        return (tags, 0);
    }
    (&tags[..VISIBLE_TAGS], tags.len() - VISIBLE_TAGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_next_are_noops_at_boundaries() {
        let mut c = Carousel::new(3);
        assert!(!c.can_scroll_prev());
        assert!(!c.scroll_prev());
        assert_eq!(c.index(), 0);

        assert!(c.scroll_next());
        assert!(c.scroll_next());
        assert_eq!(c.index(), 2);
        assert!(!c.can_scroll_next());
        assert!(!c.scroll_next());
        assert_eq!(c.index(), 2);

        assert!(c.scroll_prev());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_scroll_to_lands_on_index() {
        let mut c = Carousel::new(5);
        for i in [4, 0, 2, 3, 1] {
            assert_eq!(c.scroll_to(i), i);
            assert_eq!(c.index(), i);
        }
        assert_eq!(c.scroll_to(99), 4);
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = Carousel::new(0);
        assert!(!c.scroll_next());
        assert!(!c.scroll_prev());
        assert_eq!(c.scroll_to(3), 0);
        assert_eq!(c.counter(), "0 of 0");
    }

    #[test]
    fn test_track_picks_nearest_snap() {
        let mut c = Carousel::new(5);
        let max = 408.0 * 4.0;
        assert_eq!(c.track(0.0, 408.0, max), 0);
        assert_eq!(c.track(190.0, 408.0, max), 0);
        assert_eq!(c.track(220.0, 408.0, max), 1);
        assert_eq!(c.track(408.0 * 3.0, 408.0, max), 3);
        assert_eq!(c.track(10_000.0, 408.0, max), 4);
        assert_eq!(c.track(-20.0, 408.0, max), 0);
        // Zero stride leaves the index alone
        c.scroll_to(2);
        assert_eq!(c.track(100.0, 0.0, max), 2);
        assert_eq!(c.offset_of(2, 408.0), 816.0);
        assert_eq!(c.counter(), "3 of 5");
    }

    // 5 cards of 384px plus a 24px gap in a 1216px viewport: the strip
    // cannot scroll past 800px, so cards 2..=4 never reach the leading edge.
    const STRIDE: f64 = 408.0;
    const MAX_SCROLL: f64 = 800.0;

    #[test]
    fn test_seek_to_trimmed_card_survives_clamped_offset() {
        let mut c = Carousel::new(5);
        assert_eq!(c.seek(4), 4);
        // Smooth scrolling passes through earlier snaps on the way
        assert_eq!(c.track(300.0, STRIDE, MAX_SCROLL), 4);
        assert_eq!(c.track(620.0, STRIDE, MAX_SCROLL), 4);
        // The browser stops at the maximum, not at 4 * STRIDE
        assert_eq!(c.track(MAX_SCROLL, STRIDE, MAX_SCROLL), 4);
        assert_eq!(c.counter(), "5 of 5");
        assert!(!c.can_scroll_next());
        // Further events at the end keep the landed index
        assert_eq!(c.track(MAX_SCROLL, STRIDE, MAX_SCROLL), 4);

        assert_eq!(c.seek(3), 3);
        assert_eq!(c.track(MAX_SCROLL, STRIDE, MAX_SCROLL), 3);
    }

    #[test]
    fn test_manual_scroll_to_end_reports_last_card() {
        let mut c = Carousel::new(5);
        assert_eq!(c.track(408.0, STRIDE, MAX_SCROLL), 1);
        assert_eq!(c.track(MAX_SCROLL - 0.5, STRIDE, MAX_SCROLL), 4);
        assert_eq!(c.track(0.0, STRIDE, MAX_SCROLL), 0);
    }

    #[test]
    fn test_seek_within_range_resumes_tracking_on_arrival() {
        let mut c = Carousel::new(5);
        assert_eq!(c.seek(1), 1);
        assert_eq!(c.track(100.0, STRIDE, MAX_SCROLL), 1);
        assert_eq!(c.track(408.0, STRIDE, MAX_SCROLL), 1);
        // Arrived; later user scrolling is tracked again
        assert_eq!(c.track(10.0, STRIDE, MAX_SCROLL), 0);
    }

    #[test]
    fn test_vertical_wheel_never_pages() {
        let mut w = WheelPager::default();
        for _ in 0..100 {
            assert_eq!(w.push(0.0, 120.0), None);
            assert_eq!(w.push(30.0, 120.0), None);
        }
        assert_eq!(w.accumulated(), 0.0);
        assert!(!WheelPager::captures(0.0, 0.0));
        assert!(WheelPager::captures(-10.0, 2.0));
    }

    #[test]
    fn test_horizontal_wheel_pages_at_threshold() {
        let mut w = WheelPager::new(50.0);
        assert_eq!(w.push(20.0, 0.0), None);
        assert_eq!(w.push(20.0, 0.0), None);
        assert_eq!(w.push(20.0, 0.0), Some(PageDirection::Next));
        assert_eq!(w.accumulated(), 0.0);

        assert_eq!(w.push(-49.0, 0.0), None);
        assert_eq!(w.push(-1.0, 0.0), Some(PageDirection::Prev));
    }

    #[test]
    fn test_direction_change_restarts_accumulation() {
        let mut w = WheelPager::new(50.0);
        assert_eq!(w.push(40.0, 0.0), None);
        assert_eq!(w.push(-10.0, 0.0), None);
        assert_eq!(w.accumulated(), -10.0);
        assert_eq!(w.push(15.0, 0.0), None);
        assert_eq!(w.accumulated(), 15.0);
    }

    #[test]
    fn test_visible_tags() {
        let tags: Vec<String> = ["Python", "FastAPI", "Rust", "AWS Lambda", "Step Functions"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (shown, hidden) = visible_tags(&tags, false);
        assert_eq!(shown.len(), VISIBLE_TAGS);
        assert_eq!(hidden, 1);
        let (shown, hidden) = visible_tags(&tags, true);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 0);
        let (shown, hidden) = visible_tags(&tags[..3], false);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }
}
