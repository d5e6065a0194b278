use std::time::{Duration, Instant};
use tracing::trace;

/// Where the viewport is relative to the list, in rows.
///
/// `sentinel_position` is the row just past the last rendered item, which is
/// normally the number of items in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSample {
    pub viewport_offset: usize,
    pub viewport_height: usize,
    pub sentinel_position: usize,
}

impl ViewportSample {
    pub fn new(viewport_offset: usize, viewport_height: usize, sentinel_position: usize) -> Self {
        Self {
            viewport_offset,
            viewport_height,
            sentinel_position,
        }
    }
}

/// Whether the sentinel lies inside the viewport extended downwards by `margin` rows
pub fn sentinel_visible(sample: &ViewportSample, margin: usize) -> bool {
    let bottom = sample
        .viewport_offset
        .saturating_add(sample.viewport_height)
        .saturating_add(margin);
    sample.sentinel_position >= sample.viewport_offset && sample.sentinel_position < bottom
}

/// Boundary-crossing detector for incremental loading.
///
/// Fires once when the sentinel moves into view, not while it stays visible.
/// A sample arriving within `debounce` of the last accepted one is held as
/// pending; later samples replace it, and the newest is evaluated by
/// [`LoadTrigger::flush`] once the window has passed (or by the next
/// `observe` outside the window). A new listing generation, or a moved
/// sentinel (the list grew), re-arms the trigger so old visibility never
/// carries over.
#[derive(Debug, Clone)]
pub struct LoadTrigger {
    margin: usize,
    debounce: Duration,
    generation: Option<u64>,
    sentinel: Option<usize>,
    was_visible: bool,
    last_sample_at: Option<Instant>,
    pending: Option<ViewportSample>,
}

impl LoadTrigger {
    pub fn new(margin: usize, debounce: Duration) -> Self {
        Self {
            margin,
            debounce,
            generation: None,
            sentinel: None,
            was_visible: false,
            last_sample_at: None,
            pending: None,
        }
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Feed one scroll/resize/layout sample. Returns true when the next page should be requested.
    pub fn observe(&mut self, sample: ViewportSample, generation: u64, now: Instant) -> bool {
        if self.generation != Some(generation) {
            trace!("Load trigger re-registered for generation {}", generation);
            self.generation = Some(generation);
            self.sentinel = None;
            self.was_visible = false;
            self.last_sample_at = None;
            self.pending = None;
        }

        if self.in_window(now) {
            self.pending = Some(sample);
            return false;
        }
        self.pending = None;
        self.evaluate(sample, now)
    }

    /// Evaluate the sample held back by the debounce window, if the window has passed
    pub fn flush(&mut self, now: Instant) -> bool {
        if self.pending.is_none() || self.in_window(now) {
            return false;
        }
        match self.pending.take() {
            Some(sample) => self.evaluate(sample, now),
            None => false,
        }
    }

    /// When a held-back sample becomes eligible for [`LoadTrigger::flush`]
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending?;
        self.last_sample_at.map(|last| last + self.debounce)
    }

    fn in_window(&self, now: Instant) -> bool {
        self.last_sample_at
            .is_some_and(|last| now.saturating_duration_since(last) < self.debounce)
    }

    fn evaluate(&mut self, sample: ViewportSample, now: Instant) -> bool {
        self.last_sample_at = Some(now);

        if self.sentinel != Some(sample.sentinel_position) {
            self.sentinel = Some(sample.sentinel_position);
            self.was_visible = false;
        }

        let visible = sentinel_visible(&sample, self.margin);
        let fired = visible && !self.was_visible;
        self.was_visible = visible;
        if fired {
            trace!(
                "Sentinel at row {} entered viewport [{}, +{})",
                sample.sentinel_position,
                sample.viewport_offset,
                sample.viewport_height
            );
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(100);

    #[test]
    fn test_sentinel_visible_with_margin() {
        // rows 0..10 visible, sentinel after 20 items
        assert!(!sentinel_visible(&ViewportSample::new(0, 10, 20), 0));
        assert!(!sentinel_visible(&ViewportSample::new(0, 10, 20), 10));
        assert!(sentinel_visible(&ViewportSample::new(0, 10, 20), 11));
        assert!(sentinel_visible(&ViewportSample::new(12, 10, 20), 0));
        // scrolled beyond the sentinel
        assert!(!sentinel_visible(&ViewportSample::new(25, 10, 20), 3));
    }

    #[test]
    fn test_fires_only_on_crossing() {
        let mut trigger = LoadTrigger::new(0, DEBOUNCE);
        let start = Instant::now();

        assert!(!trigger.observe(ViewportSample::new(0, 10, 20), 1, start));
        assert!(trigger.observe(ViewportSample::new(12, 10, 20), 1, start + DEBOUNCE));
        assert!(!trigger.observe(ViewportSample::new(13, 10, 20), 1, start + DEBOUNCE * 2));
        assert!(!trigger.observe(ViewportSample::new(4, 10, 20), 1, start + DEBOUNCE * 3));
        assert!(trigger.observe(ViewportSample::new(12, 10, 20), 1, start + DEBOUNCE * 4));
    }

    #[test]
    fn test_crossing_as_last_sample_of_burst_fires_on_flush() {
        let mut trigger = LoadTrigger::new(0, DEBOUNCE);
        let start = Instant::now();

        assert!(!trigger.observe(ViewportSample::new(0, 10, 20), 1, start));
        // user scrolls to the end inside the window and stops
        assert!(!trigger.observe(ViewportSample::new(12, 10, 20), 1, start + Duration::from_millis(40)));
        assert_eq!(trigger.pending_deadline(), Some(start + DEBOUNCE));

        assert!(!trigger.flush(start + Duration::from_millis(60)));
        assert!(trigger.flush(start + DEBOUNCE));
        assert_eq!(trigger.pending_deadline(), None);
        assert!(!trigger.flush(start + DEBOUNCE * 3));
    }

    #[test]
    fn test_newest_sample_in_burst_wins() {
        let mut trigger = LoadTrigger::new(0, DEBOUNCE);
        let start = Instant::now();

        assert!(!trigger.observe(ViewportSample::new(0, 10, 20), 1, start));
        assert!(!trigger.observe(ViewportSample::new(12, 10, 20), 1, start + Duration::from_millis(10)));
        // scrolled back up before the window closed
        assert!(!trigger.observe(ViewportSample::new(2, 10, 20), 1, start + Duration::from_millis(20)));
        assert!(!trigger.flush(start + DEBOUNCE));
    }

    #[test]
    fn test_pending_sample_is_evaluated_by_next_observe() {
        let mut trigger = LoadTrigger::new(0, DEBOUNCE);
        let start = Instant::now();

        assert!(!trigger.observe(ViewportSample::new(0, 10, 20), 1, start));
        assert!(!trigger.observe(ViewportSample::new(12, 10, 20), 1, start + Duration::from_millis(10)));
        assert!(trigger.observe(ViewportSample::new(12, 10, 20), 1, start + DEBOUNCE));
        assert_eq!(trigger.pending_deadline(), None);
    }

    #[test]
    fn test_new_generation_drops_pending() {
        let mut trigger = LoadTrigger::new(0, DEBOUNCE);
        let start = Instant::now();

        assert!(!trigger.observe(ViewportSample::new(0, 10, 20), 1, start));
        assert!(!trigger.observe(ViewportSample::new(12, 10, 20), 1, start + Duration::from_millis(10)));
        assert!(!trigger.observe(ViewportSample::new(0, 10, 20), 2, start + Duration::from_millis(20)));
        assert!(!trigger.flush(start + DEBOUNCE * 2));
    }

    #[test]
    fn test_new_generation_rearms() {
        let mut trigger = LoadTrigger::new(0, DEBOUNCE);
        let start = Instant::now();

        assert!(trigger.observe(ViewportSample::new(0, 10, 5), 1, start));
        // same geometry, new listing: must fire again immediately, debounce does not carry over
        assert!(trigger.observe(ViewportSample::new(0, 10, 5), 2, start + Duration::from_millis(1)));
    }

    #[test]
    fn test_grown_list_with_visible_sentinel_fires_again() {
        let mut trigger = LoadTrigger::new(2, DEBOUNCE);
        let start = Instant::now();

        assert!(trigger.observe(ViewportSample::new(0, 40, 12), 1, start));
        assert!(!trigger.observe(ViewportSample::new(0, 40, 12), 1, start + DEBOUNCE));
        assert!(trigger.observe(ViewportSample::new(0, 40, 20), 1, start + DEBOUNCE * 2));
    }
}
