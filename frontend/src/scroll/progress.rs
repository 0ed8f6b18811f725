use std::rc::Rc;

use yew::Reducible;

/// Raw measurements taken from the window on a scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollGeometry {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// How far through the document the viewport is, in `[0, 100]`.
///
/// A page that fits on one screen has nothing to scroll and reads as 0.
pub fn progress_percent(geometry: ScrollGeometry) -> f64 {
    let scrollable = geometry.document_height - geometry.viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !geometry.offset.is_finite() {
        return 0.0;
    }
    (geometry.offset / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollProgress {
    pub percent: f64,
    pub offset: f64,
}

impl ScrollProgress {
    pub fn update(&mut self, geometry: ScrollGeometry) -> bool {
        let next = Self {
            percent: progress_percent(geometry),
            offset: if geometry.offset.is_finite() {
                geometry.offset.max(0.0)
            } else {
                0.0
            },
        };
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn scrolled_past(&self, px: f64) -> bool {
        self.offset > px
    }
}

impl Reducible for ScrollProgress {
    type Action = ScrollGeometry;

    fn reduce(self: Rc<Self>, geometry: ScrollGeometry) -> Rc<Self> {
        let mut next = *self;
        if next.update(geometry) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// What a scroll listener should do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Measure now.
    Fire,
    /// Measure once after this many milliseconds, when the window closes.
    Trail(u32),
    /// A trailing measure is already pending.
    Skip,
}

/// Leading-edge throttle with one trailing call: the first event in a window
/// goes through, the first one dropped schedules a measure for when the window
/// closes, and the rest are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    window_ms: f64,
    last_fired: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            last_fired: None,
            trailing: false,
        }
    }

    pub fn gate(&mut self, now_ms: f64) -> Gate {
        match self.last_fired {
            Some(last) if now_ms - last < self.window_ms && now_ms >= last => {
                if self.trailing {
                    return Gate::Skip;
                }
                self.trailing = true;
                Gate::Trail((self.window_ms - (now_ms - last)).ceil() as u32)
            }
            _ => {
                self.last_fired = Some(now_ms);
                Gate::Fire
            }
        }
    }

    /// Called when the scheduled trailing measure runs.
    pub fn fire_trailing(&mut self, now_ms: f64) {
        self.trailing = false;
        self.last_fired = Some(now_ms);
    }

    pub fn trailing_pending(&self) -> bool {
        self.trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geometry(offset: f64, document_height: f64, viewport_height: f64) -> ScrollGeometry {
        ScrollGeometry {
            offset,
            document_height,
            viewport_height,
        }
    }

    #[test]
    fn top_and_bottom() {
        assert_relative_eq!(progress_percent(geometry(0.0, 3000.0, 1000.0)), 0.0);
        assert_relative_eq!(progress_percent(geometry(2000.0, 3000.0, 1000.0)), 100.0);
        assert_relative_eq!(progress_percent(geometry(500.0, 3000.0, 1000.0)), 25.0);
    }

    #[test]
    fn single_screen_page_is_zero() {
        for offset in [0.0, 10.0, 5000.0, -3.0] {
            let percent = progress_percent(geometry(offset, 900.0, 900.0));
            assert!(percent.is_finite());
            assert_relative_eq!(percent, 0.0);
        }
        assert_relative_eq!(progress_percent(geometry(10.0, 500.0, 900.0)), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_relative_eq!(progress_percent(geometry(-40.0, 3000.0, 1000.0)), 0.0);
        assert_relative_eq!(progress_percent(geometry(2600.0, 3000.0, 1000.0)), 100.0);
    }

    #[test]
    fn non_finite_measurements_read_as_zero() {
        assert_relative_eq!(progress_percent(geometry(f64::NAN, 3000.0, 1000.0)), 0.0);
        assert_relative_eq!(progress_percent(geometry(10.0, f64::INFINITY, 1000.0)), 0.0);
    }

    #[test]
    fn update_reports_changes_only() {
        let mut progress = ScrollProgress::default();
        assert!(progress.update(geometry(1000.0, 3000.0, 1000.0)));
        assert_relative_eq!(progress.percent, 50.0);
        assert!(!progress.update(geometry(1000.0, 3000.0, 1000.0)));
        assert!(progress.scrolled_past(50.0));
        assert!(!progress.scrolled_past(1000.0));
    }

    #[test]
    fn reducer_keeps_rc_on_identical_geometry() {
        let state = Rc::new(ScrollProgress::default());
        let same = state.clone().reduce(geometry(0.0, 900.0, 900.0));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn throttle_trails_once_per_window() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.gate(0.0), Gate::Fire);
        assert_eq!(throttle.gate(30.0), Gate::Trail(70));
        assert_eq!(throttle.gate(99.9), Gate::Skip);
        assert!(throttle.trailing_pending());

        throttle.fire_trailing(100.0);
        assert!(!throttle.trailing_pending());
        assert_eq!(throttle.gate(150.0), Gate::Trail(50));
        throttle.fire_trailing(200.0);
        assert_eq!(throttle.gate(310.0), Gate::Fire);
    }

    #[test]
    fn fast_scroll_settles_on_last_position() {
        let mut throttle = Throttle::new(100);
        let mut progress = ScrollProgress::default();
        let mut trailing_at = None;

        // Three events 40ms apart, the last one reaching the bottom.
        for (now, offset) in [(0.0, 0.0), (40.0, 1800.0), (80.0, 2000.0)] {
            match throttle.gate(now) {
                Gate::Fire => {
                    progress.update(geometry(offset, 3000.0, 1000.0));
                }
                Gate::Trail(delay) => trailing_at = Some(now + f64::from(delay)),
                Gate::Skip => {}
            }
        }
        assert_relative_eq!(progress.percent, 0.0);

        let at = trailing_at.unwrap();
        assert_relative_eq!(at, 100.0);
        throttle.fire_trailing(at);
        progress.update(geometry(2000.0, 3000.0, 1000.0));
        assert_relative_eq!(progress.percent, 100.0);
    }

    #[test]
    fn throttle_recovers_from_clock_going_backwards() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.gate(1_000.0), Gate::Fire);
        assert_eq!(throttle.gate(10.0), Gate::Fire);
    }

    #[test]
    fn zero_window_never_drops() {
        let mut throttle = Throttle::new(0);
        assert_eq!(throttle.gate(5.0), Gate::Fire);
        assert_eq!(throttle.gate(5.0), Gate::Fire);
    }
}
