/// Tick-driven horizontal auto-scroll for the chronology strip.
///
/// Browsers report `scrollLeft` in whole pixels, so the scroller keeps the
/// fractional position itself and only adopts the element's value when the
/// user has scrolled away from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineScroller {
    step_px: f64,
    position: f64,
    paused: bool,
}

impl TimelineScroller {
    pub fn new(step_px: f64) -> Self {
        Self {
            step_px,
            position: 0.0,
            paused: false,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Returns the scroll position to write, or `None` to leave it untouched.
    pub fn tick(&mut self, scroll_left: f64, scroll_width: f64, client_width: f64) -> Option<f64> {
        if self.paused {
            return None;
        }
        let max = scroll_width - client_width;
        if !(max > 0.0) {
            return None;
        }
        if (scroll_left - self.position).abs() >= 1.0 {
            self.position = scroll_left;
        }
        self.position += self.step_px;
        if self.position >= max {
            self.position = 0.0;
        }
        Some(self.position)
    }
}
