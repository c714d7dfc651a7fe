//! Continuous carousel motion.
//!
//! The track scrolls left at a constant speed and wraps once the offset
//! covers the width of the original slides, which the appended clones make
//! seamless. Pausing only freezes the offset; the caller keeps feeding frames.

/// Pending automatic resume after a search jump, on the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SearchHold {
    /// Armed before any frame was seen; the deadline is fixed by the next one.
    Pending { delay_ms: f64 },
    Until { deadline_ms: f64 },
}

/// Motion bookkeeping for one slide track.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselMotion {
    offset: f64,
    total_width: f64,
    speed: f64,
    enabled: bool,
    paused: bool,
    last_frame_ms: Option<f64>,
    search_hold: Option<SearchHold>,
}

impl CarouselMotion {
    /// Motion is disabled when reduced motion is requested or there is
    /// nothing to loop over.
    pub fn new(slide_count: usize, reduced_motion: bool, speed_px_per_sec: f64) -> Self {
        Self {
            offset: 0.0,
            total_width: 0.0,
            speed: speed_px_per_sec,
            enabled: !reduced_motion && slide_count > 1,
            paused: false,
            last_frame_ms: None,
            search_hold: None,
        }
    }

    /// Width of one pass over the original slides.
    pub fn track_width(widths: &[f64], gap: f64) -> f64 {
        let slides: f64 = widths.iter().copied().filter(|w| w.is_finite()).sum();
        let gap = if gap.is_finite() { gap } else { 0.0 };
        slides + gap * widths.len().saturating_sub(1) as f64
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Store a fresh layout measurement.
    ///
    /// Returns the offset to apply right away, or `None` when the track has
    /// no measurable width yet.
    pub fn set_total_width(&mut self, total_width: f64) -> Option<f64> {
        self.total_width = if total_width.is_finite() && total_width > 0.0 {
            total_width
        } else {
            0.0
        };
        if self.total_width <= 0.0 {
            return None;
        }
        self.offset = self.wrap(self.offset);
        Some(self.offset)
    }

    /// Advance by the time elapsed since the previous frame.
    ///
    /// Returns the new offset when it moved. The first frame after creation
    /// only records its timestamp.
    pub fn step(&mut self, timestamp_ms: f64) -> Option<f64> {
        let last = *self.last_frame_ms.get_or_insert(timestamp_ms);
        let elapsed_secs = ((timestamp_ms - last) / 1000.0).max(0.0);
        self.last_frame_ms = Some(timestamp_ms);
        self.release_search_hold(timestamp_ms);

        if !self.enabled || self.paused || self.total_width <= 0.0 {
            return None;
        }

        self.offset += self.speed * elapsed_secs;
        if self.offset >= self.total_width {
            self.offset -= self.total_width;
        }
        // Long stalls (background tabs) can exceed more than one lap.
        self.offset = self.wrap(self.offset);
        Some(self.offset)
    }

    /// Move directly to a slide given its layout-left position.
    pub fn jump_to(&mut self, slide_left: f64) -> Option<f64> {
        if self.total_width <= 0.0 || !slide_left.is_finite() {
            return None;
        }
        self.offset = self.wrap(slide_left);
        Some(self.offset)
    }

    /// Jump to a search match and hold still for `delay_ms` of frame time.
    ///
    /// A later jump replaces the pending deadline instead of adding another,
    /// so the track only moves again once typing has stopped for the delay.
    pub fn jump_and_hold(&mut self, slide_left: f64, delay_ms: f64) -> Option<f64> {
        self.paused = true;
        self.search_hold = Some(match self.last_frame_ms {
            Some(now_ms) => SearchHold::Until {
                deadline_ms: now_ms + delay_ms,
            },
            None => SearchHold::Pending { delay_ms },
        });
        self.jump_to(slide_left)
    }

    fn release_search_hold(&mut self, now_ms: f64) {
        match self.search_hold {
            Some(SearchHold::Pending { delay_ms }) => {
                self.search_hold = Some(SearchHold::Until {
                    deadline_ms: now_ms + delay_ms,
                });
            }
            Some(SearchHold::Until { deadline_ms }) if now_ms >= deadline_ms => {
                self.search_hold = None;
                self.paused = false;
            }
            _ => {}
        }
    }

    fn wrap(&self, value: f64) -> f64 {
        if self.total_width <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        let wrapped = value.rem_euclid(self.total_width);
        // rem_euclid can round up to the modulus for tiny negative inputs.
        if wrapped >= self.total_width { 0.0 } else { wrapped }
    }
}

/// Append a copy of every slide, undoing the copies already made if one fails.
pub fn append_all_or_none<S, C, E>(
    slides: &[S],
    mut append: impl FnMut(&S) -> Result<C, E>,
    mut remove: impl FnMut(&C),
) -> Result<Vec<C>, E> {
    let mut appended = Vec::with_capacity(slides.len());
    for slide in slides {
        match append(slide) {
            Ok(copy) => appended.push(copy),
            Err(error) => {
                appended.iter().rev().for_each(&mut remove);
                return Err(error);
            }
        }
    }
    Ok(appended)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    impl CarouselMotion {
        fn offset(&self) -> f64 {
            self.offset
        }
    }

    fn running(width: f64) -> CarouselMotion {
        let mut motion = CarouselMotion::new(4, false, 20.0);
        motion.set_total_width(width);
        motion
    }

    #[test]
    fn track_width_adds_gaps_between_slides() {
        assert_eq!(CarouselMotion::track_width(&[100.0, 120.0, 80.0], 10.0), 320.0);
        assert_eq!(CarouselMotion::track_width(&[100.0], 10.0), 100.0);
        assert_eq!(CarouselMotion::track_width(&[], 10.0), 0.0);
    }

    #[test]
    fn advances_at_constant_speed() {
        let mut motion = running(1000.0);
        assert_eq!(motion.step(0.0), Some(0.0));
        assert_eq!(motion.step(500.0), Some(10.0));
        assert_eq!(motion.step(1500.0), Some(30.0));
    }

    #[test]
    fn offset_stays_within_track_for_any_delta() {
        let mut motion = running(300.0);
        let mut now = 0.0;
        for delta in [0.0, 16.7, 1000.0, 14_999.0, 15_000.0, 42_123.4, 0.0, 3.0, 250_000.0] {
            now += delta;
            motion.step(now);
            let offset = motion.offset();
            assert!((0.0..300.0).contains(&offset), "offset {offset} escaped after delta {delta}");
        }
    }

    #[test]
    fn wraps_exactly_at_total_width() {
        let mut motion = running(20.0);
        motion.step(0.0);
        assert_eq!(motion.step(1000.0), Some(0.0));
    }

    #[test]
    fn pause_freezes_offset_but_keeps_clock() {
        let mut motion = running(1000.0);
        motion.step(0.0);
        motion.step(1000.0);
        motion.pause();
        assert_eq!(motion.step(5000.0), None);
        assert_eq!(motion.offset(), 20.0);
        motion.resume();
        assert_eq!(motion.step(6000.0), Some(40.0));
    }

    #[test]
    fn reduced_motion_disables_movement() {
        let mut motion = CarouselMotion::new(4, true, 20.0);
        motion.set_total_width(1000.0);
        assert!(!motion.is_enabled());
        motion.step(0.0);
        assert_eq!(motion.step(10_000.0), None);
        assert_eq!(motion.offset(), 0.0);
    }

    #[test]
    fn single_slide_disables_movement() {
        assert!(!CarouselMotion::new(1, false, 20.0).is_enabled());
        assert!(!CarouselMotion::new(0, false, 20.0).is_enabled());
    }

    #[test]
    fn zero_width_guards_offset_math() {
        let mut motion = CarouselMotion::new(3, false, 20.0);
        assert_eq!(motion.set_total_width(0.0), None);
        assert_eq!(motion.set_total_width(f64::NAN), None);
        motion.step(0.0);
        assert_eq!(motion.step(1000.0), None);
        assert_eq!(motion.jump_to(250.0), None);
        assert_eq!(motion.offset(), 0.0);
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut motion = running(1000.0);
        motion.jump_to(750.0);
        assert_eq!(motion.set_total_width(500.0), Some(250.0));
    }

    #[test]
    fn jump_wraps_into_clone_region() {
        let mut motion = running(600.0);
        assert_eq!(motion.jump_to(150.0), Some(150.0));
        assert_eq!(motion.jump_to(780.0), Some(180.0));
    }

    #[test]
    fn search_hold_resumes_after_delay() {
        let mut motion = running(1000.0);
        motion.step(0.0);
        assert_eq!(motion.jump_and_hold(300.0, 1200.0), Some(300.0));
        assert_eq!(motion.step(600.0), None);
        assert_eq!(motion.step(1199.0), None);
        let resumed = motion.step(1200.0).unwrap();
        assert!((resumed - 300.02).abs() < 1e-9);
    }

    #[test]
    fn repeated_search_pushes_resume_back() {
        let mut motion = running(1000.0);
        motion.step(0.0);
        motion.jump_and_hold(100.0, 1200.0);
        motion.step(1000.0);
        motion.jump_and_hold(200.0, 1200.0);
        assert_eq!(motion.step(1200.0), None);
        assert_eq!(motion.step(2199.0), None);
        assert_eq!(motion.offset(), 200.0);
        assert!(motion.step(2200.0).is_some());
    }

    #[test]
    fn search_before_first_frame_waits_full_delay() {
        let mut motion = running(1000.0);
        motion.jump_and_hold(50.0, 1200.0);
        assert_eq!(motion.step(4000.0), None);
        assert_eq!(motion.step(5199.0), None);
        let resumed = motion.step(5200.0).unwrap();
        assert!((resumed - 50.02).abs() < 1e-9);
    }

    #[test]
    fn failed_clone_removes_earlier_clones() {
        let track = RefCell::new(vec!["a", "b", "c"]);
        let result = append_all_or_none(
            &["a", "b", "c"],
            |slide| {
                if *slide == "c" {
                    return Err("detached");
                }
                track.borrow_mut().push(*slide);
                Ok(track.borrow().len() - 1)
            },
            |index| {
                track.borrow_mut().remove(*index);
            },
        );
        assert_eq!(result, Err("detached"));
        assert_eq!(track.into_inner(), vec!["a", "b", "c"]);
    }

    #[test]
    fn clones_every_slide_in_order() {
        let appended = append_all_or_none(&[10, 20], |slide| Ok::<_, ()>(slide + 1), |_| {});
        assert_eq!(appended, Ok(vec![11, 21]));
    }
}
