//! One-shot animated counters.

use crate::EnhanceError;

/// Parse the numeric target carried by a counter element.
pub fn parse_target(raw: &str) -> Result<f64, EnhanceError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '_').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EnhanceError::InvalidCounterTarget(raw.to_string())),
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

/// Rounded value with thousands separated by a plain space, e.g. `1 234 567`.
///
/// Works on `f64` directly so targets beyond the `i64` range keep every digit.
pub fn format_grouped(value: f64) -> String {
    let value = value.round();
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

/// A single sampled frame of a counter animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub value: f64,
    pub text: String,
    pub done: bool,
}

impl CounterFrame {
    fn new(value: f64, done: bool) -> Self {
        let value = value.round();
        Self {
            value,
            text: format_grouped(value),
            done,
        }
    }
}

/// Animation state for one counter element.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
    started_at_ms: Option<f64>,
    animated: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at_ms: None,
            animated: false,
        }
    }

    /// Claim the one-shot animation. Returns `false` if it already ran or is running.
    pub fn mark_animated(&mut self) -> bool {
        !std::mem::replace(&mut self.animated, true)
    }

    /// Final frame, used when motion is reduced.
    pub fn finish(&mut self) -> CounterFrame {
        self.animated = true;
        CounterFrame::new(self.target, true)
    }

    /// Sample the animation at `now_ms`. The first call fixes the start time.
    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let started = *self.started_at_ms.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - started) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        CounterFrame::new(self.target * ease_out_cubic(progress), progress >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1 000");
        assert_eq!(format_grouped(1_234_567.0), "1 234 567");
        assert_eq!(format_grouped(-45_000.0), "-45 000");
        assert_eq!(format_grouped(-0.4), "0");
    }

    #[test]
    fn targets_beyond_i64_keep_every_digit() {
        let target = parse_target("1e20").unwrap();
        let frame = CounterAnimation::new(target, 1200.0).finish();
        assert_eq!(frame.text, "100 000 000 000 000 000 000");
    }

    #[test]
    fn rejects_non_finite_targets() {
        assert_eq!(parse_target("1234567").unwrap(), 1_234_567.0);
        assert_eq!(parse_target(" 27 000 ").unwrap(), 27_000.0);
        assert!(parse_target("").is_err());
        assert!(parse_target("many").is_err());
        assert!(parse_target("inf").is_err());
        assert!(parse_target("NaN").is_err());
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn reaches_exact_target_and_never_decreases() {
        let mut animation = CounterAnimation::new(1_234_567.0, 1200.0);
        let mut previous = f64::NEG_INFINITY;
        let mut now = 5_000.0;
        let last = loop {
            let frame = animation.frame(now);
            assert!(frame.value >= previous, "{} dropped below {}", frame.value, previous);
            previous = frame.value;
            if frame.done {
                break frame;
            }
            now += 16.7;
        };
        assert_eq!(last.text, "1 234 567");
        assert_eq!(last.value, 1_234_567.0);
    }

    #[test]
    fn first_frame_starts_at_zero() {
        let mut animation = CounterAnimation::new(500.0, 1200.0);
        let frame = animation.frame(100.0);
        assert_eq!(frame.text, "0");
        assert!(!frame.done);
    }

    #[test]
    fn reduced_motion_jumps_to_final_value() {
        let mut animation = CounterAnimation::new(1_234_567.0, 1200.0);
        let frame = animation.finish();
        assert!(frame.done);
        assert_eq!(frame.text, "1 234 567");
        assert!(!animation.mark_animated());
    }

    #[test]
    fn animation_is_claimed_once() {
        let mut animation = CounterAnimation::new(10.0, 1200.0);
        assert!(animation.mark_animated());
        assert!(!animation.mark_animated());
    }
}
