use serde::{Deserialize, Serialize};

use crate::EnhanceError;

// ===== CONFIG TYPES =====

/// Tunables for every enhancement on the page.
///
/// The defaults reproduce the stock page behavior. A page may override any
/// subset through an inline TOML block; unspecified fields keep their default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub carousel: CarouselConfig,
    pub timeline: TimelineConfig,
    pub counters: CounterConfig,
    pub reveal: RevealConfig,
    pub video: VideoConfig,
}

impl PageConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, EnhanceError> {
        Ok(toml::from_str(source)?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    /// Constant visual speed of the slide track.
    pub speed_px_per_sec: f64,
    /// Delay before motion resumes after a search jump.
    pub resume_delay_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: 20.0,
            resume_delay_ms: 1200,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    pub step_px: f64,
    pub interval_ms: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            step_px: 0.6,
            interval_ms: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Visible ratio that starts the animation.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            threshold: 0.6,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.2 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    pub oembed_endpoint: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            oembed_endpoint: "https://www.youtube.com/oembed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults() {
        let config = PageConfig::from_toml_str("").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.carousel.speed_px_per_sec, 20.0);
        assert_eq!(config.carousel.resume_delay_ms, 1200);
        assert_eq!(config.timeline.interval_ms, 30);
        assert_eq!(config.counters.threshold, 0.6);
        assert_eq!(config.reveal.threshold, 0.2);
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config = PageConfig::from_toml_str(
            r#"
            [carousel]
            speed_px_per_sec = 35.0

            [video]
            oembed_endpoint = "https://vimeo.com/api/oembed.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.speed_px_per_sec, 35.0);
        assert_eq!(config.carousel.resume_delay_ms, 1200);
        assert_eq!(config.video.oembed_endpoint, "https://vimeo.com/api/oembed.json");
        assert_eq!(config.timeline, TimelineConfig::default());
    }

    #[test]
    fn malformed_source_is_an_error() {
        let result = PageConfig::from_toml_str("[carousel\nspeed_px_per_sec = ");
        assert!(matches!(result, Err(EnhanceError::Config(_))));
    }
}
