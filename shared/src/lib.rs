//! Platform-independent state behind the memorial page enhancements.
//!
//! Everything here is plain Rust so it can be exercised with `cargo test`
//! without a browser. The `frontend` crate owns the DOM side and drives
//! these types from event listeners, timers and animation frames.

pub mod carousel;
pub mod config;
pub mod counter;
pub mod error;
pub mod modal;
pub mod search;
pub mod timeline;
pub mod video;

// ===== RE-EXPORTS =====

pub use carousel::{CarouselMotion, append_all_or_none};
pub use config::{
    CarouselConfig, CounterConfig, PageConfig, RevealConfig, TimelineConfig, VideoConfig,
};
pub use counter::{CounterAnimation, CounterFrame, ease_out_cubic, format_grouped, parse_target};
pub use error::EnhanceError;
pub use modal::{CloseTransition, ModalState, OpenTransition};
pub use search::{find_slide, leading_token, normalize};
pub use timeline::TimelineScroller;
pub use video::{OEmbedResponse, VideoCard, oembed_request_url, parse_oembed};

// ===== MARKUP CONTRACT =====

/// Class added to `[data-reveal]` elements once they scroll into view.
pub const VISIBLE_CLASS: &str = "is-visible";
/// Class marking the currently open modal.
pub const MODAL_OPEN_CLASS: &str = "is-open";
/// Class set on `<body>` while any modal is open.
pub const BODY_MODAL_CLASS: &str = "model-open";

/// Format a horizontal translation the way it is written into `style.transform`.
pub fn translate_x(offset: f64) -> String {
    if offset == 0.0 {
        return "translateX(0px)".to_string();
    }
    format!("translateX({}px)", -offset)
}

/// Leading number of a CSS length such as `"24px"` or `"24px 16px"`, 0 when absent.
pub fn parse_px(value: &str) -> f64 {
    let number: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect();
    number.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::{parse_px, translate_x};

    #[test]
    fn translation_is_negated_offset() {
        assert_eq!(translate_x(12.5), "translateX(-12.5px)");
        assert_eq!(translate_x(0.0), "translateX(0px)");
    }

    #[test]
    fn css_lengths_parse_leading_number() {
        assert_eq!(parse_px("24px"), 24.0);
        assert_eq!(parse_px("12.5px 8px"), 12.5);
        assert_eq!(parse_px("normal"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}
