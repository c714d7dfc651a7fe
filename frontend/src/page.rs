use shared::EnhanceError;
use web_sys::Window;

use crate::carousel::Carousel;
use crate::config;
use crate::counters::Counters;
use crate::dom;
use crate::modal::ModalManager;
use crate::reveal::Reveal;
use crate::timeline::Timeline;
use crate::video::VideoCards;

/// Owns every enhancement attached to the page.
///
/// Features whose markup is absent are simply not mounted. Dropping the
/// controller detaches listeners, observers, timers and animation frames.
pub struct PageController {
    _reveal: Option<Reveal>,
    _carousel: Option<Carousel>,
    _timeline: Option<Timeline>,
    _modals: Option<ModalManager>,
    _counters: Option<Counters>,
    _videos: Option<VideoCards>,
}

impl PageController {
    pub fn mount(window: &Window) -> Result<Self, EnhanceError> {
        let document = window
            .document()
            .ok_or(EnhanceError::MissingElement("document"))?;
        let config = config::load(&document);
        let reduced_motion = dom::prefers_reduced_motion(window);
        if reduced_motion {
            zoon::println!("Reduced motion requested, animations disabled");
        }

        Ok(Self {
            _reveal: mounted("reveal", Reveal::mount(&document, &config.reveal)),
            _carousel: mounted(
                "carousel",
                Carousel::mount(window, &document, &config.carousel, reduced_motion),
            ),
            _timeline: mounted("timeline", Timeline::mount(&document, &config.timeline)),
            _modals: mounted("modals", ModalManager::mount(&document)),
            _counters: mounted(
                "counters",
                Counters::mount(&document, &config.counters, reduced_motion),
            ),
            _videos: mounted("videos", VideoCards::mount(window, &document, &config.video)),
        })
    }
}

/// A failing feature is logged and skipped; the rest of the page still mounts.
fn mounted<T>(feature: &str, result: Result<Option<T>, EnhanceError>) -> Option<T> {
    match result {
        Ok(feature_state) => feature_state,
        Err(error) => {
            zoon::eprintln!("Failed to mount {feature}: {error}");
            None
        }
    }
}
