//! Replaces video card placeholders with oEmbed metadata.

use futures::future::join_all;
use shared::{
    EnhanceError, OEmbedResponse, VideoCard, VideoConfig, oembed_request_url, parse_oembed,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Response, Window};
use zoon::{Task, TaskHandle};

use crate::dom::{self, js_error};

const CARD_SELECTOR: &str = "[data-video-card]";
const URL_ATTRIBUTE: &str = "data-video-url";
const TITLE_SELECTOR: &str = ".video-title";
const AUTHOR_SELECTOR: &str = ".video-author";
const THUMBNAIL_SELECTOR: &str = ".video-thumb";

pub struct VideoCards {
    _task: TaskHandle,
}

/// DOM handles of one card plus the text currently shown in it.
struct CardView {
    video_url: String,
    title: Option<Element>,
    author: Option<Element>,
    thumbnail: Option<HtmlImageElement>,
    content: VideoCard,
}

impl VideoCards {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &VideoConfig,
    ) -> Result<Option<Self>, EnhanceError> {
        let cards: Vec<CardView> = dom::query_all::<HtmlElement>(document, CARD_SELECTOR)
            .iter()
            .filter_map(CardView::read)
            .collect();
        if cards.is_empty() {
            return Ok(None);
        }

        zoon::println!("Fetching oEmbed metadata for {} video cards", cards.len());
        let window = window.clone();
        let endpoint = config.oembed_endpoint.clone();
        let task = Task::start_droppable(async move {
            join_all(cards.into_iter().map(|card| enrich(&window, &endpoint, card))).await;
        });
        Ok(Some(Self { _task: task }))
    }
}

async fn enrich(window: &Window, endpoint: &str, mut card: CardView) {
    let request_url = oembed_request_url(endpoint, &card.video_url);
    let result = fetch_oembed(window, &request_url).await;
    if card.content.apply_result(&result) {
        card.write();
    } else if let Err(error) = result {
        zoon::eprintln!("Keeping placeholder for {}: {error}", card.video_url);
    }
}

async fn fetch_oembed(window: &Window, url: &str) -> Result<OEmbedResponse, EnhanceError> {
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into::<Response>()
        .map_err(js_error)?;
    let status = response.status();
    if !response.ok() {
        return Err(EnhanceError::OEmbedStatus(status));
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();
    parse_oembed(status, &body)
}

impl CardView {
    fn read(card: &HtmlElement) -> Option<Self> {
        let video_url = card
            .get_attribute(URL_ATTRIBUTE)
            .filter(|url| !url.trim().is_empty())?;
        let title = dom::query_one::<Element>(card, TITLE_SELECTOR);
        let author = dom::query_one::<Element>(card, AUTHOR_SELECTOR);
        let thumbnail = dom::query_one::<HtmlImageElement>(card, THUMBNAIL_SELECTOR);
        let content = VideoCard {
            title: text_of(&title),
            author: text_of(&author),
            thumbnail_src: thumbnail.as_ref().map(|img| img.src()).unwrap_or_default(),
            thumbnail_alt: thumbnail.as_ref().map(|img| img.alt()).unwrap_or_default(),
        };
        Some(Self {
            video_url,
            title,
            author,
            thumbnail,
            content,
        })
    }

    fn write(&self) {
        if let Some(title) = &self.title {
            title.set_text_content(Some(&self.content.title));
        }
        if let Some(author) = &self.author {
            author.set_text_content(Some(&self.content.author));
        }
        if let Some(thumbnail) = &self.thumbnail {
            if !self.content.thumbnail_src.is_empty() {
                thumbnail.set_src(&self.content.thumbnail_src);
            }
            thumbnail.set_alt(&self.content.thumbnail_alt);
        }
    }
}

fn text_of(element: &Option<Element>) -> String {
    element
        .as_ref()
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}
