//! oEmbed metadata for embedded video cards.

use serde::{Deserialize, Serialize};

use crate::EnhanceError;

/// Subset of an oEmbed response the cards display. Every field is optional
/// because providers omit them freely.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OEmbedResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

pub fn oembed_request_url(endpoint: &str, video_url: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{endpoint}{separator}format=json&url={}",
        urlencoding::encode(video_url)
    )
}

/// Validate an HTTP response and decode its body.
pub fn parse_oembed(status: u16, body: &str) -> Result<OEmbedResponse, EnhanceError> {
    if !(200..300).contains(&status) {
        return Err(EnhanceError::OEmbedStatus(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// Text content of a video card, starting from its server-rendered placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoCard {
    pub title: String,
    pub author: String,
    pub thumbnail_src: String,
    pub thumbnail_alt: String,
}

impl VideoCard {
    /// Replace placeholders with every usable field. Returns whether anything changed.
    pub fn apply(&mut self, metadata: &OEmbedResponse) -> bool {
        let mut changed = false;
        if let Some(title) = non_blank(&metadata.title) {
            self.title = title.to_string();
            self.thumbnail_alt = title.to_string();
            changed = true;
        }
        if let Some(author) = non_blank(&metadata.author_name) {
            self.author = author.to_string();
            changed = true;
        }
        if let Some(thumbnail) = non_blank(&metadata.thumbnail_url) {
            self.thumbnail_src = thumbnail.to_string();
            changed = true;
        }
        changed
    }

    /// Apply a fetch result; failures leave the card untouched.
    pub fn apply_result(&mut self, result: &Result<OEmbedResponse, EnhanceError>) -> bool {
        match result {
            Ok(metadata) => self.apply(metadata),
            Err(_) => false,
        }
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder() -> VideoCard {
        VideoCard {
            title: "Видео".to_string(),
            author: "Загрузка…".to_string(),
            thumbnail_src: "/img/video-placeholder.jpg".to_string(),
            thumbnail_alt: "Превью видео".to_string(),
        }
    }

    #[test]
    fn encodes_video_url() {
        assert_eq!(
            oembed_request_url("https://www.youtube.com/oembed", "https://youtu.be/abc?t=10"),
            "https://www.youtube.com/oembed?format=json&url=https%3A%2F%2Fyoutu.be%2Fabc%3Ft%3D10"
        );
        assert_eq!(
            oembed_request_url("https://example.com/oembed?maxwidth=640", "x"),
            "https://example.com/oembed?maxwidth=640&format=json&url=x"
        );
    }

    #[test]
    fn not_found_keeps_placeholders() {
        let mut card = placeholder();
        let result = parse_oembed(404, "Not Found");
        assert!(matches!(result, Err(EnhanceError::OEmbedStatus(404))));
        assert!(!card.apply_result(&result));
        assert_eq!(card, placeholder());
    }

    #[test]
    fn malformed_payload_keeps_placeholders() {
        let mut card = placeholder();
        let result = parse_oembed(200, "<html>");
        assert!(matches!(result, Err(EnhanceError::OEmbedPayload(_))));
        assert!(!card.apply_result(&result));
        assert_eq!(card, placeholder());
    }

    #[test]
    fn full_payload_replaces_placeholders() {
        let body = serde_json::json!({
            "title": "Парад Победы 1945",
            "author_name": "Архив",
            "thumbnail_url": "https://i.ytimg.com/vi/abc/hqdefault.jpg",
            "provider_name": "YouTube",
        })
        .to_string();

        let mut card = placeholder();
        assert!(card.apply_result(&parse_oembed(200, &body)));
        assert_eq!(card.title, "Парад Победы 1945");
        assert_eq!(card.author, "Архив");
        assert_eq!(card.thumbnail_src, "https://i.ytimg.com/vi/abc/hqdefault.jpg");
        assert_eq!(card.thumbnail_alt, "Парад Победы 1945");
    }

    #[test]
    fn blank_fields_are_ignored() {
        let metadata = parse_oembed(200, r#"{"title": "  ", "author_name": "Канал"}"#).unwrap();

        let mut card = placeholder();
        assert!(card.apply(&metadata));
        assert_eq!(card.title, "Видео");
        assert_eq!(card.author, "Канал");
        assert_eq!(card.thumbnail_src, "/img/video-placeholder.jpg");
    }

    #[test]
    fn empty_object_has_nothing_usable() {
        let metadata = parse_oembed(200, "{}").unwrap();
        let mut card = placeholder();
        assert!(!card.apply(&metadata));
        assert_eq!(card, placeholder());
    }
}
