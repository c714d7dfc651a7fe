/// Recoverable failures while enhancing the page.
///
/// None of these are fatal. Callers log them and leave the affected part of
/// the page in its server-rendered state.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("required element '{0}' is missing")]
    MissingElement(&'static str),
    #[error("counter target '{0}' is not a finite number")]
    InvalidCounterTarget(String),
    #[error("failed to parse page config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("oEmbed request failed with status {0}")]
    OEmbedStatus(u16),
    #[error("malformed oEmbed payload: {0}")]
    OEmbedPayload(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}
