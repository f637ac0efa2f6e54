//! Renderer options.

/// Default Spotify show URL prefix for subscribe buttons.
pub const DEFAULT_PODCAST_URL: &str = "https://open.spotify.com/show/";
/// Default YouTube embed URL prefix.
pub const DEFAULT_YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed/";

/// Options shared by both renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class of the wrapping `<div>`. No wrapper when `None`.
    pub wrapper_class: Option<String>,
    /// Prefix joined with the show id to link the subscribe button.
    pub podcast_url: String,
    /// Prefix joined with the video id for the embed iframe.
    pub youtube_embed_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wrapper_class: None,
            podcast_url: DEFAULT_PODCAST_URL.to_owned(),
            youtube_embed_url: DEFAULT_YOUTUBE_EMBED_URL.to_owned(),
        }
    }
}

impl RenderOptions {
    /// Wrap rendered content in the configured wrapper, if any.
    pub(crate) fn wrap(&self, body: String) -> String {
        match &self.wrapper_class {
            Some(class) => format!(
                r#"<div class="{}">{body}</div>"#,
                crate::escape_html(class)
            ),
            None => body,
        }
    }
}
