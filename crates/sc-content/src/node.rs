//! Typed content nodes produced by the transformer.

use serde::{Deserialize, Serialize};

/// A single tab within a tab group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Label shown on the tab button.
    pub title: String,
    /// Trimmed body of the tab after normalization.
    ///
    /// Legacy shortcodes inside a tab are already rewritten, so the body may
    /// carry internal `{{youtube:..}}`, `{{podcast-subscribe:..}}` or
    /// `{{audio:..}}` markers next to plain HTML. Pass it through
    /// [`segment`](crate::segment) to turn those markers into nodes.
    pub content: String,
}

impl Tab {
    /// Create a new tab.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A renderable unit of post content.
///
/// Serialized with an internal `type` tag so the presentation layer can
/// dispatch on it directly:
///
/// ```
/// use sc_content::ContentNode;
///
/// let node = ContentNode::PodcastSubscribe { show_id: "42".to_owned() };
/// let json = serde_json::to_string(&node).unwrap();
/// assert_eq!(json, r#"{"type":"podcast-subscribe","showId":"42"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ContentNode {
    /// HTML fragment rendered verbatim. The CMS is the only content author.
    #[serde(rename = "html")]
    Html { markup: String },
    /// Podcast subscribe button.
    #[serde(rename = "podcast-subscribe")]
    PodcastSubscribe { show_id: String },
    /// Responsive YouTube embed.
    #[serde(rename = "youtube")]
    YouTubeEmbed { video_id: String },
    /// Native audio player.
    #[serde(rename = "audio")]
    AudioPlayer { audio_url: String },
    /// Tab group; the first tab is active by default.
    #[serde(rename = "tabs")]
    Tabs { tabs: Vec<Tab> },
}

impl ContentNode {
    /// Create an HTML node.
    #[must_use]
    pub fn html(markup: impl Into<String>) -> Self {
        Self::Html {
            markup: markup.into(),
        }
    }

    /// Stable component name of this node, as used in `data-component`
    /// placeholders and in the serialized `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Html { .. } => "html",
            Self::PodcastSubscribe { .. } => "podcast-subscribe",
            Self::YouTubeEmbed { .. } => "youtube",
            Self::AudioPlayer { .. } => "audio",
            Self::Tabs { .. } => "tabs",
        }
    }

    /// Whether this node needs a widget (anything but plain HTML).
    #[must_use]
    pub fn is_widget(&self) -> bool {
        !matches!(self, Self::Html { .. })
    }
}
