//! Rewrite rules for legacy shortcodes.
//!
//! Each rule is a pure `&str -> String` substitution over the whole document.
//! Rules are independent of one another; the only coupling is the order in
//! which [`Normalizer`](crate::Normalizer) applies them.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marker::{MarkerKind, TAB_END, TABS_END, TABS_START};

/// Name of the `[podcast_subscribe id="…"]` rule.
pub const PODCAST_SUBSCRIBE: &str = "podcast-subscribe";
/// Name of the id-less `[podcast_subscribe]` rule.
pub const PODCAST_SUBSCRIBE_DEFAULT: &str = "podcast-subscribe-default";
/// Name of the `[youtube URL]` rule.
pub const YOUTUBE_SHORTCODE: &str = "youtube-shortcode";
/// Name of the Gutenberg YouTube embed block rule.
pub const YOUTUBE_BLOCK: &str = "youtube-block";
/// Name of the bare YouTube URL rule.
pub const YOUTUBE_URL: &str = "youtube-url";
/// Name of the `[audio src="…"]` rule.
pub const AUDIO_SHORTCODE: &str = "audio-shortcode";
/// Name of the `[buzzsprout episode='…']` rule.
pub const BUZZSPROUT_SHORTCODE: &str = "buzzsprout-shortcode";
/// Name of the `[intense_tabs]` rule.
pub const TABS_START_RULE: &str = "tabs-start";
/// Name of the `[/intense_tabs]` rule.
pub const TABS_END_RULE: &str = "tabs-end";
/// Name of the `[intense_tab title="…"]` rule.
pub const TAB_START_RULE: &str = "tab-start";
/// Name of the `[/intense_tab]` rule.
pub const TAB_END_RULE: &str = "tab-end";

/// Episode URL prefix for Buzzsprout shortcodes; the episode number and
/// `.mp3` are appended.
pub const DEFAULT_BUZZSPROUT_URL: &str = "https://www.buzzsprout.com/2036436/";

/// All rule names in application order.
pub const RULE_NAMES: &[&str] = &[
    PODCAST_SUBSCRIBE,
    PODCAST_SUBSCRIBE_DEFAULT,
    YOUTUBE_SHORTCODE,
    YOUTUBE_BLOCK,
    YOUTUBE_URL,
    AUDIO_SHORTCODE,
    BUZZSPROUT_SHORTCODE,
    TABS_START_RULE,
    TABS_END_RULE,
    TAB_START_RULE,
    TAB_END_RULE,
];

static PODCAST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[podcast_subscribe id="([^"]+)"\]"#).unwrap());
static PODCAST_DEFAULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[podcast_subscribe(?:\s[^\]]*)?\]").unwrap());
static YOUTUBE_SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[youtube\s+(https?://[^\]\s]+)[^\]]*\]").unwrap());
static YOUTUBE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<!-- wp:(?:core-embed/youtube|embed)\b[^>]*-->\s*<figure[^>]*>.*?<div[^>]*>\s*(https?://[^\s<]+)\s*</div>.*?</figure>\s*<!-- /wp:(?:core-embed/youtube|embed) -->",
    )
    .unwrap()
});
static YOUTUBE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?youtu(?:\.be|be\.com)/(?:watch\?v=)?([a-zA-Z0-9_-]+)").unwrap()
});
static AUDIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[audio\s+src="([^"]+)"[^\]]*\]"#).unwrap());
static BUZZSPROUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<p>\[buzzsprout\s+episode=['"](\d+)['"][^\]]*\]</p>|\[buzzsprout\s+episode=['"](\d+)['"][^\]]*\]"#,
    )
    .unwrap()
});
static TABS_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[intense_tabs(?:\s[^\]]*)?\]").unwrap());
static TABS_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/intense_tabs\]").unwrap());
static TAB_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[intense_tab\s+title="([^"]+)"[^\]]*\]"#).unwrap());
static TAB_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/intense_tab\]").unwrap());

/// How a rule produces its replacement text.
#[derive(Clone, Debug)]
enum Replacement {
    /// Regex expansion template (`${1}` refers to capture groups).
    Template(Cow<'static, str>),
    /// Fixed text, inserted as-is.
    Literal(String),
    /// Computed replacement; `None` keeps the match unchanged.
    Function(fn(&Captures<'_>) -> Option<String>),
}

/// A single named substitution.
#[derive(Clone, Debug)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    /// Rule name, one of [`RULE_NAMES`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule to `text`, returning the result and how many matches
    /// were rewritten.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut count = 0;
        let output = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let replaced = self.expand(caps);
            count += usize::from(replaced.is_some());
            replaced.unwrap_or_else(|| caps[0].to_owned())
        });
        (output, count)
    }

    fn expand(&self, caps: &Captures<'_>) -> Option<String> {
        match &self.replacement {
            Replacement::Template(template) => {
                let mut dst = String::new();
                caps.expand(template.as_ref(), &mut dst);
                Some(dst)
            }
            Replacement::Literal(text) => Some(text.clone()),
            Replacement::Function(f) => f(caps),
        }
    }

    /// `[podcast_subscribe id="ID"]` → `{{podcast-subscribe:ID}}`.
    #[must_use]
    pub fn podcast_subscribe() -> Self {
        Self {
            name: PODCAST_SUBSCRIBE,
            pattern: PODCAST_RE.clone(),
            replacement: Replacement::Template(Cow::Borrowed("{{podcast-subscribe:${1}}}")),
        }
    }

    /// `[podcast_subscribe …]` without an id → marker for `show_id`.
    #[must_use]
    pub fn podcast_subscribe_default(show_id: &str) -> Self {
        Self {
            name: PODCAST_SUBSCRIBE_DEFAULT,
            pattern: PODCAST_DEFAULT_RE.clone(),
            replacement: Replacement::Literal(MarkerKind::PodcastSubscribe.marker(show_id)),
        }
    }

    /// `[youtube URL]` → `{{youtube:ID}}`, left alone when no id can be found.
    #[must_use]
    pub fn youtube_shortcode() -> Self {
        Self {
            name: YOUTUBE_SHORTCODE,
            pattern: YOUTUBE_SHORTCODE_RE.clone(),
            replacement: Replacement::Function(|caps| youtube_marker(&caps[1])),
        }
    }

    /// Gutenberg YouTube embed block (comment, figure and URL) →
    /// `{{youtube:ID}}`. Blocks of other providers are left alone.
    #[must_use]
    pub fn youtube_block() -> Self {
        Self {
            name: YOUTUBE_BLOCK,
            pattern: YOUTUBE_BLOCK_RE.clone(),
            replacement: Replacement::Function(|caps| youtube_marker(&caps[1])),
        }
    }

    /// Bare `youtube.com` / `youtu.be` URLs → `{{youtube:ID}}`.
    #[must_use]
    pub fn youtube_url() -> Self {
        Self {
            name: YOUTUBE_URL,
            pattern: YOUTUBE_URL_RE.clone(),
            replacement: Replacement::Template(Cow::Borrowed("{{youtube:${1}}}")),
        }
    }

    /// `[audio src="URL" …]` → `{{audio:URL}}`.
    #[must_use]
    pub fn audio_shortcode() -> Self {
        Self {
            name: AUDIO_SHORTCODE,
            pattern: AUDIO_RE.clone(),
            replacement: Replacement::Template(Cow::Borrowed("{{audio:${1}}}")),
        }
    }

    /// `[buzzsprout episode='N' …]` → `{{audio:EPISODE_URL N.mp3}}`.
    ///
    /// A shortcode alone in a paragraph replaces the whole paragraph.
    #[must_use]
    pub fn buzzsprout_shortcode(episode_url: &str) -> Self {
        // Only one of the two alternatives participates, the other expands empty
        let template = format!(
            "{{{{audio:{}${{1}}${{2}}.mp3}}}}",
            episode_url.replace('$', "$$")
        );
        Self {
            name: BUZZSPROUT_SHORTCODE,
            pattern: BUZZSPROUT_RE.clone(),
            replacement: Replacement::Template(Cow::Owned(template)),
        }
    }

    /// `[intense_tabs …]` → `{{tabs-start}}`.
    #[must_use]
    pub fn tabs_start() -> Self {
        Self {
            name: TABS_START_RULE,
            pattern: TABS_START_RE.clone(),
            replacement: Replacement::Literal(TABS_START.to_owned()),
        }
    }

    /// `[/intense_tabs]` → `{{/tabs}}`.
    #[must_use]
    pub fn tabs_end() -> Self {
        Self {
            name: TABS_END_RULE,
            pattern: TABS_END_RE.clone(),
            replacement: Replacement::Literal(TABS_END.to_owned()),
        }
    }

    /// `[intense_tab title="X" …]` → `{{tab:X}}`.
    #[must_use]
    pub fn tab_start() -> Self {
        Self {
            name: TAB_START_RULE,
            pattern: TAB_START_RE.clone(),
            replacement: Replacement::Template(Cow::Borrowed("{{tab:${1}}}")),
        }
    }

    /// `[/intense_tab]` → `{{/tab}}`.
    #[must_use]
    pub fn tab_end() -> Self {
        Self {
            name: TAB_END_RULE,
            pattern: TAB_END_RE.clone(),
            replacement: Replacement::Literal(TAB_END.to_owned()),
        }
    }
}

fn youtube_marker(url: &str) -> Option<String> {
    extract_youtube_id(url).map(|id| MarkerKind::YouTube.marker(id))
}

/// Extract a video id from a YouTube URL.
///
/// Handles `youtube.com/watch?v=ID`, `youtu.be/ID` and `youtube.com/embed/ID`.
///
/// ```
/// use sc_content::extract_youtube_id;
///
/// assert_eq!(extract_youtube_id("https://www.youtube.com/watch?v=abc123&t=4"), Some("abc123"));
/// assert_eq!(extract_youtube_id("https://youtu.be/abc123?si=x"), Some("abc123"));
/// assert_eq!(extract_youtube_id("https://example.com/abc123"), None);
/// ```
#[must_use]
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    let candidate = if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest
    } else if let Some((_, rest)) = url.split_once("youtube.com/embed/") {
        rest
    } else if url.contains("youtube.com/watch") {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))?
    } else {
        return None;
    };

    let end = candidate
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(candidate.len());
    let id = &candidate[..end];
    (!id.is_empty()).then_some(id)
}
