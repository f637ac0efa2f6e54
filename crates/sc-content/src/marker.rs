//! Internal marker vocabulary.
//!
//! Normalization rewrites every recognised legacy construct into one of these
//! `{{…}}` markers. Widget markers carry a single payload:
//!
//! ```text
//! {{podcast-subscribe:SHOW_ID}}
//! {{youtube:VIDEO_ID}}
//! {{audio:URL}}
//! {{tabs:BASE64_JSON}}
//! ```
//!
//! Tab delimiters (`{{tabs-start}}`, `{{tab:Title}}`, `{{/tab}}`, `{{/tabs}}`)
//! only exist between normalization and tab extraction.

use std::sync::LazyLock;

use regex::Regex;

pub(crate) const TABS_START: &str = "{{tabs-start}}";
pub(crate) const TABS_END: &str = "{{/tabs}}";
pub(crate) const TAB_END: &str = "{{/tab}}";

/// Matches any widget marker. Payloads cannot contain `}`.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(podcast-subscribe|youtube|audio|tabs):([^}]+)\}\}").unwrap()
});

/// Widget marker kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    PodcastSubscribe,
    YouTube,
    Audio,
    Tabs,
}

impl MarkerKind {
    /// Marker name as written between the braces.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PodcastSubscribe => "podcast-subscribe",
            Self::YouTube => "youtube",
            Self::Audio => "audio",
            Self::Tabs => "tabs",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "podcast-subscribe" => Some(Self::PodcastSubscribe),
            "youtube" => Some(Self::YouTube),
            "audio" => Some(Self::Audio),
            "tabs" => Some(Self::Tabs),
            _ => None,
        }
    }

    /// Format a marker carrying `payload`.
    #[must_use]
    pub fn marker(self, payload: &str) -> String {
        format!("{{{{{}:{payload}}}}}", self.name())
    }
}

/// A stretch of normalized text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span<'a> {
    /// Text between markers, verbatim.
    Text(&'a str),
    /// A recognised widget marker.
    Marker {
        kind: MarkerKind,
        payload: &'a str,
        /// The full marker text including braces.
        raw: &'a str,
    },
}

/// Split normalized text into text and marker spans in one pass.
///
/// Empty text spans are never produced.
///
/// ```
/// use sc_content::{MarkerKind, Span, scan_markers};
///
/// let spans = scan_markers("<p>a</p>{{youtube:xyz}}");
/// assert_eq!(spans[0], Span::Text("<p>a</p>"));
/// assert!(matches!(spans[1], Span::Marker { kind: MarkerKind::YouTube, payload: "xyz", .. }));
/// ```
#[must_use]
pub fn scan_markers(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in MARKER_RE.captures_iter(text) {
        let (Some(whole), Some(name), Some(payload)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        // The regex alternation only admits known names
        let Some(kind) = MarkerKind::from_name(name.as_str()) else {
            continue;
        };

        if whole.start() > last {
            spans.push(Span::Text(&text[last..whole.start()]));
        }
        spans.push(Span::Marker {
            kind,
            payload: payload.as_str(),
            raw: whole.as_str(),
        });
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::Text(&text[last..]));
    }

    spans
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_marker_format() {
        assert_eq!(MarkerKind::YouTube.marker("abc"), "{{youtube:abc}}");
        assert_eq!(
            MarkerKind::PodcastSubscribe.marker("7"),
            "{{podcast-subscribe:7}}"
        );
    }

    #[test]
    fn test_scan_plain_text() {
        assert_eq!(scan_markers("<p>hi</p>"), vec![Span::Text("<p>hi</p>")]);
    }

    #[test]
    fn test_scan_empty() {
        assert!(scan_markers("").is_empty());
    }

    #[test]
    fn test_scan_adjacent_markers() {
        let spans = scan_markers("{{youtube:a}}{{audio:https://x/y.mp3}}");
        assert_eq!(spans.len(), 2);
        assert_eq!(
            spans[1],
            Span::Marker {
                kind: MarkerKind::Audio,
                payload: "https://x/y.mp3",
                raw: "{{audio:https://x/y.mp3}}",
            }
        );
    }

    #[test]
    fn test_scan_ignores_unknown_and_unterminated() {
        let text = "{{video:a}} {{youtube:b";
        assert_eq!(scan_markers(text), vec![Span::Text(text)]);
    }

    #[test]
    fn test_scan_ignores_tab_delimiters() {
        let text = "{{tabs-start}}{{tab:A}}x{{/tab}}{{/tabs}}";
        assert_eq!(scan_markers(text), vec![Span::Text(text)]);
    }
}
