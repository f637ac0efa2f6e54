//! Raw content to content nodes.

use std::sync::LazyLock;

use crate::node::ContentNode;
use crate::normalize::{Normalized, Normalizer};

static DEFAULT_TRANSFORMER: LazyLock<Transformer> = LazyLock::new(Transformer::default);

/// Transform raw content with the built-in rules.
///
/// ```
/// use sc_content::{ContentNode, transform};
///
/// let nodes = transform(r#"<p>Hi</p>[podcast_subscribe id="7"]<p>Bye</p>"#);
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[1], ContentNode::PodcastSubscribe { show_id: "7".to_owned() });
/// ```
#[must_use]
pub fn transform(content: &str) -> Vec<ContentNode> {
    DEFAULT_TRANSFORMER.transform(content)
}

/// Content transformer.
///
/// Pure and reentrant: holds only compiled rules, so one instance can be
/// shared across threads and called any number of times.
#[derive(Clone, Debug, Default)]
pub struct Transformer {
    normalizer: Normalizer,
}

impl Transformer {
    /// Create a transformer using the given rule set.
    #[must_use]
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Normalize raw content without segmenting it.
    #[must_use]
    pub fn normalize(&self, content: &str) -> Normalized {
        self.normalizer.normalize(content)
    }

    /// Transform raw content into an ordered sequence of content nodes.
    ///
    /// Never fails: anything that is not a well-formed marker ends up in an
    /// [`ContentNode::Html`] node. Empty input yields no nodes.
    #[must_use]
    pub fn transform(&self, content: &str) -> Vec<ContentNode> {
        if content.is_empty() {
            return Vec::new();
        }
        self.normalize(content).nodes()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::marker::{Span, scan_markers};
    use crate::node::Tab;
    use crate::segment::segment;

    static_assertions::assert_impl_all!(Transformer: Send, Sync);

    fn podcast(id: &str) -> ContentNode {
        ContentNode::PodcastSubscribe {
            show_id: id.to_owned(),
        }
    }

    fn youtube(id: &str) -> ContentNode {
        ContentNode::YouTubeEmbed {
            video_id: id.to_owned(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(transform("").is_empty());
    }

    #[test]
    fn test_identity_without_markers() {
        let input = "<h2>Title</h2>\n<p>Some [bracketed] text with {braces}.</p>";
        assert_eq!(transform(input), vec![ContentNode::html(input)]);
    }

    #[test]
    fn test_podcast_example() {
        assert_eq!(
            transform(r#"<p>Hi</p>[podcast_subscribe id="7"]<p>Bye</p>"#),
            vec![
                ContentNode::html("<p>Hi</p>"),
                podcast("7"),
                ContentNode::html("<p>Bye</p>"),
            ]
        );
    }

    #[test]
    fn test_single_podcast_preserves_surroundings() {
        let nodes = transform(concat!(
            "<!-- wp:shortcode -->\n",
            r#"[podcast_subscribe id="42"]"#,
            "\n<!-- /wp:shortcode -->",
        ));
        let widgets: Vec<_> = nodes.iter().filter(|n| n.is_widget()).collect();
        assert_eq!(widgets, vec![&podcast("42")]);

        let opening = ContentNode::html("<!-- wp:shortcode -->\n");
        let closing = ContentNode::html("\n<!-- /wp:shortcode -->");
        assert_eq!(nodes.first(), Some(&opening));
        assert_eq!(nodes.last(), Some(&closing));
    }

    #[test]
    fn test_youtube_long_and_short() {
        assert_eq!(
            transform("https://www.youtube.com/watch?v=abc123"),
            vec![youtube("abc123")]
        );
        assert_eq!(
            transform("https://youtu.be/abc123"),
            vec![youtube("abc123")]
        );
    }

    #[test]
    fn test_youtube_every_occurrence() {
        let nodes = transform("<p>https://youtu.be/a</p><p>https://youtu.be/b</p>");
        assert_eq!(
            nodes,
            vec![
                ContentNode::html("<p>"),
                youtube("a"),
                ContentNode::html("</p><p>"),
                youtube("b"),
                ContentNode::html("</p>"),
            ]
        );
    }

    #[test]
    fn test_youtube_block_is_one_embed() {
        let input = concat!(
            "<p>Watch:</p>\n",
            r#"<!-- wp:core-embed/youtube {"url":"https://youtu.be/xyz"} -->"#,
            r#"<figure class="wp-block-embed"><div class="wp-block-embed__wrapper">"#,
            "\nhttps://youtu.be/xyz\n",
            "</div></figure>",
            "<!-- /wp:core-embed/youtube -->\n",
            "<p>Done</p>",
        );
        assert_eq!(
            transform(input),
            vec![
                ContentNode::html("<p>Watch:</p>\n"),
                youtube("xyz"),
                ContentNode::html("\n<p>Done</p>"),
            ]
        );
    }

    #[test]
    fn test_buzzsprout_episode() {
        assert_eq!(
            transform(r#"<p>[buzzsprout episode="11" player="true"]</p><p>Notes</p>"#),
            vec![
                ContentNode::AudioPlayer {
                    audio_url: "https://www.buzzsprout.com/2036436/11.mp3".to_owned(),
                },
                ContentNode::html("<p>Notes</p>"),
            ]
        );
    }

    #[test]
    fn test_audio_marker_passes_through() {
        assert_eq!(
            transform("<p>Listen:</p>{{audio:https://cdn.example.com/ep1.mp3}}"),
            vec![
                ContentNode::html("<p>Listen:</p>"),
                ContentNode::AudioPlayer {
                    audio_url: "https://cdn.example.com/ep1.mp3".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_tabs_in_source_order() {
        let input = r#"<p>Intro</p>
[intense_tabs direction="horizontal"]
[intense_tab title="Podcast"]
  <p>Listen here</p>
[/intense_tab]
[intense_tab title="Video"]<p>Watch</p>[/intense_tab]
[intense_tab title="Notes"] <ul><li>one</li></ul> [/intense_tab]
[/intense_tabs]
<p>Outro</p>"#;

        let nodes = transform(input);
        assert_eq!(
            nodes,
            vec![
                ContentNode::html("<p>Intro</p>\n"),
                ContentNode::Tabs {
                    tabs: vec![
                        Tab::new("Podcast", "<p>Listen here</p>"),
                        Tab::new("Video", "<p>Watch</p>"),
                        Tab::new("Notes", "<ul><li>one</li></ul>"),
                    ]
                },
                ContentNode::html("\n<p>Outro</p>"),
            ]
        );
    }

    #[test]
    fn test_tab_content_keeps_internal_markers() {
        let nodes = transform(concat!(
            r#"[intense_tabs][intense_tab title="Video"]"#,
            "https://youtu.be/xyz",
            "[/intense_tab][/intense_tabs]",
        ));
        assert_eq!(
            nodes,
            vec![ContentNode::Tabs {
                tabs: vec![Tab::new("Video", "{{youtube:xyz}}")],
            }]
        );

        let ContentNode::Tabs { tabs } = &nodes[0] else {
            panic!("expected tabs");
        };
        assert_eq!(segment(&tabs[0].content), vec![youtube("xyz")]);
    }

    #[test]
    fn test_empty_tab_group_preserved_as_text() {
        let nodes = transform("[intense_tabs]<p>orphan</p>[/intense_tabs]");
        assert!(!nodes.iter().any(|n| matches!(n, ContentNode::Tabs { .. })));
        assert_eq!(
            nodes,
            vec![ContentNode::html("{{tabs-start}}<p>orphan</p>{{/tabs}}")]
        );
    }

    #[test]
    fn test_two_tab_groups() {
        let nodes = transform(
            r#"[intense_tabs][intense_tab title="A"]a[/intense_tab][/intense_tabs]<hr>[intense_tabs][intense_tab title="B"]b[/intense_tab][/intense_tabs]"#,
        );
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], ContentNode::html("<hr>"));
    }

    #[test]
    fn test_unterminated_shortcodes_stay_literal() {
        let input = r#"<p>[podcast_subscribe id="7"</p><p>{{youtube:abc</p>"#;
        assert_eq!(transform(input), vec![ContentNode::html(input)]);
    }

    #[test]
    fn test_corrupted_tabs_payload() {
        let raw = "{{tabs:Zm9v}}";
        assert_eq!(transform(raw), vec![ContentNode::html(raw)]);
    }

    #[test]
    fn test_idempotent() {
        let input = concat!(
            r#"<p>a</p>[podcast_subscribe id="1"]https://youtu.be/x"#,
            r#"[intense_tabs][intense_tab title="T"]t[/intense_tab][/intense_tabs]"#,
        );
        let transformer = Transformer::default();
        assert_eq!(transformer.transform(input), transformer.transform(input));
        assert_eq!(transform(input), transformer.transform(input));
    }

    #[test]
    fn test_reserialization_matches_single_pass_scan() {
        let input = concat!(
            r#"<p>a</p>[podcast_subscribe id="1"]<p>b</p>"#,
            "https://youtu.be/x{{audio:https://x/y.mp3}}",
            r#"[intense_tabs][intense_tab title="T"]t[/intense_tab][/intense_tabs]<p>c</p>"#,
        );
        let normalized = Transformer::default().normalize(input);

        let from_nodes: String = normalized
            .nodes()
            .iter()
            .map(|node| match node {
                ContentNode::Html { markup } => markup.clone(),
                other => format!("<{}/>", other.kind()),
            })
            .collect();
        let from_scan: String = scan_markers(&normalized.text)
            .iter()
            .map(|span| match span {
                Span::Text(text) => (*text).to_owned(),
                Span::Marker { kind, .. } => format!("<{}/>", kind.name()),
            })
            .collect();

        assert_eq!(from_nodes, from_scan);
        assert_eq!(
            from_nodes,
            "<p>a</p><podcast-subscribe/><p>b</p><youtube/><audio/><tabs/><p>c</p>"
        );
    }
}
