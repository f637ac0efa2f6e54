//! Interactive renderer: one widget per content node.

use std::fmt::Write;

use sc_content::{ContentNode, Normalized, segment};

use crate::ContentRenderer;
use crate::escape_html;
use crate::options::RenderOptions;
use crate::tabs::render_tabs;

const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Renderer instantiating widget markup for every content node.
///
/// HTML nodes are emitted verbatim. Tab bodies are rendered verbatim too,
/// except that widget markers left inside them by normalization are
/// rendered as their widgets.
#[derive(Clone, Debug, Default)]
pub struct WidgetRenderer {
    options: RenderOptions,
}

/// Per-render counters.
#[derive(Default)]
struct RenderState {
    next_group_id: usize,
}

impl WidgetRenderer {
    /// Create a widget renderer.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render content nodes without the wrapper.
    #[must_use]
    pub fn render_nodes(&self, nodes: &[ContentNode]) -> String {
        let mut out = String::new();
        let mut state = RenderState::default();
        self.write_nodes(nodes, &mut state, &mut out);
        out
    }

    fn write_nodes(&self, nodes: &[ContentNode], state: &mut RenderState, out: &mut String) {
        for node in nodes {
            self.write_node(node, state, out);
        }
    }

    fn write_node(&self, node: &ContentNode, state: &mut RenderState, out: &mut String) {
        match node {
            ContentNode::Html { markup } => out.push_str(markup),
            ContentNode::PodcastSubscribe { show_id } => {
                write!(
                    out,
                    r#"<div class="podcast-subscribe"><a href="{}{}" target="_blank" rel="noopener noreferrer">Subscribe</a></div>"#,
                    escape_html(&self.options.podcast_url),
                    escape_html(show_id)
                )
                .unwrap();
            }
            ContentNode::YouTubeEmbed { video_id } => {
                write!(
                    out,
                    r#"<div class="video-embed" style="position:relative;width:100%;padding-bottom:56.25%"><iframe style="position:absolute;top:0;left:0;width:100%;height:100%" src="{}{}" title="YouTube video player" frameborder="0" allow="{YOUTUBE_ALLOW}" allowfullscreen></iframe></div>"#,
                    escape_html(&self.options.youtube_embed_url),
                    escape_html(video_id)
                )
                .unwrap();
            }
            ContentNode::AudioPlayer { audio_url } => {
                let src = escape_html(audio_url);
                write!(
                    out,
                    r#"<div class="audio-player"><audio controls preload="metadata"><source src="{src}" type="audio/mpeg"><source src="{src}" type="audio/mp3">Your browser does not support the audio element.</audio></div>"#
                )
                .unwrap();
            }
            ContentNode::Tabs { tabs } => {
                let group_id = state.next_group_id;
                state.next_group_id += 1;
                render_tabs(group_id, tabs, out, |content, out| {
                    self.write_nodes(&segment(content), state, out);
                });
            }
        }
    }
}

impl ContentRenderer for WidgetRenderer {
    fn render(&self, normalized: &Normalized) -> String {
        let nodes = normalized.nodes();
        tracing::debug!(
            nodes = nodes.len(),
            widgets = nodes.iter().filter(|n| n.is_widget()).count(),
            "Rendering widgets"
        );
        self.options.wrap(self.render_nodes(&nodes))
    }
}
