//! Segmentation of normalized text into content nodes.

use crate::marker::{MarkerKind, Span, scan_markers};
use crate::node::ContentNode;
use crate::payload::decode_tabs;

/// Split normalized text into content nodes.
///
/// Every widget marker becomes its own node; everything else is collected into
/// [`ContentNode::Html`] verbatim. Consecutive HTML is always a single node,
/// including when a tabs marker fails to decode and falls back to its literal
/// text.
///
/// ```
/// use sc_content::{ContentNode, segment};
///
/// let nodes = segment("<p>Hi</p>{{podcast-subscribe:7}}<p>Bye</p>");
/// assert_eq!(
///     nodes,
///     vec![
///         ContentNode::html("<p>Hi</p>"),
///         ContentNode::PodcastSubscribe { show_id: "7".to_owned() },
///         ContentNode::html("<p>Bye</p>"),
///     ]
/// );
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    let mut html = String::new();

    for span in scan_markers(text) {
        match span {
            Span::Text(markup) => html.push_str(markup),
            Span::Marker { kind, payload, raw } => match widget(kind, payload) {
                Some(node) => {
                    flush(&mut nodes, &mut html);
                    nodes.push(node);
                }
                None => html.push_str(raw),
            },
        }
    }
    flush(&mut nodes, &mut html);

    nodes
}

fn widget(kind: MarkerKind, payload: &str) -> Option<ContentNode> {
    let node = match kind {
        MarkerKind::PodcastSubscribe => ContentNode::PodcastSubscribe {
            show_id: payload.to_owned(),
        },
        MarkerKind::YouTube => ContentNode::YouTubeEmbed {
            video_id: payload.to_owned(),
        },
        MarkerKind::Audio => ContentNode::AudioPlayer {
            audio_url: payload.to_owned(),
        },
        MarkerKind::Tabs => match decode_tabs(payload) {
            Ok(tabs) => ContentNode::Tabs { tabs },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to decode tabs payload, keeping marker as text");
                return None;
            }
        },
    };
    Some(node)
}

fn flush(nodes: &mut Vec<ContentNode>, html: &mut String) {
    if !html.is_empty() {
        nodes.push(ContentNode::html(std::mem::take(html)));
    }
}
