//! Static (non-interactive) renderer.
//!
//! Emits the normalized HTML as-is and turns each widget marker into an inert
//! placeholder element. A client runtime can later hydrate the placeholders;
//! without one, the page still renders all surrounding content.
//!
//! A tabs marker whose payload does not decode is kept as literal text, the
//! same way the widget renderer treats it.

use std::fmt::Write;

use sc_content::{MarkerKind, Normalized, Span, decode_tabs, scan_markers};

use crate::ContentRenderer;
use crate::escape_html;
use crate::options::RenderOptions;

/// Renderer producing `data-component` placeholders.
///
/// # Output
///
/// ```html
/// <div data-component="podcast-subscribe" data-show-id="42"></div>
/// <div data-component="youtube" data-video-id="abc123"></div>
/// <div data-component="audio" data-url="https://…/ep.mp3"></div>
/// <div data-component="tabs" data-tabs-b64="W3sidGl0bGUi…"></div>
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticRenderer {
    options: RenderOptions,
}

impl StaticRenderer {
    /// Create a static renderer.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl ContentRenderer for StaticRenderer {
    fn render(&self, normalized: &Normalized) -> String {
        let mut out = String::with_capacity(normalized.text.len());

        for span in scan_markers(&normalized.text) {
            match span {
                Span::Text(text) => out.push_str(text),
                Span::Marker {
                    kind: MarkerKind::Tabs,
                    payload,
                    raw,
                } if decode_tabs(payload).is_err() => {
                    tracing::warn!("Failed to decode tabs payload, keeping marker as text");
                    out.push_str(raw);
                }
                Span::Marker { kind, payload, .. } => placeholder(kind, payload, &mut out),
            }
        }

        self.options.wrap(out)
    }
}

/// Data attribute carrying the marker payload.
fn data_attribute(kind: MarkerKind) -> &'static str {
    match kind {
        MarkerKind::PodcastSubscribe => "data-show-id",
        MarkerKind::YouTube => "data-video-id",
        MarkerKind::Audio => "data-url",
        MarkerKind::Tabs => "data-tabs-b64",
    }
}

fn placeholder(kind: MarkerKind, payload: &str, out: &mut String) {
    write!(
        out,
        r#"<div data-component="{}" {}="{}"></div>"#,
        kind.name(),
        data_attribute(kind),
        escape_html(payload)
    )
    .unwrap();
}
