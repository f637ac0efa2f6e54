//! HTML renderers for transformed blog content.
//!
//! Both renderers implement [`ContentRenderer`] and start from the same
//! [`Normalized`] content, so the static output is always a valid
//! non-interactive degradation of the interactive one:
//!
//! - [`StaticRenderer`]: normalized HTML with inert `data-component`
//!   placeholders, for when no client runtime is available.
//! - [`WidgetRenderer`]: full widget markup per content node (subscribe
//!   button, video embed, audio player, accessible tab group).
//!
//! # Example
//!
//! ```
//! use sc_content::Transformer;
//! use sc_render::{ContentRenderer, StaticRenderer, WidgetRenderer};
//!
//! let transformer = Transformer::default();
//! let normalized = transformer.normalize("<p>Watch:</p>https://youtu.be/abc123");
//!
//! let static_html = StaticRenderer::default().render(&normalized);
//! assert!(static_html.contains(r#"data-component="youtube" data-video-id="abc123""#));
//!
//! let widget_html = WidgetRenderer::default().render(&normalized);
//! assert!(widget_html.contains("https://www.youtube.com/embed/abc123"));
//! ```

mod escape;
mod options;
mod placeholder;
mod tabs;
mod widget;

use sc_content::{Normalized, Transformer};

pub use escape::escape_html;
pub use options::{DEFAULT_PODCAST_URL, DEFAULT_YOUTUBE_EMBED_URL, RenderOptions};
pub use placeholder::StaticRenderer;
pub use widget::WidgetRenderer;

/// A presentation strategy for normalized content.
pub trait ContentRenderer {
    /// Render normalized content to HTML.
    fn render(&self, normalized: &Normalized) -> String;

    /// Normalize raw content with `transformer`, then render it.
    fn render_raw(&self, transformer: &Transformer, content: &str) -> String {
        self.render(&transformer.normalize(content))
    }
}
