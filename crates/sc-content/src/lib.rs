//! Legacy shortcode transformer.
//!
//! Blog posts imported from WordPress still carry shortcodes and bare video
//! URLs. This crate turns such content into an ordered sequence of typed
//! [`ContentNode`]s that a presentation layer can render.
//!
//! # Architecture
//!
//! Transformation runs in two phases:
//!
//! 1. **Normalization** ([`Normalizer`]): an ordered list of independent
//!    [`RewriteRule`]s rewrites legacy markup into internal `{{…}}` markers,
//!    then tab groups are collapsed into a single marker each.
//!
//! 2. **Segmentation** ([`segment`]): one scan over the normalized text
//!    yields widget nodes for markers and verbatim HTML nodes for everything
//!    in between.
//!
//! Nothing here can fail. Malformed markup stays in the output as HTML text.
//!
//! # Example
//!
//! ```
//! use sc_content::{ContentNode, Tab, transform};
//!
//! let content = r#"<p>Intro</p>
//! [intense_tabs]
//! [intense_tab title="macOS"]Install with Homebrew.[/intense_tab]
//! [intense_tab title="Linux"]Install with apt.[/intense_tab]
//! [/intense_tabs]"#;
//!
//! let nodes = transform(content);
//! assert_eq!(nodes[0], ContentNode::html("<p>Intro</p>\n"));
//! assert_eq!(
//!     nodes[1],
//!     ContentNode::Tabs {
//!         tabs: vec![
//!             Tab::new("macOS", "Install with Homebrew."),
//!             Tab::new("Linux", "Install with apt."),
//!         ]
//!     }
//! );
//! ```

mod inventory;
mod marker;
mod node;
mod normalize;
mod payload;
pub mod rules;
mod segment;
mod tabs;
mod transformer;

pub use inventory::{ShortcodeInventory, ShortcodeUsage};
pub use marker::{MarkerKind, Span, scan_markers};
pub use node::{ContentNode, Tab};
pub use normalize::{Normalized, Normalizer, NormalizerBuilder, RewriteStats};
pub use payload::{PayloadError, decode_tabs, encode_tabs};
pub use rules::{DEFAULT_BUZZSPROUT_URL, RULE_NAMES, RewriteRule, extract_youtube_id};
pub use segment::segment;
pub use tabs::TabsReport;
pub use transformer::{Transformer, transform};
