//! Tab group extraction.
//!
//! Runs after every rewrite rule. Each `{{tabs-start}} … {{/tabs}}` span is
//! collapsed into a single `{{tabs:PAYLOAD}}` marker:
//!
//! ```text
//! {{tabs-start}}
//! {{tab:macOS}} Install with Homebrew. {{/tab}}
//! {{tab:Linux}} Install with apt. {{/tab}}
//! {{/tabs}}
//! ```
//!
//! Spans are matched lazily and never overlap, so several independent groups
//! can live in one document. A span without a single complete tab is left
//! exactly as written.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marker::MarkerKind;
use crate::node::Tab;
use crate::payload::encode_tabs;

static TABS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{tabs-start\}\}(.*?)\{\{/tabs\}\}").unwrap());
static TAB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{tab:([^}]+)\}\}(.*?)\{\{/tab\}\}").unwrap());

/// Outcome of tab extraction over one document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabsReport {
    /// Groups replaced by a tabs marker.
    pub extracted: usize,
    /// Groups left as literal text (no complete tab inside).
    pub left_literal: usize,
}

/// Replace every tab group span with a tabs marker.
pub(crate) fn extract_tabs(text: &str) -> (Cow<'_, str>, TabsReport) {
    let mut report = TabsReport::default();

    let output = TABS_RE.replace_all(text, |caps: &Captures<'_>| {
        let tabs = parse_tabs(&caps[1]);
        if tabs.is_empty() {
            tracing::warn!("Tab group has no complete tab, leaving as text");
            report.left_literal += 1;
            return caps[0].to_owned();
        }

        match encode_tabs(&tabs) {
            Ok(payload) => {
                report.extracted += 1;
                MarkerKind::Tabs.marker(&payload)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode tab group, leaving as text");
                report.left_literal += 1;
                caps[0].to_owned()
            }
        }
    });

    (output, report)
}

/// Collect complete tabs from the inside of a group, in document order.
fn parse_tabs(inner: &str) -> Vec<Tab> {
    TAB_RE
        .captures_iter(inner)
        .map(|caps| Tab::new(&caps[1], caps[2].trim()))
        .collect()
}
