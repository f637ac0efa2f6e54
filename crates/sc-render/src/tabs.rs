//! Accessible tab group markup.

use std::collections::HashSet;
use std::fmt::Write;

use sc_content::Tab;

use crate::escape_html;

/// Build a tab id from a title: lowercase, whitespace runs become `-`.
///
/// Ids already in `used` get a numeric suffix so buttons and panels stay
/// uniquely addressable.
pub(crate) fn tab_slug(title: &str, used: &mut HashSet<String>) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }

    let mut unique = slug.clone();
    let mut n = 2;
    while !used.insert(unique.clone()) {
        unique = format!("{slug}-{n}");
        n += 1;
    }
    unique
}

/// Render a tab group. The first tab is selected; the others start hidden.
///
/// # Output HTML Structure
///
/// ```html
/// <div class="tabs" id="tabs-0">
///   <div class="tabs-buttons" role="tablist">
///     <button role="tab" id="tab-0-macos" aria-controls="panel-0-macos"
///             aria-selected="true" tabindex="0">macOS</button>
///     <button role="tab" id="tab-0-linux" aria-controls="panel-0-linux"
///             aria-selected="false" tabindex="-1">Linux</button>
///   </div>
///   <div role="tabpanel" id="panel-0-macos" aria-labelledby="tab-0-macos">…</div>
///   <div role="tabpanel" id="panel-0-linux" aria-labelledby="tab-0-linux" hidden>…</div>
/// </div>
/// ```
///
/// `render_panel` renders each tab body into the output.
pub(crate) fn render_tabs(
    group_id: usize,
    tabs: &[Tab],
    out: &mut String,
    mut render_panel: impl FnMut(&str, &mut String),
) {
    let mut used = HashSet::new();
    let ids: Vec<String> = tabs
        .iter()
        .map(|tab| escape_html(&tab_slug(&tab.title, &mut used)))
        .collect();

    write!(out, r#"<div class="tabs" id="tabs-{group_id}">"#).unwrap();

    out.push_str(r#"<div class="tabs-buttons" role="tablist">"#);
    for (idx, (tab, id)) in tabs.iter().zip(&ids).enumerate() {
        let selected = idx == 0;
        write!(
            out,
            r#"<button role="tab" id="tab-{group_id}-{id}" aria-controls="panel-{group_id}-{id}" aria-selected="{selected}" tabindex="{}">{}</button>"#,
            if selected { "0" } else { "-1" },
            escape_html(&tab.title)
        )
        .unwrap();
    }
    out.push_str("</div>");

    for (idx, (tab, id)) in tabs.iter().zip(&ids).enumerate() {
        let hidden = if idx == 0 { "" } else { " hidden" };
        write!(
            out,
            r#"<div role="tabpanel" id="panel-{group_id}-{id}" aria-labelledby="tab-{group_id}-{id}"{hidden}>"#
        )
        .unwrap();
        render_panel(&tab.content, out);
        out.push_str("</div>");
    }

    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slug() {
        let mut used = HashSet::new();
        assert_eq!(tab_slug("Show  Notes", &mut used), "show-notes");
        assert_eq!(tab_slug("Ünïcode Title", &mut used), "ünïcode-title");
    }

    #[test]
    fn test_slug_deduplicates() {
        let mut used = HashSet::new();
        assert_eq!(tab_slug("Notes", &mut used), "notes");
        assert_eq!(tab_slug("notes", &mut used), "notes-2");
        assert_eq!(tab_slug("NOTES", &mut used), "notes-3");
    }

    #[test]
    fn test_render_tabs() {
        let tabs = vec![Tab::new("macOS", "<p>brew</p>"), Tab::new("Linux", "<p>apt</p>")];
        let mut out = String::new();
        render_tabs(3, &tabs, &mut out, |content, out| out.push_str(content));

        assert_eq!(
            out,
            concat!(
                r#"<div class="tabs" id="tabs-3"><div class="tabs-buttons" role="tablist">"#,
                r#"<button role="tab" id="tab-3-macos" aria-controls="panel-3-macos" aria-selected="true" tabindex="0">macOS</button>"#,
                r#"<button role="tab" id="tab-3-linux" aria-controls="panel-3-linux" aria-selected="false" tabindex="-1">Linux</button>"#,
                "</div>",
                r#"<div role="tabpanel" id="panel-3-macos" aria-labelledby="tab-3-macos"><p>brew</p></div>"#,
                r#"<div role="tabpanel" id="panel-3-linux" aria-labelledby="tab-3-linux" hidden><p>apt</p></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_render_tabs_escapes_title() {
        let tabs = vec![Tab::new(r#"Say "hi" <now>"#, "")];
        let mut out = String::new();
        render_tabs(0, &tabs, &mut out, |content, out| out.push_str(content));

        assert!(out.contains(">Say &quot;hi&quot; &lt;now&gt;</button>"));
        assert!(out.contains(r#"id="tab-0-say-&quot;hi&quot;-&lt;now&gt;""#));
    }
}
