//! Shortcode inventory.
//!
//! Counts the legacy shortcodes present in raw content so migrations can see
//! which ones still need a rewrite rule.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Opening shortcodes: `[name]` or `[name attr="…"]`. Closing tags start with
/// `/` and are not counted.
static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([a-zA-Z_][a-zA-Z0-9_]*)[^\]]*\]").unwrap());

/// Maximum number of distinct examples kept per shortcode.
const MAX_EXAMPLES: usize = 3;

/// Usage of a single shortcode name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShortcodeUsage {
    /// Shortcode name, e.g. `podcast_subscribe`.
    pub name: String,
    /// Number of occurrences.
    pub count: usize,
    /// Up to three distinct occurrences, in order of first appearance.
    pub examples: Vec<String>,
}

/// Shortcode counts across one or more documents.
///
/// ```
/// use sc_content::ShortcodeInventory;
///
/// let inventory = ShortcodeInventory::scan(r#"[audio src="a.mp3"] [audio src="b.mp3"] [/audio]"#);
/// let usages = inventory.usages();
/// assert_eq!(usages.len(), 1);
/// assert_eq!(usages[0].name, "audio");
/// assert_eq!(usages[0].count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShortcodeInventory {
    by_name: BTreeMap<String, ShortcodeUsage>,
}

impl ShortcodeInventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a single document.
    #[must_use]
    pub fn scan(text: &str) -> Self {
        let mut inventory = Self::new();
        inventory.add_text(text);
        inventory
    }

    /// Count the shortcodes in `text`.
    pub fn add_text(&mut self, text: &str) {
        for caps in SHORTCODE_RE.captures_iter(text) {
            self.record(&caps[1], &caps[0], 1);
        }
    }

    /// Fold another inventory into this one.
    pub fn merge(&mut self, other: &Self) {
        for usage in other.by_name.values() {
            let entry = self.entry(&usage.name);
            entry.count += usage.count;
            for example in &usage.examples {
                push_example(&mut entry.examples, example);
            }
        }
    }

    /// Usages sorted by count (descending), then by name.
    #[must_use]
    pub fn usages(&self) -> Vec<&ShortcodeUsage> {
        let mut usages: Vec<_> = self.by_name.values().collect();
        usages.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        usages
    }

    /// Total number of shortcode occurrences.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_name.values().map(|u| u.count).sum()
    }

    /// Whether no shortcode was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    fn record(&mut self, name: &str, example: &str, count: usize) {
        let entry = self.entry(name);
        entry.count += count;
        push_example(&mut entry.examples, example);
    }

    fn entry(&mut self, name: &str) -> &mut ShortcodeUsage {
        self.by_name
            .entry(name.to_owned())
            .or_insert_with(|| ShortcodeUsage {
                name: name.to_owned(),
                count: 0,
                examples: Vec::new(),
            })
    }
}

fn push_example(examples: &mut Vec<String>, example: &str) {
    if examples.len() < MAX_EXAMPLES && !examples.iter().any(|e| e == example) {
        examples.push(example.to_owned());
    }
}
