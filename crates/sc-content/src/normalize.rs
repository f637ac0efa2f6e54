//! Normalization pipeline: ordered rewrite rules followed by tab extraction.

use std::collections::HashSet;

use crate::node::ContentNode;
use crate::rules::{DEFAULT_BUZZSPROUT_URL, RewriteRule};
use crate::segment::segment;
use crate::tabs::{TabsReport, extract_tabs};

/// Ordered list of rewrite rules.
///
/// The built-in order is fixed: podcast shortcodes, YouTube shortcodes and
/// embed blocks, bare YouTube URLs, audio and Buzzsprout shortcodes, then the
/// four tab delimiters. Tab extraction always runs last, over the fully
/// rewritten text.
///
/// # Example
///
/// ```
/// use sc_content::Normalizer;
///
/// let normalizer = Normalizer::default();
/// let normalized = normalizer.normalize(r#"[podcast_subscribe id="7"]"#);
/// assert_eq!(normalized.text, "{{podcast-subscribe:7}}");
/// assert_eq!(normalized.stats.count("podcast-subscribe"), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Normalizer {
    rules: Vec<RewriteRule>,
}

impl Normalizer {
    /// Start building a normalizer with the built-in rules.
    #[must_use]
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Names of the active rules, in application order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(RewriteRule::name)
    }

    /// Rewrite legacy markup into markers and collapse tab groups.
    #[must_use]
    pub fn normalize(&self, content: &str) -> Normalized {
        let mut stats = RewriteStats::default();
        let mut text = content.to_owned();

        for rule in &self.rules {
            let (output, count) = rule.apply(&text);
            if count > 0 {
                tracing::debug!(rule = rule.name(), count, "Applied rewrite rule");
                text = output.into_owned();
            }
            stats.rules.push((rule.name(), count));
        }

        let (output, tabs) = extract_tabs(&text);
        let text = output.into_owned();
        stats.tabs = tabs;

        Normalized { text, stats }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`Normalizer`].
#[derive(Debug, Default)]
pub struct NormalizerBuilder {
    default_show_id: Option<String>,
    buzzsprout_url: Option<String>,
    disabled: HashSet<String>,
}

impl NormalizerBuilder {
    /// Rewrite `[podcast_subscribe]` shortcodes without an `id` to this show.
    ///
    /// Without a default show id such shortcodes stay as literal text.
    #[must_use]
    pub fn default_show_id(mut self, show_id: impl Into<String>) -> Self {
        let show_id = show_id.into();
        self.default_show_id = (!show_id.is_empty()).then_some(show_id);
        self
    }

    /// Episode URL prefix for `[buzzsprout]` shortcodes.
    ///
    /// Defaults to [`DEFAULT_BUZZSPROUT_URL`].
    #[must_use]
    pub fn buzzsprout_url(mut self, url: impl Into<String>) -> Self {
        self.buzzsprout_url = Some(url.into());
        self
    }

    /// Skip the rule with the given name. Unknown names are ignored.
    #[must_use]
    pub fn disable(mut self, name: impl Into<String>) -> Self {
        self.disabled.insert(name.into());
        self
    }

    /// Build the normalizer.
    #[must_use]
    pub fn build(self) -> Normalizer {
        let episode_url = self.buzzsprout_url.as_deref();
        let mut rules = vec![RewriteRule::podcast_subscribe()];
        if let Some(show_id) = &self.default_show_id {
            rules.push(RewriteRule::podcast_subscribe_default(show_id));
        }
        rules.extend([
            RewriteRule::youtube_shortcode(),
            RewriteRule::youtube_block(),
            RewriteRule::youtube_url(),
            RewriteRule::audio_shortcode(),
            RewriteRule::buzzsprout_shortcode(episode_url.unwrap_or(DEFAULT_BUZZSPROUT_URL)),
            RewriteRule::tabs_start(),
            RewriteRule::tabs_end(),
            RewriteRule::tab_start(),
            RewriteRule::tab_end(),
        ]);
        rules.retain(|rule| !self.disabled.contains(rule.name()));

        Normalizer { rules }
    }
}

/// Per-document rewrite statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    rules: Vec<(&'static str, usize)>,
    /// Tab extraction outcome.
    pub tabs: TabsReport,
}

impl RewriteStats {
    /// Replacements made by the named rule (0 if it did not run).
    #[must_use]
    pub fn count(&self, rule: &str) -> usize {
        self.rules
            .iter()
            .find(|(name, _)| *name == rule)
            .map_or(0, |(_, count)| *count)
    }

    /// Per-rule counts in application order.
    #[must_use]
    pub fn rules(&self) -> &[(&'static str, usize)] {
        &self.rules
    }

    /// Total replacements across all rules.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rules.iter().map(|(_, count)| count).sum()
    }

    /// Add another document's statistics to these.
    pub fn merge(&mut self, other: &Self) {
        for &(name, count) in &other.rules {
            match self.rules.iter_mut().find(|(n, _)| *n == name) {
                Some((_, total)) => *total += count,
                None => self.rules.push((name, count)),
            }
        }
        self.tabs.extracted += other.tabs.extracted;
        self.tabs.left_literal += other.tabs.left_literal;
    }
}

/// Content after normalization.
///
/// This is the single source both render modes start from: the static
/// renderer works on [`text`](Self::text) directly, the widget renderer on
/// [`nodes`](Self::nodes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    /// Normalized text containing only widget markers.
    pub text: String,
    /// What the rules did.
    pub stats: RewriteStats,
}

impl Normalized {
    /// Segment the normalized text into content nodes.
    #[must_use]
    pub fn nodes(&self) -> Vec<ContentNode> {
        segment(&self.text)
    }
}
