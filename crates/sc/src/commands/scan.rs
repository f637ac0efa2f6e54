//! `scan` command implementation.
//!
//! Reports which legacy shortcodes occur in post content, what the rewrite
//! rules did with them, and which shortcodes no rule handles.

use std::path::PathBuf;

use clap::Args;
use sc_config::CliSettings;
use sc_content::{RewriteStats, ShortcodeInventory, ShortcodeUsage, Transformer};
use serde::Serialize;

use super::{ConfigArgs, read_input, transformer_from_config, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the scan command.
#[derive(Args)]
pub(crate) struct ScanArgs {
    /// Files to scan.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Aggregated scan results.
#[derive(Debug, Default, Serialize)]
struct ScanReport {
    files: usize,
    found: Vec<ShortcodeUsage>,
    rewrites: Vec<RuleCount>,
    tab_groups: usize,
    tab_groups_left_literal: usize,
    unhandled: Vec<ShortcodeUsage>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct RuleCount {
    rule: &'static str,
    count: usize,
}

impl ScanReport {
    fn build(
        files: usize,
        found: &ShortcodeInventory,
        stats: &RewriteStats,
        left: &ShortcodeInventory,
    ) -> Self {
        Self {
            files,
            found: found.usages().into_iter().cloned().collect(),
            rewrites: stats
                .rules()
                .iter()
                .map(|&(rule, count)| RuleCount { rule, count })
                .collect(),
            tab_groups: stats.tabs.extracted,
            tab_groups_left_literal: stats.tabs.left_literal,
            unhandled: left.usages().into_iter().cloned().collect(),
        }
    }
}

/// Scan documents with one transformer, merging the results.
fn scan_documents<'a>(
    transformer: &Transformer,
    documents: impl IntoIterator<Item = &'a str>,
) -> ScanReport {
    let mut found = ShortcodeInventory::new();
    let mut left = ShortcodeInventory::new();
    let mut stats = RewriteStats::default();
    let mut files = 0;

    for content in documents {
        found.add_text(content);
        let normalized = transformer.normalize(content);
        left.add_text(&normalized.text);
        stats.merge(&normalized.stats);
        files += 1;
    }

    ScanReport::build(files, &found, &stats, &left)
}

impl ScanArgs {
    /// Execute the scan command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or a file cannot be read.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load(CliSettings::default())?;
        let transformer = transformer_from_config(&config);

        let contents = self
            .files
            .iter()
            .map(|path| read_input(Some(path)))
            .collect::<Result<Vec<_>, _>>()?;
        let report = scan_documents(&transformer, contents.iter().map(String::as_str));

        if self.json {
            let json = serde_json::to_string_pretty(&report)?;
            return write_output(None, &json);
        }

        print_report(&report, output);
        Ok(())
    }
}

fn print_report(report: &ScanReport, output: &Output) {
    output.heading(&format!("Scanned {} file(s)", report.files));

    if report.found.is_empty() {
        output.info("No shortcodes found.");
    } else {
        output.info("Shortcodes found:");
        print_usages(&report.found, output);
    }

    output.section("Rewrites:");
    for rule in &report.rewrites {
        output.row(rule.rule, rule.count);
    }
    output.row("tab groups extracted", report.tab_groups);
    output.row("tab groups left as text", report.tab_groups_left_literal);

    if !report.unhandled.is_empty() {
        output.info("");
        output.warning("Shortcodes left after normalization:");
        print_usages(&report.unhandled, output);
    }
}

fn print_usages(usages: &[ShortcodeUsage], output: &Output) {
    for usage in usages {
        output.row(&format!("[{}]", usage.name), usage.count);
        for example in &usage.examples {
            output.detail(example);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scan_documents() {
        let transformer = Transformer::default();
        let report = scan_documents(
            &transformer,
            [
                r#"<p>a</p>[podcast_subscribe id="1"][gallery ids="1,2"]"#,
                r#"[podcast_subscribe id="2"][intense_tabs][intense_tab title="A"]x[/intense_tab][/intense_tabs]"#,
            ],
        );

        assert_eq!(report.files, 2);
        assert_eq!(report.found[0].name, "podcast_subscribe");
        assert_eq!(report.found[0].count, 2);
        assert_eq!(report.tab_groups, 1);
        assert!(report.rewrites.contains(&RuleCount {
            rule: "podcast-subscribe",
            count: 2,
        }));

        let unhandled: Vec<_> = report.unhandled.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(unhandled, vec!["gallery"]);
    }

    #[test]
    fn test_report_json_owns_usages() {
        let report = scan_documents(&Transformer::default(), [r#"<p>[gallery ids="1"]</p>"#]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["found"][0]["name"], "gallery");
        assert_eq!(json["found"][0]["examples"][0], r#"[gallery ids="1"]"#);
        assert_eq!(json["unhandled"][0]["count"], 1);
    }

    #[test]
    fn test_scan_empty() {
        let report = scan_documents(&Transformer::default(), std::iter::empty());
        assert_eq!(report.files, 0);
        assert!(report.found.is_empty());
        assert!(report.unhandled.is_empty());
    }
}
