//! Coloured report output on stderr.

use console::{Style, Term};

/// Width of the report's label column.
const LABEL_WIDTH: usize = 28;

/// Terminal report writer.
pub(crate) struct Output {
    term: Term,
    heading: Style,
    dim: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a writer on stderr.
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            heading: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Report title followed by a rule.
    pub(crate) fn heading(&self, title: &str) {
        self.line(&self.heading.apply_to(title).to_string());
        self.line(&"=".repeat(60));
    }

    /// Section title, preceded by a blank line.
    pub(crate) fn section(&self, title: &str) {
        self.line("");
        self.line(title);
    }

    /// Indented `label value` row with aligned values.
    pub(crate) fn row(&self, label: &str, value: impl std::fmt::Display) {
        self.line(&format!("  {label:<width$} {value}", width = LABEL_WIDTH));
    }

    /// Dimmed detail line below a row.
    pub(crate) fn detail(&self, text: &str) {
        self.line(&format!("      {}", self.dim.apply_to(text)));
    }

    /// Plain message.
    pub(crate) fn info(&self, msg: &str) {
        self.line(msg);
    }

    /// Warning (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.yellow.apply_to(msg).to_string());
    }

    /// Error (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.red.apply_to(msg).to_string());
    }
}
