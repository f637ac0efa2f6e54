//! `nodes` command implementation.
//!
//! Widget nodes are printed as typed JSON. The `content` of each tab is left
//! as normalized text and may still contain internal `{{..}}` markers, which
//! the widget renderer segments again when it draws the panel.

use std::path::PathBuf;

use clap::Args;
use sc_config::CliSettings;

use super::{ConfigArgs, read_input, transformer_from_config, write_output};
use crate::error::CliError;

/// Arguments for the nodes command.
#[derive(Args)]
pub(crate) struct NodesArgs {
    /// Input file (default: stdin).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl NodesArgs {
    /// Execute the nodes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, input/output fails or
    /// the nodes cannot be serialized.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load(CliSettings::default())?;
        let transformer = transformer_from_config(&config);

        let content = read_input(self.input.as_deref())?;
        let nodes = transformer.transform(&content);
        tracing::info!(nodes = nodes.len(), "Transformed content");

        let json = serde_json::to_string_pretty(&nodes)?;
        write_output(self.output.as_deref(), &json)
    }
}
