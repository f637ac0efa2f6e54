//! `render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use sc_config::{CliSettings, RenderMode};
use sc_render::{ContentRenderer, StaticRenderer, WidgetRenderer};

use super::{
    ConfigArgs, read_input, render_options_from_config, transformer_from_config, write_output,
};
use crate::error::CliError;

/// Rendering mode selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum ModeArg {
    /// Full widget markup.
    Interactive,
    /// Inert `data-component` placeholders.
    Static,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Interactive => Self::Interactive,
            ModeArg::Static => Self::Static,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file (default: stdin).
    input: Option<PathBuf>,

    /// Rendering mode (overrides config).
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Class of the wrapping element (overrides config).
    #[arg(long)]
    wrapper_class: Option<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or input/output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load(CliSettings {
            mode: self.mode.map(RenderMode::from),
            wrapper_class: self.wrapper_class,
            ..CliSettings::default()
        })?;

        let transformer = transformer_from_config(&config);
        let options = render_options_from_config(&config);
        let renderer: Box<dyn ContentRenderer> = match config.render.mode {
            RenderMode::Interactive => Box::new(WidgetRenderer::new(options)),
            RenderMode::Static => Box::new(StaticRenderer::new(options)),
        };

        let content = read_input(self.input.as_deref())?;
        let normalized = transformer.normalize(&content);
        tracing::info!(
            mode = ?config.render.mode,
            rewrites = normalized.stats.total(),
            tab_groups = normalized.stats.tabs.extracted,
            "Rendering content"
        );

        write_output(self.output.as_deref(), &renderer.render(&normalized))
    }
}
