//! sc CLI - Legacy shortcode transformer.
//!
//! Provides commands for:
//! - `render`: Render post content to HTML (interactive or static)
//! - `nodes`: Print the content node sequence as JSON
//! - `scan`: Report legacy shortcodes and rewrite statistics

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NodesArgs, RenderArgs, ScanArgs};
use output::Output;

/// sc - Legacy shortcode transformer.
#[derive(Parser)]
#[command(name = "sc", version, about)]
struct Cli {
    /// Enable verbose output (rewrite and decode diagnostics).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render post content to HTML.
    Render(RenderArgs),
    /// Print the content node sequence as JSON.
    ///
    /// Tab `content` is normalized text, so it can still hold internal
    /// `{{youtube:..}}`, `{{podcast-subscribe:..}}` or `{{audio:..}}` markers.
    Nodes(NodesArgs),
    /// Report legacy shortcodes found in post content.
    Scan(ScanArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose shows rewrite diagnostics, otherwise RUST_LOG decides
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Nodes(args) => args.execute(),
        Commands::Scan(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
