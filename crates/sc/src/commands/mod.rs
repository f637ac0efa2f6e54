//! CLI command implementations.

pub(crate) mod nodes;
pub(crate) mod render;
pub(crate) mod scan;

pub(crate) use nodes::NodesArgs;
pub(crate) use render::RenderArgs;
pub(crate) use scan::ScanArgs;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use sc_config::{CliSettings, Config};
use sc_content::{Normalizer, Transformer};
use sc_render::{DEFAULT_PODCAST_URL, DEFAULT_YOUTUBE_EMBED_URL, RenderOptions};

use crate::error::CliError;

/// Configuration arguments shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover sc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show id for `[podcast_subscribe]` without an id (overrides config).
    #[arg(long, env = "SPOTIFY_SHOW_ID")]
    default_show_id: Option<String>,
}

impl ConfigArgs {
    /// Load configuration, applying these arguments and `extra` settings.
    pub(crate) fn load(&self, extra: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            default_show_id: self.default_show_id.clone(),
            ..extra
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Build a transformer from the transform section.
pub(crate) fn transformer_from_config(config: &Config) -> Transformer {
    let mut builder = Normalizer::builder();
    if let Some(show_id) = &config.transform.default_show_id {
        builder = builder.default_show_id(show_id.as_str());
    }
    if let Some(url) = &config.transform.buzzsprout_url {
        builder = builder.buzzsprout_url(url.as_str());
    }
    for rule in &config.transform.disabled_rules {
        builder = builder.disable(rule.as_str());
    }
    Transformer::new(builder.build())
}

/// Build renderer options from the render section.
pub(crate) fn render_options_from_config(config: &Config) -> RenderOptions {
    RenderOptions {
        wrapper_class: config.render.wrapper_class.clone(),
        podcast_url: config
            .render
            .podcast_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PODCAST_URL.to_owned()),
        youtube_embed_url: config
            .render
            .youtube_embed_url
            .clone()
            .unwrap_or_else(|| DEFAULT_YOUTUBE_EMBED_URL.to_owned()),
    }
}

/// Read content from a file, or from stdin when the path is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Write content to a file, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sc_content::ContentNode;

    use super::*;

    #[test]
    fn test_transformer_from_config() {
        let mut config = Config::default();
        config.transform.default_show_id = Some("show".to_owned());
        config.transform.disabled_rules = vec!["youtube-url".to_owned()];

        let transformer = transformer_from_config(&config);
        let nodes = transformer.transform("[podcast_subscribe]https://youtu.be/a");
        assert_eq!(
            nodes,
            vec![
                ContentNode::PodcastSubscribe {
                    show_id: "show".to_owned(),
                },
                ContentNode::html("https://youtu.be/a"),
            ]
        );
    }

    #[test]
    fn test_transformer_buzzsprout_url() {
        let mut config = Config::default();
        let transformer = transformer_from_config(&config);
        assert_eq!(
            transformer.transform("[buzzsprout episode='12']"),
            vec![ContentNode::AudioPlayer {
                audio_url: "https://www.buzzsprout.com/2036436/12.mp3".to_owned(),
            }]
        );

        config.transform.buzzsprout_url = Some("https://www.buzzsprout.com/99/".to_owned());
        let transformer = transformer_from_config(&config);
        assert_eq!(
            transformer.transform("<p>[buzzsprout episode='12']</p>"),
            vec![ContentNode::AudioPlayer {
                audio_url: "https://www.buzzsprout.com/99/12.mp3".to_owned(),
            }]
        );
    }

    #[test]
    fn test_render_options_defaults() {
        let options = render_options_from_config(&Config::default());
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.html");
        std::fs::write(&path, "<p>post</p>").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "<p>post</p>");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/post.html"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/post.html"));
    }

    #[test]
    fn test_write_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        write_output(Some(&path), "<p>x</p>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>x</p>");
    }
}
