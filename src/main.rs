#![allow(non_snake_case)]

mod app;
mod bridge;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sanctuary_core::{PageResult, SiteContent};

/// Content shipped with the binary.
const DEFAULT_CONTENT: &str = include_str!("../assets/content.json");

/// Global site content, set once at startup
static CONTENT: OnceLock<SiteContent> = OnceLock::new();

/// Get the site content (loaded at startup, embedded default otherwise)
pub fn get_content() -> SiteContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Sanctuary - devotional music page
#[derive(Parser, Debug)]
#[command(name = "sanctuary")]
#[command(about = "Sanctuary - releases and devotions")]
struct Args {
    /// Content file (JSON). Defaults to <config dir>/sanctuary/content.json
    /// when present, otherwise the built-in content.
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Default location for a user-supplied content file
fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sanctuary").join("content.json"))
}

fn load_content(explicit: Option<&Path>) -> PageResult<SiteContent> {
    if let Some(path) = explicit {
        return SiteContent::load(path);
    }

    if let Some(path) = default_content_path().filter(|p| p.exists()) {
        tracing::info!("Using content from {:?}", path);
        return SiteContent::load(path);
    }

    let content = SiteContent::from_json(DEFAULT_CONTENT)?;
    content.validate()?;
    Ok(content)
}

fn main() {
    let args = Args::parse();
    sanctuary_core::logging::init_logging(args.verbose);

    let content = match load_content(args.content.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to load content: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting '{}' with {} releases, {} devotions",
        content.title,
        content.releases.len(),
        content.devotions.len()
    );

    let title = content.title.clone();
    let _ = CONTENT.set(content);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = SiteContent::from_json(DEFAULT_CONTENT).unwrap();
        content.validate().unwrap();
        assert!(!content.releases.is_empty());
        assert!(!content.devotions.is_empty());
        assert!(content.releases.iter().any(|r| r.devotion_id.is_some()));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let err = load_content(Some(Path::new("/nonexistent/sanctuary.json"))).unwrap_err();
        assert!(matches!(err, sanctuary_core::PageError::Io(_)));
    }

    #[test]
    fn args_parse_verbosity() {
        let args = Args::parse_from(["sanctuary", "-vv", "--width", "800"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.width, 800.0);
        assert!(args.content.is_none());
    }
}
