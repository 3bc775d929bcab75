#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use missionboard_core::{render_html, AnimationMode, MissionStore, RedbStore};
use tracing_subscriber::EnvFilter;

use crate::context::{AppConfig, DB_FILE};

/// Mission Board - space missions page with a local mission log
#[derive(Parser, Debug)]
#[command(name = "missionboard-desktop")]
#[command(about = "Mission Board - space missions page with a local mission log")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: missionboard-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Recompute parallax only on scroll, without the frame loop or smoothing
    #[arg(long)]
    scroll_only: bool,

    /// Write the stored missions as HTML to this file and exit
    #[arg(long, value_name = "PATH")]
    export_html: Option<PathBuf>,
}

impl Args {
    fn data_dir(&self) -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        if let Some(dir) = &self.data_dir {
            dir.clone()
        } else if let Some(name) = &self.name {
            base.join(format!("missionboard-{}", name))
        } else {
            base.join("missionboard")
        }
    }
}

fn export_html(data_dir: &Path, out: &Path) -> anyhow::Result<()> {
    let backend = RedbStore::open(data_dir.join(DB_FILE)).context("opening mission database")?;
    let store = MissionStore::load(backend).context("loading missions")?;
    std::fs::write(out, render_html(&store.view()))
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!("Exported {} missions to {:?}", store.len(), out);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let data_dir = args.data_dir();

    if let Some(out) = &args.export_html {
        return export_html(&data_dir, out);
    }

    let mode = if args.scroll_only {
        AnimationMode::ScrollOnly
    } else {
        AnimationMode::FrameLoop
    };

    let title = match &args.name {
        Some(name) => format!("Mission Board - {}", name),
        None => "Mission Board".to_string(),
    };

    tracing::info!("Starting with data dir: {:?} ({:?})", data_dir, mode);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(AppConfig { data_dir, mode })
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let args = Args::parse_from(["missionboard-desktop", "--data-dir", "/tmp/mb", "--name", "x"]);
        assert_eq!(args.data_dir(), PathBuf::from("/tmp/mb"));
    }

    #[test]
    fn instance_name_picks_suffixed_dir() {
        let args = Args::parse_from(["missionboard-desktop", "--name", "demo"]);
        assert!(args.data_dir().ends_with("missionboard-demo"));
    }

    #[test]
    fn export_writes_default_missions() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("missions.html");
        export_html(dir.path(), &out).unwrap();
        let html = std::fs::read_to_string(&out).unwrap();
        assert_eq!(html.matches("class=\"mission-card\"").count(), 3);
    }
}
