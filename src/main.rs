use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;

use attractor_scene::core::config::{ConfigReport, SceneConfig, DEFAULT_LAYERS};
use attractor_scene::interaction::pointer::validate_radius;
use attractor_scene::{ScenePlugin, ScenePresentationPlugin};

/// Zero-gravity bodies pulled toward the origin, pushed around by the pointer.
#[derive(Parser, Debug)]
#[command(name = "attractor_scene", version)]
struct Cli {
    /// Extra RON config layer, applied after the default layers (repeatable).
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Start with the collider / impulse overlay visible.
    #[arg(long)]
    debug: bool,
    /// Initial pointer radius, in [1, 5].
    #[arg(long, value_name = "RADIUS")]
    pointer_radius: Option<f32>,
    /// Seed for the initial scatter.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn layers(&self) -> Vec<PathBuf> {
        DEFAULT_LAYERS
            .iter()
            .map(PathBuf::from)
            .chain(self.config.iter().cloned())
            .collect()
    }

    /// Command-line values win over every file layer.
    fn apply(&self, cfg: &mut SceneConfig, report: &mut ConfigReport) {
        if self.debug {
            cfg.debug.overlay = true;
        }
        if let Some(r) = self.pointer_radius {
            match validate_radius(r) {
                Ok(r) => cfg.pointer.radius = r,
                Err(e) => report
                    .warnings
                    .push(format!("--pointer-radius: {e}; keeping {}", cfg.pointer.radius)),
            }
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (mut cfg, used, errors) = SceneConfig::load_layered(cli.layers());
    let mut report = ConfigReport { used, errors, ..default() };
    cli.apply(&mut cfg, &mut report);
    report.warnings.extend(cfg.validate());

    let window = cfg.window.clone();
    let scene = ScenePlugin::new(cfg).context("scene construction failed")?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title,
                resolution: (window.width, window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(report)
        .add_plugins(scene)
        .add_plugins(ScenePresentationPlugin)
        .run();
    Ok(())
}
