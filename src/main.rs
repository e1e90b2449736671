//! Headless demo driving the targeting plugin for a fixed number of frames.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use log::info;
use rail_snap::{
    init_logging, CrosshairState, DemoScenePlugin, DemoStats, Enemy, EnemyRegistry, Sighting,
    SnapPlugin, SnapSettings,
};

/// Aim-assist snapping demo for an on-rails shooter
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 180)]
    frames: u32,
    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// JSON file overriding the default snap settings
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match &args.settings {
        Some(path) => SnapSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => SnapSettings::default(),
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            args.frame_ms,
        )))
        .insert_resource(settings)
        .add_plugins((SnapPlugin, DemoScenePlugin));
    app.finish();
    app.cleanup();

    info!("simulating {} frames of {} ms", args.frames, args.frame_ms);
    for _ in 0..args.frames {
        app.update();
    }

    let world = app.world_mut();
    let registered = world.resource::<EnemyRegistry>().len();
    let seen = world
        .query_filtered::<&Sighting, With<Enemy>>()
        .iter(world)
        .filter(|sighting| sighting.is_seen())
        .count();
    let stats = *world.resource::<DemoStats>();
    let crosshair = world.resource::<CrosshairState>();
    info!("{registered} enemies registered, {seen} seen");
    info!(
        "{} acquisitions, {} losses, {} snaps",
        stats.acquired, stats.lost, stats.snaps
    );
    match crosshair.snap_target() {
        Some(enemy) => info!("crosshair snapped to enemy {enemy}"),
        None => info!("crosshair unsnapped"),
    }
    Ok(())
}
