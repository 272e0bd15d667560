//! Lane Catch entry point
//!
//! Runs a headless game with the autopilot standing in for the camera input
//! and prints the final snapshot as JSON.

use std::path::PathBuf;

use clap::Parser;

use lane_catch::sim::choose_lane;
use lane_catch::{Engine, GameEvent, GameObserver, GameOverReport, Snapshot, Tuning};

#[derive(Debug, Parser)]
#[command(name = "lane-catch", about = "Run a headless Lane Catch game")]
struct Args {
    /// RNG seed for the run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum frames to simulate (60 per second of play)
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u64,

    /// JSON tuning file overriding the default balance
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Hold the centre lane instead of using the autopilot
    #[arg(long)]
    manual: bool,
}

/// Logs events as they happen
struct LogObserver;

impl GameObserver for LogObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::LevelUp { level, .. } => log::info!("⬆️ Level {}", level),
            GameEvent::LifeLost { lives } => log::info!("💔 Lives left: {}", lives),
            GameEvent::MultiplierStarted { factor, frames } => {
                log::info!("x{} multiplier for {} frames", factor, frames)
            }
            other => log::debug!("{:?}", other),
        }
    }

    fn on_game_over(&mut self, report: &GameOverReport) {
        log::info!("💀 Final score {} at level {}", report.score, report.level);
    }

    fn on_update(&mut self, snapshot: &Snapshot) {
        if snapshot.frame > 0 && snapshot.frame % 600 == 0 {
            log::info!(
                "frame {}: score {}, lives {}, {} items",
                snapshot.frame,
                snapshot.score,
                snapshot.lives,
                snapshot.items.len()
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Lane Catch (headless) starting...");

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).unwrap_or_else(|e| {
            log::warn!("Using default tuning: {}", e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let mut engine = Engine::new(tuning, args.seed, LogObserver)?;
    engine.start();

    let mut ran = 0;
    while ran < args.frames && engine.is_active() {
        if !args.manual {
            let lane = choose_lane(engine.state(), engine.tuning());
            engine.on_lane_selected(lane);
        }
        engine.frame();
        ran += 1;
    }
    engine.stop();

    log::info!("Simulated {} frames", ran);
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}
