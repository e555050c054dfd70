//! Eggfall entry point
//!
//! Native builds run the simulation headless at 60 Hz and print a JSON run
//! summary. A windowed front end plugs in through `RenderSink`.

use std::path::PathBuf;

use serde::Serialize;

use eggfall::platform::InputState;
use eggfall::renderer::{InstanceSink, LogSink};
use eggfall::sim::GameEvent;
use eggfall::{Game, Settings};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    seconds: f64,
    frames: u64,
    rounds: u32,
    deaths: u32,
    dodged: u32,
    best_score: u32,
    final_score: u32,
    peak_instances: usize,
}

struct Args {
    seconds: f64,
    settings_path: PathBuf,
    idle: bool,
}

/// Run length in seconds; must be finite and non-negative
fn parse_seconds(arg: &str) -> Option<f64> {
    arg.parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
}

fn parse_args() -> Args {
    let mut args = Args {
        seconds: 60.0,
        settings_path: PathBuf::from(Settings::FILE_NAME),
        idle: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seconds" => match it.next().as_deref().and_then(parse_seconds) {
                Some(seconds) => args.seconds = seconds,
                None => log::warn!(
                    "--seconds expects a finite non-negative number, keeping {}",
                    args.seconds
                ),
            },
            "--settings" => match it.next() {
                Some(path) => args.settings_path = PathBuf::from(path),
                None => log::warn!("--settings expects a path"),
            },
            "--idle" => args.idle = true,
            other => log::warn!("Ignoring unknown argument {}", other),
        }
    }
    args
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let args = parse_args();
    let settings = Settings::load(&args.settings_path);
    log::info!("Eggfall (headless) running {}s", args.seconds);

    let mut game = Game::new(&settings);
    let mut input = InputState::new();
    input.idle_mode = args.idle || settings.idle_mode;
    let mut log_sink = LogSink::default();
    let mut instance_sink = InstanceSink::default();

    let mut summary = RunSummary {
        seed: settings.effective_seed(),
        seconds: args.seconds,
        frames: 0,
        rounds: 0,
        deaths: 0,
        dodged: 0,
        best_score: 0,
        final_score: 0,
        peak_instances: 0,
    };

    let frames = (args.seconds * 1000.0 / FRAME_MS).ceil() as u64;
    for n in 0..=frames {
        let snapshot = input.snapshot();
        let timestamp = n as f64 * FRAME_MS;
        if settings.log_frames {
            game.frame_into(timestamp, &snapshot, &mut log_sink);
        } else {
            game.frame_into(timestamp, &snapshot, &mut instance_sink);
        }
        for event in game.events() {
            match event {
                GameEvent::ActorHit { .. } => summary.deaths += 1,
                GameEvent::ObjectDodged { .. } => summary.dodged += 1,
                _ => {}
            }
        }
    }

    let state = game.state();
    summary.frames = frames + 1;
    summary.rounds = state.round + 1;
    summary.best_score = state.best_score;
    summary.final_score = state.score;
    summary.peak_instances = instance_sink.peak();

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds are driven by the host page through `Game::frame`
}
