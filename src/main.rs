//! Mandir Jumper entry point
//!
//! Runs the simulation headless: the autopilot plays for a fixed frame budget
//! and the session is reported as JSON on stdout.
//!
//! Usage: `mandir-jumper [settings.json]`

use std::path::PathBuf;

use mandir_jumper::sim::{GameState, TickInput, tick};
use mandir_jumper::view::RenderSnapshot;
use mandir_jumper::{RunHistory, Settings};

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize output: {e}"),
    }
}

fn main() {
    env_logger::init();
    log::info!("Mandir Jumper (headless) starting...");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    log::info!("{settings:?}");

    let mut state = GameState::new(settings.seed);
    let mut history = RunHistory::new();
    let input = TickInput {
        autopilot: settings.autopilot,
        ..Default::default()
    };

    for frame in 1..=settings.frames {
        tick(&mut state, &input);

        if let Some((run, rank)) = history.observe(&state) {
            log::info!(
                "Run {} over after {} frames: score {} (rank {:?})",
                run.run,
                run.frames,
                run.score,
                rank
            );
            if !settings.autopilot {
                // Nobody will press restart
                break;
            }
            if settings.max_runs > 0 && history.total_runs >= settings.max_runs {
                break;
            }
        }

        if settings.snapshot_every > 0 && frame % settings.snapshot_every == 0 {
            print_json(&RenderSnapshot::capture(&state));
        }
    }

    let summary = history.summary(&state);
    log::info!(
        "Session finished: {} runs, high score {}",
        summary.finished_runs,
        summary.high_score
    );
    print_json(&summary);
}
