//! Cricket Analysis CLI
//!
//! Drives the core engine from the command line: simulate a clip end to
//! end, or compose commentary for an event list read from a file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ca_core::{
    classify_shot, compose_commentary, EventSource, MatchEvent, Pose, PoseSource,
    SimulatedEventSource, SimulatedPoseSource,
};

#[derive(Parser)]
#[command(name = "ca_cli")]
#[command(about = "Classify cricket shots and compose commentary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a clip: generate poses and events, classify, narrate
    Simulate {
        /// Seed for all simulated randomness
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Number of frames to analyze
        #[arg(long, default_value = "150")]
        frames: u32,

        /// Frame width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Frame height in pixels
        #[arg(long, default_value = "720")]
        height: f32,

        /// Clip length in seconds
        #[arg(long, default_value = "300")]
        match_length: f32,
    },

    /// Compose commentary for a JSON array of events
    Commentary {
        /// Input JSON file (array of events)
        #[arg(long)]
        events: PathBuf,

        /// Seed for template selection
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { seed, frames, width, height, match_length } => {
            simulate(seed, frames, width, height, match_length)
        }
        Commands::Commentary { events, seed } => commentary(&events, seed),
    }
}

fn simulate(seed: u64, frames: u32, width: f32, height: f32, match_length: f32) -> Result<()> {
    let mut pose_source =
        SimulatedPoseSource::new(width, height, ChaCha8Rng::seed_from_u64(seed));
    let mut event_source =
        SimulatedEventSource::new(match_length, ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)));

    let mut events = event_source.detect_events();
    let mut history: Vec<Pose> = Vec::new();
    let mut shots = 0usize;

    for frame in 0..frames {
        let Some(pose) = pose_source.next_pose(frame) else {
            continue;
        };
        if let Some(shot) = classify_shot(&pose, &history) {
            let timestamp = frame as f32 / 30.0;
            println!("frame {:>5}  t={:>7.2}s  {}", frame, timestamp, shot);
            events.push(MatchEvent::shot_played(shot, 0.75, timestamp, frame));
            shots += 1;
        }
        history.push(pose);
    }

    println!("\n{} frames analyzed, {} shots classified, {} events total", frames, shots, events.len());

    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(2));
    println!("\n{}", compose_commentary(&events, &mut rng));
    Ok(())
}

fn commentary(path: &PathBuf, seed: u64) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read events file {}", path.display()))?;
    let events: Vec<MatchEvent> =
        serde_json::from_str(&raw).context("events file is not a valid event array")?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("{}", compose_commentary(&events, &mut rng));
    Ok(())
}
