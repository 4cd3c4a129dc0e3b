#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Pellet Chase in the terminal.

mod audio;
mod render;
mod script;

use std::{
    io,
    thread,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use pellet_chase_simulation::{Config, Simulation, DEFAULT_TICK_RATE};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    audio::{BellSink, CueSink, LogSink},
    script::{IntentScript, Step},
};

/// Command-line arguments for the Pellet Chase driver.
#[derive(Debug, Parser)]
#[command(name = "pellet-chase", version, about = "Plays Pellet Chase in the terminal")]
struct Args {
    /// Number of ticks to simulate before exiting.
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Ticks simulated per second when pacing in real time.
    #[arg(long, default_value_t = DEFAULT_TICK_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    tick_rate: u32,
    /// Seed for the ghosts' random wander source. Drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Per-tick input: U, D, L, R buffer an intent, '.' holds and '!' restarts.
    /// The script repeats once exhausted.
    #[arg(long, default_value = "")]
    intents: String,
    /// Runs ticks back to back instead of pacing them in real time.
    #[arg(long)]
    headless: bool,
    /// Prints a text frame after every tick.
    #[arg(long)]
    frames: bool,
    /// Rings the terminal bell for sound cues.
    #[arg(long)]
    bell: bool,
    /// Stops as soon as a game is won or lost.
    #[arg(long)]
    stop_on_end: bool,
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Entry point for the Pellet Chase command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;
    run(&args)
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow!(error))
        .context("failed to install log subscriber")
}

fn run(args: &Args) -> Result<()> {
    let script = IntentScript::parse(&args.intents).context("invalid --intents script")?;
    let config = match args.seed {
        Some(seed) => Config::default().with_seed(seed),
        None => Config::default(),
    };
    let mut simulation = Simulation::new(config).context("failed to load the classic maze")?;
    let mut sink: Box<dyn CueSink> = if args.bell {
        Box::new(BellSink::new(io::stderr()))
    } else {
        Box::new(LogSink)
    };

    info!(seed = simulation.rng_seed(), "{}", simulation.welcome_banner());
    if args.frames {
        println!("{}\n", render::frame(&simulation.snapshot()));
    }

    let period = Duration::from_secs(1) / args.tick_rate;
    let mut events = Vec::new();
    for tick in 0..args.ticks {
        let started = Instant::now();
        events.clear();
        match script.step(tick) {
            Step::Intent(direction) => simulation.set_intent(direction, &mut events),
            Step::Restart => simulation.restart(&mut events),
            Step::Hold => {}
        }
        simulation.tick(&mut events);
        let _ = audio::announce(sink.as_mut(), &events);

        if args.frames {
            println!("{}\n", render::frame(&simulation.snapshot()));
        }
        if args.stop_on_end && simulation.play_state().is_terminal() {
            break;
        }
        if !args.headless {
            if let Some(remaining) = period.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
    }

    let status = simulation.status();
    info!(
        score = status.score,
        pellets_remaining = status.pellets_remaining,
        "session finished"
    );
    println!(
        "{} score={} pellets_remaining={}",
        status.play_state.name(),
        status.score,
        status.pellets_remaining
    );
    if let Some(banner) = render::end_banner(status.play_state) {
        println!("{banner}");
    }
    Ok(())
}
