//! Named sound cues triggered by simulation events.

use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use pellet_chase_core::Event;
use tracing::{debug, warn};

/// Tone description of a single cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cue {
    /// Name used in logs.
    pub(crate) name: &'static str,
    /// Starting pitch.
    pub(crate) start_hz: u32,
    /// Final pitch; equal to `start_hz` for a flat beep.
    pub(crate) end_hz: u32,
    /// Playback length.
    pub(crate) duration: Duration,
}

impl Cue {
    const fn beep(name: &'static str, hz: u32, millis: u64) -> Self {
        Self {
            name,
            start_hz: hz,
            end_hz: hz,
            duration: Duration::from_millis(millis),
        }
    }
}

const CHOMP: Cue = Cue::beep("chomp", 400, 100);
const GAME_OVER: Cue = Cue::beep("game_over", 100, 300);
const WIN: Cue = Cue {
    name: "win",
    start_hz: 400,
    end_hz: 800,
    duration: Duration::from_millis(500),
};

/// Cue announcing the event, if it has one.
pub(crate) fn cue_for(event: &Event) -> Option<Cue> {
    match event {
        Event::PelletEaten { .. } => Some(CHOMP),
        Event::GameWon { .. } => Some(WIN),
        Event::GameLost { .. } => Some(GAME_OVER),
        _ => None,
    }
}

/// Output device capable of playing cues.
pub(crate) trait CueSink {
    /// Starts playback of the cue without waiting for it to finish.
    fn play(&mut self, cue: &Cue) -> Result<()>;
}

/// Sink that only records cues in the log.
#[derive(Debug, Default)]
pub(crate) struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, cue: &Cue) -> Result<()> {
        debug!(
            cue = cue.name,
            start_hz = cue.start_hz,
            end_hz = cue.end_hz,
            millis = cue.duration.as_millis() as u64,
            "cue"
        );
        Ok(())
    }
}

/// Sink that rings the terminal bell on every cue.
#[derive(Debug)]
pub(crate) struct BellSink<W> {
    writer: W,
}

impl<W: Write> BellSink<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> CueSink for BellSink<W> {
    fn play(&mut self, cue: &Cue) -> Result<()> {
        self.writer
            .write_all(b"\x07")
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("failed to ring bell for {} cue", cue.name))
    }
}

/// Plays the cue of every event in order. Failures are logged and skipped.
///
/// Returns the number of cues played successfully.
pub(crate) fn announce(sink: &mut dyn CueSink, events: &[Event]) -> usize {
    let mut played = 0;
    for cue in events.iter().filter_map(cue_for) {
        match sink.play(&cue) {
            Ok(()) => played += 1,
            Err(error) => warn!(cue = cue.name, "cue playback failed: {error:#}"),
        }
    }
    played
}
