//! Scripted player input fed to the simulation one symbol per tick.

use anyhow::{bail, Result};
use pellet_chase_core::Direction;

/// Input applied before a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Buffer a new intent.
    Intent(Direction),
    /// Leave the buffered intent as it is.
    Hold,
    /// Start a new game.
    Restart,
}

/// Cyclic sequence of per-tick inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct IntentScript {
    steps: Vec<Step>,
}

impl IntentScript {
    /// Parses `U`, `D`, `L` and `R` as intents, `.` as hold and `!` as
    /// restart. Case is ignored and whitespace skipped.
    pub(crate) fn parse(source: &str) -> Result<Self> {
        let mut steps = Vec::with_capacity(source.len());
        for (offset, symbol) in source.chars().enumerate() {
            let step = match symbol.to_ascii_uppercase() {
                'U' => Step::Intent(Direction::Up),
                'D' => Step::Intent(Direction::Down),
                'L' => Step::Intent(Direction::Left),
                'R' => Step::Intent(Direction::Right),
                '.' => Step::Hold,
                '!' => Step::Restart,
                _ if symbol.is_whitespace() => continue,
                _ => bail!("unexpected symbol {symbol:?} at offset {offset}"),
            };
            steps.push(step);
        }
        Ok(Self { steps })
    }

    /// Input for the zero-based tick, wrapping around the script.
    pub(crate) fn step(&self, tick: u64) -> Step {
        if self.steps.is_empty() {
            return Step::Hold;
        }
        let len = self.steps.len() as u64;
        let index = usize::try_from(tick % len).unwrap_or(0);
        self.steps[index]
    }
}
