//! Plain-text presentation of simulation frames.

use std::fmt::Write as _;

use pellet_chase_core::{CellCoord, CellKind, FrameSnapshot, GhostId, PlayState};

const WALL_GLYPH: char = '#';
const PELLET_GLYPH: char = '.';
const EMPTY_GLYPH: char = ' ';
const PLAYER_GLYPH: char = 'C';

/// Draws the maze with actors on top, followed by the score lines.
///
/// Ghosts are drawn as their identifier digit and cover the player when they
/// share a cell.
pub(crate) fn frame(snapshot: &FrameSnapshot) -> String {
    let maze = snapshot.maze();
    let mut text = String::with_capacity(snapshot.cells.len() + 128);

    for (row, cells) in (0u32..).zip(maze.rows()) {
        for (column, kind) in (0u32..).zip(cells) {
            let cell = CellCoord::new(column, row);
            let ghost = snapshot.ghosts.iter().find(|ghost| ghost.cell == cell);
            let glyph = match ghost {
                Some(ghost) => ghost_glyph(ghost.id),
                None if snapshot.player.cell == cell => PLAYER_GLYPH,
                None => cell_glyph(*kind),
            };
            text.push(glyph);
        }
        text.push('\n');
    }

    let status = snapshot.status;
    let _ = writeln!(text, "Score: {}", status.score);
    let _ = writeln!(text, "Pellets: {}", status.pellets_remaining);
    let _ = write!(text, "Tick: {}  State: {}", snapshot.tick, status.play_state.name());
    if let Some(banner) = end_banner(status.play_state) {
        let _ = write!(text, "\n{banner} Send '!' to restart");
    }
    text
}

/// Headline shown once the game has ended.
pub(crate) fn end_banner(play_state: PlayState) -> Option<&'static str> {
    match play_state {
        PlayState::Running => None,
        PlayState::Won => Some("YOU WON!"),
        PlayState::Lost => Some("GAME OVER!"),
    }
}

fn cell_glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Wall => WALL_GLYPH,
        CellKind::Pellet => PELLET_GLYPH,
        CellKind::Empty => EMPTY_GLYPH,
    }
}

fn ghost_glyph(id: GhostId) -> char {
    char::from_digit(id.get() % 10, 10).unwrap_or('G')
}
