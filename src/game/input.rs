//! Pointer routing: level toggle first, then card flips.
use super::board::{Board, FlipOutcome};
use super::level::Level;

#[derive(Clone, Debug, PartialEq)]
pub enum PointerOutcome {
    LevelToggled(Level),
    Flipped { index: usize, outcome: FlipOutcome },
    /// Dropped because a pair is being resolved.
    Locked,
    /// Nothing flippable under the pointer.
    Missed,
}

pub fn on_pointer_down(board: &mut Board, x: f64, y: f64) -> PointerOutcome {
    // The toggle stays live while locked.
    if board.layout().toggle_button.contains(x, y) {
        return PointerOutcome::LevelToggled(board.toggle_level());
    }

    if board.is_locked() {
        return PointerOutcome::Locked;
    }

    let hit = board
        .cards()
        .iter()
        .position(|card| card.contains(x, y) && card.is_selectable());
    match hit {
        Some(index) => PointerOutcome::Flipped {
            index,
            outcome: board.attempt_flip(index),
        },
        None => PointerOutcome::Missed,
    }
}
