//! Move validation, phase derivation and mill protection.

use crate::board::Position;
use crate::core::{Color, GameState, Move, Phase, FLYING_PIECES};
use crate::error::RuleViolation;

/// Derive the phase from the four piece counters.
///
/// Placement while either side has pieces in hand; then Flying if either
/// side is down to three on the board; otherwise Movement.
#[must_use]
pub fn determine_phase(
    remaining_white: u8,
    remaining_black: u8,
    on_board_white: u8,
    on_board_black: u8,
) -> Phase {
    if remaining_white > 0 || remaining_black > 0 {
        Phase::Placement
    } else if on_board_white == FLYING_PIECES || on_board_black == FLYING_PIECES {
        Phase::Flying
    } else {
        Phase::Movement
    }
}

/// Check whether `color` may jump to any empty point.
///
/// Flying belongs to the side, not the phase: only a side with exactly
/// three pieces on the board flies, even while the phase reads Flying.
#[must_use]
pub fn can_fly(state: &GameState, color: Color) -> bool {
    state.phase() == Phase::Flying && state.on_board(color) == FLYING_PIECES
}

/// Check whether the piece on `pos` may be captured.
///
/// A piece inside a mill is protected unless every piece of its color is
/// inside a mill. Empty points are never removable.
#[must_use]
pub fn can_remove(state: &GameState, pos: Position) -> bool {
    let board = state.board();
    let Some(color) = board.occupant(pos) else {
        return false;
    };
    !board.is_part_of_mill(pos, color)
        || board
            .positions_of(color)
            .all(|p| board.is_part_of_mill(p, color))
}

/// Check a move against the current state, returning the first rule it
/// breaks.
pub fn validate_move(state: &GameState, mv: Move) -> Result<(), RuleViolation> {
    if state.is_finished() {
        return Err(RuleViolation::GameOver);
    }
    let mover = mv.player();
    if mover != state.active_player() {
        return Err(RuleViolation::WrongTurn {
            expected: state.active_player(),
            actual: mover,
        });
    }
    if state.pending_capture() && !mv.is_capture() {
        return Err(RuleViolation::CaptureRequired);
    }

    let board = state.board();
    match mv {
        Move::Place { to, player } => {
            if state.phase() != Phase::Placement {
                return Err(RuleViolation::WrongPhase {
                    phase: state.phase(),
                });
            }
            if state.remaining(player) == 0 {
                return Err(RuleViolation::NoPiecesRemaining);
            }
            if !board.is_valid_placement(to) {
                return Err(RuleViolation::TargetOccupied(to));
            }
        }
        Move::Step { from, to, player } => {
            if state.phase() == Phase::Placement {
                return Err(RuleViolation::WrongPhase {
                    phase: state.phase(),
                });
            }
            if board.occupant(from) != Some(player) {
                return Err(RuleViolation::SourceNotOwned(from));
            }
            if !board.is_empty(to) {
                return Err(RuleViolation::TargetOccupied(to));
            }
            if !can_fly(state, player) && !from.is_adjacent(to) {
                return Err(RuleViolation::NotAdjacent { from, to });
            }
        }
        Move::Capture { target, player } => {
            if !state.pending_capture() {
                return Err(RuleViolation::NoCapturePending);
            }
            if board.occupant(target) != Some(player.opponent()) {
                return Err(RuleViolation::NotOpponentPiece(target));
            }
            if !can_remove(state, target) {
                return Err(RuleViolation::MillProtected(target));
            }
        }
    }
    Ok(())
}

/// Check whether a move is legal right now.
#[must_use]
pub fn is_valid_move(state: &GameState, mv: Move) -> bool {
    validate_move(state, mv).is_ok()
}
