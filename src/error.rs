//! Structured error types.
//!
//! Rule rejections are ordinary values: callers check a move with
//! [`validate_move`](crate::rules::validate_move) and surface the reason.
//! Contract violations (applying an unvalidated move, searching a position
//! with no legal move) are not represented here; they panic.

use crate::board::Position;
use crate::core::{Color, Phase};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("the game is already finished")]
    GameOver,

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Color, actual: Color },

    #[error("move is not allowed in the {phase} phase")]
    WrongPhase { phase: Phase },

    #[error("no pieces left to place")]
    NoPiecesRemaining,

    #[error("position {0} is occupied")]
    TargetOccupied(Position),

    #[error("position {0} does not hold one of the mover's pieces")]
    SourceNotOwned(Position),

    #[error("position {to} is not adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },

    #[error("a mill was formed: an opposing piece must be captured first")]
    CaptureRequired,

    #[error("no capture is pending")]
    NoCapturePending,

    #[error("position {0} does not hold an opposing piece")]
    NotOpponentPiece(Position),

    #[error("piece at {0} is protected by a mill")]
    MillProtected(Position),
}

/// A raw index that does not name one of the 24 board positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("position index {0} out of range (0-23)")]
    OutOfRange(usize),
}

/// Errors raised while assembling a position with `GameBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{color} would have {total} pieces (at most 9)")]
    TooManyPieces { color: Color, total: u8 },

    #[error("position {0} assigned more than once")]
    DuplicatePosition(Position),

    #[error("capture pending but {0} has no piece on the board")]
    NothingToCapture(Color),

    #[error("{0} is to move during placement with no pieces in hand")]
    EmptyHand(Color),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Errors raised while encoding or restoring a state snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(bincode::Error),

    #[error("snapshot violates state invariants: {0}")]
    Invariant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_display() {
        let err = RuleViolation::WrongTurn {
            expected: Color::White,
            actual: Color::Black,
        };
        assert_eq!(err.to_string(), "it is White's turn, not Black's");

        let err = RuleViolation::NotAdjacent {
            from: Position::new(0),
            to: Position::new(2),
        };
        assert_eq!(err.to_string(), "position 2 is not adjacent to 0");
    }

    #[test]
    fn test_phase_in_message() {
        let err = RuleViolation::WrongPhase {
            phase: Phase::Placement,
        };
        assert_eq!(err.to_string(), "move is not allowed in the placement phase");
    }

    #[test]
    fn test_position_error_display() {
        assert_eq!(
            PositionError::OutOfRange(24).to_string(),
            "position index 24 out of range (0-23)"
        );
    }

    #[test]
    fn test_setup_error_from_position_error() {
        let err: SetupError = PositionError::OutOfRange(30).into();
        assert_eq!(err.to_string(), "position index 30 out of range (0-23)");
    }

    #[test]
    fn test_snapshot_invariant_display() {
        let err = SnapshotError::Invariant("phase mismatch".to_string());
        assert_eq!(
            err.to_string(),
            "snapshot violates state invariants: phase mismatch"
        );
    }
}
