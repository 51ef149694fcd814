//! End-of-game detection.
//!
//! There are no draws. Once placement is over, a side below three pieces
//! loses at once; otherwise the side to move loses if it cannot move.

use super::movegen::has_legal_moves;
use crate::core::{Color, GameState, Phase, MIN_PIECES};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The loser fell below the piece floor.
    TooFewPieces,
    /// The loser was to move and had no legal move.
    NoLegalMoves,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::TooFewPieces => write!(f, "too few pieces"),
            EndReason::NoLegalMoves => write!(f, "no legal moves"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub winner: Color,
    pub reason: EndReason,
}

impl GameOver {
    /// The losing side.
    #[must_use]
    pub fn loser(&self) -> Color {
        self.winner.opponent()
    }
}

/// Check if the position is decided.
///
/// Returns `None` during placement and while the game continues.
#[must_use]
pub fn check_game_over(state: &GameState) -> Option<GameOver> {
    if state.phase() == Phase::Placement {
        return None;
    }
    for color in Color::all() {
        if state.on_board(color) < MIN_PIECES {
            return Some(GameOver {
                winner: color.opponent(),
                reason: EndReason::TooFewPieces,
            });
        }
    }
    let to_move = state.active_player();
    if !has_legal_moves(state, to_move) {
        return Some(GameOver {
            winner: to_move.opponent(),
            reason: EndReason::NoLegalMoves,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameBuilder, GameId};

    #[test]
    fn test_placement_never_ends() {
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[0])
            .remaining(Color::White, 1)
            .remaining(Color::Black, 1)
            .build()
            .unwrap();

        assert!(check_game_over(&state).is_none());
        assert!(!state.is_finished());
    }

    #[test]
    fn test_piece_floor() {
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[0, 1])
            .pieces(Color::Black, &[9, 10, 11, 12])
            .remaining(Color::White, 0)
            .remaining(Color::Black, 0)
            .build()
            .unwrap();

        let over = check_game_over(&state).unwrap();
        assert_eq!(over.winner, Color::Black);
        assert_eq!(over.loser(), Color::White);
        assert_eq!(over.reason, EndReason::TooFewPieces);
        assert_eq!(state.winner(), Some(Color::Black));
    }

    #[test]
    fn test_blocked_side_to_move_loses() {
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[0, 2, 21, 23])
            .pieces(Color::Black, &[1, 9, 14, 22, 4])
            .remaining(Color::White, 0)
            .remaining(Color::Black, 0)
            .active(Color::White)
            .build()
            .unwrap();

        let over = check_game_over(&state).unwrap();
        assert_eq!(over.winner, Color::Black);
        assert_eq!(over.reason, EndReason::NoLegalMoves);
        assert!(state.is_finished());
        assert_eq!(state.winner(), Some(Color::Black));
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(EndReason::TooFewPieces.to_string(), "too few pieces");
        assert_eq!(EndReason::NoLegalMoves.to_string(), "no legal moves");
    }
}
