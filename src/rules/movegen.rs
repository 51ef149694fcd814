//! Legal move enumeration.
//!
//! Order is stable: captures and placements by ascending position, steps
//! by ascending source then ascending destination. The search relies on
//! this for reproducible tie-breaking.

use smallvec::SmallVec;

use super::validation::{can_fly, can_remove};
use crate::core::{Color, GameState, Move, Phase};

/// Move list sized for the common case; flying positions spill to the heap.
pub type MoveList = SmallVec<[Move; 32]>;

/// All legal moves for `player`.
///
/// For the side to move this is exactly the set accepted by
/// [`validate_move`](super::validate_move). For the other side it lists
/// the moves that side would have on its own turn (used for mobility).
/// A finished game has no moves.
#[must_use]
pub fn generate_legal_moves(state: &GameState, player: Color) -> MoveList {
    let mut moves = MoveList::new();
    if state.is_finished() {
        return moves;
    }
    let board = state.board();

    if state.pending_capture() && state.active_player() == player {
        moves.extend(
            board
                .positions_of(player.opponent())
                .filter(|&p| can_remove(state, p))
                .map(|p| Move::capture(p, player)),
        );
        return moves;
    }

    match state.phase() {
        Phase::Placement => {
            if state.remaining(player) > 0 {
                moves.extend(board.empty_positions().map(|p| Move::place(p, player)));
            }
        }
        Phase::Movement | Phase::Flying => {
            let flying = can_fly(state, player);
            for from in board.positions_of(player) {
                if flying {
                    moves.extend(
                        board
                            .empty_positions()
                            .map(|to| Move::step(from, to, player)),
                    );
                } else {
                    moves.extend(
                        from.neighbors()
                            .iter()
                            .filter(|&&to| board.is_empty(to))
                            .map(|&to| Move::step(from, to, player)),
                    );
                }
            }
        }
    }
    moves
}

/// Check whether `player` has at least one legal move, without building
/// the list.
#[must_use]
pub fn has_legal_moves(state: &GameState, player: Color) -> bool {
    if state.is_finished() {
        return false;
    }
    let board = state.board();

    if state.pending_capture() && state.active_player() == player {
        // Some opposing piece is always removable while any remain.
        return state.on_board(player.opponent()) > 0;
    }

    match state.phase() {
        Phase::Placement => {
            state.remaining(player) > 0 && board.empty_positions().next().is_some()
        }
        Phase::Movement | Phase::Flying => {
            if can_fly(state, player) {
                board.empty_positions().next().is_some()
            } else {
                board
                    .positions_of(player)
                    .any(|p| board.has_empty_neighbor(p))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::core::{GameBuilder, GameId};
    use crate::rules::is_valid_move;

    fn pos(i: usize) -> Position {
        Position::new(i)
    }

    #[test]
    fn test_opening_moves() {
        let state = GameState::new(GameId::new(1));
        let moves = generate_legal_moves(&state, Color::White);

        assert_eq!(moves.len(), 24);
        assert_eq!(moves[0], Move::place(pos(0), Color::White));
        assert_eq!(moves[23], Move::place(pos(23), Color::White));
        assert!(has_legal_moves(&state, Color::White));
    }

    #[test]
    fn test_movement_moves_sorted() {
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[4, 9, 15, 20])
            .pieces(Color::Black, &[1, 3, 5, 23])
            .remaining(Color::White, 0)
            .remaining(Color::Black, 0)
            .build()
            .unwrap();

        let moves = generate_legal_moves(&state, Color::White);
        let expected = [
            Move::step(pos(4), pos(7), Color::White),
            Move::step(pos(9), pos(0), Color::White),
            Move::step(pos(9), pos(10), Color::White),
            Move::step(pos(9), pos(21), Color::White),
            Move::step(pos(15), pos(11), Color::White),
            Move::step(pos(15), pos(16), Color::White),
            Move::step(pos(20), pos(13), Color::White),
            Move::step(pos(20), pos(19), Color::White),
        ];
        assert_eq!(moves.as_slice(), &expected);
        assert!(moves.iter().all(|&mv| is_valid_move(&state, mv)));
    }

    #[test]
    fn test_flying_moves() {
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[0, 3, 6])
            .pieces(Color::Black, &[2, 5, 8, 12])
            .remaining(Color::White, 0)
            .remaining(Color::Black, 0)
            .build()
            .unwrap();

        // Three pieces, seventeen empty points each.
        assert_eq!(generate_legal_moves(&state, Color::White).len(), 3 * 17);

        // Black keeps the adjacency rule: 2->1, 2->14, 5->4, 5->13, 8->7,
        // 12->13, 12->17.
        assert_eq!(generate_legal_moves(&state, Color::Black).len(), 7);
    }

    #[test]
    fn test_capture_moves_respect_protection() {
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[21, 22, 23])
            .pieces(Color::Black, &[0, 1, 2, 12])
            .remaining(Color::White, 3)
            .remaining(Color::Black, 2)
            .pending_capture(true)
            .build()
            .unwrap();

        let moves = generate_legal_moves(&state, Color::White);
        assert_eq!(moves.as_slice(), &[Move::capture(pos(12), Color::White)]);
    }

    #[test]
    fn test_blocked_side_has_no_moves() {
        // Every White piece sits in a corner whose neighbors are Black.
        // Black is to move, so the game is not over yet.
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[0, 2, 21, 23])
            .pieces(Color::Black, &[1, 9, 14, 22, 4])
            .remaining(Color::White, 0)
            .remaining(Color::Black, 0)
            .active(Color::Black)
            .build()
            .unwrap();

        assert!(generate_legal_moves(&state, Color::White).is_empty());
        assert!(!has_legal_moves(&state, Color::White));
        assert!(has_legal_moves(&state, Color::Black));
    }

    #[test]
    fn test_finished_game_has_no_moves() {
        let state = GameBuilder::new(GameId::new(1))
            .pieces(Color::White, &[0, 1, 4])
            .pieces(Color::Black, &[9, 10])
            .remaining(Color::White, 0)
            .remaining(Color::Black, 0)
            .build()
            .unwrap();

        assert!(generate_legal_moves(&state, Color::White).is_empty());
        assert!(!has_legal_moves(&state, Color::White));
    }
}
