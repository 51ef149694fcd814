//! Rules integration tests: placement, movement, flying, mills, captures
//! and end-of-game detection through the public API.

use morris_engine::{
    can_remove, generate_legal_moves, is_valid_move, new_game, validate_move, Color, GameBuilder,
    GameId, GameState, Move, Phase, Position, RuleViolation,
};

fn pos(i: usize) -> Position {
    Position::new(i)
}

fn play(state: GameState, moves: &[Move]) -> GameState {
    moves.iter().fold(state, |s, &mv| {
        assert!(is_valid_move(&s, mv), "{mv} should be legal");
        s.apply_move(mv)
    })
}

fn place(i: usize, color: Color) -> Move {
    Move::place(pos(i), color)
}

fn movement_position(white: &[usize], black: &[usize], active: Color) -> GameState {
    GameBuilder::new(GameId::new(1))
        .pieces(Color::White, white)
        .pieces(Color::Black, black)
        .remaining(Color::White, 0)
        .remaining(Color::Black, 0)
        .active(active)
        .build()
        .unwrap()
}

// =============================================================================
// Fresh State
// =============================================================================

#[test]
fn test_fresh_state() {
    let state = new_game(GameId::new(11));

    assert_eq!(state.remaining(Color::White), 9);
    assert_eq!(state.remaining(Color::Black), 9);
    assert_eq!(state.on_board(Color::White), 0);
    assert_eq!(state.on_board(Color::Black), 0);
    assert_eq!(state.phase(), Phase::Placement);
    assert_eq!(state.active_player(), Color::White);
    assert_eq!(state.winner(), None);
    assert!(state.history().is_empty());
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_placement_on_occupied_point_rejected() {
    let state = play(new_game(GameId::new(1)), &[place(5, Color::White)]);

    assert!(!is_valid_move(&state, place(5, Color::Black)));
    assert_eq!(
        validate_move(&state, place(5, Color::Black)),
        Err(RuleViolation::TargetOccupied(pos(5)))
    );
}

#[test]
fn test_full_placement_reaches_movement() {
    // Eighteen placements with no mill for either side.
    let white = [0, 2, 4, 6, 10, 13, 15, 19, 23];
    let black = [1, 3, 5, 7, 9, 14, 16, 18, 22];
    let moves: Vec<Move> = white
        .iter()
        .zip(black.iter())
        .flat_map(|(&w, &b)| [place(w, Color::White), place(b, Color::Black)])
        .collect();

    let state = play(new_game(GameId::new(1)), &moves);

    assert_eq!(state.remaining(Color::White), 0);
    assert_eq!(state.remaining(Color::Black), 0);
    assert_eq!(state.on_board(Color::White), 9);
    assert_eq!(state.on_board(Color::Black), 9);
    assert_eq!(state.phase(), Phase::Movement);
    assert_eq!(state.active_player(), Color::White);
    assert_eq!(state.ply(), 18);
}

// =============================================================================
// Movement and Flying
// =============================================================================

#[test]
fn test_step_requires_adjacency() {
    let state = movement_position(&[0, 3, 6, 11], &[2, 5, 8, 12], Color::White);

    for to in 0..24 {
        let mv = Move::step(pos(0), pos(to), Color::White);
        let expected = pos(0).is_adjacent(pos(to)) && state.board().is_empty(pos(to));
        assert_eq!(is_valid_move(&state, mv), expected, "0 -> {to}");
    }
}

#[test]
fn test_flying_eligibility_is_per_player() {
    let white_turn = movement_position(&[0, 3, 6], &[2, 5, 8, 12], Color::White);
    assert_eq!(white_turn.phase(), Phase::Flying);
    assert!(is_valid_move(
        &white_turn,
        Move::step(pos(0), pos(23), Color::White)
    ));

    let black_turn = movement_position(&[0, 3, 6], &[2, 5, 8, 12], Color::Black);
    assert_eq!(black_turn.phase(), Phase::Flying);
    assert!(!is_valid_move(
        &black_turn,
        Move::step(pos(2), pos(23), Color::Black)
    ));
    assert!(generate_legal_moves(&black_turn, Color::Black)
        .iter()
        .all(|mv| match *mv {
            Move::Step { from, to, .. } => from.is_adjacent(to),
            _ => false,
        }));
}

// =============================================================================
// Mills and Captures
// =============================================================================

#[test]
fn test_mill_protection() {
    let state = movement_position(&[0, 1, 2, 3], &[9, 10, 12, 22], Color::Black);
    assert!(!can_remove(&state, pos(0)));
    assert!(!can_remove(&state, pos(1)));
    assert!(!can_remove(&state, pos(2)));
    assert!(can_remove(&state, pos(3)));

    let only_mill = movement_position(&[0, 1, 2], &[9, 10, 12, 22], Color::Black);
    assert!(can_remove(&only_mill, pos(0)));
    assert!(can_remove(&only_mill, pos(1)));
    assert!(can_remove(&only_mill, pos(2)));
}

#[test]
fn test_turn_alternation_and_capture() {
    let state = new_game(GameId::new(1));
    let state = play(state, &[place(0, Color::White)]);
    assert_eq!(state.active_player(), Color::Black);

    let state = play(
        state,
        &[
            place(9, Color::Black),
            place(1, Color::White),
            place(10, Color::Black),
            place(2, Color::White),
        ],
    );
    assert!(state.pending_capture());
    assert_eq!(state.active_player(), Color::White);

    // Only captures are legal now.
    let moves = generate_legal_moves(&state, Color::White);
    assert_eq!(
        moves.as_slice(),
        &[
            Move::capture(pos(9), Color::White),
            Move::capture(pos(10), Color::White)
        ]
    );
    assert_eq!(
        validate_move(&state, place(5, Color::White)),
        Err(RuleViolation::CaptureRequired)
    );

    let state = play(state, &[Move::capture(pos(9), Color::White)]);
    assert!(!state.pending_capture());
    assert_eq!(state.active_player(), Color::Black);
    assert_eq!(state.on_board(Color::Black), 1);
    assert_eq!(state.history()[4].captured, Some(pos(9)));
}

#[test]
fn test_step_into_mill() {
    let state = movement_position(&[0, 2, 4, 20], &[9, 14, 15, 16], Color::White);
    let state = play(state, &[Move::step(pos(4), pos(1), Color::White)]);

    assert!(state.pending_capture());
    assert_eq!(state.active_player(), Color::White);
}

// =============================================================================
// End of Game
// =============================================================================

#[test]
fn test_capture_to_two_pieces_ends_game() {
    let state = movement_position(&[0, 2, 4, 20], &[9, 14, 15], Color::White);
    let state = play(
        state,
        &[
            Move::step(pos(4), pos(1), Color::White),
            Move::capture(pos(15), Color::White),
        ],
    );

    assert!(state.is_finished());
    assert_eq!(state.winner(), Some(Color::White));
    assert!(generate_legal_moves(&state, Color::Black).is_empty());
    assert_eq!(
        validate_move(&state, Move::step(pos(9), pos(21), Color::Black)),
        Err(RuleViolation::GameOver)
    );
}

#[test]
fn test_blocked_player_loses() {
    // Black is already sealed in; the loss lands once it is Black's turn.
    let state = movement_position(&[1, 9, 14, 22, 3], &[0, 2, 21, 23], Color::White);
    assert!(!state.is_finished());

    let state = play(state, &[Move::step(pos(3), pos(4), Color::White)]);
    assert!(state.is_finished());
    assert_eq!(state.winner(), Some(Color::White));
}

#[test]
#[should_panic(expected = "finished")]
fn test_apply_on_finished_game_panics() {
    let state = movement_position(&[0, 1, 4], &[9, 10], Color::Black);
    let _ = state.apply_move(Move::step(pos(9), pos(21), Color::Black));
}
