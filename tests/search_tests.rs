//! Search integration tests: legality, determinism, tactics and self-play.

use morris_engine::{
    generate_legal_moves, new_game, play_game, select_move, Color, Difficulty, GameBuilder,
    GameId, GameRng, GameRngState, GameState, Move, MovePolicy, Position, RandomPolicy,
    SearchConfig, Searcher,
};

fn pos(i: usize) -> Position {
    Position::new(i)
}

/// Random playout of `plies` moves from the opening.
fn random_position(seed: u64, plies: u32) -> GameState {
    play_game(
        new_game(GameId::new(seed)),
        &mut RandomPolicy::new(seed),
        &mut RandomPolicy::new(seed.wrapping_add(1)),
        plies,
    )
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_selected_move_is_legal_across_positions() {
    let mut searcher = Searcher::new(SearchConfig::from_difficulty(Difficulty::Medium));

    for seed in 0..20 {
        let state = random_position(seed, (seed as u32 * 3) % 40);
        if state.is_finished() {
            continue;
        }
        let color = state.active_player();
        let mv = searcher.select_move(&state, color);
        assert!(
            generate_legal_moves(&state, color).contains(&mv),
            "seed {seed}: {mv} not legal"
        );
    }
}

#[test]
fn test_default_depth_on_opening() {
    let state = new_game(GameId::new(1));
    let mv = select_move(&state, Color::White);
    assert!(generate_legal_moves(&state, Color::White).contains(&mv));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_position_same_move() {
    let state = random_position(5, 12);
    assert!(!state.is_finished());
    let color = state.active_player();

    let config = SearchConfig::new().with_max_depth(3);
    let first = Searcher::new(config).search(&state, color);
    let second = Searcher::new(config).search(&state, color);

    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.stats.nodes, second.stats.nodes);
}

#[test]
fn test_restored_snapshot_searches_identically() {
    let state = random_position(9, 16);
    assert!(!state.is_finished());
    let restored = GameState::from_bytes(&state.to_bytes().unwrap()).unwrap();
    let color = state.active_player();

    let config = SearchConfig::new().with_max_depth(2);
    assert_eq!(
        Searcher::new(config).select_move(&state, color),
        Searcher::new(config).select_move(&restored, color)
    );
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_blocks_opponent_mill_in_placement() {
    // Black threatens 9-10-11; White has nothing of its own.
    let state = GameBuilder::new(GameId::new(1))
        .pieces(Color::White, &[0, 23])
        .pieces(Color::Black, &[9, 10])
        .remaining(Color::White, 7)
        .remaining(Color::Black, 7)
        .build()
        .unwrap();

    let mut searcher = Searcher::new(SearchConfig::new().with_max_depth(2));
    assert_eq!(
        searcher.select_move(&state, Color::White),
        Move::place(pos(11), Color::White)
    );
}

#[test]
fn test_takes_the_win() {
    let state = GameBuilder::new(GameId::new(1))
        .pieces(Color::White, &[0, 2, 4, 20])
        .pieces(Color::Black, &[9, 14, 15])
        .remaining(Color::White, 0)
        .remaining(Color::Black, 0)
        .build()
        .unwrap();

    let mut searcher = Searcher::new(SearchConfig::from_difficulty(Difficulty::Hard));
    let first = searcher.select_move(&state, Color::White);
    assert_eq!(first, Move::step(pos(4), pos(1), Color::White));

    let state = state.apply_move(first);
    let capture = searcher.select_move(&state, Color::White);
    let state = state.apply_move(capture);

    assert!(state.is_finished());
    assert_eq!(state.winner(), Some(Color::White));
}

// =============================================================================
// Self-play
// =============================================================================

#[test]
fn test_self_play_is_reproducible() {
    let run = || {
        let mut white = Searcher::new(SearchConfig::new().with_max_depth(2));
        let mut black = RandomPolicy::from_rng(GameRng::new(77).fork());
        play_game(new_game(GameId::new(2)), &mut white, &mut black, 60)
    };

    let a = run();
    let b = run();
    assert_eq!(a, b);
    assert!(a.check_invariants().is_ok());
}

#[test]
fn test_self_play_resumes_from_saved_state() {
    let start = new_game(GameId::new(6));
    let full = play_game(
        start.clone(),
        &mut Searcher::new(SearchConfig::new().with_max_depth(1)),
        &mut RandomPolicy::new(5),
        80,
    );

    let mut black = RandomPolicy::new(5);
    let paused = play_game(
        start,
        &mut Searcher::new(SearchConfig::new().with_max_depth(1)),
        &mut black,
        35,
    );

    // Persist both halves the way an orchestrator would.
    let game_bytes = paused.to_bytes().unwrap();
    let rng_json = serde_json::to_string(&black.rng_state()).unwrap();

    let restored = GameState::from_bytes(&game_bytes).unwrap();
    let rng_state: GameRngState = serde_json::from_str(&rng_json).unwrap();
    let resumed = play_game(
        restored,
        &mut Searcher::new(SearchConfig::new().with_max_depth(1)),
        &mut RandomPolicy::from_rng_state(&rng_state),
        45,
    );

    assert_eq!(resumed, full);
}

#[test]
fn test_policy_names() {
    let searcher = Searcher::new(SearchConfig::default());
    let random = RandomPolicy::new(0);
    assert_eq!(MovePolicy::name(&searcher), "alpha-beta");
    assert_eq!(random.name(), "random");
}
