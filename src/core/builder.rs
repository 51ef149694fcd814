//! Arbitrary position setup.
//!
//! Tests, puzzles and resumed games need positions that are not reachable
//! by replaying a short move list. The builder starts from the fresh-game
//! counters, takes piece placements and overrides, and checks the result
//! before handing out a [`GameState`].

use im::Vector;

use super::config::{GameId, PIECES_PER_PLAYER};
use super::player::{Color, ColorMap};
use super::state::GameState;
use crate::board::{Board, Position};
use crate::error::SetupError;

/// Builder for a [`GameState`] in an arbitrary position.
///
/// ```
/// use morris_engine::core::{Color, GameBuilder, GameId, Phase};
///
/// let state = GameBuilder::new(GameId::new(1))
///     .pieces(Color::White, &[0, 1, 2, 3])
///     .pieces(Color::Black, &[9, 10, 11])
///     .remaining(Color::White, 0)
///     .remaining(Color::Black, 0)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.phase(), Phase::Flying);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    id: GameId,
    pieces: Vec<(Color, usize)>,
    remaining: ColorMap<u8>,
    active: Color,
    pending_capture: bool,
}

impl GameBuilder {
    /// Start from an empty board with nine pieces in hand per side.
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            pieces: Vec::new(),
            remaining: ColorMap::with_value(PIECES_PER_PLAYER),
            active: Color::FIRST,
            pending_capture: false,
        }
    }

    /// Put `color` pieces on the given indices.
    #[must_use]
    pub fn pieces(mut self, color: Color, indices: &[usize]) -> Self {
        self.pieces.extend(indices.iter().map(|&i| (color, i)));
        self
    }

    /// Set how many pieces `color` still holds in hand.
    #[must_use]
    pub fn remaining(mut self, color: Color, count: u8) -> Self {
        self.remaining[color] = count;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn active(mut self, color: Color) -> Self {
        self.active = color;
        self
    }

    /// Require the side to move to capture first.
    #[must_use]
    pub fn pending_capture(mut self, pending: bool) -> Self {
        self.pending_capture = pending;
        self
    }

    /// Validate the setup and derive phase and result.
    pub fn build(self) -> Result<GameState, SetupError> {
        let mut board = Board::new();
        for &(color, index) in &self.pieces {
            let pos = Position::try_from(index)?;
            if !board.is_empty(pos) {
                return Err(SetupError::DuplicatePosition(pos));
            }
            board.set(pos, color);
        }

        for color in Color::all() {
            let total = board.count(color).saturating_add(self.remaining[color]);
            if total > PIECES_PER_PLAYER {
                return Err(SetupError::TooManyPieces { color, total });
            }
        }

        let victim = self.active.opponent();
        if self.pending_capture && board.count(victim) == 0 {
            return Err(SetupError::NothingToCapture(victim));
        }

        let placing = Color::all().any(|c| self.remaining[c] > 0);
        if placing && !self.pending_capture && self.remaining[self.active] == 0 {
            return Err(SetupError::EmptyHand(self.active));
        }

        Ok(GameState::assemble(
            self.id,
            board,
            self.remaining,
            self.active,
            self.pending_capture,
            Vector::new(),
        ))
    }
}
