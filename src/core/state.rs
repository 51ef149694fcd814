//! Game state snapshots.
//!
//! ## GameState
//!
//! An immutable snapshot of one game: board occupancy, phase, side to move,
//! per-color counters, pending-capture flag, result, and move history.
//! [`GameState::apply_move`] returns a new snapshot; the receiver stays
//! valid, so callers can keep any earlier snapshot for inspection.
//!
//! History is an `im::Vector`, so successive snapshots share structure and
//! cloning a state is O(1) regardless of game length.
//!
//! ## Snapshot
//!
//! The plain-data form of a state (arrays, integers, enums) handed to the
//! orchestration layer. Serde and bincode encodings of `GameState` go
//! through `Snapshot`, and decoding re-checks every invariant.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::config::{GameId, GameStatus, Phase, PIECES_PER_PLAYER};
use super::player::{Color, ColorMap};
use crate::board::{Board, POSITION_COUNT};
use crate::error::{RuleViolation, SnapshotError};
use crate::rules::{self, GameOver};

/// Immutable game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Snapshot", into = "Snapshot")]
pub struct GameState {
    id: GameId,
    board: Board,
    phase: Phase,
    active: Color,
    remaining: ColorMap<u8>,
    on_board: ColorMap<u8>,
    pending_capture: bool,
    status: GameStatus,
    winner: Option<Color>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the opening position: empty board, nine pieces in hand each,
    /// placement phase, White to move.
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            board: Board::new(),
            phase: Phase::Placement,
            active: Color::FIRST,
            remaining: ColorMap::with_value(PIECES_PER_PLAYER),
            on_board: ColorMap::with_value(0),
            pending_capture: false,
            status: GameStatus::Active,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Assemble a state from raw parts, deriving phase and result.
    ///
    /// Callers are responsible for the counter invariants.
    pub(crate) fn assemble(
        id: GameId,
        board: Board,
        remaining: ColorMap<u8>,
        active: Color,
        pending_capture: bool,
        history: Vector<MoveRecord>,
    ) -> Self {
        let on_board = ColorMap::new(|c| board.count(c));
        let mut state = Self {
            id,
            board,
            phase: Phase::Placement,
            active,
            remaining,
            on_board,
            pending_capture,
            status: GameStatus::Active,
            winner: None,
            history,
        };
        state.settle();
        state
    }

    // === Queries ===

    /// Identifier given at creation.
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Board occupancy.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current rule phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Color to move.
    #[must_use]
    pub fn active_player(&self) -> Color {
        self.active
    }

    /// Winner, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Active or finished.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Pieces a color still has in hand.
    #[must_use]
    pub fn remaining(&self, color: Color) -> u8 {
        self.remaining[color]
    }

    /// Pieces a color has on the board.
    #[must_use]
    pub fn on_board(&self, color: Color) -> u8 {
        self.on_board[color]
    }

    /// Whether the side to move must capture before the turn passes.
    #[must_use]
    pub fn pending_capture(&self) -> bool {
        self.pending_capture
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    // === Transitions ===

    /// Apply a validated move and return the resulting snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the game is finished or `mv` fails
    /// [`validate_move`](crate::rules::validate_move). Both mean the caller
    /// skipped validation; use [`try_apply_move`](Self::try_apply_move) to
    /// get the rejection reason instead.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> GameState {
        assert!(
            !self.is_finished(),
            "apply_move on finished {} ({mv})",
            self.id
        );
        if let Err(violation) = rules::validate_move(self, mv) {
            panic!("apply_move on {} with unvalidated move {mv}: {violation}", self.id);
        }

        let (next, outcome) = self.advance(mv);
        if next.pending_capture {
            debug!("{}: {} formed a mill, capture pending", self.id, mv.player());
        }
        if let Some(over) = outcome {
            debug!(
                "{}: finished after {} plies, {} wins ({})",
                self.id,
                next.ply(),
                over.winner,
                over.reason
            );
        }
        next
    }

    /// Validate and apply a move, returning the rejection reason on failure.
    pub fn try_apply_move(&self, mv: Move) -> Result<GameState, RuleViolation> {
        rules::validate_move(self, mv)?;
        Ok(self.transition(mv))
    }

    /// Apply a move known to be legal (generated by the rules module).
    pub(crate) fn transition(&self, mv: Move) -> GameState {
        self.advance(mv).0
    }

    /// Unchecked transition that also reports the result when `mv` ends
    /// the game.
    fn advance(&self, mv: Move) -> (GameState, Option<GameOver>) {
        let mut next = self.clone();
        let mover = mv.player();

        match mv {
            Move::Place { to, player } => {
                next.board.set(to, player);
                next.remaining[player] -= 1;
                next.on_board[player] += 1;
            }
            Move::Step { from, to, player } => {
                next.board.clear(from);
                next.board.set(to, player);
            }
            Move::Capture { target, player } => {
                next.board.clear(target);
                next.on_board[player.opponent()] -= 1;
            }
        }

        next.pending_capture = match mv.destination() {
            Some(to) => {
                next.board.is_part_of_mill(to, mover) && next.on_board[mover.opponent()] > 0
            }
            None => false,
        };
        next.active = if next.pending_capture {
            mover
        } else {
            mover.opponent()
        };

        if let Move::Capture { target, .. } = mv {
            if let Some(last) = next.history.back().copied() {
                if last.mv.player() == mover && !last.mv.is_capture() {
                    let index = next.history.len() - 1;
                    next.history.set(
                        index,
                        MoveRecord {
                            captured: Some(target),
                            ..last
                        },
                    );
                }
            }
        }
        next.history.push_back(MoveRecord::new(self.ply(), mv));

        let outcome = next.settle();
        (next, outcome)
    }

    /// Recompute the phase and run the end-of-game check.
    fn settle(&mut self) -> Option<GameOver> {
        self.phase = rules::determine_phase(
            self.remaining[Color::White],
            self.remaining[Color::Black],
            self.on_board[Color::White],
            self.on_board[Color::Black],
        );
        let outcome = rules::check_game_over(self);
        if let Some(over) = outcome {
            self.status = GameStatus::Finished;
            self.winner = Some(over.winner);
        }
        outcome
    }

    // === Serialization boundary ===

    /// Plain-data copy of this state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            id: self.id,
            occupancy: *self.board.cells(),
            phase: self.phase,
            active: self.active,
            remaining: self.remaining.into_array(),
            on_board: self.on_board.into_array(),
            pending_capture: self.pending_capture,
            status: self.status,
            winner: self.winner,
            history: self.history.iter().copied().collect(),
        }
    }

    /// Restore a state from plain data, rejecting inconsistent input.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let board = Board::from_cells(snapshot.occupancy);
        let state = Self::assemble(
            snapshot.id,
            board,
            ColorMap::from_array(snapshot.remaining),
            snapshot.active,
            snapshot.pending_capture,
            snapshot.history.into_iter().collect(),
        );

        for color in Color::all() {
            if state.on_board[color] != snapshot.on_board[color.index()] {
                return Err(invariant(format!(
                    "{color} on-board count {} disagrees with occupancy {}",
                    snapshot.on_board[color.index()],
                    state.on_board[color]
                )));
            }
        }
        if state.phase != snapshot.phase {
            return Err(invariant(format!(
                "phase {} but counters imply {}",
                snapshot.phase, state.phase
            )));
        }
        if state.status != snapshot.status || state.winner != snapshot.winner {
            return Err(invariant(format!(
                "result {:?}/{:?} but position implies {:?}/{:?}",
                snapshot.status, snapshot.winner, state.status, state.winner
            )));
        }
        state.check_invariants()?;
        Ok(state)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(&self.snapshot()).map_err(SnapshotError::Encode)
    }

    /// Decode from bincode, re-checking invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        Self::from_snapshot(snapshot)
    }

    /// Verify the counter, phase, result and history invariants.
    pub fn check_invariants(&self) -> Result<(), SnapshotError> {
        for (color, &counted) in self.on_board.iter() {
            let on_board = self.board.count(color);
            if on_board != counted {
                return Err(invariant(format!(
                    "{color} has {on_board} pieces on the board but counter says {counted}"
                )));
            }
            let total = self.remaining[color].saturating_add(counted);
            if total > PIECES_PER_PLAYER {
                return Err(invariant(format!("{color} accounts for {total} pieces")));
            }
        }
        let expected = rules::determine_phase(
            self.remaining[Color::White],
            self.remaining[Color::Black],
            self.on_board[Color::White],
            self.on_board[Color::Black],
        );
        if self.phase != expected {
            return Err(invariant(format!(
                "phase {} but counters imply {expected}",
                self.phase
            )));
        }
        if self.is_finished() != self.winner.is_some() {
            return Err(invariant("finished status and winner disagree".to_string()));
        }
        if self.pending_capture && self.on_board[self.active.opponent()] == 0 {
            return Err(invariant("capture pending with nothing to capture".to_string()));
        }
        if self.phase == Phase::Placement
            && !self.pending_capture
            && self.remaining[self.active] == 0
        {
            return Err(invariant(format!(
                "{} is to move during placement with no pieces in hand",
                self.active
            )));
        }
        if let Some((i, record)) = self
            .history
            .iter()
            .enumerate()
            .find(|(i, r)| r.ply as usize != *i)
        {
            return Err(invariant(format!(
                "history entry {i} carries ply {}",
                record.ply
            )));
        }
        Ok(())
    }
}

/// Create the opening position for a new game.
#[must_use]
pub fn new_game(id: GameId) -> GameState {
    GameState::new(id)
}

fn invariant(message: String) -> SnapshotError {
    SnapshotError::Invariant(message)
}

/// Plain-data form of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: GameId,
    /// Occupant of each point, indexed by position.
    pub occupancy: [Option<Color>; POSITION_COUNT],
    pub phase: Phase,
    pub active: Color,
    /// Pieces in hand, `[White, Black]`.
    pub remaining: [u8; 2],
    /// Pieces on the board, `[White, Black]`.
    pub on_board: [u8; 2],
    pub pending_capture: bool,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub history: Vec<MoveRecord>,
}

impl From<GameState> for Snapshot {
    fn from(state: GameState) -> Self {
        state.snapshot()
    }
}

impl TryFrom<Snapshot> for GameState {
    type Error = SnapshotError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        GameState::from_snapshot(snapshot)
    }
}
