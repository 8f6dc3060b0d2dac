//! Player decision protocol.
//!
//! A decision is a single synchronous request/response: asked to move with
//! the current board, an agent returns exactly one move and goes back to
//! idle. No notification wiring and no per-turn subscription lifecycle.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::debug;

use crate::board::{BoardState, Player};
use crate::game::Move;
use crate::search;

/// Default number of plies the computer player looks ahead.
///
/// Full-depth search is always affordable on the 3x3 board; the bound exists
/// to cap the cost of the worst positions.
pub const DEFAULT_SEARCH_DEPTH: u32 = 6;

/// A player that can be asked for a move
pub trait Agent {
    /// Decide on a move for the given board.
    ///
    /// The board's `to_move` is expected to match [`Agent::piece`]; the
    /// returned move carries the agent's own piece.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is terminal or the decision source
    /// produces an illegal position.
    fn decide_move(&mut self, board: &BoardState) -> crate::Result<Move>;

    /// The agent's display name
    fn name(&self) -> &str;

    /// The piece this agent plays
    fn piece(&self) -> Player;
}

/// Computer player driven by the minimax search.
///
/// On an empty board it opens uniformly at random among the 9 positions, a
/// deliberate choice to vary openings; every other decision is a fresh
/// depth-limited search (nothing persists between turns).
pub struct MinimaxAgent {
    name: String,
    piece: Player,
    depth: u32,
    rng: StdRng,
}

impl MinimaxAgent {
    /// Create a computer player searching to [`DEFAULT_SEARCH_DEPTH`]
    pub fn new(name: impl Into<String>, piece: Player) -> Self {
        Self::with_depth(name, piece, DEFAULT_SEARCH_DEPTH)
    }

    /// Create a computer player with an explicit search depth
    pub fn with_depth(name: impl Into<String>, piece: Player, depth: u32) -> Self {
        Self {
            name: name.into(),
            piece,
            depth,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the opening-move RNG for reproducible play
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn decide_move(&mut self, board: &BoardState) -> crate::Result<Move> {
        let open = board.open_positions();

        // Opening move on an empty board is random
        if open.len() == 9 {
            let position = *open
                .choose(&mut self.rng)
                .ok_or(crate::Error::NoValidMoves)?;
            debug!(agent = %self.name, position, "random opening move");
            return Ok(Move {
                position,
                player: self.piece,
            });
        }

        let decision = search::find_best_move(board, self.depth)?;
        Ok(decision.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Player {
        self.piece
    }
}

/// Baseline player choosing uniformly among open positions
pub struct RandomAgent {
    name: String,
    piece: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>, piece: Player) -> Self {
        Self {
            name: name.into(),
            piece,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Agent for RandomAgent {
    fn decide_move(&mut self, board: &BoardState) -> crate::Result<Move> {
        let open = board.open_positions();
        let position = *open
            .choose(&mut self.rng)
            .ok_or(crate::Error::NoValidMoves)?;
        Ok(Move {
            position,
            player: self.piece,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Player {
        self.piece
    }
}

/// Human (or otherwise external) player adapter.
///
/// The decision comes from outside the core through a callback, one call per
/// turn; the agent validates the square and packages the move. The callback
/// replaces the original poll-until-flag bridge with a direct synchronous
/// call.
pub struct ExternalAgent<F> {
    name: String,
    piece: Player,
    source: F,
}

impl<F> ExternalAgent<F>
where
    F: FnMut(&BoardState) -> crate::Result<usize>,
{
    pub fn new(name: impl Into<String>, piece: Player, source: F) -> Self {
        Self {
            name: name.into(),
            piece,
            source,
        }
    }
}

impl<F> Agent for ExternalAgent<F>
where
    F: FnMut(&BoardState) -> crate::Result<usize>,
{
    fn decide_move(&mut self, board: &BoardState) -> crate::Result<Move> {
        let position = (self.source)(board)?;
        if !board.is_valid_square(position) {
            return Err(crate::Error::InvalidMove { position });
        }
        Ok(Move {
            position,
            player: self.piece,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Player {
        self.piece
    }
}
