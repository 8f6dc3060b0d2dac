//! Depth-limited minimax decision engine for 3x3 tic-tac-toe.
//!
//! This crate provides:
//! - Board state model with win/draw detection and validated construction
//! - A pure evaluation function with fixed terminal score constants
//! - Depth-limited minimax search with deterministic tie-breaking
//! - A synchronous player decision protocol (computer, random, external)
//! - A serializable game record
//!
//! The search is plain minimax without pruning: the 3x3 board's worst case
//! is small enough that none is needed.

pub mod agent;
pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod lines;
pub mod search;

pub use agent::{Agent, DEFAULT_SEARCH_DEPTH, ExternalAgent, MinimaxAgent, RandomAgent};
pub use board::{BoardState, Cell, Player};
pub use error::{Error, Result};
pub use eval::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use game::{Game, GameOutcome, Move};
pub use search::{Decision, find_best_move};
