//! Depth-limited minimax search.
//!
//! One recursive function alternates the maximizing and minimizing roles by
//! whose turn it is, instead of a node-class pair with virtual dispatch. The
//! board is a small `Copy` value, so every hypothetical move operates on an
//! independent copy and sibling branches never share mutable state.

use tracing::debug;

use crate::board::BoardState;
use crate::eval;
use crate::game::Move;

/// Result of a completed search: the chosen move, its minimax score, and
/// the number of nodes visited (diagnostic only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Move,
    pub score: i32,
    pub nodes: u64,
}

/// Search the game tree `depth` plies ahead and return the best move for
/// the player to move.
///
/// The root expands every open position in ascending index order; a nested
/// position maximizes when its side to move is the root player and minimizes
/// otherwise. Strict comparisons keep the first-encountered move among equal
/// best scores, so the lowest position index wins ties and repeated searches
/// of the same board are fully deterministic.
///
/// The search is synchronous and runs to completion; there is no pruning,
/// no transposition table, and no cancellation. Worst case on this board is
/// 9! ~ 362,880 nodes, tractable without any of those.
///
/// # Errors
///
/// Returns [`crate::Error::NoValidMoves`] if the board is terminal (won or
/// full); asking for a move there is a caller contract violation. Any
/// non-terminal board yields a defined decision for every depth.
pub fn find_best_move(board: &BoardState, depth: u32) -> crate::Result<Decision> {
    if board.is_terminal() {
        return Err(crate::Error::NoValidMoves);
    }

    let root = board.to_move;
    let mut nodes = 0u64;
    let mut best_score = i32::MIN;
    let mut best_position = 0;

    for position in board.open_positions() {
        let child = board.make_move(position)?;
        let value = minimax(&child, root, depth.saturating_sub(1), 0, &mut nodes);
        if value > best_score {
            best_score = value;
            best_position = position;
        }
    }

    debug!(
        player = %root,
        depth,
        nodes,
        best_position,
        score = best_score,
        "minimax search complete"
    );

    Ok(Decision {
        best_move: Move {
            position: best_position,
            player: root,
        },
        score: best_score,
        nodes,
    })
}

/// Score a position `ply` plies below the root's children.
///
/// Terminal positions (win, draw, or depth exhausted) evaluate via
/// [`eval::score_at_ply`] from the root player's perspective; a root child
/// sits at ply 0, so an immediate win scores exactly [`eval::WIN_SCORE`].
fn minimax(board: &BoardState, root: crate::Player, depth: u32, ply: u32, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if depth == 0 || board.is_terminal() {
        return eval::score_at_ply(board, root, ply);
    }

    let maximizing = board.to_move == root;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for position in board.open_positions() {
        let child = board
            .make_move(position)
            .expect("open position is a legal move");
        let value = minimax(&child, root, depth - 1, ply + 1, nodes);

        if maximizing {
            if value > best {
                best = value;
            }
        } else if value < best {
            best = value;
        }
    }

    best
}
