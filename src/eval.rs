//! Pure evaluation function for board positions

use crate::board::{BoardState, Player};
use crate::lines;

/// Score for a position the player has won
pub const WIN_SCORE: i32 = 1000;

/// Score for a position the opponent has won
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score for a full board with no winner
pub const DRAW_SCORE: i32 = 0;

/// Evaluate a position from `player`'s perspective.
///
/// Terminal contract: [`WIN_SCORE`] if `player` has won, [`LOSS_SCORE`] if
/// the opponent has won, [`DRAW_SCORE`] on a full board with no winner.
/// Non-terminal positions get a deterministic heuristic estimate, the
/// difference of open-line scores, always strictly inside the terminal
/// constants. The board is never mutated.
pub fn score(board: &BoardState, player: Player) -> i32 {
    score_at_ply(board, player, 0)
}

/// Evaluate a position at a given ply below the search root.
///
/// Wins and losses are shaded toward zero by the ply so a nearer win (or a
/// farther loss) always dominates; at ply 0 this equals [`score`]. Draws
/// stay at [`DRAW_SCORE`] regardless of ply.
pub fn score_at_ply(board: &BoardState, player: Player, ply: u32) -> i32 {
    match board.winner() {
        Some(winner) if winner == player => WIN_SCORE - ply as i32,
        Some(_) => LOSS_SCORE + ply as i32,
        None => {
            if board.is_draw() {
                DRAW_SCORE
            } else {
                lines::open_line_score(&board.cells, player)
                    - lines::open_line_score(&board.cells, player.opponent())
            }
        }
    }
}
