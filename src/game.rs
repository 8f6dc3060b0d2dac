//! Moves, outcomes, and the game record

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Player};

/// An immutable (position, piece) pair describing one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the standard initial position
    pub fn new() -> Self {
        Self::from_initial(BoardState::new())
    }

    /// Create a new game from an arbitrary initial position
    pub fn from_initial(initial: BoardState) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the outcome is settled, or
    /// [`crate::Error::InvalidMove`] for an occupied or out-of-range
    /// position; neither changes the recorded history.
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let new_state = current.make_move(position)?;

        self.moves.push(Move {
            position,
            player: current.to_move,
        });

        if new_state.is_terminal() {
            self.outcome = Some(match new_state.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Get the current board state by replaying the history.
    ///
    /// # Errors
    ///
    /// Returns error if any recorded move is invalid for its state, which
    /// indicates corrupted game data.
    pub fn current_state(&self) -> Result<BoardState, crate::Error> {
        let mut state = self.initial;
        for m in &self.moves {
            state = state.make_move(m.position)?;
        }
        Ok(state)
    }

    /// Whether the game has reached a terminal state
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_moves_and_outcome() {
        let mut game = Game::new();
        // X wins the top row
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }

        assert_eq!(game.moves.len(), 5);
        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }

        assert!(matches!(game.play(5), Err(crate::Error::GameOver)));
        assert_eq!(game.moves.len(), 5);
    }

    #[test]
    fn test_play_invalid_move_leaves_history_intact() {
        let mut game = Game::new();
        game.play(4).unwrap();

        assert!(matches!(
            game.play(4),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert_eq!(game.moves.len(), 1);
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_draw_outcome() {
        let mut game = Game::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
    }

    #[test]
    fn test_current_state_replays_history() {
        let mut game = Game::new();
        game.play(4).unwrap();
        game.play(0).unwrap();

        let state = game.current_state().unwrap();
        assert_eq!(state.occupied_count(), 2);
        assert_eq!(state.to_move, Player::X);
    }

    #[test]
    fn test_record_serializes() {
        let mut game = Game::new();
        game.play(4).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back.moves, game.moves);
    }
}
