//! End-to-end scenarios for the minimax engine.
//!
//! Covers the board/search contracts: terminal scoring, determinism,
//! forced-win detection, and perfect-play outcomes.

use tictactoe_minimax::{
    BoardState, LOSS_SCORE, Player, WIN_SCORE, eval, find_best_move, lines,
};

mod terminal_scoring {
    use super::*;

    #[test]
    fn win_scores_the_maximum_constant() {
        let board = BoardState::from_string("XXXOO...._O").unwrap();
        assert_eq!(eval::score(&board, Player::X), WIN_SCORE);
        assert_eq!(eval::score(&board, Player::O), LOSS_SCORE);
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        // Scenario: fully occupied, no three-in-a-row
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_draw());
        assert!(!board.has_winner());
        assert_eq!(eval::score(&board, Player::X), 0);
        assert_eq!(eval::score(&board, Player::O), 0);
    }
}

mod move_application {
    use super::*;

    #[test]
    fn occupied_position_fails_and_leaves_board_unchanged() {
        let board = BoardState::new().make_move(4).unwrap();
        let snapshot = board;

        let result = board.make_move(4);
        assert!(matches!(
            result,
            Err(tictactoe_minimax::Error::InvalidMove { position: 4 })
        ));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn out_of_range_position_fails() {
        let board = BoardState::new();
        assert!(matches!(
            board.make_move(42),
            Err(tictactoe_minimax::Error::InvalidMove { position: 42 })
        ));
    }
}

mod forced_wins {
    use super::*;

    #[test]
    fn completes_the_diagonal() {
        // X at {0, 4}, O at {1}, X to move: 8 completes 0-4-8
        let board = BoardState::from_string("XO..X...._X").unwrap();
        assert_eq!(board.open_positions(), vec![2, 3, 5, 6, 7, 8]);

        for depth in 2..=9 {
            let decision = find_best_move(&board, depth).unwrap();
            assert_eq!(decision.best_move.position, 8, "depth {depth}");
            assert_eq!(decision.score, WIN_SCORE, "depth {depth}");
        }
    }

    #[test]
    fn completes_the_row() {
        // X at {0, 1}, O at {3, 4}, X to move: 2 completes 0-1-2
        let board = BoardState::from_string("XX.OO....").unwrap();
        assert_eq!(board.to_move, Player::X);

        let decision = find_best_move(&board, 2).unwrap();
        assert_eq!(decision.best_move.position, 2);
        assert_eq!(decision.score, WIN_SCORE);
    }
}

mod search_properties {
    use super::*;

    #[test]
    fn best_move_is_always_open() {
        let positions = [
            "X........_O",
            "XO.......",
            "XOX......",
            "XOXO.....",
            "X...O..X._O",
            "OX..X...._O",
        ];

        for encoded in positions {
            let board = BoardState::from_string(encoded).unwrap();
            for depth in 1..=9 {
                let decision = find_best_move(&board, depth).unwrap();
                assert!(
                    board.open_positions().contains(&decision.best_move.position),
                    "{encoded} at depth {depth}"
                );
            }
        }
    }

    #[test]
    fn identical_board_and_depth_give_identical_results() {
        let board = BoardState::from_string("X...O....").unwrap();
        let first = find_best_move(&board, 6).unwrap();
        for _ in 0..10 {
            let again = find_best_move(&board, 6).unwrap();
            assert_eq!(again.best_move, first.best_move);
            assert_eq!(again.score, first.score);
        }
    }

    #[test]
    fn ties_break_to_the_lowest_index() {
        // Two immediate wins: 2 (top row) and 6 (left column)
        let board = BoardState::from_string("XX.XOO.O.").unwrap();
        assert_eq!(lines::winning_moves(&board.cells, Player::X), vec![2, 6]);

        let decision = find_best_move(&board, 9).unwrap();
        assert_eq!(decision.best_move.position, 2);
    }
}

mod perfect_play {
    use super::*;

    /// Play both sides with full-depth search from the given position and
    /// return the final board.
    fn play_out(mut board: BoardState) -> BoardState {
        while !board.is_terminal() {
            let decision = find_best_move(&board, 9).unwrap();
            board = board.make_move(decision.best_move.position).unwrap();
        }
        board
    }

    #[test]
    fn optimal_play_from_empty_board_is_a_draw() {
        let final_board = play_out(BoardState::new());
        assert!(final_board.is_draw());
        assert_eq!(final_board.winner(), None);
    }

    #[test]
    fn optimal_play_never_loses_from_any_opening() {
        // Whatever square X opens on, perfect play from both sides draws
        for opening in 0..9 {
            let board = BoardState::new().make_move(opening).unwrap();
            let final_board = play_out(board);
            assert!(
                final_board.is_draw(),
                "opening {opening} should draw under perfect play"
            );
        }
    }
}
