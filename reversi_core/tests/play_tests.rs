#[cfg(test)]
mod tests {
    use reversi_core::engine::config::{choose_move, MatchConfig};
    use reversi_core::logic::board::{Board, Cell, Player};
    use reversi_core::logic::game::{GameState, GameStatus};
    use reversi_core::logic::replay::{parse_log, replay, stringify_log};

    #[test]
    fn test_opening_move_set() {
        // The classic four replies flanking the center cross.
        let game = GameState::new();
        assert_eq!(game.board.list_legal_moves(), vec![19, 26, 37, 44]);
        assert_eq!(game.board.turn(), Player::Black);
    }

    #[test]
    fn test_score_threshold_finishes_the_match() {
        // White is one capture away from doubling a 512 stone past the
        // target; the stalemate rule must not fire before the score rule.
        let mut cells: Vec<Cell> = vec![0; 64];
        cells[1] = 512;
        cells[2] = -2;
        cells[40] = 2;
        cells[41] = -2;
        let mut game = GameState::from_board(Board::from_cells(cells, Player::White));

        game.make_move(0).unwrap();
        assert!(game.board.is_end_by_score());
        assert_eq!(game.board.winner_by_score(), Some(Player::White));
        assert_eq!(game.status, GameStatus::Won(Player::White));
    }

    #[test]
    fn test_ai_match_terminates_and_replays_identically() {
        let black = MatchConfig::new(Player::White, 2).search_params();
        let white = MatchConfig::new(Player::Black, 1).search_params();

        let mut game = GameState::new();
        let mut total = 0;
        for _ in 0..200 {
            if game.status != GameStatus::Playing {
                break;
            }
            let params = if game.board.turn() == Player::Black {
                &black
            } else {
                &white
            };
            let index = choose_move(&game.board, params).index.unwrap();
            game.make_move(index).unwrap();

            // Captures only ever add value.
            let score = game.board.score();
            assert!(score.black + score.white > total);
            total = score.black + score.white;
        }
        assert_ne!(game.status, GameStatus::Playing);

        // A recorded log replays to the same position (trailing auto-pass
        // bookkeeping may differ in whose turn is displayed).
        let log = stringify_log(&game.move_log());
        let replayed = replay(&parse_log(&log));
        assert_eq!(replayed.cells(), game.board.cells());
        assert_eq!(replayed.score(), game.board.score());
    }

    #[test]
    fn test_replay_survives_log_noise() {
        let mut game = GameState::new();
        game.make_move(19).unwrap();
        game.make_move(18).unwrap();

        let noisy = format!(" {} .oops. ", stringify_log(&game.move_log()));
        let replayed = replay(&parse_log(&noisy));
        assert_eq!(replayed, game.board);
    }

    #[test]
    fn test_game_state_json_round_trip() {
        let mut game = GameState::new();
        game.make_move(19).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.board, game.board);
        assert_eq!(restored.status, game.status);
        assert_eq!(restored.history, game.history);
    }

    #[test]
    fn test_match_config_json_round_trip() {
        let config = MatchConfig::new(Player::White, 4);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MatchConfig::load_from_json(&json).unwrap(), config);
    }
}
