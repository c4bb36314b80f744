use crate::logic::board::Board;

/// Separator between move indices in a serialized replay log.
pub const LOG_SEPARATOR: char = '.';

/// Parse a replay log. Deliberately lenient: surrounding whitespace is
/// trimmed and empty or non-numeric tokens are dropped silently, so
/// hand-edited or truncated logs still yield their valid prefix moves in
/// order.
#[must_use]
pub fn parse_log(log: &str) -> Vec<usize> {
    log.trim()
        .split(LOG_SEPARATOR)
        .filter_map(|token| {
            let token = token.trim();
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            token.parse::<usize>().ok()
        })
        .collect()
}

#[must_use]
pub fn stringify_log(moves: &[usize]) -> String {
    let separator = LOG_SEPARATOR.to_string();
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Apply one logged placement, auto-passing (at most twice) when the
/// recording side had to pass before this move. Never passes while the
/// side to move still has some legal move, and leaves the board unchanged
/// when the index cannot be made placeable — mirroring live play so that
/// recorded logs replay identically.
#[must_use]
pub fn apply_logged(board: &Board, index: usize) -> Board {
    let mut current = board.clone();
    let mut guard = 0;
    while !current.can_place(index) {
        guard += 1;
        if guard > 2 {
            break;
        }
        if current.has_any_move() {
            break;
        }
        if !current.has_any_move_for(current.turn().opposite()) {
            break;
        }
        current = current.pass();
    }
    if current.can_place(index) {
        current.place(index)
    } else {
        current
    }
}

/// Replay a full log from the standard starting position.
#[must_use]
pub fn replay(moves: &[usize]) -> Board {
    moves
        .iter()
        .fold(Board::initial(8), |board, &index| apply_logged(&board, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::Player;

    #[test]
    fn test_parse_log_basic() {
        assert_eq!(parse_log("19.26.20"), vec![19, 26, 20]);
        assert_eq!(parse_log(""), Vec::<usize>::new());
        assert_eq!(parse_log("42"), vec![42]);
    }

    #[test]
    fn test_parse_log_drops_malformed_tokens() {
        assert_eq!(parse_log("  19..x.26.-3. 20 .\n"), vec![19, 26, 20]);
        assert_eq!(parse_log("..."), Vec::<usize>::new());
        assert_eq!(parse_log("a.b.c"), Vec::<usize>::new());
        // Overflowing tokens are malformed too.
        assert_eq!(parse_log("19.99999999999999999999999"), vec![19]);
    }

    #[test]
    fn test_stringify_round_trip() {
        let moves = vec![19, 26, 20];
        assert_eq!(stringify_log(&moves), "19.26.20");
        assert_eq!(parse_log(&stringify_log(&moves)), moves);
        assert_eq!(stringify_log(&[]), "");
    }

    #[test]
    fn test_replay_matches_direct_play() {
        let direct = Board::initial(8).place(19).place(26).place(20);
        assert_eq!(replay(&parse_log("19.26.20")), direct);
        // 26 is not placeable for White at that point, so both paths skip
        // it and White's stone lands at 20, handing the turn back.
        assert_eq!(direct.turn(), Player::Black);
    }

    #[test]
    fn test_apply_logged_ignores_unplaceable_index() {
        let board = Board::initial(8);
        assert_eq!(apply_logged(&board, 0), board);
        assert_eq!(apply_logged(&board, 64), board);
    }
}
