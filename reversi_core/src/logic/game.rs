use crate::logic::board::{Board, Player, Score};
use crate::logic::rules::{self, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Player),
    Draw,
}

/// One accepted placement. Passes are never recorded, which keeps the
/// history aligned with the replay-log wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub index: usize,
    pub player: Player,
    pub flipped: usize,
    pub score: Score,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::initial(8))
    }

    #[must_use]
    pub const fn from_board(board: Board) -> Self {
        Self {
            board,
            status: GameStatus::Playing,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Place a stone for the side to move. After a legal placement the
    /// game advances through the shared termination policy: the score
    /// target is checked first, then the side to move is auto-passed when
    /// stuck while the opponent can still answer, and the game ends by
    /// stalemate when neither side can move.
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        rules::validate_move(&self.board, index)?;

        let player = self.board.turn();
        let flipped = rules::captures_for(&self.board, index).len();
        self.board = self.board.place(index);
        self.history.push(MoveRecord {
            index,
            player,
            flipped,
            score: self.board.score(),
        });
        self.last_move = Some(index);
        self.update_status();
        Ok(())
    }

    fn update_status(&mut self) {
        if self.board.is_end_by_score() {
            let score = self.board.score();
            self.status = self
                .board
                .winner_by_score()
                .map_or(GameStatus::Draw, GameStatus::Won);
            log::debug!(
                "game over by score: black {} white {}",
                score.black,
                score.white
            );
            return;
        }
        if self.board.has_any_move() {
            return;
        }
        if self.board.has_any_move_for(self.board.turn().opposite()) {
            log::debug!("no move for {:?}, passing", self.board.turn());
            self.board = self.board.pass();
        } else {
            // Neither side can move: stalemate, higher total wins.
            self.status = self.winner().map_or(GameStatus::Draw, GameStatus::Won);
            let score = self.board.score();
            log::debug!(
                "game over by stalemate: black {} white {}",
                score.black,
                score.white
            );
        }
    }

    /// Side currently ahead on total stone value; `None` is a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        let Score { black, white } = self.board.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Placement indices in play order, pass-free — the replay-log payload.
    #[must_use]
    pub fn move_log(&self) -> Vec<usize> {
        self.history.iter().map(|record| record.index).collect()
    }
}
