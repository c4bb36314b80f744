use crate::logic::board::{Board, Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    Occupied,
    NoCapture,
    GameOver,
}

// The 8 scan directions as (row, col) offsets.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Checks whether the side to move may place at `index`. Total: every
/// failure mode maps to a `MoveError` variant, nothing panics.
pub fn validate_move(board: &Board, index: usize) -> Result<(), MoveError> {
    let size = board.size();
    if size == 0 || index >= size * size {
        return Err(MoveError::OutOfBounds);
    }
    if board.cell(index) != 0 {
        return Err(MoveError::Occupied);
    }
    let own = board.turn().sign();
    for &(dr, dc) in &DIRECTIONS {
        if !captured_run(board, size, index, own, dr, dc).is_empty() {
            return Ok(());
        }
    }
    Err(MoveError::NoCapture)
}

/// Every index captured by placing at `index`, across all valid
/// directions. Empty when the placement is illegal.
#[must_use]
pub fn captures_for(board: &Board, index: usize) -> Vec<usize> {
    let size = board.size();
    if size == 0 || index >= size * size || board.cell(index) != 0 {
        return Vec::new();
    }
    let own = board.turn().sign();
    let mut captured = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        captured.extend(captured_run(board, size, index, own, dr, dc));
    }
    captured
}

/// All placeable indices for the side to move, in ascending order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<usize> {
    let size = board.size();
    (0..size * size)
        .filter(|&index| validate_move(board, index).is_ok())
        .collect()
}

/// Whether `player` could place anywhere if it were their turn. Used to
/// probe the opponent without constructing a passed board.
#[must_use]
pub fn has_any_move_for(board: &Board, player: Player) -> bool {
    let size = board.size();
    let own = player.sign();
    (0..size * size).any(|index| {
        board.cell(index) == 0
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| !captured_run(board, size, index, own, dr, dc).is_empty())
    })
}

// Walk from `index` along (dr, dc): a contiguous run of opponent stones
// terminated by an own stone is a capture. Runs reaching the edge or an
// empty cell capture nothing.
fn captured_run(
    board: &Board,
    size: usize,
    index: usize,
    own: Cell,
    dr: isize,
    dc: isize,
) -> Vec<usize> {
    #[allow(clippy::cast_possible_wrap)]
    let mut row = (index / size) as isize + dr;
    #[allow(clippy::cast_possible_wrap)]
    let mut col = (index % size) as isize + dc;
    let mut run = Vec::new();
    #[allow(clippy::cast_possible_wrap)]
    let edge = size as isize;
    while row >= 0 && row < edge && col >= 0 && col < edge {
        #[allow(clippy::cast_sign_loss)]
        let cursor = row as usize * size + col as usize;
        let cell = board.cell(cursor);
        if cell == 0 {
            return Vec::new();
        }
        if cell.signum() == own {
            return run;
        }
        run.push(cursor);
        row += dr;
        col += dc;
    }
    Vec::new()
}
