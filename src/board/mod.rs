//! Board state: the 24-cell position array and mill detection.
//!
//! The board knows nothing about turns, phases, or piece budgets; it only
//! tracks occupancy and answers mill queries. All turn bookkeeping lives
//! in [`rules::Session`](crate::rules::Session).

pub mod topology;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;

pub use topology::{ADJACENCY, CELLS, MILLS, PIECES_PER_PLAYER};

/// The 24-cell board. Each cell is empty or holds one player's piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELLS],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The occupant of a cell, if any.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.cells[cell]
    }

    /// Whether a cell is empty.
    #[must_use]
    pub fn is_empty(&self, cell: usize) -> bool {
        self.cells[cell].is_none()
    }

    /// Whether a cell holds `player`'s piece.
    #[must_use]
    pub fn is_owned_by(&self, cell: usize, player: Player) -> bool {
        self.cells[cell] == Some(player)
    }

    /// Put `player`'s piece on a cell.
    pub(crate) fn occupy(&mut self, cell: usize, player: Player) {
        debug_assert!(self.cells[cell].is_none(), "cell {cell} already occupied");
        self.cells[cell] = Some(player);
    }

    /// Remove whatever piece sits on a cell.
    pub(crate) fn vacate(&mut self, cell: usize) {
        debug_assert!(self.cells[cell].is_some(), "cell {cell} already empty");
        self.cells[cell] = None;
    }

    /// Iterate over all empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&c| self.is_empty(c))
    }

    /// Iterate over all cells holding `player`'s pieces.
    pub fn cells_of(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(move |&c| self.is_owned_by(c, player))
    }

    /// Count `player`'s pieces on the board.
    #[must_use]
    pub fn count_of(&self, player: Player) -> u8 {
        self.cells_of(player).count() as u8
    }

    /// The mill lines passing through a cell (always exactly two).
    #[must_use]
    pub fn mills_through(cell: usize) -> SmallVec<[[usize; 3]; 2]> {
        MILLS
            .iter()
            .filter(|mill| mill.contains(&cell))
            .copied()
            .collect()
    }

    /// Whether `cell` is part of a complete mill owned by `player`.
    ///
    /// Path-independent: only the current occupancy matters, not the move
    /// order that produced it.
    #[must_use]
    pub fn is_in_mill(&self, cell: usize, player: Player) -> bool {
        Self::mills_through(cell)
            .iter()
            .any(|mill| mill.iter().all(|&c| self.is_owned_by(c, player)))
    }

    /// Whether every one of `player`'s pieces sits inside a complete mill.
    ///
    /// Vacuously true for a player with no pieces on the board; callers
    /// only consult this while the opponent has pieces to capture.
    #[must_use]
    pub fn all_in_mills(&self, player: Player) -> bool {
        self.cells_of(player).all(|c| self.is_in_mill(c, player))
    }

    /// Raw snapshot of the cell array (for rendering collaborators).
    #[must_use]
    pub fn snapshot(&self) -> [Option<Player>; CELLS] {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(white: &[usize], black: &[usize]) -> Board {
        let mut board = Board::new();
        for &c in white {
            board.occupy(c, Player::White);
        }
        for &c in black {
            board.occupy(c, Player::Black);
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), CELLS);
        assert_eq!(board.count_of(Player::White), 0);
        assert_eq!(board.count_of(Player::Black), 0);
    }

    #[test]
    fn test_occupy_and_vacate() {
        let mut board = Board::new();
        board.occupy(4, Player::White);

        assert!(board.is_owned_by(4, Player::White));
        assert!(!board.is_owned_by(4, Player::Black));
        assert_eq!(board.count_of(Player::White), 1);

        board.vacate(4);
        assert!(board.is_empty(4));
    }

    #[test]
    fn test_mills_through_always_two() {
        for cell in 0..CELLS {
            assert_eq!(Board::mills_through(cell).len(), 2);
        }
    }

    #[test]
    fn test_mill_detection() {
        let board = board_with(&[0, 1, 2], &[3]);

        assert!(board.is_in_mill(0, Player::White));
        assert!(board.is_in_mill(1, Player::White));
        assert!(board.is_in_mill(2, Player::White));
        assert!(!board.is_in_mill(3, Player::Black));
        assert!(!board.is_in_mill(0, Player::Black));
    }

    #[test]
    fn test_mill_detection_every_line() {
        for mill in MILLS {
            let board = board_with(&mill, &[]);
            for cell in mill {
                assert!(board.is_in_mill(cell, Player::White));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_mill() {
        let board = board_with(&[0, 1], &[2]);
        assert!(!board.is_in_mill(0, Player::White));
        assert!(!board.is_in_mill(2, Player::Black));
    }

    #[test]
    fn test_all_in_mills() {
        let in_mills = board_with(&[0, 1, 2], &[]);
        assert!(in_mills.all_in_mills(Player::White));

        let with_stray = board_with(&[0, 1, 2, 5], &[]);
        assert!(!with_stray.all_in_mills(Player::White));
    }

    #[test]
    fn test_board_serialization() {
        let board = board_with(&[0, 7], &[12]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
