//! Static board topology: cells, mill lines, adjacency.
//!
//! Cells are numbered 0-23 over the three nested squares, outer square
//! first, reading each ring left-to-right, top-to-bottom:
//!
//! ```text
//!  0----------1----------2
//!  |          |          |
//!  |   3------4------5   |
//!  |   |      |      |   |
//!  |   |   6--7--8   |   |
//!  9--10--11     12--13--14
//!  |   |  15--16--17  |   |
//!  |   |      |      |   |
//!  |  18-----19-----20   |
//!  |          |          |
//! 21---------22---------23
//! ```

/// Number of board cells.
pub const CELLS: usize = 24;

/// Pieces each player starts with in hand.
pub const PIECES_PER_PLAYER: u8 = 9;

/// The 16 mill lines: one per side of each of the three squares, plus the
/// 8 spokes connecting squares through the side midpoints.
pub const MILLS: [[usize; 3]; 16] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [9, 10, 11],
    [12, 13, 14],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [1, 4, 7],
    [16, 19, 22],
    [8, 12, 17],
    [5, 13, 20],
    [2, 14, 23],
];

/// Neighbors reachable by one step along a drawn line. Degree runs 2
/// (corners) to 4 (cross junctions).
pub static ADJACENCY: [&[usize]; CELLS] = [
    &[1, 9],
    &[0, 2, 4],
    &[1, 14],
    &[4, 10],
    &[1, 3, 5, 7],
    &[4, 13],
    &[7, 11],
    &[4, 6, 8],
    &[7, 12],
    &[0, 10, 21],
    &[3, 9, 11, 18],
    &[6, 10, 15],
    &[8, 13, 17],
    &[5, 12, 14, 20],
    &[2, 13, 23],
    &[11, 16],
    &[15, 17, 19],
    &[12, 16],
    &[10, 19],
    &[16, 18, 20, 22],
    &[13, 19],
    &[9, 22],
    &[19, 21, 23],
    &[14, 22],
];
