use super::{
    components::{Check4, TileType},
    error::{Error, GameResult},
};

/// Rows used when the dimension prompt is skipped.
pub(crate) const DEFAULT_ROWS: usize = 6;
/// Columns used when the dimension prompt is skipped.
pub(crate) const DEFAULT_COLUMNS: usize = 7;
/// Smallest accepted row or column count.
pub(crate) const MIN_DIMENSION: usize = 5;
/// Largest accepted row or column count.
pub(crate) const MAX_DIMENSION: usize = 9;

// Characters used to draw the game board.
const VERTICAL: char = '║';
const HORIZONTAL: char = '═';
const MIDDLE: char = '╩';
const LEFT_CORNER: char = '╚';
const RIGHT_CORNER: char = '╝';

/// The three companion cells completing a run of four through the last
/// placed tile, as `(column, row)` offsets from it. Four patterns per axis,
/// one for each position the last tile can take within the run.
const WIN_PATTERNS: [[(isize, isize); 3]; 16] = [
    // horizontal
    [(-2, 0), (-1, 0), (1, 0)],
    [(2, 0), (1, 0), (-1, 0)],
    [(-3, 0), (-2, 0), (-1, 0)],
    [(3, 0), (2, 0), (1, 0)],
    // vertical
    [(0, -2), (0, -1), (0, 1)],
    [(0, 2), (0, 1), (0, -1)],
    [(0, -1), (0, -2), (0, -3)],
    [(0, 1), (0, 2), (0, 3)],
    // diagonal rising to the left
    [(-2, 2), (-1, 1), (1, -1)],
    [(2, -2), (1, -1), (-1, 1)],
    [(-3, 3), (-2, 2), (-1, 1)],
    [(3, -3), (2, -2), (1, -1)],
    // diagonal rising to the right
    [(2, 2), (1, 1), (-1, -1)],
    [(-2, -2), (-1, -1), (1, 1)],
    [(3, 3), (2, 2), (1, 1)],
    [(-3, -3), (-2, -2), (-1, -1)],
];

/// The game board. Tiles stack from the bottom of each column.
#[derive(Debug, Clone)]
pub(crate) struct Board {
    rows: usize,
    columns: usize,
    // indexed [column][row], row 0 is the bottom of a column
    table: Vec<Vec<TileType>>,
}

impl Board {
    /// Create a new Board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRows` or `Error::InvalidColumns` if a dimension
    /// lies outside `MIN_DIMENSION..=MAX_DIMENSION`. Rows are checked first.
    pub(crate) fn new(rows: usize, columns: usize) -> GameResult<Self> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&rows) {
            return Err(Error::InvalidRows);
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&columns) {
            return Err(Error::InvalidColumns);
        }
        Ok(Self {
            rows,
            columns,
            table: vec![vec![TileType::default(); rows]; columns],
        })
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn columns(&self) -> usize {
        self.columns
    }

    /// Place a tile in the given column. The column is zero indexed.
    /// Returns the row the tile landed on.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColumnOutOfRange` if the column is outside the board
    /// dimensions.
    ///
    /// Returns `Error::ColumnFull` if it failed to place the tile anywhere in
    /// the column. The board is left untouched.
    pub(crate) fn place(&mut self, col: usize, tile: TileType) -> GameResult<usize> {
        if col >= self.columns {
            return Err(Error::ColumnOutOfRange);
        }
        let column = &mut self.table[col];
        match column.iter().position(|&t| t == TileType::Empty) {
            Some(row) => {
                column[row] = tile;
                log::trace!("placed {tile:?} at column {col} row {row}");
                Ok(row)
            }
            None => Err(Error::ColumnFull),
        }
    }

    /// Check the board after a move of `tile` landing at `last_move`
    /// (column, row).
    ///
    /// A win is only possible through the cell that just changed, so only
    /// the 16 fixed neighborhood patterns around `last_move` are inspected
    /// instead of rescanning the whole board.
    pub(crate) fn check4(&self, tile: TileType, last_move: (usize, usize)) -> Check4 {
        if self.connects_four(tile, last_move) {
            Check4::Win
        } else if self.is_full() {
            Check4::Draw
        } else {
            Check4::None
        }
    }

    /// True if `last_move` completed a run of four `tile`s on any axis.
    /// Companion cells falling outside the board are skipped.
    fn connects_four(&self, tile: TileType, last_move: (usize, usize)) -> bool {
        let (col, row) = (last_move.0 as isize, last_move.1 as isize);
        WIN_PATTERNS.iter().any(|pattern| {
            pattern
                .iter()
                .filter(|&&(dc, dr)| self.holds(col + dc, row + dr, tile))
                .count()
                == 3
        })
    }

    /// True if `(col, row)` is on the board and occupied by `tile`.
    fn holds(&self, col: isize, row: isize, tile: TileType) -> bool {
        col >= 0
            && (col as usize) < self.columns
            && row >= 0
            && (row as usize) < self.rows
            && self.table[col as usize][row as usize] == tile
    }

    /// Checks if the board is full of tiles.
    pub(crate) fn is_full(&self) -> bool {
        self.table
            .iter()
            .all(|column| !column.contains(&TileType::Empty))
    }

    /// Reset the board to its original state. Dimensions are unchanged.
    pub(crate) fn reset(&mut self) {
        for column in &mut self.table {
            column.fill(TileType::Empty);
        }
    }

    #[cfg(test)]
    fn get(&self, col: usize, row: usize) -> TileType {
        self.table[col][row]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for number in 1..=self.columns {
            write!(f, " {number}")?;
        }
        writeln!(f)?;
        for row in (0..self.rows).rev() {
            write!(f, "{VERTICAL}")?;
            for col in 0..self.columns {
                write!(f, "{}{VERTICAL}", self.table[col][row].symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "{LEFT_CORNER}")?;
        for _ in 1..self.columns {
            write!(f, "{HORIZONTAL}{MIDDLE}")?;
        }
        write!(f, "{HORIZONTAL}{RIGHT_CORNER}")
    }
}
