pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Flat index of a (row, column) position. Row 0 is the top row.
pub const fn index_of(row: usize, col: usize) -> usize {
    row * COLS + col
}

/// Column containing a flat cell index.
pub const fn column_of(index: usize) -> usize {
    index % COLS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    InvalidIndex,
}

/// The 6×7 grid as one ordered sequence of 42 cells, index 0 at the top-left
/// and 41 at the bottom-right. Cells only ever go from empty to filled; the
/// only way back is a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Get the cell at a flat index (0..41)
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[index_of(row, col)]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the flat index where it landed.
    ///
    /// The landing cell is the lowest empty one in the column, i.e. the
    /// highest empty index congruent to `col` mod 7. A rejected drop leaves
    /// the board untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        for row in (0..ROWS).rev() {
            let index = index_of(row, col);
            if self.cells[index] == Cell::Empty {
                self.cells[index] = cell;
                return Ok(index);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// Number of cells holding the given value
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
