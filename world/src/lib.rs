#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable maze layout answering bounds and walkability queries.
//!
//! A [`MazeGrid`] is built once from external configuration, validated to be
//! rectangular, and never mutated afterwards. Any number of navigators may
//! borrow the same grid.

use ghost_maze_core::TilePosition;
use thiserror::Error;

/// Binary state of a single maze tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Tile a ghost may occupy.
    Walkable,
    /// Tile that blocks movement.
    Wall,
}

impl Cell {
    /// Decodes the numeric layout convention where `0` is walkable and `1` is a wall.
    #[must_use]
    pub const fn from_numeric(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Walkable),
            1 => Some(Self::Wall),
            _ => None,
        }
    }

    /// Decodes a textual layout symbol.
    ///
    /// `#` and `1` mark walls; `.`, `0` and a space mark walkable tiles.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' | '1' => Some(Self::Wall),
            '.' | '0' | ' ' => Some(Self::Walkable),
            _ => None,
        }
    }
}

/// Reasons a maze layout may be rejected at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A row's length differs from the first row's length.
    #[error("row {row} has {found} tiles but the first row has {expected}")]
    JaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A numeric layout contained a value other than `0` or `1`.
    #[error("unknown cell value {value} at column {column}, row {row}")]
    UnknownCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// Offending value.
        value: u8,
    },
    /// A textual layout contained an unrecognised symbol.
    #[error("unknown maze symbol {symbol:?} at column {column}, row {row}")]
    UnknownSymbol {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// Offending character.
        symbol: char,
    },
}

/// Rectangular wall/walkable layout stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Builds a grid from rows of cells, rejecting non-rectangular input.
    ///
    /// An empty row list yields a `0 x 0` grid.
    pub fn from_cells<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, MazeError>
    where
        R: AsRef<[Cell]>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row_index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(MazeError::JaggedRow {
                    row: row_index,
                    expected,
                    found: row.len(),
                });
            }

            cells.extend_from_slice(row);
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    /// Builds a grid from numeric rows where `0` is walkable and `1` is a wall.
    pub fn from_numeric_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, MazeError>
    where
        R: AsRef<[u8]>,
    {
        let decoded = rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(column, &value)| {
                        Cell::from_numeric(value).ok_or(MazeError::UnknownCell {
                            row,
                            column,
                            value,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(decoded)
    }

    /// Parses a textual layout, one row per line.
    ///
    /// Blank lines before the first row and after the last row are ignored.
    /// A blank line between rows is an empty row and fails the width check.
    pub fn parse(layout: &str) -> Result<Self, MazeError> {
        Self::from_text_rows(layout.trim_matches(|c: char| c == '\n' || c == '\r').lines())
    }

    /// Builds a grid from textual rows using the [`Cell::from_symbol`] alphabet.
    pub fn from_text_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, MazeError>
    where
        R: AsRef<str>,
    {
        let decoded = rows
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(column, symbol)| {
                        Cell::from_symbol(symbol).ok_or(MazeError::UnknownSymbol {
                            row,
                            column,
                            symbol,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(decoded)
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Reports whether `position` lies inside the grid, regardless of its contents.
    #[must_use]
    pub fn contains(&self, position: TilePosition) -> bool {
        self.index(position).is_some()
    }

    /// Cell stored at `position`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn cell(&self, position: TilePosition) -> Option<Cell> {
        self.index(position).and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether `position` is inside the grid and walkable.
    ///
    /// Out-of-bounds positions are never walkable.
    #[must_use]
    pub fn is_walkable(&self, position: TilePosition) -> bool {
        self.cell(position) == Some(Cell::Walkable)
    }

    /// Iterator over every walkable tile in row-major order.
    pub fn walkable_tiles(&self) -> impl Iterator<Item = TilePosition> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Walkable)
            .filter_map(|(index, _)| {
                let x = i32::try_from(index % self.width).ok()?;
                let y = i32::try_from(index / self.width).ok()?;
                Some(TilePosition::new(x, y))
            })
    }

    fn index(&self, position: TilePosition) -> Option<usize> {
        let column = usize::try_from(position.x).ok()?;
        let row = usize::try_from(position.y).ok()?;
        if column < self.width && row < self.height {
            row.checked_mul(self.width)?.checked_add(column)
        } else {
            None
        }
    }
}
