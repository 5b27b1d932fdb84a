//! `grid` — the letter grid of a word-search puzzle plus its per-cell usage map.
//!
//! A [`GridIndex`] owns both the (immutable) letters and the (mutable) "used" flags for a
//! single solving run. It exposes read accessors for every scan line the solver needs
//! (rows, columns, and the two diagonal families) and one mutator, [`GridIndex::mark_range`].
//!
//! Coordinates are always `(row, col)`, 0-indexed from the top-left corner.

use crate::errors::GridError;
use serde::Serialize;
use std::fmt;

/// One of the four directions a scan line can run in.
///
/// Only "forward" directions are listed; a word written backwards is found by searching
/// for its reversal along the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDown,
    /// Up and to the right.
    DiagonalUp,
}

impl Direction {
    /// All directions, in the priority order used when looking for a word.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// The cell after `(row, col)` in this direction, or `None` if the step would leave
    /// the top or left edge. The bottom and right edges are checked by the grid.
    #[must_use]
    fn advance(self, row: usize, col: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Horizontal => Some((row, col + 1)),
            Direction::Vertical => Some((row + 1, col)),
            Direction::DiagonalDown => Some((row + 1, col + 1)),
            Direction::DiagonalUp => row.checked_sub(1).map(|r| (r, col + 1)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDown => "diagonal (down-right)",
            Direction::DiagonalUp => "diagonal (up-right)",
        };
        f.write_str(name)
    }
}

/// The puzzle letters and the usage map, always of identical shape.
#[derive(Debug, Clone)]
pub struct GridIndex {
    letters: Vec<Vec<char>>,
    used: Vec<Vec<bool>>,
    width: usize,
}

impl GridIndex {
    /// Build a grid from puzzle rows.
    ///
    /// Letters are stored uppercased so that lookups are case-insensitive. The width is
    /// the length (in `char`s) of the first row; every other row must match it.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if there are no rows or the first row is empty.
    /// - [`GridError::RaggedRow`] for the first row whose length differs from the first row's.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let letters: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().flat_map(char::to_uppercase).collect())
            .collect();

        let width = letters.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }

        if let Some((row, found)) = letters
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::RaggedRow { row, expected: width, found });
        }

        let used = vec![vec![false; width]; letters.len()];
        Ok(GridIndex { letters, used, width })
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The letter at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> char {
        self.letters[row][col]
    }

    /// Whether `(row, col)` has been claimed by a found word.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn is_used(&self, row: usize, col: usize) -> bool {
        self.used[row][col]
    }

    /// Number of cells currently marked as used.
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.iter().flatten().filter(|&&u| u).count()
    }

    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.letters[row].iter().collect()
    }

    /// Every letter of column `col`, top to bottom.
    #[must_use]
    pub fn column_text(&self, col: usize) -> String {
        self.letters.iter().map(|row| row[col]).collect()
    }

    /// Letters from `(start_row, start_col)` moving down-right until an edge is hit.
    #[must_use]
    pub fn diagonal_down_text(&self, start_row: usize, start_col: usize) -> String {
        self.scan_line(Direction::DiagonalDown, start_row, start_col).into_iter().collect()
    }

    /// Letters from `(start_row, start_col)` moving up-right until an edge is hit.
    #[must_use]
    pub fn diagonal_up_text(&self, start_row: usize, start_col: usize) -> String {
        self.scan_line(Direction::DiagonalUp, start_row, start_col).into_iter().collect()
    }

    /// The coordinates visited from `(row, col)` in `direction`, up to the grid edge.
    /// Empty if the start itself lies outside the grid.
    pub fn walk(&self, direction: Direction, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let start = self.contains(row, col).then_some((row, col));
        std::iter::successors(start, move |&(r, c)| {
            direction.advance(r, c).filter(|&(nr, nc)| self.contains(nr, nc))
        })
    }

    /// The letters along [`GridIndex::walk`].
    #[must_use]
    pub fn scan_line(&self, direction: Direction, row: usize, col: usize) -> Vec<char> {
        self.walk(direction, row, col).map(|(r, c)| self.letters[r][c]).collect()
    }

    /// Start cells of every scan line in `direction`, in the order they are searched.
    ///
    /// - rows: `(r, 0)` top to bottom
    /// - columns: `(0, c)` left to right
    /// - down-right diagonals: up the left edge from the last row to row 1, then along
    ///   the top edge from column 0 to the last column
    /// - up-right diagonals: down the left edge from row 0 to the last row, then along
    ///   the bottom edge from column 0 to the last column
    ///
    /// The up-right order visits the diagonal starting at the bottom-left corner twice.
    #[must_use]
    pub fn scan_starts(&self, direction: Direction) -> Vec<(usize, usize)> {
        let rows = self.row_count();
        let last_row = rows - 1;
        match direction {
            Direction::Horizontal => (0..rows).map(|r| (r, 0)).collect(),
            Direction::Vertical => (0..self.width).map(|c| (0, c)).collect(),
            Direction::DiagonalDown => (1..rows)
                .rev()
                .map(|r| (r, 0))
                .chain((0..self.width).map(|c| (0, c)))
                .collect(),
            Direction::DiagonalUp => (0..rows)
                .map(|r| (r, 0))
                .chain((0..self.width).map(|c| (last_row, c)))
                .collect(),
        }
    }

    /// Mark `len` consecutive cells as used, starting at `(row, col)` and stepping in
    /// `direction`.
    ///
    /// The caller guarantees the run fits inside the grid; cells past the edge are
    /// never touched.
    pub fn mark_range(&mut self, direction: Direction, row: usize, col: usize, len: usize) {
        let cells: Vec<(usize, usize)> = self.walk(direction, row, col).take(len).collect();
        debug_assert_eq!(
            cells.len(),
            len,
            "run of {len} cells from ({row}, {col}) going {direction} leaves the grid"
        );
        for (r, c) in cells {
            self.used[r][c] = true;
        }
    }

    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.letters.len() && col < self.width
    }
}
