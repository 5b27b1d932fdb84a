//! `leftover` — read back the letters that no found word claimed.
//!
//! Both passes are read-only over the grid and are meant to run once all words are marked.

use crate::grid::{Direction, GridIndex};
use serde::Serialize;

/// Candidate bonus words, one list per direction.
///
/// Each qualifying run appears twice in a row: as read, then reversed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateWords {
    pub horizontal: Vec<String>,
    pub vertical: Vec<String>,
    /// Not extracted yet; always empty.
    pub diagonal_down: Vec<String>,
    /// Not extracted yet; always empty.
    pub diagonal_up: Vec<String>,
}

impl CandidateWords {
    /// The four lists in direction order: horizontal, vertical, down-right, up-right.
    #[must_use]
    pub fn as_lists(&self) -> [&[String]; 4] {
        [&self.horizontal, &self.vertical, &self.diagonal_down, &self.diagonal_up]
    }
}

/// For each row, the unused letters in column order (used cells leave no gap).
#[must_use]
pub fn remaining_letters(grid: &GridIndex) -> Vec<String> {
    (0..grid.row_count())
        .map(|row| {
            (0..grid.width())
                .filter(|&col| !grid.is_used(row, col))
                .map(|col| grid.letter(row, col))
                .collect()
        })
        .collect()
}

/// Every maximal run of unused cells of at least `min_length` letters, read along rows
/// (left to right) and columns (top to bottom).
///
/// A run only ends at a used cell or the edge of the grid. Runs are never empty, so a
/// `min_length` of 0 behaves like 1.
#[must_use]
pub fn candidate_words(grid: &GridIndex, min_length: usize) -> CandidateWords {
    let mut horizontal = Vec::new();
    for (row, col) in grid.scan_starts(Direction::Horizontal) {
        collect_runs(grid, Direction::Horizontal, row, col, min_length, &mut horizontal);
    }

    let mut vertical = Vec::new();
    for (row, col) in grid.scan_starts(Direction::Vertical) {
        collect_runs(grid, Direction::Vertical, row, col, min_length, &mut vertical);
    }

    CandidateWords {
        horizontal,
        vertical,
        // TODO: diagonal extraction needs a decision on whether runs may cross word ends
        diagonal_down: Vec::new(),
        diagonal_up: Vec::new(),
    }
}

/// Split one scan line at used cells and push every long-enough run (and its reversal).
fn collect_runs(
    grid: &GridIndex,
    direction: Direction,
    row: usize,
    col: usize,
    min_length: usize,
    out: &mut Vec<String>,
) {
    let mut run: Vec<char> = Vec::new();
    for (r, c) in grid.walk(direction, row, col) {
        if grid.is_used(r, c) {
            flush_run(&mut run, min_length, out);
        } else {
            run.push(grid.letter(r, c));
        }
    }
    flush_run(&mut run, min_length, out);
}

fn flush_run(run: &mut Vec<char>, min_length: usize, out: &mut Vec<String>) {
    if !run.is_empty() && run.len() >= min_length {
        out.push(run.iter().collect());
        out.push(run.iter().rev().collect());
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_letters_compacts_rows() {
        let mut grid = GridIndex::new(&["CATDOG", "XXXXXX"]).unwrap();
        grid.mark_range(Direction::Horizontal, 0, 0, 3);
        grid.mark_range(Direction::Horizontal, 0, 3, 3);
        assert_eq!(remaining_letters(&grid), vec!["", "XXXXXX"]);

        let mut grid = GridIndex::new(&["ABCDE"]).unwrap();
        grid.mark_range(Direction::Horizontal, 0, 1, 2);
        assert_eq!(remaining_letters(&grid), vec!["ADE"]);
    }

    #[test]
    fn test_full_row_is_single_run() {
        let grid = GridIndex::new(&["AAABBB"]).unwrap();
        let candidates = candidate_words(&grid, 3);
        assert_eq!(candidates.horizontal, vec!["AAABBB", "BBBAAA"]);
    }

    #[test]
    fn test_used_cell_splits_run() {
        let mut grid = GridIndex::new(&["ABCXDEFG"]).unwrap();
        grid.mark_range(Direction::Horizontal, 0, 3, 1);
        let candidates = candidate_words(&grid, 3);
        assert_eq!(candidates.horizontal, vec!["ABC", "CBA", "DEFG", "GFED"]);

        let candidates = candidate_words(&grid, 4);
        assert_eq!(candidates.horizontal, vec!["DEFG", "GFED"]);
    }

    #[test]
    fn test_vertical_runs() {
        let mut grid = GridIndex::new(&["AB", "CD", "EF", "GH"]).unwrap();
        grid.mark_range(Direction::Horizontal, 1, 1, 1);
        let candidates = candidate_words(&grid, 2);
        assert_eq!(candidates.vertical, vec!["ACEG", "GECA", "FH", "HF"]);
        assert!(candidates.horizontal.iter().all(|w| w.len() == 2));
    }

    #[test]
    fn test_diagonal_lists_are_empty() {
        let grid = GridIndex::new(&["ABC", "DEF", "GHI"]).unwrap();
        let candidates = candidate_words(&grid, 1);
        assert!(candidates.diagonal_down.is_empty());
        assert!(candidates.diagonal_up.is_empty());
        assert_eq!(candidates.as_lists()[0].len(), 6);
    }

    #[test]
    fn test_zero_min_length_skips_empty_runs() {
        let mut grid = GridIndex::new(&["AB"]).unwrap();
        grid.mark_range(Direction::Horizontal, 0, 0, 2);
        let candidates = candidate_words(&grid, 0);
        assert!(candidates.horizontal.is_empty());
    }

    #[test]
    fn test_candidate_words_is_idempotent() {
        let mut grid = GridIndex::new(&["ABCD", "EFGH", "IJKL"]).unwrap();
        grid.mark_range(Direction::DiagonalDown, 0, 0, 3);
        assert_eq!(candidate_words(&grid, 2), candidate_words(&grid, 2));
    }

    #[test]
    fn test_every_candidate_is_followed_by_its_reversal() {
        let mut grid = GridIndex::new(&["ABCDE", "FGHIJ", "KLMNO"]).unwrap();
        grid.mark_range(Direction::Vertical, 0, 2, 2);
        let candidates = candidate_words(&grid, 2);
        for list in candidates.as_lists() {
            for pair in list.chunks(2) {
                let reversed: String = pair[0].chars().rev().collect();
                assert_eq!(pair[1], reversed);
                assert_eq!(pair[1].chars().rev().collect::<String>(), pair[0]);
            }
        }
    }
}
