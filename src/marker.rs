//! `marker` — place each target word in the grid and mark the cells it occupies.
//!
//! Words are handled strictly in input order. For each word the four directions are tried
//! in [`Direction::ALL`] order; within a direction, scan lines are tried in
//! [`GridIndex::scan_starts`] order. The first line containing the word (checked first) or
//! its reversal (checked second) wins, and the matched span is marked.
//!
//! Lookups read the full grid text. Cells already claimed by earlier words are *not*
//! skipped, so a word list with overlapping placements can match the same cells twice.

use crate::grid::{Direction, GridIndex};
use crate::solver::SolverError;
use log::{debug, warn};
use serde::Serialize;

/// Where a word was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// The word as searched (uppercased).
    pub word: String,
    pub direction: Direction,
    /// First marked cell, i.e. where the match starts when reading in `direction`.
    pub row: usize,
    pub col: usize,
    /// `true` if the grid holds the word backwards along `direction`.
    pub reversed: bool,
}

/// Find `word` (or its reversal) and mark its cells.
///
/// Returns `None` without touching the usage map if the word is nowhere in the grid.
/// An empty word matches at the start of the first row and marks nothing.
pub fn mark_word(grid: &mut GridIndex, word: &str) -> Option<Placement> {
    let forward: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();
    let backward: Vec<char> = forward.iter().rev().copied().collect();

    let (direction, row, col, reversed) = Direction::ALL
        .iter()
        .find_map(|&direction| locate(grid, direction, &forward, &backward))?;

    grid.mark_range(direction, row, col, forward.len());

    Some(Placement {
        word: forward.into_iter().collect(),
        direction,
        row,
        col,
        reversed,
    })
}

/// Place every word, in order, stopping at the first one that cannot be found.
///
/// # Errors
///
/// Returns [`SolverError::WordNotFound`] naming the first word that could not be placed.
/// Words before it stay marked in `grid`.
pub fn mark_all<S: AsRef<str>>(grid: &mut GridIndex, words: &[S]) -> Result<Vec<Placement>, SolverError> {
    let mut placements = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        let Some(placement) = mark_word(grid, word) else {
            warn!("Word not found: {word}");
            return Err(SolverError::WordNotFound { word: word.to_uppercase() });
        };
        debug!(
            "Placed {} {} at ({}, {}){}",
            placement.word,
            placement.direction,
            placement.row,
            placement.col,
            if placement.reversed { " reversed" } else { "" }
        );
        placements.push(placement);
    }
    Ok(placements)
}

/// Search every scan line of `direction` and return the first cell of the match.
fn locate(
    grid: &GridIndex,
    direction: Direction,
    forward: &[char],
    backward: &[char],
) -> Option<(Direction, usize, usize, bool)> {
    grid.scan_starts(direction).into_iter().find_map(|(start_row, start_col)| {
        let line = grid.scan_line(direction, start_row, start_col);
        let (offset, reversed) = match find_run(&line, forward) {
            Some(offset) => (offset, false),
            None => (find_run(&line, backward)?, true),
        };
        let (row, col) = grid.walk(direction, start_row, start_col).nth(offset)?;
        Some((direction, row, col, reversed))
    })
}

/// Index of the first occurrence of `needle` in `haystack`; an empty needle matches at 0.
fn find_run(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used_cells(grid: &GridIndex) -> Vec<(usize, usize)> {
        (0..grid.row_count())
            .flat_map(|r| (0..grid.width()).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.is_used(r, c))
            .collect()
    }

    #[test]
    fn test_find_run() {
        let hay: Vec<char> = "XTACX".chars().collect();
        assert_eq!(find_run(&hay, &['T', 'A', 'C']), Some(1));
        assert_eq!(find_run(&hay, &['C', 'A', 'T']), None);
        assert_eq!(find_run(&hay, &[]), Some(0));
        assert_eq!(find_run(&['A'], &['A', 'B']), None);
    }

    #[test]
    fn test_horizontal_forward() {
        let mut grid = GridIndex::new(&["CATDOG", "XXXXXX"]).unwrap();
        let placement = mark_word(&mut grid, "dog").unwrap();
        assert_eq!(placement.word, "DOG");
        assert_eq!(placement.direction, Direction::Horizontal);
        assert_eq!((placement.row, placement.col), (0, 3));
        assert!(!placement.reversed);
        assert_eq!(used_cells(&grid), vec![(0, 3), (0, 4), (0, 5)]);
    }

    #[test]
    fn test_horizontal_reversed_marks_same_span() {
        let mut grid = GridIndex::new(&["XTACX"]).unwrap();
        let placement = mark_word(&mut grid, "CAT").unwrap();
        assert!(placement.reversed);
        assert_eq!(used_cells(&grid), vec![(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_forward_checked_before_reversed_on_same_line() {
        // reversal appears first on the line, but the forward form still wins
        let mut grid = GridIndex::new(&["TACXXCAT"]).unwrap();
        let placement = mark_word(&mut grid, "CAT").unwrap();
        assert!(!placement.reversed);
        assert_eq!(placement.col, 5);
    }

    #[test]
    fn test_horizontal_preferred_over_vertical() {
        // CAT runs down column 0 and across row 2
        let mut grid = GridIndex::new(&["CXXX", "AXXX", "TCAT"]).unwrap();
        let placement = mark_word(&mut grid, "CAT").unwrap();
        assert_eq!(placement.direction, Direction::Horizontal);
        assert_eq!((placement.row, placement.col), (2, 1));
    }

    #[test]
    fn test_vertical() {
        let mut grid = GridIndex::new(&["XDX", "XOX", "XGX"]).unwrap();
        let placement = mark_word(&mut grid, "GOD").unwrap();
        assert_eq!(placement.direction, Direction::Vertical);
        assert!(placement.reversed);
        assert_eq!(used_cells(&grid), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_diagonal_down_marks_along_diagonal() {
        let mut grid = GridIndex::new(&["XXXX", "XCXX", "XXAX", "XXXT"]).unwrap();
        let placement = mark_word(&mut grid, "CAT").unwrap();
        assert_eq!(placement.direction, Direction::DiagonalDown);
        assert_eq!((placement.row, placement.col), (1, 1));
        assert_eq!(used_cells(&grid), vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_diagonal_down_on_top_edge_line() {
        let mut grid = GridIndex::new(&["XDXX", "XXOX", "XXXG"]).unwrap();
        let placement = mark_word(&mut grid, "DOG").unwrap();
        assert_eq!(placement.direction, Direction::DiagonalDown);
        assert_eq!(used_cells(&grid), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_diagonal_up_marks_along_diagonal() {
        // DOG reads up-right from (2, 0)
        let mut grid = GridIndex::new(&["XXG", "XOX", "DXX"]).unwrap();
        let placement = mark_word(&mut grid, "DOG").unwrap();
        assert_eq!(placement.direction, Direction::DiagonalUp);
        assert_eq!((placement.row, placement.col), (2, 0));
        assert!(!placement.reversed);
        assert_eq!(used_cells(&grid), vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_diagonal_up_reversed_from_bottom_edge() {
        // GOD reads up-right from (3, 1); searching DOG finds the reversal
        let mut grid = GridIndex::new(&["XXXX", "XXXD", "XXOX", "XGXX"]).unwrap();
        let placement = mark_word(&mut grid, "DOG").unwrap();
        assert_eq!(placement.direction, Direction::DiagonalUp);
        assert!(placement.reversed);
        assert_eq!((placement.row, placement.col), (3, 1));
        assert_eq!(used_cells(&grid), vec![(1, 3), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_not_found_leaves_grid_untouched() {
        let mut grid = GridIndex::new(&["ABC", "DEF"]).unwrap();
        assert!(mark_word(&mut grid, "ZZZ").is_none());
        assert_eq!(grid.used_count(), 0);
    }

    #[test]
    fn test_mark_all_reports_first_missing_word() {
        let mut grid = GridIndex::new(&["CATDOG", "XXXXXX"]).unwrap();
        let err = mark_all(&mut grid, &["cat", "cow", "dog"]).unwrap_err();
        assert!(matches!(err, SolverError::WordNotFound { ref word } if word == "COW"));
        // only CAT made it in before the failure
        assert_eq!(grid.used_count(), 3);
    }

    #[test]
    fn test_mark_all_empty_list() {
        let mut grid = GridIndex::new(&["ABC"]).unwrap();
        let words: [&str; 0] = [];
        assert!(mark_all(&mut grid, &words).unwrap().is_empty());
        assert_eq!(grid.used_count(), 0);
    }

    #[test]
    fn test_empty_word_marks_nothing() {
        let mut grid = GridIndex::new(&["ABC"]).unwrap();
        let placement = mark_word(&mut grid, "").unwrap();
        assert_eq!(placement.direction, Direction::Horizontal);
        assert_eq!(grid.used_count(), 0);
    }

    #[test]
    fn test_search_ignores_usage_map() {
        // the second CAT lookup finds the same, already-used cells
        let mut grid = GridIndex::new(&["CATXX"]).unwrap();
        let first = mark_word(&mut grid, "CAT").unwrap();
        let second = mark_word(&mut grid, "CAT").unwrap();
        assert_eq!(first, second);
        assert_eq!(grid.used_count(), 3);
    }
}
