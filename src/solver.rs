//! The solving pipeline: build the grid, place every word, then report the leftovers.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `MalformedGrid` (Puzzle grid could not be built (wraps [`GridError`]))
//! - S002: `WordNotFound` (A target word is not in the grid)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//! Nothing is retried and no partial report is returned: a puzzle and its word list
//! either fit together or they don't.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordgrid::solver;
//!
//! let puzzle = ["CAT0DOG", "XXX0XXX"];
//! let words = ["cat", "dog"];
//! // non-letters are the loader's job; here we strip them by hand
//! let rows: Vec<String> = puzzle.iter().map(|r| r.replace('0', "")).collect();
//!
//! let report = solver::solve_word_grid(&rows, &words, 3)?;
//! assert_eq!(report.remaining_letters, vec!["", "XXXXXX"]);
//! assert_eq!(report.candidates.horizontal, vec!["XXXXXX", "XXXXXX"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use wordgrid::solver::{self, SolverError};
//!
//! match solver::solve_word_grid(&["ABC"], &["cow"], 15) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         assert!(matches!(e, SolverError::WordNotFound { .. }));
//!         eprintln!("{}", e.display_detailed());
//!     }
//! }
//! ```

use crate::errors::GridError;
use crate::grid::GridIndex;
use crate::leftover::{self, CandidateWords};
use crate::marker::{self, Placement};
use instant::Instant;
use log::info;
use serde::Serialize;

/// Bonus candidates shorter than this are not reported unless configured otherwise.
pub const DEFAULT_MIN_LENGTH: usize = 15;

/// Everything a successful run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The target words, uppercased, in input order.
    pub found_words: Vec<String>,
    /// Where each target word was placed (parallel to `found_words`).
    pub placements: Vec<Placement>,
    /// Unused letters of each row, compacted.
    pub remaining_letters: Vec<String>,
    /// Runs of unused letters at least `min_length` long.
    pub candidates: CandidateWords,
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The puzzle lines do not form a rectangular, non-empty grid.
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] GridError),

    /// A word could not be located in any direction.
    #[error("Word not found: {word}")]
    WordNotFound { word: String },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::MalformedGrid(_) => "S001",
            SolverError::WordNotFound { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::MalformedGrid(_) => "Puzzle grid could not be built",
            SolverError::WordNotFound { .. } => "A target word is not in the grid",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::MalformedGrid(_) => "The puzzle lines could not be turned into a grid. This wraps an underlying GridError (see Grid Errors section for specific error codes).",
            SolverError::WordNotFound { .. } => "The word was searched for forwards and backwards along every row, column and diagonal, and appears nowhere. Solving stops at the first such word; no partial report is produced.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::WordNotFound { .. } => Some("Check the word list and the puzzle for typos; both must come from the same puzzle"),
            SolverError::MalformedGrid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::MalformedGrid(ge) => {
                // delegate to GridError's detailed display
                format!("{}\n  caused by: {}", self.code(), ge.display_detailed())
            }
            SolverError::WordNotFound { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Solve a word-search puzzle.
///
/// 1. Build a [`GridIndex`] from `puzzle_lines`.
/// 2. Place each of `words` in order with [`marker::mark_all`].
/// 3. Collect the leftover letters per row and the bonus candidates of at least
///    `min_length` letters.
///
/// # Errors
/// Returns a [`SolverError`] if:
/// - the puzzle is empty or its rows differ in length (`MalformedGrid`),
/// - or any word cannot be placed (`WordNotFound`).
pub fn solve_word_grid<P, W>(
    puzzle_lines: &[P],
    words: &[W],
    min_length: usize,
) -> Result<Report, SolverError>
where
    P: AsRef<str>,
    W: AsRef<str>,
{
    let t_start = Instant::now();

    let mut grid = GridIndex::new(puzzle_lines)?;
    info!(
        "Searching {} words in a {}x{} grid",
        words.len(),
        grid.row_count(),
        grid.width()
    );

    let placements = marker::mark_all(&mut grid, words)?;

    debug_assert!(
        grid.used_count() <= grid.row_count() * grid.width(),
        "used cells cannot exceed the grid size"
    );

    let remaining_letters = leftover::remaining_letters(&grid);
    let candidates = leftover::candidate_words(&grid, min_length);

    info!(
        "Placed {} words ({} cells used) in {:.3}s",
        placements.len(),
        grid.used_count(),
        t_start.elapsed().as_secs_f64()
    );

    Ok(Report {
        found_words: placements.iter().map(|p| p.word.clone()).collect(),
        placements,
        remaining_letters,
        candidates,
    })
}
