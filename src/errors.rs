//! Error types for building a puzzle grid, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - G001: `EmptyGrid` (Puzzle has no rows or no letters)
//! - G002: `RaggedRow` (Puzzle row length differs from the first row)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::GridError;
//! use wordgrid::grid::GridIndex;
//!
//! match GridIndex::new(&["ABC", "DE"]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, GridError::RaggedRow { row: 1, .. }));
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

/// Errors detected while turning puzzle lines into a [`crate::grid::GridIndex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Puzzle grid is empty")]
    EmptyGrid,

    #[error("Puzzle row {row} has {found} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "G001",
            GridError::RaggedRow { .. } => "G002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "Puzzle has no rows or no letters",
            GridError::RaggedRow { .. } => "Puzzle row length differs from the first row",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "After stripping non-letters and dropping blank lines, the puzzle contained nothing to search. The width of the grid is taken from the first row, so that row must contain at least one letter.",
            GridError::RaggedRow { .. } => "Every puzzle row must contain the same number of letters as the first row. Columns and diagonals are read across rows, so a short or long row would leave gaps in them.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::EmptyGrid => Some("Check that the puzzle file exists and contains one row of letters per line"),
            GridError::RaggedRow { .. } => Some("Make sure every puzzle line has the same number of letters (punctuation and digits are ignored)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
