//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `GridError` and `SolverError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordgrid::errors::GridError;
use wordgrid::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `GridError` variants for documentation
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::EmptyGrid,
        GridError::RaggedRow { row: 4, expected: 12, found: 11 },
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::MalformedGrid(GridError::EmptyGrid),
        SolverError::WordNotFound { word: "AARDVARK".to_string() },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001–S002)](#solver-errors)");
    println!("- [Grid Errors (G001–G002)](#grid-errors)\n");

    println!("## Solver Errors\n");
    println!("Top-level errors from the solver. These wrap grid errors or report a word that could not be placed.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Grid Errors\n");
    println!("Errors that occur when the puzzle lines are turned into a grid.\n");
    generate_error_docs!(all_grid_error_variants());
}
