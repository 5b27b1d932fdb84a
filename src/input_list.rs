//! `input_list` — load and clean the word list and the puzzle lines.
//!
//! Both inputs share one text format: one item per line, where anything that isn't an
//! ASCII letter is noise (numbering, separators, stray whitespace). This module strips
//! that noise and drops the lines left empty. Order and duplicates are kept because the
//! solver places words in input order and each puzzle line is a grid row.
//!
//! Like the rest of the crate this is **WASM-friendly**:
//! - `parse_from_str(...)` works everywhere, including WASM.
//! - `load_from_path(...)` is **native-only** and reads the text from a file first.

use fancy_regex::Regex;
use std::sync::LazyLock;

/// Matches every character that is not an ASCII letter.
///
/// NB: This regex is validated at WASM startup in `wasm::validate_internal_regexes()`.
/// If a new `LazyLock<Regex>` is added, add it there too!
pub(crate) static NON_LETTERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^A-Za-z]")
        .unwrap_or_else(|e| panic!("BUG: Failed to compile NON_LETTERS_RE regex pattern: {e}."))
});

/// Cleaned lines, ready to be used as a word list or as puzzle rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputList {
    /// Letters-only lines, e.g. `["CATDOG", "XXXXXX"]`.
    pub lines: Vec<String>,
}

impl InputList {
    /// Parse raw text already in memory.
    ///
    /// 1. Splits the input into lines and trims each one.
    /// 2. Removes every character outside `A-Z`/`a-z`.
    /// 3. Drops lines that end up empty.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> InputList {
        let lines = contents
            .lines()
            .map(|raw_line| NON_LETTERS_RE.replace_all(raw_line.trim(), "").into_owned())
            .filter(|line| !line.is_empty())
            .collect();

        InputList { lines }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Example:
    /// `let words = InputList::load_from_path("data/words.txt")?;`
    /// `println!("Loaded {} words", words.lines.len());`
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<InputList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read input list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
