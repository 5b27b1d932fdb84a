use crate::input_list::InputList;
use crate::log::init_logger;
use crate::solver::{solve_word_grid, SolverError};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G001", "S002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // For MalformedGrid, report the nested GridError instead
        match &e {
            SolverError::MalformedGrid(ge) => WasmError {
                code: ge.code().to_string(),
                message: ge.to_string(),
                description: ge.description().to_string(),
                details: ge.details().to_string(),
                help: ge.help().map(str::to_string),
            },
            SolverError::WordNotFound { .. } => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Force compilation of every static regex so a broken pattern fails at startup
/// rather than on the first call.
///
/// ## IMPORTANT: Adding a new regex?
/// If you add a new `LazyLock<Regex>` anywhere in the codebase, you MUST add it here.
fn validate_internal_regexes() {
    let _ = &*crate::input_list::NON_LETTERS_RE;
    log::debug!("Internal regex patterns validated successfully");
}

/// Initialize logging and validation with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    validate_internal_regexes();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

fn from_string_array(value: JsValue, name: &str) -> Result<Vec<String>, WasmError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("{name} must be string[]: {e}"),
        description: "Invalid input format".to_string(),
        details: format!("The {name} parameter must be a JavaScript array of strings."),
        help: Some("Ensure you're passing a valid string array, e.g., ['CATDOG', 'XXXXXX']".to_string()),
    })
}

/// JS entry: (puzzle: string[], words: string[], min_length: number)
/// returns the serialized `Report`
///
/// Both arrays are expected to be cleaned already (see [`parse_input_list`]).
#[wasm_bindgen]
pub fn solve_word_grid_wasm(
    puzzle: JsValue,
    words: JsValue,
    min_length: usize,
) -> Result<JsValue, JsValue> {
    let puzzle = from_string_array(puzzle, "puzzle")?;
    let words = from_string_array(words, "words")?;

    let report = solve_word_grid(&puzzle, &words, min_length).map_err(WasmError::from)?;

    to_value(&report).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The solver report could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Clean a newline-separated word list or puzzle.
///
/// Non-letters are removed and blank lines dropped; returns the lines as `string[]`.
///
/// # Errors
/// Returns a `JsValue` error if the result cannot be serialized.
#[wasm_bindgen]
pub fn parse_input_list(text: &str) -> Result<JsValue, JsValue> {
    let list = InputList::parse_from_str(text);
    to_value(&list.lines).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize input list".to_string(),
            details: "The cleaned lines could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
