// Reusable library API — visible to both CLI and WASM builds
pub mod errors;
pub mod grid;
pub mod input_list;
pub mod leftover;
pub mod log;
pub mod marker;
pub mod solver;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
