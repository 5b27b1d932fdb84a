use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordgrid::input_list::InputList;
use wordgrid::solver;

/// Word-search grid solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    words: String,

    /// Path to the puzzle (one grid row per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/puzzle.txt")
    )]
    puzzle: String,

    /// Minimum length of a leftover run to report as a candidate solution word
    #[arg(short = 'm', long, default_value_t = solver::DEFAULT_MIN_LENGTH)]
    min_length: usize,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Parse CLI arguments with Clap.
/// 2. Load and clean the word list and the puzzle.
/// 3. Solve, then print the found words, the leftover letters and the candidates.
///
/// Returns `Ok(())` on success or an error (missing file, malformed grid,
/// word not found) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let words = InputList::load_from_path(&cli.words)?;
    let puzzle = InputList::load_from_path(&cli.puzzle)?;
    log::info!(
        "Loaded {} words and {} puzzle lines in {:.3}s",
        words.len(),
        puzzle.len(),
        t_load.elapsed().as_secs_f64()
    );

    let report = solver::solve_word_grid(&puzzle.lines, &words.lines, cli.min_length)?;

    println!("Found words: {:?}", report.found_words);
    println!("Remaining letters for each puzzle line: {:?}", report.remaining_letters);
    println!(
        "Candidate solution words of length >= {}: {:?}",
        cli.min_length,
        report.candidates.as_lists()
    );

    Ok(())
}
