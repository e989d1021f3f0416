//! # crossword
//!
//! `crossword` fills a crossword grid with words from a word list. The grid
//! is treated as a constraint satisfaction problem: every slot takes a word
//! of its length, crossing slots agree on their shared letter, and no word
//! is used twice.
//!
//! Solving runs in three phases:
//! 1.  **Node consistency**: drop words of the wrong length from each slot.
//! 2.  **Arc consistency (AC-3)**: drop words that no crossing word can agree with.
//! 3.  **Backtracking search**: fill slots one at a time, choosing the slot with
//!     the fewest remaining words and trying its least constraining words first.
//!
//! ## Usage
//!
//! ### General Syntax
//!
//! ```sh
//! crossword [OPTIONS] <STRUCTURE> <WORDS> [OUTPUT]
//! crossword [SUBCOMMAND] [OPTIONS]
//! ```
//!
//! A structure file has one grid row per line, `_` for open cells and any
//! other character (conventionally `#`) for blocked cells. A word file has one
//! word per line. If `OUTPUT` ends in `.svg` the filled grid is drawn as an
//! image, otherwise it is written as text.
//!
//! ### Subcommands
//!
//! 1.  **`file`**: Fill a structure file.
//!     ```sh
//!     crossword file --structure data/structure1.txt --words data/words1.txt [--output out.svg]
//!     ```
//!
//! 2.  **`text`**: Fill a structure given inline.
//!     ```sh
//!     crossword text --grid "#___#\n#_##_\n#_##_\n#_##_\n#____" --words data/words1.txt
//!     ```
//!
//! 3.  **`dir`**: Fill every `.txt` structure under a directory.
//!     ```sh
//!     crossword dir --path puzzles/ --words data/words2.txt
//!     ```
//!
//! 4.  **`completions`**: Print a shell completion script.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Enable debug logging (default: `false`). `RUST_LOG` overrides it.
//! -   `-v, --verify [<BOOL>]`: Check any fill found (default: `true`).
//! -   `-s, --stats [<BOOL>]`: Print problem and search statistics (default: `true`).
//! -   `-p, --print-solution`: List the word chosen for each slot (default: `false`).
//! -   `--variable-selection <mrv|fixed|random>`: Slot selection heuristic (default: `mrv`).
//! -   `--value-ordering <lcv|domain>`: Word ordering heuristic (default: `lcv`).
//! -   `--seed <N>`: Seed for the `random` slot selection.
//! -   `--timeout-ms <N>`: Give up searching after `N` milliseconds.
//!
//! Errors are printed to stderr and the process exits with status 1. A puzzle
//! without a fill is not an error: it prints `No solution.`

use clap::{CommandFactory, Parser};
use command_line::cli::{Cli, Commands, solve_dir, solve_file, solve_text};
use crossword_csp::crossword::error::CrosswordError;
use crossword_csp::log::init_logger;

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better performance
/// and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point.
///
/// Parses command-line arguments, initialises logging, and dispatches to the
/// appropriate command handler.
fn main() {
    let cli = Cli::parse();

    let debug = match &cli.command {
        Some(
            Commands::File { common, .. }
            | Commands::Text { common, .. }
            | Commands::Dir { common, .. },
        ) => common.debug,
        Some(Commands::Completions { .. }) | None => cli.common.debug,
    };
    init_logger(debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CrosswordError> {
    match cli.command {
        Some(Commands::File {
            structure,
            words,
            output,
            common,
        }) => solve_file(&structure, &words, output.as_deref(), &common),

        Some(Commands::Text {
            grid,
            words,
            common,
        }) => solve_text(&grid, &words, &common),

        Some(Commands::Dir {
            path,
            words,
            common,
        }) => solve_dir(&path, &words, &common),

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }

        None => {
            let (Some(structure), Some(words)) = (cli.structure, cli.words) else {
                return Err(CrosswordError::MissingInput);
            };
            solve_file(&structure, &words, cli.output.as_deref(), &cli.common)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_inputs_is_an_error() {
        let cli = Cli::try_parse_from(["crossword"]).unwrap();
        assert!(matches!(run(cli), Err(CrosswordError::MissingInput)));

        let cli = Cli::try_parse_from(["crossword", "grid.txt"]).unwrap();
        assert!(matches!(run(cli), Err(CrosswordError::MissingInput)));
    }
}
