#![allow(clippy::cast_precision_loss)]

use crossword_csp::crossword::error::CrosswordError;
use crossword_csp::crossword::render::{render_listing, render_text, save};
use crossword_csp::crossword::structure::Crossword;
use crossword_csp::crossword::words;
use crossword_csp::csp::assignment::Assignment;
use crossword_csp::csp::backtracking::Backtracking;
use crossword_csp::csp::consistency::is_solution;
use crossword_csp::csp::geometry::Geometry;
use crossword_csp::csp::solver::{DynamicConfig, SolutionStats, Solver};
use crossword_csp::csp::value_ordering::ValueOrderingType;
use crossword_csp::csp::variable_selection::VariableSelectionType;
use crossword_csp::csp::word::Word;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the crossword generator.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "crossword",
    version,
    about = "Fill a crossword grid from a word list",
    args_conflicts_with_subcommands = true
)]
pub(crate) struct Cli {
    /// Structure file: one row per line, `_` for open cells.
    pub structure: Option<PathBuf>,

    /// Word list: one word per line.
    pub words: Option<PathBuf>,

    /// Where to save the filled grid (`.svg` for an image, anything else for text).
    pub output: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Fill a structure read from a file.
    File {
        /// Path to the structure file.
        #[arg(long)]
        structure: PathBuf,

        /// Path to the word list.
        #[arg(long)]
        words: PathBuf,

        /// Where to save the filled grid.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Fill a structure given inline.
    /// Rows are separated by newlines or a literal `\n` (e.g. "#___#\n#_##_").
    Text {
        /// The grid rows.
        #[arg(short, long)]
        grid: String,

        /// Path to the word list.
        #[arg(long)]
        words: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Fill every `.txt` structure under a directory with one word list.
    Dir {
        /// Directory to search recursively.
        #[arg(long)]
        path: PathBuf,

        /// Path to the word list.
        #[arg(long)]
        words: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the solving process.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check any fill found is complete and breaks no constraint.
    #[arg(short, long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub(crate) verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(short, long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub(crate) stats: bool,

    /// Print the word chosen for each slot.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,

    /// How the next slot to fill is chosen.
    #[arg(long, default_value_t = VariableSelectionType::Mrv)]
    pub(crate) variable_selection: VariableSelectionType,

    /// How a slot's candidate words are ordered.
    #[arg(long, default_value_t = ValueOrderingType::Lcv)]
    pub(crate) value_ordering: ValueOrderingType,

    /// Seed for `--variable-selection random`.
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Give up searching after this many milliseconds.
    #[arg(long)]
    pub(crate) timeout_ms: Option<u64>,
}

/// Builds a solver with the heuristics and deadline from `common`.
///
/// # Errors
///
/// If the crossword's geometry fails validation.
pub(crate) fn get_solver<'g>(
    common: &CommonOptions,
    crossword: &'g Crossword,
    vocabulary: &[Word],
) -> Result<Backtracking<'g, Crossword, DynamicConfig>, CrosswordError> {
    let solver = Backtracking::<_, DynamicConfig>::from_parts(
        crossword,
        vocabulary,
        common.variable_selection.to_impl(common.seed),
        common.value_ordering.to_impl(),
    )?;

    Ok(match common.timeout_ms {
        Some(ms) => solver.with_deadline(Instant::now() + Duration::from_millis(ms)),
        None => solver,
    })
}

/// Solves one crossword.
///
/// # Returns
/// The fill if one was found, the time spent solving, and the solver's counters.
///
/// # Errors
///
/// If the crossword's geometry fails validation.
pub(crate) fn solve(
    crossword: &Crossword,
    vocabulary: &[Word],
    label: Option<&Path>,
    common: &CommonOptions,
) -> Result<(Option<Assignment>, Duration, SolutionStats), CrosswordError> {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    debug!("Structure:\n{crossword}");
    debug!(
        "{} slots, {} crossings, {} words",
        crossword.variables().len(),
        crossword.overlap_map().len() / 2,
        vocabulary.len()
    );
    debug!(
        "Heuristics: {} / {}",
        common.variable_selection, common.value_ordering
    );

    let time = Instant::now();

    let mut solver = get_solver(common, crossword, vocabulary)?;
    let sol = solver.solve();

    let elapsed = time.elapsed();
    debug!("Time: {elapsed:?}");

    Ok((sol, elapsed, solver.stats()))
}

/// Solves a crossword and reports the outcome: verification, statistics,
/// the filled grid, and optionally a saved copy.
///
/// # Errors
///
/// If the geometry is invalid or the output file cannot be written.
pub(crate) fn solve_and_report(
    crossword: &Crossword,
    vocabulary: &[Word],
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
    output: Option<&Path>,
) -> Result<(), CrosswordError> {
    let (sol, elapsed, solver_stats) = solve(crossword, vocabulary, label, common)?;

    let (allocated_mib, resident_mib) = memory_usage();

    if common.verify {
        verify_solution(crossword, sol.as_ref());
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            crossword,
            vocabulary.len(),
            &solver_stats,
            allocated_mib,
            resident_mib,
        );
    }

    let Some(assignment) = sol else {
        if solver_stats.timed_out {
            warn!("Search stopped at the deadline");
        }
        println!("No solution.");
        return Ok(());
    };

    if common.print_solution {
        print!("{}", render_listing(crossword, &assignment));
    }
    print!("{}", render_text(crossword, &assignment));

    if let Some(path) = output {
        save(crossword, &assignment, path)?;
        info!("Saved to {}", path.display());
    }

    Ok(())
}

/// Reads and solves a structure file.
///
/// # Errors
///
/// If either file cannot be read, the structure is malformed, or the output cannot be written.
pub(crate) fn solve_file(
    structure: &Path,
    words_path: &Path,
    output: Option<&Path>,
    common: &CommonOptions,
) -> Result<(), CrosswordError> {
    let time = Instant::now();
    let crossword = Crossword::parse_file(structure)?;
    let vocabulary = words::parse_file(words_path)?;
    let parse_time = time.elapsed();

    solve_and_report(
        &crossword,
        &vocabulary,
        common,
        Some(structure),
        parse_time,
        output,
    )
}

/// Solves a structure given as text.
///
/// # Errors
///
/// If the word list cannot be read or the structure is malformed.
pub(crate) fn solve_text(
    grid: &str,
    words_path: &Path,
    common: &CommonOptions,
) -> Result<(), CrosswordError> {
    let time = Instant::now();
    let crossword = Crossword::parse(&grid.replace("\\n", "\n"))?;
    let vocabulary = words::parse_file(words_path)?;
    let parse_time = time.elapsed();

    solve_and_report(&crossword, &vocabulary, common, None, parse_time, None)
}

/// Solves a directory of structure files.
/// Every `.txt` file under `path` other than the word list itself is treated
/// as a structure. Entries that cannot be read and files that fail to parse
/// are reported and skipped.
///
/// # Errors
///
/// If `path` is not a directory or the word list cannot be read.
pub(crate) fn solve_dir(
    path: &Path,
    words_path: &Path,
    common: &CommonOptions,
) -> Result<(), CrosswordError> {
    if !path.is_dir() {
        return Err(CrosswordError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotADirectory),
        });
    }

    let vocabulary = words::parse_file(words_path)?;
    let words_canonical = std::fs::canonicalize(words_path).ok();

    for entry in walkdir::WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        let file_path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if file_path.extension().is_none_or(|ext| ext != "txt") {
            debug!("Skipping non-structure file: {}", file_path.display());
            continue;
        }

        if words_canonical.is_some() && std::fs::canonicalize(file_path).ok() == words_canonical {
            continue;
        }

        let time = Instant::now();
        let crossword = match Crossword::parse_file(file_path) {
            Ok(crossword) => crossword,
            Err(e) => {
                warn!("Skipping {}: {e}", file_path.display());
                continue;
            }
        };
        let parse_time = time.elapsed();

        solve_and_report(
            &crossword,
            &vocabulary,
            common,
            Some(file_path),
            parse_time,
            None,
        )?;
    }

    Ok(())
}

/// Checks a fill returned by the solver.
///
/// Prints whether the verification was successful. If verification fails, it panics.
/// If `sol` is `None`, there is nothing to check.
pub(crate) fn verify_solution(crossword: &Crossword, sol: Option<&Assignment>) {
    if let Some(assignment) = sol {
        let ok = is_solution(crossword, assignment);
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    }
}

/// Reads jemalloc's allocated and resident byte counts, in MiB.
fn memory_usage() -> (f64, f64) {
    let _ = epoch::advance();

    let to_mib = |bytes: Result<usize, tikv_jemalloc_ctl::Error>| {
        bytes.map_or(0.0, |b| b as f64 / (1024.0 * 1024.0))
    };

    (
        to_mib(stats::allocated::mib().and_then(|m| m.read())),
        to_mib(stats::resident::mib().and_then(|m| m.read())),
    )
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
///
/// # Arguments
/// * `parse_time` - Duration spent parsing the input.
/// * `elapsed` - Duration spent by the solver.
/// * `crossword` - The grid that was solved.
/// * `vocabulary` - Number of distinct words available.
/// * `s` - `SolutionStats` collected by the solver.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    crossword: &Crossword,
    vocabulary: usize,
    s: &SolutionStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line(
        "Grid size",
        format!("{}x{}", crossword.height(), crossword.width()),
    );
    stat_line("Slots", crossword.variables().len());
    stat_line("Crossings", crossword.overlap_map().len() / 2);
    stat_line("Words", vocabulary);

    println!("========================[ Search Statistics ]========================");
    stat_line("Words pruned (length)", s.node_pruned);
    stat_line("Words pruned (arcs)", s.arc_pruned);
    stat_line_with_rate("Arcs processed", s.arcs_processed, elapsed_secs);
    stat_line_with_rate("Revisions", s.revisions, elapsed_secs);
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line_with_rate("Checks", s.consistency_checks, elapsed_secs);
    stat_line("Timed out", s.timed_out);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_form() {
        let cli = Cli::try_parse_from(["crossword", "grid.txt", "words.txt", "out.svg"]).unwrap();
        assert_eq!(cli.structure, Some(PathBuf::from("grid.txt")));
        assert_eq!(cli.words, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.svg")));
        assert!(cli.command.is_none());
        assert!(cli.common.verify);
        assert!(cli.common.stats);
        assert_eq!(cli.common.variable_selection, VariableSelectionType::Mrv);
        assert_eq!(cli.common.value_ordering, ValueOrderingType::Lcv);
    }

    #[test]
    fn test_file_subcommand_options() {
        let cli = Cli::try_parse_from([
            "crossword",
            "file",
            "--structure",
            "grid.txt",
            "--words",
            "words.txt",
            "--variable-selection",
            "random",
            "--seed",
            "7",
            "--value-ordering",
            "domain",
            "--stats",
            "false",
            "--timeout-ms",
            "250",
        ])
        .unwrap();

        let Some(Commands::File {
            structure,
            output,
            common,
            ..
        }) = cli.command
        else {
            panic!("expected file subcommand");
        };
        assert_eq!(structure, PathBuf::from("grid.txt"));
        assert!(output.is_none());
        assert_eq!(common.variable_selection, VariableSelectionType::Random);
        assert_eq!(common.value_ordering, ValueOrderingType::Domain);
        assert_eq!(common.seed, Some(7));
        assert_eq!(common.timeout_ms, Some(250));
        assert!(!common.stats);
        assert!(common.verify);
    }

    #[test]
    fn test_get_solver_applies_options() {
        let crossword = Crossword::parse("___\n_##\n_##").unwrap();
        let vocabulary = vec![Word::from("CAT"), Word::from("COW")];
        let common = CommonOptions {
            variable_selection: VariableSelectionType::Fixed,
            value_ordering: ValueOrderingType::Domain,
            ..CommonOptions::default()
        };

        let mut solver = get_solver(&common, &crossword, &vocabulary).unwrap();
        let assignment = solver.solve().unwrap();
        assert!(is_solution(&crossword, &assignment));
        assert!(!solver.stats().timed_out);
    }

    #[test]
    fn test_solve_dir_rejects_file() {
        let result = solve_dir(
            Path::new("Cargo.toml"),
            Path::new("words.txt"),
            &CommonOptions::default(),
        );
        assert!(matches!(result, Err(CrosswordError::Io { .. })));
    }

    #[test]
    fn test_solve_dir_skips_bad_structures() {
        let dir = std::env::temp_dir().join(format!("crossword-dir-{}", std::process::id()));
        let nested = dir.join("nested");
        std::fs::create_dir_all(&nested).unwrap();

        let words_path = dir.join("words.txt");
        std::fs::write(&words_path, "cat\ncow\n").unwrap();
        std::fs::write(dir.join("corner.txt"), "___\n_##\n_##\n").unwrap();
        std::fs::write(nested.join("empty.txt"), "").unwrap();
        std::fs::write(nested.join("notes.md"), "not a grid").unwrap();

        let common = CommonOptions {
            verify: true,
            ..CommonOptions::default()
        };
        let result = solve_dir(&dir, &words_path, &common);
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(result.is_ok());
    }

    #[test]
    fn test_memory_usage_reads_jemalloc() {
        let buffer = vec![0u8; 1 << 20];
        let (allocated, resident) = memory_usage();
        assert!(allocated > 0.0);
        assert!(resident >= 0.0);
        drop(buffer);
    }
}
