//! End-to-end tests: structure and word files in, filled grid out.

use crossword_csp::crossword::render::{letter_grid, render_listing, render_text, save};
use crossword_csp::crossword::structure::Crossword;
use crossword_csp::crossword::words;
use crossword_csp::csp::backtracking::Backtracking;
use crossword_csp::csp::consistency::is_solution;
use crossword_csp::csp::geometry::Geometry;
use crossword_csp::csp::solver::{DynamicConfig, Solver};
use crossword_csp::csp::value_ordering::ValueOrderingType;
use crossword_csp::csp::variable_selection::VariableSelectionType;
use crossword_csp::csp::word::Word;
use std::path::PathBuf;
use std::time::Instant;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_puzzle() -> (Crossword, Vec<Word>) {
    let crossword = Crossword::parse_file(fixture("structure0.txt")).unwrap();
    let vocabulary = words::parse_file(fixture("words0.txt")).unwrap();
    (crossword, vocabulary)
}

#[test]
fn test_fills_structure_from_files() {
    let (crossword, vocabulary) = load_puzzle();
    assert_eq!(crossword.variables().len(), 4);
    assert_eq!(vocabulary.len(), 10);

    let mut solver = Backtracking::<_>::new(&crossword, &vocabulary).unwrap();
    let assignment = solver.solve().unwrap();

    assert!(is_solution(&crossword, &assignment));
    assert_eq!(
        render_text(&crossword, &assignment),
        "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n"
    );
    assert_eq!(
        render_listing(&crossword, &assignment),
        "0,1 across 3: SIX\n0,1 down 5: SEVEN\n1,4 down 4: FIVE\n4,1 across 4: NINE\n"
    );

    let stats = solver.stats();
    assert!(stats.node_pruned > 0);
    assert!(!stats.timed_out);
}

#[test]
fn test_every_heuristic_finds_the_unique_fill() {
    let (crossword, vocabulary) = load_puzzle();
    let expected = {
        let mut solver = Backtracking::<_>::new(&crossword, &vocabulary).unwrap();
        letter_grid(&crossword, &solver.solve().unwrap())
    };

    for selection in [
        VariableSelectionType::Mrv,
        VariableSelectionType::Fixed,
        VariableSelectionType::Random,
    ] {
        for ordering in [ValueOrderingType::Lcv, ValueOrderingType::Domain] {
            let mut solver = Backtracking::<_, DynamicConfig>::from_parts(
                &crossword,
                &vocabulary,
                selection.to_impl(Some(3)),
                ordering.to_impl(),
            )
            .unwrap();
            let assignment = solver.solve().unwrap();
            assert_eq!(
                letter_grid(&crossword, &assignment),
                expected,
                "{selection} / {ordering}"
            );
        }
    }
}

#[test]
fn test_missing_words_yield_no_solution() {
    let crossword = Crossword::parse_file(fixture("structure0.txt")).unwrap();
    let vocabulary: Vec<Word> = ["one", "two", "three", "four"]
        .into_iter()
        .map(|w| Word::from(w.to_uppercase()))
        .collect();

    let mut solver = Backtracking::<_>::new(&crossword, &vocabulary).unwrap();
    assert!(solver.solve().is_none());
    assert!(!solver.stats().timed_out);
}

#[test]
fn test_deadline_in_the_past_times_out() {
    let (crossword, vocabulary) = load_puzzle();
    let mut solver = Backtracking::<_>::new(&crossword, &vocabulary)
        .unwrap()
        .with_deadline(Instant::now());

    assert!(solver.solve().is_none());
    assert!(solver.stats().timed_out);
}

#[test]
fn test_inline_structure_and_svg_output() {
    let crossword: Crossword = "___\n_##\n_##".parse().unwrap();
    let vocabulary = words::parse_words("cat\ncow\ndog\n".as_bytes()).unwrap();

    let mut solver = Backtracking::<_>::new(&crossword, &vocabulary).unwrap();
    let assignment = solver.solve().unwrap();
    assert!(is_solution(&crossword, &assignment));

    let dir = std::env::temp_dir().join(format!("crossword-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("grid.svg");
    save(&crossword, &assignment, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<text").count(), 5);
    std::fs::remove_dir_all(&dir).unwrap();
}
