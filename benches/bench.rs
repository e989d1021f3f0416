use criterion::{Criterion, criterion_group, criterion_main};
use crossword_csp::crossword::structure::Crossword;
use crossword_csp::csp::backtracking::Backtracking;
use crossword_csp::csp::geometry::Geometry;
use crossword_csp::csp::solver::{Solver, SolverConfig};
use crossword_csp::csp::value_ordering::{DomainOrder, LeastConstrainingValue, ValueOrdering};
use crossword_csp::csp::variable_selection::{
    FixedOrder, MinimumRemainingValues, RandomOrder, VariableSelection,
};
use crossword_csp::csp::word::Word;
use rustc_hash::FxHashSet;
use std::fmt::Debug;
use std::hint::black_box;
use std::marker::PhantomData;
use std::time::Duration;

const STRUCTURE: &str = "\
_____#_____
_#_#___#_#_
___________
_#_#_#_#_#_
_____#_____
##_#___#_##
_____#_____
_#_#_#_#_#_
___________
_#_#___#_#_
_____#_____
";

#[derive(Debug, Clone)]
struct HeuristicConfig<V, O>(PhantomData<(V, O)>);

impl<V, O> SolverConfig for HeuristicConfig<V, O>
where
    V: VariableSelection + Debug + Clone + Default,
    O: ValueOrdering + Debug + Clone + Default,
{
    type VariableSelector = V;
    type ValueOrder = O;
}

fn random_word(rng: &mut fastrand::Rng, length: usize) -> String {
    (0..length).map(|_| rng.uppercase()).collect()
}

/// A word list that is guaranteed to contain a fill: letters are drawn for
/// every open cell, each slot's word is read off, and distractors of every
/// slot length are mixed in.
fn generated_vocabulary(crossword: &Crossword, seed: u64, distractors: usize) -> Vec<Word> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let letters: Vec<Vec<char>> = (0..crossword.height())
        .map(|_| (0..crossword.width()).map(|_| rng.uppercase()).collect())
        .collect();

    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut lengths = Vec::new();

    for var in crossword.variables() {
        let word: String = var.cells().map(|(r, c)| letters[r][c]).collect();
        lengths.push(var.length);
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    for i in 0..distractors {
        let word = random_word(&mut rng, lengths[i % lengths.len()]);
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    rng.shuffle(&mut words);
    words.into_iter().map(Word::from).collect()
}

fn solve_with<Config: SolverConfig>(crossword: &Crossword, vocabulary: &[Word]) {
    let mut solver = Backtracking::<_, Config>::new(crossword, vocabulary).unwrap();
    black_box(solver.solve());
}

fn bench_heuristics(c: &mut Criterion) {
    let crossword = Crossword::parse(STRUCTURE).unwrap();
    let vocabulary = generated_vocabulary(&crossword, 0x00C0_FFEE, 2_000);

    let mut group = c.benchmark_group("generated grid - variable selection");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("MRV + degree", |b| {
        b.iter(|| {
            solve_with::<HeuristicConfig<MinimumRemainingValues, LeastConstrainingValue>>(
                &crossword,
                &vocabulary,
            );
        });
    });

    group.bench_function("Fixed Order", |b| {
        b.iter(|| {
            solve_with::<HeuristicConfig<FixedOrder, LeastConstrainingValue>>(
                &crossword,
                &vocabulary,
            );
        });
    });

    group.bench_function("Random Order", |b| {
        b.iter(|| {
            solve_with::<HeuristicConfig<RandomOrder, LeastConstrainingValue>>(
                &crossword,
                &vocabulary,
            );
        });
    });

    group.finish();

    let mut group = c.benchmark_group("generated grid - value ordering");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Least Constraining Value", |b| {
        b.iter(|| {
            solve_with::<HeuristicConfig<MinimumRemainingValues, LeastConstrainingValue>>(
                &crossword,
                &vocabulary,
            );
        });
    });

    group.bench_function("Domain Order", |b| {
        b.iter(|| {
            solve_with::<HeuristicConfig<MinimumRemainingValues, DomainOrder>>(
                &crossword,
                &vocabulary,
            );
        });
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse structure", |b| {
        b.iter(|| black_box(Crossword::parse(black_box(STRUCTURE)).unwrap()));
    });
}

criterion_group!(benches, bench_heuristics, bench_parse);
criterion_main!(benches);
