use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use sudoku_csp::csp::grid::Grid;
use sudoku_csp::csp::solver::Solver;
use sudoku_csp::csp::variable_selection::select_variable;

/// The three puzzle instances the solver was originally exercised with.
const INSTANCES: [&str; 3] = [
    "001002000005006030460005000000104000600800143000090508800049050100320000009000300",
    "005010000002004030109000206200030000040000700500007001000603000060100000000070050",
    "670000000025000000090560200300080900000000801000470000008600090000000010106050070",
];

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for (i, line) in INSTANCES.iter().enumerate() {
        let puzzle: Grid = line.parse().expect("bench instance parses");
        group.bench_function(format!("instance {}", i + 1), |b| {
            b.iter(|| {
                let mut solver = Solver::new(puzzle.clone());
                black_box(solver.solve());
            });
        });
    }
    group.finish();
}

fn bench_empty_board(c: &mut Criterion) {
    let puzzle: Grid = "0".repeat(81).parse().expect("empty board parses");
    c.bench_function("solve - empty board", |b| {
        b.iter(|| {
            let mut solver = Solver::new(puzzle.clone());
            black_box(solver.solve());
        });
    });
}

fn bench_selection(c: &mut Criterion) {
    // Variable selection dominates the per-node cost; measure it alone.
    let puzzle: Grid = INSTANCES[0].parse().expect("bench instance parses");
    c.bench_function("select_variable", |b| {
        b.iter(|| black_box(select_variable(black_box(&puzzle))));
    });
}

criterion_group!(benches, bench_solve, bench_empty_board, bench_selection);
criterion_main!(benches);
