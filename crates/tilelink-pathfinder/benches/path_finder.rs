//! Benchmarks for path search.
//!
//! # Benchmarks
//!
//! - **`find_path_fixture`**: searches on small hand-written boards, one per
//!   route shape (straight, one bend, around the border, no route).
//! - **`find_path_sweep`**: searches every same-type pair of a seeded random
//!   board with some cells already cleared, as in a game in progress.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench path_finder
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use tilelink_core::{Board, Coord, TileTypeCatalog};
use tilelink_pathfinder::PathFinder;

const FIXTURES: [(&str, &str, (i32, i32), (i32, i32)); 4] = [
    ("straight", "A......A", (1, 1), (8, 1)),
    ("one_bend", "A...\nBBB.\nBBBA", (1, 1), (4, 3)),
    ("border", "ABBBA\nCCCCC\nCCCCC", (1, 1), (5, 1)),
    ("none", "BBB\nBAB\nBBB\nBAB\nBBB", (2, 2), (2, 4)),
];

fn bench_find_path_fixture(c: &mut Criterion) {
    for (name, text, source, target) in FIXTURES {
        let board: Board = text.parse().unwrap();
        c.bench_with_input(
            BenchmarkId::new("find_path_fixture", name),
            &(Coord::from(source), Coord::from(target)),
            |b, &(source, target)| {
                b.iter(|| {
                    PathFinder::new(board.grid())
                        .find_path(hint::black_box(source), hint::black_box(target))
                });
            },
        );
    }
}

fn random_board(seed: u64) -> Board {
    let mut rng = Pcg64::seed_from_u64(seed);
    let catalog = TileTypeCatalog::with_type_count(8).unwrap();
    let mut board = Board::new(8, 12);
    for coord in board.grid().interior_coords() {
        if rng.random_bool(0.7) {
            board.place_tile(coord, catalog.random_type(&mut rng)).unwrap();
        }
    }
    board
}

fn bench_find_path_sweep(c: &mut Criterion) {
    for seed in [0, 1, 2] {
        let board = random_board(seed);
        let pairs = board
            .tiles()
            .flat_map(|a| {
                board
                    .tiles()
                    .filter(move |b| a.id < b.id && a.ty == b.ty)
                    .map(move |b| (a.coord, b.coord))
            })
            .collect::<Vec<_>>();
        c.bench_with_input(
            BenchmarkId::new("find_path_sweep", format!("seed_{seed}")),
            &pairs,
            |b, pairs| {
                b.iter(|| {
                    pairs
                        .iter()
                        .filter(|&&(source, target)| {
                            PathFinder::new(board.grid())
                                .find_path(source, target)
                                .is_some()
                        })
                        .count()
                });
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_find_path_fixture,
        bench_find_path_sweep
);
criterion_main!(benches);
