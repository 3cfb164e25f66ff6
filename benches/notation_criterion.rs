use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use board_sketch::grid::notation::{intersections, squares};
use board_sketch::hexes::banding::{pattern, Palette};
use board_sketch::hexes::cube_coords::{hex_coords, HexLayout};
use board_sketch::replay::hex_game::replay_hex;
use board_sketch::replay::rect_game::{replay_rect, ReplayOptions};

#[derive(Clone, Copy)]
struct GridCase {
    name: &'static str,
    grid: &'static str,
}

const GO_CORNER: &str = "
. . . . . . . . .
. . . . . . . . .
. . x o . . . . .
. x o . o . . . .
. . x o . . . . .
. . . x o . . . .
. . . . . . . . .
. . X O # Q . . .
. . . . . . . . .
";

const LABELED: &str = "
.  x88 .  o2  .  .
.  3   .  4   .  .
[xo .  .  .   .  .
Q  O   #  .   X  r
";

const GRID_CASES: &[GridCase] = &[
    GridCase {
        name: "go_corner_9x9",
        grid: GO_CORNER,
    },
    GridCase {
        name: "labeled_6x4",
        grid: LABELED,
    },
];

const HEX_HEX: &str = "
   . . . .
  . x . . .
 . . o x . .
. . . . . . .
 . . o . r .
  . . . . .
   . . . .
";

const MATCH_MOVES: &[&str] = &[
    "d3", "h4", "a5", "d6", "c4", "b5", "e4", "f4", "f5", "c2", "h6", "g6", "h5,b1",
];

const HEX_MOVES: &[&str] = &[
    "o4", "i7,o7", "n6,j8", "h8,n8", "i9,p6", "k7,q7", "l8,r12", "r6,g9", "p4,h10", "r4,n10",
    "q5,r2", "m5,f10", "j2,k5:o4,i7",
];

fn bench_grid_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_parsing");

    for case in GRID_CASES {
        let n_cells = case
            .grid
            .lines()
            .map(|line| line.split_whitespace().count())
            .sum::<usize>() as u64;
        group.throughput(Throughput::Elements(n_cells));

        group.bench_with_input(
            BenchmarkId::new("intersections", case.name),
            &case.grid,
            |b, grid| b.iter(|| intersections(black_box(*grid)).expect("grid should parse")),
        );
        group.bench_with_input(
            BenchmarkId::new("squares", case.name),
            &case.grid,
            |b, grid| b.iter(|| squares(black_box(*grid)).expect("grid should parse")),
        );
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    let options = ReplayOptions::default();

    group.throughput(Throughput::Elements(MATCH_MOVES.len() as u64));
    group.bench_function("rect_9x9", |b| {
        b.iter(|| {
            replay_rect(9, 9, black_box(MATCH_MOVES), &options).expect("moves should replay")
        })
    });

    group.throughput(Throughput::Elements(HEX_MOVES.len() as u64));
    group.bench_function("hex_size_7", |b| {
        b.iter(|| {
            replay_hex(7, black_box(HEX_MOVES), "h1", &options).expect("moves should replay")
        })
    });

    group.finish();
}

fn bench_hex_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_geometry");

    group.bench_function("cube_coords_natural", |b| {
        b.iter(|| hex_coords(black_box(HEX_HEX), HexLayout::Natural))
    });

    let cells = hex_coords(HEX_HEX, HexLayout::Natural);
    group.throughput(Throughput::Elements(cells.len() as u64));
    group.bench_function("pattern_earth", |b| {
        b.iter(|| pattern(black_box(&cells), &Palette::Earth))
    });

    group.finish();
}

criterion_group!(benches, bench_grid_parsing, bench_replay, bench_hex_geometry);
criterion_main!(benches);
