use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::{Board, Coord2, MineLayout, RevealMode};

const SIZE: Coord2 = (256, 256);

fn open_layout() -> MineLayout {
    MineLayout::from_mine_coords(SIZE, &[]).expect("valid layout")
}

/// Mines on every fourth tile of every fourth row, leaving wide corridors of zero tiles.
fn sparse_layout() -> MineLayout {
    let mines: Vec<Coord2> = (0..SIZE.0)
        .step_by(4)
        .flat_map(|row| (0..SIZE.1).step_by(4).map(move |col| (row, col)))
        .collect();
    MineLayout::from_mine_coords(SIZE, &mines).expect("valid layout")
}

fn bench_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");

    for (name, layout) in [("open", open_layout()), ("sparse", sparse_layout())] {
        group.bench_function(format!("flood_fill/{name}"), |b| {
            b.iter_batched(
                || Board::new(layout.clone()),
                |mut board| {
                    let _ = black_box(board.reveal((SIZE.0 / 2 + 1, SIZE.1 / 2 + 2)));
                    board
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("single/{name}"), |b| {
            b.iter_batched(
                || Board::with_reveal_mode(layout.clone(), RevealMode::Single),
                |mut board| {
                    let _ = black_box(board.reveal((SIZE.0 / 2 + 1, SIZE.1 / 2 + 2)));
                    board
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_outcome(c: &mut Criterion) {
    let mut board = Board::new(sparse_layout());
    let _ = board.reveal((1, 1));

    c.bench_function("outcome", |b| b.iter(|| black_box(board.outcome())));
}

criterion_group!(benches, bench_reveal, bench_outcome);
criterion_main!(benches);
