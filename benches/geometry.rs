use criterion::{black_box, criterion_group, criterion_main, Criterion};
use touch_tetris::core::shape::template;
use touch_tetris::core::{Piece, PieceRandomizer};
use touch_tetris::types::PieceKind;

fn bench_rotate_shape(c: &mut Criterion) {
    let shape = template(PieceKind::T);

    c.bench_function("rotate_cw_x4", |b| {
        b.iter(|| {
            let mut s = black_box(shape);
            for _ in 0..4 {
                s = s.rotate_cw();
            }
            s
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut piece = Piece::spawn(PieceKind::L, 10);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            piece.try_move(black_box(1), 0, 10, 20);
            piece.try_move(black_box(-1), 0, 10, 20);
        })
    });
}

fn bench_rotate_towards(c: &mut Criterion) {
    let mut piece = Piece::spawn(PieceKind::J, 10);

    c.bench_function("rotate_towards", |b| {
        b.iter(|| {
            piece.rotate_towards(black_box(9.0), 10, 20);
        })
    });
}

fn bench_ghost_y(c: &mut Criterion) {
    let piece = Piece::spawn(PieceKind::I, 10);

    c.bench_function("ghost_y", |b| b.iter(|| black_box(&piece).ghost_y(black_box(20))));
}

fn bench_spawn(c: &mut Criterion) {
    let mut randomizer = PieceRandomizer::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| Piece::spawn(randomizer.next(), black_box(10)))
    });
}

criterion_group!(
    benches,
    bench_rotate_shape,
    bench_try_move,
    bench_rotate_towards,
    bench_ghost_y,
    bench_spawn
);
criterion_main!(benches);
