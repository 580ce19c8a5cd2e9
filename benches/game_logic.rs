use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetramino::core::field::Block;
use tetramino::core::{
    find_kick, line_clear, Field, GameConfig, GameSession, Piece, Score, SessionState,
};
use tetramino::types::{Position, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::with_seed(12345));
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
            if session.state() != SessionState::Running {
                session.restart();
            }
            session.drain_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new();
            let mut score = Score::new();
            for y in 16..20 {
                for x in 0..10 {
                    field.set(Position::new(x, y), Some(Block::new(0, ShapeKind::I)));
                }
            }
            field.set(Position::new(3, 15), Some(Block::new(1, ShapeKind::T)));
            black_box(line_clear::resolve(&mut field, &mut score));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let field = Field::new();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            for shape in ShapeKind::ALL {
                black_box(Piece::spawn(black_box(shape), &field, 0));
            }
        })
    });
}

fn bench_kick_resolver(c: &mut Criterion) {
    let mut field = Field::new();
    // Column 4 is filled above and below a horizontal I, so (0, 0) fails.
    let mut piece = Piece::spawn(ShapeKind::I, &field, 0).expect("empty field");
    for _ in 0..10 {
        piece.move_down();
    }
    for y in (0..20).filter(|&y| y != 10) {
        field.set(Position::new(4, y), Some(Block::new(100, ShapeKind::O)));
    }

    c.bench_function("find_kick", |b| {
        b.iter(|| black_box(find_kick(black_box(&piece), &field)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::with_seed(12345));
    session.start();

    c.bench_function("snapshot", |b| b.iter(|| black_box(session.snapshot())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_kick_resolver,
    bench_snapshot
);
criterion_main!(benches);
