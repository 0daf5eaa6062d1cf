use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use engine_core::GameState;
use games_tictactoe::State;

fn bench_next_states(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_next_states");

    group.bench_function("opening", |b| {
        let state = State::new();
        b.iter(|| black_box(state.next_states()));
    });

    group.bench_function("midgame", |b| {
        let state = State::from_moves(&[4, 0, 8, 2]).unwrap_or_default();
        b.iter(|| black_box(state.next_states()));
    });

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_step");
    group.bench_function("step_center", |b| {
        let base_state = State::new();
        b.iter_batched(
            || base_state,
            |state| state.make_move(4),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_heuristic(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_heuristic");
    let state = State::from_moves(&[4, 0, 8]).unwrap_or_default();

    group.bench_function("line_score", |b| {
        b.iter(|| black_box(state.heuristic()));
    });

    group.bench_function("terminal_utility", |b| {
        let won = State::from_moves(&[0, 3, 1, 4, 2]).unwrap_or_default();
        b.iter(|| black_box(won.utility()));
    });

    group.finish();
}

criterion_group!(benches, bench_next_states, bench_step, bench_heuristic);
criterion_main!(benches);
