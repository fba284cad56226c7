use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use schulte_tui::core::{Board, ClickOutcome, FoundSet, GameEngine, ManualClock, Settings, TargetSelector};
use schulte_tui::term::{FrameBuffer, GameView, Viewport};
use schulte_tui::types::{Alphabet, BoardSize};

fn bench_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let small = BoardSize::from_side(5).unwrap();
    let large = BoardSize::from_side(7).unwrap();

    c.bench_function("generate_5x5_english", |b| {
        b.iter(|| Board::generate(black_box(Alphabet::English.letters()), small, &mut rng))
    });

    c.bench_function("generate_7x7_ukrainian", |b| {
        b.iter(|| Board::generate(black_box(Alphabet::Ukrainian.letters()), large, &mut rng))
    });
}

fn bench_pick_target(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let board = Board::generate(
        Alphabet::English.letters(),
        BoardSize::from_side(7).unwrap(),
        &mut rng,
    )
    .unwrap();
    let found = FoundSet::new();

    c.bench_function("pick_target", |b| {
        b.iter(|| TargetSelector::pick(black_box(&board), &found, &mut rng))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_7x7_game", |b| {
        let clock = ManualClock::new();
        let settings = Settings {
            size: BoardSize::from_side(7).unwrap(),
            ..Settings::default()
        };
        let mut game = GameEngine::with_seed(settings, clock.clone(), 12345);

        b.iter(|| {
            game.start().unwrap();
            loop {
                clock.advance(16);
                game.tick();
                let Some(target) = game.target() else { break };
                let Some(index) = game
                    .board()
                    .and_then(|board| board.letters().iter().position(|&c| c == target))
                else {
                    break;
                };
                if let ClickOutcome::Completed(entry) = game.click(index) {
                    black_box(entry);
                    break;
                }
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(Settings::default(), ManualClock::new(), 12345);
    game.start().unwrap();
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(Settings::default(), ManualClock::new(), 12345);
    game.start().unwrap();
    let snap = game.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(&snap, game.history(), Some(0), viewport, &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_pick_target,
    bench_full_game,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
