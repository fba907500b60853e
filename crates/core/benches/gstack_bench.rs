//! Benchmarks for graphics state save/restore.
//!
//! Benchmark groups:
//! - `gstack_save_restore`: q/Q pairs at various nesting depths, with and
//!   without owned sub-state (dash pattern, clip) that must be deep-copied

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pdgstate_core::{ClipRegion, DashPattern, GraphicsState, GraphicsStateStack};

fn loaded_state() -> GraphicsState {
    let mut gs = GraphicsState::with_page((0.0, 0.0, 612.0, 792.0));
    gs.set_dash_pattern(Some(DashPattern::new(vec![3.0, 2.0, 1.0, 2.0], 0.0)));
    gs.text_state_mut().font_name = Some("F1".to_string());
    if let Some(clip) = gs.clip_mut() {
        clip.intersect_rect((36.0, 36.0, 576.0, 756.0));
    }
    gs
}

fn run_nested(stack: &mut GraphicsStateStack, depth: usize) {
    for i in 0..depth {
        stack.do_q().unwrap();
        stack.do_cm(1.0, 0.0, 0.0, 1.0, i as f64, 0.0);
        stack.do_w(black_box(0.5));
    }
    for _ in 0..depth {
        stack.do_Q().unwrap();
    }
}

fn bench_save_restore(c: &mut Criterion) {
    let mut group = c.benchmark_group("gstack_save_restore");

    for depth in [1usize, 8, 28] {
        group.bench_with_input(BenchmarkId::new("default", depth), &depth, |b, &depth| {
            let mut stack = GraphicsStateStack::default();
            b.iter(|| run_nested(&mut stack, depth))
        });

        group.bench_with_input(BenchmarkId::new("loaded", depth), &depth, |b, &depth| {
            let mut stack = GraphicsStateStack::new(loaded_state());
            b.iter(|| run_nested(&mut stack, depth))
        });
    }

    group.bench_function("clip_copy", |b| {
        let region = ClipRegion::from_rect((0.0, 0.0, 612.0, 792.0));
        b.iter(|| black_box(region.copy()))
    });

    group.finish();
}

criterion_group!(benches, bench_save_restore);
criterion_main!(benches);
