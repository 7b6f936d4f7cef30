use criterion::{criterion_group, criterion_main, Criterion};
use life_engine::automaton::{render_into, set_region, StepEngine};
use std::hint::black_box;

const SIZE: u32 = 512;

fn seeded_engine() -> StepEngine {
    let mut engine = StepEngine::new(SIZE, SIZE).unwrap();
    // Notched 3x3 strokes scattered over the grid keep it busy
    for i in 0..64 {
        let x = (i * 37 % SIZE as i32) + 3;
        let y = (i * 91 % SIZE as i32) + 5;
        set_region(engine.grid_mut(), true, 3, x, y);
        engine.grid_mut().set(x + 2, y, false);
    }
    engine
}

fn bench_step(c: &mut Criterion) {
    let mut engine = seeded_engine();
    c.bench_function("step_512x512", |b| b.iter(|| black_box(&mut engine).step()));
}

fn bench_render(c: &mut Criterion) {
    let engine = seeded_engine();
    let mut frame = vec![0u8; (SIZE * SIZE) as usize];
    c.bench_function("render_512x512", |b| {
        b.iter(|| render_into(black_box(engine.grid()), &mut frame))
    });
}

criterion_group!(benches, bench_step, bench_render);
criterion_main!(benches);
