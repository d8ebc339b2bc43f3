use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eduverse_motion_core::{
    Easing, ElementBounds, Engine, Inputs, ReplayPolicy, RevealSpec, Style, StyleProperty,
    TriggerZone, Viewport,
};

fn populated_engine(reveals: usize) -> Engine {
    let mut engine = Engine::default();
    for i in 0..reveals {
        let element = engine.create_element(ElementBounds {
            offset: 200.0 * i as f32,
            extent: 150.0,
        });
        engine
            .register_reveal(
                element,
                &RevealSpec {
                    initial: Style::new()
                        .with(StyleProperty::Opacity, 0.0)
                        .with(StyleProperty::TranslateY, 50.0),
                    target: Style::new()
                        .with(StyleProperty::Opacity, 1.0)
                        .with(StyleProperty::TranslateY, 0.0),
                    duration: 0.6,
                    delay: 0.0,
                    easing: Easing::EaseOut,
                    zone: TriggerZone::new(-800.0, 100.0),
                    policy: ReplayPolicy::PlayReverseOnExit,
                },
            )
            .unwrap();
    }
    engine
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");
    for &n in &[16usize, 128, 512] {
        group.bench_function(format!("{n}_reveals"), |b| {
            let mut engine = populated_engine(n);
            let mut offset = 0.0f32;
            b.iter(|| {
                offset = (offset + 37.0) % 4000.0;
                let out = engine.update(
                    black_box(1.0 / 60.0),
                    Inputs::with_viewport(Viewport {
                        scroll_offset: offset,
                        viewport_extent: 900.0,
                        content_extent: 4000.0,
                    }),
                );
                black_box(out.changes.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
