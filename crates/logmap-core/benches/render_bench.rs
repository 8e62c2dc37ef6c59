use anyhow::Result;
use criterion::{criterion_group, criterion_main, black_box, Criterion};
use logmap_core::{iterate, orbit_pair_chart, select_ticks, RenderOptions, Theme};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &steps in &[100i64, 1_000] {
        group.bench_function(format!("pair_{steps}"), |b| {
            let orbits = iterate(steps, 0.4, 0.6, 3.9).unwrap();
            let ticks = select_ticks(steps).unwrap();
            let ch = orbit_pair_chart(&orbits, steps, &ticks, &Theme::dark());
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 400;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
