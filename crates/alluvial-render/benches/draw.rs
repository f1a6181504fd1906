use alluvial_core::{ColorSpec, Palette, PreferredOrder, Record, RecordSet};
use alluvial_render::layout::layout_alluvial;
use alluvial_render::{DrawOptions, RecordingSurface, SvgRenderOptions, draw, draw_svg};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

const COLUMNS: [&str; 4] = ["region", "channel", "plan", "status"];

/// Deterministic pseudo-survey: `rows` records, `cardinality` values per column.
fn build_records(rows: usize, cardinality: usize) -> RecordSet {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % cardinality as u64) as usize
    };

    (0..rows)
        .map(|_| {
            COLUMNS
                .iter()
                .map(|c| (*c, format!("{c}_{}", next())))
                .collect::<Record>()
        })
        .collect()
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("alluvial");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("rows_200_card_4", 200usize, 4usize),
        ("rows_5000_card_8", 5000usize, 8usize),
        ("rows_20000_card_12", 20000usize, 12usize),
    ];

    let options = DrawOptions::new(COLUMNS)
        .with_preferred_order(PreferredOrder::new().with("region", "region_3"))
        .with_color(ColorSpec::by_palette("plan", Palette::default()));

    for (name, rows, cardinality) in cases {
        let records = build_records(rows, cardinality);

        group.bench_with_input(BenchmarkId::new("layout", name), &records, |b, records| {
            b.iter(|| black_box(layout_alluvial(black_box(records), &options).ok()))
        });
        group.bench_with_input(BenchmarkId::new("draw_recording", name), &records, |b, records| {
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                let _ = draw(black_box(records), &options, &mut surface);
                black_box(surface.ops.len());
            })
        });
        group.bench_with_input(BenchmarkId::new("draw_svg", name), &records, |b, records| {
            b.iter(|| {
                black_box(draw_svg(black_box(records), &options, &SvgRenderOptions::default()).ok())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
