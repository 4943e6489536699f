use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fertiscan_core::ClassificationReport;

fn bench_classification_report(c: &mut Criterion) {
    // Cycle through the three trained labels with a fixed disagreement rate.
    let actual: Vec<u32> = (0..10_000).map(|i| (i % 3) as u32).collect();
    let predicted: Vec<u32> = (0..10_000).map(|i| ((i + i / 7) % 3) as u32).collect();

    c.bench_function("classification_report_10k", |b| {
        b.iter(|| ClassificationReport::from_predictions(black_box(&actual), black_box(&predicted)));
    });

    let report = ClassificationReport::from_predictions(&actual, &predicted);
    c.bench_function("classification_report_render", |b| {
        b.iter(|| black_box(&report).to_string());
    });
}

criterion_group!(benches, bench_classification_report);
criterion_main!(benches);
