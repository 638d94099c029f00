//! Benchmarks for the pagination engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pageflow::{
    compute_split_index, BlockNode, ContentArea, Document, KeepTogetherResolver,
    MeasurementSandbox, Paginator, TextMeasurer,
};

fn long_document(blocks: usize) -> Document {
    let mut doc = Document::new(ContentArea::new(864.0));
    for i in 0..blocks {
        let block = match i % 7 {
            0 => BlockNode::heading(2, format!("Section {}", i)),
            3 => BlockNode::table("r1c1 r1c2", 180.0),
            5 => BlockNode::image(140.0),
            _ => BlockNode::paragraph(
                "Paragraph content long enough to span multiple rendered lines \
                 and exercise the height estimator during measurement.",
            ),
        };
        let _ = doc.push_node(0, block);
    }
    doc
}

fn bench_overflow_pass(c: &mut Criterion) {
    c.bench_function("overflow_pass_200_blocks", |b| {
        b.iter(|| {
            let mut engine = Paginator::with_defaults(long_document(200));
            engine.check_page_overflow().unwrap();
            black_box(engine.page_count())
        });
    });
}

fn bench_settle_cascade(c: &mut Criterion) {
    c.bench_function("settle_cascade_200_blocks", |b| {
        b.iter(|| {
            let mut engine = Paginator::with_defaults(long_document(200));
            let mut now = 0;
            engine.check_page_overflow().unwrap();
            while engine.has_pending_check() {
                now += 1_000;
                engine.tick(now).unwrap();
            }
            black_box(engine.page_count())
        });
    });
}

fn bench_split_index(c: &mut Criterion) {
    let doc = long_document(100);
    let blocks = doc.page_blocks(0);
    let measurer = TextMeasurer::default();

    c.bench_function("compute_split_index_100_blocks", |b| {
        b.iter(|| {
            let mut sandbox = MeasurementSandbox::new(&measurer, 468.0);
            black_box(compute_split_index(&blocks, 864.0, &mut sandbox).unwrap())
        });
    });
}

fn bench_keep_together_scan(c: &mut Criterion) {
    let doc = long_document(100);
    let blocks = doc.page_blocks(0);
    let resolver = KeepTogetherResolver::new(100);

    c.bench_function("keep_together_groups_100_blocks", |b| {
        b.iter(|| {
            for start in 0..blocks.len() {
                black_box(resolver.group(&blocks, start));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_overflow_pass,
    bench_settle_cascade,
    bench_split_index,
    bench_keep_together_scan
);
criterion_main!(benches);
