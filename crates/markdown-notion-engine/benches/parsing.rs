use criterion::{Criterion, criterion_group, criterion_main};
use markdown_notion_engine::{Encoder, parse_markdown};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse_markdown", |b| {
        b.iter(|| {
            let blocks = parse_markdown(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    let deep = common::generate_deep_list(200);
    group.bench_function("deep_list", |b| {
        b.iter(|| std::hint::black_box(parse_markdown(std::hint::black_box(&deep))));
    });

    let blocks = parse_markdown(&content);
    let encoder = Encoder::default();
    group.bench_function("encode", |b| {
        b.iter(|| std::hint::black_box(encoder.encode(std::hint::black_box(&blocks))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
