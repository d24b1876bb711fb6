use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecomap::{parse_item_analysis, ImagePayload};

const FENCED_REPLY: &str = "```json\n{\"title\":\"Laptop\",\"category\":\"electronics\",\"weight\":2.5,\"price\":80000,\"description\":\"used laptop, works fine\"}\n```";

fn bench_parse_item_analysis(c: &mut Criterion) {
    c.bench_function("parse_item_analysis", |b| {
        b.iter(|| parse_item_analysis(black_box(FENCED_REPLY)));
    });
}

fn bench_image_payload(c: &mut Criterion) {
    let data_uri = format!("data:image/png;base64,{}", "QUJD".repeat(4096));
    c.bench_function("image_payload_from_data_uri", |b| {
        b.iter(|| ImagePayload::from_data_uri(black_box(&data_uri)));
    });
}

criterion_group!(benches, bench_parse_item_analysis, bench_image_payload);
criterion_main!(benches);
