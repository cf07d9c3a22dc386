//! Benchmarks for scoring and PDF rendering.

use criterion::{criterion_group, criterion_main, Criterion};
use product_transparency::{Metadata, PdfRenderer, Product, TransparencyScorer};
use std::hint::black_box;

fn sample_product(extra_fields: usize) -> Product {
    let mut metadata = Metadata::new()
        .with("product_name", "Organic Cotton Tee")
        .with("brand", "GreenThread")
        .with("category", "apparel")
        .with("origin_country", "PT")
        .with("sustainability_rating", "good")
        .with("carbon_footprint", "4.2")
        .with("materials", "100% organic cotton")
        .with("certifications", "GOTS");
    for i in 0..extra_fields {
        metadata.insert(format!("custom_field_{i}"), format!("value number {i}"));
    }
    Product::new("Organic Cotton Tee", "greenthread")
        .with_id("bench")
        .with_metadata(metadata)
}

fn benchmark_scoring(c: &mut Criterion) {
    let product = sample_product(50);
    let scorer = TransparencyScorer::new();
    c.bench_function("score_product", |b| {
        b.iter(|| black_box(scorer.score_product(black_box(&product))));
    });
}

fn benchmark_render(c: &mut Criterion) {
    let renderer = PdfRenderer::default();

    let small = sample_product(0);
    c.bench_function("render_pdf_small", |b| {
        b.iter(|| black_box(renderer.render(black_box(&small))));
    });

    let large = sample_product(300);
    c.bench_function("render_pdf_many_pages", |b| {
        b.iter(|| black_box(renderer.render(black_box(&large))));
    });
}

criterion_group!(benches, benchmark_scoring, benchmark_render);
criterion_main!(benches);
