//! Benchmarks for rich text rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents shaped like real article
//! bodies: headings, formatted paragraphs, lists, and links.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use sitibegam_content::{to_html, to_text, Document, RenderOptions};

/// Build a synthetic article body with the given number of sections.
fn create_test_document(section_count: usize) -> Value {
    let mut children = Vec::new();

    for i in 0..section_count {
        children.push(json!({
            "type": "heading",
            "tag": "h2",
            "children": [{"type": "text", "text": format!("Seção {}", i + 1)}],
        }));
        children.push(json!({
            "type": "paragraph",
            "children": [
                {"type": "text", "text": "Texto corrido com um trecho em "},
                {"type": "text", "text": "negrito", "format": 1},
                {"type": "text", "text": " e outro em "},
                {"type": "text", "text": "itálico", "format": 2},
                {"type": "text", "text": ", seguido de um "},
                {"type": "link", "fields": {"url": "/publicacoes"}, "children": [
                    {"type": "text", "text": "link interno"},
                ]},
                {"type": "text", "text": "."},
            ],
        }));
        children.push(json!({
            "type": "list",
            "listType": "number",
            "children": [
                {"type": "listitem", "children": [{"type": "text", "text": "Primeiro item"}]},
                {"type": "listitem", "children": [{"type": "text", "text": "Segundo item"}]},
                {"type": "listitem", "children": [{"type": "text", "text": "Terceiro item"}]},
            ],
        }));
    }

    json!({"root": {"type": "root", "children": children}})
}

fn bench_to_html(c: &mut Criterion) {
    let small = create_test_document(5);
    let large = create_test_document(100);

    c.bench_function("to_html_5_sections", |b| {
        b.iter(|| to_html(black_box(&small)))
    });
    c.bench_function("to_html_100_sections", |b| {
        b.iter(|| to_html(black_box(&large)))
    });
}

fn bench_to_text(c: &mut Criterion) {
    let large = create_test_document(100);

    c.bench_function("to_text_100_sections", |b| {
        b.iter(|| to_text(black_box(&large)))
    });
}

fn bench_document_construction(c: &mut Criterion) {
    let large = create_test_document(100);

    c.bench_function("document_from_value_100_sections", |b| {
        b.iter(|| Document::from_value(black_box(&large)))
    });
}

fn bench_render_only(c: &mut Criterion) {
    let large = Document::from_value(&create_test_document(100));
    let options = RenderOptions::default();

    c.bench_function("render_prebuilt_100_sections", |b| {
        b.iter(|| sitibegam_content::render::to_html(black_box(&large), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_to_html,
    bench_to_text,
    bench_document_construction,
    bench_render_only
);
criterion_main!(benches);
