//! Benchmarks for the markdown path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_core::{emit_markdown, parse_markdown};

fn sample_document(paragraphs: usize) -> String {
    let mut text = String::from("# Benchmark note\n\n");
    for i in 0..paragraphs {
        text.push_str(&format!("Paragraph number {} with some body text.\n\n", i));
        if i % 7 == 0 {
            text.push_str("```rust\nlet x = 1;\nlet y = x + 1;\n```\n\n");
        }
        if i % 11 == 0 {
            text.push_str("<!-- CHECKPOINT_MARKER:cp-bench -->\n\n");
        }
        if i % 5 == 0 {
            text.push_str("![figure](https://img.example/fig.png)\n\n");
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_document(200);
    c.bench_function("parse_markdown_200_paragraphs", |b| {
        b.iter(|| parse_markdown(black_box(&text)))
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let note = parse_markdown(&sample_document(200));
    c.bench_function("emit_then_parse_200_paragraphs", |b| {
        b.iter(|| parse_markdown(&emit_markdown(black_box(&note))))
    });
}

criterion_group!(benches, bench_parse, bench_round_trip);
criterion_main!(benches);
