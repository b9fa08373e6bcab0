//! Benchmarks for chatpress tokenizing and layout performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic transcripts exercising every token kind.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chatpress::{Citation, ExportOptions, MarkdownTokenizer, Message, Transcript, to_draw_list, to_markdown};
use chrono::{TimeZone, Utc};

/// Creates a synthetic transcript with the given number of message pairs.
fn create_test_transcript(pairs: usize) -> Transcript {
    let mut transcript = Transcript::new("Benchmark Session");

    for i in 0..pairs {
        transcript.add_message(Message::user(format!(
            "Question {}: what does **section {}** say about `throughput`?",
            i, i
        )));
        transcript.add_message(
            Message::ai(format!(
                "# Answer {}\n\
                 The section covers *throughput* in detail.\n\
                 - first point\n\
                 - second point\n\
                 ---\n\
                 ```\nfn sample() -> u32 {{ {} }}\n```",
                i, i
            ))
            .with_citations(vec![Citation::new(format!("source_{}.pdf", i), 1 + i as u32)]),
        );
    }

    transcript
}

fn options() -> ExportOptions {
    ExportOptions::new().with_exported_at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
}

/// Benchmark Markdown tokenization.
fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = MarkdownTokenizer::new();
    let body = "# Heading\nplain with **bold** and *italic* and `code`\n- item\n```\nblock\n```";

    c.bench_function("tokenize_mixed_message", |b| {
        b.iter(|| tokenizer.tokenize(black_box(body)));
    });
}

/// Benchmark document layout at various transcript sizes.
fn bench_document_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_layout");
    let options = options();

    for pairs in [5, 25, 100].iter() {
        let transcript = create_test_transcript(*pairs);

        group.bench_function(format!("{}_pairs", pairs), |b| {
            b.iter(|| to_draw_list(black_box(&transcript), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the flat Markdown path for comparison.
fn bench_markdown_render(c: &mut Criterion) {
    let transcript = create_test_transcript(100);
    let options = options();

    c.bench_function("markdown_100_pairs", |b| {
        b.iter(|| to_markdown(black_box(&transcript), &options).unwrap());
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_document_layout,
    bench_markdown_render
);
criterion_main!(benches);
