use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use llm_file_indexer::summarizer::{build_prompt, extract_summary};

fn bench_extract_summary(c: &mut Criterion) {
    let keywords: Vec<String> = (0..10).map(|i| format!("keyword-{}", i)).collect();
    let payload = serde_json::json!({
        "summary": "A reasonably long summary sentence describing the contents of a file. ".repeat(4),
        "keywords": keywords,
    });
    let bare = payload.to_string();
    let fenced = format!("Sure, here is the JSON:\n```json\n{}\n```\nHope this helps!", bare);

    c.bench_function("extract_summary/bare", |b| b.iter(|| extract_summary(black_box(&bare))));
    c.bench_function("extract_summary/fenced", |b| b.iter(|| extract_summary(black_box(&fenced))));
}

fn bench_build_prompt(c: &mut Criterion) {
    let preview = "lorem ipsum dolor sit amet ".repeat(3000);
    c.bench_function("build_prompt/truncated", |b| {
        b.iter(|| build_prompt(black_box("docs/long.txt"), black_box(&preview)))
    });
}

criterion_group!(benches, bench_extract_summary, bench_build_prompt);
criterion_main!(benches);
