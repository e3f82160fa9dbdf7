//! Tokenizer benchmarks

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stringtools_words::{WordTransform, WordsOptions, split_words, words};

fn tokenize_benchmark(c: &mut Criterion) {
    let short_text = "the cat in the hat";
    let long_text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(1000);

    let mut group = c.benchmark_group("tokenize");

    group.bench_with_input(
        BenchmarkId::new("short", short_text.len()),
        &short_text,
        |b, text| b.iter(|| split_words(black_box(text))),
    );

    group.bench_with_input(
        BenchmarkId::new("long", long_text.len()),
        &long_text,
        |b, text| b.iter(|| split_words(black_box(text))),
    );

    let opts = WordsOptions::new()
        .only_alphabetic()
        .with_transform(WordTransform::Capitalize);
    group.bench_with_input(
        BenchmarkId::new("long_capitalized", long_text.len()),
        &long_text,
        |b, text| b.iter(|| words(black_box(text), &opts)),
    );

    group.finish();
}

criterion_group!(benches, tokenize_benchmark);
criterion_main!(benches);
