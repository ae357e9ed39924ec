use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use asciifold::{ConversionPolicy, Transliterator};

static INPUTS: &[(&str, &str)] = &[
    ("ascii", "The quick brown fox jumps over the lazy dog"),
    ("latin", "Příliš žluťoučký kůň úpěl ďábelské ódy"),
    ("cyrillic", "Съешь же ещё этих мягких французских булок"),
    ("greek", "Ξεσκεπάζω την ψυχοφθόρα βδελυγμία"),
    ("unmapped", "日本語のテキストと𝐁𝐨𝐥𝐝 letters"),
];

fn bench_full(c: &mut Criterion) {
    let transliterator = Transliterator::new();
    let mut group = c.benchmark_group("convert/full");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| transliterator.convert(text));
        });
    }
    group.finish();
}

fn bench_alphanumeric(c: &mut Criterion) {
    let transliterator = Transliterator::new().with_policy(ConversionPolicy::Alphanumeric);
    let mut group = c.benchmark_group("convert/alphanumeric");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| transliterator.convert(text));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full, bench_alphanumeric);
criterion_main!(benches);
