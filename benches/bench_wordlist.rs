use criterion::{criterion_group, criterion_main, Criterion};
use wordier_engine::Wordlist;

const WORDS: &[&str] = &[
    "crane", "slate", "bread", "ghost", "quilt", "shape", "snore", "plumb", "fjord", "vexes",
];

fn bench_from_words() {
    let _wordlist = Wordlist::from_words(WORDS);
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("wordlist.from_words", |b| b.iter(bench_from_words));

    let wordlist = Wordlist::from_words(WORDS).unwrap();
    let hit = Wordlist::encode("crane").unwrap();
    let miss = Wordlist::encode("ordre").unwrap();
    c.bench_function("wordlist.is_word.hit", |b| b.iter(|| wordlist.is_word(&hit)));
    c.bench_function("wordlist.is_word.miss", |b| {
        b.iter(|| wordlist.is_word(&miss))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
