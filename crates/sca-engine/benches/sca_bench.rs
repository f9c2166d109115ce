// Criterion benchmarks for sca-engine.
//
// Compares rule-set application through a caching `SoundChanger` with the
// uncached free function, on a synthetic word list.
//
// Run:
//   cargo bench -p sca-engine

use criterion::{Criterion, criterion_group, criterion_main};
use sca_core::SoundClasses;
use sca_engine::{ChangerOptions, SoundChanger, apply_rule_set};

const RULES: &[&str] = &[
    "[ptk] -> [bdg] / V_V",
    "[bdg] -> [βðɣ] / V_V",
    "V -> _ / _#",
    "s -> h / #_V",
    "n -> m / _[pb]",
    "e -> i / _!r",
];

fn word_list() -> Vec<String> {
    let onsets = ["p", "t", "k", "s", "n", "m", "r", ""];
    let nuclei = ["a", "e", "i", "o", "u"];
    let mut words = Vec::new();
    for a in onsets {
        for b in nuclei {
            for c in onsets {
                for d in nuclei {
                    words.push(format!("{a}{b}{c}{d}"));
                }
            }
        }
    }
    words
}

fn bench_cached_changer(c: &mut Criterion) {
    let words = word_list();
    let changer = SoundChanger::default();
    c.bench_function("rule_set_cached", |b| {
        b.iter(|| std::hint::black_box(changer.apply_to_words(RULES, &words).unwrap()));
    });
}

fn bench_uncached_changer(c: &mut Criterion) {
    let words = word_list();
    let changer = SoundChanger::with_options(SoundClasses::default(), ChangerOptions { cache: false });
    c.bench_function("rule_set_uncached", |b| {
        b.iter(|| std::hint::black_box(changer.apply_to_words(RULES, &words).unwrap()));
    });
}

fn bench_free_function(c: &mut Criterion) {
    let words = word_list();
    let classes = SoundClasses::default();
    c.bench_function("apply_rule_set", |b| {
        b.iter(|| std::hint::black_box(apply_rule_set(RULES, &words, &classes).unwrap()));
    });
}

/// Repeatedly applying one rule to single words: the case the cache exists for.
fn bench_word_at_a_time(c: &mut Criterion) {
    let words = word_list();
    let changer = SoundChanger::default();
    c.bench_function("word_at_a_time_cached", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(changer.apply_to_word(RULES, word).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_cached_changer,
    bench_uncached_changer,
    bench_free_function,
    bench_word_at_a_time
);
criterion_main!(benches);
