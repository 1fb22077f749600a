use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jptrans_core::chars::chars_of;
use jptrans_core::recipe::{HiraKataConversion, ToHalfwidth};
use jptrans_core::{StageConfig, Transliterator, TransliterationRecipe};

const SAMPLE: &str = "時々、ｶﾀｶﾅとかﾞな　スーパ-マーケット①②Ⅻ 𝐀𝐁𝐂 いすゞ";

fn sample(repeat: usize) -> String {
    SAMPLE.repeat(repeat)
}

/// Benchmark splitting a string into atoms
fn bench_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("source");

    for size in [1, 10, 100, 1000].iter() {
        let input = sample(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(chars_of(input).count()));
        });
    }

    group.finish();
}

/// Benchmark each stateful stage on its own
fn bench_stateful_stages(c: &mut Criterion) {
    let input = sample(100);
    for name in [
        "hira-kata-composition",
        "japanese-iteration-marks",
        "prolonged-sound-marks",
    ] {
        let t = Transliterator::single(StageConfig::new(name)).unwrap();
        c.bench_function(name, |b| {
            b.iter(|| black_box(t.transliterate(&input)));
        });
    }
}

/// Benchmark a recipe that needs no tables
fn bench_full_recipe(c: &mut Criterion) {
    let recipe = TransliterationRecipe {
        replace_suspicious_hyphens_to_prolonged_sound_marks: true,
        replace_spaces: true,
        replace_mathematical_alphanumerics: true,
        replace_roman_numerals: true,
        combine_decomposed_hiraganas_and_katakanas: true,
        replace_japanese_iteration_marks: true,
        hira_kata: HiraKataConversion::HiraToKata,
        to_halfwidth: ToHalfwidth::HankakuKana,
        ..Default::default()
    };
    let t = Transliterator::from_recipe(&recipe).unwrap();
    let mut group = c.benchmark_group("full_recipe");

    for size in [1, 100, 1000].iter() {
        let input = sample(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| black_box(t.transliterate(input)));
        });
    }

    group.finish();
}

/// Benchmark building a transliterator from a recipe
fn bench_construction(c: &mut Criterion) {
    let recipe = TransliterationRecipe {
        replace_spaces: true,
        to_halfwidth: ToHalfwidth::HankakuKana,
        ..Default::default()
    };
    c.bench_function("construct_from_recipe", |b| {
        b.iter(|| black_box(Transliterator::from_recipe(&recipe).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_source,
    bench_stateful_stages,
    bench_full_recipe,
    bench_construction
);

criterion_main!(benches);
