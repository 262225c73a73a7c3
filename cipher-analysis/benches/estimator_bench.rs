use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cipher_analysis::{
    alphabet, shift, ChiSquareEstimator, FrequencyVector, ShiftEstimator, SimilarityEstimator,
};

const SAMPLE: &str = "Nel mezzo del cammin di nostra vita mi ritrovai per una \
    selva oscura, ché la diritta via era smarrita. Ahi quanto a dir qual era \
    è cosa dura esta selva selvaggia e aspra e forte che nel pensier rinova \
    la paura! Tant'è amara che poco è più morte; ma per trattar del ben ch'io \
    vi trovai, dirò de l'altre cose ch'i' v'ho scorte.";

/// Benchmark both shift-recovery strategies on a fixed ciphertext
fn bench_estimators(c: &mut Criterion) {
    let plain = alphabet::normalize(SAMPLE);
    let cipher = shift::encode(&plain, 7);
    let observed = FrequencyVector::from_indices(&cipher);
    let reference = FrequencyVector::from_indices(&plain);

    let similarity = SimilarityEstimator::new(&reference);
    c.bench_function("estimate_similarity", |b| {
        b.iter(|| similarity.estimate(black_box(&observed)))
    });

    let chi_square = ChiSquareEstimator::new();
    c.bench_function("estimate_chi_square", |b| {
        b.iter(|| chi_square.estimate(black_box(&observed)))
    });
}

/// Benchmark normalization, the only text-length-proportional stage
fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_sample", |b| {
        b.iter(|| alphabet::normalize(black_box(SAMPLE)))
    });
}

criterion_group!(benches, bench_estimators, bench_normalize);
criterion_main!(benches);
