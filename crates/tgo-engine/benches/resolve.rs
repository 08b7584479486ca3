use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tgo_engine::{resolve, AliasIndex, Calculator, EngineSnapshot, EstimateRequest, Hint};

const TOKENS: &[&str] = &[
    "grid_electricity",
    "Grid Mix Electricity (Thailand)",
    "ถ่านหินลิกไนท์",
    "electricity",
    "diesel",
    "hcfc-22",
    "unobtainium",
];

fn index_build_bench(c: &mut Criterion) {
    let catalog = tgo_catalog::load().unwrap();
    c.bench_function("alias_index_build", |b| {
        b.iter(|| black_box(AliasIndex::build(&catalog)));
    });
}

fn resolve_bench(c: &mut Criterion) {
    let catalog = tgo_catalog::load().unwrap();
    let index = AliasIndex::build(&catalog);
    let hint = Hint::category("Mobile Combustion - On Road Vehicles");

    c.bench_function("resolve_mixed_tokens", |b| {
        b.iter(|| {
            for token in TOKENS {
                black_box(resolve(&catalog, &index, token, &Hint::default()));
            }
        });
    });

    c.bench_function("resolve_with_hint", |b| {
        b.iter(|| black_box(resolve(&catalog, &index, "diesel", &hint)));
    });
}

fn estimate_bench(c: &mut Criterion) {
    let snapshot = EngineSnapshot::new(tgo_catalog::load().unwrap(), Calculator::default());
    let request = EstimateRequest::new("electricity", 1_250.0);
    c.bench_function("estimate_alias", |b| {
        b.iter(|| black_box(snapshot.estimate(&request).unwrap()));
    });
}

criterion_group!(benches, index_build_bench, resolve_bench, estimate_bench);
criterion_main!(benches);
