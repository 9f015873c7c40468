// Criterion benchmarks for the prediction pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use std::sync::Arc;
use water_intake::core::{encode, LinearModel, Predictor};
use water_intake::models::{PredictionRequest, FEATURE_NAMES};

fn create_request(id: usize) -> PredictionRequest {
    PredictionRequest {
        age: 18 + (id % 60) as i64,
        gender: if id % 2 == 0 { "Female" } else { "Male" }.to_string(),
        weight: 50.0 + (id % 50) as f64,
        activity_level: ["Low", "Moderate", "High"][id % 3].to_string(),
        weather: ["Cool", "Moderate", "Hot"][id % 3].to_string(),
    }
}

fn create_model() -> LinearModel {
    LinearModel {
        feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        coefficients: vec![0.002, 0.15, 0.03, 0.45, 0.3],
        intercept: 0.2,
    }
}

fn bench_encode(c: &mut Criterion) {
    let request = create_request(7);
    c.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&request)))
    });
}

fn bench_predict(c: &mut Criterion) {
    let features = encode(&create_request(7)).unwrap();
    let fallback = Predictor::fallback();
    let model = Predictor::new(Some(Arc::new(create_model())));

    let mut group = c.benchmark_group("predict");
    group.bench_function("fallback", |b| {
        b.iter(|| fallback.predict(black_box(&features)))
    });
    group.bench_function("linear_model", |b| {
        b.iter(|| model.predict(black_box(&features)))
    });
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let predictor = Predictor::fallback();
    let mut group = c.benchmark_group("pipeline");

    for request_count in [10, 100, 1000].iter() {
        let requests: Vec<PredictionRequest> = (0..*request_count).map(create_request).collect();

        group.bench_with_input(
            BenchmarkId::new("encode_and_predict", request_count),
            request_count,
            |b, _| {
                b.iter(|| {
                    let total: f64 = requests
                        .iter()
                        .filter_map(|r| encode(r).ok())
                        .filter_map(|f| predictor.predict(&f).ok())
                        .sum();
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_predict, bench_pipeline);

criterion_main!(benches);
