// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use statics_validator::evaluation::{evaluate_cases, GradingCase};
use statics_validator::model::Point;
use statics_validator::{validate, Question, UserAnswer, ValidationConfig};

fn numeric_question() -> Question {
    serde_json::from_value(json!({
        "id": "reaction",
        "type": "numeric",
        "answer": {"value": 50.0, "unit": "N"},
        "commonMistakes": [
            {"pattern": {"type": "value", "value": 100.0}, "message": "Doubled"},
            {"pattern": {"type": "range", "min": -60.0, "max": -40.0}, "message": "Sign flipped"},
            {"pattern": {"type": "regex", "pattern": "^5\\d$"}, "message": "Close"}
        ]
    }))
    .unwrap()
}

fn beam_question(forces: usize) -> Question {
    let correct_forces: Vec<_> = (0..forces)
        .map(|i| {
            json!({
                "name": format!("F{}", i),
                "angle": 90.0,
                "position": {"x": i as f64 * 40.0, "y": 0.0}
            })
        })
        .collect();
    serde_json::from_value(json!({
        "type": "dcl",
        "schema": {
            "correctForces": correct_forces,
            "correctSupports": [{"type": "pin", "position": {"x": 0.0, "y": 0.0}}]
        }
    }))
    .unwrap()
}

fn beam_answer(forces: usize) -> UserAnswer {
    serde_json::from_value(json!({
        "placedForces": (0..forces)
            .map(|i| {
                json!({
                    "name": format!("f{}", i),
                    "angle": 92.0,
                    "applicationPoint": {"x": i as f64 * 40.0 + 3.0, "y": 1.0}
                })
            })
            .collect::<Vec<_>>(),
        "placedSupports": [{"type": "pin", "position": {"x": 2.0, "y": 0.0}}]
    }))
    .unwrap()
}

fn bench_numeric(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let question = numeric_question();
    let answer = UserAnswer {
        numeric_value: Some(49.5),
        unit: Some("newtons".into()),
        ..Default::default()
    };

    c.bench_function("numeric", |b| {
        b.iter(|| validate(black_box(&question), black_box(&answer), &config))
    });
}

fn bench_dcl(c: &mut Criterion) {
    let mut group = c.benchmark_group("dcl");
    let config = ValidationConfig::default();

    for forces in [3usize, 12, 48] {
        let question = beam_question(forces);
        let answer = beam_answer(forces);
        group.bench_with_input(BenchmarkId::new("forces", forces), &forces, |b, _| {
            b.iter(|| validate(black_box(&question), black_box(&answer), &config))
        });
    }

    group.finish();
}

fn bench_wave_sketch(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave_sketch");
    let config = ValidationConfig::default();
    let question: Question = serde_json::from_value(json!({
        "type": "wave-sketch",
        "waveSketch": {"amplitude": 2.0, "wavelength": 4.0}
    }))
    .unwrap();

    for samples in [50usize, 500, 5000] {
        let answer = UserAnswer {
            drawn_points: (0..samples)
                .map(|i| {
                    let x = (i as f64 + 0.5) * 8.0 / samples as f64;
                    Point::new(x, 2.0 * (std::f64::consts::PI * x / 2.0).sin())
                })
                .collect(),
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("points", samples), &samples, |b, _| {
            b.iter(|| validate(black_box(&question), black_box(&answer), &config))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let cases: Vec<GradingCase> = (0..256)
        .map(|i| {
            GradingCase::new(
                beam_question(6),
                if i % 2 == 0 {
                    beam_answer(6)
                } else {
                    beam_answer(3)
                },
            )
        })
        .collect();

    c.bench_function("batch_256", |b| {
        b.iter(|| evaluate_cases(black_box(&cases), &config))
    });
}

criterion_group!(benches, bench_numeric, bench_dcl, bench_wave_sketch, bench_batch);
criterion_main!(benches);
