// ABOUTME: Criterion benchmarks for shopping list aggregation and rendering
// ABOUTME: Measures the aggregation pass, snapshot parsing, and text/JSON formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

//! Criterion benchmarks for the shopping list pipeline.
//!
//! Measures aggregation throughput per scanned ingredient, snapshot parsing
//! per byte, and document rendering for plans of various sizes.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_plan, ingredient_count, PlanSize};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mealplan_core::models::ShoppingListResponse;
use mealplan_shopping::aggregation::aggregate;
use mealplan_shopping::formatters::{
    format_output, OutputFormat, RenderOptions, ShoppingListDocument,
};
use mealplan_shopping::snapshot::parse_snapshot;

const SIZES: [PlanSize; 3] = [PlanSize::Week, PlanSize::Month, PlanSize::Large];

/// Benchmark the single aggregation pass
#[allow(clippy::cast_possible_truncation)]
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in SIZES {
        let plan = generate_plan(size);
        group.throughput(Throughput::Elements(ingredient_count(&plan) as u64));
        group.bench_function(size.label(), |b| {
            b.iter(|| aggregate(black_box(&plan)));
        });
    }

    group.finish();
}

/// Benchmark parsing a serialized snapshot
#[allow(clippy::cast_possible_truncation)]
fn bench_parse_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_snapshot");

    for size in SIZES {
        let response = ShoppingListResponse {
            meal_plan: Some(generate_plan(size)),
        };
        let serialized = serde_json::to_string(&response).unwrap();

        group.throughput(Throughput::Bytes(serialized.len() as u64));
        group.bench_function(size.label(), |b| {
            b.iter(|| parse_snapshot(black_box(&serialized)));
        });
    }

    group.finish();
}

/// Benchmark building and rendering the document
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let plan = generate_plan(PlanSize::Month);
    let aggregation = aggregate(&plan).unwrap();
    let options = RenderOptions::default();

    group.bench_function("build_document", |b| {
        b.iter(|| ShoppingListDocument::build(Some(&plan), black_box(&aggregation), &options));
    });

    let document = ShoppingListDocument::build(Some(&plan), &aggregation, &options);
    for format in [OutputFormat::Json, OutputFormat::Text] {
        group.bench_function(format.as_str(), |b| {
            b.iter(|| format_output(black_box(&document), format));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_parse_snapshot, bench_render);
criterion_main!(benches);
