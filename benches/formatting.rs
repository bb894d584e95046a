use criterion::{Criterion, criterion_group, criterion_main};
use logline::fmt::{MessageTemplate, Zone};
use logline::{CanonicalNames, Level, LineFormatter, LocalizedNames, LogEvent};
use serde_json::json;
use std::hint::black_box;

fn bench_line_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("LineFormatter::format");

    let formatter = LineFormatter::new().zone(Zone::utc()).names(CanonicalNames);
    let plain = LogEvent::new(50_709_000, "kernel.boot", Level::Info, "Application started");
    group.bench_function("plain", |b| {
        b.iter(|| formatter.format(black_box(&plain)));
    });

    let with_args = LogEvent::new(50_709_000, "kernel.boot", Level::Info, "started in {0}ms ({1})")
        .arg(42)
        .arg("cold");
    group.bench_function("with_args", |b| {
        b.iter(|| formatter.format(black_box(&with_args)));
    });

    let localized = LineFormatter::new()
        .zone(Zone::utc())
        .names(LocalizedNames::new("de_DE".parse().unwrap_or_default()));
    group.bench_function("localized", |b| {
        b.iter(|| localized.format(black_box(&with_args)));
    });

    let local = LineFormatter::new().names(CanonicalNames);
    group.bench_function("local_zone", |b| {
        b.iter(|| local.format(black_box(&plain)));
    });

    group.finish();
}

fn bench_message_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("MessageTemplate");

    group.bench_function("parse", |b| {
        b.iter(|| MessageTemplate::parse(black_box("GET {0} returned {1,number} after {2}ms")));
    });

    let template = MessageTemplate::parse("GET {0} returned {1,number} after {2}ms");
    let args = [json!("/users/123"), json!(500), json!(12.5)];
    group.bench_function("render", |b| {
        b.iter(|| template.render(black_box(&args)));
    });

    group.finish();
}

criterion_group!(benches, bench_line_format, bench_message_template);
criterion_main!(benches);
