use chatmark_engine::{FormatOptions, format, parse};
use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let reply = common::generate_reply(100);
    group.bench_function("format_reply", |b| {
        b.iter(|| format(std::hint::black_box(&reply)));
    });

    group.bench_function("parse_reply", |b| {
        b.iter(|| parse(std::hint::black_box(&reply), &FormatOptions::default()));
    });

    let noise = common::generate_marker_noise(200);
    group.bench_function("format_marker_noise", |b| {
        b.iter(|| format(std::hint::black_box(&noise)));
    });

    group.finish();
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    group.sample_size(10);

    let reply = common::generate_reply(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&reply));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format, bench_pulldown_cmark_baseline);
criterion_main!(benches);
