#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: urlforge vs url crate vs format!
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use urlforge::UrlBuilder;

use url::Url as UrlCrate;

fn bench_build_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_simple");

    group.bench_function("urlforge_reused", |b| {
        let mut builder = UrlBuilder::new();
        b.iter(|| {
            builder
                .set_scheme(black_box("https"))
                .set_hostname(black_box("example.com"))
                .append_path_segment("search")
                .append_query_param("q", black_box("hello world"))
                .build()
        });
    });

    group.bench_function("urlforge_fresh", |b| {
        b.iter(|| {
            UrlBuilder::new()
                .set_scheme(black_box("https"))
                .set_hostname(black_box("example.com"))
                .append_path_segment("search")
                .append_query_param("q", black_box("hello world"))
                .build()
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse(black_box("https://example.com")).unwrap();
            url.path_segments_mut().unwrap().push("search");
            url.query_pairs_mut()
                .append_pair("q", black_box("hello world"));
            url.to_string()
        });
    });

    group.bench_function("format_macro", |b| {
        b.iter(|| {
            format!(
                "https://{}/search?q={}",
                black_box("example.com"),
                black_box("hello%20world")
            )
        });
    });

    group.finish();
}

fn bench_build_query_heavy_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query_heavy");
    let params: Vec<(String, String)> = (0..16)
        .map(|i| (format!("param{i}"), format!("value {i} with spaces")))
        .collect();

    group.bench_function("urlforge_reused", |b| {
        let mut builder = UrlBuilder::new();
        b.iter(|| {
            builder
                .set_scheme("https")
                .set_hostname("api.example.com")
                .append_path_segment("v1")
                .append_path_segment("items");
            for (name, value) in &params {
                builder.append_query_param(name.as_str(), value.as_str());
            }
            builder.build()
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse("https://api.example.com").unwrap();
            {
                let mut segments = url.path_segments_mut().unwrap();
                segments.push("v1");
                segments.push("items");
            }
            {
                let mut pairs = url.query_pairs_mut();
                for (name, value) in &params {
                    pairs.append_pair(name, value);
                }
            }
            url.to_string()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_simple_all,
    bench_build_query_heavy_all
);
criterion_main!(benches);
