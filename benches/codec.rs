use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_sfv::{parse_dict, parse_dict_line, parse_item_line, parse_list_line, Encode};

const PRIORITY: &str = "u=2, i";
const ACCEPT: &str = "text/html;q=1.0, application/xhtml+xml;q=0.9, application/xml;q=0.9, */*;q=0.8";
const SIGNATURE: &str = r#"sig1=("@method" "@target-uri" "@authority" "content-digest");created=1618884473;keyid="test-key-rsa-pss""#;
const BINARY: &str = ":cHJldGVuZCB0aGlzIGlzIGJpbmFyeSBjb250ZW50Lg==:";

fn benchmark_parse_small(c: &mut Criterion) {
    c.bench_function("parse_dict_priority", |b| {
        b.iter(|| parse_dict_line(black_box(PRIORITY)))
    });

    c.bench_function("parse_item_binary", |b| {
        b.iter(|| parse_item_line(black_box(BINARY)))
    });
}

fn benchmark_parse_realistic(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_realistic");

    group.bench_function("accept_list", |b| {
        b.iter(|| parse_list_line(black_box(ACCEPT)))
    });

    group.bench_function("signature_input_dict", |b| {
        b.iter(|| parse_dict_line(black_box(SIGNATURE)))
    });

    group.finish();
}

fn benchmark_parse_list_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_list_size");

    for size in [10, 50, 100, 500].iter() {
        let input = (0..*size)
            .map(|i| format!("item{};q=0.{}", i, i % 10))
            .collect::<Vec<_>>()
            .join(", ");

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse_list_line(black_box(input)))
        });
    }
    group.finish();
}

fn benchmark_parse_multi_line(c: &mut Criterion) {
    let lines: Vec<String> = (0..20).map(|i| format!("k{}=({} {})", i, i, i + 1)).collect();

    c.bench_function("parse_dict_multi_line", |b| {
        b.iter(|| parse_dict(black_box(&lines)))
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let accept = parse_list_line(ACCEPT).unwrap();
    let signature = parse_dict_line(SIGNATURE).unwrap();
    let binary = parse_item_line(BINARY).unwrap();

    group.bench_function("accept_list", |b| b.iter(|| black_box(&accept).encode()));

    group.bench_function("signature_input_dict", |b| {
        b.iter(|| black_box(&signature).encode())
    });

    group.bench_function("item_binary", |b| b.iter(|| black_box(&binary).encode()));

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_signature", |b| {
        b.iter(|| {
            let dict = parse_dict_line(black_box(SIGNATURE)).unwrap();
            dict.encode()
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_small,
    benchmark_parse_realistic,
    benchmark_parse_list_size,
    benchmark_parse_multi_line,
    benchmark_encode,
    benchmark_roundtrip
);
criterion_main!(benches);
