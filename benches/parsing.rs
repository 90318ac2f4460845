use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ini_doc::{from_str, from_str_with_config, to_string, Configuration};

fn generate(sections: usize, keys: usize) -> String {
    let mut text = String::new();
    for s in 0..sections {
        text.push_str(&format!("; section {s}\n[section_{s}]\n"));
        for k in 0..keys {
            text.push_str(&format!("key_{k} = value {s}.{k}\n"));
        }
        text.push('\n');
    }
    text
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "; comment\n[server]\nhost = localhost\nport = 8080\n";

    c.bench_function("parse_simple", |b| b.iter(|| from_str(black_box(text))));
}

fn benchmark_parse_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for sections in [1, 10, 100].iter() {
        let text = generate(*sections, 20);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_parse_case_insensitive(c: &mut Criterion) {
    let text = generate(50, 20);
    let config = Configuration::new().with_case_insensitive(true);

    c.bench_function("parse_case_insensitive", |b| {
        b.iter(|| from_str_with_config(black_box(&text), &config))
    });
}

fn benchmark_write(c: &mut Criterion) {
    let doc = from_str(&generate(50, 20)).unwrap();

    c.bench_function("write_document", |b| b.iter(|| to_string(black_box(&doc))));
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_parse_sizes,
    benchmark_parse_case_insensitive,
    benchmark_write
);
criterion_main!(benches);
