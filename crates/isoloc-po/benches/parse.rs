//! Parse throughput benchmark on a synthetic catalogue.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isoloc_po::Catalogue;

fn synthetic_catalogue(entries: usize) -> String {
    let mut src = String::from(
        "msgid \"\"\nmsgstr \"\"\n\"Project-Id-Version: bench\\n\"\n\"Language: sr\\n\"\n",
    );
    for i in 0..entries {
        src.push_str(&format!(
            "\n#. C{i:03}\nmsgid \"Currency {i}\"\nmsgstr \"валута {i}\"\n"
        ));
    }
    src
}

fn bench_parse(c: &mut Criterion) {
    let src = synthetic_catalogue(280);
    c.bench_function("parse_280_entries", |b| {
        b.iter(|| Catalogue::parse(black_box(&src)).unwrap())
    });

    let cat = Catalogue::parse(&src).unwrap();
    c.bench_function("serialize_280_entries", |b| b.iter(|| cat.to_po_string()));
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
