use alloydb::{AlloyDb, Parser, analyze};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const TEXTS: &[&str] = &[
    "Cu 75.45%, Ni 12.50%, Zn 9.76%",
    "Cu: 62.59, Zn: 33.41",
    "Cu 62.59 Zn 33.41 Pb abc",
    "Element Wt%\nFe 68.2\nCr 17.9\nNi 10.1\nMn 1.8\nTi 0.5\nC 0.1",
];

fn bench_parse(c: &mut Criterion) {
    let parser = Parser::new();

    c.bench_function("parse_mixed_texts", |b| {
        b.iter(|| {
            for text in TEXTS {
                black_box(parser.parse(black_box(text)));
            }
        });
    });
}

fn bench_match(c: &mut Criterion) {
    let db = AlloyDb::new();
    let compositions: Vec<_> = TEXTS.iter().map(|t| db.parse(t)).collect();

    c.bench_function("find_matches_builtin_catalog", |b| {
        b.iter(|| {
            for comp in &compositions {
                black_box(db.find_matches(black_box(comp)));
            }
        });
    });

    c.bench_function("analyze_mixed_compositions", |b| {
        b.iter(|| {
            for comp in &compositions {
                black_box(analyze(black_box(comp)));
            }
        });
    });
}

fn bench_identify(c: &mut Criterion) {
    let db = AlloyDb::new();

    c.bench_function("identify_end_to_end", |b| {
        b.iter(|| {
            for text in TEXTS {
                black_box(db.identify(black_box(text)));
            }
        });
    });
}

criterion_group!(benches, bench_parse, bench_match, bench_identify);
criterion_main!(benches);
