use criterion::{black_box, criterion_group, criterion_main, Criterion};
use yantlr::tokenize;

const RULES: [&str; 4] = [
    r#"letter = "A" | "B" | "C" | "D" ;"#,
    "identifier = letter , { letter | digit | '_' } ;",
    r#"number = [ "-" ] , digit , { digit } ;"#,
    "term = ( identifier | number ) - reserved ;",
];

fn bench_tokenize(c: &mut Criterion) {
    let lines: Vec<&str> = RULES.iter().copied().cycle().take(1000).collect();

    c.bench_function("tokenize 1000 rules", |b| {
        b.iter(|| tokenize(black_box(&lines)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
