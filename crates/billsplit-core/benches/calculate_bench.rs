use billsplit_core::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn even_split_benchmark(c: &mut Criterion) {
    let inputs = SplitInputs::new(1234.56, 18.0, 12).unwrap();
    let roster = Roster::default();
    c.bench_function("calculate_even_split_12", |b| {
        b.iter(|| calculate(black_box(&inputs), SplitMode::EvenSplit, black_box(&roster)))
    });
}

fn custom_split_benchmark(c: &mut Criterion) {
    let inputs = SplitInputs::new(1234.56, 18.0, 12).unwrap();
    let roster = Roster::even(12);
    c.bench_function("calculate_custom_split_12", |b| {
        b.iter(|| calculate(black_box(&inputs), SplitMode::CustomContribution, black_box(&roster)))
    });
}

fn roster_churn_benchmark(c: &mut Criterion) {
    c.bench_function("add_remove_contributor", |b| {
        let roster = Roster::even(8);
        b.iter(|| {
            let added = add_contributor(black_box(&roster));
            remove_contributor(&added.roster, 9)
        })
    });
}

criterion_group!(benches, even_split_benchmark, custom_split_benchmark, roster_churn_benchmark);
criterion_main!(benches);
