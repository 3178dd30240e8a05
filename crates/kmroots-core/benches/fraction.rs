use criterion::{Criterion, criterion_group, criterion_main};
use kmroots_core::fraction::Fraction;
use num_bigint::BigInt;
use std::hint::black_box;

/// A positive integer with roughly `digits` decimal digits.
fn huge(digits: usize) -> BigInt {
    let mut s = String::from("7");
    s.push_str(&"314159265".repeat(digits / 9 + 1));
    s.truncate(digits);
    s.parse().unwrap()
}

fn bench_normalize(c: &mut Criterion) {
    let shared = huge(300);
    let numerator = &shared * 6;
    let denominator = &shared * 10;

    c.bench_function("normalize_300_digit_shared_factor", |b| {
        b.iter(|| {
            Fraction::new(
                black_box(numerator.clone()),
                black_box(denominator.clone()),
            )
        });
    });
}

fn bench_accumulate(c: &mut Criterion) {
    let a = Fraction::new(huge(200), huge(150) + 1);
    let b_term = Fraction::new(huge(180) + 7, huge(120));

    c.bench_function("accumulate_200_digit_sum", |b| {
        b.iter(|| {
            let mut sum = Fraction::zero();
            for _ in 0..8 {
                sum += &(black_box(&a) * black_box(&b_term));
            }
            sum
        });
    });
}

criterion_group!(benches, bench_normalize, bench_accumulate);
criterion_main!(benches);
