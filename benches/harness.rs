#[macro_use]
extern crate criterion;

use bigbench::{Bucket, Engine, LehmerEngine, NumEngine, OperationKind, Operands, TrialPolicy};
use criterion::Criterion;
use rand::{rngs::StdRng, SeedableRng};

fn operands(kind: OperationKind, exponent: u32) -> Operands<<NumEngine as Engine>::Int> {
    let mut rng = StdRng::seed_from_u64(1);
    Operands::generate(&NumEngine, &mut rng, kind, 1 << exponent, 64)
}

fn criterion_benchmark(c: &mut Criterion) {
    let policy = TrialPolicy::default();
    c.bench_function("trial count", |b| b.iter(|| policy.trial_count(OperationKind::Modulo, 23)));

    let gcd = Bucket { kind: OperationKind::Gcd, exponent: 12, trials: 64 };
    let gcd_operands = operands(gcd.kind, gcd.exponent);
    c.bench_function("gcd 4096 num", |b| b.iter(|| gcd.time(&NumEngine, &gcd_operands)));
    c.bench_function("gcd 4096 lehmer", |b| b.iter(|| gcd.time(&LehmerEngine, &gcd_operands)));

    let div = Bucket { kind: OperationKind::FloorDivide, exponent: 12, trials: 64 };
    let div_operands = operands(div.kind, div.exponent);
    c.bench_function("div 4096", |b| b.iter(|| div.time(&NumEngine, &div_operands)));

    c.bench_function("generate 4096", |b| b.iter(|| operands(OperationKind::Multiply, 12)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
