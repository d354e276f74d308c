use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};
use rspension::prelude::*;

fn bench_compute_payment(c: &mut Criterion) {
    c.bench_function("compute_payment_30_years_8pct", |b| {
        b.iter(|| {
            compute_payment()
                .start_age(30)
                .end_age(60)
                .target_amount(1_000_000.0)
                .annual_return_rate(0.08)
                .call()
                .unwrap()
        })
    });

    c.bench_function("compute_payment_zero_return", |b| {
        b.iter(|| {
            compute_payment()
                .start_age(30)
                .end_age(60)
                .target_amount(1_200_000.0)
                .annual_return_rate(0.0)
                .call()
                .unwrap()
        })
    });
}

fn bench_sweep_and_series(c: &mut Criterion) {
    let config = CalculatorConfig::default();

    c.bench_function("sweep_by_start_age_default_ages", |b| {
        b.iter(|| {
            sweep_by_start_age()
                .end_age(67)
                .target_amount(1_000_000.0)
                .annual_return_rate(0.06)
                .config(&config)
                .call()
                .unwrap()
        })
    });

    c.bench_function("project_growth_series_18_to_67", |b| {
        b.iter(|| {
            project_growth_series()
                .start_age(18)
                .end_age(67)
                .monthly_payment(500.0)
                .annual_return_rate(0.06)
                .call()
                .unwrap()
        })
    });

    c.bench_function("savings_plan_full", |b| {
        b.iter(|| {
            savings_plan()
                .start_age(35)
                .end_age(67)
                .target_amount(1_000_000.0)
                .annual_return_rate(0.06)
                .call()
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_compute_payment, bench_sweep_and_series);
criterion_main!(benches);
