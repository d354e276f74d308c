use proptest::prelude::*;
use rspension::prelude::*;

fn payment(start_age: u32, end_age: u32, target: f64, rate: f64) -> CalculationResult {
    compute_payment()
        .start_age(start_age)
        .end_age(end_age)
        .target_amount(target)
        .annual_return_rate(rate)
        .call()
        .unwrap()
}

proptest! {
    #[test]
    fn earlier_start_never_pays_more(
        start_age in 18u32..70,
        gap in 1u32..20,
        extra in 1u32..30,
        target in 1_000.0f64..10_000_000.0,
        rate in 0.0f64..0.2,
    ) {
        let later = start_age + gap;
        let end_age = later + extra;
        let early = payment(start_age, end_age, target, rate);
        let late = payment(later, end_age, target, rate);
        prop_assert!(early.monthly_payment <= late.monthly_payment);
    }

    #[test]
    fn compute_payment_is_deterministic(
        start_age in 18u32..60,
        years in 1u32..50,
        target in 1.0f64..5_000_000.0,
        rate in 0.0f64..0.15,
    ) {
        let a = payment(start_age, start_age + years, target, rate);
        let b = payment(start_age, start_age + years, target, rate);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn earnings_never_negative_for_non_negative_rates(
        start_age in 18u32..60,
        years in 1u32..50,
        target in 1_000.0f64..5_000_000.0,
        rate in 0.0f64..0.15,
    ) {
        let result = payment(start_age, start_age + years, target, rate);
        prop_assert!(result.total_earnings >= 0.0);
        prop_assert!(result.return_rate_percent.is_finite());
    }

    #[test]
    fn sweep_keeps_only_ages_below_end(
        end_age in 19u32..100,
        ages in proptest::collection::vec(18u32..120, 1..12),
    ) {
        let rows = sweep_by_start_age()
            .end_age(end_age)
            .target_amount(100_000.0)
            .annual_return_rate(0.05)
            .candidate_ages(ages.clone())
            .call()
            .unwrap();
        let kept: Vec<u32> = ages.into_iter().filter(|age| *age < end_age).collect();
        let got: Vec<u32> = rows.iter().map(|row| row.age).collect();
        prop_assert_eq!(got, kept);
    }

    #[test]
    fn growth_series_starts_at_zero_and_grows(
        start_age in 18u32..80,
        years in 1u32..60,
        monthly_payment in 0.0f64..10_000.0,
        rate in 0.0f64..0.15,
    ) {
        let series = project_growth_series()
            .start_age(start_age)
            .end_age(start_age + years)
            .monthly_payment(monthly_payment)
            .annual_return_rate(rate)
            .call()
            .unwrap();
        prop_assert_eq!(series.len() as u32, years + 1);
        prop_assert_eq!(series[0].total_value, 0.0);
        prop_assert_eq!(series[0].total_contributions, 0.0);
        prop_assert_eq!(series[0].total_earnings, 0.0);
        for pair in series.windows(2) {
            prop_assert!(pair[0].total_value <= pair[1].total_value);
        }
    }
}
