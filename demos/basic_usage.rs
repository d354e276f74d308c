//! # RSPension Basic Usage Example
//!
//! This example demonstrates the basic usage of the rspension crate
//! for pension savings calculations using the builder pattern API.
//!
//! Run with `RUST_LOG=debug` to see the calculator's log output.

use rspension::prelude::*;

fn main() -> PensionResult<()> {
    env_logger::init();

    println!("RSPension Basic Usage Example");
    println!("=============================");
    println!();

    let start_age = 30;
    let end_age = 67;
    let target = 1_500_000.0;
    let rate = pct_to_rate(6.5);

    let plan = savings_plan()
        .start_age(start_age)
        .end_age(end_age)
        .target_amount(target)
        .annual_return_rate(rate)
        .call()?;

    let result = plan.result;
    println!("=== Required contribution (age {start_age} to {end_age}) ===");
    println!("  Monthly payment:     {}", result.monthly_payment);
    println!("  Total contributions: {}", result.total_contributions);
    println!("  Total earnings:      {}", result.total_earnings);
    println!("  Return on savings:   {}%", result.return_rate_percent);
    println!(
        "  Effective annual:    {:.4}%",
        nom_i_to_eff_i(rate, MONTHS_PER_YEAR) * 100.0
    );
    println!();

    println!("=== By starting age ===");
    for row in &plan.comparison {
        let marker = if row.is_current_age { " <- you" } else { "" };
        println!("  Age {}: {}/month{marker}", row.age, row.result.monthly_payment);
    }
    println!();

    println!("=== Growth every 5 years ===");
    for point in plan.growth.iter().step_by(5) {
        println!(
            "  Age {}: value {}, contributed {}, earned {}",
            point.age, point.total_value, point.total_contributions, point.total_earnings
        );
    }

    Ok(())
}
