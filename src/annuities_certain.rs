use crate::PensionResult;
use bon::builder;

/// Accumulated value of an annuity-certain immediate (in arrears).
///
/// Calculates the accumulated value at the end of n periods of $1 paid at the end of each period, compounded at the periodic rate i.
///
/// # Formula
/// ```text
/// sₙ = ((1 + i)ⁿ - 1) / i
/// ```
/// where:
/// - `i` is the rate per period (monthly for every pension calculation)
/// - `n` is the number of periods
///
/// At `i = 0` there is no compounding and `sₙ = n`.
///
/// # Examples
/// ```rust
/// # use rspension::prelude::*;
/// // 30 years of monthly contributions at 8% convertible monthly
/// let factor = sn().i(0.08 / 12.0).n(360).call()?;
/// println!("Accumulation factor: {:.4}", factor);
/// # PensionResult::Ok(())
/// ```
#[builder]
pub fn sn(i: f64, n: u32) -> PensionResult<f64> {
    if n == 0 {
        return Ok(0.0);
    }

    let n = n as f64;
    if i == 0.0 {
        return Ok(n);
    }

    // sₙ = ((1 + i)ⁿ - 1) / i, via exp_m1/ln_1p so tiny rates do not cancel to 0
    let result = (n * i.ln_1p()).exp_m1() / i;
    Ok(result)
}

/// Level payment per period that accumulates to a target value.
///
/// # Formula
/// ```text
/// PMT = FV / sₙ
/// ```
/// Returns 0 when there are no periods to pay in, callers are expected to
/// reject that case before asking.
#[builder]
pub fn pmt_for_fv(fv: f64, i: f64, n: u32) -> PensionResult<f64> {
    let factor = sn().i(i).n(n).call()?;
    if factor == 0.0 {
        return Ok(0.0);
    }
    Ok(fv / factor)
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fn_sn_01() {
        // Annual-period values from standard compound interest tables
        let rates = [0.01, 0.03, 0.05, 0.08];
        let terms = [10, 20, 30, 40];
        let expected = [10.4622, 26.8704, 66.4388, 259.0565];
        for (idx, (rate, term)) in rates.iter().zip(terms.iter()).enumerate() {
            let ans = sn().i(*rate).n(*term).call().unwrap();
            assert_abs_diff_eq!(ans, expected[idx], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_fn_sn_zero_rate_is_linear() {
        let ans = sn().i(0.0).n(360).call().unwrap();
        assert_eq!(ans, 360.0);
    }

    #[test]
    fn test_fn_sn_zero_periods() {
        assert_eq!(sn().i(0.05).n(0).call().unwrap(), 0.0);
        assert_eq!(sn().i(0.0).n(0).call().unwrap(), 0.0);
    }

    #[test]
    fn test_fn_pmt_for_fv_monthly_8pct() {
        // $1m in 30 years at 8% convertible monthly
        let pmt = pmt_for_fv()
            .fv(1_000_000.0)
            .i(0.08 / 12.0)
            .n(360)
            .call()
            .unwrap();
        assert_abs_diff_eq!(pmt, 670.98, epsilon = 0.01);
    }

    #[test]
    fn test_fn_pmt_for_fv_reverses_sn() {
        let i = 0.004;
        let n = 120;
        let pmt = pmt_for_fv().fv(50_000.0).i(i).n(n).call().unwrap();
        let fv = pmt * sn().i(i).n(n).call().unwrap();
        assert_abs_diff_eq!(fv, 50_000.0, epsilon = 1e-6);
    }
}
