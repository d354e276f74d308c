/// Convert a percentage to a rate fraction.
///
/// # Formula
/// ```text
/// i = pct / 100
/// ```
///
/// # Example
/// ```rust
/// # use rspension::prelude::pct_to_rate;
/// let rate = pct_to_rate(8.0); // 8% per year
/// assert_eq!(rate, 0.08);
/// ```
pub fn pct_to_rate(pct: f64) -> f64 {
    pct / 100.0
}

/// Convert a nominal annual rate to the rate per month.
///
/// # Formula
/// ```text
/// i⁽¹²⁾ / 12
/// ```
/// where:
/// - `nom_i` is the nominal annual rate convertible monthly
///
/// This is the nominal split used by every calculation in the crate, not the
/// effective monthly rate `(1 + i)¹⁄¹² - 1`.
pub fn annual_to_monthly_rate(nom_i: f64) -> f64 {
    nom_i / MONTHS_PER_YEAR as f64
}

/// Convert nominal interest rate to effective interest rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
/// where:
/// - `nom_i` is the nominal interest rate convertible m times per year
/// - `m` is the number of conversion periods per year
///
/// # Example
/// ```rust
/// # use rspension::prelude::nom_i_to_eff_i;
/// let eff = nom_i_to_eff_i(0.08, 12); // 8% convertible monthly
/// println!("Effective i: {:.6}", eff);
/// ```
pub fn nom_i_to_eff_i(nom_i: f64, m: u32) -> f64 {
    let m_f64 = m as f64;
    (1.0 + nom_i / m_f64).powf(m_f64) - 1.0
}

/// Number of monthly contributions in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pct_to_rate() {
        assert_abs_diff_eq!(pct_to_rate(8.0), 0.08, epsilon = 1e-12);
        assert_abs_diff_eq!(pct_to_rate(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pct_to_rate(3.5), 0.035, epsilon = 1e-12);
    }

    #[test]
    fn test_annual_to_monthly_rate() {
        assert_abs_diff_eq!(annual_to_monthly_rate(0.12), 0.01, epsilon = 1e-12);
        assert_eq!(annual_to_monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_nom_i_to_eff_i_monthly() {
        // 8% convertible monthly is 8.30% effective
        assert_abs_diff_eq!(nom_i_to_eff_i(0.08, 12), 0.083_000, epsilon = 1e-6);
        // Convertible once a year is already effective
        assert_abs_diff_eq!(nom_i_to_eff_i(0.05, 1), 0.05, epsilon = 1e-12);
    }
}
