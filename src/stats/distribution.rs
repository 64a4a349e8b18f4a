//! Chi-squared distribution with one degree of freedom.

/// Complementary error function, fractional error under 1.2e-7.
///
/// Numerical Recipes' Chebyshev fit.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87 + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let r = t * (-z * z + poly).exp();
    if x >= 0.0 {
        r
    } else {
        2.0 - r
    }
}

/// Survival function (upper tail p-value) of a chi-squared(1) statistic.
pub fn chi_squared_sf(statistic: f64) -> f64 {
    if statistic <= 0.0 || statistic.is_nan() {
        return 1.0;
    }
    erfc((statistic / 2.0).sqrt()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{chi_squared_sf, erfc};

    #[test]
    fn critical_values() {
        assert!((chi_squared_sf(3.841_459) - 0.05).abs() < 1e-5);
        assert!((chi_squared_sf(6.634_897) - 0.01).abs() < 1e-5);
        assert!((chi_squared_sf(10.827_566) - 0.001).abs() < 1e-5);
        assert_eq!(chi_squared_sf(0.0), 1.0);
    }

    #[test]
    fn erfc_symmetry() {
        assert!((erfc(0.0) - 1.0).abs() < 1e-6);
        assert!((erfc(-1.0) + erfc(1.0) - 2.0).abs() < 1e-12);
    }
}
