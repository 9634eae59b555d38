// File: src/numeric.rs
//! Number-theoretic and representational properties of an integer.

use crate::core::types::{NumberAnalysis, Parity, PrimeStatus};
use crate::digest::Digests;
use crate::error::{GematriaError, Result};
use crate::symbolism;

/// Computes every derived field for `n`.
///
/// Fails on negative input (the decimal rendering carries a `-` that digit
/// statistics cannot sum) and when the cube does not fit in an `i128`.
pub fn analyze_number(n: i64) -> Result<NumberAnalysis> {
    Ok(NumberAnalysis {
        decimal: n,
        hexadecimal: to_radix(n, 16),
        binary: to_radix(n, 2),
        octal: to_radix(n, 8),
        parity: parity(n),
        factors: factorize(n),
        prime_status: if is_prime(n) {
            PrimeStatus::Prime
        } else {
            PrimeStatus::Composite
        },
        digit_sum: digit_sum(n)?,
        digit_count: digit_count(n),
        square: power(n, 2, "square")?,
        cube: power(n, 3, "cube")?,
        square_root: square_root(n),
        digests: Digests::of(n),
        gematria_value: n,
        meaning: symbolism::meaning(n),
    })
}

/// Renders `n` in base 2, 8, 10 or 16 without prefix, uppercase digits.
/// Negative numbers get a leading `-` before the magnitude.
pub fn to_radix(n: i64, radix: u32) -> String {
    let magnitude = n.unsigned_abs();
    let digits = match radix {
        2 => format!("{:b}", magnitude),
        8 => format!("{:o}", magnitude),
        16 => format!("{:X}", magnitude),
        _ => magnitude.to_string(),
    };
    if n < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

pub fn parity(n: i64) -> Parity {
    if n.rem_euclid(2) == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// Prime factors by trial division, in ascending order with multiplicity.
///
/// For `n < 2` the result is the degenerate `[n]`.
pub fn factorize(n: i64) -> Vec<i64> {
    if n < 2 {
        return vec![n];
    }
    let mut factors = Vec::new();
    let mut rest = n;
    let mut d = 2;
    // `d <= rest / d` is `d * d <= rest` without overflow.
    while d <= rest / d {
        while rest % d == 0 {
            factors.push(d);
            rest /= d;
        }
        d += 1;
    }
    if rest > 1 {
        factors.push(rest);
    }
    factors
}

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Sum of the decimal digits of `n.to_string()`.
pub fn digit_sum(n: i64) -> Result<u32> {
    n.to_string()
        .chars()
        .map(|c| c.to_digit(10).ok_or(GematriaError::InvalidDigit(c)))
        .sum()
}

/// Number of characters in `n.to_string()`.
pub fn digit_count(n: i64) -> usize {
    n.to_string().len()
}

/// `sqrt(n)`, or NaN when `n` is negative.
pub fn square_root(n: i64) -> f64 {
    if n >= 0 {
        (n as f64).sqrt()
    } else {
        f64::NAN
    }
}

fn power(n: i64, exp: u32, operation: &'static str) -> Result<i128> {
    i128::from(n)
        .checked_pow(exp)
        .ok_or(GematriaError::Overflow { value: n, operation })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorize() {
        assert_eq!(factorize(52), vec![2, 2, 13]);
        assert_eq!(factorize(2), vec![2]);
        assert_eq!(factorize(97), vec![97]);
        assert_eq!(factorize(360), vec![2, 2, 2, 3, 3, 5]);
    }

    #[test]
    fn test_factorize_degenerate() {
        assert_eq!(factorize(0), vec![0]);
        assert_eq!(factorize(1), vec![1]);
        assert_eq!(factorize(-12), vec![-12]);
    }

    #[test]
    fn test_factorize_large_prime_does_not_overflow() {
        // Largest prime below 2^31.
        assert_eq!(factorize(2_147_483_647), vec![2_147_483_647]);
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(52));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(-7));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(49));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_radix() {
        assert_eq!(to_radix(52, 16), "34");
        assert_eq!(to_radix(255, 16), "FF");
        assert_eq!(to_radix(52, 2), "110100");
        assert_eq!(to_radix(52, 8), "64");
        assert_eq!(to_radix(52, 10), "52");
        assert_eq!(to_radix(0, 2), "0");
        assert_eq!(to_radix(-10, 16), "-A");
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity(52), Parity::Even);
        assert_eq!(parity(0), Parity::Even);
        assert_eq!(parity(7), Parity::Odd);
        assert_eq!(parity(-3), Parity::Odd);
    }

    #[test]
    fn test_digit_statistics() {
        assert_eq!(digit_sum(52).unwrap(), 7);
        assert_eq!(digit_sum(0).unwrap(), 0);
        assert_eq!(digit_count(52), 2);
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(-52), 3);
        assert_eq!(digit_sum(-52), Err(GematriaError::InvalidDigit('-')));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(0), 0.0);
        assert_eq!(square_root(49), 7.0);
        assert!(square_root(-1).is_nan());
    }

    #[test]
    fn test_analyze_52() {
        let analysis = analyze_number(52).unwrap();
        assert_eq!(analysis.decimal, 52);
        assert_eq!(analysis.hexadecimal, "34");
        assert_eq!(analysis.binary, "110100");
        assert_eq!(analysis.octal, "64");
        assert_eq!(analysis.parity, Parity::Even);
        assert_eq!(analysis.factors, vec![2, 2, 13]);
        assert_eq!(analysis.prime_status, PrimeStatus::Composite);
        assert_eq!(analysis.digit_sum, 7);
        assert_eq!(analysis.digit_count, 2);
        assert_eq!(analysis.square, 2704);
        assert_eq!(analysis.cube, 140_608);
        assert!((analysis.square_root - 7.2111).abs() < 1e-4);
        assert_eq!(analysis.gematria_value, 52);
        assert_eq!(analysis.meaning, symbolism::GENERAL_MEANING);
    }

    #[test]
    fn test_analyze_zero() {
        let analysis = analyze_number(0).unwrap();
        assert_eq!(analysis.factors, vec![0]);
        assert_eq!(analysis.prime_status, PrimeStatus::Composite);
        assert_eq!(analysis.square_root, 0.0);
        assert_eq!(analysis.square, 0);
        assert_eq!(analysis.cube, 0);
    }

    #[test]
    fn test_analyze_negative_fails_on_digits() {
        assert_eq!(
            analyze_number(-5).unwrap_err(),
            GematriaError::InvalidDigit('-')
        );
    }

    #[test]
    fn test_analyze_large_value() {
        assert_eq!(
            power(i64::MAX, 2, "square").unwrap(),
            i128::from(i64::MAX) * i128::from(i64::MAX)
        );
        assert_eq!(
            analyze_number(i64::MAX).unwrap_err(),
            GematriaError::Overflow {
                value: i64::MAX,
                operation: "cube"
            }
        );
        assert!(analyze_number(1_000_000_000).is_ok());
    }
}
