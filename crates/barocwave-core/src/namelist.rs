//! Literal formatting for namelist values.
//!
//! The consuming model parses these files with a strict reader, so every
//! value is written in exactly one canonical form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Shortest round-trip real with a mandatory fractional part:
/// `400000.0`, `720.0`, `0.0`, `1.0`.
///
/// Magnitudes below 1e-4 or from 1e16 up use exponent form with a signed,
/// two-digit-minimum exponent: `1.0e-05`, `2.5e+16`.
pub fn real(v: f64) -> String {
    // Debug keeps the trailing `.0` that Display drops for integral values and
    // switches to exponent form at the same magnitudes.
    let shortest = format!("{v:?}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };

    let mantissa = if mantissa.contains('.') {
        mantissa.to_owned()
    } else {
        format!("{mantissa}.0")
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// A double-precision real literal carried verbatim, e.g. `1296000.D0` or
/// `720.0D0`.
///
/// Grammar: `digits [ "." [digits] ] ( "D" | "d" ) [sign] digits`, with at
/// least one mantissa digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DoubleLiteral(String);

impl DoubleLiteral {
    pub fn parse(s: &str) -> Result<Self> {
        if is_double_literal(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(GenError::InvalidLiteral(s.to_owned()))
        }
    }

    /// Built-in defaults, covered by the config tests.
    pub(crate) fn builtin(s: &'static str) -> Self {
        debug_assert!(is_double_literal(s), "{s}");
        Self(s.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the literal.
    pub fn value(&self) -> f64 {
        // Grammar guarantees this parses once the exponent marker is swapped.
        self.0.replacen(['D', 'd'], "e", 1).parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for DoubleLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DoubleLiteral {
    type Error = GenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<DoubleLiteral> for String {
    fn from(lit: DoubleLiteral) -> Self {
        lit.0
    }
}

fn is_double_literal(s: &str) -> bool {
    let Some((mantissa, exponent)) = s.split_once(['D', 'd']) else {
        return false;
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || int_part.len() + frac_part.len() == 0 {
        return false;
    }

    let exp_digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    !exp_digits.is_empty() && all_digits(exp_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_keeps_fractional_part() {
        assert_eq!(real(400.0e3), "400000.0");
        assert_eq!(real(1000.0), "1000.0");
        assert_eq!(real(720.0), "720.0");
        assert_eq!(real(0.0), "0.0");
        assert_eq!(real(1.0), "1.0");
        assert_eq!(real(90.0), "90.0");
    }

    #[test]
    fn real_non_integral() {
        assert_eq!(real(0.5), "0.5");
        assert_eq!(real(12.25), "12.25");
    }

    #[test]
    fn real_exponent_form_for_tiny_and_huge_values() {
        assert_eq!(real(1e-5), "1.0e-05");
        assert_eq!(real(2.5e16), "2.5e+16");
        assert_eq!(real(-3e20), "-3.0e+20");
        assert_eq!(real(1.5e-120), "1.5e-120");
    }

    #[test]
    fn real_decimal_form_at_range_edges() {
        assert_eq!(real(1e-4), "0.0001");
        assert_eq!(real(1e15), "1000000000000000.0");
        assert_eq!(real(-0.0), "-0.0");
    }

    #[test]
    fn double_literal_accepts_model_forms() {
        for s in ["1296000.D0", "720.0D0", "12.D0", "1.D0", "5.D-3", "1D5", ".5D0"] {
            assert!(DoubleLiteral::parse(s).is_ok(), "{s} should be accepted");
        }
    }

    #[test]
    fn double_literal_rejects_malformed() {
        for s in ["", "720.0", "D0", ".D0", "1.0D", "1.0E0", "1.0D+", "1,0D0", "abcD0"] {
            assert!(DoubleLiteral::parse(s).is_err(), "{s:?} should be rejected");
        }
    }

    #[test]
    fn double_literal_value() {
        assert_eq!(DoubleLiteral::parse("1296000.D0").unwrap().value(), 1_296_000.0);
        assert_eq!(DoubleLiteral::parse("5.D-3").unwrap().value(), 5.0e-3);
    }

    #[test]
    fn double_literal_serde_is_transparent() {
        let lit = DoubleLiteral::parse("86400.D0").unwrap();
        assert_eq!(serde_json::to_string(&lit).unwrap(), "\"86400.D0\"");
        let back: DoubleLiteral = serde_json::from_str("\"86400.D0\"").unwrap();
        assert_eq!(back, lit);
        assert!(serde_json::from_str::<DoubleLiteral>("\"86400\"").is_err());
    }
}
