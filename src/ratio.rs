//! Dimensionless frequency relationships.
//!
//! A [Ratio] is "how much you multiply a frequency by". Stacking two ratios multiplies them,
//! which is why the "additive" operations here ([Ratio::add], [Ratio::subtract]) are
//! multiplication and division, and [Ratio::scale] is exponentiation.

use std::{cmp::Ordering, fmt, str::FromStr};

use num_rational::Rational64;
use num_traits::{checked_pow, CheckedDiv, CheckedMul, ToPrimitive};

use crate::error::{NameKind, TheoryErr};

/// `2^(1/12)`
pub const SEMITONE_FACTOR: f64 = 1.0594630943592953;

/// The internal representation of a [Ratio]. As long as only rational operations are applied
/// to exact ratios, they stay exact. Overflows and irrational exponents fall back to floating
/// point.
#[derive(Clone, Copy, Debug)]
pub enum RatioValue {
    Exact(Rational64),
    Approx(f64),
}

#[derive(Clone, Copy, Debug)]
pub struct Ratio {
    value: RatioValue,
}

/// Exponents accepted by [Ratio::scale].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Exponent {
    Integer(i32),
    Real(f64),
    Rational(Rational64),
}

impl From<i32> for Exponent {
    fn from(value: i32) -> Self {
        Exponent::Integer(value)
    }
}

impl From<f64> for Exponent {
    fn from(value: f64) -> Self {
        Exponent::Real(value)
    }
}

impl From<Rational64> for Exponent {
    fn from(value: Rational64) -> Self {
        Exponent::Rational(value)
    }
}

pub const UNISON: Ratio = Ratio {
    value: RatioValue::Exact(Rational64::new_raw(1, 1)),
};

pub const OCTAVE: Ratio = Ratio {
    value: RatioValue::Exact(Rational64::new_raw(2, 1)),
};

pub const SEMITONE: Ratio = Ratio {
    value: RatioValue::Approx(SEMITONE_FACTOR),
};

impl Ratio {
    pub fn new(value: f64) -> Result<Self, TheoryErr> {
        if !(value.is_finite() && value > 0.0) {
            return Err(TheoryErr::InvalidValue("ratio", value));
        }
        Ok(Ratio {
            value: RatioValue::Approx(value),
        })
    }

    /// The exact ratio `numer/denom`. Both must be non-zero and of the same sign, and neither
    /// may be `i64::MIN`, whose sign can't be flipped.
    pub fn exact(numer: i64, denom: i64) -> Result<Self, TheoryErr> {
        if numer == 0
            || denom == 0
            || numer == i64::MIN
            || denom == i64::MIN
            || (numer > 0) != (denom > 0)
        {
            return Err(TheoryErr::InvalidValue(
                "ratio",
                numer as f64 / denom as f64,
            ));
        }
        Ok(Ratio {
            value: RatioValue::Exact(Rational64::new(numer, denom)),
        })
    }

    pub fn value(&self) -> RatioValue {
        self.value
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.value, RatioValue::Exact(_))
    }

    pub fn to_f64(&self) -> f64 {
        match self.value {
            RatioValue::Exact(r) => r
                .to_f64()
                .unwrap_or(*r.numer() as f64 / *r.denom() as f64),
            RatioValue::Approx(x) => x,
        }
    }

    /// Size in cents, i.e. hundredths of an equally tempered semitone.
    pub fn cents(&self) -> f64 {
        1200.0 * self.to_f64().log2()
    }

    /// Stack two ratios (multiply them).
    pub fn add(&self, other: &Ratio) -> Ratio {
        match (self.value, other.value) {
            (RatioValue::Exact(a), RatioValue::Exact(b)) => match a.checked_mul(&b) {
                Some(r) => Ratio::from_exact(r),
                None => Ratio::from_approx(self.to_f64() * other.to_f64()),
            },
            _ => Ratio::from_approx(self.to_f64() * other.to_f64()),
        }
    }

    /// Remove `other` from a stack (divide by it).
    pub fn subtract(&self, other: &Ratio) -> Ratio {
        match (self.value, other.value) {
            (RatioValue::Exact(a), RatioValue::Exact(b)) => match a.checked_div(&b) {
                Some(r) => Ratio::from_exact(r),
                None => Ratio::from_approx(self.to_f64() / other.to_f64()),
            },
            _ => Ratio::from_approx(self.to_f64() / other.to_f64()),
        }
    }

    /// Stack `n` copies of this ratio (raise it to the `n`-th power).
    pub fn scale<E: Into<Exponent>>(&self, n: E) -> Ratio {
        match (self.value, n.into()) {
            (RatioValue::Exact(r), Exponent::Integer(i)) => {
                let base = if i < 0 { r.recip() } else { r };
                match checked_pow(base, i.unsigned_abs() as usize) {
                    Some(res) => Ratio::from_exact(res),
                    None => Ratio::from_approx(self.to_f64().powi(i)),
                }
            }
            (RatioValue::Exact(r), Exponent::Rational(q)) if q.is_integer() => {
                match q.to_integer().to_i32() {
                    Some(i) => Ratio::from_exact(r).scale(i),
                    None => Ratio::from_approx(self.to_f64().powf(q.to_integer() as f64)),
                }
            }
            (_, Exponent::Integer(i)) => Ratio::from_approx(self.to_f64().powi(i)),
            (_, Exponent::Real(x)) => Ratio::from_approx(self.to_f64().powf(x)),
            (_, Exponent::Rational(q)) => {
                let x = *q.numer() as f64 / *q.denom() as f64;
                Ratio::from_approx(self.to_f64().powf(x))
            }
        }
    }

    /// The reciprocal: "up a fifth" becomes "down a fifth".
    pub fn invert(&self) -> Ratio {
        match self.value {
            RatioValue::Exact(r) => Ratio::from_exact(r.recip()),
            RatioValue::Approx(x) => Ratio::from_approx(1.0 / x),
        }
    }

    /// The ratio that, stacked onto this one, gives exactly one octave.
    pub fn complement(&self) -> Ratio {
        self.subtract(&OCTAVE).invert()
    }

    /// private: only called with products and quotients of positive values.
    fn from_exact(r: Rational64) -> Ratio {
        Ratio {
            value: RatioValue::Exact(r),
        }
    }

    /// private: see [Ratio::from_exact]
    fn from_approx(x: f64) -> Ratio {
        Ratio {
            value: RatioValue::Approx(x),
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        UNISON
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (RatioValue::Exact(a), RatioValue::Exact(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.value, other.value) {
            (RatioValue::Exact(a), RatioValue::Exact(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            RatioValue::Exact(r) if r.is_integer() => write!(f, "{}/1", r.numer()),
            RatioValue::Exact(r) => write!(f, "{r}"),
            RatioValue::Approx(x) => write!(f, "{x}"),
        }
    }
}

impl FromStr for Ratio {
    type Err = TheoryErr;

    /// Accepts exact fractions like `3/2` and decimals like `1.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryErr::InvalidName(NameKind::Ratio, s.into());
        if let Some((numer, denom)) = s.trim().split_once('/') {
            let numer: i64 = numer.parse().map_err(|_| invalid())?;
            let denom: i64 = denom.parse().map_err(|_| invalid())?;
            return Ratio::exact(numer, denom);
        }
        let x: f64 = s.trim().parse().map_err(|_| invalid())?;
        Ratio::new(x)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_nonpositive() {
        assert!(Ratio::new(0.0).is_err());
        assert!(Ratio::new(-1.5).is_err());
        assert!(Ratio::new(f64::NAN).is_err());
        assert!(Ratio::exact(3, 0).is_err());
        assert!(Ratio::exact(-3, 2).is_err());
        assert!(Ratio::exact(-3, -2).is_ok());
        assert!(Ratio::exact(i64::MIN, -1).is_err());
        assert!(Ratio::exact(-1, i64::MIN).is_err());
        assert_eq!(
            Ratio::exact(i64::MAX, i64::MAX).unwrap(),
            UNISON
        );
    }

    #[test]
    fn test_exact_arithmetic() {
        let fifth = Ratio::exact(3, 2).unwrap();
        let fourth = Ratio::exact(4, 3).unwrap();

        assert_eq!(fifth.add(&fourth), OCTAVE);
        assert!(fifth.add(&fourth).is_exact());
        assert_eq!(OCTAVE.subtract(&fifth), fourth);
        assert_eq!(fifth.complement(), fourth);
        assert_eq!(fifth.scale(2), Ratio::exact(9, 4).unwrap());
        assert_eq!(fifth.scale(-1), Ratio::exact(2, 3).unwrap());
        assert_eq!(OCTAVE.scale(0), UNISON);
        assert_eq!(
            OCTAVE.scale(Rational64::new(3, 1)),
            Ratio::exact(8, 1).unwrap()
        );
    }

    #[test]
    fn test_overflow_falls_back_to_approx() {
        let big = OCTAVE.scale(62);
        assert!(big.is_exact());
        let bigger = big.add(&OCTAVE.scale(10));
        assert!(!bigger.is_exact());
        assert_relative_eq!(bigger.to_f64(), 2f64.powi(72), max_relative = 1e-12);
    }

    #[test]
    fn test_float_arithmetic() {
        assert_eq!(Ratio::new(1.5).unwrap().invert(), Ratio::new(1.0 / 1.5).unwrap());
        assert_eq!(
            Ratio::new(1.25).unwrap().complement(),
            Ratio::new(1.6).unwrap()
        );
        assert_relative_eq!(SEMITONE.scale(12).to_f64(), 2.0, max_relative = 1e-12);
        assert_relative_eq!(
            OCTAVE.scale(Rational64::new(1, 12)).to_f64(),
            SEMITONE_FACTOR,
            max_relative = 1e-12
        );
        assert_relative_eq!(OCTAVE.scale(0.5).to_f64(), 2f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_ordering() {
        assert!(OCTAVE > Ratio::exact(3, 2).unwrap());
        assert!(Ratio::new(1.4).unwrap() < Ratio::exact(3, 2).unwrap());
        assert_eq!(Ratio::new(2.0).unwrap(), OCTAVE);
    }

    #[test]
    fn test_cents() {
        assert_relative_eq!(OCTAVE.cents(), 1200.0, max_relative = 1e-12);
        assert_relative_eq!(SEMITONE.cents(), 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3/2".parse::<Ratio>().unwrap(), Ratio::exact(3, 2).unwrap());
        assert!("3/2".parse::<Ratio>().unwrap().is_exact());
        assert_eq!("1.25".parse::<Ratio>().unwrap(), Ratio::new(1.25).unwrap());
        assert!("3/0".parse::<Ratio>().is_err());
        assert!("-1".parse::<Ratio>().is_err());
        assert!("fifth".parse::<Ratio>().is_err());
        assert!("3/2/1".parse::<Ratio>().is_err());
        assert!("-9223372036854775808/-1".parse::<Ratio>().is_err());
        assert!("9223372036854775808/1".parse::<Ratio>().is_err());
        assert_eq!("-3/-2".parse::<Ratio>().unwrap(), Ratio::exact(3, 2).unwrap());
        assert_eq!(Ratio::exact(3, 2).unwrap().to_string(), "3/2");
        assert_eq!(OCTAVE.to_string(), "2/1");
    }
}
