//! Intervals quantized to equally tempered semitones.
//!
//! An [Interval] is a [Ratio] that is a whole number of 12TET semitones, together with the
//! conventional name (quality and quantity) used for it. Arithmetic on intervals is arithmetic
//! on semitone counts; the underlying ratio is always recomputed from the count.

use std::{cmp::Ordering, fmt, hash, ops, str::FromStr};

use num_integer::Integer;

use crate::{
    error::TheoryErr,
    ratio::{Ratio, OCTAVE as OCTAVE_RATIO, SEMITONE as SEMITONE_RATIO},
    util::mod12::{in_range, residue, SEMITONES_PER_OCTAVE},
};

pub mod name;
pub use name::Quality;
use name::{QUANTITY_PER_OCTAVE, RESIDUE_NAMES};

/// A number of 12TET semitones with its name.
///
/// Equality, ordering, and hashing only look at [semitones][Interval::semitones], so the
/// augmented fourth and the diminished fifth are equal.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    semitones: i64,
    quality: Quality,
    quantity: u64,
}

impl Interval {
    /// Positive counts are ascending, negative ones descending. The name is taken from the
    /// residue table, so six semitones are called `d5`.
    pub const fn from_semitones(semitones: i64) -> Self {
        let magnitude = semitones.unsigned_abs();
        let (quality, base) = RESIDUE_NAMES[(magnitude % 12) as usize];
        Interval {
            semitones,
            quality,
            quantity: base as u64 + QUANTITY_PER_OCTAVE * (magnitude / 12),
        }
    }

    /// Like [Interval::from_semitones], for counts read from outside: more than
    /// [MAX_SEMITONES][crate::util::mod12::MAX_SEMITONES] in either direction is an error.
    pub fn try_from_semitones(semitones: i64) -> Result<Self, TheoryErr> {
        if !in_range(semitones) {
            return Err(TheoryErr::InvalidValue("semitone count", semitones as f64));
        }
        Ok(Interval::from_semitones(semitones))
    }

    /// Parse names like `P5`, `m3`, `A4`, `M10`, or `-m2`.
    pub fn parse(name: &str) -> Result<Self, TheoryErr> {
        let (semitones, quality, quantity) = name::parse(name)?;
        Ok(Interval {
            semitones,
            quality,
            quantity,
        })
    }

    pub fn semitones(&self) -> i64 {
        self.semitones
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// The number of diatonic steps spanned, counting both ends: 3 for a third, 10 for a
    /// tenth.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn is_descending(&self) -> bool {
        self.semitones < 0
    }

    /// The frequency ratio. Whole octaves are exact; the rest uses the 12TET semitone.
    /// Intervals of more than about a thousand octaves have no finite `f64` ratio.
    pub fn ratio(&self) -> Ratio {
        let (octaves, rest) = self.semitones.unsigned_abs().div_rem(&12);
        let octave_ratio = match i32::try_from(octaves) {
            Ok(o) => OCTAVE_RATIO.scale(o),
            Err(_) => OCTAVE_RATIO.scale(octaves as f64),
        };
        let up = SEMITONE_RATIO.scale(rest as i32).add(&octave_ratio);
        if self.is_descending() {
            up.invert()
        } else {
            up
        }
    }

    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn add(&self, other: &Interval) -> Interval {
        Interval::from_semitones(self.semitones + other.semitones)
    }

    pub fn subtract(&self, other: &Interval) -> Interval {
        Interval::from_semitones(self.semitones - other.semitones)
    }

    pub fn scale(&self, n: i64) -> Interval {
        Interval::from_semitones(self.semitones * n)
    }

    /// Flip the direction: up a major third becomes down a major third.
    ///
    /// The name is kept, so `-A4` stays `-A4`, whereas arithmetic re-derives names from the
    /// semitone count and calls the same interval `-d5`. Equality only compares semitones.
    pub fn negate(&self) -> Interval {
        Interval {
            semitones: -self.semitones,
            ..*self
        }
    }

    /// The interval that, added to this one, gives exactly one octave.
    pub fn complement(&self) -> Interval {
        self.subtract(&OCTAVE).negate()
    }

    /// The ascending interval below one octave that has the same pitch class effect.
    pub fn decompound(&self) -> Interval {
        Interval::from_semitones(residue(self.semitones))
    }

    /// How many whole octaves the interval spans (ignoring direction).
    pub fn octaves(&self) -> i64 {
        self.semitones.abs() / SEMITONES_PER_OCTAVE
    }
}

pub const PERFECT_UNISON: Interval = Interval::from_semitones(0);
pub const MINOR_SECOND: Interval = Interval::from_semitones(1);
pub const SEMITONE: Interval = MINOR_SECOND;
pub const MAJOR_SECOND: Interval = Interval::from_semitones(2);
pub const WHOLE_TONE: Interval = MAJOR_SECOND;
pub const MINOR_THIRD: Interval = Interval::from_semitones(3);
pub const MAJOR_THIRD: Interval = Interval::from_semitones(4);
pub const PERFECT_FOURTH: Interval = Interval::from_semitones(5);
pub const AUGMENTED_FOURTH: Interval = Interval {
    semitones: 6,
    quality: Quality::Augmented,
    quantity: 4,
};
pub const DIMINISHED_FIFTH: Interval = Interval::from_semitones(6);
pub const TRITONE: Interval = DIMINISHED_FIFTH;
pub const PERFECT_FIFTH: Interval = Interval::from_semitones(7);
pub const MINOR_SIXTH: Interval = Interval::from_semitones(8);
pub const MAJOR_SIXTH: Interval = Interval::from_semitones(9);
pub const MINOR_SEVENTH: Interval = Interval::from_semitones(10);
pub const MAJOR_SEVENTH: Interval = Interval::from_semitones(11);
pub const OCTAVE: Interval = Interval::from_semitones(12);

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.semitones == other.semitones
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.semitones.cmp(&other.semitones)
    }
}

impl hash::Hash for Interval {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.semitones.hash(state);
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_descending() {
            write!(f, "-")?;
        }
        write!(f, "{}{}", self.quality, self.quantity)
    }
}

impl FromStr for Interval {
    type Err = TheoryErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

impl From<i64> for Interval {
    fn from(semitones: i64) -> Self {
        Interval::from_semitones(semitones)
    }
}

impl ops::Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Self) -> Self::Output {
        Interval::add(&self, &rhs)
    }
}

impl ops::Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl ops::Mul<i64> for Interval {
    type Output = Interval;

    fn mul(self, rhs: i64) -> Self::Output {
        self.scale(rhs)
    }
}

impl ops::Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn iv(name: &str) -> Interval {
        Interval::parse(name).unwrap()
    }

    #[test]
    fn test_name_parsing() {
        let examples = [
            ("P1", 0),
            ("m2", 1),
            ("M2", 2),
            ("m3", 3),
            ("M3", 4),
            ("P4", 5),
            ("A4", 6),
            ("d5", 6),
            ("P5", 7),
            ("m6", 8),
            ("M6", 9),
            ("m7", 10),
            ("M7", 11),
            ("P8", 12),
            ("m9", 13),
            ("M9", 14),
            ("P15", 24),
        ];

        for (name, semitones) in examples {
            assert_eq!(iv(name).semitones(), semitones, "{name}");
        }
    }

    #[test]
    fn test_name_rendering() {
        assert_eq!(iv("M3").name(), "M3");
        assert_eq!((-iv("M3")).name(), "-M3");
        assert_eq!(iv("m10").name(), "m10");
        assert_eq!(iv("P15").name(), "P15");
        assert_eq!(iv("A4").name(), "A4");
        assert_eq!(Interval::from_semitones(6).name(), "d5");
        assert_eq!(Interval::from_semitones(-5).name(), "-P4");
        assert_eq!(Interval::from_semitones(23).name(), "M14");
        assert_eq!((-iv("A4")).name(), "-A4");
        assert_eq!(iv("A4").scale(-1).name(), "-d5");
        assert_eq!(-iv("A4"), iv("A4").scale(-1));
    }

    #[test]
    fn test_extreme_semitone_counts() {
        assert_eq!(Interval::from_semitones(i64::MAX).semitones(), i64::MAX);
        assert_eq!(Interval::from_semitones(i64::MIN).quality(), Quality::Minor);
        assert_eq!(
            Interval::from_semitones(10_000_000_000).quantity(),
            5_833_333_334
        );
        assert!(Interval::from_semitones(i64::MAX).ratio().to_f64().is_infinite());

        assert!(Interval::try_from_semitones(12_000).is_ok());
        assert!(Interval::try_from_semitones(-12_000).is_ok());
        assert!(matches!(
            Interval::try_from_semitones(10_000_000_000),
            Err(TheoryErr::InvalidValue("semitone count", _))
        ));
    }

    #[test]
    fn test_names_round_trip() {
        for (quality, quantity) in name::RESIDUE_NAMES {
            let name = format!("{quality}{quantity}");
            assert_eq!(iv(&name).name(), name);
        }
        for name in ["A4", "A11", "d12"] {
            assert_eq!(iv(name).name(), name);
        }
        for semitones in -40..=40 {
            let i = Interval::from_semitones(semitones);
            assert_eq!(iv(&i.name()).semitones(), semitones);
        }
    }

    #[test]
    fn test_ratio() {
        let examples = [
            ("P1", 1.0),
            ("m2", 1.0595),
            ("M2", 1.1225),
            ("m3", 1.1892),
            ("M3", 1.2599),
            ("P4", 1.3348),
            ("d5", 1.4142),
            ("P5", 1.4983),
            ("m6", 1.5874),
            ("M6", 1.6818),
            ("m7", 1.7818),
            ("M7", 1.8877),
            ("P8", 2.0),
        ];
        for (name, ratio) in examples {
            assert_abs_diff_eq!(iv(name).ratio().to_f64(), ratio, epsilon = 0.001);
        }
        assert_eq!(iv("P8").ratio(), OCTAVE_RATIO);
        assert_eq!(iv("-P15").ratio(), OCTAVE_RATIO.scale(-2));
        assert_abs_diff_eq!((-iv("P4")).ratio().to_f64(), 1.0 / 1.3348, epsilon = 0.001);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Interval::from_semitones(1), -Interval::from_semitones(-1));
        assert_ne!(Interval::from_semitones(1), Interval::from_semitones(2));
        assert!(Interval::from_semitones(2) > Interval::from_semitones(1));
        assert!(Interval::from_semitones(1) < Interval::from_semitones(2));
        assert_eq!(
            Interval::from_semitones(5) + Interval::from_semitones(6),
            Interval::from_semitones(11)
        );
        assert_eq!(
            Interval::from_semitones(5) - Interval::from_semitones(6),
            Interval::from_semitones(-1)
        );
        assert_eq!(Interval::from_semitones(5) * 2, Interval::from_semitones(10));
        assert_eq!(iv("A4"), iv("d5"));
        assert_eq!(Interval::add(&iv("m2"), &iv("m2")), MAJOR_SECOND);

        for a in -15..15 {
            for b in -15..15 {
                let (x, y) = (Interval::from_semitones(a), Interval::from_semitones(b));
                assert_eq!(x + y, Interval::from_semitones(a + b));
                assert_eq!(x - y, Interval::from_semitones(a - b));
            }
            assert_eq!(Interval::from_semitones(a), -(-Interval::from_semitones(a)));
        }
    }

    #[test]
    fn test_complement() {
        assert_eq!(iv("P5").complement(), iv("P4"));
        assert_eq!(iv("m3").complement(), iv("M6"));
        assert_eq!((-iv("m3")).complement(), iv("m10"));
        assert_eq!(iv("P1").complement(), iv("P8"));
        assert_eq!(iv("P8").complement(), iv("P1"));
        for s in 0..=12 {
            let i = Interval::from_semitones(s);
            assert_eq!(i.complement().complement(), i);
            assert_eq!(i + i.complement(), OCTAVE);
        }
    }

    #[test]
    fn test_decompound() {
        assert_eq!(iv("m10").decompound(), iv("m3"));
        assert_eq!(iv("P8").decompound(), PERFECT_UNISON);
        assert_eq!(iv("-M2").decompound(), iv("m7"));
        assert_eq!(iv("-P15").decompound(), PERFECT_UNISON);
        assert_eq!(iv("M14").octaves(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(AUGMENTED_FOURTH.name(), "A4");
        assert_eq!(TRITONE.name(), "d5");
        assert_eq!(WHOLE_TONE, iv("M2"));
        assert_eq!(OCTAVE.name(), "P8");
    }
}
