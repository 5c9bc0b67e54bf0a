use std::{cmp::Ordering, fmt};

use crate::{error::TheoryErr, ratio::Ratio};

/// An absolute frequency, independent of any notation.
#[derive(Clone, Copy, Debug)]
pub struct Tone {
    frequency: f64,
}

impl Tone {
    pub fn new(frequency: f64) -> Result<Self, TheoryErr> {
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(TheoryErr::InvalidValue("frequency", frequency));
        }
        Ok(Tone { frequency })
    }

    /// private (to the crate): for frequencies that are products of known positive numbers.
    /// Products that overflow or underflow saturate at the largest or smallest positive `f64`.
    pub(crate) fn from_positive(frequency: f64) -> Self {
        Tone {
            frequency: frequency.clamp(f64::MIN_POSITIVE, f64::MAX),
        }
    }

    /// In Hertz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Saturates at the ends of the `f64` range, see [Tone::from_positive].
    pub fn transposed(&self, ratio: &Ratio) -> Tone {
        Tone::from_positive(self.frequency * ratio.to_f64())
    }

    pub fn transposed_down(&self, ratio: &Ratio) -> Tone {
        self.transposed(&ratio.invert())
    }

    /// The [Ratio] one has to transpose `other` by to arrive at `self`. Fails if the quotient
    /// is too large or too small for an `f64`.
    pub fn ratio_from(&self, other: &Tone) -> Result<Ratio, TheoryErr> {
        Ratio::new(self.frequency / other.frequency)
    }
}

impl PartialEq for Tone {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency
    }
}

impl PartialOrd for Tone {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.frequency.partial_cmp(&other.frequency)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.frequency)
    }
}
