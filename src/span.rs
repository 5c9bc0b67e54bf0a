//! Sum types for operands that may or may not be 12TET-quantized.
//!
//! A [Span] is a distance between pitches: either an [Interval] (a whole number of semitones
//! with a name) or a general [Ratio]. A [Pitch] is an absolute pitch: either a named [Note] or a
//! plain [Tone]. Operations keep the quantized variant as long as all operands are quantized,
//! and fall back to the general one otherwise.

use std::{fmt, str::FromStr};

use crate::{
    error::TheoryErr,
    interval::Interval,
    note::Note,
    ratio::{Exponent, Ratio},
    tone::Tone,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Span {
    Interval(Interval),
    Ratio(Ratio),
}

impl Span {
    fn variant_name(&self) -> &'static str {
        match self {
            Span::Interval(_) => "interval",
            Span::Ratio(_) => "ratio",
        }
    }

    pub fn ratio(&self) -> Ratio {
        match self {
            Span::Interval(i) => i.ratio(),
            Span::Ratio(r) => *r,
        }
    }

    pub fn add(&self, other: &Span) -> Span {
        match (self, other) {
            (Span::Interval(a), Span::Interval(b)) => Span::Interval(a.add(b)),
            _ => Span::Ratio(self.ratio().add(&other.ratio())),
        }
    }

    pub fn subtract(&self, other: &Span) -> Span {
        match (self, other) {
            (Span::Interval(a), Span::Interval(b)) => Span::Interval(a.subtract(b)),
            _ => Span::Ratio(self.ratio().subtract(&other.ratio())),
        }
    }

    /// Only intervals scaled by whole numbers stay intervals.
    pub fn scale<E: Into<Exponent>>(&self, n: E) -> Span {
        match (self, n.into()) {
            (Span::Interval(i), Exponent::Integer(k)) => Span::Interval(i.scale(k as i64)),
            (_, e) => Span::Ratio(self.ratio().scale(e)),
        }
    }

    pub fn invert(&self) -> Span {
        match self {
            Span::Interval(i) => Span::Interval(i.negate()),
            Span::Ratio(r) => Span::Ratio(r.invert()),
        }
    }

    pub fn complement(&self) -> Span {
        match self {
            Span::Interval(i) => Span::Interval(i.complement()),
            Span::Ratio(r) => Span::Ratio(r.complement()),
        }
    }

    /// The [Interval], or a [TheoryErr::TypeMismatch] naming `operation` if this is a general
    /// ratio.
    pub fn to_interval(&self, operation: &'static str) -> Result<Interval, TheoryErr> {
        match self {
            Span::Interval(i) => Ok(*i),
            Span::Ratio(_) => Err(TheoryErr::TypeMismatch {
                operation,
                expected: "interval",
                found: self.variant_name(),
            }),
        }
    }
}

impl From<Interval> for Span {
    fn from(value: Interval) -> Self {
        Span::Interval(value)
    }
}

impl From<Ratio> for Span {
    fn from(value: Ratio) -> Self {
        Span::Ratio(value)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Span::Interval(i) => write!(f, "{i}"),
            Span::Ratio(r) => write!(f, "{r}"),
        }
    }
}

impl FromStr for Span {
    type Err = TheoryErr;

    /// Interval names like `P5` become intervals; `3/2` or `1.5` become ratios.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Interval::parse(s) {
            Ok(i) => Ok(Span::Interval(i)),
            Err(e) => s.parse::<Ratio>().map(Span::Ratio).map_err(|_| e),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pitch {
    Note(Note),
    Tone(Tone),
}

impl Pitch {
    fn variant_name(&self) -> &'static str {
        match self {
            Pitch::Note(_) => "note",
            Pitch::Tone(_) => "tone",
        }
    }

    pub fn to_tone(&self) -> Tone {
        match self {
            Pitch::Note(n) => n.to_tone(),
            Pitch::Tone(t) => *t,
        }
    }

    pub fn frequency(&self) -> f64 {
        match self {
            Pitch::Note(n) => n.frequency(),
            Pitch::Tone(t) => t.frequency(),
        }
    }

    /// A note transposed by an interval is a note; everything else is a tone.
    pub fn transposed(&self, span: &Span) -> Pitch {
        match (self, span) {
            (Pitch::Note(n), Span::Interval(i)) => Pitch::Note(n.transposed(i)),
            _ => Pitch::Tone(self.to_tone().transposed(&span.ratio())),
        }
    }

    pub fn transposed_down(&self, span: &Span) -> Pitch {
        self.transposed(&span.invert())
    }

    /// The [Interval] from `other` up to `self`. Both have to be notes, otherwise the distance
    /// isn't a whole number of semitones and this is a [TheoryErr::TypeMismatch].
    pub fn interval_from(&self, other: &Pitch) -> Result<Interval, TheoryErr> {
        match (self, other) {
            (Pitch::Note(a), Pitch::Note(b)) => Ok(a.interval_from(b)),
            (Pitch::Note(_), x) | (x, _) => Err(TheoryErr::TypeMismatch {
                operation: "interval between pitches",
                expected: "note",
                found: x.variant_name(),
            }),
        }
    }

    /// The distance from `other` up to `self`, as an [Interval] if possible. Fails if the
    /// ratio between two tones is out of the `f64` range.
    pub fn span_from(&self, other: &Pitch) -> Result<Span, TheoryErr> {
        match self.interval_from(other) {
            Ok(i) => Ok(Span::Interval(i)),
            Err(_) => Ok(Span::Ratio(self.to_tone().ratio_from(&other.to_tone())?)),
        }
    }
}

impl From<Note> for Pitch {
    fn from(value: Note) -> Self {
        Pitch::Note(value)
    }
}

impl From<Tone> for Pitch {
    fn from(value: Tone) -> Self {
        Pitch::Tone(value)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pitch::Note(n) => write!(f, "{n}"),
            Pitch::Tone(t) => write!(f, "{t}"),
        }
    }
}
