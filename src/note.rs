//! Notes: [Tone]s quantized to 12TET, with a letter name.

use std::{cmp::Ordering, fmt, hash, ops, str::FromStr};

use crate::{
    error::TheoryErr,
    interval::Interval,
    notename::{accidental_symbol, Letter, NoteName},
    ratio::Ratio,
    reference::{Reference, A440},
    tone::Tone,
    util::mod12::{in_range, steps_up_to_class, MAX_OCTAVES, SEMITONES_PER_OCTAVE},
};

/// [Note::frequency] is rounded to this many decimal places.
pub const FREQUENCY_PRECISION: i32 = 2;

/// A named 12TET note.
///
/// The absolute [semitone][Note::semitone] counts from C0. Enharmonic spellings like `C#1` and
/// `Db1` have the same semitone and are equal: equality, ordering, and hashing only look at the
/// semitone. The spelling is kept for display.
#[derive(Clone, Copy, Debug)]
pub struct Note {
    letter: Letter,
    accidental: i8,
    octave: i64,
    semitone: i64,
}

impl Note {
    /// private (to the crate): used for constants and parsed names, the caller makes sure the
    /// accidental and the octave are in range.
    pub(crate) const fn from_parts(letter: Letter, accidental: i8, octave: i64) -> Self {
        Note {
            letter,
            accidental,
            octave,
            semitone: letter.base_semitone() + accidental as i64 + SEMITONES_PER_OCTAVE * octave,
        }
    }

    /// Accidentals must be between -2 (double flat) and 2 (double sharp), octaves at most
    /// [MAX_OCTAVES] away from octave 0.
    pub fn new(letter: Letter, accidental: i8, octave: i64) -> Result<Self, TheoryErr> {
        if accidental_symbol(accidental).is_none() {
            return Err(TheoryErr::InvalidValue("accidental", accidental as f64));
        }
        if !(-MAX_OCTAVES..=MAX_OCTAVES).contains(&octave) {
            return Err(TheoryErr::InvalidValue("octave", octave as f64));
        }
        Ok(Note::from_parts(letter, accidental, octave))
    }

    /// The note `semitone` semitones above C0, spelled with naturals or sharps.
    pub fn from_semitone(semitone: i64) -> Self {
        let NoteName {
            letter,
            accidental,
            octave,
        } = NoteName::from_semitone(semitone);
        Note {
            letter,
            accidental,
            octave,
            semitone,
        }
    }

    /// Like [Note::from_semitone], for semitones read from outside: more than
    /// [MAX_SEMITONES][crate::util::mod12::MAX_SEMITONES] away from C0 is an error.
    pub fn try_from_semitone(semitone: i64) -> Result<Self, TheoryErr> {
        if !in_range(semitone) {
            return Err(TheoryErr::InvalidValue("semitone", semitone as f64));
        }
        Ok(Note::from_semitone(semitone))
    }

    /// Parse names like `A4`, `Ab4`, `C##1`, or `F#` (octave 4 if omitted).
    pub fn parse(name: &str) -> Result<Self, TheoryErr> {
        let NoteName {
            letter,
            accidental,
            octave,
        } = NoteName::parse(name)?;
        Ok(Note::from_parts(letter, accidental, octave))
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> i8 {
        self.accidental
    }

    pub fn octave(&self) -> i64 {
        self.octave
    }

    pub fn semitone(&self) -> i64 {
        self.semitone
    }

    pub fn note_name(&self) -> NoteName {
        NoteName {
            letter: self.letter,
            accidental: self.accidental,
            octave: self.octave,
        }
    }

    pub fn name(&self) -> String {
        self.to_string()
    }

    /// The frequency in Hertz with A4 = 440 Hz, rounded to hundredths of a Hertz. Use
    /// [Note::to_tone] for the unrounded value.
    pub fn frequency(&self) -> f64 {
        self.frequency_with(&A440)
    }

    /// Like [Note::frequency], but for another reference tuning.
    pub fn frequency_with(&self, reference: &Reference) -> f64 {
        let scale = 10f64.powi(FREQUENCY_PRECISION);
        (reference.frequency_of(self.semitone) * scale).round() / scale
    }

    pub fn to_tone(&self) -> Tone {
        self.to_tone_with(&A440)
    }

    pub fn to_tone_with(&self, reference: &Reference) -> Tone {
        Tone::from_positive(reference.frequency_of(self.semitone))
    }

    /// Note arithmetic re-spells the result from its semitone.
    pub fn transposed(&self, interval: &Interval) -> Note {
        Note::from_semitone(self.semitone + interval.semitones())
    }

    pub fn transposed_down(&self, interval: &Interval) -> Note {
        Note::from_semitone(self.semitone - interval.semitones())
    }

    /// The interval from `other` up to `self`.
    pub fn interval_from(&self, other: &Note) -> Interval {
        Interval::from_semitones(self.semitone - other.semitone)
    }

    /// Transposing by a ratio that isn't a whole number of semitones leaves 12TET, so the
    /// result is a plain [Tone].
    pub fn transposed_by_ratio(&self, ratio: &Ratio) -> Tone {
        self.to_tone().transposed(ratio)
    }

    /// The same spelling, `octaves` octaves higher (or lower, if negative).
    pub fn octave_shifted(&self, octaves: i64) -> Note {
        Note {
            octave: self.octave + octaves,
            semitone: self.semitone + octaves * SEMITONES_PER_OCTAVE,
            ..*self
        }
    }

    /// This note moved by whole octaves so that it is the lowest such note strictly above
    /// `last`.
    pub fn following(&self, last: &Note) -> Note {
        let target = last.semitone + steps_up_to_class(last.semitone, self.semitone);
        self.octave_shifted((target - self.semitone) / SEMITONES_PER_OCTAVE)
    }

    /// This note moved by whole octaves so that it is the highest such note strictly below
    /// `first`.
    pub fn preceding(&self, first: &Note) -> Note {
        let target = first.semitone - steps_up_to_class(self.semitone, first.semitone);
        self.octave_shifted((target - self.semitone) / SEMITONES_PER_OCTAVE)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.semitone == other.semitone
    }
}

impl Eq for Note {}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.semitone.cmp(&other.semitone)
    }
}

impl hash::Hash for Note {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.semitone.hash(state);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.note_name())
    }
}

impl FromStr for Note {
    type Err = TheoryErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}

impl ops::Add<Interval> for Note {
    type Output = Note;

    fn add(self, rhs: Interval) -> Self::Output {
        self.transposed(&rhs)
    }
}

impl ops::Sub<Interval> for Note {
    type Output = Note;

    fn sub(self, rhs: Interval) -> Self::Output {
        self.transposed_down(&rhs)
    }
}

impl ops::Sub for Note {
    type Output = Interval;

    fn sub(self, rhs: Self) -> Self::Output {
        self.interval_from(&rhs)
    }
}
