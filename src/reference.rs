use serde_derive::{Deserialize, Serialize};

use crate::{error::TheoryErr, interval::Interval, note::Note, notename::Letter, tone::Tone};

/// A reference tuning: which [Note] sounds at which frequency. All other notes are equally
/// tempered relative to it.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reference {
    pub note: Note,
    pub frequency: f64,
}

/// Concert pitch: A4 = 440 Hz.
pub const A440: Reference = Reference {
    note: Note::from_parts(Letter::A, 0, 4),
    frequency: 440.0,
};

impl Default for Reference {
    fn default() -> Self {
        A440
    }
}

impl Reference {
    pub fn new(note: Note, frequency: f64) -> Result<Self, TheoryErr> {
        Tone::new(frequency)?;
        Ok(Reference { note, frequency })
    }

    /// Checks the frequency of a [Reference] that didn't go through [Reference::new], e.g. a
    /// deserialised one.
    pub fn validate(&self) -> Result<(), TheoryErr> {
        Tone::new(self.frequency).map(|_| ())
    }

    /// The frequency of the note `semitone` semitones above C0. Notes an octave or several
    /// away from the reference note get exact multiples of the reference frequency.
    pub fn frequency_of(&self, semitone: i64) -> f64 {
        let offset = Interval::from_semitones(semitone - self.note.semitone());
        self.frequency * offset.ratio().to_f64()
    }

    pub fn c0_frequency(&self) -> f64 {
        self.frequency_of(0)
    }

    /// The fractional number of semitones above C0 that sound at `frequency`.
    pub fn semitones_from_frequency(&self, frequency: f64) -> f64 {
        self.note.semitone() as f64 + 12.0 * (frequency / self.frequency).log2()
    }

    /// Inverse of [Reference::semitones_from_frequency].
    pub fn frequency_from_semitones(&self, semitones: f64) -> f64 {
        self.frequency * ((semitones - self.note.semitone() as f64) / 12.0).exp2()
    }

    /// The equally tempered note closest to a [Tone], spelled with naturals or sharps.
    pub fn nearest_note(&self, tone: &Tone) -> Note {
        Note::from_semitone(self.semitones_from_frequency(tone.frequency()).round() as i64)
    }
}
