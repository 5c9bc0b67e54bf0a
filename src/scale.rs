use std::{collections::VecDeque, fmt};

use serde_derive::{Deserialize, Serialize};

use crate::{error::TheoryErr, interval::OCTAVE, note::Note};

/// An ordered sequence of [Note]s, starting at the tonic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale {
    notes: Vec<Note>,
}

impl Scale {
    pub fn new(notes: Vec<Note>) -> Self {
        Scale { notes }
    }

    pub fn from_names(names: &[&str]) -> Result<Self, TheoryErr> {
        let notes = names
            .iter()
            .map(|n| Note::parse(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Scale { notes })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn tonic(&self) -> Option<&Note> {
        self.notes.first()
    }

    /// The `index`-th degree, counting from 0 at the tonic, continued periodically by octaves
    /// beyond the stored notes in both directions.
    pub fn note_at(&self, index: i64) -> Option<Note> {
        if self.notes.is_empty() {
            return None {};
        }
        let n = self.notes.len() as i64;
        let note = self.notes[index.rem_euclid(n) as usize];
        Some(note.transposed(&OCTAVE.scale(index.div_euclid(n))))
    }

    /// The same scale, started `steps` degrees later (or earlier, if `steps` is negative).
    ///
    /// Every single step moves the first note to the end, just above the last note, or the
    /// last note to the front, just below the first. Note spellings are kept, so an ascending
    /// scale within one octave stays ascending within one octave.
    pub fn shift(&self, steps: i64) -> Scale {
        if self.notes.is_empty() {
            return self.clone();
        }

        let mut notes: VecDeque<Note> = self.notes.iter().copied().collect();
        for _ in 0..steps.unsigned_abs() {
            if steps > 0 {
                let last = notes[notes.len() - 1];
                if let Some(first) = notes.pop_front() {
                    notes.push_back(first.following(&last));
                }
            } else {
                let first = notes[0];
                if let Some(last) = notes.pop_back() {
                    notes.push_front(last.preceding(&first));
                }
            }
        }
        log::trace!("shifted scale {self} by {steps}");

        Scale {
            notes: notes.into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }
}

impl From<Vec<Note>> for Scale {
    fn from(notes: Vec<Note>) -> Self {
        Scale::new(notes)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
