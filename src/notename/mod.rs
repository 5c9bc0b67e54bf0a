//! Letter names, accidentals, and the grammar of note names like `C#4` or `Bb`.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::{
    error::{NameKind, TheoryErr},
    util::mod12::{octave_and_residue, MAX_OCTAVES, SEMITONES_PER_OCTAVE},
};

/// The octave of a note name that doesn't give one.
pub const DEFAULT_OCTAVE: i64 = 4;

/// Accidentals range from double flat to double sharp.
pub const MAX_ACCIDENTAL: i8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Semitones above C in the same octave.
    pub const fn base_semitone(&self) -> i64 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None {},
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How a bare pitch class `0..12` is spelled: naturals where possible, sharps otherwise.
pub const RESIDUE_SPELLINGS: [(Letter, i8); 12] = [
    (Letter::C, 0),
    (Letter::C, 1),
    (Letter::D, 0),
    (Letter::D, 1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::F, 1),
    (Letter::G, 0),
    (Letter::G, 1),
    (Letter::A, 0),
    (Letter::A, 1),
    (Letter::B, 0),
];

const ACCIDENTAL_SYMBOLS: [&str; 5] = ["bb", "b", "", "#", "##"];

/// The symbol for an accidental in `-2..=2`, or `None` outside of that range.
pub fn accidental_symbol(accidental: i8) -> Option<&'static str> {
    if !(-MAX_ACCIDENTAL..=MAX_ACCIDENTAL).contains(&accidental) {
        return None {};
    }
    Some(ACCIDENTAL_SYMBOLS[(accidental + MAX_ACCIDENTAL) as usize])
}

pub fn accidental_from_symbol(symbol: &str) -> Option<i8> {
    ACCIDENTAL_SYMBOLS
        .iter()
        .position(|s| *s == symbol)
        .map(|i| i as i8 - MAX_ACCIDENTAL)
}

static NOTE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([CDEFGAB])(#{1,2}|b{1,2})?([0-9]+)?$").unwrap());

/// The components of a parsed note name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: i8,
    pub octave: i64,
}

impl NoteName {
    /// Octave numbers above [MAX_OCTAVES] are rejected.
    pub fn parse(name: &str) -> Result<Self, TheoryErr> {
        let invalid = || {
            log::debug!("rejected note name '{name}'");
            TheoryErr::InvalidName(NameKind::Note, name.into())
        };

        let caps = NOTE_NAME_RE.captures(name).ok_or_else(invalid)?;
        let letter = caps[1]
            .chars()
            .next()
            .and_then(Letter::from_symbol)
            .ok_or_else(invalid)?;
        let accidental = accidental_from_symbol(caps.get(2).map_or("", |m| m.as_str()))
            .ok_or_else(invalid)?;
        let octave = match caps.get(3) {
            Some(m) => m
                .as_str()
                .parse()
                .ok()
                .filter(|o| *o <= MAX_OCTAVES)
                .ok_or_else(invalid)?,
            None => DEFAULT_OCTAVE,
        };

        Ok(NoteName {
            letter,
            accidental,
            octave,
        })
    }

    /// The spelling used for a note given only as an absolute semitone (C0 = 0).
    pub fn from_semitone(semitone: i64) -> Self {
        let (octave, residue) = octave_and_residue(semitone);
        let (letter, accidental) = RESIDUE_SPELLINGS[residue as usize];
        NoteName {
            letter,
            accidental,
            octave,
        }
    }

    pub fn semitone(&self) -> i64 {
        self.letter.base_semitone() + self.accidental as i64 + SEMITONES_PER_OCTAVE * self.octave
    }

    /// Write the pitch class (i.e. the note name without the octave number)
    pub fn write_class<W: fmt::Write>(&self, f: &mut W) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let sf = self.accidental;
        if sf > 0 {
            for _ in 0..sf {
                write!(f, "#")?;
            }
        }
        if sf < 0 {
            for _ in 0..-sf {
                write!(f, "b")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_class(f)?;
        write!(f, "{}", self.octave)
    }
}
