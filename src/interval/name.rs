//! Conventional interval names: a quality letter followed by a quantity, like `m3` or `P12`.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::{
    error::{NameKind, TheoryErr},
    util::mod12::{in_range, SEMITONES_PER_OCTAVE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl Quality {
    pub fn symbol(&self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' => Some(Quality::Augmented),
            'd' => Some(Quality::Diminished),
            _ => None {},
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The name used for each semitone residue `0..12` when an interval is built from a number of
/// semitones. The tritone is spelled as a diminished fifth.
pub const RESIDUE_NAMES: [(Quality, u32); 12] = [
    (Quality::Perfect, 1),
    (Quality::Minor, 2),
    (Quality::Major, 2),
    (Quality::Minor, 3),
    (Quality::Major, 3),
    (Quality::Perfect, 4),
    (Quality::Diminished, 5),
    (Quality::Perfect, 5),
    (Quality::Minor, 6),
    (Quality::Major, 6),
    (Quality::Minor, 7),
    (Quality::Major, 7),
];

/// Every name within one octave that parses, with its size in semitones.
pub const NAMED_RESIDUES: [(Quality, u32, i64); 13] = [
    (Quality::Perfect, 1, 0),
    (Quality::Minor, 2, 1),
    (Quality::Major, 2, 2),
    (Quality::Minor, 3, 3),
    (Quality::Major, 3, 4),
    (Quality::Perfect, 4, 5),
    (Quality::Augmented, 4, 6),
    (Quality::Diminished, 5, 6),
    (Quality::Perfect, 5, 7),
    (Quality::Minor, 6, 8),
    (Quality::Major, 6, 9),
    (Quality::Minor, 7, 10),
    (Quality::Major, 7, 11),
];

/// Number of diatonic steps added to the quantity per octave.
pub const QUANTITY_PER_OCTAVE: u64 = 7;

static INTERVAL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-)?([mMdAP])([0-9]+)$").unwrap());

/// The semitone residue of a simple (non-compound) interval name, if it exists.
pub fn named_residue(quality: Quality, quantity: u64) -> Option<i64> {
    NAMED_RESIDUES
        .iter()
        .find(|(q, n, _)| *q == quality && u64::from(*n) == quantity)
        .map(|(_, _, s)| *s)
}

/// Parsed interval name: `(semitones, quality, quantity)`.
///
/// Compound names are split into whole octaves and a base quantity in `1..=7`, so that `m10`
/// is an octave plus `m3` and `M14` is an octave plus `M7`. A leading `-` denotes the
/// descending interval. Names wider than [MAX_OCTAVES][crate::util::mod12::MAX_OCTAVES]
/// octaves are rejected.
pub fn parse(name: &str) -> Result<(i64, Quality, u64), TheoryErr> {
    let invalid = || {
        log::debug!("rejected interval name '{name}'");
        TheoryErr::InvalidName(NameKind::Interval, name.into())
    };

    let caps = INTERVAL_NAME_RE.captures(name).ok_or_else(invalid)?;
    let descending = caps.get(1).is_some();
    let quality = caps[2]
        .chars()
        .next()
        .and_then(Quality::from_symbol)
        .ok_or_else(invalid)?;
    let quantity: u64 = caps[3].parse().map_err(|_| invalid())?;
    if quantity == 0 {
        return Err(invalid());
    }

    let octaves = i64::try_from((quantity - 1) / QUANTITY_PER_OCTAVE).map_err(|_| invalid())?;
    let base = (quantity - 1) % QUANTITY_PER_OCTAVE + 1;
    let residue = named_residue(quality, base).ok_or_else(invalid)?;

    let magnitude = octaves
        .checked_mul(SEMITONES_PER_OCTAVE)
        .and_then(|x| x.checked_add(residue))
        .filter(|x| in_range(*x))
        .ok_or_else(invalid)?;
    let semitones = if descending { -magnitude } else { magnitude };
    Ok((semitones, quality, quantity))
}
