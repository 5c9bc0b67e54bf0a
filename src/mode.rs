use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::{
    error::TheoryErr,
    interval::{
        Interval, MAJOR_SECOND, MAJOR_SEVENTH, MAJOR_SIXTH, MAJOR_THIRD, PERFECT_FIFTH,
        PERFECT_FOURTH, PERFECT_UNISON,
    },
    note::Note,
    scale::Scale,
};

/// A pattern of [Interval]s from an unspecified tonic. The first one is conventionally `P1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mode {
    intervals: Vec<Interval>,
}

impl Mode {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Mode { intervals }
    }

    pub fn from_names(names: &[&str]) -> Result<Self, TheoryErr> {
        let intervals = names
            .iter()
            .map(|n| Interval::parse(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Mode { intervals })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The mode that starts on the `steps`-th degree of this one. `steps` is taken modulo the
    /// number of degrees, and every interval is re-based on the new first degree and reduced to
    /// less than an octave, so the result starts on `P1` again.
    pub fn shift(&self, steps: i64) -> Mode {
        let n = self.intervals.len();
        if n == 0 {
            return self.clone();
        }

        let start = steps.rem_euclid(n as i64) as usize;
        let anchor = self.intervals[start];
        let intervals = (0..n)
            .map(|i| self.intervals[(i + start) % n].subtract(&anchor).decompound())
            .collect();
        log::trace!("shifted mode {self} by {steps}");

        Mode { intervals }
    }

    /// The [Scale] with this interval pattern above `tonic`.
    pub fn to_scale(&self, tonic: &Note) -> Scale {
        Scale::new(self.intervals.iter().map(|i| tonic.transposed(i)).collect())
    }
}

impl From<Vec<Interval>> for Mode {
    fn from(intervals: Vec<Interval>) -> Self {
        Mode::new(intervals)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

const IONIAN: [Interval; 7] = [
    PERFECT_UNISON,
    MAJOR_SECOND,
    MAJOR_THIRD,
    PERFECT_FOURTH,
    PERFECT_FIFTH,
    MAJOR_SIXTH,
    MAJOR_SEVENTH,
];

/// The seven diatonic modes. Each is the Ionian mode shifted to start on another degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChurchMode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl ChurchMode {
    pub const ALL: [ChurchMode; 7] = [
        ChurchMode::Ionian,
        ChurchMode::Dorian,
        ChurchMode::Phrygian,
        ChurchMode::Lydian,
        ChurchMode::Mixolydian,
        ChurchMode::Aeolian,
        ChurchMode::Locrian,
    ];

    /// The degree of the major scale this mode starts on, counting from 0.
    pub fn degree(&self) -> i64 {
        match self {
            ChurchMode::Ionian => 0,
            ChurchMode::Dorian => 1,
            ChurchMode::Phrygian => 2,
            ChurchMode::Lydian => 3,
            ChurchMode::Mixolydian => 4,
            ChurchMode::Aeolian => 5,
            ChurchMode::Locrian => 6,
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::new(IONIAN.to_vec()).shift(self.degree())
    }
}

impl fmt::Display for ChurchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChurchMode::Ionian => "Ionian",
            ChurchMode::Dorian => "Dorian",
            ChurchMode::Phrygian => "Phrygian",
            ChurchMode::Lydian => "Lydian",
            ChurchMode::Mixolydian => "Mixolydian",
            ChurchMode::Aeolian => "Aeolian",
            ChurchMode::Locrian => "Locrian",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mode(names: &[&str]) -> Mode {
        Mode::from_names(names).unwrap()
    }

    fn ionian() -> Mode {
        ChurchMode::Ionian.mode()
    }

    #[test]
    fn test_church_modes() {
        let examples = [
            (ChurchMode::Dorian, ["P1", "M2", "m3", "P4", "P5", "M6", "m7"]),
            (ChurchMode::Phrygian, ["P1", "m2", "m3", "P4", "P5", "m6", "m7"]),
            (ChurchMode::Lydian, ["P1", "M2", "M3", "A4", "P5", "M6", "M7"]),
            (ChurchMode::Mixolydian, ["P1", "M2", "M3", "P4", "P5", "M6", "m7"]),
            (ChurchMode::Aeolian, ["P1", "M2", "m3", "P4", "P5", "m6", "m7"]),
            (ChurchMode::Locrian, ["P1", "m2", "m3", "P4", "d5", "m6", "m7"]),
        ];
        for (m, names) in examples {
            assert_eq!(m.mode(), mode(&names), "{m}");
            assert_eq!(ionian().shift(m.degree()), mode(&names), "{m}");
        }
    }

    #[test]
    fn test_shift_wraps_around() {
        assert_eq!(ionian().shift(7), ionian());
        assert_eq!(ionian().shift(0), ionian());
        assert_eq!(ionian().shift(-1), ChurchMode::Locrian.mode());
        assert_eq!(ionian().shift(15), ChurchMode::Dorian.mode());
        assert_eq!(
            ChurchMode::Dorian.mode().shift(2),
            ChurchMode::Lydian.mode()
        );
        assert_eq!(Mode::new(vec![]).shift(3), Mode::new(vec![]));
    }

    #[test]
    fn test_shift_renames_from_semitones() {
        assert_eq!(
            ionian().shift(3).to_string(),
            "P1 M2 M3 d5 P5 M6 M7"
        );
    }

    #[test]
    fn test_to_scale() {
        let c4 = Note::parse("C4").unwrap();
        let d4 = Note::parse("D4").unwrap();
        assert_eq!(
            ionian().to_scale(&c4),
            Scale::from_names(&["C4", "D4", "E4", "F4", "G4", "A4", "B4"]).unwrap()
        );
        assert_eq!(
            ChurchMode::Dorian.mode().to_scale(&d4),
            ionian().to_scale(&c4).shift(1)
        );
        for m in ChurchMode::ALL {
            let tonic = ionian().to_scale(&c4).note_at(m.degree()).unwrap();
            assert_eq!(
                m.mode().to_scale(&tonic),
                ionian().to_scale(&c4).shift(m.degree()),
                "{m}"
            );
        }
    }

    #[test]
    fn test_yaml() {
        let m = mode(&["P1", "M2", "m3", "P4", "P5", "m6", "M7"]);
        let yaml = serde_yml::to_string(&m).unwrap();
        let back: Mode = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.to_string(), "P1 M2 m3 P4 P5 m6 M7");
    }
}
