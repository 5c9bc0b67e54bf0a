use std::fmt;

use serde::{de::Visitor, Serializer};

use crate::note::Note;

/// Notes serialise as their name. Names have no way of writing octaves below 0, so such notes
/// are written as their semitone count above C0 instead, and come back spelled with naturals
/// or sharps.
impl serde::Serialize for Note {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        if self.octave() < 0 {
            ser.serialize_i64(self.semitone())
        } else {
            ser.serialize_str(&self.name())
        }
    }
}

impl<'de> serde::Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NoteVisitor {}

        impl<'de> Visitor<'de> for NoteVisitor {
            type Value = Note;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "note name like 'C#4' or 'Bb', or a number of semitones above C0"
                )
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Note::parse(v).map_err(E::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Note::try_from_semitone(v).map_err(E::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match i64::try_from(v) {
                    Ok(x) => self.visit_i64(x),
                    Err(_) => Err(E::custom(format!("{v} semitones is too large"))),
                }
            }
        }

        deserializer.deserialize_any(NoteVisitor {})
    }
}
