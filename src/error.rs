use std::{error::Error, fmt};

/// What kind of textual name failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Note,
    Interval,
    Ratio,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Note => write!(f, "note"),
            NameKind::Interval => write!(f, "12TET interval"),
            NameKind::Ratio => write!(f, "ratio"),
        }
    }
}

#[derive(Debug)]
pub enum TheoryErr {
    /// The string doesn't match the grammar, or names a (quality, quantity) combination that
    /// doesn't exist.
    InvalidName(NameKind, String),
    /// An operation on [Span][crate::span::Span]s or [Pitch][crate::span::Pitch]es got a
    /// variant it can't work with.
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// A number that must be positive and finite (ratios, frequencies) or lie in a fixed
    /// range (accidentals) isn't.
    InvalidValue(&'static str, f64),
    Config(serde_yml::Error),
}

impl fmt::Display for TheoryErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TheoryErr::InvalidName(kind, name) => write!(f, "invalid {kind} name: '{name}'"),
            TheoryErr::TypeMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "type mismatch in '{operation}': expected {expected}, got {found}"
            ),
            TheoryErr::InvalidValue(what, value) => write!(f, "invalid {what}: {value}"),
            TheoryErr::Config(_) => write!(f, "could not read configuration"),
        }
    }
}

impl Error for TheoryErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TheoryErr::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yml::Error> for TheoryErr {
    fn from(value: serde_yml::Error) -> Self {
        Self::Config(value)
    }
}
