//! Pitches, intervals, scales and modes in twelve-tone equal temperament, together with
//! general frequency ratios for everything that falls outside of it.

pub mod config;
pub mod custom_serde;
pub mod error;
pub mod interval;
pub mod mode;
pub mod note;
pub mod notename;
pub mod ratio;
pub mod reference;
pub mod scale;
pub mod span;
pub mod tone;
pub mod util;

pub use error::TheoryErr;
pub use interval::Interval;
pub use mode::{ChurchMode, Mode};
pub use note::Note;
pub use ratio::Ratio;
pub use scale::Scale;
pub use span::{Pitch, Span};
pub use tone::Tone;
