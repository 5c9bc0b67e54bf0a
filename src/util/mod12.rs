use num_integer::Integer;

pub const SEMITONES_PER_OCTAVE: i64 = 12;

/// Note names and semitone counts read from text are limited to this many octaves in either
/// direction. Within that range every frequency derived from a sensible reference is a finite
/// `f64`.
pub const MAX_OCTAVES: i64 = 1000;

pub const MAX_SEMITONES: i64 = MAX_OCTAVES * SEMITONES_PER_OCTAVE;

pub fn in_range(semitones: i64) -> bool {
    (-MAX_SEMITONES..=MAX_SEMITONES).contains(&semitones)
}

/// Split a semitone count into whole octaves and a residue in `0..12`. Rounds towards negative
/// infinity, so `-1` is "one semitone below the octave below", i.e. `(-1, 11)`.
pub fn octave_and_residue(semitones: i64) -> (i64, i64) {
    semitones.div_mod_floor(&SEMITONES_PER_OCTAVE)
}

pub fn residue(semitones: i64) -> i64 {
    semitones.mod_floor(&SEMITONES_PER_OCTAVE)
}

/// How many semitones, between 1 and 12, one has to go up from `from` to reach the next note
/// with the same pitch class as `to`.
pub fn steps_up_to_class(from: i64, to: i64) -> i64 {
    (to - from - 1).mod_floor(&SEMITONES_PER_OCTAVE) + 1
}
