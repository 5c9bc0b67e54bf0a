//! (De)serialisation of intervals and notes by their names.
//!
//! Both types serialise as the string returned by their `Display` implementation and
//! deserialise by parsing it again, so configuration files can say `P5` and `Ab4`.

mod interval;
mod note;
