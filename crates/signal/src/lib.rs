//! Keyed-signal encoding: the fixed pulse alphabet, its timing, and the
//! compiler that turns a color/number selection into a timed event list.

pub mod alphabet;
pub mod compiler;
pub mod timing;

pub use alphabet::{encode_char, render_pattern, EncodeError, ALPHABET};
pub use compiler::{compile, TransmissionSequence};
pub use timing::Timing;
