mod bits;
pub mod literal;
pub mod words;

pub use bits::{high_byte, join_bytes, low_byte, unsigned_shift_right, Extractable, LogicalShift};
pub use words::{read_words, Word};
