use std::ops::RangeInclusive;

use num_traits::PrimInt;

/// Pulls an inclusive range of bits out of a word and moves it down to bit 0.
///
/// Panics if the range is reversed or reaches past the width of the word.
pub trait Extractable {
    fn extract(self, range: RangeInclusive<u8>) -> Self;
}

macro_rules! impl_extractable {
    ($($t:ty),*) => {$(
        impl Extractable for $t {
            fn extract(self, range: RangeInclusive<u8>) -> $t {
                assert!(range.start() <= range.end(), "reversed bit range {:?}", range);
                assert!(
                    u32::from(*range.end()) < <$t>::BITS,
                    "bit range {:?} outside a {}-bit word",
                    range,
                    <$t>::BITS
                );
                let width = u32::from(range.end() - range.start()) + 1;
                let mask = <$t>::MAX >> (<$t>::BITS - width);
                (self >> range.start()) & mask
            }
        }
    )*};
}

impl_extractable!(u8, u16, u32, u64);

/// Zero-filling right shift for any primitive integer, signed or not.
///
/// The shift amount is reduced modulo the bit width of `Self`, so a 32-bit
/// value shifted by 33 moves one position and a shift by the full width is a
/// no-op. Plain `>>` would panic on those amounts in debug builds.
pub trait LogicalShift: PrimInt {
    #[inline]
    fn logical_shr(self, n: u32) -> Self {
        let width = Self::zero().count_zeros();
        self.unsigned_shr(n % width)
    }
}

impl<T: PrimInt> LogicalShift for T {}

/// Shifts `v` right by `n` bits, filling the top with zeros whatever the sign.
///
/// Only the low 5 bits of `n` are used, so `-1` shifts by 31 and `32` by 0.
#[inline]
pub fn unsigned_shift_right(v: i32, n: i32) -> i32 {
    v.logical_shr(n as u32)
}

/// Low 8 bits of `sh`. A pattern of `0xFF` comes back as `-1`.
#[inline]
pub fn low_byte(sh: i16) -> i8 {
    (sh as u16).extract(0..=7) as i8
}

/// High 8 bits of `sh`, taken with a logical shift so the sign never leaks in.
#[inline]
pub fn high_byte(sh: i16) -> i8 {
    (sh as u16).extract(8..=15) as i8
}

/// Inverse of [`high_byte`] and [`low_byte`].
#[inline]
pub fn join_bytes(high: i8, low: i8) -> i16 {
    i16::from_be_bytes([high as u8, low as u8])
}
