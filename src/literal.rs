//! Integer literals as bit patterns.
//!
//! Decimal literals are signed values. Hex (`0x`) and binary (`0b`) literals
//! spell out raw bits, so they may use the whole unsigned range of the width
//! and are reinterpreted as signed: `0xFFFF` is the 16-bit value `-1`.

use num_traits::{PrimInt, WrappingNeg};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,
    #[error("invalid digit in `{0}`")]
    InvalidDigit(String),
    #[error("`{0}` does not fit in the target width")]
    OutOfRange(String),
}

pub fn parse_i32(s: &str) -> Result<i32, LiteralError> {
    parse_bits::<i32, u32>(s).map(|bits| bits as i32)
}

pub fn parse_i16(s: &str) -> Result<i16, LiteralError> {
    parse_bits::<i16, u16>(s).map(|bits| bits as i16)
}

/// Parses `s` into the unsigned bit pattern of width `U`, going through the
/// signed type `S` for decimal input.
fn parse_bits<S, U>(s: &str) -> Result<U, LiteralError>
where
    S: PrimInt + TryInto<i64>,
    U: PrimInt + WrappingNeg + TryFrom<i64>,
{
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (radix, digits) = split_radix(body);
    let digits = digits.replace('_', "");
    if digits.is_empty() {
        return Err(LiteralError::Empty);
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::InvalidDigit(s.to_owned()));
    }

    let out_of_range = || LiteralError::OutOfRange(s.to_owned());
    if radix == 10 {
        // Decimal goes through the signed type so that the minimum value,
        // whose magnitude has no positive counterpart, still parses.
        let text = if negative { format!("-{digits}") } else { digits };
        let value = S::from_str_radix(&text, 10).map_err(|_| out_of_range())?;
        let wide: i64 = value.try_into().map_err(|_| out_of_range())?;
        let pattern = if wide < 0 {
            U::try_from(wide + (1_i64 << U::zero().count_zeros())).map_err(|_| out_of_range())?
        } else {
            U::try_from(wide).map_err(|_| out_of_range())?
        };
        return Ok(pattern);
    }

    let bits = U::from_str_radix(&digits, radix).map_err(|_| out_of_range())?;
    Ok(if negative { bits.wrapping_neg() } else { bits })
}

fn split_radix(body: &str) -> (u32, &str) {
    let prefixed = |p: &str, q: &str| body.strip_prefix(p).or_else(|| body.strip_prefix(q));
    if let Some(rest) = prefixed("0x", "0X") {
        (16, rest)
    } else if let Some(rest) = prefixed("0b", "0B") {
        (2, rest)
    } else {
        (10, body)
    }
}
