use std::io::{self, Read};

use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;
use tracing::{debug, trace};

use crate::bits::{high_byte, low_byte};

#[derive(Error, Debug)]
pub enum WordError {
    #[error("I/O Error")]
    Io(#[from] io::Error),
    #[error("dangling byte 0x{byte:02x} at offset {offset}, input is not a whole number of words")]
    TrailingByte { offset: usize, byte: u8 },
}

/// One big-endian 16-bit word from an input stream, already split in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub offset: usize,
    pub value: i16,
    pub high: i8,
    pub low: i8,
}

impl Word {
    pub fn new(offset: usize, value: i16) -> Self {
        Self {
            offset,
            value,
            high: high_byte(value),
            low: low_byte(value),
        }
    }
}

pub fn read_words(mut source: impl Read) -> Result<Vec<Word>, WordError> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf)?;
    debug!("Read {} bytes", buf.len());

    let chunks = buf.chunks_exact(2);
    if let [byte] = chunks.remainder() {
        return Err(WordError::TrailingByte {
            offset: buf.len() - 1,
            byte: *byte,
        });
    }

    let words: Vec<Word> = chunks
        .enumerate()
        .map(|(i, chunk)| {
            let word = Word::new(i * 2, BigEndian::read_i16(chunk));
            trace!("0x{:04x}: {:?}", word.offset, word);
            word
        })
        .collect();
    debug!("Decoded {} words", words.len());

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn reads_big_endian() {
        let words = read_words(&b"\x12\x34\xFF\xFF\x80\x00"[..]).unwrap();
        assert_eq!(
            words,
            vec![
                Word {
                    offset: 0,
                    value: 0x1234,
                    high: 0x12,
                    low: 0x34,
                },
                Word {
                    offset: 2,
                    value: -1,
                    high: -1,
                    low: -1,
                },
                Word {
                    offset: 4,
                    value: i16::MIN,
                    high: -128,
                    low: 0,
                },
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(read_words(io::empty()).unwrap().is_empty());
    }

    #[test]
    fn trailing_byte() {
        let err = read_words(&b"\x12\x34\xAB"[..]).unwrap_err();
        assert!(matches!(err, WordError::TrailingByte { offset: 2, byte: 0xAB }));
    }
}
