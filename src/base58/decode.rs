use super::{Alphabet, ALPHABET};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

/// Strips surrounding ASCII whitespace, keeping track of how many leading
/// characters were dropped so error indexes still refer to the original text.
fn trim(input: &[u8]) -> (&[u8], usize) {
    let start = input.iter().take_while(|character| character.is_ascii_whitespace()).count();
    let end = input.len()
        - input[start..]
            .iter()
            .rev()
            .take_while(|character| character.is_ascii_whitespace())
            .count();
    (&input[start..end], start)
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let (input, offset) = trim(input.as_ref());
        let output = output.as_mut();

        let zero = self.alphabet.encode(0);
        let zeros = input.iter().take_while(|&&character| character == zero).count();

        let mut length = 0;
        for (index, &character) in input.iter().enumerate() {
            let mut carry = self.alphabet.decode(character, offset + index)? as usize;
            for value in &mut output[..length] {
                carry += (*value as usize) * 58;
                *value = carry as u8;
                carry >>= 8;
            }
            while carry > 0 {
                *output.get_mut(length).ok_or(Error::BufferTooSmall)? = carry as u8;
                length += 1;
                carry >>= 8;
            }
        }
        for _ in 0..zeros {
            *output.get_mut(length).ok_or(Error::BufferTooSmall)? = 0;
            length += 1;
        }
        output[..length].reverse();
        Ok(length)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len()];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("aPEr"), Ok(b"ccc".to_vec()));
        assert_eq!(super::decode("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(
            super::decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            Ok(vec![
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ])
        );
        assert_eq!(super::decode("ABnLTmg"), Ok(vec![0x51, 0x6b, 0x6f, 0xcd, 0x0f]));
        assert_eq!(super::decode("3EFU7m"), Ok(vec![0x57, 0x2e, 0x47, 0x94]));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::decode("112"), Ok(vec![0x00, 0x00, 0x01]));
        assert_eq!(
            super::decode("1111111111"),
            Ok(vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00])
        );
    }

    #[test]
    fn blank() {
        assert_eq!(super::decode("  \t\n"), Ok(vec![]));
        assert_eq!(super::decode(" 2g\n"), Ok(b"a".to_vec()));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            super::decode("2O"),
            Err(Error::InvalidCharacter { character: 'O', index: 1 })
        );
        assert_eq!(
            super::decode(" 0"),
            Err(Error::InvalidCharacter { character: '0', index: 1 })
        );
        assert_eq!(
            super::decode("2 g"),
            Err(Error::InvalidCharacter { character: ' ', index: 1 })
        );
    }

    #[test]
    fn round_trip() {
        let input: Vec<u8> = (0u8..=255).collect();
        assert_eq!(super::decode(super::super::encode(&input)), Ok(input));
    }
}
