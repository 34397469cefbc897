use super::{is_ignored, Alphabet, ALPHABET};
use crate::base_common::{alphabet, bit_group};
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

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<32>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<32>) -> Self {
        Self { alphabet }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut writer = bit_group::Writer::new(5);
        let mut length = 0;
        for (index, &character) in input.as_ref().iter().enumerate() {
            if is_ignored(character) {
                continue;
            }
            let value = self.alphabet.decode(character, index)?;
            if let Some(byte) = writer.push_group(value) {
                *output.get_mut(length).ok_or(Error::BufferTooSmall)? = byte;
                length += 1;
            }
        }
        Ok(length)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; input.len() * 5 / 8];
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
        assert_eq!(super::decode("00"), Ok(vec![0x00]));
        assert_eq!(super::decode("ZW"), Ok(vec![0xFF]));
        assert_eq!(
            super::decode("AHJQ6X2KEHS6JVK764S38D9P6WW3JC26DXQM4RBJ45026915BRK2MA19BDEG"),
            Ok(b"TestString124567890FooBar!@#$%^&*()[]".to_vec())
        );
    }

    #[test]
    fn blank() {
        assert_eq!(super::decode(" \t\r\n"), Ok(vec![]));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            super::decode("ahjq6x2kehs6jvk764s38d9p6ww3jc26dxqm4rbj45026915brk2ma19bdeg"),
            Ok(b"TestString124567890FooBar!@#$%^&*()[]".to_vec())
        );
    }

    #[test]
    fn aliases() {
        assert_eq!(super::decode("O0"), super::decode("00"));
        assert_eq!(super::decode("I1"), super::decode("11"));
        assert_eq!(super::decode("L1"), super::decode("11"));
        assert_eq!(super::decode("o1"), super::decode("01"));
    }

    #[test]
    fn ignored_characters() {
        assert_eq!(super::decode("A-B C"), super::decode("ABC"));
        assert_eq!(super::decode("Z\tW"), Ok(vec![0xFF]));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            super::decode("ABU"),
            Err(Error::InvalidCharacter { character: 'U', index: 2 })
        );
        assert_eq!(
            super::decode([0x41, 0xC3]),
            Err(Error::NonAsciiCharacter { character: 0xC3, index: 1 })
        );
    }

    #[test]
    fn round_trip() {
        let input: Vec<u8> = (0u8..=255).collect();
        assert_eq!(super::decode(super::super::encode(&input)), Ok(input));
    }
}
