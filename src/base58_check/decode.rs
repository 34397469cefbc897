use super::{compute_checksum, Alphabet, ALPHABET, CHECKSUM_LENGTH};
use crate::base58;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    InvalidChecksum { checksum: [u8; 4], expected_checksum: [u8; 4] },
    NoChecksum,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Error::InvalidChecksum {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Invalid checksum '{}' ({} expected)",
                HexSlice(checksum),
                HexSlice(expected_checksum)
            ),
            Error::NoChecksum => write!(f, "Missing checksum"),
        }
    }
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        match error {
            base58::decode::Error::BufferTooSmall => Error::BufferTooSmall,
            base58::decode::Error::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            base58::decode::Error::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

struct HexSlice<'a>(&'a [u8]);

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

pub struct Decoder<'a> {
    decoder: base58::Decoder<'a>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self {
            decoder: base58::Decoder::new(alphabet),
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let len = self.decoder.decode_into(input, output)?;
        verify_checksum(&output.as_mut()[..len])?;
        Ok(len - CHECKSUM_LENGTH)
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

fn verify_checksum(buffer: &[u8]) -> Result<(), Error> {
    if buffer.len() < CHECKSUM_LENGTH {
        return Err(Error::NoChecksum);
    }
    let (payload, checksum) = buffer.split_at(buffer.len() - CHECKSUM_LENGTH);
    let expected_checksum = compute_checksum(payload);
    if checksum != &expected_checksum[..] {
        return Err(Error::InvalidChecksum {
            checksum: checksum.try_into().unwrap(),
            expected_checksum,
        });
    }
    Ok(())
}

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
        assert_eq!(
            super::decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM"),
            Ok(vec![
                0x00, 0x01, 0x09, 0x66, 0x77, 0x60, 0x06, 0x95, 0x3d, 0x55, 0x67, 0x43, 0x9e, 0x5e, 0x39, 0xf8, 0x6a, 0x0d, 0x27, 0x3b,
                0xee,
            ])
        );
    }

    #[test]
    fn invalid_checksum() {
        assert!(matches!(
            super::decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvN"),
            Err(Error::InvalidChecksum { .. })
        ));
    }

    #[test]
    fn missing_checksum() {
        assert_eq!(super::decode(""), Err(Error::NoChecksum));
        assert_eq!(super::decode("2g"), Err(Error::NoChecksum));
    }

    #[test]
    fn round_trip() {
        let input: Vec<u8> = (0u8..=255).collect();
        assert_eq!(super::decode(super::super::encode(&input)), Ok(input));
    }
}
