use super::{compute_checksum, Alphabet, ALPHABET};
use crate::base58::{self, encode::Error};

pub struct Encoder<'a> {
    encoder: base58::Encoder<'a>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self {
            encoder: base58::Encoder::new(alphabet),
        }
    }

    fn with_checksum(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let mut payload = Vec::with_capacity(input.len() + super::CHECKSUM_LENGTH);
        payload.extend_from_slice(input);
        payload.extend_from_slice(&compute_checksum(input));
        payload
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(self.with_checksum(input))
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(self.with_checksum(input), output)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(
            super::encode([
                0x00, 0x01, 0x09, 0x66, 0x77, 0x60, 0x06, 0x95, 0x3d, 0x55, 0x67, 0x43, 0x9e, 0x5e, 0x39, 0xf8, 0x6a, 0x0d, 0x27, 0x3b,
                0xee,
            ]),
            "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM"
        );
    }
}
