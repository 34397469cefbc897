use crate::base_common::Alphabet;
use std::{error, fmt};

use super::ALPHABET;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// The whole input is one big-endian unsigned integer, carried through
    /// `output` as an array of base-58 digits, least significant first.
    /// Leading zero bytes carry no magnitude and are re-inserted as digit
    /// zero afterwards.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        let mut length = 0;
        for &value in &input[zeros..] {
            let mut carry = value as usize;
            for digit in &mut output[..length] {
                carry += (*digit as usize) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                *output.get_mut(length).ok_or(Error::BufferTooSmall)? = (carry % 58) as u8;
                length += 1;
                carry /= 58;
            }
        }
        for _ in 0..zeros {
            *output.get_mut(length).ok_or(Error::BufferTooSmall)? = 0;
            length += 1;
        }
        for digit in &mut output[..length] {
            *digit = self.alphabet.encode(*digit as usize);
        }
        output[..length].reverse();
        Ok(length)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = vec![0u8; input.as_ref().len() * 8 / 5 + 1];
        let len = self.encode_into(input, &mut output).unwrap();
        output.truncate(len);
        unsafe { String::from_utf8_unchecked(output) }
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
