use super::{is_ignored, BASE_CHARACTER, MAX_CHARACTER, POWERS, ZERO_SHORTCUT};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
    MisplacedShortcut { index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::MisplacedShortcut { index } => write!(f, "Shortcut character inside a group at index {}", index),
        }
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let mut output = Vec::with_capacity(input.len() / 5 * 4 + 4);
    let mut group = [0u8; 5];
    let mut filled = 0;
    for (index, &character) in input.iter().enumerate() {
        if is_ignored(character) {
            continue;
        }
        if character == ZERO_SHORTCUT {
            if filled != 0 {
                return Err(Error::MisplacedShortcut { index });
            }
            output.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        if !(BASE_CHARACTER..=MAX_CHARACTER).contains(&character) {
            return Err(Error::InvalidCharacter {
                character: character as char,
                index,
            });
        }
        group[filled] = character - BASE_CHARACTER;
        filled += 1;
        if filled == 5 {
            decode_group(&group, 5, &mut output);
            filled = 0;
        }
    }
    if filled > 0 {
        // Missing trailing digits are padded with the maximum symbol; the
        // padding only ever inflates the bytes that get truncated away.
        for slot in &mut group[filled..] {
            *slot = MAX_CHARACTER - BASE_CHARACTER;
        }
        decode_group(&group, filled, &mut output);
    }
    Ok(output)
}

fn decode_group(group: &[u8; 5], filled: usize, output: &mut Vec<u8>) {
    let mut tuple = 0u64;
    for (&digit, power) in group.iter().zip(POWERS) {
        tuple += digit as u64 * power as u64;
    }
    let bytes = (tuple as u32).to_be_bytes();
    output.extend_from_slice(&bytes[..filled - 1]);
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("9jqo^"), Ok(b"Man ".to_vec()));
        assert_eq!(super::decode("F*2M7"), Ok(b"sure".to_vec()));
        assert_eq!(super::decode("9`"), Ok(b"M".to_vec()));
        assert_eq!(super::decode("!!!!\""), Ok(vec![0x00, 0x00, 0x00, 0x01]));
    }

    #[test]
    fn zero_shortcut() {
        assert_eq!(super::decode("z"), Ok(vec![0x00, 0x00, 0x00, 0x00]));
        assert_eq!(super::decode("zz"), Ok(vec![0u8; 8]));
        assert_eq!(super::decode("z!<"), Ok(vec![0x00, 0x00, 0x00, 0x00, 0x01]));
    }

    #[test]
    fn ignored_characters() {
        assert_eq!(super::decode("9jq o^"), Ok(b"Man ".to_vec()));
        assert_eq!(super::decode("9jqo^\r\n"), Ok(b"Man ".to_vec()));
        assert_eq!(super::decode(" \t"), Ok(vec![]));
    }

    #[test]
    fn misplaced_shortcut() {
        assert_eq!(super::decode("9z"), Err(Error::MisplacedShortcut { index: 1 }));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            super::decode("9jqo~"),
            Err(Error::InvalidCharacter { character: '~', index: 4 })
        );
        assert_eq!(
            super::decode("v"),
            Err(Error::InvalidCharacter { character: 'v', index: 0 })
        );
    }

    #[test]
    fn round_trip() {
        let input: Vec<u8> = (0u8..=255).collect();
        assert_eq!(super::decode(super::super::encode(&input)), Ok(input));
        for len in 0..9 {
            let input = vec![0xFEu8; len];
            assert_eq!(super::decode(super::super::encode(&input)), Ok(input));
        }
    }
}
