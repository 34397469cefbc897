pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};

pub const ALPHABET: Alphabet<32> = {
    let aliased = Alphabet::with_aliases(
        b"0123456789ABCDEFGHJKMNPQRSTVWXYZ",
        &[(b'O', b'0'), (b'I', b'1'), (b'L', b'1')],
    );
    match aliased {
        Ok(alphabet) => match alphabet.fold_case() {
            Ok(alphabet) => alphabet,
            Err(_) => panic!("Could not build alphabet"),
        },
        Err(_) => panic!("Could not build alphabet"),
    }
};

/// Characters decoding skips entirely: ASCII whitespace plus the dash used to
/// group symbols for readability.
pub(crate) const IGNORED: [u8; 7] = [b'\t', b'\n', 0x0B, 0x0C, b'\r', b' ', b'-'];

pub(crate) fn is_ignored(character: u8) -> bool {
    IGNORED.contains(&character)
}
