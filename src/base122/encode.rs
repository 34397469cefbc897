use super::{illegal_index, SHORTENED};
use crate::base_common::bit_group;

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = Vec::with_capacity(input.len() + input.len() / 7 + 2);
    let mut reader = bit_group::Reader::new(input, 7);
    while let Some(group) = reader.next_group() {
        let index = match illegal_index(group) {
            None => {
                output.push(group);
                continue;
            }
            Some(index) => index,
        };
        // An illegal group is paired with the following group into a two-byte
        // sequence. When no following group exists, the shortened index marks
        // that the illegal group itself is the payload.
        let (index, payload) = match reader.next_group() {
            Some(payload) => (index, payload),
            None => (SHORTENED, group),
        };
        output.push(0xC2 | (index << 2) | (payload >> 6));
        output.push(0x80 | (payload & 0x3F));
    }
    // Plain groups stay below 0x80 and escape pairs are 0xC2..=0xDF followed
    // by 0x80..=0xBF, so the buffer is valid UTF-8.
    unsafe { String::from_utf8_unchecked(output) }
}
