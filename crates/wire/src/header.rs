use bytes::{BufMut, BytesMut};

use crate::{error::WireError, wire_type::WireType};

/// Tags 0..=14 pack into the header byte's upper nibble; tag 15 in that
/// nibble position signals the long (two-byte) header form.
const SHORT_TAG_LIMIT: u8 = 14;
const LONG_TAG_MARKER: u8 = 15;
const TAG_SHIFT: u8 = 4;
const WIRE_TYPE_MASK: u8 = 0x0F;

/// Writes the one- or two-byte header for `tag`/`wire_type` per the short
/// and long header forms.
pub fn write_header(dst: &mut BytesMut, tag: u8, wire_type: WireType) {
    if tag <= SHORT_TAG_LIMIT {
        dst.put_u8((tag << TAG_SHIFT) | wire_type as u8);
    } else {
        dst.put_u8((LONG_TAG_MARKER << TAG_SHIFT) | wire_type as u8);
        dst.put_u8(tag);
    }
}

/// Reads the next header from `src` without consuming it.
///
/// Returns `(tag, wire_type, header_length)`, where `header_length` is 1 or
/// 2. Callers consume the header via their buffer's `advance` once they've
/// decided to accept it.
pub fn peek_header(src: &[u8]) -> Result<(u8, WireType, usize), WireError> {
    let first = *src
        .first()
        .ok_or(WireError::UnexpectedEof { expected: 1, actual: 0 })?;
    let wire_type = WireType::try_from(first & WIRE_TYPE_MASK)?;
    let tag_nibble = first >> TAG_SHIFT;

    if tag_nibble == LONG_TAG_MARKER {
        let second = *src
            .get(1)
            .ok_or(WireError::UnexpectedEof { expected: 2, actual: src.len() })?;
        Ok((second, wire_type, 2))
    } else {
        Ok((tag_nibble, wire_type, 1))
    }
}
