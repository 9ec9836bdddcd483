use bytes::Bytes;

use crate::{decoder::Decoder, encoder::Encoder, error::Result, struct_::JceStruct};

/// Encodes `value` to a standalone byte buffer. The top level of a message
/// is an "implicit struct": fields are written in the same tag/header
/// form as inside a struct, but with no wrapping `StructBegin`/`StructEnd`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn to_bytes<S: JceStruct>(value: &S) -> Bytes {
    let mut enc = Encoder::new();
    value.encode(&mut enc);
    enc.flush()
}

/// Decodes a complete message from `buf`. Trailing bytes left over after
/// every field the struct knows about has been read are not an error:
/// forward compatibility relies on a decoder being able to stop once it
/// has everything it declared, ignoring fields a newer writer appended.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn from_bytes<S: JceStruct>(buf: Bytes) -> Result<S> {
    let mut dec = Decoder::new(buf);
    S::decode(&mut dec)
}
