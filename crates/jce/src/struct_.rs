use crate::{decoder::Decoder, encoder::Encoder, error::Result, field::JceField};

/// Capability contract for a JCE struct: write every declared field at its
/// assigned tag, and read them back in whatever order they appear on the
/// wire (tag-seek means declaration order need not match wire order).
///
/// This is kept separate from [`JceField`] rather than given a blanket
/// `impl<S: JceStruct> JceField for S`. [`Encoder::write_struct`] and
/// [`Decoder::read_struct`] are the dedicated entry points for struct
/// values, and [`Struct`] below is the adapter for embedding one inside a
/// generic container field.
pub trait JceStruct: Sized {
    fn encode(&self, enc: &mut Encoder);
    fn decode(dec: &mut Decoder) -> Result<Self>;
}

/// Adapter letting a [`JceStruct`] be used as a [`JceField`], e.g. as the
/// element type of a `Vec<Struct<S>>` or the value type of a
/// `HashMap<K, Struct<S>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Struct<S>(pub S);

impl<S: JceStruct> JceField for Struct<S> {
    fn write_field(&self, enc: &mut Encoder, tag: u8) {
        enc.write_struct(&self.0, tag);
    }

    /// A struct has no generic "zero value" to fall back to, so unlike the
    /// scalar and container [`JceField`] impls, a missing `Struct<S>` is
    /// always an error here even when `required` is false. Callers that
    /// need a genuinely optional nested struct should call
    /// [`Decoder::read_struct`] directly and handle its `Option<S>`.
    fn read_field(dec: &mut Decoder, tag: u8, required: bool) -> Result<Self> {
        match dec.read_struct::<S>(tag, required)? {
            Some(value) => Ok(Struct(value)),
            None => Err(crate::error::JceError::RequiredFieldMissing { tag }),
        }
    }
}
