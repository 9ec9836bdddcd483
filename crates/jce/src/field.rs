use std::collections::HashMap;
use std::hash::Hash;

use bytes::Bytes;

use crate::{decoder::Decoder, encoder::Encoder, error::Result};

/// Type-directed dispatch for encode/decode: each host type that has a JCE
/// wire mapping implements this once, and generic code (containers, the
/// top-level `Encoder::encode`/`Decoder::decode` entry points) calls
/// through the trait rather than branching on a runtime type tag.
///
/// Structs are deliberately not given a blanket impl here; see
/// [`crate::struct_::JceStruct`] and [`crate::struct_::Struct`].
pub trait JceField: Sized {
    fn write_field(&self, enc: &mut Encoder, tag: u8);
    fn read_field(dec: &mut Decoder, tag: u8, required: bool) -> Result<Self>;
}

macro_rules! impl_jce_field_integer {
    ($ty:ty, $write:ident, $read:ident) => {
        impl JceField for $ty {
            fn write_field(&self, enc: &mut Encoder, tag: u8) {
                enc.$write(*self, tag);
            }

            fn read_field(dec: &mut Decoder, tag: u8, required: bool) -> Result<Self> {
                dec.$read(tag, required)
            }
        }
    };
}

impl_jce_field_integer!(bool, write_bool, read_bool);
impl_jce_field_integer!(i8, write_i8, read_i8);
impl_jce_field_integer!(i16, write_i16, read_i16);
impl_jce_field_integer!(i32, write_i32, read_i32);
impl_jce_field_integer!(i64, write_i64, read_i64);
impl_jce_field_integer!(u8, write_u8, read_u8);
impl_jce_field_integer!(u16, write_u16, read_u16);
impl_jce_field_integer!(u32, write_u32, read_u32);
impl_jce_field_integer!(u64, write_u64, read_u64);
impl_jce_field_integer!(f32, write_f32, read_f32);
impl_jce_field_integer!(f64, write_f64, read_f64);

impl JceField for String {
    fn write_field(&self, enc: &mut Encoder, tag: u8) {
        enc.write_string(self, tag);
    }

    fn read_field(dec: &mut Decoder, tag: u8, required: bool) -> Result<Self> {
        dec.read_string(tag, required)
    }
}

/// The compact `SimpleList` byte-vector path. `Vec<u8>` is intentionally
/// not given this impl, since it would collide with the blanket `Vec<T>`
/// impl below once `T = u8`. Use `Bytes` when the compact wire form is wanted,
/// `Vec<u8>` when the general per-element `List` form is wanted (e.g. to
/// interoperate with a peer that always emits `List` for byte sequences).
impl JceField for Bytes {
    fn write_field(&self, enc: &mut Encoder, tag: u8) {
        enc.write_bytes(self, tag);
    }

    fn read_field(dec: &mut Decoder, tag: u8, required: bool) -> Result<Self> {
        dec.read_bytes(tag, required)
    }
}

impl<T: JceField> JceField for Vec<T> {
    fn write_field(&self, enc: &mut Encoder, tag: u8) {
        enc.write_vector(self, tag);
    }

    fn read_field(dec: &mut Decoder, tag: u8, required: bool) -> Result<Self> {
        dec.read_vector(tag, required)
    }
}

impl<K, V> JceField for HashMap<K, V>
where
    K: JceField + Eq + Hash,
    V: JceField,
{
    fn write_field(&self, enc: &mut Encoder, tag: u8) {
        enc.write_map(self, tag);
    }

    fn read_field(dec: &mut Decoder, tag: u8, required: bool) -> Result<Self> {
        dec.read_map(tag, required)
    }
}
