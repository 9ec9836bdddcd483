use std::collections::HashMap;
use std::hash::Hash;

use bytes::{Buf, Bytes, BytesMut};
use wire::{WireDecode as _, WireType, peek_header};

use crate::{
    error::{JceError, Result},
    field::JceField,
    struct_::JceStruct,
};

/// Consumes a byte stream that is a complete, bounded JCE message: tag-seek
/// forward over unknown or out-of-order-relative fields, widen narrower
/// wire types into wider host types, and validate wire-type compatibility.
pub struct Decoder {
    buf: Bytes,
}

impl Decoder {
    pub fn new(buf: Bytes) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed. Useful for callers that want to check
    /// whether a message was fully consumed.
    pub fn remaining(&self) -> &[u8] {
        &self.buf
    }

    pub fn read_bool(&mut self, tag: u8, required: bool) -> Result<bool> {
        Ok(self.decode_integer(tag, required, WireType::Int8)? != 0)
    }

    pub fn read_i8(&mut self, tag: u8, required: bool) -> Result<i8> {
        Ok(self.decode_integer(tag, required, WireType::Int8)? as i8)
    }

    /// `u8` has no signed counterpart of the same width that can hold every
    /// value in range, so it requests `Int16` instead.
    pub fn read_u8(&mut self, tag: u8, required: bool) -> Result<u8> {
        Ok(self.decode_integer(tag, required, WireType::Int16)? as u8)
    }

    pub fn read_i16(&mut self, tag: u8, required: bool) -> Result<i16> {
        Ok(self.decode_integer(tag, required, WireType::Int16)? as i16)
    }

    pub fn read_u16(&mut self, tag: u8, required: bool) -> Result<u16> {
        Ok(self.decode_integer(tag, required, WireType::Int32)? as u16)
    }

    pub fn read_i32(&mut self, tag: u8, required: bool) -> Result<i32> {
        Ok(self.decode_integer(tag, required, WireType::Int32)? as i32)
    }

    pub fn read_u32(&mut self, tag: u8, required: bool) -> Result<u32> {
        Ok(self.decode_integer(tag, required, WireType::Int64)? as u32)
    }

    pub fn read_i64(&mut self, tag: u8, required: bool) -> Result<i64> {
        self.decode_integer(tag, required, WireType::Int64)
    }

    pub fn read_u64(&mut self, tag: u8, required: bool) -> Result<u64> {
        Ok(self.decode_integer(tag, required, WireType::Int64)? as u64)
    }

    pub fn read_f32(&mut self, tag: u8, required: bool) -> Result<f32> {
        Ok(self.decode_float(tag, required, WireType::Float32)? as f32)
    }

    pub fn read_f64(&mut self, tag: u8, required: bool) -> Result<f64> {
        self.decode_float(tag, required, WireType::Float64)
    }

    pub fn read_string(&mut self, tag: u8, required: bool) -> Result<String> {
        let bytes = self.read_string_bytes(tag, required)?;
        // Content is written verbatim with no encoding validation on the
        // wire; we never reject a field for carrying non-UTF-8 bytes.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Byte sequences accept either the compact `SimpleList` form or the
    /// general per-element `List` form.
    pub fn read_bytes(&mut self, tag: u8, required: bool) -> Result<Bytes> {
        match self.skip_to_tag(tag)? {
            Some(WireType::SimpleList) => {
                let (_, inner_type, header_len) = peek_header(&self.buf)?;
                self.buf.advance(header_len);
                if inner_type != WireType::Int8 {
                    return Err(JceError::MalformedType { value: inner_type as u8 });
                }
                let len = self.decode_required_i32(0, tag)?;
                self.buf.read_raw(len as usize).map_err(Into::into)
            }
            Some(WireType::List) => {
                let len = self.decode_required_i32(0, tag)?;
                let mut out = BytesMut::with_capacity(len as usize);
                for _ in 0..len {
                    out.extend_from_slice(&[self.read_i8(0, true)? as u8]);
                }
                Ok(out.freeze())
            }
            Some(found) => {
                Err(JceError::TypeMismatch { tag, expected: WireType::SimpleList, found })
            }
            None if required => Err(JceError::RequiredFieldMissing { tag }),
            None => Ok(Bytes::new()),
        }
    }

    pub fn read_vector<T: JceField>(&mut self, tag: u8, required: bool) -> Result<Vec<T>> {
        match self.skip_to_tag(tag)? {
            Some(WireType::List) => {
                let len = self.decode_required_i32(0, tag)?;
                let mut out = Vec::with_capacity(len as usize);
                for _ in 0..len {
                    out.push(T::read_field(self, 0, true)?);
                }
                Ok(out)
            }
            Some(found) => Err(JceError::TypeMismatch { tag, expected: WireType::List, found }),
            None if required => Err(JceError::RequiredFieldMissing { tag }),
            None => Ok(Vec::new()),
        }
    }

    pub fn read_map<K, V>(&mut self, tag: u8, required: bool) -> Result<HashMap<K, V>>
    where
        K: JceField + Eq + Hash,
        V: JceField,
    {
        match self.skip_to_tag(tag)? {
            Some(WireType::Map) => {
                let len = self.decode_required_i32(0, tag)?;
                let mut out = HashMap::with_capacity(len as usize);
                for _ in 0..len {
                    let key = K::read_field(self, 0, true)?;
                    let value = V::read_field(self, 1, true)?;
                    out.insert(key, value);
                }
                Ok(out)
            }
            Some(found) => Err(JceError::TypeMismatch { tag, expected: WireType::Map, found }),
            None if required => Err(JceError::RequiredFieldMissing { tag }),
            None => Ok(HashMap::new()),
        }
    }

    /// Reads a nested struct. Unlike the scalar/container readers there is
    /// no generic "zero value" for an arbitrary user type, so absence is
    /// surfaced as `Ok(None)` rather than a default instance.
    pub fn read_struct<S: JceStruct>(&mut self, tag: u8, required: bool) -> Result<Option<S>> {
        match self.skip_to_tag(tag)? {
            Some(WireType::StructBegin) => {
                let value = S::decode(self)?;
                self.skip_to_struct_end()?;
                Ok(Some(value))
            }
            Some(found) => Err(JceError::TypeMismatch { tag, expected: WireType::StructBegin, found }),
            None if required => Err(JceError::RequiredFieldMissing { tag }),
            None => Ok(None),
        }
    }

    /// Generic type-directed entry point: dispatches on `T` via
    /// [`JceField`] rather than runtime reflection.
    pub fn decode<T: JceField>(&mut self, tag: u8, required: bool) -> Result<T> {
        T::read_field(self, tag, required)
    }

    fn read_string_bytes(&mut self, tag: u8, required: bool) -> Result<Bytes> {
        match self.skip_to_tag(tag)? {
            Some(WireType::String1) => {
                let len = self.buf.read_be_u8()? as usize;
                self.buf.read_raw(len).map_err(Into::into)
            }
            Some(WireType::String4) => {
                let len = self.buf.read_be_u32()? as i32;
                if len < 0 {
                    return Err(JceError::NegativeLength { tag, length: len });
                }
                self.buf.read_raw(len as usize).map_err(Into::into)
            }
            Some(found) => Err(JceError::TypeMismatch { tag, expected: WireType::String4, found }),
            None if required => Err(JceError::RequiredFieldMissing { tag }),
            None => Ok(Bytes::new()),
        }
    }

    fn decode_required_i32(&mut self, tag: u8, context_tag: u8) -> Result<i32> {
        let len = self.read_i32(tag, true)?;
        if len < 0 {
            return Err(JceError::NegativeLength { tag: context_tag, length: len });
        }
        Ok(len)
    }

    /// Shared implementation behind `read_bool`/`read_i8..read_u64`:
    /// `Zero` is always acceptable regardless of the requested upper
    /// bound; otherwise a found wire type wider than requested is a
    /// `TypeMismatch` (the rejection is strict `>`, so e.g. a field
    /// encoded at `Int16` can never be read into an `i8` even if the
    /// value would fit).
    fn decode_integer(&mut self, tag: u8, required: bool, requested: WireType) -> Result<i64> {
        match self.skip_to_tag(tag)? {
            Some(WireType::Zero) => Ok(0),
            Some(found) if found > requested => {
                Err(JceError::TypeMismatch { tag, expected: requested, found })
            }
            Some(WireType::Int8) => Ok(self.buf.read_be_i8()? as i64),
            Some(WireType::Int16) => Ok(self.buf.read_be_i16()? as i64),
            Some(WireType::Int32) => Ok(self.buf.read_be_i32()? as i64),
            Some(WireType::Int64) => Ok(self.buf.read_be_i64()?),
            Some(found) => Err(JceError::TypeMismatch { tag, expected: requested, found }),
            None if required => Err(JceError::RequiredFieldMissing { tag }),
            None => Ok(0),
        }
    }

    /// Shared implementation behind `read_f32`/`read_f64`. `Zero` must be
    /// accepted for floats just as it is for integers, so it is
    /// special-cased first, ahead of the strict `>` upper-bound check.
    fn decode_float(&mut self, tag: u8, required: bool, requested: WireType) -> Result<f64> {
        match self.skip_to_tag(tag)? {
            Some(WireType::Zero) => Ok(0.0),
            Some(found) if found > requested => {
                Err(JceError::TypeMismatch { tag, expected: requested, found })
            }
            Some(WireType::Float32) => Ok(self.buf.read_be_f32()? as f64),
            Some(WireType::Float64) => Ok(self.buf.read_be_f64()?),
            Some(found) => Err(JceError::TypeMismatch { tag, expected: requested, found }),
            None if required => Err(JceError::RequiredFieldMissing { tag }),
            None => Ok(0.0),
        }
    }

    /// Tag-seek: consumes and discards fields until `tag` is found,
    /// `StructEnd` is reached, or a field with a greater tag appears.
    ///
    /// A top-level message has no closing `StructEnd` of its own (it is
    /// an "implicit struct" per the data model): running out of bytes
    /// with nothing left to peek is therefore treated the same as seeing
    /// `StructEnd`, both meaning "no more fields to search," rather than
    /// as `UnexpectedEof`. A header that begins but cannot be completed
    /// (e.g. one byte of a two-byte long header) still fails with
    /// `UnexpectedEof`, since that is a genuinely truncated stream.
    pub(crate) fn skip_to_tag(&mut self, tag: u8) -> Result<Option<WireType>> {
        loop {
            if self.buf.is_empty() {
                return Ok(None);
            }
            let (next_tag, next_type, header_len) = peek_header(&self.buf)?;
            if next_type == WireType::StructEnd || tag < next_tag {
                return Ok(None);
            }
            self.buf.advance(header_len);
            if tag == next_tag {
                return Ok(Some(next_type));
            }
            self.skip_field(next_type)?;
        }
    }

    /// Consumes the header and payload of exactly one field, whatever its
    /// tag, used when discarding container entries whose own tags (0 for
    /// keys/elements, 1 for map values) are irrelevant to the skip.
    fn skip_one_field(&mut self) -> Result<()> {
        let (_, wire_type, header_len) = peek_header(&self.buf)?;
        self.buf.advance(header_len);
        self.skip_field(wire_type)
    }

    /// Consumes fields until and including the next `StructEnd` header,
    /// recursively for nested structs. Unlike `skip_to_tag`, a nested
    /// struct is always properly closed, so running out of bytes here is
    /// a genuine `UnexpectedEof`.
    fn skip_to_struct_end(&mut self) -> Result<()> {
        loop {
            let (_, wire_type, header_len) = peek_header(&self.buf)?;
            self.buf.advance(header_len);
            self.skip_field(wire_type)?;
            if wire_type == WireType::StructEnd {
                return Ok(());
            }
        }
    }

    fn skip_field(&mut self, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Int8 => {
                self.buf.read_raw(1)?;
            }
            WireType::Int16 => {
                self.buf.read_raw(2)?;
            }
            WireType::Int32 | WireType::Float32 => {
                self.buf.read_raw(4)?;
            }
            WireType::Int64 | WireType::Float64 => {
                self.buf.read_raw(8)?;
            }
            WireType::Zero | WireType::StructEnd => {}
            WireType::String1 => {
                let len = self.buf.read_be_u8()? as usize;
                self.buf.read_raw(len)?;
            }
            WireType::String4 => {
                let len = self.buf.read_be_u32()? as i32;
                if len < 0 {
                    return Err(JceError::NegativeLength { tag: 0, length: len });
                }
                self.buf.read_raw(len as usize)?;
            }
            WireType::Map => {
                let len = self.decode_required_i32(0, 0)?;
                for _ in 0..(len * 2) {
                    self.skip_one_field()?;
                }
            }
            WireType::List => {
                let len = self.decode_required_i32(0, 0)?;
                for _ in 0..len {
                    self.skip_one_field()?;
                }
            }
            WireType::SimpleList => {
                let (_, inner_type, header_len) = peek_header(&self.buf)?;
                self.buf.advance(header_len);
                if inner_type != WireType::Int8 {
                    return Err(JceError::MalformedType { value: inner_type as u8 });
                }
                let len = self.decode_required_i32(0, 0)?;
                self.buf.read_raw(len as usize)?;
            }
            WireType::StructBegin => {
                self.skip_to_struct_end()?;
            }
        }
        Ok(())
    }
}
