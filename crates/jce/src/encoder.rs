use std::collections::HashMap;

use bytes::{Bytes, BytesMut};
use wire::{WireEncode as _, WireType, write_header};

use crate::{field::JceField, struct_::JceStruct};

/// Serializes typed values into a stream of `(header, payload)` pairs.
///
/// Byte order is fixed to big-endian per the wire format; there is no
/// configurable byte order or buffer-size knob to carry.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    pub fn new() -> Self {
        Self { buf: BytesMut::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: BytesMut::with_capacity(capacity) }
    }

    /// Hands back everything written so far and resets the accumulation
    /// buffer. Callers must call this before reading the produced bytes.
    pub fn flush(&mut self) -> Bytes {
        self.buf.split().freeze()
    }

    pub fn write_header(&mut self, tag: u8, wire_type: WireType) {
        write_header(&mut self.buf, tag, wire_type);
    }

    pub fn write_bool(&mut self, v: bool, tag: u8) {
        if v {
            self.write_header(tag, WireType::Int8);
            self.buf.write_be_i8(1);
        } else {
            self.write_header(tag, WireType::Zero);
        }
    }

    pub fn write_i8(&mut self, v: i8, tag: u8) {
        if v == 0 {
            self.write_header(tag, WireType::Zero);
        } else {
            self.write_header(tag, WireType::Int8);
            self.buf.write_be_i8(v);
        }
    }

    pub fn write_i16(&mut self, v: i16, tag: u8) {
        self.write_shrink_i64(v as i64, tag);
    }

    pub fn write_i32(&mut self, v: i32, tag: u8) {
        self.write_shrink_i64(v as i64, tag);
    }

    pub fn write_i64(&mut self, v: i64, tag: u8) {
        self.write_shrink_i64(v, tag);
    }

    /// Unsigned host types have no narrower signed counterpart that is
    /// guaranteed to hold every value in range, so they all funnel through
    /// the same full shrink cascade starting at `i64`.
    pub fn write_u8(&mut self, v: u8, tag: u8) {
        self.write_shrink_i64(v as i64, tag);
    }

    pub fn write_u16(&mut self, v: u16, tag: u8) {
        self.write_shrink_i64(v as i64, tag);
    }

    pub fn write_u32(&mut self, v: u32, tag: u8) {
        self.write_shrink_i64(v as i64, tag);
    }

    /// `u64` values above `i64::MAX` reinterpret their bit pattern as
    /// negative when cast. There is no wire type wide enough to carry an
    /// unsigned 64-bit magnitude, so the cascade's `Int64` case is as far
    /// as it goes.
    pub fn write_u64(&mut self, v: u64, tag: u8) {
        self.write_shrink_i64(v as i64, tag);
    }

    pub fn write_f32(&mut self, v: f32, tag: u8) {
        self.write_header(tag, WireType::Float32);
        self.buf.write_be_f32(v);
    }

    pub fn write_f64(&mut self, v: f64, tag: u8) {
        self.write_header(tag, WireType::Float64);
        self.buf.write_be_f64(v);
    }

    pub fn write_string(&mut self, v: &str, tag: u8) {
        let bytes = v.as_bytes();
        if bytes.len() <= u8::MAX as usize {
            self.write_header(tag, WireType::String1);
            self.buf.write_be_u8(bytes.len() as u8);
        } else {
            self.write_header(tag, WireType::String4);
            self.buf.write_be_u32(bytes.len() as u32);
        }
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a byte sequence via the compact `SimpleList` form. This is
    /// the path `bytes::Bytes` values take through [`JceField`]; a
    /// `Vec<u8>` instead takes the generic `List` path of
    /// [`Encoder::write_vector`], one header per element.
    pub fn write_bytes(&mut self, v: &[u8], tag: u8) {
        self.write_header(tag, WireType::SimpleList);
        self.write_header(0, WireType::Int8);
        self.write_i32(v.len() as i32, 0);
        self.buf.extend_from_slice(v);
    }

    pub fn write_vector<T: JceField>(&mut self, values: &[T], tag: u8) {
        self.write_header(tag, WireType::List);
        self.write_i32(values.len() as i32, 0);
        for value in values {
            value.write_field(self, 0);
        }
    }

    pub fn write_map<K: JceField, V: JceField>(&mut self, values: &HashMap<K, V>, tag: u8) {
        self.write_header(tag, WireType::Map);
        self.write_i32(values.len() as i32, 0);
        for (key, value) in values {
            key.write_field(self, 0);
            value.write_field(self, 1);
        }
    }

    pub fn write_struct<S: JceStruct>(&mut self, value: &S, tag: u8) {
        self.write_header(tag, WireType::StructBegin);
        value.encode(self);
        self.write_header(0, WireType::StructEnd);
    }

    /// Generic type-directed entry point: dispatches on `T` via
    /// [`JceField`] rather than runtime reflection.
    pub fn encode<T: JceField>(&mut self, value: &T, tag: u8) {
        value.write_field(self, tag);
    }

    /// Implements the shrink rule shared by every signed/unsigned integer
    /// writer: pick the smallest wire type that represents `v` exactly.
    fn write_shrink_i64(&mut self, v: i64, tag: u8) {
        if v == 0 {
            self.write_header(tag, WireType::Zero);
        } else if (i8::MIN as i64..=i8::MAX as i64).contains(&v) {
            self.write_header(tag, WireType::Int8);
            self.buf.write_be_i8(v as i8);
        } else if (i16::MIN as i64..=i16::MAX as i64).contains(&v) {
            self.write_header(tag, WireType::Int16);
            self.buf.write_be_i16(v as i16);
        } else if (i32::MIN as i64..=i32::MAX as i64).contains(&v) {
            self.write_header(tag, WireType::Int32);
            self.buf.write_be_i32(v as i32);
        } else {
            self.write_header(tag, WireType::Int64);
            self.buf.write_be_i64(v);
        }
    }
}
