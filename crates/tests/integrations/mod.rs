use std::collections::HashMap;

use bytes::Bytes;
use jce::{Decoder, Encoder, JceStruct, Result, Struct, from_bytes, to_bytes};

/// Mirrors the six canonical wire fixtures: each one is checked both as
/// an exact byte sequence out of the encoder and as a value recovered by
/// the decoder from that same sequence.
mod fixtures {
    use super::*;

    #[test]
    fn zero_value_uses_the_zero_wire_type() {
        let mut enc = Encoder::new();
        enc.write_i32(0, 0);
        let bytes = enc.flush();
        assert_eq!(&bytes[..], &[0x0C]);

        let mut dec = Decoder::new(bytes);
        assert_eq!(dec.read_i32(0, true).unwrap(), 0);
    }

    #[test]
    fn one_uses_int8() {
        let mut enc = Encoder::new();
        enc.write_i32(1, 0);
        let bytes = enc.flush();
        assert_eq!(&bytes[..], &[0x00, 0x01]);

        let mut dec = Decoder::new(bytes);
        assert_eq!(dec.read_i32(0, true).unwrap(), 1);
    }

    #[test]
    fn two_fifty_six_uses_int16_at_tag_one() {
        let mut enc = Encoder::new();
        enc.write_i32(256, 1);
        let bytes = enc.flush();
        assert_eq!(&bytes[..], &[0x11, 0x01, 0x00]);

        let mut dec = Decoder::new(bytes);
        assert_eq!(dec.read_i32(1, true).unwrap(), 256);
    }

    #[test]
    fn short_string_uses_string1() {
        let mut enc = Encoder::new();
        enc.write_string("hi", 0);
        let bytes = enc.flush();
        assert_eq!(&bytes[..], &[0x06, 0x02, b'h', b'i']);

        let mut dec = Decoder::new(bytes);
        assert_eq!(dec.read_string(0, true).unwrap(), "hi");
    }

    #[test]
    fn byte_sequence_uses_simple_list() {
        let mut enc = Encoder::new();
        enc.write_bytes(&[0x41, 0x42, 0x43], 0);
        let bytes = enc.flush();
        assert_eq!(&bytes[..], &[0x0D, 0x00, 0x00, 0x03, 0x41, 0x42, 0x43]);

        let mut dec = Decoder::new(bytes);
        assert_eq!(dec.read_bytes(0, true).unwrap(), Bytes::from_static(b"ABC"));
    }

    #[test]
    fn struct_with_one_field_is_wrapped_in_struct_begin_end() {
        let mut enc = Encoder::new();
        enc.write_header(0, jce::WireType::StructBegin);
        enc.write_i32(7, 1);
        enc.write_header(0, jce::WireType::StructEnd);
        let bytes = enc.flush();
        assert_eq!(&bytes[..], &[0x0A, 0x10, 0x07, 0x0B]);
    }
}

struct Point {
    x: i32,
    y: i32,
}

impl JceStruct for Point {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_i32(self.x, 0);
        enc.write_i32(self.y, 1);
    }

    fn decode(dec: &mut Decoder) -> Result<Self> {
        Ok(Point { x: dec.read_i32(0, true)?, y: dec.read_i32(1, true)? })
    }
}

struct Nested {
    label: String,
    origin: Point,
}

impl JceStruct for Nested {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_string(&self.label, 0);
        enc.write_struct(&self.origin, 1);
    }

    fn decode(dec: &mut Decoder) -> Result<Self> {
        Ok(Nested {
            label: dec.read_string(0, true)?,
            origin: dec.read_struct::<Point>(1, true)?.expect("present"),
        })
    }
}

#[test]
fn marshal_and_unmarshal_round_trip_a_struct() {
    let point = Point { x: -1, y: 1000 };
    let bytes = to_bytes(&point);
    let decoded: Point = from_bytes(bytes).unwrap();
    assert_eq!(decoded.x, -1);
    assert_eq!(decoded.y, 1000);
}

#[test]
fn nested_struct_round_trips() {
    let value = Nested { label: "origin".to_string(), origin: Point { x: 3, y: 4 } };
    let bytes = to_bytes(&value);
    let decoded: Nested = from_bytes(bytes).unwrap();
    assert_eq!(decoded.label, "origin");
    assert_eq!(decoded.origin.x, 3);
    assert_eq!(decoded.origin.y, 4);
}

#[test]
fn missing_required_field_is_an_error() {
    let mut enc = Encoder::new();
    enc.write_i32(5, 0);
    let bytes = enc.flush();
    let result: Result<Point> = from_bytes(bytes);
    assert!(result.is_err());
}

#[test]
fn missing_optional_field_falls_back_to_the_zero_value() {
    let mut enc = Encoder::new();
    enc.write_i32(9, 0);
    let bytes = enc.flush();
    let mut dec = Decoder::new(bytes);
    assert_eq!(dec.read_i32(0, true).unwrap(), 9);
    assert_eq!(dec.read_i32(4, false).unwrap(), 0);
}

#[test]
fn unknown_trailing_fields_are_skipped_for_forward_compatibility() {
    let mut enc = Encoder::new();
    enc.write_i32(1, 0);
    enc.write_i32(2, 1);
    enc.write_string("from a newer writer", 8);
    enc.write_vector(&[1i32, 2, 3], 9);
    let bytes = enc.flush();

    let decoded: Point = from_bytes(bytes).unwrap();
    assert_eq!(decoded.x, 1);
    assert_eq!(decoded.y, 2);
}

#[test]
fn a_field_present_at_a_lower_tag_than_requested_is_treated_as_absent() {
    // Fields must appear in non-decreasing tag order; once the decoder has
    // passed a tag while seeking forward it can never find an
    // out-of-order field with a lower tag again this pass.
    let mut enc = Encoder::new();
    enc.write_i32(1, 5);
    let bytes = enc.flush();
    let mut dec = Decoder::new(bytes);
    assert_eq!(dec.read_i32(2, false).unwrap(), 0);
}

#[test]
fn integer_widening_accepts_a_narrower_wire_type() {
    let mut enc = Encoder::new();
    enc.write_i8(5, 0);
    let bytes = enc.flush();
    let mut dec = Decoder::new(bytes);
    assert_eq!(dec.read_i64(0, true).unwrap(), 5);
}

#[test]
fn integer_widening_rejects_a_wider_wire_type() {
    let mut enc = Encoder::new();
    enc.write_i32(70_000, 0);
    let bytes = enc.flush();
    let mut dec = Decoder::new(bytes);
    assert!(dec.read_i16(0, true).is_err());
}

#[test]
fn zero_is_accepted_regardless_of_requested_width() {
    let mut enc = Encoder::new();
    enc.write_i64(0, 0);
    let bytes = enc.flush();
    let mut dec = Decoder::new(bytes);
    assert_eq!(dec.read_i8(0, true).unwrap(), 0);
}

#[test]
fn zero_is_accepted_for_floats_too() {
    let mut enc = Encoder::new();
    enc.write_i32(0, 0);
    let bytes = enc.flush();
    let mut dec = Decoder::new(bytes);
    assert_eq!(dec.read_f64(0, true).unwrap(), 0.0);
}

#[test]
fn shrink_cascade_boundaries_round_trip() {
    for v in [-129i32, -128, 127, 128, -32769, -32768, 32767, 32768, i32::MIN, i32::MAX] {
        let mut enc = Encoder::new();
        enc.write_i32(v, 0);
        let mut dec = Decoder::new(enc.flush());
        assert_eq!(dec.read_i32(0, true).unwrap(), v);
    }
}

#[test]
fn vector_of_structs_round_trips_via_the_struct_wrapper() {
    let points = vec![Struct(Point { x: 1, y: 2 }), Struct(Point { x: 3, y: 4 })];
    let mut enc = Encoder::new();
    enc.write_vector(&points, 0);
    let mut dec = Decoder::new(enc.flush());
    let decoded: Vec<Struct<Point>> = dec.read_vector(0, true).unwrap();
    assert_eq!(decoded[0].0.x, 1);
    assert_eq!(decoded[1].0.y, 4);
}

#[test]
fn map_round_trips_with_unspecified_key_order() {
    let mut values = HashMap::new();
    values.insert("a".to_string(), 1i32);
    values.insert("b".to_string(), 2i32);
    values.insert("c".to_string(), 3i32);

    let mut enc = Encoder::new();
    enc.write_map(&values, 0);
    let mut dec = Decoder::new(enc.flush());
    let decoded: HashMap<String, i32> = dec.read_map(0, true).unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn negative_length_on_a_string4_field_is_rejected() {
    let mut raw = bytes::BytesMut::new();
    wire::write_header(&mut raw, 0, jce::WireType::String4);
    raw.extend_from_slice(&(-1i32).to_be_bytes());
    let mut dec = Decoder::new(raw.freeze());
    assert!(dec.read_string(0, true).is_err());
}
