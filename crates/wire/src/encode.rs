use bytes::{BufMut, BytesMut};

/// Extension trait for writing big-endian fixed-width scalars into a
/// [`BytesMut`] accumulation buffer. Mirrors [`crate::decode::WireDecode`].
pub trait WireEncode {
    fn write_be_i8(&mut self, v: i8);
    fn write_be_i16(&mut self, v: i16);
    fn write_be_i32(&mut self, v: i32);
    fn write_be_i64(&mut self, v: i64);
    fn write_be_u8(&mut self, v: u8);
    fn write_be_u32(&mut self, v: u32);
    fn write_be_f32(&mut self, v: f32);
    fn write_be_f64(&mut self, v: f64);
}

impl WireEncode for BytesMut {
    fn write_be_i8(&mut self, v: i8) {
        self.put_i8(v);
    }

    fn write_be_i16(&mut self, v: i16) {
        self.put_i16(v);
    }

    fn write_be_i32(&mut self, v: i32) {
        self.put_i32(v);
    }

    fn write_be_i64(&mut self, v: i64) {
        self.put_i64(v);
    }

    fn write_be_u8(&mut self, v: u8) {
        self.put_u8(v);
    }

    fn write_be_u32(&mut self, v: u32) {
        self.put_u32(v);
    }

    fn write_be_f32(&mut self, v: f32) {
        self.put_f32(v);
    }

    fn write_be_f64(&mut self, v: f64) {
        self.put_f64(v);
    }
}
