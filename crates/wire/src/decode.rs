use std::mem::size_of;

use bytes::{Buf, Bytes};

use crate::error::WireError;

/// Extension trait for reading big-endian fixed-width scalars off a
/// [`Bytes`] cursor. Mirrors [`crate::encode::WireEncode`] so encode and
/// decode stay symmetric.
pub trait WireDecode {
    fn read_be_i8(&mut self) -> Result<i8, WireError>;
    fn read_be_i16(&mut self) -> Result<i16, WireError>;
    fn read_be_i32(&mut self) -> Result<i32, WireError>;
    fn read_be_i64(&mut self) -> Result<i64, WireError>;
    fn read_be_u8(&mut self) -> Result<u8, WireError>;
    fn read_be_u32(&mut self) -> Result<u32, WireError>;
    fn read_be_f32(&mut self) -> Result<f32, WireError>;
    fn read_be_f64(&mut self) -> Result<f64, WireError>;

    /// Consumes `n` bytes without interpreting them (used when skipping
    /// string and `SimpleList` payloads).
    fn read_raw(&mut self, n: usize) -> Result<Bytes, WireError>;
}

fn require(buf: &Bytes, expected: usize) -> Result<(), WireError> {
    if buf.remaining() < expected {
        return Err(WireError::UnexpectedEof { expected, actual: buf.remaining() });
    }
    Ok(())
}

impl WireDecode for Bytes {
    fn read_be_i8(&mut self) -> Result<i8, WireError> {
        require(self, size_of::<i8>())?;
        Ok(self.get_i8())
    }

    fn read_be_i16(&mut self) -> Result<i16, WireError> {
        require(self, size_of::<i16>())?;
        Ok(self.get_i16())
    }

    fn read_be_i32(&mut self) -> Result<i32, WireError> {
        require(self, size_of::<i32>())?;
        Ok(self.get_i32())
    }

    fn read_be_i64(&mut self) -> Result<i64, WireError> {
        require(self, size_of::<i64>())?;
        Ok(self.get_i64())
    }

    fn read_be_u8(&mut self) -> Result<u8, WireError> {
        require(self, size_of::<u8>())?;
        Ok(self.get_u8())
    }

    fn read_be_u32(&mut self) -> Result<u32, WireError> {
        require(self, size_of::<u32>())?;
        Ok(self.get_u32())
    }

    fn read_be_f32(&mut self) -> Result<f32, WireError> {
        require(self, size_of::<f32>())?;
        Ok(self.get_f32())
    }

    fn read_be_f64(&mut self) -> Result<f64, WireError> {
        require(self, size_of::<f64>())?;
        Ok(self.get_f64())
    }

    fn read_raw(&mut self, n: usize) -> Result<Bytes, WireError> {
        require(self, n)?;
        Ok(self.copy_to_bytes(n))
    }
}
