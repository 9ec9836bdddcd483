//! Wire-level primitives for the JCE tagged binary encoding.
//!
//! This crate owns the parts of the format that never change with the
//! application schema: the header bit-layout (short and long forms), the
//! 4-bit wire-type enumeration, and big-endian fixed-width scalar
//! read/write. The encoder and decoder session types that build on top of
//! these primitives live in the `jce` crate.

mod decode;
mod encode;
mod error;
mod header;
mod wire_type;

pub use decode::WireDecode;
pub use encode::WireEncode;
pub use error::WireError;
pub use header::{peek_header, write_header};
pub use wire_type::WireType;
