//! Encoder, decoder, and typed field dispatch for the JCE tagged binary
//! encoding, built on the wire primitives in the `wire` crate.

mod decoder;
mod encoder;
mod error;
mod field;
mod marshal;
mod struct_;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{JceError, Result};
pub use field::JceField;
pub use marshal::{from_bytes, to_bytes};
pub use struct_::{JceStruct, Struct};
pub use wire::WireType;
