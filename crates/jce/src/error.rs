use wire::{WireError, WireType};

/// Errors produced by encoding or decoding a JCE value.
///
/// A single enum covers both directions: unlike a framed command protocol
/// where distinct message kinds are direction-restricted, the JCE codec
/// itself is symmetric, so there is no separate `EncodeError`/`DecodeError`
/// split to maintain.
#[derive(Debug, thiserror::Error)]
pub enum JceError {
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    UnexpectedEof { expected: usize, actual: usize },

    #[error("tag {tag}: type mismatch, expected at most {expected:?}, found {found:?}")]
    TypeMismatch { tag: u8, expected: WireType, found: WireType },

    #[error("header carried wire-type code {value:#x}, which is outside 0..=13")]
    MalformedType { value: u8 },

    #[error("tag {tag}: length-prefixed payload announced a negative length ({length})")]
    NegativeLength { tag: u8, length: i32 },

    #[error("required field missing, tag: {tag}")]
    RequiredFieldMissing { tag: u8 },

    #[error("host type '{host_type}' has no JCE wire mapping")]
    UnsupportedType { host_type: &'static str },

    #[error("decoder handed a null or unsettable destination")]
    InvalidDestination,
}

impl From<WireError> for JceError {
    fn from(error: WireError) -> Self {
        match error {
            WireError::UnexpectedEof { expected, actual } => {
                JceError::UnexpectedEof { expected, actual }
            }
            WireError::MalformedType(value) => JceError::MalformedType { value },
        }
    }
}

pub type Result<T> = std::result::Result<T, JceError>;
