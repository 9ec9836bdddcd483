/// Error returned when reading or writing a wire-level primitive fails.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    UnexpectedEof { expected: usize, actual: usize },

    #[error("header carried wire-type code {0:#x}, which is outside 0..=13")]
    MalformedType(u8),
}
