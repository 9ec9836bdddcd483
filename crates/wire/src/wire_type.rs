use crate::error::WireError;

/// The 4-bit encoding class carried in every field header.
///
/// Numeric order matters: the decoder widen rule compares a found wire
/// type against the requested one using this ordering (`Zero` is the lone
/// exception, handled explicitly by callers rather than via `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum WireType {
    Int8 = 0,
    Int16 = 1,
    Int32 = 2,
    Int64 = 3,
    Float32 = 4,
    Float64 = 5,
    String1 = 6,
    String4 = 7,
    Map = 8,
    List = 9,
    StructBegin = 10,
    StructEnd = 11,
    Zero = 12,
    SimpleList = 13,
}

impl WireType {
    /// Size in bytes of a fixed-width scalar payload, or `None` for
    /// variable-length / marker wire types.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            WireType::Int8 => Some(1),
            WireType::Int16 => Some(2),
            WireType::Int32 => Some(4),
            WireType::Int64 => Some(8),
            WireType::Float32 => Some(4),
            WireType::Float64 => Some(8),
            _ => None,
        }
    }
}

impl TryFrom<u8> for WireType {
    type Error = WireError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WireType::Int8),
            1 => Ok(WireType::Int16),
            2 => Ok(WireType::Int32),
            3 => Ok(WireType::Int64),
            4 => Ok(WireType::Float32),
            5 => Ok(WireType::Float64),
            6 => Ok(WireType::String1),
            7 => Ok(WireType::String4),
            8 => Ok(WireType::Map),
            9 => Ok(WireType::List),
            10 => Ok(WireType::StructBegin),
            11 => Ok(WireType::StructEnd),
            12 => Ok(WireType::Zero),
            13 => Ok(WireType::SimpleList),
            other => Err(WireError::MalformedType(other)),
        }
    }
}
