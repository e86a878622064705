//! Variable type tags for dispatching on scalar and array element types.
//!
//! # Encoding
//!
//! - Low nibble: element width in bytes (1, 2, 4 or 8)
//! - `0x10`: signed element
//! - `0x20`: array of elements
//!
//! Values match firmware written against the same C table, so tags can be
//! exchanged as raw bytes.

use core::fmt;

use crate::error::Error;

const SIGNED_FLAG: u8 = 0x10;
const ARRAY_FLAG: u8 = 0x20;

/// Standard variable types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum VarType {
    /// Unsigned 8-bit integer.
    U8 = 0x01,
    /// Signed 8-bit integer.
    I8 = 0x11,
    /// Unsigned 16-bit integer.
    U16 = 0x02,
    /// Signed 16-bit integer.
    I16 = 0x12,
    /// Unsigned 32-bit integer.
    U32 = 0x04,
    /// Signed 32-bit integer.
    I32 = 0x14,
    /// Unsigned 64-bit integer.
    U64 = 0x08,
    /// Signed 64-bit integer.
    I64 = 0x18,
    /// Array of unsigned 8-bit integers.
    U8Arr = 0x21,
    /// Array of signed 8-bit integers.
    I8Arr = 0x31,
    /// Array of unsigned 16-bit integers.
    U16Arr = 0x22,
    /// Array of signed 16-bit integers.
    I16Arr = 0x32,
    /// Array of unsigned 32-bit integers.
    U32Arr = 0x24,
    /// Array of signed 32-bit integers.
    I32Arr = 0x34,
    /// Array of unsigned 64-bit integers.
    U64Arr = 0x28,
    /// Array of signed 64-bit integers.
    I64Arr = 0x38,
}

impl VarType {
    /// Every tag, scalars first.
    pub const ALL: [Self; 16] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::U8Arr,
        Self::I8Arr,
        Self::U16Arr,
        Self::I16Arr,
        Self::U32Arr,
        Self::I32Arr,
        Self::U64Arr,
        Self::I64Arr,
    ];

    /// Raw tag byte.
    #[inline]
    pub const fn as_u8(self) -> u8 { self as u8 }

    /// Symbolic name as used by C firmware sharing this table.
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "VAR_TYPE_U8",
            Self::I8 => "VAR_TYPE_I8",
            Self::U16 => "VAR_TYPE_U16",
            Self::I16 => "VAR_TYPE_I16",
            Self::U32 => "VAR_TYPE_U32",
            Self::I32 => "VAR_TYPE_I32",
            Self::U64 => "VAR_TYPE_U64",
            Self::I64 => "VAR_TYPE_I64",
            Self::U8Arr => "VAR_TYPE_U8_ARR",
            Self::I8Arr => "VAR_TYPE_I8_ARR",
            Self::U16Arr => "VAR_TYPE_U16_ARR",
            Self::I16Arr => "VAR_TYPE_I16_ARR",
            Self::U32Arr => "VAR_TYPE_U32_ARR",
            Self::I32Arr => "VAR_TYPE_I32_ARR",
            Self::U64Arr => "VAR_TYPE_U64_ARR",
            Self::I64Arr => "VAR_TYPE_I64_ARR",
        }
    }

    /// Element width in bytes.
    pub const fn width_bytes(self) -> usize {
        match self.element() {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            _ => 8,
        }
    }

    /// True for signed element types.
    #[inline]
    pub const fn is_signed(self) -> bool { self.as_u8() & SIGNED_FLAG != 0 }

    /// True for array tags.
    #[inline]
    pub const fn is_array(self) -> bool { self.as_u8() & ARRAY_FLAG != 0 }

    /// Scalar element type. Scalars map to themselves.
    pub const fn element(self) -> Self {
        match self {
            Self::U8Arr => Self::U8,
            Self::I8Arr => Self::I8,
            Self::U16Arr => Self::U16,
            Self::I16Arr => Self::I16,
            Self::U32Arr => Self::U32,
            Self::I32Arr => Self::I32,
            Self::U64Arr => Self::U64,
            Self::I64Arr => Self::I64,
            scalar => scalar,
        }
    }

    /// Array tag holding elements of this type. Arrays map to themselves.
    pub const fn array_of(self) -> Self {
        match self {
            Self::U8 => Self::U8Arr,
            Self::I8 => Self::I8Arr,
            Self::U16 => Self::U16Arr,
            Self::I16 => Self::I16Arr,
            Self::U32 => Self::U32Arr,
            Self::I32 => Self::I32Arr,
            Self::U64 => Self::U64Arr,
            Self::I64 => Self::I64Arr,
            array => array,
        }
    }

    /// Total size in bytes of `count` elements of this type.
    ///
    /// Returns `None` on overflow.
    #[inline]
    pub const fn size_of_elements(
        self,
        count: usize,
    ) -> Option<usize> {
        self.width_bytes().checked_mul(count)
    }
}

impl From<VarType> for u8 {
    #[inline]
    fn from(tag: VarType) -> Self { tag.as_u8() }
}

impl TryFrom<u8> for VarType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_u8() == value)
            .ok_or(Error::UnknownVarType(value))
    }
}

impl fmt::Display for VarType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
