//! Error type for fallible tag conversions.

use core::fmt;

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Conversion errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error {
    /// Byte does not name any [`Status`](crate::status::Status).
    UnknownStatus(u8),
    /// Byte does not name any [`VarType`](crate::var_type::VarType).
    UnknownVarType(u8),
}

impl fmt::Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::UnknownStatus(v) => write!(f, "unknown status code 0x{v:02X}"),
            Self::UnknownVarType(v) => write!(f, "unknown variable type tag 0x{v:02X}"),
        }
    }
}

impl core::error::Error for Error {}
