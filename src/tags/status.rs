//! Generic status codes shared between firmware components.
//!
//! A [`Status`] is an identity tag: the numeric value only distinguishes one
//! status from another. Values are grouped into ranges per [`StatusCategory`],
//! but there is no ordering or bitmask meaning across statuses.
//!
//! # Categories
//!
//! - `0x01..=0x0B`: general outcome
//! - `0x10..=0x15`: memory and alignment
//! - `0x20..=0x23`: access and permissions
//! - `0x30..=0x36`: activity states
//! - `0x40`, `0xC0..`, `0xE1..`: debug and diagnostics
//! - `0xFD..=0xFE`: reserved

use core::fmt;

use crate::error::Error;
use crate::status_log::LogLevel;

/// Status category, derived from the status value range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum StatusCategory {
    /// Operation outcome and lifecycle.
    General,
    /// Memory and alignment.
    Memory,
    /// Access and permissions.
    Access,
    /// Activity states of a resource.
    Activity,
    /// Warnings, self-test and debug markers.
    Debug,
    /// Reserved for future use.
    Reserved,
}

/// Basic status codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
    // General
    /// Operation successful.
    Ok = 0x01,
    /// General error.
    Error = 0x02,
    /// Operation timed out.
    Timeout = 0x03,
    /// Resource is busy.
    ///
    /// The legacy C header declared `STATUS_BUSY` twice, as `0x04` and as
    /// `0x37` in the activity range. `0x04` is the only accepted value; `0x37`
    /// is rejected by [`Status::try_from`].
    Busy = 0x04,
    /// Resource is idle.
    Idle = 0x05,
    /// Requested item not found.
    NotFound = 0x06,
    /// Operation not supported.
    Unsupported = 0x07,
    /// Successfully initialized.
    Initialized = 0x08,
    /// Not yet initialized.
    NotInitialized = 0x09,
    /// Operation in progress.
    InProgress = 0x0A,
    /// Operation completed.
    Completed = 0x0B,

    // Memory and alignment
    /// Memory is aligned.
    MemAligned = 0x10,
    /// Memory is unaligned.
    MemUnaligned = 0x11,
    /// Memory is full.
    MemFull = 0x12,
    /// Memory is empty.
    MemEmpty = 0x13,
    /// Buffer overflow detected.
    Overflow = 0x14,
    /// Buffer underflow detected.
    Underflow = 0x15,

    // Access and permissions
    /// Access granted.
    AccessGranted = 0x20,
    /// Access denied.
    AccessDenied = 0x21,
    /// Resource is locked.
    Locked = 0x22,
    /// Resource is unlocked.
    Unlocked = 0x23,

    // Activity states
    /// Resource is active.
    Active = 0x30,
    /// Resource is inactive.
    Inactive = 0x31,
    /// Operation is stopped.
    Stopped = 0x32,
    /// Operation is running.
    Running = 0x33,
    /// Resource is in sleep mode.
    Sleeping = 0x34,
    /// Resource is in standby mode.
    Standby = 0x35,
    /// Resource is not ready.
    NotReady = 0x36,

    // Debug and warnings
    /// General warning.
    Warning = 0x40,
    /// Self-test passed.
    SelfTestPass = 0xC0,
    /// Self-test failed.
    SelfTestFail = 0xC1,
    /// Debug status 1.
    Debug1 = 0xE1,
    /// Debug status 2.
    Debug2 = 0xE2,
    /// Debug status 3.
    Debug3 = 0xE3,

    // Reserved
    /// Feature not implemented.
    NotImplemented = 0xFD,
    /// Unknown status.
    #[default]
    Unknown = 0xFE,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Self; 36] = [
        Self::Ok,
        Self::Error,
        Self::Timeout,
        Self::Busy,
        Self::Idle,
        Self::NotFound,
        Self::Unsupported,
        Self::Initialized,
        Self::NotInitialized,
        Self::InProgress,
        Self::Completed,
        Self::MemAligned,
        Self::MemUnaligned,
        Self::MemFull,
        Self::MemEmpty,
        Self::Overflow,
        Self::Underflow,
        Self::AccessGranted,
        Self::AccessDenied,
        Self::Locked,
        Self::Unlocked,
        Self::Active,
        Self::Inactive,
        Self::Stopped,
        Self::Running,
        Self::Sleeping,
        Self::Standby,
        Self::NotReady,
        Self::Warning,
        Self::SelfTestPass,
        Self::SelfTestFail,
        Self::Debug1,
        Self::Debug2,
        Self::Debug3,
        Self::NotImplemented,
        Self::Unknown,
    ];

    /// Raw status byte.
    #[inline]
    pub const fn as_u8(self) -> u8 { self as u8 }

    /// Symbolic name as used by C firmware sharing this vocabulary.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "STATUS_OK",
            Self::Error => "STATUS_ERROR",
            Self::Timeout => "STATUS_TIMEOUT",
            Self::Busy => "STATUS_BUSY",
            Self::Idle => "STATUS_IDLE",
            Self::NotFound => "STATUS_NOT_FOUND",
            Self::Unsupported => "STATUS_UNSUPPORTED",
            Self::Initialized => "STATUS_INITIALIZED",
            Self::NotInitialized => "STATUS_NOT_INITIALIZED",
            Self::InProgress => "STATUS_IN_PROGRESS",
            Self::Completed => "STATUS_COMPLETED",
            Self::MemAligned => "STATUS_MEM_ALIGNED",
            Self::MemUnaligned => "STATUS_MEM_UNALIGNED",
            Self::MemFull => "STATUS_MEM_FULL",
            Self::MemEmpty => "STATUS_MEM_EMPTY",
            Self::Overflow => "STATUS_OVERFLOW",
            Self::Underflow => "STATUS_UNDERFLOW",
            Self::AccessGranted => "STATUS_ACCESS_GRANTED",
            Self::AccessDenied => "STATUS_ACCESS_DENIED",
            Self::Locked => "STATUS_LOCKED",
            Self::Unlocked => "STATUS_UNLOCKED",
            Self::Active => "STATUS_ACTIVE",
            Self::Inactive => "STATUS_INACTIVE",
            Self::Stopped => "STATUS_STOPPED",
            Self::Running => "STATUS_RUNNING",
            Self::Sleeping => "STATUS_SLEEPING",
            Self::Standby => "STATUS_STANDBY",
            Self::NotReady => "STATUS_NOT_READY",
            Self::Warning => "STATUS_WARNING",
            Self::SelfTestPass => "STATUS_SELF_TEST_PASS",
            Self::SelfTestFail => "STATUS_SELF_TEST_FAIL",
            Self::Debug1 => "STATUS_DEBUG_1",
            Self::Debug2 => "STATUS_DEBUG_2",
            Self::Debug3 => "STATUS_DEBUG_3",
            Self::NotImplemented => "STATUS_NOT_IMPLEMENTED",
            Self::Unknown => "STATUS_UNKNOWN",
        }
    }

    /// Category this status belongs to.
    pub const fn category(self) -> StatusCategory {
        match self {
            Self::Ok
            | Self::Error
            | Self::Timeout
            | Self::Busy
            | Self::Idle
            | Self::NotFound
            | Self::Unsupported
            | Self::Initialized
            | Self::NotInitialized
            | Self::InProgress
            | Self::Completed => StatusCategory::General,
            Self::MemAligned
            | Self::MemUnaligned
            | Self::MemFull
            | Self::MemEmpty
            | Self::Overflow
            | Self::Underflow => StatusCategory::Memory,
            Self::AccessGranted | Self::AccessDenied | Self::Locked | Self::Unlocked => StatusCategory::Access,
            Self::Active
            | Self::Inactive
            | Self::Stopped
            | Self::Running
            | Self::Sleeping
            | Self::Standby
            | Self::NotReady => StatusCategory::Activity,
            Self::Warning | Self::SelfTestPass | Self::SelfTestFail | Self::Debug1 | Self::Debug2 | Self::Debug3 => {
                StatusCategory::Debug
            }
            Self::NotImplemented | Self::Unknown => StatusCategory::Reserved,
        }
    }

    /// Log level used when this status is recorded.
    pub const fn level(self) -> LogLevel {
        match self {
            Self::Error
            | Self::Timeout
            | Self::AccessDenied
            | Self::Overflow
            | Self::Underflow
            | Self::SelfTestFail => LogLevel::Error,
            Self::Warning
            | Self::Unsupported
            | Self::NotImplemented
            | Self::Unknown
            | Self::MemUnaligned
            | Self::MemFull
            | Self::NotReady
            | Self::NotInitialized => LogLevel::Warn,
            Self::Debug1 | Self::Debug2 | Self::Debug3 => LogLevel::Debug,
            Self::Ok
            | Self::Busy
            | Self::Idle
            | Self::NotFound
            | Self::Initialized
            | Self::InProgress
            | Self::Completed
            | Self::MemAligned
            | Self::MemEmpty
            | Self::AccessGranted
            | Self::Locked
            | Self::Unlocked
            | Self::Active
            | Self::Inactive
            | Self::Stopped
            | Self::Running
            | Self::Sleeping
            | Self::Standby
            | Self::SelfTestPass => LogLevel::Info,
        }
    }
}

impl From<Status> for u8 {
    #[inline]
    fn from(status: Status) -> Self { status.as_u8() }
}

impl TryFrom<u8> for Status {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_u8() == value)
            .ok_or(Error::UnknownStatus(value))
    }
}

impl fmt::Display for Status {
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
