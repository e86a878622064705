//! Status log with levels and timestamps.
//!
//! Keeps the most recent [`STATUS_LOG_CAPACITY`] status reports in a ring
//! buffer so they can be shown on a debug screen or dumped over a link.
//! Each entry carries the [`Status`], its log level, a short message and a
//! millisecond timestamp.
//!
//! # Log Levels
//!
//! - `Trace`: verbose debugging
//! - `Debug`: debugging information
//! - `Info`: normal operation
//! - `Warn`: warnings
//! - `Error`: errors
//!
//! # Usage
//!
//! ```
//! use basedefs::log_status;
//! use basedefs::status::Status;
//! use basedefs::status_log::StatusLog;
//!
//! let mut log = StatusLog::new();
//! log_status!(log, Status::Timeout, 1_200, "sensor {} silent", 3);
//! assert_eq!(log.latest().map(|e| e.status), Some(Status::Timeout));
//! ```
//!
//! On ARM targets [`log_status!`](crate::log_status) also forwards the entry
//! to `defmt` at the matching level.

use core::fmt;

use heapless::{Deque, String};

use crate::config::{STATUS_LOG_CAPACITY, STATUS_MSG_LEN};
use crate::status::Status;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging
    Trace = 0,
    /// Debug information
    Debug = 1,
    /// Normal operation
    #[default]
    Info = 2,
    /// Warnings
    Warn = 3,
    /// Errors
    Error = 4,
}

impl LogLevel {
    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single status report.
#[derive(Clone, Debug)]
pub struct StatusEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Reported status.
    pub status: Status,
    /// Message, cut to at most `STATUS_MSG_LEN - 1` characters and
    /// `STATUS_MSG_LEN` bytes. Always a prefix of the original text.
    pub message: String<STATUS_MSG_LEN>,
    /// True if the message was cut short.
    pub truncated: bool,
    /// Timestamp in milliseconds (wrapping tick).
    pub timestamp_ms: u32,
}

impl StatusEntry {
    /// Create an entry at the status' default level.
    pub fn new(
        status: Status,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        Self::with_level(status.level(), status, message, timestamp_ms)
    }

    /// Create an entry with an explicit level.
    pub fn with_level(
        level: LogLevel,
        status: Status,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        Self::from_args(level, status, format_args!("{message}"), timestamp_ms)
    }

    /// Create an entry from pre-formatted arguments (used by [`log_status!`](crate::log_status)).
    pub fn from_args(
        level: LogLevel,
        status: Status,
        args: fmt::Arguments<'_>,
        timestamp_ms: u32,
    ) -> Self {
        let mut writer = MessageWriter {
            msg: String::new(),
            chars: 0,
        };
        // Err means the writer ran out of room and stopped; the prefix is kept.
        let truncated = fmt::write(&mut writer, args).is_err();
        Self {
            level,
            status,
            message: writer.msg,
            truncated,
            timestamp_ms,
        }
    }
}

/// Character-wise writer that stops at the first character that does not fit.
struct MessageWriter {
    msg: String<STATUS_MSG_LEN>,
    chars: usize,
}

impl fmt::Write for MessageWriter {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.chars >= STATUS_MSG_LEN - 1 || self.msg.push(c).is_err() {
                return Err(fmt::Error);
            }
            self.chars += 1;
        }
        Ok(())
    }
}

/// Ring buffer of status entries.
///
/// Stores the last `STATUS_LOG_CAPACITY` entries; the oldest is dropped when
/// a new one arrives on a full log.
pub struct StatusLog {
    buffer: Deque<StatusEntry, STATUS_LOG_CAPACITY>,
}

impl StatusLog {
    /// Create a new empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push an entry. If the log is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        entry: StatusEntry,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(entry).ok();
    }

    /// Record `status` with a message at the status' default level.
    #[inline]
    pub fn record(
        &mut self,
        status: Status,
        message: &str,
        timestamp_ms: u32,
    ) {
        self.push(StatusEntry::new(status, message, timestamp_ms));
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> { self.buffer.iter() }

    /// Most recent entry.
    #[inline]
    pub fn latest(&self) -> Option<&StatusEntry> { self.buffer.back() }

    /// Number of entries at or above `level`.
    pub fn count_at_least(
        &self,
        level: LogLevel,
    ) -> usize {
        self.buffer.iter().filter(|e| e.level >= level).count()
    }

    /// Get the number of entries in the log.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Drop all entries.
    #[inline]
    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl Default for StatusLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Global Log (ARM only)
// =============================================================================

#[cfg(target_arch = "arm")]
mod global {
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::mutex::Mutex;

    use super::StatusLog;
    use crate::counter::now_ms;
    use crate::status::Status;

    /// Global status log protected by a mutex.
    pub static STATUS_LOG: Mutex<CriticalSectionRawMutex, StatusLog> = Mutex::new(StatusLog::new());

    /// Record a status in the global log, timestamped with the millisecond tick.
    ///
    /// This is non-blocking - if the mutex is held, the entry is dropped.
    pub fn report(
        status: Status,
        message: &str,
    ) {
        if let Ok(mut log) = STATUS_LOG.try_lock() {
            log.record(status, message, now_ms());
        }
    }
}

#[cfg(target_arch = "arm")]
pub use global::{STATUS_LOG, report};

/// Emit a formatted status entry to `defmt` at the entry's level.
#[doc(hidden)]
#[cfg(target_arch = "arm")]
pub fn __emit(entry: &StatusEntry) {
    let name = entry.status.name();
    let msg = entry.message.as_str();
    match entry.level {
        LogLevel::Trace => defmt::trace!("{}: {}", name, msg),
        LogLevel::Debug => defmt::debug!("{}: {}", name, msg),
        LogLevel::Info => defmt::info!("{}: {}", name, msg),
        LogLevel::Warn => defmt::warn!("{}: {}", name, msg),
        LogLevel::Error => defmt::error!("{}: {}", name, msg),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "arm"))]
#[inline]
pub fn __emit(_entry: &StatusEntry) {}

/// Record a status with a formatted message in a [`StatusLog`].
///
/// `log_status!(log, status, timestamp_ms, "fmt", args...)`
///
/// Messages longer than the entry capacity are truncated (see
/// [`StatusEntry::truncated`]). On ARM the entry is also sent to `defmt`.
#[macro_export]
macro_rules! log_status {
    ($log:expr, $status:expr, $ts:expr, $($arg:tt)*) => {{
        let status: $crate::status::Status = $status;
        let entry = $crate::status_log::StatusEntry::from_args(status.level(), status, format_args!($($arg)*), $ts);
        $crate::status_log::__emit(&entry);
        $log.push(entry);
    }};
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Warn.prefix(), 'W');
    }

    #[test]
    fn test_entry_truncates_message() {
        let long = "x".repeat(STATUS_MSG_LEN * 2);
        let entry = StatusEntry::new(Status::Error, &long, 0);
        assert_eq!(entry.message.len(), STATUS_MSG_LEN - 1);
        assert!(entry.truncated);
        assert_eq!(entry.level, LogLevel::Error);

        let short = StatusEntry::new(Status::Ok, "fits", 0);
        assert_eq!(short.message.as_str(), "fits");
        assert!(!short.truncated);
    }

    #[test]
    fn test_entry_multibyte_keeps_prefix() {
        // 30 ASCII + three 3-byte chars = 39 bytes; the fourth would exceed 40
        let input = format!("{}€€€€b", "a".repeat(30));
        let entry = StatusEntry::new(Status::Warning, &input, 0);
        assert!(input.starts_with(entry.message.as_str()), "{}", entry.message);
        assert_eq!(entry.message.as_str(), format!("{}€€€", "a".repeat(30)));
        assert!(entry.truncated);
    }

    #[test]
    fn test_log_status_truncates_long_argument() {
        let mut log = StatusLog::new();
        let long = "x".repeat(60);
        crate::log_status!(log, Status::Error, 0, "sensor {}", long);
        let message = log.latest().map(|e| e.message.clone());
        assert_eq!(message.as_ref().map(|m| m.len()), Some(STATUS_MSG_LEN - 1));
        let expected = format!("sensor {long}");
        assert!(message.is_some_and(|m| expected.starts_with(m.as_str())));
        assert_eq!(log.latest().map(|e| e.truncated), Some(true));
    }

    #[test]
    fn test_push_keeps_order() {
        let mut log = StatusLog::new();
        assert!(log.is_empty());
        log.record(Status::Initialized, "boot", 10);
        log.record(Status::Running, "loop", 20);
        log.record(Status::Timeout, "sensor", 30);

        let stamps: Vec<u32> = log.iter().map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps, vec![10, 20, 30]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.latest().map(|e| e.status), Some(Status::Timeout));
    }

    #[test]
    fn test_full_log_drops_oldest() {
        let mut log = StatusLog::new();
        for i in 0..(STATUS_LOG_CAPACITY as u32 + 3) {
            log.record(Status::Ok, "tick", i);
        }
        assert_eq!(log.len(), STATUS_LOG_CAPACITY);
        assert_eq!(log.iter().next().map(|e| e.timestamp_ms), Some(3));
        assert_eq!(log.latest().map(|e| e.timestamp_ms), Some(STATUS_LOG_CAPACITY as u32 + 2));
    }

    #[test]
    fn test_count_at_least() {
        let mut log = StatusLog::default();
        log.record(Status::Debug1, "", 0);
        log.record(Status::Ok, "", 1);
        log.record(Status::Warning, "", 2);
        log.record(Status::Overflow, "", 3);
        assert_eq!(log.count_at_least(LogLevel::Trace), 4);
        assert_eq!(log.count_at_least(LogLevel::Warn), 2);
        assert_eq!(log.count_at_least(LogLevel::Error), 1);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_status_macro() {
        let mut log = StatusLog::new();
        crate::log_status!(log, Status::MemFull, 500, "pool {} at {}%", 2, 100);
        let entry = log.latest().cloned();
        assert!(entry.is_some());
        if let Some(entry) = entry {
            assert_eq!(entry.status, Status::MemFull);
            assert_eq!(entry.level, LogLevel::Warn);
            assert_eq!(entry.message.as_str(), "pool 2 at 100%");
            assert!(!entry.truncated);
            assert_eq!(entry.timestamp_ms, 500);
        }
    }

    #[test]
    fn test_explicit_level() {
        let entry = StatusEntry::with_level(LogLevel::Trace, Status::Error, "self-check", 9);
        assert_eq!(entry.level, LogLevel::Trace);
        assert_eq!(entry.status, Status::Error);
    }
}
