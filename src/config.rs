//! Compile-time configuration constants.
//!
//! All values are `const` and validated with `const` assertions, so a bad
//! configuration fails the build instead of misbehaving on the target.

// =============================================================================
// Status Log Configuration
// =============================================================================

/// Number of entries kept in a [`StatusLog`](crate::status_log::StatusLog).
/// Oldest entries are dropped once the log is full.
pub const STATUS_LOG_CAPACITY: usize = 16;

/// Maximum characters per status log message (including the reserved slot).
pub const STATUS_MSG_LEN: usize = 40;

const _: () = assert!(STATUS_LOG_CAPACITY > 0);
const _: () = assert!(STATUS_MSG_LEN > 1);

// =============================================================================
// Cycle Counter Configuration
// =============================================================================

/// CPU frequency assumed until [`counter::init`](crate::counter::init) is called.
/// 150 MHz is the stock RP2350 clock.
pub const DEFAULT_CPU_FREQ_HZ: u32 = 150_000_000;

/// Lowest accepted CPU frequency. Lower requests are clamped up.
pub const MIN_CPU_FREQ_HZ: u32 = 100_000_000;

/// Highest accepted CPU frequency. Higher requests are clamped down.
pub const MAX_CPU_FREQ_HZ: u32 = 500_000_000;

const _: () = assert!(MIN_CPU_FREQ_HZ <= DEFAULT_CPU_FREQ_HZ);
const _: () = assert!(DEFAULT_CPU_FREQ_HZ <= MAX_CPU_FREQ_HZ);

// =============================================================================
// Unit Tests
// =============================================================================
