//! Hardware tick sources: the Cortex-M DWT cycle counter and the millisecond tick.
//!
//! # Overflow Handling
//!
//! CYCCNT is a 32-bit counter that wraps at different intervals:
//! - 150 MHz: every ~28.6 seconds (2^32 / 150M)
//! - 250 MHz: every ~17.2 seconds
//! - 500 MHz: every ~8.6 seconds
//!
//! Elapsed values go through [`timeout::elapsed`], so a single wrap between
//! two reads is handled. Timeouts longer than one wrap period must use the
//! millisecond tick instead.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DEFAULT_CPU_FREQ_HZ, MAX_CPU_FREQ_HZ, MIN_CPU_FREQ_HZ};
use crate::timeout::{self, Timeout};

/// CPU frequency in Hz, used for cycle <-> microsecond conversion.
static CPU_FREQ_HZ: AtomicU32 = AtomicU32::new(DEFAULT_CPU_FREQ_HZ);

/// Initialize the DWT cycle counter and record the CPU frequency.
///
/// `freq_hz` is clamped to `MIN_CPU_FREQ_HZ..=MAX_CPU_FREQ_HZ`.
/// Safe to call multiple times (idempotent).
pub fn init(freq_hz: u32) {
    let clamped_freq = freq_hz.clamp(MIN_CPU_FREQ_HZ, MAX_CPU_FREQ_HZ);
    CPU_FREQ_HZ.store(clamped_freq, Ordering::Relaxed);

    // DEMCR.TRCENA (bit 24) must be set first, then DWT.CTRL.CYCCNTENA (bit 0)
    #[cfg(target_arch = "arm")]
    unsafe {
        use core::ptr::{read_volatile, write_volatile};

        use crate::bits::Bits;

        const DEMCR: *mut u32 = 0xE000_EDFC as *mut u32;
        write_volatile(DEMCR, read_volatile(DEMCR).with_bit_set(24));

        const DWT_CTRL: *mut u32 = 0xE000_1000 as *mut u32;
        write_volatile(DWT_CTRL, read_volatile(DWT_CTRL).with_bit_set(0));

        defmt::debug!("DWT cycle counter enabled at {} Hz", clamped_freq);
    }
}

/// Read the current cycle count (32-bit, wraps).
#[inline]
pub fn read() -> u32 {
    #[cfg(target_arch = "arm")]
    unsafe {
        // DWT CYCCNT register
        const DWT_CYCCNT: *const u32 = 0xE000_1004 as *const u32;
        core::ptr::read_volatile(DWT_CYCCNT)
    }
    #[cfg(not(target_arch = "arm"))]
    {
        0 // No cycle counter on host
    }
}

/// Configured CPU frequency in Hz.
#[inline]
pub fn freq_hz() -> u32 { CPU_FREQ_HZ.load(Ordering::Relaxed) }

/// Cycles elapsed between two reads, correct across one wrap.
#[inline]
pub fn elapsed(
    start: u32,
    end: u32,
) -> u32 {
    timeout::elapsed(start, end)
}

/// Convert microseconds to cycles at the configured frequency.
///
/// `None` if the cycle count does not fit in 32 bits.
pub fn checked_us_to_cycles(us: u32) -> Option<u32> {
    let cycles = (u64::from(freq_hz()) * u64::from(us)) / 1_000_000;
    u32::try_from(cycles).ok()
}

/// Convert microseconds to cycles at the configured frequency.
///
/// Saturates at `u32::MAX`.
pub fn us_to_cycles(us: u32) -> u32 { checked_us_to_cycles(us).unwrap_or(u32::MAX) }

/// Convert cycles to microseconds at the configured frequency.
pub fn cycles_to_us(cycles: u32) -> u32 {
    // freq >= MIN_CPU_FREQ_HZ, so the result fits in u32
    ((u64::from(cycles) * 1_000_000) / u64::from(freq_hz())) as u32
}

/// Timeout of `us` microseconds on the cycle counter, started at `start`.
///
/// Returns `None` when `us` is longer than one CYCCNT wrap period at the
/// configured frequency (~28.6 s at 150 MHz); use the millisecond tick for
/// those.
#[inline]
pub fn cycle_timeout(
    start: u32,
    us: u32,
) -> Option<Timeout<u32>> {
    checked_us_to_cycles(us).map(|cycles| Timeout::new(start, cycles))
}

/// Milliseconds since boot, truncated to a wrapping 32-bit tick.
#[cfg(target_arch = "arm")]
#[inline]
pub fn now_ms() -> u32 { embassy_time::Instant::now().as_millis() as u32 }

// =============================================================================
// Unit Tests (run on host with: cargo test --lib)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Tests share CPU_FREQ_HZ, so everything touching it lives in one test.
    #[test]
    fn test_frequency_and_conversions() {
        init(1);
        assert_eq!(freq_hz(), MIN_CPU_FREQ_HZ);
        init(u32::MAX);
        assert_eq!(freq_hz(), MAX_CPU_FREQ_HZ);

        init(250_000_000);
        assert_eq!(freq_hz(), 250_000_000);
        // 1ms at 250 MHz = 250,000 cycles
        assert_eq!(us_to_cycles(1_000), 250_000);
        assert_eq!(cycles_to_us(250_000), 1_000);
        assert_eq!(us_to_cycles(u32::MAX), u32::MAX);

        let t = cycle_timeout(u32::MAX - 100_000, 1_000);
        assert_eq!(t.map(|t| t.duration()), Some(250_000));
        assert_eq!(t.map(|t| t.is_expired(100_000)), Some(false));
        assert_eq!(t.map(|t| t.is_expired(150_000)), Some(true));

        // Longer than one wrap period is refused, not capped
        init(DEFAULT_CPU_FREQ_HZ);
        assert_eq!(checked_us_to_cycles(30_000_000), None);
        assert!(cycle_timeout(0, 30_000_000).is_none());
        assert_eq!(us_to_cycles(30_000_000), u32::MAX);
        assert_eq!(cycle_timeout(0, 28_000_000).map(|t| t.duration()), Some(4_200_000_000));
    }

    #[test]
    fn test_elapsed_normal() {
        assert_eq!(elapsed(100, 200), 100);
        assert_eq!(elapsed(0, 1000), 1000);
    }

    #[test]
    fn test_elapsed_wrap() {
        assert_eq!(elapsed(u32::MAX - 100, 100), 201);
    }

    #[test]
    fn test_read_on_host() {
        assert_eq!(read(), 0);
    }
}
