//! Wrap-aware timeout checks on free-running counters.
//!
//! Tick sources on microcontrollers (cycle counters, millisecond ticks,
//! hardware timers) are unsigned counters that wrap to zero. Elapsed time is
//! `current - start` in the counter's own modular arithmetic, which stays
//! correct across a wrap as long as less than one full counter period has
//! passed.
//!
//! # Example
//!
//! ```
//! use basedefs::timeout::{elapsed, is_timed_out};
//!
//! // u32 tick wrapped from 0xFFFF_FFFF to 1: two ticks elapsed
//! assert_eq!(elapsed(u32::MAX, 1u32), 2);
//! assert!(is_timed_out(u32::MAX, 1u32, 2));
//! assert!(!is_timed_out(u32::MAX, 1u32, 3));
//! ```

use crate::status::Status;

/// Unsigned counter with modular (wrapping) subtraction.
pub trait WrappingCounter: Copy + PartialOrd {
    /// Zero ticks.
    const ZERO: Self;

    /// `current - start` modulo 2^W.
    fn wrapping_elapsed(
        start: Self,
        current: Self,
    ) -> Self;

    /// `a - b`, stopping at zero.
    fn saturating_diff(
        a: Self,
        b: Self,
    ) -> Self;

    /// `a + b` modulo 2^W.
    fn wrapping_add_ticks(
        a: Self,
        b: Self,
    ) -> Self;
}

macro_rules! impl_wrapping_counter {
    ($($t:ty),* $(,)?) => {
        $(
            impl WrappingCounter for $t {
                const ZERO: Self = 0;

                #[inline]
                fn wrapping_elapsed(
                    start: Self,
                    current: Self,
                ) -> Self {
                    current.wrapping_sub(start)
                }

                #[inline]
                fn saturating_diff(
                    a: Self,
                    b: Self,
                ) -> Self {
                    a.saturating_sub(b)
                }

                #[inline]
                fn wrapping_add_ticks(
                    a: Self,
                    b: Self,
                ) -> Self {
                    a.wrapping_add(b)
                }
            }
        )*
    };
}

impl_wrapping_counter!(u8, u16, u32, u64, u128, usize);

/// Ticks elapsed from `start` to `current`, correct across one wrap.
#[inline]
pub fn elapsed<C: WrappingCounter>(
    start: C,
    current: C,
) -> C {
    C::wrapping_elapsed(start, current)
}

/// True once at least `timeout` ticks have elapsed since `start`.
///
/// A zero `timeout` is always reached.
#[inline]
pub fn is_timed_out<C: WrappingCounter>(
    start: C,
    current: C,
    timeout: C,
) -> bool {
    elapsed(start, current) >= timeout
}

// =============================================================================
// Timeout
// =============================================================================

/// A running timeout: a start tick and a duration on the same counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timeout<C> {
    start: C,
    duration: C,
}

impl<C: WrappingCounter> Timeout<C> {
    /// Start a timeout of `duration` ticks at `start`.
    #[inline]
    pub const fn new(
        start: C,
        duration: C,
    ) -> Self {
        Self { start, duration }
    }

    /// Tick the timeout was started at.
    #[inline]
    pub const fn start(&self) -> C { self.start }

    /// Configured duration in ticks.
    #[inline]
    pub const fn duration(&self) -> C { self.duration }

    /// Tick at which the timeout expires (may have wrapped).
    #[inline]
    pub fn deadline(&self) -> C { C::wrapping_add_ticks(self.start, self.duration) }

    /// Ticks elapsed since start.
    #[inline]
    pub fn elapsed(
        &self,
        now: C,
    ) -> C {
        elapsed(self.start, now)
    }

    /// Ticks left before expiry, zero once expired.
    #[inline]
    pub fn remaining(
        &self,
        now: C,
    ) -> C {
        C::saturating_diff(self.duration, self.elapsed(now))
    }

    /// True once the duration has elapsed.
    #[inline]
    pub fn is_expired(
        &self,
        now: C,
    ) -> bool {
        is_timed_out(self.start, now, self.duration)
    }

    /// Restart from `now` with the same duration.
    #[inline]
    pub fn restart(
        &mut self,
        now: C,
    ) {
        self.start = now;
    }

    /// [`Status::Timeout`] once expired, [`Status::InProgress`] before.
    #[inline]
    pub fn poll(
        &self,
        now: C,
    ) -> Status {
        if self.is_expired(now) { Status::Timeout } else { Status::InProgress }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tick_zero_timeout_expires() {
        assert!(is_timed_out(0u32, 0, 0));
        assert!(is_timed_out(12_345u32, 12_345, 0));
        assert!(is_timed_out(u8::MAX, u8::MAX, 0));
    }

    #[test]
    fn test_one_tick_short_of_timeout() {
        let current: u32 = 1_000;
        let start = current.wrapping_sub(1);
        assert!(!is_timed_out(start, current, 2));

        // Also across the zero boundary
        let current: u16 = 0;
        let start = current.wrapping_sub(1);
        assert_eq!(elapsed(start, current), 1);
        assert!(!is_timed_out(start, current, 2));
    }

    #[test]
    fn test_elapsed_across_wrap() {
        assert_eq!(elapsed(u8::MAX, 1u8), 2);
        assert_eq!(elapsed(u16::MAX, 1u16), 2);
        assert_eq!(elapsed(u32::MAX, 1u32), 2);
        assert_eq!(elapsed(u64::MAX, 1u64), 2);
        assert_eq!(elapsed(usize::MAX, 1usize), 2);
        assert_eq!(elapsed(u32::MAX - 100, 100), 201);
    }

    #[test]
    fn test_timed_out_across_wrap() {
        assert!(is_timed_out(u32::MAX, 1u32, 2));
        assert!(!is_timed_out(u32::MAX, 1u32, 3));
    }

    #[test]
    fn test_elapsed_normal() {
        assert_eq!(elapsed(100u32, 200), 100);
        assert_eq!(elapsed(0u32, 1000), 1000);
        assert!(is_timed_out(100u32, 200, 100));
        assert!(!is_timed_out(100u32, 199, 100));
    }

    #[test]
    fn test_timeout_lifecycle() {
        let mut t = Timeout::new(u32::MAX - 4, 10);
        assert_eq!(t.deadline(), 5);
        assert_eq!(t.elapsed(u32::MAX), 4);
        assert_eq!(t.remaining(u32::MAX), 6);
        assert!(!t.is_expired(4));
        assert_eq!(t.poll(4), Status::InProgress);
        assert!(t.is_expired(5));
        assert_eq!(t.poll(5), Status::Timeout);
        assert_eq!(t.remaining(50), 0);

        t.restart(50);
        assert_eq!(t.start(), 50);
        assert_eq!(t.duration(), 10);
        assert!(!t.is_expired(59));
        assert!(t.is_expired(60));
    }

    #[test]
    fn test_zero_duration_timeout() {
        let t = Timeout::new(7u16, 0);
        assert!(t.is_expired(7));
        assert_eq!(t.remaining(7), 0);
    }
}
