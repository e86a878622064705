//! Minimum, maximum and clamp for any `PartialOrd` value.
//!
//! Unlike [`Ord::clamp`] and [`f32::clamp`], these never panic. With
//! `lo > hi`, [`clamp`] returns `lo`.

/// Smaller of two values. Returns `b` when they compare equal or unordered.
#[inline]
pub fn min<T: PartialOrd>(
    a: T,
    b: T,
) -> T {
    if a < b { a } else { b }
}

/// Larger of two values. Returns `b` when they compare equal or unordered.
#[inline]
pub fn max<T: PartialOrd>(
    a: T,
    b: T,
) -> T {
    if a > b { a } else { b }
}

/// Restrict `val` to `[lo, hi]`.
#[inline]
pub fn clamp<T: PartialOrd>(
    val: T,
    lo: T,
    hi: T,
) -> T {
    max(lo, min(val, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_same_value() {
        for a in [-5i32, 0, 7, i32::MAX, i32::MIN] {
            assert_eq!(min(a, a), a);
            assert_eq!(max(a, a), a);
        }
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(3u8, 9), 3);
        assert_eq!(max(3u8, 9), 9);
        assert_eq!(min(-1.5f32, 2.0), -1.5);
        assert_eq!(max(-1.5f32, 2.0), 2.0);
    }

    #[test]
    fn test_clamp_in_range() {
        let (lo, hi) = (-10i32, 25i32);
        for v in -100..100 {
            let c = clamp(v, lo, hi);
            assert!(c >= lo && c <= hi, "clamp({v}) = {c}");
        }
        assert_eq!(clamp(5, lo, hi), 5);
        assert_eq!(clamp(-50, lo, hi), lo);
        assert_eq!(clamp(50, lo, hi), hi);
    }

    #[test]
    fn test_clamp_float() {
        assert_eq!(clamp(14.7f32, 12.0, 14.0), 14.0);
        assert_eq!(clamp(11.0f32, 12.0, 14.0), 12.0);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        // lo wins, no panic
        assert_eq!(clamp(5, 10, 0), 10);
    }
}
