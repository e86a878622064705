//! Compile-time array length.

/// Number of elements in a fixed-size array.
#[inline]
pub const fn array_len<T, const N: usize>(_: &[T; N]) -> usize { N }

/// Number of elements in a fixed-size array expression.
///
/// Usable in `const` contexts:
/// ```
/// const TABLE: [u16; 4] = [1, 2, 3, 4];
/// const LEN: usize = basedefs::array_size!(TABLE);
/// assert_eq!(LEN, 4);
/// ```
#[macro_export]
macro_rules! array_size {
    ($arr:expr) => {
        $crate::array::array_len(&$arr)
    };
}
