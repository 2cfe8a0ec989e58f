//! The closed set of code-unit widths the parser understands.
//!
//! Input text arrives as a slice of 8-, 16-, or 32-bit units. Each width
//! gets its own batch classifier (which of the next four characters are
//! ASCII digits?) and batch converter (the combined base-10 value of a
//! confirmed digit prefix). Both are answered from one vector register on
//! x86 with SSE2; every other target uses the portable scalar backend,
//! which the SIMD backend is also cross-checked against in tests.
//!
//! The trait is sealed: the three widths are a compile-time-selected set,
//! not an extension point.

mod fallback;

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
mod sse2;

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
use sse2 as active;

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2")))]
use fallback as active;

/// Number of logical characters classified and converted per batch.
pub(crate) const BATCH: usize = 4;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A fixed-width code unit the parser can read: `u8`, `u16`, or `u32`.
///
/// This trait is sealed and cannot be implemented outside the crate.
pub trait CodeUnit: sealed::Sealed + Copy + 'static {
    /// The digit value of this unit, or `None` if it is not `'0'..='9'`.
    fn digit(self) -> Option<u32>;

    /// Bit `i` of the result is set iff `block[i]` is an ASCII digit.
    ///
    /// Only the low four bits are ever set. The caller tests leading runs
    /// with `mask.trailing_ones()`.
    fn digit_mask(block: &[Self; BATCH]) -> u32;

    /// Combined base-10 value of the first `count` units of `block`.
    ///
    /// `count` must be in `1..=4` and the first `count` units must be
    /// digits, as previously confirmed by [`CodeUnit::digit_mask`]; the
    /// converter does not revalidate them. The result is in `0..=9999`.
    fn convert(block: &[Self; BATCH], count: u32) -> u32;

    /// Whether this unit is the given ASCII character.
    fn is_char(self, ascii: u8) -> bool;
}

impl CodeUnit for u8 {
    #[inline]
    fn digit(self) -> Option<u32> {
        let d = self.wrapping_sub(b'0');
        (d <= 9).then_some(u32::from(d))
    }

    #[inline]
    fn digit_mask(block: &[u8; BATCH]) -> u32 {
        active::digit_mask_u8(block)
    }

    #[inline]
    fn convert(block: &[u8; BATCH], count: u32) -> u32 {
        active::convert_u8(block, count)
    }

    #[inline]
    fn is_char(self, ascii: u8) -> bool {
        self == ascii
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn digit(self) -> Option<u32> {
        let d = self.wrapping_sub(u16::from(b'0'));
        (d <= 9).then_some(u32::from(d))
    }

    #[inline]
    fn digit_mask(block: &[u16; BATCH]) -> u32 {
        active::digit_mask_u16(block)
    }

    #[inline]
    fn convert(block: &[u16; BATCH], count: u32) -> u32 {
        active::convert_u16(block, count)
    }

    #[inline]
    fn is_char(self, ascii: u8) -> bool {
        self == u16::from(ascii)
    }
}

impl CodeUnit for u32 {
    #[inline]
    fn digit(self) -> Option<u32> {
        let d = self.wrapping_sub(u32::from(b'0'));
        (d <= 9).then_some(d)
    }

    #[inline]
    fn digit_mask(block: &[u32; BATCH]) -> u32 {
        active::digit_mask_u32(block)
    }

    #[inline]
    fn convert(block: &[u32; BATCH], count: u32) -> u32 {
        active::convert_u32(block, count)
    }

    #[inline]
    fn is_char(self, ascii: u8) -> bool {
        self == u32::from(ascii)
    }
}
