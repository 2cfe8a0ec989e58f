//! Portable scalar backend.
//!
//! Used on targets without SSE2, and everywhere as the oracle the SIMD
//! backend is cross-checked against.

use super::{BATCH, CodeUnit};

#[inline]
pub(super) fn digit_mask<C: CodeUnit>(block: &[C; BATCH]) -> u32 {
    let mut mask = 0;
    for (i, &unit) in block.iter().enumerate() {
        if unit.digit().is_some() {
            mask |= 1 << i;
        }
    }
    mask
}

#[inline]
pub(super) fn convert<C: CodeUnit>(block: &[C; BATCH], count: u32) -> u32 {
    debug_assert!((1..=4).contains(&count));
    let mut value = 0;
    for &unit in &block[..count as usize] {
        // The classifier confirmed digit-ness for the whole prefix.
        let Some(d) = unit.digit() else { break };
        value = value * 10 + d;
    }
    value
}

#[allow(dead_code)] // unused when the sse2 backend is active
pub(super) fn digit_mask_u8(block: &[u8; BATCH]) -> u32 {
    digit_mask(block)
}

#[allow(dead_code)] // unused when the sse2 backend is active
pub(super) fn digit_mask_u16(block: &[u16; BATCH]) -> u32 {
    digit_mask(block)
}

#[allow(dead_code)] // unused when the sse2 backend is active
pub(super) fn digit_mask_u32(block: &[u32; BATCH]) -> u32 {
    digit_mask(block)
}

#[allow(dead_code)] // unused when the sse2 backend is active
pub(super) fn convert_u8(block: &[u8; BATCH], count: u32) -> u32 {
    convert(block, count)
}

#[allow(dead_code)] // unused when the sse2 backend is active
pub(super) fn convert_u16(block: &[u16; BATCH], count: u32) -> u32 {
    convert(block, count)
}

#[allow(dead_code)] // unused when the sse2 backend is active
pub(super) fn convert_u32(block: &[u32; BATCH], count: u32) -> u32 {
    convert(block, count)
}
