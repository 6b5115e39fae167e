//! Two's-complement sample decoding.

/// Decodes one raw frame word into a signed sample.
///
/// The word holds a 24-bit two's-complement sample MSB-aligned in the
/// upper 24 bits of the container; the low byte carries status/tag bits
/// and is discarded. The arithmetic shift widens the sample to `i32`
/// preserving sign, covering the full [-8388608, 8388607] range.
pub const fn decode(raw: u32) -> i32 {
    (raw as i32) >> 8
}
