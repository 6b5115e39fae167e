//! Bus interface abstraction for the ADS131M08 driver.

pub mod spi;

/// Number of bytes clocked per 24-bit frame word.
pub const WORD_BYTES: usize = 3;

/// Abstraction over the low-level bus access required by the driver.
pub trait Ads131m08Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Exchanges a sequence of 24-bit words under one chip-select
    /// assertion.
    ///
    /// Each 16-bit word in `tx` is clocked out MSB-first padded with one
    /// zero byte; each received word lands in `rx` MSB-aligned in the
    /// upper 24 bits of its slot. `tx` and `rx` must have equal length,
    /// at most [`FRAME_WORDS`](crate::frame::FRAME_WORDS). Blocking with
    /// no timeout: an unresponsive bus blocks the caller indefinitely.
    fn transfer_words(
        &mut self,
        tx: &[u16],
        rx: &mut [u32],
    ) -> core::result::Result<(), Self::Error>;
}
