//! Communication frame model.
//!
//! Every exchange with the device is one fixed-shape frame of ten 24-bit
//! words: the command echo, one raw sample per channel, and a trailing
//! CRC word. The frame length never varies with how many channels the
//! caller is interested in.

use crate::params::Channel;
use crate::sample;

/// Number of 24-bit words in one communication frame.
pub const FRAME_WORDS: usize = 10;

/// Number of simultaneously sampled channels.
pub const CHANNEL_COUNT: usize = 8;

/// One captured communication frame.
///
/// Word 0 is the command echo, words 1..=8 hold the raw samples for
/// channels 0..=7, word 9 is the CRC computed by the device. Every word
/// is stored MSB-aligned in the upper 24 bits of its `u32` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    words: [u32; FRAME_WORDS],
}

impl Frame {
    /// Wraps the raw words captured during one chip-select session.
    pub const fn new(words: [u32; FRAME_WORDS]) -> Self {
        Self { words }
    }

    /// The 16-bit response in the command-echo slot.
    ///
    /// For register reads this carries the register contents; for write
    /// acknowledgments it carries the echoed opcode and address.
    pub const fn response_word(&self) -> u16 {
        (self.words[0] >> 16) as u16
    }

    /// Raw MSB-aligned sample word for one channel, status byte included.
    pub const fn channel_raw(&self, channel: Channel) -> u32 {
        self.words[channel.index() + 1]
    }

    /// Decoded signed sample for one channel.
    pub const fn channel_sample(&self, channel: Channel) -> i32 {
        sample::decode(self.channel_raw(channel))
    }

    /// The trailing CRC word as sent by the device.
    ///
    /// Captured for completeness; this driver never validates it.
    pub const fn crc_word(&self) -> u32 {
        self.words[FRAME_WORDS - 1]
    }
}
