//! Strongly typed parameter enumerations for the ADS131M08 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use ads131m08::params::{Channel, Gain, GainRegister};
//!
//! let gain = Gain::X16;
//! let target = GainRegister::Gain2;
//! let channel = Channel::Ch4;
//! let _ = (gain, target, channel);
//! ```

use modular_bitfield::prelude::Specifier;

/// PGA gain selections encoded as a 3-bit code `log2(factor)`.
///
/// | Gain | Full-scale range |
/// |------|------------------|
/// | 1    | ±1.2 V           |
/// | 2    | ±600 mV          |
/// | 4    | ±300 mV          |
/// | 8    | ±150 mV          |
/// | 16   | ±75 mV           |
/// | 32   | ±37.5 mV         |
/// | 64   | ±18.75 mV        |
/// | 128  | ±9.375 mV        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum Gain {
    /// Gain of 1 (device reset default).
    X1 = 0b000,
    /// Gain of 2.
    X2 = 0b001,
    /// Gain of 4.
    X4 = 0b010,
    /// Gain of 8.
    X8 = 0b011,
    /// Gain of 16.
    X16 = 0b100,
    /// Gain of 32.
    X32 = 0b101,
    /// Gain of 64.
    X64 = 0b110,
    /// Gain of 128.
    X128 = 0b111,
}

impl Gain {
    /// Returns the 3-bit register code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the amplification factor.
    pub const fn factor(self) -> u16 {
        1 << (self as u16)
    }

    /// Looks up the gain matching an amplification factor.
    ///
    /// Only the eight powers of two from 1 to 128 are representable; any
    /// other factor yields `None`.
    pub const fn from_factor(factor: u16) -> Option<Self> {
        match factor {
            1 => Some(Self::X1),
            2 => Some(Self::X2),
            4 => Some(Self::X4),
            8 => Some(Self::X8),
            16 => Some(Self::X16),
            32 => Some(Self::X32),
            64 => Some(Self::X64),
            128 => Some(Self::X128),
            _ => None,
        }
    }
}

/// Selects one of the two PGA gain registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GainRegister {
    /// `GAIN1` (address `0x04`), covering channels 0 through 3.
    Gain1,
    /// `GAIN2` (address `0x05`), covering channels 4 through 7.
    Gain2,
}

impl GainRegister {
    /// Register address targeted by this selection.
    pub const fn address(self) -> u8 {
        match self {
            Self::Gain1 => crate::registers::REG_GAIN1,
            Self::Gain2 => crate::registers::REG_GAIN2,
        }
    }

    /// Maps the datasheet register numbering (1 or 2) to a selection.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Gain1),
            2 => Some(Self::Gain2),
            _ => None,
        }
    }
}

/// One of the eight simultaneously sampled input channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Channel 0.
    Ch0,
    /// Channel 1.
    Ch1,
    /// Channel 2.
    Ch2,
    /// Channel 3.
    Ch3,
    /// Channel 4.
    Ch4,
    /// Channel 5.
    Ch5,
    /// Channel 6.
    Ch6,
    /// Channel 7.
    Ch7,
}

impl Channel {
    /// All channels in ascending order.
    pub const ALL: [Self; 8] = [
        Self::Ch0,
        Self::Ch1,
        Self::Ch2,
        Self::Ch3,
        Self::Ch4,
        Self::Ch5,
        Self::Ch6,
        Self::Ch7,
    ];

    /// Zero-based channel index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a raw channel number into a typed channel.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Ch0),
            1 => Some(Self::Ch1),
            2 => Some(Self::Ch2),
            3 => Some(Self::Ch3),
            4 => Some(Self::Ch4),
            5 => Some(Self::Ch5),
            6 => Some(Self::Ch6),
            7 => Some(Self::Ch7),
            _ => None,
        }
    }
}

/// Modulator oversampling ratio selections (`CLOCK.OSR`, bits 4:2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 3]
pub enum OversamplingRatio {
    /// OSR of 128.
    Osr128 = 0b000,
    /// OSR of 256.
    Osr256 = 0b001,
    /// OSR of 512.
    Osr512 = 0b010,
    /// OSR of 1024 (device reset default).
    Osr1024 = 0b011,
    /// OSR of 2048.
    Osr2048 = 0b100,
    /// OSR of 4096.
    Osr4096 = 0b101,
    /// OSR of 8192.
    Osr8192 = 0b110,
    /// OSR of 16384.
    Osr16384 = 0b111,
}

impl OversamplingRatio {
    /// Returns the oversampling ratio as an integer value.
    pub const fn ratio(self) -> u16 {
        128 << (self as u16)
    }
}

/// Power mode selections (`CLOCK.PWR`, bits 1:0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum PowerMode {
    /// Very-low-power mode.
    VeryLowPower = 0b00,
    /// Low-power mode.
    LowPower = 0b01,
    /// High-resolution mode (device reset default).
    HighResolution = 0b10,
}

/// Data word length selections (`MODE.WLENGTH`, bits 9:8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum WordLength {
    /// 16-bit words.
    Bits16 = 0b00,
    /// 24-bit words (device reset default; the framing this driver assumes).
    Bits24 = 0b01,
    /// 32-bit words, zero padded.
    Bits32ZeroPadded = 0b10,
    /// 32-bit words, sign extended.
    Bits32SignExtended = 0b11,
}

/// CRC polynomial selection (`MODE.CRC_TYPE`, bit 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum CrcType {
    /// 16-bit CCITT polynomial.
    Ccitt = 0,
    /// 16-bit ANSI polynomial.
    Ansi = 1,
}

/// Channel input multiplexer selections (`CHx_CFG.MUX`, bits 1:0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum ChannelMux {
    /// AINxP and AINxN analog input pins connected.
    AnalogInput = 0b00,
    /// Inputs shorted together internally.
    InputShorted = 0b01,
    /// Positive DC test signal.
    PositiveTest = 0b10,
    /// Negative DC test signal.
    NegativeTest = 0b11,
}
