//! Register map definitions for the ADS131M08 ADC.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{Channel, ChannelMux, CrcType, Gain, OversamplingRatio, PowerMode, WordLength};

/// Register address of `ID`.
pub const REG_ID: u8 = 0x00;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x01;
/// Register address of `MODE`.
pub const REG_MODE: u8 = 0x02;
/// Register address of `CLOCK`.
pub const REG_CLOCK: u8 = 0x03;
/// Register address of `GAIN1` (PGA gain for channels 0-3).
pub const REG_GAIN1: u8 = 0x04;
/// Register address of `GAIN2` (PGA gain for channels 4-7).
pub const REG_GAIN2: u8 = 0x05;
/// Register address of `CFG`.
pub const REG_CFG: u8 = 0x06;
/// Register address of `THRSHLD_MSB`.
pub const REG_THRSHLD_MSB: u8 = 0x07;
/// Register address of `THRSHLD_LSB`.
pub const REG_THRSHLD_LSB: u8 = 0x08;
/// Register address of `CH0_CFG`, the first per-channel settings block.
pub const REG_CH0_CFG: u8 = 0x09;
/// Register address of `CH0_OCAL_MSB`.
pub const REG_CH0_OCAL_MSB: u8 = 0x0A;
/// Register address of `CH0_OCAL_LSB`.
pub const REG_CH0_OCAL_LSB: u8 = 0x0B;
/// Register address of `CH0_GCAL_MSB`.
pub const REG_CH0_GCAL_MSB: u8 = 0x0C;
/// Register address of `CH0_GCAL_LSB`.
pub const REG_CH0_GCAL_LSB: u8 = 0x0D;
/// Register address of `REGMAP_CRC`.
pub const REG_REGMAP_CRC: u8 = 0x3E;
/// Register address of the reserved final map entry.
pub const REG_RESERVED: u8 = 0x3F;

/// Number of registers in each per-channel settings block.
const CHANNEL_BLOCK_STRIDE: u8 = 5;

/// Address of the `CHx_CFG` register for the given channel.
pub const fn channel_config_address(channel: Channel) -> u8 {
    REG_CH0_CFG + CHANNEL_BLOCK_STRIDE * channel.index() as u8
}

/// Addresses of the `CHx_OCAL_MSB`/`CHx_OCAL_LSB` offset calibration pair.
pub const fn channel_offset_cal_addresses(channel: Channel) -> (u8, u8) {
    let base = channel_config_address(channel);
    (base + 1, base + 2)
}

/// Addresses of the `CHx_GCAL_MSB`/`CHx_GCAL_LSB` gain calibration pair.
pub const fn channel_gain_cal_addresses(channel: Channel) -> (u8, u8) {
    let base = channel_config_address(channel);
    (base + 3, base + 4)
}

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `ID` register (address `0x00`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id {
    #[skip]
    __: B8,
    // Number of ADC channels on the die (bits 11:8); 8 for the M08 variant.
    pub channel_count: B4,
    #[skip]
    __: B4,
}

/// Bitfield representation of the `STATUS` register (address `0x01`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // Per-channel data-ready flags, DRDY0 in bit 0 (bits 7:0).
    pub data_ready: B8,
    // Active data word length (bits 9:8).
    pub word_length: WordLength,
    // Reset flag, set until first cleared after power-up (bit 10).
    pub reset: bool,
    // Active CRC polynomial (bit 11).
    pub crc_type: CrcType,
    // Input CRC error detected (bit 12).
    pub crc_error: bool,
    // Register map CRC error detected (bit 13).
    pub reg_map_crc_error: bool,
    // SPI resynchronization occurred (bit 14).
    pub resync: bool,
    // Register map is locked (bit 15).
    pub lock: bool,
}

/// Bitfield representation of the `MODE` register (address `0x02`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    // DRDY pin format selection (bit 0).
    pub drdy_format: bool,
    // DRDY pin high-impedance when inactive (bit 1).
    pub drdy_hiz: bool,
    // DRDY signal source selection (bits 3:2).
    pub drdy_source: B2,
    // SPI timeout enable (bit 4).
    pub spi_timeout: bool,
    #[skip]
    __: B3,
    // Data word length selection (bits 9:8).
    pub word_length: WordLength,
    // Write 1 to clear the STATUS reset flag (bit 10).
    pub reset: bool,
    // CRC polynomial selection (bit 11).
    pub crc_type: CrcType,
    // Input CRC validation enable (bit 12).
    pub rx_crc_enable: bool,
    // Register map CRC enable (bit 13).
    pub reg_crc_enable: bool,
    #[skip]
    __: B2,
}

/// Bitfield representation of the `CLOCK` register (address `0x03`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    // Modulator power mode (bits 1:0).
    pub power_mode: PowerMode,
    // Oversampling ratio selection (bits 4:2).
    pub oversampling: OversamplingRatio,
    #[skip]
    __: B3,
    // Per-channel enable flags, CH0_EN in bit 8 (bits 15:8).
    pub channel_enable: B8,
}

/// Bitfield representation of the `GAIN1`/`GAIN2` registers (addresses
/// `0x04`/`0x05`).
///
/// Each register packs four PGA gain codes, one 4-bit nibble per channel
/// of its group (channels 0-3 for `GAIN1`, 4-7 for `GAIN2`), lowest
/// channel in the lowest nibble.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgaGain {
    // Gain code for the first channel of the group (bits 2:0).
    pub gain0: Gain,
    #[skip]
    __: B1,
    // Gain code for the second channel of the group (bits 6:4).
    pub gain1: Gain,
    #[skip]
    __: B1,
    // Gain code for the third channel of the group (bits 10:8).
    pub gain2: Gain,
    #[skip]
    __: B1,
    // Gain code for the fourth channel of the group (bits 14:12).
    pub gain3: Gain,
    #[skip]
    __: B1,
}

impl PgaGain {
    /// Builds a register value applying the same gain to all four
    /// channels of the group.
    pub fn uniform(gain: Gain) -> Self {
        Self::new()
            .with_gain0(gain)
            .with_gain1(gain)
            .with_gain2(gain)
            .with_gain3(gain)
    }
}

/// Bitfield representation of the `CFG` register (address `0x06`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cfg {
    // Current-detect mode enable (bit 0).
    pub current_detect_enable: bool,
    // Current-detect measurement length (bits 3:1).
    pub current_detect_length: B3,
    // Number of detections required to trigger (bits 6:4).
    pub current_detect_count: B3,
    // Run current-detect on all channels (bit 7).
    pub current_detect_all_channels: bool,
    // Global-chop mode enable (bit 8).
    pub global_chop_enable: bool,
    // Global-chop delay selection (bits 12:9).
    pub global_chop_delay: B4,
    #[skip]
    __: B3,
}

/// Bitfield representation of the `CHx_CFG` registers (addresses `0x09`,
/// `0x0E`, ... stepping by 5 per channel).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    // Input multiplexer selection (bits 1:0).
    pub mux: ChannelMux,
    // DC block filter disable (bit 2).
    pub dc_block_disable: bool,
    #[skip]
    __: B3,
    // Phase delay in modulator clock cycles (bits 15:6).
    pub phase: B10,
}

macro_rules! impl_u16_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<u16> for $ty {
                fn from(value: u16) -> Self {
                    Self::from_bytes(value.to_le_bytes())
                }
            }

            impl From<$ty> for u16 {
                fn from(value: $ty) -> Self {
                    u16::from_le_bytes(value.into_bytes())
                }
            }
        )+
    };
}

impl_u16_conversions!(Id, Status, Mode, Clock, PgaGain, Cfg, ChannelConfig);

impl Register for Id {
    type Raw = u16;
    const ADDRESS: u8 = REG_ID;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for Status {
    type Raw = u16;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x0500);
}

impl Register for Mode {
    type Raw = u16;
    const ADDRESS: u8 = REG_MODE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x0510);
}

impl Register for Clock {
    type Raw = u16;
    const ADDRESS: u8 = REG_CLOCK;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0xFF0E);
}

impl Register for Cfg {
    type Raw = u16;
    const ADDRESS: u8 = REG_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x0600);
}
