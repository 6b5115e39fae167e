//! High-level ADS131M08 device driver implementation.

use crate::command::{command_word, write_ack_word, Opcode, NULL_COMMAND};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::frame::{Frame, CHANNEL_COUNT, FRAME_WORDS};
use crate::interface::spi::SpiInterface;
use crate::interface::Ads131m08Interface;
use crate::params::{Channel, Gain, GainRegister};
use crate::registers::{
    Clock, Id, Mode, PgaGain, Status, REG_CLOCK, REG_ID, REG_MODE, REG_STATUS,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

// SYNC/RESET low pulse and post-release settling time (milliseconds).
const RESET_PULSE_DELAY_MS: u32 = 10;
// Register write session: command word, value word, four null pads.
const WRITE_FRAME_WORDS: usize = 6;

/// High-level synchronous driver for the ADS131M08 ADC.
///
/// All operations are blocking and exchange fixed-shape communication
/// frames over the injected bus interface. The `&mut self` receivers
/// make the exclusive chip-select/bus ownership a compile-time property;
/// the driver performs no internal locking.
pub struct Ads131m08<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Ads131m08<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<SPI> Ads131m08<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, config: Config) -> Self {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Ads131m08<IFACE>
where
    IFACE: Ads131m08Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Initializes the ADC: runs the reset sequence, then applies the
    /// current configuration.
    ///
    /// The caller owns the master-clock generation for the CLKIN pin;
    /// the device must be clocked before this is called.
    pub fn init<RST, DR, D>(
        &mut self,
        sync_reset: &mut RST,
        drdy: &mut DR,
        delay: &mut D,
    ) -> Result<(), CommE>
    where
        RST: OutputPin,
        DR: InputPin,
        D: DelayNs,
    {
        self.startup(sync_reset, drdy, delay)?;
        self.configure(self.config)
    }

    /// Runs the power-up reset sequence: pulses SYNC/RESET low, releases
    /// it, then busy-waits until DRDY signals the first conversion.
    ///
    /// No timeout exists; a device that never asserts DRDY blocks the
    /// caller indefinitely.
    pub fn startup<RST, DR, D>(
        &mut self,
        sync_reset: &mut RST,
        drdy: &mut DR,
        delay: &mut D,
    ) -> Result<(), CommE>
    where
        RST: OutputPin,
        DR: InputPin,
        D: DelayNs,
    {
        sync_reset.set_low().map_err(|_| Error::Pin)?;
        delay.delay_ms(RESET_PULSE_DELAY_MS);
        sync_reset.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(RESET_PULSE_DELAY_MS);

        // DRDY is active low; wait for the first conversion.
        while drdy.is_high().map_err(|_| Error::Pin)? {}

        Ok(())
    }

    /// Applies a new configuration to the device and stores it.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.set_gain(GainRegister::Gain1, config.gain_ch0_3)?;
        self.set_gain(GainRegister::Gain2, config.gain_ch4_7)?;
        self.config = config;
        Ok(())
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the active configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    // ==================================================================
    // == Frame Protocol ================================================
    // ==================================================================
    /// Exchanges one full communication frame.
    ///
    /// Issues exactly [`FRAME_WORDS`] word transfers under a single
    /// chip-select assertion: the command word first, then nine null
    /// words capturing the eight channel slots and the trailing CRC.
    pub fn send_frame(&mut self, command: u16) -> Result<Frame, CommE> {
        let mut tx = [NULL_COMMAND; FRAME_WORDS];
        tx[0] = command;

        let mut rx = [0u32; FRAME_WORDS];
        self.interface
            .transfer_words(&tx, &mut rx)
            .map_err(Error::from)?;

        Ok(Frame::new(rx))
    }

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    /// Writes a 16-bit value to the register at `address` and verifies
    /// the device's acknowledgment.
    ///
    /// The write session clocks the WREG command, the value, and four
    /// null pad words under one chip-select assertion, then fetches the
    /// acknowledgment with a null frame. Fails with
    /// [`Error::WriteNack`] when the acknowledgment does not echo the
    /// write opcode and target address; no retry is attempted.
    pub fn write_register(&mut self, address: u8, value: u16) -> Result<(), CommE> {
        let mut tx = [NULL_COMMAND; WRITE_FRAME_WORDS];
        tx[0] = command_word(Opcode::Wreg, address);
        tx[1] = value;

        let mut rx = [0u32; WRITE_FRAME_WORDS];
        self.interface
            .transfer_words(&tx, &mut rx)
            .map_err(Error::from)?;

        let response = self.send_frame(NULL_COMMAND)?;
        if response.response_word() != write_ack_word(address) {
            return Err(Error::WriteNack);
        }

        Ok(())
    }

    /// Reads the 16-bit register at `address`.
    ///
    /// The RREG command primes the device; the register contents arrive
    /// in the echo slot of the following null frame. There is no
    /// failure path beyond bus errors: a malformed exchange yields an
    /// indeterminate value indistinguishable from a legitimately zero
    /// register.
    pub fn read_register(&mut self, address: u8) -> Result<u16, CommE> {
        self.send_frame(command_word(Opcode::Rreg, address))?;
        let frame = self.send_frame(NULL_COMMAND)?;
        Ok(frame.response_word())
    }

    /// Reads the `ID` register decoded into its bitfield form.
    pub fn read_id(&mut self) -> Result<Id, CommE> {
        Ok(Id::from(self.read_register(REG_ID)?))
    }

    /// Reads the `STATUS` register decoded into its bitfield form.
    pub fn read_status(&mut self) -> Result<Status, CommE> {
        Ok(Status::from(self.read_register(REG_STATUS)?))
    }

    /// Reads the `MODE` register decoded into its bitfield form.
    pub fn read_mode(&mut self) -> Result<Mode, CommE> {
        Ok(Mode::from(self.read_register(REG_MODE)?))
    }

    /// Reads the `CLOCK` register decoded into its bitfield form.
    pub fn read_clock(&mut self) -> Result<Clock, CommE> {
        Ok(Clock::from(self.read_register(REG_CLOCK)?))
    }

    // ==================================================================
    // == PGA Gain ======================================================
    // ==================================================================
    /// Sets the PGA gain for one four-channel group.
    ///
    /// Builds the register value with the gain code replicated in all
    /// four channel nibbles and writes it through [`write_register`].
    /// Unsupported gain factors and register selectors are rejected at
    /// the type level; see [`Gain::from_factor`] and
    /// [`GainRegister::from_number`] for checked conversions from raw
    /// integers.
    ///
    /// [`write_register`]: Self::write_register
    pub fn set_gain(&mut self, select: GainRegister, gain: Gain) -> Result<(), CommE> {
        let value = PgaGain::uniform(gain);
        self.write_register(select.address(), value.into())
    }

    // ==================================================================
    // == Channel Acquisition ===========================================
    // ==================================================================
    /// Reads the requested channels from one conversion.
    ///
    /// Exchanges exactly one null frame regardless of how many channels
    /// are requested, then decodes the selected slots. The output order
    /// matches the input order; duplicate channels are permitted and
    /// yield identical values since every sample originates from the
    /// same frame.
    pub fn read_channels<const N: usize>(
        &mut self,
        channels: [Channel; N],
    ) -> Result<[i32; N], CommE> {
        let frame = self.send_frame(NULL_COMMAND)?;
        Ok(channels.map(|channel| frame.channel_sample(channel)))
    }

    /// Reads all eight channels from one conversion.
    pub fn read_all_channels(&mut self) -> Result<[i32; CHANNEL_COUNT], CommE> {
        self.read_channels(Channel::ALL)
    }

    /// Reads a single channel.
    ///
    /// This still exchanges a full frame; prefer [`read_channels`] when
    /// more than one channel of the same conversion is needed.
    ///
    /// [`read_channels`]: Self::read_channels
    pub fn read_single_channel(&mut self, channel: Channel) -> Result<i32, CommE> {
        let samples = self.read_channels([channel])?;
        Ok(samples[0])
    }
}
