//! Driver-level tests against a scripted SPI device.

use ads131m08::config::Config;
use ads131m08::params::{Channel, Gain, GainRegister};
use ads131m08::registers::REG_STATUS;
use ads131m08::{Ads131m08, Error};
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

const FRAME_BYTES: usize = 30;

fn word_bytes(word: u16) -> [u8; 3] {
    [(word >> 8) as u8, word as u8, 0x00]
}

/// Byte image of a full outgoing frame: the command word followed by
/// nine null words.
fn frame_tx(command: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; FRAME_BYTES];
    bytes[..3].copy_from_slice(&word_bytes(command));
    bytes
}

/// Byte image of a device response frame with the given echo word and
/// per-channel 24-bit samples.
fn frame_rx(echo: u16, samples: [i32; 8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(FRAME_BYTES);
    bytes.extend_from_slice(&word_bytes(echo));
    for sample in samples {
        let raw = (sample as u32).to_be_bytes();
        bytes.extend_from_slice(&raw[1..4]);
    }
    bytes.extend_from_slice(&[0x00, 0x00, 0x00]); // CRC slot
    bytes
}

/// Byte image of a register write session: WREG command, value, four
/// null pad words.
fn write_session_tx(command: u16, value: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; 18];
    bytes[..3].copy_from_slice(&word_bytes(command));
    bytes[3..6].copy_from_slice(&word_bytes(value));
    bytes
}

fn full_frame(tx: Vec<u8>, rx: Vec<u8>) -> [SpiTransaction<u8>; 3] {
    [
        SpiTransaction::transaction_start(),
        SpiTransaction::transfer(tx, rx),
        SpiTransaction::transaction_end(),
    ]
}

#[test]
fn set_gain_writes_replicated_nibbles_and_checks_ack() {
    // setGain on GAIN2 with gain 16: value 0x4444 to address 0x05,
    // acknowledged with 0x4280.
    let mut expectations = Vec::new();
    expectations.extend(full_frame(
        write_session_tx(0x6280, 0x4444),
        vec![0u8; 18],
    ));
    expectations.extend(full_frame(frame_tx(0x0000), frame_rx(0x4280, [0; 8])));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    adc.set_gain(GainRegister::Gain2, Gain::X16).unwrap();

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn write_register_succeeds_on_matching_ack() {
    let mut expectations = Vec::new();
    expectations.extend(full_frame(
        write_session_tx(0x6100, 0x0510),
        vec![0u8; 18],
    ));
    expectations.extend(full_frame(frame_tx(0x0000), frame_rx(0x4100, [0; 8])));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    adc.write_register(0x02, 0x0510).unwrap();

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn write_register_fails_on_ack_mismatch() {
    let mut expectations = Vec::new();
    expectations.extend(full_frame(
        write_session_tx(0x6100, 0x0510),
        vec![0u8; 18],
    ));
    expectations.extend(full_frame(frame_tx(0x0000), frame_rx(0x0000, [0; 8])));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    assert_eq!(adc.write_register(0x02, 0x0510), Err(Error::WriteNack));

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn read_all_channels_decodes_every_slot() {
    let samples = [-1, 12_345, 0, 8_388_607, -8_388_608, 42, -42, 7];
    let expectations = full_frame(frame_tx(0x0000), frame_rx(0x0000, samples));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    assert_eq!(adc.read_all_channels().unwrap(), samples);

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn read_single_channel_reads_the_last_slot() {
    let mut samples = [0i32; 8];
    samples[7] = 12_345;
    let expectations = full_frame(frame_tx(0x0000), frame_rx(0x0000, samples));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    assert_eq!(adc.read_single_channel(Channel::Ch7).unwrap(), 12_345);

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn read_channels_preserves_order_and_allows_duplicates() {
    // A single frame serves the whole request; duplicated channels see
    // the same conversion.
    let samples = [10, 11, 12, 13, 14, 15, 16, 17];
    let expectations = full_frame(frame_tx(0x0000), frame_rx(0x0000, samples));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    let values = adc
        .read_channels([Channel::Ch3, Channel::Ch1, Channel::Ch3])
        .unwrap();
    assert_eq!(values, [13, 11, 13]);

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn read_register_latches_value_from_second_frame() {
    // RREG primes the device; the register contents arrive in the echo
    // slot of the following null frame.
    let mut expectations = Vec::new();
    expectations.extend(full_frame(frame_tx(0xA080), frame_rx(0x0000, [0; 8])));
    expectations.extend(full_frame(frame_tx(0x0000), frame_rx(0x0500, [0; 8])));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    assert_eq!(adc.read_register(REG_STATUS).unwrap(), 0x0500);

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn read_status_decodes_bitfields() {
    let mut expectations = Vec::new();
    expectations.extend(full_frame(frame_tx(0xA080), frame_rx(0x0000, [0; 8])));
    expectations.extend(full_frame(frame_tx(0x0000), frame_rx(0x0500, [0; 8])));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    let status = adc.read_status().unwrap();
    assert!(status.reset());
    assert!(!status.lock());

    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn startup_pulses_reset_and_waits_for_drdy() {
    let spi = SpiMock::new(&[]);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    let mut sync_reset = PinMock::new(&[
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);
    let mut drdy = PinMock::new(&[
        PinTransaction::get(PinState::High),
        PinTransaction::get(PinState::Low),
    ]);
    let mut delay = NoopDelay::new();

    adc.startup(&mut sync_reset, &mut drdy, &mut delay).unwrap();

    sync_reset.done();
    drdy.done();
    let (mut spi, _) = adc.release_spi();
    spi.done();
}

#[test]
fn configure_writes_both_gain_registers() {
    let config = Config::new()
        .gain_ch0_3(Gain::X8)
        .gain_ch4_7(Gain::X16)
        .build();

    let mut expectations = Vec::new();
    // GAIN1 <- 0x3333, acknowledged.
    expectations.extend(full_frame(
        write_session_tx(0x6200, 0x3333),
        vec![0u8; 18],
    ));
    expectations.extend(full_frame(frame_tx(0x0000), frame_rx(0x4200, [0; 8])));
    // GAIN2 <- 0x4444, acknowledged.
    expectations.extend(full_frame(
        write_session_tx(0x6280, 0x4444),
        vec![0u8; 18],
    ));
    expectations.extend(full_frame(frame_tx(0x0000), frame_rx(0x4280, [0; 8])));

    let spi = SpiMock::new(&expectations);
    let mut adc = Ads131m08::new_spi(spi, Config::default());

    adc.configure(config).unwrap();
    assert_eq!(adc.config(), &config);

    let (mut spi, _) = adc.release_spi();
    spi.done();
}
