//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::{Ads131m08Interface, WORD_BYTES};
use crate::frame::FRAME_WORDS;

const MAX_FRAME_BYTES: usize = FRAME_WORDS * WORD_BYTES;

/// SPI-based interface implementation for the ADS131M08 driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Encodes one 16-bit command word into its three-byte wire form.
    fn encode_word(word: u16) -> [u8; WORD_BYTES] {
        [(word >> 8) as u8, word as u8, 0x00]
    }

    /// Decodes three wire bytes into an MSB-aligned 24-bit word.
    fn decode_word(bytes: [u8; WORD_BYTES]) -> u32 {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], 0x00])
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Ads131m08Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn transfer_words(
        &mut self,
        tx: &[u16],
        rx: &mut [u32],
    ) -> core::result::Result<(), Self::Error> {
        debug_assert_eq!(tx.len(), rx.len());
        debug_assert!(tx.len() <= FRAME_WORDS);

        let byte_len = tx.len() * WORD_BYTES;
        let mut tx_bytes = [0u8; MAX_FRAME_BYTES];
        let mut rx_bytes = [0u8; MAX_FRAME_BYTES];

        for (chunk, word) in tx_bytes.chunks_exact_mut(WORD_BYTES).zip(tx.iter()) {
            chunk.copy_from_slice(&Self::encode_word(*word));
        }

        // One transfer operation inside one transaction keeps chip-select
        // asserted across the whole word sequence.
        let mut operations = [Operation::Transfer(
            &mut rx_bytes[..byte_len],
            &tx_bytes[..byte_len],
        )];
        self.spi.transaction(&mut operations)?;

        for (word, chunk) in rx.iter_mut().zip(rx_bytes.chunks_exact(WORD_BYTES)) {
            *word = Self::decode_word([chunk[0], chunk[1], chunk[2]]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SpiInterface;
    use crate::frame::FRAME_WORDS;
    use crate::interface::Ads131m08Interface;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

    struct MockDevice<'a> {
        expectations: &'a [TransferExpectation<'a>],
        index: usize,
    }

    impl<'a> MockDevice<'a> {
        fn new(expectations: &'a [TransferExpectation<'a>]) -> Self {
            Self { expectations, index: 0 }
        }
    }

    impl<'a> Drop for MockDevice<'a> {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all SPI expectations consumed"
            );
        }
    }

    impl<'a> ErrorType for MockDevice<'a> {
        type Error = Infallible;
    }

    impl<'a> SpiDevice for MockDevice<'a> {
        fn transaction<'b>(
            &mut self,
            operations: &mut [Operation<'b, u8>],
        ) -> Result<(), Self::Error> {
            let expected = self
                .expectations
                .get(self.index)
                .expect("unexpected SPI transaction");
            self.index += 1;

            assert_eq!(operations.len(), 1, "expected a single transfer operation");
            match operations.first_mut().expect("missing operation") {
                Operation::Transfer(read, write) => {
                    assert_eq!(*write, expected.tx, "clocked bytes mismatch");
                    assert_eq!(read.len(), expected.rx.len(), "response length mismatch");
                    read.copy_from_slice(expected.rx);
                }
                _ => panic!("operation must be a transfer"),
            }

            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    struct TransferExpectation<'a> {
        tx: &'a [u8],
        rx: &'a [u8],
    }

    #[test]
    fn word_is_clocked_msb_first_with_zero_pad() {
        let expectations = [TransferExpectation {
            tx: &[0x61, 0x00, 0x00],
            rx: &[0xAB, 0xCD, 0xEF],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let mut rx = [0u32; 1];
        interface.transfer_words(&[0x6100], &mut rx).unwrap();
        assert_eq!(rx[0], 0xABCD_EF00);
    }

    #[test]
    fn full_frame_clocks_exactly_thirty_bytes() {
        let mut tx_bytes = [0u8; 30];
        tx_bytes[0] = 0xA0;
        tx_bytes[1] = 0x80;
        let mut rx_bytes = [0u8; 30];
        // Channel 0 slot (bytes 3..6) and CRC slot (bytes 27..30).
        rx_bytes[3..6].copy_from_slice(&[0x7F, 0xFF, 0xFF]);
        rx_bytes[27..30].copy_from_slice(&[0x12, 0x34, 0x56]);

        let expectations = [TransferExpectation {
            tx: &tx_bytes,
            rx: &rx_bytes,
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let mut tx_words = [0u16; FRAME_WORDS];
        tx_words[0] = 0xA080;
        let mut rx_words = [0u32; FRAME_WORDS];
        interface.transfer_words(&tx_words, &mut rx_words).unwrap();

        assert_eq!(rx_words[1], 0x7FFF_FF00);
        assert_eq!(rx_words[9], 0x1234_5600);
    }

    #[test]
    fn received_words_are_msb_aligned_with_zero_low_byte() {
        let expectations = [TransferExpectation {
            tx: &[0x00, 0x00, 0x00],
            rx: &[0x00, 0x00, 0x01],
        }];
        let mock = MockDevice::new(&expectations);
        let mut interface = SpiInterface::new(mock);

        let mut rx = [0u32; 1];
        interface.transfer_words(&[0x0000], &mut rx).unwrap();
        assert_eq!(rx[0], 0x0000_0100);
        assert_eq!(rx[0] & 0xFF, 0);
    }
}
