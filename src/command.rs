//! Command-word encoding for the ADS131M08 SPI protocol.
//!
//! Every frame starts with a 16-bit command word laid out as
//! `opcode << 12 | address << 7`, where the address field spans bits 12:7
//! and is masked to the 6-bit register address space.

/// Null command; clocking it out retrieves conversion data only.
pub const NULL_COMMAND: u16 = 0x0000;

/// Command opcodes occupying the top bits of a command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Opcode {
    /// No operation; the response carries conversion data.
    Null = 0x0,
    /// Write acknowledgment returned by the device, echoing the address.
    WriteAck = 0x4,
    /// Write register.
    Wreg = 0x6,
    /// Read register.
    Rreg = 0xA,
}

/// Builds a command word from an opcode and a register address.
///
/// The address is masked to 6 bits before shifting, so out-of-range
/// addresses alias into the register map rather than corrupting the
/// opcode field.
pub const fn command_word(opcode: Opcode, address: u8) -> u16 {
    ((opcode as u16) << 12) | (((address & 0x3F) as u16) << 7)
}

/// The acknowledgment word the device returns after a successful write
/// to `address`.
pub const fn write_ack_word(address: u8) -> u16 {
    command_word(Opcode::WriteAck, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wreg_command_places_address_in_bits_12_to_7() {
        assert_eq!(command_word(Opcode::Wreg, 0x02), 0x6100);
        assert_eq!(command_word(Opcode::Wreg, 0x05), 0x6280);
    }

    #[test]
    fn rreg_command_encodes_opcode_0xa() {
        assert_eq!(command_word(Opcode::Rreg, 0x00), 0xA000);
        assert_eq!(command_word(Opcode::Rreg, 0x3F), 0xBF80);
    }

    #[test]
    fn address_is_masked_to_six_bits() {
        assert_eq!(
            command_word(Opcode::Wreg, 0x7F),
            command_word(Opcode::Wreg, 0x3F)
        );
    }

    #[test]
    fn write_ack_echoes_address_under_opcode_0x4() {
        assert_eq!(write_ack_word(0x02), 0x4100);
        assert_eq!(write_ack_word(0x05), 0x4280);
    }
}
