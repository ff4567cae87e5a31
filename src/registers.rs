//! Register map of the MCP23017, BANK=0 addressing (the reset state of the
//! chip, which this driver never changes).
//!
//! Every register exists once per port; bank A uses the even address, bank B
//! the odd address right after it.

/// One of the two eight-pin ports of the chip.
///
/// Pins 0..=7 of the shadow state live on bank A, pins 8..=15 on bank B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    A = 0,
    B = 1,
}

impl Bank {
    pub(crate) const ALL: [Bank; 2] = [Bank::A, Bank::B];

    /// Index of this bank's first pin in the 16-pin shadow array.
    pub(crate) fn pin_offset(self) -> usize {
        self as usize * 8
    }

    pub(crate) fn pin_range(self) -> core::ops::Range<usize> {
        self.pin_offset()..self.pin_offset() + 8
    }
}

/// Per-bank registers of the MCP23017.
///
/// The reset value of all registers is 0x00, except for IODIR which is 0xFF
/// (all pins inputs).
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// IODIR: input/output direction: 0=output; 1=input
    Iodir,
    /// IPOL: input polarity: 0=register values match input pins; 1=opposite
    Ipol,
    /// GPINTEN: interrupt-on-change: 0=disable; 1=enable
    GpInten,
    /// DEFVAL: default values for interrupt-on-change
    DefVal,
    /// INTCON: interrupt-on-change config: 0=compare to previous pin value;
    ///   1=compare to corresponding bit in DEFVAL
    IntCon,
    /// GPPU: enables the weak internal pull-ups on each pin (when configured
    ///   as an input)
    Gppu,
    /// INTF: interrupt flags: 0=no interrupt pending; 1=corresponding pin
    ///   caused interrupt
    Intf,
    /// INTCAP: value of each pin at the time that it caused an interrupt
    IntCap,
    /// GPIO: reflects logic level on pins
    Gpio,
}

impl Register {
    const fn base(self) -> u8 {
        match self {
            Register::Iodir => 0x00,
            Register::Ipol => 0x02,
            Register::GpInten => 0x04,
            Register::DefVal => 0x06,
            Register::IntCon => 0x08,
            Register::Gppu => 0x0c,
            Register::Intf => 0x0e,
            Register::IntCap => 0x10,
            Register::Gpio => 0x12,
        }
    }

    /// Bus address of this register for the given bank.
    pub const fn address(self, bank: Bank) -> u8 {
        self.base() | bank as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_b_uses_odd_addresses() {
        assert_eq!(Register::Iodir.address(Bank::A), 0x00);
        assert_eq!(Register::Iodir.address(Bank::B), 0x01);
        assert_eq!(Register::Gppu.address(Bank::A), 0x0c);
        assert_eq!(Register::Gppu.address(Bank::B), 0x0d);
        assert_eq!(Register::Gpio.address(Bank::A), 0x12);
        assert_eq!(Register::Gpio.address(Bank::B), 0x13);
    }
}
