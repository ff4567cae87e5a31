//! The `MCP23017` "16-Bit I/O Expander with Serial Interface", driven through
//! a full shadow of its per-pin configuration.
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! The driver keeps one [`PinState`] per pin and only talks to the chip in
//! three batched operations: [`Mcp23017::setup()`] pushes the configuration
//! registers, [`Mcp23017::read()`] pulls the GPIO registers into the shadow
//! values and [`Mcp23017::write()`] pushes the shadow values out.  Each bank
//! register is a single transposition of one attribute bit across the eight
//! pins of that bank, pin 0 of a bank in the register's LSB.
use crate::pin::PinState;
use crate::registers::{Bank, Register};
use crate::I2cExt;

/// I2C base address; the three address pins add an offset of 0..=7.
const BASE_ADDRESS: u8 = 0x20;

/// A pin index outside the valid range 0..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPinIndex(pub u8);

/// A single failed register transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterError<E> {
    pub register: Register,
    pub bank: Bank,
    pub cause: E,
}

/// Aggregate error of a `setup()`/`read()`/`write()` call.
///
/// The register transactions of one call are independent, so a failure on one
/// does not stop the remaining ones.  This error collects every transaction
/// that failed; everything not listed here went through.
#[derive(Debug)]
pub struct SyncError<E> {
    failures: heapless::Vec<RegisterError<E>, 12>,
}

impl<E> SyncError<E> {
    fn new() -> Self {
        Self {
            failures: heapless::Vec::new(),
        }
    }

    fn record(&mut self, register: Register, bank: Bank, cause: E) {
        // capacity covers the 12 transactions of a full setup()
        let _ = self.failures.push(RegisterError {
            register,
            bank,
            cause,
        });
    }

    fn into_result(self) -> Result<(), Self> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// The failed transactions, in the order they were attempted.
    pub fn failures(&self) -> &[RegisterError<E>] {
        &self.failures
    }
}

/// `MCP23017` 16-bit port-expander with shadowed pin state.
pub struct Mcp23017<I2C> {
    i2c: I2C,
    addr: u8,
    pins: [PinState; 16],
}

impl<I2C: crate::I2cBus> Mcp23017<I2C> {
    /// Create a driver for a chip with all three address pins low.
    pub fn new(i2c: I2C) -> Self {
        Self::with_offset(i2c, 0)
    }

    /// Create a driver for the chip at `BASE_ADDRESS + offset`.
    ///
    /// The hardware wires three address pins, so only offsets 0..=7 exist;
    /// higher bits of `offset` are ignored.
    pub fn with_offset(i2c: I2C, offset: u8) -> Self {
        Self {
            i2c,
            addr: BASE_ADDRESS | (offset & 0x07),
            pins: [PinState::default(); 16],
        }
    }

    /// The 7-bit bus address this driver talks to.
    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Mutable access to the shadow state of pin `index`.
    ///
    /// Pins 0..=7 are bank A (GPA0..GPA7), pins 8..=15 bank B (GPB0..GPB7).
    pub fn pin(&mut self, index: u8) -> Result<&mut PinState, InvalidPinIndex> {
        self.pins
            .get_mut(usize::from(index))
            .ok_or(InvalidPinIndex(index))
    }

    /// Push the full pin configuration to the chip.
    ///
    /// The chip resets to all-input, so this must be called at least once
    /// after construction and after any batch of configuration changes.
    pub fn setup(&mut self) -> Result<(), SyncError<I2C::BusError>> {
        const CONFIG_REGS: [(Register, fn(&PinState) -> bool); 6] = [
            (Register::Iodir, PinState::is_input),
            (Register::Gppu, PinState::pull_up),
            (Register::Ipol, PinState::polarity_invert),
            (Register::GpInten, PinState::interrupt_enabled),
            (Register::IntCon, PinState::interrupt_compares_default),
            (Register::DefVal, PinState::interrupt_default_value),
        ];

        let mut errors = SyncError::new();
        for (register, attribute) in CONFIG_REGS {
            for bank in Bank::ALL {
                let byte = self.collect(bank, attribute);
                if let Err(cause) = self.i2c.write_reg(self.addr, register.address(bank), byte) {
                    errors.record(register, bank, cause);
                }
            }
        }
        errors.into_result()
    }

    /// Pull the GPIO registers into the shadow values.
    ///
    /// A bank without any input pin is skipped entirely (no bus transaction).
    /// On a failed read the bank's shadow values are left untouched and the
    /// failure is reported; a read never silently yields zeros.
    pub fn read(&mut self) -> Result<(), SyncError<I2C::BusError>> {
        let mut errors = SyncError::new();
        for bank in Bank::ALL {
            if self.collect(bank, PinState::is_input) == 0x00 {
                continue;
            }
            match self.i2c.read_reg(self.addr, Register::Gpio.address(bank)) {
                Ok(byte) => self.distribute_values(bank, byte),
                Err(cause) => errors.record(Register::Gpio, bank, cause),
            }
        }
        errors.into_result()
    }

    /// Push the shadow values of output pins to the GPIO registers.
    ///
    /// A bank without any output pin is skipped entirely.  The written byte
    /// carries the value bits of all eight pins; the chip ignores the bit
    /// positions configured as inputs.
    pub fn write(&mut self) -> Result<(), SyncError<I2C::BusError>> {
        let mut errors = SyncError::new();
        for bank in Bank::ALL {
            if self.collect(bank, PinState::is_input) == 0xff {
                continue;
            }
            let byte = self.collect(bank, PinState::value);
            if let Err(cause) = self
                .i2c
                .write_reg(self.addr, Register::Gpio.address(bank), byte)
            {
                errors.record(Register::Gpio, bank, cause);
            }
        }
        errors.into_result()
    }

    /// Transpose one attribute bit of a bank's eight pins into a register
    /// byte, bank pin 0 in the LSB.
    fn collect(&self, bank: Bank, attribute: fn(&PinState) -> bool) -> u8 {
        let mut byte = 0x00;
        for (i, pin) in self.pins[bank.pin_range()].iter().enumerate() {
            if attribute(pin) {
                byte |= 1 << i;
            }
        }
        byte
    }

    /// Inverse transposition: distribute a GPIO register byte into the value
    /// bits of a bank's eight pins.
    fn distribute_values(&mut self, bank: Bank, byte: u8) {
        for (i, pin) in self.pins[bank.pin_range()].iter_mut().enumerate() {
            pin.overwrite_value((byte >> i) & 1 != 0);
        }
    }
}
