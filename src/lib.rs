//! Shadow-state driver for the `MCP23017` 16-bit I2C port-expander.
//!
//! Unlike per-pin drivers which issue a bus transaction for every pin access,
//! this crate keeps a full in-memory shadow of the chip's 16 pins.  Pin
//! configuration and output values are mutated locally through
//! [`PinState`] handles and pushed to the chip in batches: one register write
//! per bank and attribute.
//!
//! ```no_run
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! use mcp23017_shadow::{Direction, Mcp23017};
//!
//! let mut mcp = Mcp23017::with_offset(i2c, 3);
//!
//! let led = mcp.pin(8).unwrap();
//! led.set_direction(Direction::Output);
//! led.set_value(true);
//!
//! mcp.setup().unwrap(); // push configuration
//! mcp.write().unwrap(); // push output values
//! mcp.read().unwrap(); // pull input values
//! ```
#![cfg_attr(not(test), no_std)]

mod bus;
mod device;
mod pin;
mod registers;

pub use bus::I2cBus;
pub use device::{InvalidPinIndex, Mcp23017, RegisterError, SyncError};
pub use pin::{Direction, InterruptMode, PinState};
pub use registers::{Bank, Register};

pub(crate) use bus::I2cExt;
