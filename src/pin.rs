/// Direction of a single expander pin.
///
/// N.B.: In the IODIR register, 1 means input and 0 means output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Interrupt-on-change configuration of a single pin.
///
/// The chip encodes this in three registers: GPINTEN enables the interrupt,
/// INTCON selects between change-detection and comparison against DEFVAL, and
/// DEFVAL holds the compare value (an interrupt fires while the pin differs
/// from it, so DEFVAL=1 means falling edge and DEFVAL=0 means rising edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    None,
    OnChange,
    RisingEdge,
    FallingEdge,
}

impl InterruptMode {
    pub(crate) fn enabled(self) -> bool {
        !matches!(self, InterruptMode::None)
    }

    pub(crate) fn compares_default(self) -> bool {
        matches!(self, InterruptMode::RisingEdge | InterruptMode::FallingEdge)
    }

    pub(crate) fn default_compare_value(self) -> bool {
        matches!(self, InterruptMode::FallingEdge)
    }
}

/// Shadow state of a single expander pin.
///
/// `PinState` is pure in-memory bookkeeping, it never touches the bus.
/// Mutations only take hardware effect once the owning [`Mcp23017`] pushes
/// them with `setup()` (configuration) or `write()` (output values).
///
/// The default state mirrors the chip after reset: input, no pull-up, no
/// polarity inversion, no interrupt, low.
///
/// [`Mcp23017`]: crate::Mcp23017
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinState {
    direction: Direction,
    pull_up: bool,
    polarity_invert: bool,
    interrupt: InterruptMode,
    value: bool,
}

impl Default for PinState {
    fn default() -> Self {
        Self {
            direction: Direction::Input,
            pull_up: false,
            polarity_invert: false,
            interrupt: InterruptMode::None,
            value: false,
        }
    }
}

impl PinState {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the pin direction.
    ///
    /// Making a pin an output clears its pull-up, the weak pull-up resistor
    /// is only meaningful while the pin is an input.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        if direction == Direction::Output {
            self.pull_up = false;
        }
    }

    pub fn pull_up(&self) -> bool {
        self.pull_up
    }

    /// Enable or disable the internal pull-up resistor.
    ///
    /// Enabling the pull-up also makes the pin an input (the combined
    /// "input with pull-up" mode of the chip).
    pub fn set_pull_up(&mut self, pull_up: bool) {
        if pull_up {
            self.direction = Direction::Input;
        }
        self.pull_up = pull_up;
    }

    pub fn polarity_invert(&self) -> bool {
        self.polarity_invert
    }

    /// When set, the hardware reports the opposite logic level for this pin.
    pub fn set_polarity_invert(&mut self, polarity_invert: bool) {
        self.polarity_invert = polarity_invert;
    }

    pub fn interrupt(&self) -> InterruptMode {
        self.interrupt
    }

    pub fn set_interrupt(&mut self, interrupt: InterruptMode) {
        self.interrupt = interrupt;
    }

    /// Logic level of the pin.
    ///
    /// For input pins this is whatever the last `read()` distributed here,
    /// for output pins it is the level the caller requested.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Set the output level of the pin.
    ///
    /// This is a no-op on input pins: the hardware ignores GPIO writes to
    /// input bit positions and the shadow state mirrors that.
    pub fn set_value(&mut self, value: bool) {
        if self.direction == Direction::Output {
            self.value = value;
        }
    }

    /// Invert the output level of the pin.  No-op on input pins.
    pub fn toggle_value(&mut self) {
        if self.direction == Direction::Output {
            self.value = !self.value;
        }
    }

    pub(crate) fn is_input(&self) -> bool {
        self.direction == Direction::Input
    }

    pub(crate) fn interrupt_enabled(&self) -> bool {
        self.interrupt.enabled()
    }

    pub(crate) fn interrupt_compares_default(&self) -> bool {
        self.interrupt.compares_default()
    }

    pub(crate) fn interrupt_default_value(&self) -> bool {
        self.interrupt.default_compare_value()
    }

    /// Overwrite the value bit from a GPIO register read, regardless of
    /// direction.  The GPIO register reflects actual pin electrical state, so
    /// output pins are overwritten too; their shadow value becomes
    /// authoritative again on the next `set_value()`.
    pub(crate) fn overwrite_value(&mut self, value: bool) {
        self.value = value;
    }
}
