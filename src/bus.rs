/// Blanket trait for types implementing `embedded_hal::i2c::I2c`
pub trait I2cBus: embedded_hal::i2c::I2c {
    type BusError: From<<Self as embedded_hal::i2c::ErrorType>::Error>;
}

impl<T, E> I2cBus for T
where
    T: embedded_hal::i2c::I2c<Error = E>,
    E: embedded_hal::i2c::Error,
{
    type BusError = E;
}

pub(crate) trait I2cExt {
    type Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error>;
    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error>;
}

impl<I2C: I2cBus> I2cExt for I2C {
    type Error = I2C::BusError;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[reg.into(), value])?;
        Ok(())
    }

    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.write_read(addr, &[reg.into()], &mut buf)?;
        Ok(buf[0])
    }
}
