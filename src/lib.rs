#![cfg_attr(not(any(test, feature = "linux")), no_std)]

use core::fmt::Debug;
use embedded_hal::blocking::i2c::WriteRead;
use log::{debug, trace};
use scroll::{Pread, LE};

mod register;
#[cfg(feature = "linux")]
mod linux;

pub use register::{Concentrations, Register};
#[cfg(feature = "linux")]
pub use linux::{LinuxError, DEFAULT_BUS};

/// Address the bridge firmware answers on
pub const DEFAULT_ADDRESS: u8 = 0x2D;

/// Registers are 16 bits wide. Reading any other number of bytes locks up the bridge.
pub const BLOCK_SIZE: usize = 2;

#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// Bus transaction failed
    I2c(E),
    /// Response was shorter than a register
    Decode,
    /// System bus could not be acquired
    BusUnavailable(E),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    Success,
    /// Returned value is stale, not necessarily wrong
    Failure,
}

pub struct Pms5003Sensor<I2C> {
    i2c: I2C,
    address: u8,
    last_value: u16,
}

impl<I2C, E> Pms5003Sensor<I2C>
where
    I2C: WriteRead<Error = E>,
    E: Debug,
{
    ///
    /// Creates a new sensor instance on an already acquired bus. The address is not validated.
    ///
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            last_value: 0,
        }
    }

    ///
    /// Reads a register and returns the last known value together with the outcome.
    ///
    /// Never fails: on any bus fault the previously read value (or 0) is returned
    /// with `ReadStatus::Failure` and the cached value is left untouched.
    /// Registers other than the ones in `Register` are passed to the bus as is.
    ///
    pub fn read<R: Into<u8>>(&mut self, register: R) -> (u16, ReadStatus) {
        match self.try_read(register) {
            Ok(value) => (value, ReadStatus::Success),
            Err(e) => {
                debug!(
                    "read from {:#04x} failed, keeping {}: {:?}",
                    self.address, self.last_value, e
                );
                (self.last_value, ReadStatus::Failure)
            }
        }
    }

    ///
    /// Reads a register, surfacing the bus error. Updates the cached value on success only.
    ///
    pub fn try_read<R: Into<u8>>(&mut self, register: R) -> Result<u16, Error<E>> {
        let value = self.transfer(register.into())?;
        self.last_value = value;
        Ok(value)
    }

    ///
    /// Reads PM1.0, PM2.5 and PM10 in that order. Stops at the first failure.
    ///
    pub fn read_all(&mut self) -> Result<Concentrations, Error<E>> {
        Ok(Concentrations {
            pm1_0: self.try_read(Register::Pm1_0)?,
            pm2_5: self.try_read(Register::Pm2_5)?,
            pm10: self.try_read(Register::Pm10)?,
        })
    }

    ///
    /// Checks that the bridge answers register 0 with its own address
    ///
    pub fn probe(&mut self) -> Result<bool, Error<E>> {
        let answer = self.transfer(Register::Address.into())?;
        Ok(answer == u16::from(self.address))
    }

    pub fn last_value(&self) -> u16 {
        self.last_value
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Destroys the sensor instance and gives the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn transfer(&mut self, register: u8) -> Result<u16, Error<E>> {
        let mut buffer = [0_u8; BLOCK_SIZE];
        self.i2c
            .write_read(self.address, &[register], &mut buffer)
            .map_err(Error::I2c)?;

        trace!(
            "{:#04x} register {} -> {:02x?}",
            self.address,
            register,
            buffer
        );

        decode(&buffer).map_err(|_| Error::Decode)
    }
}

/// Low byte comes first on the wire
fn decode(buffer: &[u8]) -> Result<u16, scroll::Error> {
    buffer.pread_with::<u16>(0, LE)
}
