use embedded_hal::blocking::i2c::WriteRead;
use linux_embedded_hal::I2cdev;
use log::{debug, warn};

use crate::{Error, Pms5003Sensor};

/// First system I2C bus, the one exposed on the Raspberry Pi header
pub const DEFAULT_BUS: u8 = 1;

pub type LinuxError = <I2cdev as WriteRead>::Error;

impl Pms5003Sensor<I2cdev> {
    ///
    /// Opens the default system bus and creates a sensor instance on it
    ///
    pub fn open(address: u8) -> Result<Self, Error<LinuxError>> {
        Self::open_bus(DEFAULT_BUS, address)
    }

    ///
    /// Opens `/dev/i2c-<bus>` and creates a sensor instance on it.
    /// Fails immediately if the bus cannot be acquired.
    ///
    pub fn open_bus(bus: u8, address: u8) -> Result<Self, Error<LinuxError>> {
        let path = format!("/dev/i2c-{}", bus);
        let i2c = I2cdev::new(&path).map_err(|e| {
            warn!("cannot open {}: {:?}", path, e);
            Error::BusUnavailable(e)
        })?;

        debug!("opened {} for sensor at {:#04x}", path, address);
        Ok(Self::new(i2c, address))
    }
}
