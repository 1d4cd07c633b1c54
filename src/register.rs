///
/// Registers served by the I2C bridge. Every register is 16 bits wide.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Bus address of the bridge itself
    Address = 0,
    Pm1_0 = 1,
    Pm2_5 = 2,
    Pm10 = 3,
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register as u8
    }
}

/// Raw concentration counts of all three channels
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concentrations {
    pub pm1_0: u16,
    pub pm2_5: u16,
    pub pm10: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_map_to_bridge_layout() {
        assert_eq!(0u8, Register::Address.into());
        assert_eq!(1u8, Register::Pm1_0.into());
        assert_eq!(2u8, Register::Pm2_5.into());
        assert_eq!(3u8, Register::Pm10.into());
    }
}
