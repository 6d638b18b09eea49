// DEFAULT_I2C_BUS is the Linux I2C bus number the Proximity click is wired to.
pub const DEFAULT_I2C_BUS: u8 = 2;

// DEFAULT_ADDRESS is the fixed 7-bit I2C address of the VCNL4000.
pub const DEFAULT_ADDRESS: u8 = 0x13;

// PRODUCT_SIGNATURE is the value of the product/revision register on a VCNL4000
// (product ID 2, revision 1).
pub const PRODUCT_SIGNATURE: u8 = 0x21;

// DUMP_START is the first register read by the diagnostic dump.
pub const DUMP_START: u8 = 0x80;

// DUMP_LEN is the number of registers read by the diagnostic dump.
pub const DUMP_LEN: usize = 17;

// Bit masks for the command register.

// AL_RDY is set by the sensor once an ambient light conversion is available.
pub const AL_RDY: u8 = 0x40;

// PS_RDY is set by the sensor once a proximity conversion is available.
pub const PS_RDY: u8 = 0x20;

// AL_OD starts an on-demand ambient light conversion.
pub const AL_OD: u8 = 0x10;

// PS_OD starts an on-demand proximity conversion.
pub const PS_OD: u8 = 0x08;

// LED_CURRENT_MASK covers the writable IR LED current bits (10 mA per step).
pub const LED_CURRENT_MASK: u8 = 0x3F;

// LED_CURRENT_MAX is the highest accepted LED current setting (200 mA).
pub const LED_CURRENT_MAX: u8 = 20;

// DEFAULT_POLL_INTERVAL_US is the sleep between two ready-bit polls.
pub const DEFAULT_POLL_INTERVAL_US: u32 = 20;

// DEFAULT_MOTION_GPIO is the Linux GPIO number the MOTION click interrupt is wired to.
pub const DEFAULT_MOTION_GPIO: u64 = 27;

// DEFAULT_REARM_TIMEOUT_MS bounds each wait of the motion re-arm loop.
pub const DEFAULT_REARM_TIMEOUT_MS: u32 = 1000;

/// VCNL4000 register map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Command register: start bits and ready flags
    Command = 0x80,
    /// Product ID (high nibble) and revision ID (low nibble)
    ProductRevision = 0x81,
    /// IR LED current for proximity mode
    LedCurrent = 0x83,
    /// Ambient light parameter register
    AmbientLightParameter = 0x84,
    /// Ambient light result, MSB
    AmbientLightResultHigh = 0x85,
    /// Ambient light result, LSB
    AmbientLightResultLow = 0x86,
    /// Proximity result, MSB
    ProximityResultHigh = 0x87,
    /// Proximity result, LSB
    ProximityResultLow = 0x88,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}
