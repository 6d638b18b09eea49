#![cfg_attr(not(any(test, feature = "linux")), no_std)]

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, info, warn};

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

pub mod motion;
pub use motion::{EdgeInput, EdgeWait, MotionMonitor};

#[cfg(feature = "linux")]
pub mod linux;

/// A measurement channel of the VCNL4000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Ambient light sensor.
    AmbientLight,
    /// IR proximity sensor.
    Proximity,
}

/// Register-level parameters of an on-demand conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Bit written to the command register to start the conversion.
    pub start_command: u8,
    /// Bit of the command register set once the result is available.
    pub ready_mask: u8,
    /// Register holding the MSB of the result; the LSB follows it.
    pub result_register: Register,
}

impl Channel {
    /// Returns the conversion parameters of this channel.
    pub const fn conversion(self) -> Conversion {
        match self {
            Channel::AmbientLight => Conversion {
                start_command: AL_OD,
                ready_mask: AL_RDY,
                result_register: Register::AmbientLightResultHigh,
            },
            Channel::Proximity => Conversion {
                start_command: PS_OD,
                ready_mask: PS_RDY,
                result_register: Register::ProximityResultHigh,
            },
        }
    }
}

// Progress of a single measurement cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MeasurementState {
    Idle,
    ConversionRequested,
    Polling,
    ResultReady,
}

/// A 16-bit conversion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// The channel the result was read from.
    pub channel: Channel,
    /// Raw counts, assembled MSB first.
    pub value: u16,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "val: {:04X} ({})", self.value, self.value)
    }
}

/// Results of [`Vcnl4000::run_diagnostics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readings {
    pub ambient_light: Measurement,
    pub proximity: Measurement,
}

/// Content of the product/revision register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRevision(pub u8);

impl ProductRevision {
    /// Product ID, stored in the high nibble.
    pub fn product_id(&self) -> u8 {
        self.0 >> 4
    }

    /// Revision ID, stored in the low nibble.
    pub fn revision(&self) -> u8 {
        self.0 & 0x0F
    }

    /// Whether the register matches the VCNL4000 signature.
    pub fn is_expected_device(&self) -> bool {
        self.0 == PRODUCT_SIGNATURE
    }
}

/// A single `(address, value)` pair of a register dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterEntry {
    pub address: u8,
    pub value: u8,
}

/// Snapshot of the register map starting at [`DUMP_START`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterDump {
    entries: [RegisterEntry; DUMP_LEN],
}

impl RegisterDump {
    /// The dumped registers, in address order.
    pub fn entries(&self) -> &[RegisterEntry] {
        &self.entries
    }
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.iter() {
            writeln!(f, "0x{:02X}: 0x{:02X}", entry.address, entry.value)?;
        }
        Ok(())
    }
}

/// Represents a VCNL4000 proximity and ambient light sensor.
///
/// Every register access is an address write followed by a separate read.
/// The device keeps the written address as its current pointer, so the driver
/// owns the bus exclusively and never interleaves other transactions between
/// the two halves of an access.
///
/// # Type Parameters
///
/// * `I2C`: The bus the sensor is attached to. It must implement
///   `embedded_hal::i2c::I2c`.
pub struct Vcnl4000<I2C> {
    i2c: I2C,
    config: Config,
}

impl<I2C> Vcnl4000<I2C>
where
    I2C: I2c,
{
    /// Creates a new `Vcnl4000` sensor instance.
    ///
    /// No bus traffic happens until the first operation.
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self { i2c, config }
    }

    /// Returns the underlying bus, consuming this driver.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Writes `value` to `reg` in a single 2-byte transaction.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write(&[reg.into(), value])
    }

    /// Reads a single register.
    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.select_and_read(reg.into(), &mut buf)?;
        Ok(buf[0])
    }

    /// Reads a 16-bit result whose MSB lives at `high` and LSB at `high + 1`.
    ///
    /// Both bytes come from one 2-byte read.
    pub fn read_result(&mut self, high: Register) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.select_and_read(high.into(), &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Reads the product/revision register.
    pub fn product_revision(&mut self) -> Result<ProductRevision, Error<I2C::Error>> {
        self.read_register(Register::ProductRevision)
            .map(ProductRevision)
    }

    /// Checks whether a VCNL4000 answers at the configured address.
    ///
    /// The check is advisory: a mismatch is logged and returned, callers are
    /// free to keep talking to the device.
    pub fn identify(&mut self) -> Result<ProductRevision, Error<I2C::Error>> {
        let id = self.product_revision()?;
        if id.is_expected_device() {
            info!(
                "VCNL4000 found (product {}, revision {})",
                id.product_id(),
                id.revision()
            );
        } else {
            warn!(
                "Unexpected product/revision {:02X}, expected {:02X}",
                id.0, PRODUCT_SIGNATURE
            );
        }
        Ok(id)
    }

    /// Reads [`DUMP_LEN`] consecutive registers starting at [`DUMP_START`].
    ///
    /// The start address is written once; the device advances its register
    /// pointer after every read.
    pub fn dump_registers(&mut self) -> Result<RegisterDump, Error<I2C::Error>> {
        debug!("Dumping {} registers from {:02X}", DUMP_LEN, DUMP_START);
        self.write(&[DUMP_START])?;

        let mut entries = [RegisterEntry::default(); DUMP_LEN];
        for (address, entry) in (DUMP_START..).zip(entries.iter_mut()) {
            let mut buf = [0u8; 1];
            self.read(&mut buf)?;
            *entry = RegisterEntry {
                address,
                value: buf[0],
            };
        }
        Ok(RegisterDump { entries })
    }

    /// Returns the IR LED current setting, in 10 mA steps.
    pub fn led_current(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_register(Register::LedCurrent)? & LED_CURRENT_MASK)
    }

    /// Sets the IR LED current used for proximity conversions.
    ///
    /// # Arguments
    ///
    /// * `steps`: Current in 10 mA steps, between 0 and 20 (200 mA).
    ///
    /// # Returns
    ///
    /// * `Err(Error::InvalidArg)` if `steps` is greater than 20.
    pub fn set_led_current(&mut self, steps: u8) -> Result<(), Error<I2C::Error>> {
        if steps > LED_CURRENT_MAX {
            log::error!("LED current {} out of range (0-{})", steps, LED_CURRENT_MAX);
            return Err(Error::InvalidArg);
        }
        debug!("Setting LED current to {} mA", u16::from(steps) * 10);
        self.write_register(Register::LedCurrent, steps)
    }

    /// Reads the raw ambient light parameter register.
    pub fn ambient_light_parameters(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_register(Register::AmbientLightParameter)
    }

    /// Runs one on-demand ambient light conversion.
    pub fn measure_ambient_light(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<Measurement, Error<I2C::Error>> {
        self.measure(Channel::AmbientLight, delay)
    }

    /// Runs one on-demand proximity conversion.
    pub fn measure_proximity(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<Measurement, Error<I2C::Error>> {
        self.measure(Channel::Proximity, delay)
    }

    /// Runs the full board check and writes a human-readable report to `out`.
    ///
    /// Identification and the register dump are best effort: a signature
    /// mismatch only suppresses the "found" line, and bus failures in either
    /// step are logged and skipped. The ambient light and proximity
    /// conversions always run, their failures are returned.
    pub fn run_diagnostics<W: fmt::Write>(
        &mut self,
        delay: &mut impl DelayNs,
        out: &mut W,
    ) -> Result<Readings, Error<I2C::Error>> {
        match self.identify() {
            Ok(id) if id.is_expected_device() => {
                writeln!(out, "Found Proximity Click board").map_err(|_| Error::Output)?
            }
            Ok(_) => {}
            Err(e) => warn!("Identification failed: {}", e),
        }

        writeln!(out, "Current register status::").map_err(|_| Error::Output)?;
        match self.dump_registers() {
            Ok(dump) => write!(out, "{}", dump).map_err(|_| Error::Output)?,
            Err(e) => warn!("Register dump failed: {}", e),
        }

        writeln!(out, "Requesting ambient light sensor value").map_err(|_| Error::Output)?;
        let ambient_light = self.measure_ambient_light(delay)?;
        writeln!(out, "{}", ambient_light).map_err(|_| Error::Output)?;

        writeln!(out, "Requesting proximity sensor value").map_err(|_| Error::Output)?;
        let proximity = self.measure_proximity(delay)?;
        writeln!(out, "{}", proximity).map_err(|_| Error::Output)?;

        Ok(Readings {
            ambient_light,
            proximity,
        })
    }

    /// Runs one on-demand conversion on `channel` and returns its result.
    ///
    /// The cycle is:
    /// 1. Write the channel's start bit to the command register.
    /// 2. Poll the command register until the channel's ready bit is set,
    ///    sleeping `poll_interval_us` between polls. A failed poll counts as
    ///    "not ready" and is retried.
    /// 3. Read the 16-bit result.
    ///
    /// Without a `max_polls` cap the poll never gives up.
    pub fn measure(
        &mut self,
        channel: Channel,
        delay: &mut impl DelayNs,
    ) -> Result<Measurement, Error<I2C::Error>> {
        let conversion = channel.conversion();
        let mut state = MeasurementState::Idle;
        let mut polls: u32 = 0;

        loop {
            let next = match state {
                MeasurementState::Idle => {
                    self.write(&[Register::Command.into(), conversion.start_command])?;
                    MeasurementState::ConversionRequested
                }
                MeasurementState::ConversionRequested | MeasurementState::Polling => {
                    polls = polls.saturating_add(1);
                    if self.conversion_ready(channel, conversion.ready_mask) {
                        MeasurementState::ResultReady
                    } else {
                        if let Some(max) = self.config.max_polls {
                            if polls >= max {
                                log::error!("{:?} conversion not ready after {} polls", channel, polls);
                                return Err(Error::ConversionTimeout { channel, polls });
                            }
                        }
                        delay.delay_us(self.config.poll_interval_us);
                        MeasurementState::Polling
                    }
                }
                MeasurementState::ResultReady => {
                    let value = self.read_result(conversion.result_register)?;
                    debug!("{:?} result {:04X} after {} polls", channel, value, polls);
                    return Ok(Measurement { channel, value });
                }
            };
            if next != state {
                debug!("{:?}: {:?} -> {:?}", channel, state, next);
            }
            state = next;
        }
    }

    // Reads the command register once and tests `ready_mask`. Bus failures are
    // logged and reported as "not ready".
    fn conversion_ready(&mut self, channel: Channel, ready_mask: u8) -> bool {
        match self.read_register(Register::Command) {
            Ok(status) => status & ready_mask != 0,
            Err(e) => {
                warn!("{:?} status read failed, retrying: {:?}", channel, e);
                false
            }
        }
    }

    // Points the device at `reg`, then reads `buf.len()` bytes from it.
    fn select_and_read(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.write(&[reg])?;
        self.read(buf)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I2C::Error>> {
        debug!("Write {:02X?}", bytes);
        self.i2c
            .write(self.config.address, bytes)
            .map_err(Error::Transport)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .read(self.config.address, buf)
            .map_err(Error::Transport)?;
        debug!("Read {:02X?}", buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use proptest::prelude::*;

    const ADDR: u8 = DEFAULT_ADDRESS;

    // Sums every requested delay.
    #[derive(Default)]
    struct RecordingDelay {
        calls: u32,
        total_ns: u64,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls += 1;
            self.total_ns += u64::from(ns);
        }
    }

    fn sensor(expectations: &[I2cTransaction]) -> Vcnl4000<I2cMock> {
        Vcnl4000::new(I2cMock::new(expectations), Config::default())
    }

    fn status_poll(status: u8) -> [I2cTransaction; 2] {
        [
            I2cTransaction::write(ADDR, vec![0x80]),
            I2cTransaction::read(ADDR, vec![status]),
        ]
    }

    #[test]
    fn ambient_light_scenario() {
        let mut expectations = vec![I2cTransaction::write(ADDR, vec![0x80, 0x10])];
        expectations.extend(status_poll(0x40));
        expectations.push(I2cTransaction::write(ADDR, vec![0x85]));
        expectations.push(I2cTransaction::read(ADDR, vec![0x01, 0x2C]));

        let mut sensor = sensor(&expectations);
        let measurement = sensor.measure_ambient_light(&mut NoopDelay::new()).unwrap();

        assert_eq!(measurement.channel, Channel::AmbientLight);
        assert_eq!(measurement.value, 0x012C);
        assert_eq!(measurement.value, 300);
        assert_eq!(measurement.to_string(), "val: 012C (300)");
        sensor.release().done();
    }

    #[test]
    fn proximity_polls_until_ready_bit_is_set() {
        let mut expectations = vec![I2cTransaction::write(ADDR, vec![0x80, 0x08])];
        expectations.extend(status_poll(0x00));
        // Every bit except the proximity ready bit
        expectations.extend(status_poll(0xDF));
        expectations.extend(status_poll(0x20));
        expectations.push(I2cTransaction::write(ADDR, vec![0x87]));
        expectations.push(I2cTransaction::read(ADDR, vec![0x08, 0x9A]));

        let mut sensor = sensor(&expectations);
        let mut delay = RecordingDelay::default();
        let measurement = sensor.measure_proximity(&mut delay).unwrap();

        assert_eq!(measurement.value, 0x089A);
        assert_eq!(delay.calls, 2);
        assert_eq!(delay.total_ns, 2 * 20_000);
        sensor.release().done();
    }

    #[test]
    fn ambient_ready_bit_does_not_complete_proximity() {
        let mut expectations = vec![I2cTransaction::write(ADDR, vec![0x80, 0x08])];
        expectations.extend(status_poll(AL_RDY));
        expectations.extend(status_poll(PS_RDY));
        expectations.push(I2cTransaction::write(ADDR, vec![0x87]));
        expectations.push(I2cTransaction::read(ADDR, vec![0x00, 0x01]));

        let mut sensor = sensor(&expectations);
        let measurement = sensor.measure_proximity(&mut NoopDelay::new()).unwrap();
        assert_eq!(measurement.value, 1);
        sensor.release().done();
    }

    #[test]
    fn failed_status_read_keeps_polling() {
        let mut expectations = vec![I2cTransaction::write(ADDR, vec![0x80, 0x10])];
        expectations.push(I2cTransaction::write(ADDR, vec![0x80]));
        expectations.push(I2cTransaction::read(ADDR, vec![0x00]).with_error(ErrorKind::Other));
        expectations.push(I2cTransaction::write(ADDR, vec![0x80]).with_error(ErrorKind::Other));
        expectations.extend(status_poll(0x40));
        expectations.push(I2cTransaction::write(ADDR, vec![0x85]));
        expectations.push(I2cTransaction::read(ADDR, vec![0xFF, 0xFF]));

        let mut sensor = sensor(&expectations);
        let measurement = sensor.measure_ambient_light(&mut NoopDelay::new()).unwrap();
        assert_eq!(measurement.value, u16::MAX);
        sensor.release().done();
    }

    #[test]
    fn start_conversion_failure_is_a_transport_error() {
        let expectations =
            [I2cTransaction::write(ADDR, vec![0x80, 0x10]).with_error(ErrorKind::Other)];

        let mut sensor = sensor(&expectations);
        let result = sensor.measure_ambient_light(&mut NoopDelay::new());
        assert!(matches!(result, Err(Error::Transport(ErrorKind::Other))));
        sensor.release().done();
    }

    #[test]
    fn poll_cap_yields_conversion_timeout() {
        let mut expectations = vec![I2cTransaction::write(ADDR, vec![0x80, 0x08])];
        for _ in 0..3 {
            expectations.extend(status_poll(0x00));
        }

        let mut sensor = Vcnl4000::new(
            I2cMock::new(&expectations),
            Config::default().max_polls(Some(3)),
        );
        let mut delay = RecordingDelay::default();
        let result = sensor.measure_proximity(&mut delay);

        assert!(matches!(
            result,
            Err(Error::ConversionTimeout {
                channel: Channel::Proximity,
                polls: 3
            })
        ));
        assert_eq!(delay.calls, 2);
        sensor.release().done();
    }

    #[test]
    fn identify_reports_signature() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x81]),
            I2cTransaction::read(ADDR, vec![0x21]),
        ];
        let mut sensor = sensor(&expectations);
        let id = sensor.identify().unwrap();

        assert!(id.is_expected_device());
        assert_eq!(id.product_id(), 2);
        assert_eq!(id.revision(), 1);
        sensor.release().done();
    }

    #[test]
    fn identify_mismatch_is_not_an_error() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x81]),
            I2cTransaction::read(ADDR, vec![0x11]),
        ];
        let mut sensor = sensor(&expectations);
        let id = sensor.identify().unwrap();

        assert!(!id.is_expected_device());
        sensor.release().done();
    }

    #[test]
    fn dump_reads_seventeen_registers_after_one_pointer_write() {
        let mut expectations = vec![I2cTransaction::write(ADDR, vec![0x80])];
        for i in 0..17u8 {
            expectations.push(I2cTransaction::read(ADDR, vec![0xA0 ^ i]));
        }

        let mut sensor = sensor(&expectations);
        let dump = sensor.dump_registers().unwrap();

        assert_eq!(dump.entries().len(), 17);
        for (i, entry) in dump.entries().iter().enumerate() {
            assert_eq!(entry.address, 0x80 + i as u8);
            assert_eq!(entry.value, 0xA0 ^ i as u8);
        }
        let text = dump.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "0x80: 0xA0");
        assert_eq!(lines[16], "0x90: 0xB0");
        sensor.release().done();
    }

    #[test]
    fn led_current_is_masked_and_range_checked() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x83]),
            I2cTransaction::read(ADDR, vec![0xC2]),
            I2cTransaction::write(ADDR, vec![0x83, 20]),
        ];
        let mut sensor = sensor(&expectations);

        assert_eq!(sensor.led_current().unwrap(), 2);
        assert!(matches!(sensor.set_led_current(21), Err(Error::InvalidArg)));
        sensor.set_led_current(20).unwrap();
        sensor.release().done();
    }

    #[test]
    fn ambient_light_parameters_reads_register_0x84() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x84]),
            I2cTransaction::read(ADDR, vec![0x0D]),
        ];
        let mut sensor = sensor(&expectations);

        assert_eq!(sensor.ambient_light_parameters().unwrap(), 0x0D);
        sensor.release().done();
    }

    // Full board check: identification, dump, then both conversions.
    fn diagnostics_session(signature: u8) -> Vec<I2cTransaction> {
        let mut expectations = vec![
            I2cTransaction::write(ADDR, vec![0x81]),
            I2cTransaction::read(ADDR, vec![signature]),
            I2cTransaction::write(ADDR, vec![0x80]),
        ];
        for i in 0..17u8 {
            expectations.push(I2cTransaction::read(ADDR, vec![i]));
        }
        expectations.push(I2cTransaction::write(ADDR, vec![0x80, 0x10]));
        expectations.extend(status_poll(0x40));
        expectations.push(I2cTransaction::write(ADDR, vec![0x85]));
        expectations.push(I2cTransaction::read(ADDR, vec![0x01, 0x2C]));
        expectations.push(I2cTransaction::write(ADDR, vec![0x80, 0x08]));
        expectations.extend(status_poll(0x20));
        expectations.push(I2cTransaction::write(ADDR, vec![0x87]));
        expectations.push(I2cTransaction::read(ADDR, vec![0x00, 0x2A]));
        expectations
    }

    #[test]
    fn diagnostics_report_found_board() {
        let expectations = diagnostics_session(0x21);
        let mut sensor = sensor(&expectations);
        let mut report = String::new();

        let readings = sensor
            .run_diagnostics(&mut NoopDelay::new(), &mut report)
            .unwrap();

        assert_eq!(readings.ambient_light.value, 300);
        assert_eq!(readings.proximity.value, 42);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Found Proximity Click board");
        assert_eq!(lines[1], "Current register status::");
        assert_eq!(lines[2], "0x80: 0x00");
        assert_eq!(lines[18], "0x90: 0x10");
        assert_eq!(lines[19], "Requesting ambient light sensor value");
        assert_eq!(lines[20], "val: 012C (300)");
        assert_eq!(lines[21], "Requesting proximity sensor value");
        assert_eq!(lines[22], "val: 002A (42)");
        assert_eq!(lines.len(), 23);
        sensor.release().done();
    }

    #[test]
    fn diagnostics_continue_after_signature_mismatch() {
        let expectations = diagnostics_session(0x11);
        let mut sensor = sensor(&expectations);
        let mut report = String::new();

        sensor
            .run_diagnostics(&mut NoopDelay::new(), &mut report)
            .unwrap();

        assert!(!report.contains("Found"));
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Current register status::");
        assert_eq!(lines.iter().filter(|l| l.starts_with("0x")).count(), 17);
        assert_eq!(lines.iter().filter(|l| l.starts_with("val: ")).count(), 2);
        assert_eq!(lines.len(), 22);
        sensor.release().done();
    }

    #[test]
    fn diagnostics_skip_failed_identification() {
        let mut expectations = diagnostics_session(0x21);
        expectations[0] = I2cTransaction::write(ADDR, vec![0x81]).with_error(ErrorKind::Other);
        expectations.remove(1);
        let mut sensor = sensor(&expectations);
        let mut report = String::new();

        sensor
            .run_diagnostics(&mut NoopDelay::new(), &mut report)
            .unwrap();

        assert!(report.starts_with("Current register status::\n"));
        sensor.release().done();
    }

    #[test]
    fn channel_conversions_match_register_map() {
        let al = Channel::AmbientLight.conversion();
        assert_eq!((al.start_command, al.ready_mask), (0x10, 0x40));
        assert_eq!(u8::from(al.result_register), 0x85);

        let ps = Channel::Proximity.conversion();
        assert_eq!((ps.start_command, ps.ready_mask), (0x08, 0x20));
        assert_eq!(u8::from(ps.result_register), 0x87);
    }

    proptest! {
        #[test]
        fn result_is_high_byte_times_256_plus_low(high: u8, low: u8) {
            let expectations = [
                I2cTransaction::write(ADDR, vec![0x87]),
                I2cTransaction::read(ADDR, vec![high, low]),
            ];
            let mut sensor = sensor(&expectations);
            let value = sensor.read_result(Register::ProximityResultHigh).unwrap();

            prop_assert_eq!(u32::from(value), u32::from(high) * 256 + u32::from(low));
            sensor.release().done();
        }
    }
}
