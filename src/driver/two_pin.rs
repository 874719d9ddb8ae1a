//! Two-pin PWM topology driver.
//!
//! Direction is expressed as which of the two PWM-capable pins carries the
//! duty cycle; the chip's internal H-bridge infers rotation from that
//! split. One enable pin gates all output in hardware.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::Duty;
use crate::config::{ChipKind, ChipProfile, Topology};
use crate::drive::{self, Decay, TwoPinOutput};
use crate::error::{ConfigError, DriverError, Error, Result};

use super::contract::MotorDriver;
use super::state::DriveState;

/// Motor driver for two-pin PWM chips (DRV8837, ZXBM5210, SN754410).
///
/// Generic over:
/// - `A`: anticlockwise-side PWM pin (must implement `SetDutyCycle`)
/// - `C`: clockwise-side PWM pin (must implement `SetDutyCycle`)
/// - `EN`: enable pin (must implement `OutputPin`)
pub struct TwoPinPwm<A, C, EN>
where
    A: SetDutyCycle,
    C: SetDutyCycle,
    EN: OutputPin,
{
    /// Anticlockwise-side PWM pin.
    pin_a: A,

    /// Clockwise-side PWM pin.
    pin_c: C,

    /// Enable pin, gates all output.
    enable_pin: EN,

    /// Chip drive profile (idle levels, coast capability).
    profile: ChipProfile,

    /// The chip this motor is wired to.
    chip: ChipKind,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Enable gate, mirror flag, default decay, last value.
    state: DriveState,
}

impl<A, C, EN> TwoPinPwm<A, C, EN>
where
    A: SetDutyCycle,
    C: SetDutyCycle,
    EN: OutputPin,
{
    /// Create a driver for the given chip and enable it.
    ///
    /// # Errors
    ///
    /// Returns an error if the chip is not a two-pin PWM device or if
    /// asserting the enable pin fails.
    pub fn new(pin_a: A, pin_c: C, enable_pin: EN, chip: ChipKind) -> Result<Self> {
        let profile = chip.profile();
        if profile.topology != Topology::TwoPinPwm {
            return Err(Error::Config(ConfigError::TopologyMismatch {
                chip,
                requested: Topology::TwoPinPwm,
            }));
        }

        let mut driver = Self {
            pin_a,
            pin_c,
            enable_pin,
            profile,
            chip,
            name: heapless::String::try_from(chip.name()).unwrap_or_default(),
            state: DriveState::new(false, Decay::Brake),
        };
        driver.enable()?;
        Ok(driver)
    }

    /// Create a driver for a TI DRV8837.
    pub fn drv8837(pin_a: A, pin_c: C, enable_pin: EN) -> Result<Self> {
        Self::new(pin_a, pin_c, enable_pin, ChipKind::Drv8837)
    }

    /// Create a driver for a Diodes ZXBM5210.
    pub fn zxbm5210(pin_a: A, pin_c: C, enable_pin: EN) -> Result<Self> {
        Self::new(pin_a, pin_c, enable_pin, ChipKind::Zxbm5210)
    }

    /// Create a driver for a TI SN754410. Coast drives use the brake
    /// encoding on this chip.
    pub fn sn754410(pin_a: A, pin_c: C, enable_pin: EN) -> Result<Self> {
        Self::new(pin_a, pin_c, enable_pin, ChipKind::Sn754410)
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Set the motor name (truncated to 32 chars).
    pub(crate) fn set_name(&mut self, name: &str) {
        if let Ok(name) = heapless::String::try_from(name) {
            self.name = name;
        }
    }

    /// The chip this motor is wired to.
    #[inline]
    pub fn chip(&self) -> ChipKind {
        self.chip
    }

    /// The chip drive profile.
    #[inline]
    pub fn profile(&self) -> &ChipProfile {
        &self.profile
    }

    fn drive(&mut self, value: i16, decay: Decay) -> Result<()> {
        let drive = match self.state.admit(value) {
            Some(drive) => drive,
            None => return Ok(()),
        };
        self.apply(drive::two_pin(drive, decay, &self.profile))
    }

    fn apply(&mut self, out: TwoPinOutput) -> Result<()> {
        set_duty(&mut self.pin_a, out.a)?;
        set_duty(&mut self.pin_c, out.c)?;
        Ok(())
    }
}

fn set_duty<P: SetDutyCycle>(pin: &mut P, duty: Duty) -> Result<()> {
    pin.set_duty_cycle_fraction(duty.value() as u16, Duty::FULL.value() as u16)
        .map_err(|_| DriverError::PinError.into())
}

impl<A, C, EN> MotorDriver for TwoPinPwm<A, C, EN>
where
    A: SetDutyCycle,
    C: SetDutyCycle,
    EN: OutputPin,
{
    fn enable(&mut self) -> Result<()> {
        self.enable_pin
            .set_high()
            .map_err(|_| DriverError::PinError)?;
        self.state.set_enabled(true);
        Ok(())
    }

    /// The enable pin isolates the output stage in hardware, so no
    /// software zeroing is needed here.
    fn disable(&mut self) -> Result<()> {
        self.enable_pin
            .set_low()
            .map_err(|_| DriverError::PinError)?;
        self.state.set_enabled(false);
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    fn mirror(&mut self) {
        self.state.toggle_mirrored();
    }

    fn set_mirror(&mut self, mirrored: bool) {
        self.state.set_mirrored(mirrored);
    }

    fn is_mirrored(&self) -> bool {
        self.state.is_mirrored()
    }

    fn set_default_decay(&mut self, decay: Decay) {
        self.state.set_default_decay(decay);
    }

    fn default_decay(&self) -> Decay {
        self.state.default_decay()
    }

    fn read(&self) -> i16 {
        self.state.last().value()
    }

    fn brake_to(&mut self, value: i16) -> Result<()> {
        self.drive(value, Decay::Brake)
    }

    fn brake_full(&mut self) -> Result<()> {
        self.brake_to(self.profile.brake_idle.value() as i16)
    }

    fn coast_to(&mut self, value: i16) -> Result<()> {
        self.drive(value, Decay::Coast)
    }

    fn coast_free(&mut self) -> Result<()> {
        // Coast-impaired chips have no release state; the no-arg form
        // falls back to a full brake, not a brake at zero.
        if !self.profile.mixed_decay {
            return self.brake_full();
        }
        self.coast_to(self.profile.coast_idle.value() as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testpin::{PinEvent, Trace, TracePin};

    fn drv8837_with_trace() -> (TwoPinPwm<TracePin, TracePin, TracePin>, Trace) {
        let trace = Trace::default();
        let motor = TwoPinPwm::drv8837(
            trace.pin("a"),
            trace.pin("c"),
            trace.pin("en"),
        )
        .unwrap();
        (motor, trace)
    }

    #[test]
    fn test_construction_enables() {
        let (motor, trace) = drv8837_with_trace();
        assert!(motor.is_enabled());
        assert_eq!(trace.last_for("en"), Some(PinEvent::High));
        assert_eq!(motor.read(), 0);
    }

    #[test]
    fn test_brake_duty_split() {
        let (mut motor, trace) = drv8837_with_trace();

        motor.brake_to(100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(255)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(100)));
        assert_eq!(motor.read(), 100);

        motor.brake_to(-100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(100)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(255)));
        assert_eq!(motor.read(), -100);
    }

    #[test]
    fn test_coast_encodes_inverted_and_readback_does_not() {
        let (mut motor, trace) = drv8837_with_trace();

        motor.coast_to(100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(0)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(155)));
        // The 255 - v inversion is an encoding detail; read-back reports
        // the accepted drive value.
        assert_eq!(motor.read(), 100);
    }

    #[test]
    fn test_write_follows_default_decay() {
        let (mut motor, trace) = drv8837_with_trace();

        motor.write(100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(255)));

        motor.set_default_decay(Decay::Coast);
        motor.write(100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(0)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(155)));
    }

    #[test]
    fn test_mirror_negates_input() {
        let (mut motor, trace) = drv8837_with_trace();

        motor.set_mirror(true);
        motor.brake_to(100).unwrap();
        assert_eq!(motor.read(), -100);
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(100)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(255)));

        motor.mirror();
        motor.brake_to(100).unwrap();
        assert_eq!(motor.read(), 100);
    }

    #[test]
    fn test_clamps_out_of_range() {
        let (mut motor, trace) = drv8837_with_trace();

        motor.brake_to(1000).unwrap();
        assert_eq!(motor.read(), 255);
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(255)));

        motor.brake_to(-1000).unwrap();
        assert_eq!(motor.read(), -255);
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(255)));
    }

    #[test]
    fn test_disabled_driver_is_inert() {
        let (mut motor, trace) = drv8837_with_trace();

        motor.brake_to(80).unwrap();
        motor.disable().unwrap();
        assert!(!motor.is_enabled());
        assert_eq!(trace.last_for("en"), Some(PinEvent::Low));

        let writes_before = trace.count();
        motor.brake_to(200).unwrap();
        motor.coast_to(-50).unwrap();
        motor.write(10).unwrap();
        assert_eq!(trace.count(), writes_before);
        assert_eq!(motor.read(), 80);

        motor.enable().unwrap();
        assert!(motor.is_enabled());
        assert_eq!(motor.read(), 80);
    }

    #[test]
    fn test_brake_full_and_coast_free() {
        let (mut motor, trace) = drv8837_with_trace();

        motor.brake_full().unwrap();
        assert_eq!(motor.read(), 255);
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(255)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(255)));

        motor.coast_free().unwrap();
        assert_eq!(motor.read(), 0);
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(0)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(255)));
    }

    #[test]
    fn test_sn754410_coast_brakes() {
        let trace = Trace::default();
        let mut motor =
            TwoPinPwm::sn754410(trace.pin("a"), trace.pin("c"), trace.pin("en")).unwrap();

        motor.coast_to(100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(255)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(100)));
    }

    #[test]
    fn test_sn754410_coast_free_brakes_full() {
        let trace = Trace::default();
        let mut motor =
            TwoPinPwm::sn754410(trace.pin("a"), trace.pin("c"), trace.pin("en")).unwrap();

        motor.coast_free().unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(255)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(255)));
        assert_eq!(motor.read(), 255);
    }

    #[test]
    fn test_rejects_four_wire_chip() {
        let trace = Trace::default();
        let result = TwoPinPwm::new(
            trace.pin("a"),
            trace.pin("c"),
            trace.pin("en"),
            ChipKind::Vnh5019,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::TopologyMismatch { .. }))
        ));
    }
}
