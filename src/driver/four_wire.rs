//! Four-wire topology driver.
//!
//! Two binary direction pins plus one shared PWM magnitude pin; direction
//! is set by logic levels, magnitude by the shared duty cycle. Coast mode
//! additionally modulates the direction pins with duty-cycle writes, so
//! they must be PWM-capable outputs.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::Duty;
use crate::config::{ChipKind, ChipProfile, Topology};
use crate::drive::{self, Decay, FourWireOutput, PinAction};
use crate::error::{ConfigError, DriverError, Error, Result};

use super::contract::MotorDriver;
use super::state::DriveState;

/// Motor driver for four-wire chips (VNH5019).
///
/// Generic over:
/// - `A`: anticlockwise direction pin (must implement `OutputPin` and `SetDutyCycle`)
/// - `C`: clockwise direction pin (must implement `OutputPin` and `SetDutyCycle`)
/// - `P`: shared magnitude pin (must implement `SetDutyCycle`)
/// - `EN`: enable pin (must implement `OutputPin`)
pub struct FourWire<A, C, P, EN>
where
    A: OutputPin + SetDutyCycle,
    C: OutputPin + SetDutyCycle,
    P: SetDutyCycle,
    EN: OutputPin,
{
    /// Anticlockwise direction pin.
    pin_a: A,

    /// Clockwise direction pin.
    pin_c: C,

    /// Shared PWM magnitude pin.
    pin_pwm: P,

    /// Enable pin.
    enable_pin: EN,

    /// Chip drive profile.
    profile: ChipProfile,

    /// The chip this motor is wired to.
    chip: ChipKind,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Enable gate, mirror flag, default decay, last value.
    state: DriveState,
}

impl<A, C, P, EN> FourWire<A, C, P, EN>
where
    A: OutputPin + SetDutyCycle,
    C: OutputPin + SetDutyCycle,
    P: SetDutyCycle,
    EN: OutputPin,
{
    /// Create a driver for the given chip and enable it.
    ///
    /// # Errors
    ///
    /// Returns an error if the chip is not a four-wire device or if
    /// asserting the enable pin fails.
    pub fn new(pin_a: A, pin_c: C, pin_pwm: P, enable_pin: EN, chip: ChipKind) -> Result<Self> {
        let profile = chip.profile();
        if profile.topology != Topology::FourWire {
            return Err(Error::Config(ConfigError::TopologyMismatch {
                chip,
                requested: Topology::FourWire,
            }));
        }

        let mut driver = Self {
            pin_a,
            pin_c,
            pin_pwm,
            enable_pin,
            profile,
            chip,
            name: heapless::String::try_from(chip.name()).unwrap_or_default(),
            state: DriveState::new(false, Decay::Brake),
        };
        driver.enable()?;
        Ok(driver)
    }

    /// Create a driver for an ST VNH5019, as found on Pololu dual motor
    /// driver shields.
    pub fn vnh5019(pin_a: A, pin_c: C, pin_pwm: P, enable_pin: EN) -> Result<Self> {
        Self::new(pin_a, pin_c, pin_pwm, enable_pin, ChipKind::Vnh5019)
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
        self.apply(drive::four_wire(drive, decay))
    }

    fn apply(&mut self, out: FourWireOutput) -> Result<()> {
        apply_action(&mut self.pin_a, out.a)?;
        apply_action(&mut self.pin_c, out.c)?;
        set_duty(&mut self.pin_pwm, out.pwm)?;
        Ok(())
    }
}

fn apply_action<PIN: OutputPin + SetDutyCycle>(pin: &mut PIN, action: PinAction) -> Result<()> {
    match action {
        PinAction::High => pin.set_high().map_err(|_| DriverError::PinError.into()),
        PinAction::Low => pin.set_low().map_err(|_| DriverError::PinError.into()),
        PinAction::Duty(duty) => set_duty(pin, duty),
    }
}

fn set_duty<PIN: SetDutyCycle>(pin: &mut PIN, duty: Duty) -> Result<()> {
    pin.set_duty_cycle_fraction(duty.value() as u16, Duty::FULL.value() as u16)
        .map_err(|_| DriverError::PinError.into())
}

impl<A, C, P, EN> MotorDriver for FourWire<A, C, P, EN>
where
    A: OutputPin + SetDutyCycle,
    C: OutputPin + SetDutyCycle,
    P: SetDutyCycle,
    EN: OutputPin,
{
    fn enable(&mut self) -> Result<()> {
        self.enable_pin
            .set_high()
            .map_err(|_| DriverError::PinError)?;
        self.state.set_enabled(true);
        Ok(())
    }

    /// Not all four-wire wiring variants isolate the output stage through
    /// the enable pin, so inertness is software-enforced: the motor is
    /// driven to zero output before the enable line is released.
    fn disable(&mut self) -> Result<()> {
        if self.state.is_enabled() {
            // Brake path: guarantees a zero-magnitude write on the shared
            // PWM pin even when the coast default is active.
            self.brake_to(0)?;
        }
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
        self.coast_to(self.profile.coast_idle.value() as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testpin::{PinEvent, Trace, TracePin};

    fn vnh5019_with_trace() -> (
        FourWire<TracePin, TracePin, TracePin, TracePin>,
        Trace,
    ) {
        let trace = Trace::default();
        let motor = FourWire::vnh5019(
            trace.pin("a"),
            trace.pin("c"),
            trace.pin("pwm"),
            trace.pin("en"),
        )
        .unwrap();
        (motor, trace)
    }

    #[test]
    fn test_construction_enables() {
        let (motor, trace) = vnh5019_with_trace();
        assert!(motor.is_enabled());
        assert_eq!(trace.last_for("en"), Some(PinEvent::High));
    }

    #[test]
    fn test_brake_zero_shorts_windings() {
        let (mut motor, trace) = vnh5019_with_trace();

        motor.brake_to(0).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::High));
        assert_eq!(trace.last_for("c"), Some(PinEvent::High));
        assert_eq!(trace.last_for("pwm"), Some(PinEvent::Duty(0)));
    }

    #[test]
    fn test_brake_directions() {
        let (mut motor, trace) = vnh5019_with_trace();

        motor.brake_to(200).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::High));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Low));
        assert_eq!(trace.last_for("pwm"), Some(PinEvent::Duty(200)));

        motor.brake_to(-200).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Low));
        assert_eq!(trace.last_for("c"), Some(PinEvent::High));
        assert_eq!(trace.last_for("pwm"), Some(PinEvent::Duty(200)));
    }

    #[test]
    fn test_coast_holds_mid_duty() {
        let (mut motor, trace) = vnh5019_with_trace();

        motor.coast_to(0).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(0)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(0)));
        assert_eq!(trace.last_for("pwm"), Some(PinEvent::Duty(128)));

        motor.coast_to(100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(155)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(0)));
        assert_eq!(trace.last_for("pwm"), Some(PinEvent::Duty(128)));

        motor.coast_to(-100).unwrap();
        assert_eq!(trace.last_for("a"), Some(PinEvent::Duty(0)));
        assert_eq!(trace.last_for("c"), Some(PinEvent::Duty(155)));
    }

    #[test]
    fn test_disable_zeroes_before_gating() {
        let (mut motor, trace) = vnh5019_with_trace();

        motor.set_default_decay(Decay::Coast);
        motor.coast_to(180).unwrap();
        trace.clear();

        motor.disable().unwrap();

        // The zero-magnitude write must land on the PWM pin before the
        // enable line drops, regardless of the decay default.
        let events = trace.take();
        let pwm_zero = events
            .iter()
            .position(|(pin, event)| *pin == "pwm" && *event == PinEvent::Duty(0))
            .expect("pwm must be zeroed");
        let en_low = events
            .iter()
            .position(|(pin, event)| *pin == "en" && *event == PinEvent::Low)
            .expect("enable must drop");
        assert!(pwm_zero < en_low);
        assert_eq!(motor.read(), 0);
        assert!(!motor.is_enabled());
    }

    #[test]
    fn test_disabled_driver_is_inert() {
        let (mut motor, trace) = vnh5019_with_trace();

        motor.disable().unwrap();
        trace.clear();

        motor.brake_to(120).unwrap();
        motor.coast_to(-70).unwrap();
        assert_eq!(trace.count(), 0);
        assert_eq!(motor.read(), 0);
    }

    #[test]
    fn test_mirror_reverses_direction_pins() {
        let (mut motor, trace) = vnh5019_with_trace();

        motor.set_mirror(true);
        motor.brake_to(200).unwrap();
        assert_eq!(motor.read(), -200);
        assert_eq!(trace.last_for("a"), Some(PinEvent::Low));
        assert_eq!(trace.last_for("c"), Some(PinEvent::High));
    }

    #[test]
    fn test_rejects_two_pin_chip() {
        let trace = Trace::default();
        let result = FourWire::new(
            trace.pin("a"),
            trace.pin("c"),
            trace.pin("pwm"),
            trace.pin("en"),
            ChipKind::Drv8837,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::TopologyMismatch { .. }))
        ));
    }
}
