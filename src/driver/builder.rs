//! Builder pattern for the concrete drivers.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::{ChipKind, MotorConfig, SystemConfig};
use crate::drive::Decay;
use crate::error::{ConfigError, Error, Result};

use super::contract::MotorDriver;
use super::four_wire::FourWire;
use super::two_pin::TwoPinPwm;

/// Builder for creating [`TwoPinPwm`] instances.
pub struct TwoPinPwmBuilder<A, C, EN>
where
    A: SetDutyCycle,
    C: SetDutyCycle,
    EN: OutputPin,
{
    pin_a: Option<A>,
    pin_c: Option<C>,
    enable_pin: Option<EN>,
    chip: Option<ChipKind>,
    name: Option<heapless::String<32>>,
    mirrored: bool,
    default_decay: Decay,
}

impl<A, C, EN> Default for TwoPinPwmBuilder<A, C, EN>
where
    A: SetDutyCycle,
    C: SetDutyCycle,
    EN: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, EN> TwoPinPwmBuilder<A, C, EN>
where
    A: SetDutyCycle,
    C: SetDutyCycle,
    EN: OutputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pin_a: None,
            pin_c: None,
            enable_pin: None,
            chip: None,
            name: None,
            mirrored: false,
            default_decay: Decay::Brake,
        }
    }

    /// Set the anticlockwise-side PWM pin.
    pub fn pin_a(mut self, pin: A) -> Self {
        self.pin_a = Some(pin);
        self
    }

    /// Set the clockwise-side PWM pin.
    pub fn pin_c(mut self, pin: C) -> Self {
        self.pin_c = Some(pin);
        self
    }

    /// Set the enable pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the chip the motor is wired to.
    pub fn chip(mut self, chip: ChipKind) -> Self {
        self.chip = Some(chip);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Reverse all drive directions for this motor.
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Set the decay mode used by plain `write` calls.
    pub fn default_decay(mut self, decay: Decay) -> Self {
        self.default_decay = decay;
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.chip = Some(config.chip);
        self.mirrored = config.mirrored;
        self.default_decay = config.default_decay;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the driver. Construction asserts the enable pin.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the configured
    /// chip is not a two-pin PWM device.
    pub fn build(self) -> Result<TwoPinPwm<A, C, EN>> {
        let pin_a = self
            .pin_a
            .ok_or(Error::Config(ConfigError::MissingField("pin_a")))?;
        let pin_c = self
            .pin_c
            .ok_or(Error::Config(ConfigError::MissingField("pin_c")))?;
        let enable_pin = self
            .enable_pin
            .ok_or(Error::Config(ConfigError::MissingField("enable_pin")))?;
        let chip = self
            .chip
            .ok_or(Error::Config(ConfigError::MissingField("chip")))?;

        let mut motor = TwoPinPwm::new(pin_a, pin_c, enable_pin, chip)?;
        if let Some(ref name) = self.name {
            motor.set_name(name.as_str());
        }
        motor.set_mirror(self.mirrored);
        motor.set_default_decay(self.default_decay);
        Ok(motor)
    }
}

/// Builder for creating [`FourWire`] instances.
pub struct FourWireBuilder<A, C, P, EN>
where
    A: OutputPin + SetDutyCycle,
    C: OutputPin + SetDutyCycle,
    P: SetDutyCycle,
    EN: OutputPin,
{
    pin_a: Option<A>,
    pin_c: Option<C>,
    pin_pwm: Option<P>,
    enable_pin: Option<EN>,
    chip: Option<ChipKind>,
    name: Option<heapless::String<32>>,
    mirrored: bool,
    default_decay: Decay,
}

impl<A, C, P, EN> Default for FourWireBuilder<A, C, P, EN>
where
    A: OutputPin + SetDutyCycle,
    C: OutputPin + SetDutyCycle,
    P: SetDutyCycle,
    EN: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, P, EN> FourWireBuilder<A, C, P, EN>
where
    A: OutputPin + SetDutyCycle,
    C: OutputPin + SetDutyCycle,
    P: SetDutyCycle,
    EN: OutputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pin_a: None,
            pin_c: None,
            pin_pwm: None,
            enable_pin: None,
            chip: None,
            name: None,
            mirrored: false,
            default_decay: Decay::Brake,
        }
    }

    /// Set the anticlockwise direction pin.
    pub fn pin_a(mut self, pin: A) -> Self {
        self.pin_a = Some(pin);
        self
    }

    /// Set the clockwise direction pin.
    pub fn pin_c(mut self, pin: C) -> Self {
        self.pin_c = Some(pin);
        self
    }

    /// Set the shared PWM magnitude pin.
    pub fn pin_pwm(mut self, pin: P) -> Self {
        self.pin_pwm = Some(pin);
        self
    }

    /// Set the enable pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the chip the motor is wired to.
    pub fn chip(mut self, chip: ChipKind) -> Self {
        self.chip = Some(chip);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Reverse all drive directions for this motor.
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Set the decay mode used by plain `write` calls.
    pub fn default_decay(mut self, decay: Decay) -> Self {
        self.default_decay = decay;
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.chip = Some(config.chip);
        self.mirrored = config.mirrored;
        self.default_decay = config.default_decay;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the driver. Construction asserts the enable pin.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the configured
    /// chip is not a four-wire device.
    pub fn build(self) -> Result<FourWire<A, C, P, EN>> {
        let pin_a = self
            .pin_a
            .ok_or(Error::Config(ConfigError::MissingField("pin_a")))?;
        let pin_c = self
            .pin_c
            .ok_or(Error::Config(ConfigError::MissingField("pin_c")))?;
        let pin_pwm = self
            .pin_pwm
            .ok_or(Error::Config(ConfigError::MissingField("pin_pwm")))?;
        let enable_pin = self
            .enable_pin
            .ok_or(Error::Config(ConfigError::MissingField("enable_pin")))?;
        let chip = self
            .chip
            .ok_or(Error::Config(ConfigError::MissingField("chip")))?;

        let mut motor = FourWire::new(pin_a, pin_c, pin_pwm, enable_pin, chip)?;
        if let Some(ref name) = self.name {
            motor.set_name(name.as_str());
        }
        motor.set_mirror(self.mirrored);
        motor.set_default_decay(self.default_decay);
        Ok(motor)
    }
}
