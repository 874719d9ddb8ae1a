//! Motor system facade for multi-motor configuration.
//!
//! Provides a high-level API for binding pins to named motor
//! configurations and tracking which motors are in use.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use heapless::{FnvIndexMap, String};

use crate::config::{ChipKind, MotorConfig, SystemConfig, Topology};
use crate::error::{ConfigError, Error, Result};

use super::builder::{FourWireBuilder, TwoPinPwmBuilder};
use super::four_wire::FourWire;
use super::two_pin::TwoPinPwm;

/// A facade for managing multiple motors from configuration.
///
/// `MotorSystem` provides a high-level API for:
/// - Looking up motor configurations by name
/// - Building drivers with their hardware pins
/// - Tracking which configured motors have been bound
///
/// # Example
///
/// ```rust,ignore
/// use dc_motor_drive::MotorSystem;
///
/// let config: SystemConfig = toml::from_str(CONFIG_TOML)?;
/// let mut system = MotorSystem::from_config(config);
///
/// // Bind motors to their hardware pins
/// let mut left = system.register_two_pin("left_wheel", pwm_a, pwm_c, en)?;
/// let mut lift = system.register_four_wire("lift", dir_a, dir_c, pwm, en)?;
/// ```
pub struct MotorSystem {
    /// The system configuration.
    config: SystemConfig,
    /// Motors that have been bound to pins (actual drivers are owned by
    /// the caller due to generic pin types).
    registered: FnvIndexMap<String<32>, ChipKind, 8>,
}

impl MotorSystem {
    /// Create a new motor system from configuration.
    pub fn from_config(config: SystemConfig) -> Self {
        Self {
            config,
            registered: FnvIndexMap::new(),
        }
    }

    /// Get the system configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Get a motor configuration by name.
    pub fn motor_config(&self, name: &str) -> Option<&MotorConfig> {
        self.config.motor(name)
    }

    /// Check if a motor name exists in the configuration.
    pub fn has_motor(&self, name: &str) -> bool {
        self.config.motor(name).is_some()
    }

    /// Wiring topology of a configured motor.
    pub fn topology(&self, name: &str) -> Option<Topology> {
        self.config.motor(name).map(MotorConfig::topology)
    }

    /// List all configured motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.config.motor_names()
    }

    /// Build a two-pin PWM driver from configuration without registering it.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor name doesn't exist or the configured
    /// chip is not a two-pin PWM device.
    pub fn build_two_pin<A, C, EN>(
        &self,
        name: &str,
        pin_a: A,
        pin_c: C,
        enable_pin: EN,
    ) -> Result<TwoPinPwm<A, C, EN>>
    where
        A: SetDutyCycle,
        C: SetDutyCycle,
        EN: OutputPin,
    {
        let motor_config = self.motor_config_or_error(name)?;
        TwoPinPwmBuilder::new()
            .pin_a(pin_a)
            .pin_c(pin_c)
            .enable_pin(enable_pin)
            .from_motor_config(motor_config)
            .build()
    }

    /// Build a four-wire driver from configuration without registering it.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor name doesn't exist or the configured
    /// chip is not a four-wire device.
    pub fn build_four_wire<A, C, P, EN>(
        &self,
        name: &str,
        pin_a: A,
        pin_c: C,
        pin_pwm: P,
        enable_pin: EN,
    ) -> Result<FourWire<A, C, P, EN>>
    where
        A: OutputPin + SetDutyCycle,
        C: OutputPin + SetDutyCycle,
        P: SetDutyCycle,
        EN: OutputPin,
    {
        let motor_config = self.motor_config_or_error(name)?;
        FourWireBuilder::new()
            .pin_a(pin_a)
            .pin_c(pin_c)
            .pin_pwm(pin_pwm)
            .enable_pin(enable_pin)
            .from_motor_config(motor_config)
            .build()
    }

    /// Build a two-pin PWM driver and mark the motor as registered.
    pub fn register_two_pin<A, C, EN>(
        &mut self,
        name: &str,
        pin_a: A,
        pin_c: C,
        enable_pin: EN,
    ) -> Result<TwoPinPwm<A, C, EN>>
    where
        A: SetDutyCycle,
        C: SetDutyCycle,
        EN: OutputPin,
    {
        let motor = self.build_two_pin(name, pin_a, pin_c, enable_pin)?;
        self.mark_registered(name, motor.chip());
        Ok(motor)
    }

    /// Build a four-wire driver and mark the motor as registered.
    pub fn register_four_wire<A, C, P, EN>(
        &mut self,
        name: &str,
        pin_a: A,
        pin_c: C,
        pin_pwm: P,
        enable_pin: EN,
    ) -> Result<FourWire<A, C, P, EN>>
    where
        A: OutputPin + SetDutyCycle,
        C: OutputPin + SetDutyCycle,
        P: SetDutyCycle,
        EN: OutputPin,
    {
        let motor = self.build_four_wire(name, pin_a, pin_c, pin_pwm, enable_pin)?;
        self.mark_registered(name, motor.chip());
        Ok(motor)
    }

    /// Check if a motor has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.iter().any(|(k, _)| k.as_str() == name)
    }

    /// Get the number of registered motors.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Get a motor configuration, with an error if not found.
    pub fn motor_config_or_error(&self, name: &str) -> Result<&MotorConfig> {
        self.config.motor(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })
    }

    fn mark_registered(&mut self, name: &str, chip: ChipKind) {
        let key: String<32> = String::try_from(name).unwrap_or_default();
        let _ = self.registered.insert(key, chip);
    }
}
