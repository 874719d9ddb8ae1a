//! Configuration validation.

use heapless::Vec;

use crate::error::{ConfigError, Error, Result};

use super::chip::Topology;
use super::motor::MotorConfig;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Motor display names are non-empty
/// - Pin assignments match the chip topology (four-wire chips need a pwm pin)
/// - No pin number appears twice within one motor
/// - No pin number is shared between motors
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let mut claimed: Vec<u8, 32> = Vec::new();

    for (key, motor) in config.motors.iter() {
        validate_motor(key.as_str(), motor)?;

        if let Some(ref pins) = motor.pins {
            for pin in pins.numbers() {
                if claimed.contains(&pin) {
                    return Err(Error::Config(ConfigError::PinInUse(pin)));
                }
                let _ = claimed.push(pin);
            }
        }
    }

    Ok(())
}

fn validate_motor(key: &str, motor: &MotorConfig) -> Result<()> {
    if motor.name.is_empty() {
        return Err(Error::Config(ConfigError::EmptyName(
            heapless::String::try_from(key).unwrap_or_default(),
        )));
    }

    if let Some(ref pins) = motor.pins {
        match motor.topology() {
            Topology::FourWire if pins.pwm.is_none() => {
                return Err(Error::Config(ConfigError::MissingPwmPin(
                    heapless::String::try_from(key).unwrap_or_default(),
                )));
            }
            Topology::TwoPinPwm if pins.pwm.is_some() => {
                return Err(Error::Config(ConfigError::UnexpectedPwmPin(
                    heapless::String::try_from(key).unwrap_or_default(),
                )));
            }
            _ => {}
        }

        let mut seen: Vec<u8, 4> = Vec::new();
        for pin in pins.numbers() {
            if seen.contains(&pin) {
                return Err(Error::Config(ConfigError::DuplicatePin {
                    motor: heapless::String::try_from(key).unwrap_or_default(),
                    pin,
                }));
            }
            let _ = seen.push(pin);
        }
    }

    Ok(())
}
