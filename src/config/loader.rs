//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use dc_motor_drive::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChipKind;
    use crate::drive::Decay;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.left_wheel]
name = "Left Wheel"
chip = "drv8837"
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("left_wheel").unwrap();
        assert_eq!(motor.chip, ChipKind::Drv8837);
        assert_eq!(motor.default_decay, Decay::Brake);
        assert!(!motor.mirrored);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[motors.lift]
name = "Lift"
chip = "vnh5019"
mirrored = true
default_decay = "coast"

[motors.lift.pins]
a = 8
c = 9
pwm = 10
enable = 11
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("lift").unwrap();
        assert_eq!(motor.chip, ChipKind::Vnh5019);
        assert_eq!(motor.default_decay, Decay::Coast);
        assert!(motor.mirrored);
        assert_eq!(motor.pins.unwrap().pwm, Some(10));
    }

    #[test]
    fn test_parse_rejects_invalid_wiring() {
        let toml = r#"
[motors.lift]
name = "Lift"
chip = "vnh5019"

[motors.lift.pins]
a = 8
c = 9
enable = 11
"#;

        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_chip() {
        let toml = r#"
[motors.left]
name = "Left"
chip = "l298n"
"#;

        assert!(parse_config(toml).is_err());
    }
}
