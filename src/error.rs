//! Error types for dc-motor-drive library.
//!
//! Provides unified error handling across configuration and driver operations.

use core::fmt;

use crate::config::{ChipKind, Topology};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all dc-motor-drive operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Driver operation error
    Driver(DriverError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Motor entry has an empty display name
    EmptyName(heapless::String<32>),
    /// Configured chip does not match the requested driver topology
    TopologyMismatch {
        /// The configured chip
        chip: ChipKind,
        /// The topology the caller asked for
        requested: Topology,
    },
    /// A required builder field was not supplied
    MissingField(&'static str),
    /// Four-wire motor configured without a PWM pin number
    MissingPwmPin(heapless::String<32>),
    /// Two-pin motor configured with a PWM pin number it cannot use
    UnexpectedPwmPin(heapless::String<32>),
    /// The same pin number appears twice in one motor's assignment
    DuplicatePin {
        /// Motor entry key
        motor: heapless::String<32>,
        /// The colliding pin number
        pin: u8,
    },
    /// The same pin number is assigned to more than one motor
    PinInUse(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Driver operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    /// Pin operation failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::EmptyName(key) => write!(f, "Motor '{}' has an empty name", key),
            ConfigError::TopologyMismatch { chip, requested } => {
                write!(
                    f,
                    "Chip {} is a {} device, not {}",
                    chip,
                    chip.profile().topology,
                    requested
                )
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::MissingPwmPin(motor) => {
                write!(f, "Motor '{}' needs a pwm pin for its four-wire chip", motor)
            }
            ConfigError::UnexpectedPwmPin(motor) => {
                write!(f, "Motor '{}' has a pwm pin but its chip is two-pin", motor)
            }
            ConfigError::DuplicatePin { motor, pin } => {
                write!(f, "Motor '{}' assigns pin {} more than once", motor, pin)
            }
            ConfigError::PinInUse(pin) => {
                write!(f, "Pin {} is assigned to more than one motor", pin)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::PinError => write!(f, "pin write failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}
