//! Configuration module for dc-motor-drive.
//!
//! Provides types for loading and validating motor configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod chip;
#[cfg(feature = "std")]
mod loader;
mod motor;
mod system;
pub mod units;
mod validation;

pub use chip::{ChipKind, ChipProfile, Topology};
pub use motor::{MotorConfig, PinAssignment};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Drive, Duty};
