//! # dc-motor-drive
//!
//! Configuration-driven brushed DC motor driver abstraction with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Uniform contract**: One [`MotorDriver`] interface over two wiring topologies
//! - **Two-pin PWM topology**: Direction expressed as which PWM pin carries the duty
//!   (DRV8837, ZXBM5210, SN754410)
//! - **Four-wire topology**: Two direction pins plus a shared PWM magnitude pin (VNH5019)
//! - **Brake and coast decay**: Explicit brake/coast drives plus a per-motor default
//! - **Mirroring**: Per-motor sign inversion to logically reverse wiring
//! - **embedded-hal 1.0**: Uses `OutputPin` for direction/enable lines, `SetDutyCycle`
//!   for duty-cycle magnitudes
//! - **Configuration-driven**: Define motors and chip wiring in TOML files
//! - **no_std compatible**: Core library works without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dc_motor_drive::{MotorDriver, MotorSystem, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = dc_motor_drive::load_config("motors.toml")?;
//! let system = MotorSystem::from_config(config);
//!
//! // Bind embedded-hal pins to a configured motor
//! let mut motor = system.build_two_pin("left_wheel", pwm_a, pwm_c, enable_pin)?;
//!
//! // Signed drive: positive clockwise, negative anticlockwise
//! motor.write(128)?;
//! motor.brake_full()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod drive;
pub mod driver;
pub mod error;

// Re-exports for ergonomic API
pub use config::{validate_config, ChipKind, ChipProfile, MotorConfig, SystemConfig, Topology};
pub use drive::{Decay, FourWireOutput, PinAction, TwoPinOutput};
pub use driver::{FourWire, FourWireBuilder, MotorDriver, MotorSystem, TwoPinPwm, TwoPinPwmBuilder};
pub use error::{Error, Result};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Drive, Duty};
