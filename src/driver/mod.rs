//! Motor drivers for the supported wiring topologies.
//!
//! Provides the uniform [`MotorDriver`] contract and a concrete driver per
//! topology, generic over embedded-hal 1.0 pin types.

mod builder;
mod contract;
mod four_wire;
mod state;
mod system;
#[cfg(test)]
pub(crate) mod testpin;
mod two_pin;

pub use builder::{FourWireBuilder, TwoPinPwmBuilder};
pub use contract::MotorDriver;
pub use four_wire::FourWire;
pub use system::MotorSystem;
pub use two_pin::TwoPinPwm;
