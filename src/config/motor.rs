//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::drive::Decay;

use super::chip::{ChipKind, ChipProfile, Topology};

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Motor-driver chip the motor is wired to.
    pub chip: ChipKind,

    /// Reverse all drive directions for this motor without rewiring it.
    #[serde(default)]
    pub mirrored: bool,

    /// Decay mode used by plain `write` calls.
    #[serde(default)]
    pub default_decay: Decay,

    /// Optional physical pin numbers, for wiring documentation and
    /// validation. The pins themselves are bound at construction as
    /// embedded-hal objects.
    #[serde(default)]
    pub pins: Option<PinAssignment>,
}

impl MotorConfig {
    /// Drive profile of the configured chip.
    #[inline]
    pub fn profile(&self) -> ChipProfile {
        self.chip.profile()
    }

    /// Wiring topology of the configured chip.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.chip.profile().topology
    }
}

/// Physical pin numbers for one motor.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PinAssignment {
    /// Anticlockwise-side signal pin.
    pub a: u8,
    /// Clockwise-side signal pin.
    pub c: u8,
    /// Shared PWM magnitude pin (four-wire chips only).
    #[serde(default)]
    pub pwm: Option<u8>,
    /// Enable pin.
    pub enable: u8,
}

impl PinAssignment {
    /// Iterate over all assigned pin numbers.
    pub fn numbers(&self) -> impl Iterator<Item = u8> {
        let mut pins: heapless::Vec<u8, 4> = heapless::Vec::new();
        let _ = pins.push(self.a);
        let _ = pins.push(self.c);
        if let Some(pwm) = self.pwm {
            let _ = pins.push(pwm);
        }
        let _ = pins.push(self.enable);
        pins.into_iter()
    }
}
