//! Motor-driver chip identities and their drive profiles.
//!
//! The supported chips collapse to two wiring topologies; everything
//! chip-specific is carried by a small [`ChipProfile`] value instead of a
//! type per chip name.

use core::fmt;

use serde::Deserialize;

use super::units::Duty;

/// Physical pin arrangement used to interface with a motor-driver chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Topology {
    /// Two PWM-capable pins carry the duty split; the chip's internal
    /// H-bridge infers direction from which pin pulses.
    TwoPinPwm,
    /// Two binary direction pins plus one shared PWM magnitude pin.
    FourWire,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::TwoPinPwm => write!(f, "two-pin-pwm"),
            Topology::FourWire => write!(f, "four-wire"),
        }
    }
}

/// Supported motor-driver chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipKind {
    /// TI DRV8837, two-pin PWM H-bridge.
    Drv8837,
    /// Diodes ZXBM5210, two-pin PWM H-bridge.
    Zxbm5210,
    /// TI SN754410, two-pin PWM half-H driver. No distinct mixed-decay
    /// coast; coast drives fall back to the brake encoding.
    Sn754410,
    /// ST VNH5019, four-wire driver as found on Pololu dual motor shields.
    Vnh5019,
}

impl ChipKind {
    /// Get the drive profile for this chip.
    pub const fn profile(self) -> ChipProfile {
        match self {
            ChipKind::Drv8837 | ChipKind::Zxbm5210 => ChipProfile {
                topology: Topology::TwoPinPwm,
                brake_idle: Duty::FULL,
                coast_idle: Duty::OFF,
                mixed_decay: true,
            },
            ChipKind::Sn754410 => ChipProfile {
                topology: Topology::TwoPinPwm,
                brake_idle: Duty::FULL,
                coast_idle: Duty::OFF,
                mixed_decay: false,
            },
            ChipKind::Vnh5019 => ChipProfile {
                topology: Topology::FourWire,
                brake_idle: Duty::FULL,
                coast_idle: Duty::OFF,
                mixed_decay: true,
            },
        }
    }

    /// Chip name as printed on the package.
    pub const fn name(self) -> &'static str {
        match self {
            ChipKind::Drv8837 => "DRV8837",
            ChipKind::Zxbm5210 => "ZXBM5210",
            ChipKind::Sn754410 => "SN754410",
            ChipKind::Vnh5019 => "VNH5019",
        }
    }
}

impl fmt::Display for ChipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-chip drive parameters shared by all motors wired to that chip.
///
/// The idle levels are the duty values written to the inactive side of a
/// two-pin topology: holding it at full duty shorts the winding between
/// pulses (brake), holding it at zero lets the motor free-wheel (coast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipProfile {
    /// Wiring topology of the chip.
    pub topology: Topology,
    /// Duty written to the idle side while braking.
    pub brake_idle: Duty,
    /// Duty written to the idle side while coasting.
    pub coast_idle: Duty,
    /// Whether the chip supports a true mixed-decay coast. When false,
    /// coast drives use the brake encoding.
    pub mixed_decay: bool,
}
