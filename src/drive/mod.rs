//! Pin-drive encoding for the supported wiring topologies.
//!
//! This module is pure: given a clamped drive value, a decay mode, and a
//! chip profile, it decides which pins receive which duty-cycle or
//! logic-level writes. The drivers in [`crate::driver`] only move these
//! outputs onto embedded-hal pins.

use serde::Deserialize;

use crate::config::units::{Drive, Duty};
use crate::config::ChipProfile;

/// Duty written to the shared magnitude pin while a four-wire chip coasts.
///
/// Approximates mixed-decay behavior by holding the bridge at half duty.
/// This is a heuristic carried over from bench behavior, not a
/// datasheet-verified mode.
pub const FOUR_WIRE_COAST_DUTY: Duty = Duty::MID;

/// Decay mode applied between PWM pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decay {
    /// Short the winding between pulses: high holding torque, resists
    /// external rotation.
    #[default]
    Brake,
    /// Leave the winding floating between pulses: free rotation, smoother
    /// low-speed behavior. Also called mixed-decay.
    Coast,
}

/// Duty writes for the two pins of a [`Topology::TwoPinPwm`] chip.
///
/// [`Topology::TwoPinPwm`]: crate::config::Topology::TwoPinPwm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TwoPinOutput {
    /// Duty for the anticlockwise-side pin.
    pub a: Duty,
    /// Duty for the clockwise-side pin.
    pub c: Duty,
}

/// A single write to a direction pin of a four-wire chip.
///
/// Brake mode drives the direction pins as logic levels; coast mode drives
/// them with duty cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinAction {
    /// Logic high.
    High,
    /// Logic low.
    Low,
    /// Duty-cycle write.
    Duty(Duty),
}

/// Writes for the three signal pins of a [`Topology::FourWire`] chip.
///
/// [`Topology::FourWire`]: crate::config::Topology::FourWire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FourWireOutput {
    /// Write for the anticlockwise direction pin.
    pub a: PinAction,
    /// Write for the clockwise direction pin.
    pub c: PinAction,
    /// Duty for the shared magnitude pin.
    pub pwm: Duty,
}

/// Encode a drive value onto the two PWM pins of a two-pin chip.
///
/// The chip interprets the difference between the two duty cycles as
/// signed drive: the active side carries the magnitude while the idle side
/// is held at the decay mode's idle level.
pub fn two_pin(drive: Drive, decay: Decay, profile: &ChipProfile) -> TwoPinOutput {
    // Coast-impaired chips alias coast onto the brake encoding.
    let decay = if decay == Decay::Coast && !profile.mixed_decay {
        Decay::Brake
    } else {
        decay
    };

    match decay {
        Decay::Brake => {
            if drive.is_non_negative() {
                TwoPinOutput {
                    a: profile.brake_idle,
                    c: drive.magnitude(),
                }
            } else {
                TwoPinOutput {
                    a: drive.magnitude(),
                    c: profile.brake_idle,
                }
            }
        }
        Decay::Coast => {
            // TODO: verify the 255 - v inversion against the datasheet; the
            // sign behavior for reverse drive may be inverted from intent.
            let inverted = 255 - drive.value();
            if inverted >= 0 {
                TwoPinOutput {
                    a: profile.coast_idle,
                    c: Duty::saturating_from(inverted),
                }
            } else {
                TwoPinOutput {
                    a: Duty::saturating_from(-inverted),
                    c: profile.coast_idle,
                }
            }
        }
    }
}

/// Encode a drive value onto the direction and magnitude pins of a
/// four-wire chip.
///
/// Brake mode sets direction as logic levels (both high at zero drive for
/// a braking short) and puts the magnitude on the shared PWM pin. Coast
/// mode holds the magnitude pin at [`FOUR_WIRE_COAST_DUTY`] and modulates
/// the direction pins with inverted duty cycles.
pub fn four_wire(drive: Drive, decay: Decay) -> FourWireOutput {
    match decay {
        Decay::Brake => {
            let (a, c) = match drive.value() {
                0 => (PinAction::High, PinAction::High),
                v if v > 0 => (PinAction::High, PinAction::Low),
                _ => (PinAction::Low, PinAction::High),
            };
            FourWireOutput {
                a,
                c,
                pwm: drive.magnitude(),
            }
        }
        Decay::Coast => {
            let (a, c) = match drive.value() {
                0 => (PinAction::Duty(Duty::OFF), PinAction::Duty(Duty::OFF)),
                v if v > 0 => (
                    PinAction::Duty(Duty::saturating_from(255 - v)),
                    PinAction::Duty(Duty::OFF),
                ),
                v => (
                    PinAction::Duty(Duty::OFF),
                    PinAction::Duty(Duty::saturating_from(255 - (-v))),
                ),
            };
            FourWireOutput {
                a,
                c,
                pwm: FOUR_WIRE_COAST_DUTY,
            }
        }
    }
}
