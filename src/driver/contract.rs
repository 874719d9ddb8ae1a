//! The uniform motor driver contract.

use crate::drive::Decay;
use crate::error::Result;

/// Uniform contract over the supported wiring topologies.
///
/// Drive values are signed and saturated to `[-255, 255]`: positive spins
/// clockwise, negative anticlockwise. While a driver is disabled, every
/// drive call is a silent no-op that issues no pin writes and leaves the
/// last commanded value untouched.
pub trait MotorDriver {
    /// Assert the enable line and accept drive calls again.
    ///
    /// Does not re-drive the motor; the last commanded value is unchanged.
    fn enable(&mut self) -> Result<()>;

    /// Stop accepting drive calls and deassert the enable line.
    ///
    /// Topologies without full hardware isolation additionally force the
    /// motor to zero output before gating.
    fn disable(&mut self) -> Result<()>;

    /// Whether drive calls currently take effect.
    fn is_enabled(&self) -> bool;

    /// Toggle the mirror transform.
    fn mirror(&mut self);

    /// Set the mirror transform explicitly.
    fn set_mirror(&mut self, mirrored: bool);

    /// Whether incoming drive values are sign-inverted.
    fn is_mirrored(&self) -> bool;

    /// Select the decay mode used by [`write`](MotorDriver::write).
    fn set_default_decay(&mut self, decay: Decay);

    /// The decay mode used by [`write`](MotorDriver::write).
    fn default_decay(&self) -> Decay;

    /// Last accepted drive value, after mirroring and clamping.
    ///
    /// Zero before the first drive call. No side effect.
    fn read(&self) -> i16;

    /// Drive the motor using the default decay mode.
    fn write(&mut self, value: i16) -> Result<()> {
        match self.default_decay() {
            Decay::Coast => self.coast_to(value),
            Decay::Brake => self.brake_to(value),
        }
    }

    /// Drive the motor, shorting the winding between pulses.
    ///
    /// Pushes hard and resists external rotation.
    fn brake_to(&mut self, value: i16) -> Result<()>;

    /// Brake at the full idle level (hard stop behavior of the chip's
    /// brake encoding at full magnitude).
    fn brake_full(&mut self) -> Result<()>;

    /// Drive the motor, leaving the winding floating between pulses.
    ///
    /// Lower torque at low drive values, allows pushback under external
    /// force. Chips without true mixed-decay support fall back to the
    /// brake encoding.
    fn coast_to(&mut self, value: i16) -> Result<()>;

    /// Release the motor (soft stop): coast at the zero idle level.
    ///
    /// Chips without true mixed-decay support have no release state and
    /// fall back to a full brake.
    fn coast_free(&mut self) -> Result<()>;
}
