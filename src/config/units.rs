//! Unit types for drive values and duty cycles.
//!
//! Provides type-safe representations of the signed drive value and the
//! 8-bit duty-cycle magnitude to prevent range confusion at compile time.

use core::fmt;

/// Signed drive value, saturated to `[-255, 255]`.
///
/// Positive values rotate clockwise, negative values anticlockwise,
/// zero is stopped. Construct with [`Drive::clamped`] to enforce the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Drive(i16);

impl Drive {
    /// Full-scale clockwise drive.
    pub const MAX: Drive = Drive(255);

    /// Full-scale anticlockwise drive.
    pub const MIN: Drive = Drive(-255);

    /// Zero drive.
    pub const ZERO: Drive = Drive(0);

    /// Create a drive value, saturating out-of-range input to the nearest bound.
    #[inline]
    pub const fn clamped(raw: i16) -> Self {
        Self(if raw > 255 {
            255
        } else if raw < -255 {
            -255
        } else {
            raw
        })
    }

    /// Get the raw signed value.
    #[inline]
    pub const fn value(self) -> i16 {
        self.0
    }

    /// Get the magnitude as an 8-bit duty.
    #[inline]
    pub const fn magnitude(self) -> Duty {
        Duty(self.0.unsigned_abs() as u8)
    }

    /// Whether the value drives clockwise or is stopped.
    #[inline]
    pub const fn is_non_negative(self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Duty-cycle magnitude in the 8-bit Arduino-compatible domain `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duty(u8);

impl Duty {
    /// Fully on (100% duty).
    pub const FULL: Duty = Duty(255);

    /// Fully off (0% duty).
    pub const OFF: Duty = Duty(0);

    /// Mid-scale duty (50%).
    pub const MID: Duty = Duty(128);

    /// Create a duty value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Create a duty from a wider intermediate, saturating above 255 and below 0.
    #[inline]
    pub const fn saturating_from(value: i16) -> Self {
        Self(if value > 255 {
            255
        } else if value < 0 {
            0
        } else {
            value as u8
        })
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Duty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
