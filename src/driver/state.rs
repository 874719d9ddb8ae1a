//! Shared per-driver drive state.

use crate::config::units::Drive;
use crate::drive::Decay;

/// The mutable state every concrete driver owns.
///
/// Holds the enable gate, the mirror flag, the default decay mode, and the
/// last accepted drive value, and applies the common admission pipeline:
/// mirror-negate, saturating clamp, store.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DriveState {
    last: Drive,
    enabled: bool,
    mirrored: bool,
    default_decay: Decay,
}

impl DriveState {
    pub(crate) fn new(mirrored: bool, default_decay: Decay) -> Self {
        Self {
            last: Drive::ZERO,
            enabled: false,
            mirrored,
            default_decay,
        }
    }

    /// Run a raw drive value through the admission pipeline.
    ///
    /// Returns `None` without touching any state while disabled. Otherwise
    /// mirrors, clamps, stores, and hands back the value to encode.
    pub(crate) fn admit(&mut self, raw: i16) -> Option<Drive> {
        if !self.enabled {
            return None;
        }

        // saturating_neg: i16::MIN has no negation in i16.
        let raw = if self.mirrored { raw.saturating_neg() } else { raw };
        let drive = Drive::clamped(raw);
        self.last = drive;
        Some(drive)
    }

    #[inline]
    pub(crate) fn last(&self) -> Drive {
        self.last
    }

    #[inline]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub(crate) fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    #[inline]
    pub(crate) fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    #[inline]
    pub(crate) fn toggle_mirrored(&mut self) {
        self.mirrored = !self.mirrored;
    }

    #[inline]
    pub(crate) fn default_decay(&self) -> Decay {
        self.default_decay
    }

    #[inline]
    pub(crate) fn set_default_decay(&mut self, decay: Decay) {
        self.default_decay = decay;
    }
}
