//! Snapshot of everything the settings store persists.
//!
//! The cycle hands out a [`CycleSettings`] via
//! [`PhaseCycle::settings`](crate::PhaseCycle::settings) and accepts one via
//! [`PhaseCycle::apply_settings`](crate::PhaseCycle::apply_settings). How the
//! snapshot is stored is up to the host; with the `serde` feature enabled all
//! fields serialize.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;
use crate::color::Color;
use crate::error::{ConfigError, Result};
use crate::phase::{AxisConstraint, PhaseId, ShapeKind, UserScale};

pub const DEFAULT_BREATH_MS: u32 = 4000;
pub const DEFAULT_HOLD_MS: u32 = 2000;
pub const DEFAULT_TRANSPARENCY: u8 = 50;

/// Persisted parameters of a single phase.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseSettings {
    pub shape: ShapeKind,
    pub anchor: Anchor,
    pub axis_constraint: AxisConstraint,
    pub duration_ms: u32,
    /// RGB fill; alpha is ignored in favour of the shape transparency
    pub color: Color,
    pub user_scale: UserScale,
}

impl PhaseSettings {
    pub fn new(duration_ms: u32, color: Color, axis_constraint: AxisConstraint) -> Self {
        Self {
            shape: ShapeKind::Ellipse,
            anchor: Anchor::TopLeft,
            axis_constraint,
            duration_ms,
            color,
            user_scale: UserScale::FULL,
        }
    }

    pub fn shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn user_scale(mut self, user_scale: UserScale) -> Self {
        self.user_scale = user_scale;
        self
    }

    pub fn validate(&self, phase: PhaseId) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration { phase });
        }
        if !self.user_scale.is_valid() {
            return Err(ConfigError::UserScaleOutOfRange {
                phase,
                x: self.user_scale.x,
                y: self.user_scale.y,
            });
        }
        Ok(())
    }
}

/// Persisted parameters of the whole cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleSettings {
    pub inhale: PhaseSettings,
    pub hold_in: PhaseSettings,
    pub exhale: PhaseSettings,
    pub hold_out: PhaseSettings,
    /// Alpha applied to every phase shape
    pub shape_transparency: u8,
    /// Alpha the host applies to its overlay window
    pub window_transparency: u8,
}

impl CycleSettings {
    pub fn phase(&self, id: PhaseId) -> &PhaseSettings {
        match id {
            PhaseId::Inhale => &self.inhale,
            PhaseId::HoldIn => &self.hold_in,
            PhaseId::Exhale => &self.exhale,
            PhaseId::HoldOut => &self.hold_out,
        }
    }

    pub fn phase_mut(&mut self, id: PhaseId) -> &mut PhaseSettings {
        match id {
            PhaseId::Inhale => &mut self.inhale,
            PhaseId::HoldIn => &mut self.hold_in,
            PhaseId::Exhale => &mut self.exhale,
            PhaseId::HoldOut => &mut self.hold_out,
        }
    }

    /// Check every phase, reporting the first invalid one in cycle order.
    pub fn validate(&self) -> Result<()> {
        PhaseId::ALL
            .iter()
            .try_for_each(|&id| self.phase(id).validate(id))
    }
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            inhale: PhaseSettings::new(
                DEFAULT_BREATH_MS,
                Color::MAGENTA,
                AxisConstraint::HorizontalOnly,
            ),
            hold_in: PhaseSettings::new(DEFAULT_HOLD_MS, Color::CYAN, AxisConstraint::VerticalOnly),
            exhale: PhaseSettings::new(
                DEFAULT_BREATH_MS,
                Color::YELLOW,
                AxisConstraint::HorizontalOnly,
            ),
            hold_out: PhaseSettings::new(
                DEFAULT_HOLD_MS,
                Color::GREEN,
                AxisConstraint::VerticalOnly,
            ),
            shape_transparency: DEFAULT_TRANSPARENCY,
            window_transparency: DEFAULT_TRANSPARENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = CycleSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.phase(PhaseId::Exhale).color, Color::YELLOW);
        assert_eq!(settings.phase(PhaseId::HoldIn).duration_ms, DEFAULT_HOLD_MS);
        assert_eq!(settings.phase(PhaseId::Inhale).anchor, Anchor::TopLeft);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut settings = CycleSettings::default();
        settings.phase_mut(PhaseId::HoldOut).duration_ms = 0;
        assert_eq!(
            settings.validate(),
            Err(ConfigError::ZeroDuration {
                phase: PhaseId::HoldOut
            })
        );
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        let mut settings = CycleSettings::default();
        settings.exhale = settings
            .exhale
            .shape(ShapeKind::Rectangle)
            .anchor(Anchor::Bottom)
            .user_scale(UserScale::new(1.5, 0.5));
        assert_eq!(settings.exhale.shape, ShapeKind::Rectangle);
        assert_eq!(settings.exhale.anchor, Anchor::Bottom);
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UserScaleOutOfRange {
                phase: PhaseId::Exhale,
                ..
            }
        ));
        assert!(err.to_string().contains("exhale"));
    }

    #[test]
    fn test_first_invalid_phase_reported() {
        let mut settings = CycleSettings::default();
        settings.hold_out.duration_ms = 0;
        settings.hold_in.duration_ms = 0;
        assert_eq!(
            settings.validate(),
            Err(ConfigError::ZeroDuration {
                phase: PhaseId::HoldIn
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_snapshot() {
        let settings = CycleSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: CycleSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
