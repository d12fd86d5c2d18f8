use crate::phase::PhaseId;

/// Configuration rejected before it reaches a phase.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{phase} duration must be greater than zero")]
    ZeroDuration { phase: PhaseId },

    #[error("{phase} user scale ({x}, {y}) is outside 0.0..=1.0")]
    UserScaleOutOfRange { phase: PhaseId, x: f32, y: f32 },

    #[error("{phase} screen usage {min}..{max} must satisfy 0 <= min <= max <= 1")]
    InvalidScreenUsage { phase: PhaseId, min: f32, max: f32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
