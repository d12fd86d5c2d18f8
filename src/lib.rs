//! Phase state machine and geometry engine for a breathing-guide overlay.
//!
//! A [`PhaseCycle`] steps through inhale, hold-in, exhale and hold-out. For
//! every frame it produces a [`Frame`]: the rectangle, shape kind and fill
//! color of the current phase, plus the previous phase frozen at its final
//! size. Drawing, timers and persistence belong to the host.

pub mod anchor;
pub mod color;
pub mod cycle;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod phase;
pub mod settings;

pub use cycle::PhaseCycle;
pub use error::ConfigError;
pub use frame::{Frame, ShapeDraw};

pub mod prelude {
    pub use crate::anchor::{Anchor, Edge};
    pub use crate::color::Color;
    pub use crate::error::ConfigError;
    pub use crate::frame::{Frame, ShapeDraw};
    pub use crate::geometry::{Rect, Size};
    pub use crate::phase::{
        AxisConstraint, Focus, FocusGroup, GrowthDirection, Phase, PhaseId, ShapeKind, UserScale,
    };
    pub use crate::settings::{CycleSettings, PhaseSettings};
    pub use crate::PhaseCycle;
}
