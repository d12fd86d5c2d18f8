use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outline drawn for a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    #[default]
    Ellipse,
    Rectangle,
    RoundedRectangle,
}

/// Whether a phase's size ratio rises or falls over its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrowthDirection {
    #[default]
    Increasing,
    Decreasing,
    /// Shape stays at the minimum screen fraction
    None,
}

bitflags! {
    /// Axes whose extent follows the time ratio
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL   = 0b10;
    }
}

/// Which axes respond to a phase's growth. The other axis is pinned to the
/// maximum screen fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisConstraint {
    Both,
    HorizontalOnly,
    #[default]
    VerticalOnly,
}

impl AxisConstraint {
    pub fn axes(self) -> Axes {
        match self {
            AxisConstraint::Both => Axes::HORIZONTAL | Axes::VERTICAL,
            AxisConstraint::HorizontalOnly => Axes::HORIZONTAL,
            AxisConstraint::VerticalOnly => Axes::VERTICAL,
        }
    }
}
