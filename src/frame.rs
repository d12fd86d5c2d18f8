use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::phase::{FocusGroup, Phase, PhaseId, ShapeKind};

/// Everything a render surface needs to draw one phase shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDraw {
    pub phase: PhaseId,
    pub shape: ShapeKind,
    pub rect: Rect,
    pub fill: Color,
    /// Draw an outline around the shape; set when the phase belongs to the
    /// focused group.
    pub outlined: bool,
}

impl ShapeDraw {
    pub(crate) fn new(phase: &Phase, rect: Rect, focus: Option<FocusGroup>) -> Self {
        Self {
            phase: phase.id(),
            shape: phase.shape(),
            rect,
            fill: phase.color(),
            outlined: focus == Some(phase.focus_group()),
        }
    }
}

/// Shapes to draw for one frame, back to front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The outgoing phase frozen at its final size, absent before the first
    /// transition.
    pub previous: Option<ShapeDraw>,
    pub current: ShapeDraw,
    pub screen_size: Size,
}

impl Frame {
    /// Shapes in paint order: the outgoing shape first.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDraw> {
        self.previous.iter().chain(std::iter::once(&self.current))
    }
}
