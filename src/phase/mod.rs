//! Breathing phases and their geometry.
//!
//! A [`Phase`] turns an elapsed time and a screen size into the rectangle its
//! shape occupies. Phases hold no clock and no screen state; both are passed
//! in by the owning [`PhaseCycle`](crate::PhaseCycle).
//!
//! ## Geometry
//!
//! For elapsed time `t` the phase computes a ratio completed `r` (see
//! [`Phase::ratio_completed`]) and interpolates a screen fraction:
//!
//! ```text
//! fraction = (max - min) * r + min
//! ```
//!
//! Axes enabled by the [`AxisConstraint`] take `screen * scale * fraction`,
//! the others `screen * scale * max`. Every axis is capped at `screen * max`,
//! which also absorbs a ratio above 1 from a late tick. The rectangle is then
//! placed according to the phase's [`Anchor`].

mod kinds;

pub use kinds::{AxisConstraint, Axes, GrowthDirection, ShapeKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;
use crate::color::Color;
use crate::geometry::{Rect, Size};

pub const DEFAULT_MIN_SCREEN_FRACTION: f32 = 0.1;
pub const DEFAULT_MAX_SCREEN_FRACTION: f32 = 0.9;
pub const DEFAULT_DURATION_MS: u32 = 4000;

/// User scale change applied per unit of adjustment (one scroll notch).
pub const USER_SCALE_STEP: f32 = 0.05;

/// Identity of one of the four breathing phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhaseId {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

impl PhaseId {
    /// All phases in cycle order.
    pub const ALL: [PhaseId; 4] = [
        PhaseId::Inhale,
        PhaseId::HoldIn,
        PhaseId::Exhale,
        PhaseId::HoldOut,
    ];

    /// Position in cycle order, used to index the phase arena.
    pub fn index(self) -> usize {
        match self {
            PhaseId::Inhale => 0,
            PhaseId::HoldIn => 1,
            PhaseId::Exhale => 2,
            PhaseId::HoldOut => 3,
        }
    }

    pub fn focus_group(self) -> FocusGroup {
        match self {
            PhaseId::Inhale | PhaseId::Exhale => FocusGroup::InhaleExhale,
            PhaseId::HoldIn | PhaseId::HoldOut => FocusGroup::HoldInOut,
        }
    }

    /// Growth direction a phase starts with: breathing in grows the shape,
    /// breathing out shrinks it.
    pub fn default_direction(self) -> GrowthDirection {
        match self {
            PhaseId::Inhale | PhaseId::HoldIn => GrowthDirection::Increasing,
            PhaseId::Exhale | PhaseId::HoldOut => GrowthDirection::Decreasing,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhaseId::Inhale => "inhale",
            PhaseId::HoldIn => "hold-in",
            PhaseId::Exhale => "exhale",
            PhaseId::HoldOut => "hold-out",
        }
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pair of phases that interactive edits address together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FocusGroup {
    InhaleExhale,
    HoldInOut,
}

impl FocusGroup {
    pub fn phases(self) -> [PhaseId; 2] {
        match self {
            FocusGroup::InhaleExhale => [PhaseId::Inhale, PhaseId::Exhale],
            FocusGroup::HoldInOut => [PhaseId::HoldIn, PhaseId::HoldOut],
        }
    }

    pub fn contains(self, id: PhaseId) -> bool {
        id.focus_group() == self
    }
}

/// Host-side focus state, cycled by the user to pick which group receives
/// scale and anchor edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Unfocused,
    InhaleExhale,
    HoldInOut,
}

impl Focus {
    /// Unfocused -> InhaleExhale -> HoldInOut -> Unfocused
    pub fn next(self) -> Self {
        match self {
            Focus::Unfocused => Focus::InhaleExhale,
            Focus::InhaleExhale => Focus::HoldInOut,
            Focus::HoldInOut => Focus::Unfocused,
        }
    }

    pub fn group(self) -> Option<FocusGroup> {
        match self {
            Focus::Unfocused => None,
            Focus::InhaleExhale => Some(FocusGroup::InhaleExhale),
            Focus::HoldInOut => Some(FocusGroup::HoldInOut),
        }
    }
}

/// Per-axis size multiplier, each axis in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserScale {
    pub x: f32,
    pub y: f32,
}

impl UserScale {
    pub const FULL: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl Default for UserScale {
    fn default() -> Self {
        Self::FULL
    }
}

/// One breathing phase: timing, shape and placement.
///
/// `duration_ms` must be non-zero. The validating setters on
/// [`PhaseCycle`](crate::PhaseCycle) enforce this; [`Phase::set_duration_ms`]
/// does not. A zero duration that slips through makes
/// [`Phase::ratio_completed`] return `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    id: PhaseId,
    duration_ms: u32,
    shape: ShapeKind,
    anchor: Anchor,
    direction: GrowthDirection,
    axis_constraint: AxisConstraint,
    color: Color,
    transparency: u8,
    user_scale: UserScale,
    min_screen_fraction: f32,
    max_screen_fraction: f32,
    next: PhaseId,
}

impl Phase {
    /// Create a phase with default parameters. The phase points at itself
    /// until a cycle wires it into the ring.
    pub fn new(id: PhaseId) -> Self {
        Self {
            id,
            duration_ms: DEFAULT_DURATION_MS,
            shape: ShapeKind::default(),
            anchor: Anchor::default(),
            direction: GrowthDirection::default(),
            axis_constraint: AxisConstraint::default(),
            color: Color::BLACK.with_alpha(0),
            transparency: 0,
            user_scale: UserScale::default(),
            min_screen_fraction: DEFAULT_MIN_SCREEN_FRACTION,
            max_screen_fraction: DEFAULT_MAX_SCREEN_FRACTION,
            next: id,
        }
    }

    pub(crate) fn set_next(&mut self, next: PhaseId) {
        self.next = next;
    }

    /// Fraction of the phase completed at `elapsed_ms`, inverted for
    /// shrinking phases.
    ///
    /// Not clamped: an elapsed time past the duration yields a value outside
    /// `0.0..=1.0`, which [`Phase::dimensions`] absorbs.
    pub fn ratio_completed(&self, elapsed_ms: u32) -> f32 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        let t = elapsed_ms as f32 / self.duration_ms as f32;
        match self.direction {
            GrowthDirection::Increasing => t,
            GrowthDirection::Decreasing => 1.0 - t,
            GrowthDirection::None => 0.0,
        }
    }

    /// Interpolated share of the screen the shape occupies on growing axes.
    pub fn screen_fraction(&self, elapsed_ms: u32) -> f32 {
        let ratio = self.ratio_completed(elapsed_ms);
        (self.max_screen_fraction - self.min_screen_fraction) * ratio + self.min_screen_fraction
    }

    pub fn dimensions(&self, elapsed_ms: u32, screen: Size) -> Size {
        let fraction = self.screen_fraction(elapsed_ms);
        let axes = self.axis_constraint.axes();
        let max = self.max_screen_fraction;

        let extent = |screen_extent: f32, scale: f32, axis: Axes| {
            let used = if axes.contains(axis) { fraction } else { max };
            // Floor at zero: a very late tick on a shrinking phase drives the
            // fraction negative.
            (screen_extent * scale * used)
                .min(screen_extent * max)
                .max(0.0)
        };

        Size::new(
            extent(screen.width, self.user_scale.x, Axes::HORIZONTAL),
            extent(screen.height, self.user_scale.y, Axes::VERTICAL),
        )
    }

    pub fn screen_centre(&self, screen: Size) -> (f32, f32) {
        screen.centre()
    }

    /// Rectangle the shape occupies at `elapsed_ms`.
    pub fn shape_rect(&self, elapsed_ms: u32, screen: Size) -> Rect {
        let dims = self.dimensions(elapsed_ms, screen);
        let min = self.min_screen_fraction;
        let x = self
            .anchor
            .horizontal()
            .resolve(screen.width, dims.width, min);
        let y = self
            .anchor
            .vertical()
            .resolve(screen.height, dims.height, min);
        Rect::from_origin((x, y), dims)
    }

    pub fn initial_rect(&self, screen: Size) -> Rect {
        self.shape_rect(0, screen)
    }

    /// Rectangle at the end of the phase; used to keep the outgoing phase
    /// on screen while the next one animates.
    pub fn final_rect(&self, screen: Size) -> Rect {
        self.shape_rect(self.duration_ms, screen)
    }

    /// Nudge the user scale by `delta * USER_SCALE_STEP` per axis, clamped
    /// to `0.0..=1.0`.
    /// Non-finite deltas leave their axis unchanged.
    pub fn adjust_user_scale(&mut self, delta_x: f32, delta_y: f32) {
        self.user_scale.x = step_scale(self.user_scale.x, delta_x);
        self.user_scale.y = step_scale(self.user_scale.y, delta_y);
        log::debug!(
            "{} user scale adjusted by ({}, {}) -> ({}, {})",
            self.id,
            delta_x,
            delta_y,
            self.user_scale.x,
            self.user_scale.y
        );
    }

    /// Set the fill color. The alpha channel is replaced by the phase's
    /// transparency.
    pub fn set_color(&mut self, color: Color) {
        self.color = color.with_alpha(self.transparency);
    }

    pub fn set_transparency(&mut self, transparency: u8) {
        self.transparency = transparency;
        self.color.a = transparency;
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    pub fn set_direction(&mut self, direction: GrowthDirection) {
        self.direction = direction;
    }

    pub fn set_axis_constraint(&mut self, axis_constraint: AxisConstraint) {
        self.axis_constraint = axis_constraint;
    }

    /// Precondition: `duration_ms > 0`.
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    pub fn set_user_scale(&mut self, user_scale: UserScale) {
        self.user_scale = user_scale;
    }

    /// Precondition: `0.0 <= min <= max <= 1.0`.
    pub fn set_screen_usage(&mut self, min: f32, max: f32) {
        self.min_screen_fraction = min;
        self.max_screen_fraction = max;
    }

    pub fn id(&self) -> PhaseId {
        self.id
    }

    pub fn next(&self) -> PhaseId {
        self.next
    }

    pub fn focus_group(&self) -> FocusGroup {
        self.id.focus_group()
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn direction(&self) -> GrowthDirection {
        self.direction
    }

    pub fn axis_constraint(&self) -> AxisConstraint {
        self.axis_constraint
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn transparency(&self) -> u8 {
        self.transparency
    }

    pub fn user_scale(&self) -> UserScale {
        self.user_scale
    }

    pub fn min_screen_fraction(&self) -> f32 {
        self.min_screen_fraction
    }

    pub fn max_screen_fraction(&self) -> f32 {
        self.max_screen_fraction
    }
}

fn step_scale(scale: f32, delta: f32) -> f32 {
    if !delta.is_finite() {
        return scale;
    }
    (scale + delta * USER_SCALE_STEP).clamp(0.0, 1.0)
}
