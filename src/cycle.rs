//! The breathing cycle: four phases in a fixed ring.
//!
//! Phases live in an arena indexed by [`PhaseId`]; each holds the id of its
//! successor, wired once in [`PhaseCycle::with_settings`] as
//! Inhale -> HoldIn -> Exhale -> HoldOut -> Inhale. The ring never changes
//! shape afterwards, only phase parameters do.
//!
//! The cycle owns no timer. The host drives it:
//!
//! ```
//! use breather::PhaseCycle;
//!
//! let mut cycle = PhaseCycle::new();
//! cycle.set_screen_size(300, 300);
//!
//! // once per frame
//! cycle.tick(33);
//! let frame = cycle.render_frame(None);
//! assert!(frame.previous.is_none());
//!
//! // when the host's phase timer fires
//! if cycle.is_phase_elapsed() {
//!     cycle.advance();
//! }
//! let rearm_ms = cycle.remaining_ms();
//! # let _ = rearm_ms;
//! ```

use crate::anchor::Anchor;
use crate::error::{ConfigError, Result};
use crate::frame::{Frame, ShapeDraw};
use crate::geometry::Size;
use crate::phase::{FocusGroup, Phase, PhaseId, UserScale};
use crate::settings::{CycleSettings, PhaseSettings};

#[derive(Debug, Clone)]
pub struct PhaseCycle {
    phases: [Phase; 4],
    current: PhaseId,
    previous: Option<PhaseId>,
    screen_size: Size,
    elapsed_ms: u32,
    window_transparency: u8,
    completed_cycles: u64,
}

impl PhaseCycle {
    /// Create a cycle with [`CycleSettings::default`], starting at Inhale.
    pub fn new() -> Self {
        Self::build(&CycleSettings::default())
    }

    /// Create a cycle from a settings snapshot, rejecting invalid values.
    pub fn with_settings(settings: &CycleSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    fn build(settings: &CycleSettings) -> Self {
        let mut phases = PhaseId::ALL.map(Phase::new);
        for (i, phase) in phases.iter_mut().enumerate() {
            phase.set_next(PhaseId::ALL[(i + 1) % PhaseId::ALL.len()]);
            phase.set_direction(phase.id().default_direction());
        }

        let mut cycle = Self {
            phases,
            current: PhaseId::Inhale,
            previous: None,
            screen_size: Size::zero(),
            elapsed_ms: 0,
            window_transparency: settings.window_transparency,
            completed_cycles: 0,
        };
        cycle.write_settings(settings);
        cycle
    }

    fn write_settings(&mut self, settings: &CycleSettings) {
        for id in PhaseId::ALL {
            let PhaseSettings {
                shape,
                anchor,
                axis_constraint,
                duration_ms,
                color,
                user_scale,
            } = *settings.phase(id);

            let phase = self.phase_mut(id);
            phase.set_transparency(settings.shape_transparency);
            phase.set_color(color);
            phase.set_shape(shape);
            phase.set_anchor(anchor);
            phase.set_axis_constraint(axis_constraint);
            phase.set_duration_ms(duration_ms);
            phase.set_user_scale(user_scale);
        }
        self.window_transparency = settings.window_transparency;
    }

    /// Replace all persisted parameters. Nothing changes if any value is
    /// invalid.
    pub fn apply_settings(&mut self, settings: &CycleSettings) -> Result<()> {
        if let Err(err) = settings.validate() {
            log::warn!("Rejected settings: {}", err);
            return Err(err);
        }
        self.write_settings(settings);
        log::debug!("Applied settings to all phases");
        Ok(())
    }

    /// Snapshot of the persisted parameters. The shape transparency is read
    /// from the Inhale phase.
    pub fn settings(&self) -> CycleSettings {
        let snapshot = |id: PhaseId| {
            let phase = self.phase(id);
            PhaseSettings {
                shape: phase.shape(),
                anchor: phase.anchor(),
                axis_constraint: phase.axis_constraint(),
                duration_ms: phase.duration_ms(),
                color: phase.color().with_alpha(255),
                user_scale: phase.user_scale(),
            }
        };

        CycleSettings {
            inhale: snapshot(PhaseId::Inhale),
            hold_in: snapshot(PhaseId::HoldIn),
            exhale: snapshot(PhaseId::Exhale),
            hold_out: snapshot(PhaseId::HoldOut),
            shape_transparency: self.phase(PhaseId::Inhale).transparency(),
            window_transparency: self.window_transparency,
        }
    }

    /// Move to the next phase in the ring and restart the phase clock.
    /// Returns the new current phase.
    pub fn advance(&mut self) -> PhaseId {
        let from = self.current;
        let to = self.current().next();

        self.previous = Some(from);
        self.current = to;
        self.elapsed_ms = 0;

        if to == PhaseId::Inhale {
            self.completed_cycles += 1;
        }

        log::debug!(
            "Phase {} -> {} ({} ms), cycles completed: {}",
            from,
            to,
            self.current().duration_ms(),
            self.completed_cycles
        );
        to
    }

    /// Add `delta_ms` to the time spent in the current phase. Never
    /// advances; the host calls [`PhaseCycle::advance`] on its timeout.
    pub fn tick(&mut self, delta_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    /// Time left in the current phase, which is the delay the host should
    /// arm after [`PhaseCycle::advance`].
    pub fn remaining_ms(&self) -> u32 {
        self.current().duration_ms().saturating_sub(self.elapsed_ms)
    }

    pub fn is_phase_elapsed(&self) -> bool {
        self.elapsed_ms >= self.current().duration_ms()
    }

    /// Geometry for the current frame. Phases in the `focus` group are
    /// marked for an outline.
    ///
    /// Call [`PhaseCycle::set_screen_size`] first; with a zero screen every
    /// rectangle is empty.
    pub fn render_frame(&self, focus: Option<FocusGroup>) -> Frame {
        let screen = self.screen_size;

        let previous = self.previous().map(|phase| {
            ShapeDraw::new(phase, phase.final_rect(screen), focus)
        });
        let current = self.current();
        let current = ShapeDraw::new(
            current,
            current.shape_rect(self.elapsed_ms, screen),
            focus,
        );

        Frame {
            previous,
            current,
            screen_size: screen,
        }
    }

    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        let size = Size::new(width as f32, height as f32);
        if size != self.screen_size {
            log::info!(
                "Screen size changed: {}x{} -> {}x{}",
                self.screen_size.width,
                self.screen_size.height,
                width,
                height
            );
            if size.is_empty() {
                log::warn!("Screen size {}x{} is empty, shapes will not show", width, height);
            }
            self.screen_size = size;
        }
    }

    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    pub fn screen_centre(&self) -> (f32, f32) {
        self.screen_size.centre()
    }

    /// Set a phase's duration, rejecting zero.
    pub fn set_duration_ms(&mut self, id: PhaseId, duration_ms: u32) -> Result<()> {
        if duration_ms == 0 {
            log::warn!("Rejected zero duration for {}", id);
            return Err(ConfigError::ZeroDuration { phase: id });
        }
        self.phase_mut(id).set_duration_ms(duration_ms);
        Ok(())
    }

    /// Set a phase's screen usage bounds, requiring `0 <= min <= max <= 1`.
    pub fn set_screen_usage(&mut self, id: PhaseId, min: f32, max: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&min) || !(min..=1.0).contains(&max) {
            log::warn!("Rejected screen usage {}..{} for {}", min, max, id);
            return Err(ConfigError::InvalidScreenUsage { phase: id, min, max });
        }
        self.phase_mut(id).set_screen_usage(min, max);
        Ok(())
    }

    pub fn set_user_scale(&mut self, id: PhaseId, user_scale: UserScale) -> Result<()> {
        if !user_scale.is_valid() {
            log::warn!(
                "Rejected user scale ({}, {}) for {}",
                user_scale.x,
                user_scale.y,
                id
            );
            return Err(ConfigError::UserScaleOutOfRange {
                phase: id,
                x: user_scale.x,
                y: user_scale.y,
            });
        }
        self.phase_mut(id).set_user_scale(user_scale);
        Ok(())
    }

    /// Set the alpha of every phase shape.
    pub fn set_shape_transparency(&mut self, transparency: u8) {
        for phase in &mut self.phases {
            phase.set_transparency(transparency);
        }
    }

    pub fn set_window_transparency(&mut self, transparency: u8) {
        self.window_transparency = transparency;
    }

    pub fn window_transparency(&self) -> u8 {
        self.window_transparency
    }

    /// Window transparency as an opacity factor in `0.0..=1.0`.
    pub fn window_opacity(&self) -> f32 {
        self.window_transparency as f32 / 255.0
    }

    pub fn adjust_user_scale(&mut self, id: PhaseId, delta_x: f32, delta_y: f32) {
        self.phase_mut(id).adjust_user_scale(delta_x, delta_y);
    }

    /// Adjust the user scale of both phases in `group`.
    pub fn adjust_group_scale(&mut self, group: FocusGroup, delta_x: f32, delta_y: f32) {
        for id in group.phases() {
            self.adjust_user_scale(id, delta_x, delta_y);
        }
    }

    /// Move both phases in `group` to `anchor`.
    pub fn set_group_anchor(&mut self, group: FocusGroup, anchor: Anchor) {
        for id in group.phases() {
            self.phase_mut(id).set_anchor(anchor);
        }
        log::debug!("{:?} anchored at {:?}", group, anchor);
    }

    pub fn phase(&self, id: PhaseId) -> &Phase {
        &self.phases[id.index()]
    }

    /// Mutable access for per-field configuration. Setters on [`Phase`] do
    /// not validate; see [`PhaseCycle::set_duration_ms`].
    pub fn phase_mut(&mut self, id: PhaseId) -> &mut Phase {
        &mut self.phases[id.index()]
    }

    /// Phases in cycle order, starting at Inhale.
    pub fn phases(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }

    pub fn current(&self) -> &Phase {
        self.phase(self.current)
    }

    pub fn current_id(&self) -> PhaseId {
        self.current
    }

    pub fn previous(&self) -> Option<&Phase> {
        self.previous.map(|id| self.phase(id))
    }

    pub fn previous_id(&self) -> Option<PhaseId> {
        self.previous
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Number of times the ring has wrapped back to Inhale.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }
}

impl Default for PhaseCycle {
    fn default() -> Self {
        Self::new()
    }
}
