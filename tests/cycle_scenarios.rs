use breather::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// 300x300 screen, Inhale over 4000 ms growing on both axes from the centre.
fn reference_cycle() -> PhaseCycle {
    init_logging();
    let mut cycle = PhaseCycle::new();
    cycle.set_screen_size(300, 300);
    cycle.set_duration_ms(PhaseId::Inhale, 4000).unwrap();

    let inhale = cycle.phase_mut(PhaseId::Inhale);
    inhale.set_direction(GrowthDirection::Increasing);
    inhale.set_axis_constraint(AxisConstraint::Both);
    inhale.set_anchor(Anchor::Centered);
    inhale.set_user_scale(UserScale::new(1.0, 1.0));
    cycle
}

#[test]
fn test_centered_inhale_grows_from_centre() {
    let mut cycle = reference_cycle();

    let start = cycle.render_frame(None).current.rect;
    assert!(approx_eq(start.width, 30.0));
    assert!(approx_eq(start.height, 30.0));
    assert!(approx_eq(start.x, 135.0));
    assert!(approx_eq(start.y, 135.0));

    cycle.tick(4000);
    let end = cycle.render_frame(None).current.rect;
    assert!(approx_eq(end.width, 270.0));
    assert!(approx_eq(end.height, 270.0));
    assert!(approx_eq(end.x, 15.0));
    assert!(approx_eq(end.y, 15.0));
}

#[test]
fn test_top_left_inhale_stays_pinned() {
    let mut cycle = reference_cycle();
    cycle.phase_mut(PhaseId::Inhale).set_anchor(Anchor::TopLeft);

    for _ in 0..=40 {
        let rect = cycle.render_frame(None).current.rect;
        assert!(approx_eq(rect.x, 15.0));
        assert!(approx_eq(rect.y, 15.0));
        cycle.tick(100);
    }
}

#[test]
fn test_vertical_only_keeps_width() {
    let mut cycle = reference_cycle();
    cycle
        .phase_mut(PhaseId::Inhale)
        .set_axis_constraint(AxisConstraint::VerticalOnly);

    let mut last_height = 0.0;
    for _ in 0..=8 {
        let rect = cycle.render_frame(None).current.rect;
        assert!(approx_eq(rect.width, 270.0));
        assert!(rect.height >= last_height);
        last_height = rect.height;
        cycle.tick(500);
    }
    assert!(approx_eq(last_height, 270.0));
}

#[test]
fn test_late_tick_is_clamped() {
    let mut cycle = reference_cycle();
    cycle.tick(4000 + 33 * 3);
    let rect = cycle.render_frame(None).current.rect;
    assert!(rect.width <= 270.0 + 1e-3);
    assert!(rect.height <= 270.0 + 1e-3);
}

#[test]
fn test_full_cycle_returns_to_inhale() {
    let mut cycle = reference_cycle();
    let mut seen = Vec::new();
    for _ in 0..4 {
        let remaining = cycle.remaining_ms();
        cycle.tick(remaining);
        assert!(cycle.is_phase_elapsed());
        seen.push(cycle.advance());
    }
    assert_eq!(
        seen,
        vec![
            PhaseId::HoldIn,
            PhaseId::Exhale,
            PhaseId::HoldOut,
            PhaseId::Inhale
        ]
    );
    assert_eq!(cycle.current_id(), PhaseId::Inhale);
    assert_eq!(cycle.completed_cycles(), 1);
}

#[test]
fn test_exhale_starts_where_it_is_largest() {
    let mut cycle = reference_cycle();
    cycle.advance();
    cycle.advance();
    assert_eq!(cycle.current_id(), PhaseId::Exhale);

    let exhale = cycle.current();
    let screen = cycle.screen_size();
    let start = exhale.initial_rect(screen);
    let end = exhale.final_rect(screen);
    assert!(start.width > end.width);
    assert!(approx_eq(exhale.ratio_completed(0), 1.0));
    assert!(approx_eq(exhale.ratio_completed(exhale.duration_ms()), 0.0));
}

#[test]
fn test_focus_drives_outlines_and_group_edits() {
    let mut cycle = reference_cycle();
    let focus = Focus::Unfocused.next();
    let group = focus.group().unwrap();
    assert_eq!(group, FocusGroup::InhaleExhale);

    for _ in 0..100 {
        cycle.adjust_group_scale(group, 1.0, -1.0);
    }
    for id in group.phases() {
        let scale = cycle.phase(id).user_scale();
        assert_eq!(scale.x, 1.0);
        assert_eq!(scale.y, 0.0);
    }

    let frame = cycle.render_frame(focus.group());
    assert!(frame.current.outlined);
    assert!(approx_eq(frame.current.rect.height, 0.0));
}

#[test]
fn test_zero_duration_never_reaches_phase() {
    let mut cycle = reference_cycle();
    let err = cycle.set_duration_ms(PhaseId::HoldIn, 0).unwrap_err();
    assert_eq!(
        err,
        ConfigError::ZeroDuration {
            phase: PhaseId::HoldIn
        }
    );
    assert!(cycle.phase(PhaseId::HoldIn).duration_ms() > 0);
}

#[test]
fn test_resize_rescales_geometry() {
    let mut cycle = reference_cycle();
    let small = cycle.render_frame(None).current.rect;
    cycle.set_screen_size(600, 600);
    let large = cycle.render_frame(None).current.rect;
    assert!(approx_eq(large.width, small.width * 2.0));
    assert!(approx_eq(large.x, small.x * 2.0));
}
