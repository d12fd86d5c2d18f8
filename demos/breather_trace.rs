//! Drive a cycle with a simulated 30 Hz clock and log every frame.
//!
//! Run with `RUST_LOG=debug` to also see phase transitions.
//! Optional arguments: `<width> <height> <cycles>`.

use breather::prelude::*;

const FRAME_MS: u32 = 1000 / 30;

fn parse_arg(args: &[String], index: usize, default: u32) -> u32 {
    match args.get(index) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Ignoring argument {:?}: {}", raw, err);
                default
            }
        },
        None => default,
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let width = parse_arg(&args, 1, 300);
    let height = parse_arg(&args, 2, 300);
    let cycles = parse_arg(&args, 3, 1) as u64;

    let mut cycle = PhaseCycle::new();
    cycle.set_screen_size(width, height);

    let mut focus = Focus::Unfocused;
    let mut frames = 0u64;

    while cycle.completed_cycles() < cycles {
        let frame = cycle.render_frame(focus.group());
        for shape in frame.shapes() {
            log::info!(
                "frame {:>5} {:<8} {:?} at ({:.1}, {:.1}) {:.1}x{:.1} fill {} outlined {}",
                frames,
                shape.phase.name(),
                shape.shape,
                shape.rect.x,
                shape.rect.y,
                shape.rect.width,
                shape.rect.height,
                shape.fill,
                shape.outlined
            );
        }

        cycle.tick(FRAME_MS);
        frames += 1;

        if cycle.is_phase_elapsed() {
            cycle.advance();
            // Rotate focus each phase so outlines show up in the trace
            focus = focus.next();
        }
    }

    log::info!(
        "Traced {} frames over {} cycle(s) on a {}x{} screen",
        frames,
        cycles,
        width,
        height
    );
}
