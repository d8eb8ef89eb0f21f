use simd_mandelbrot::{
    controller::{Command, KEY_ZOOM_IN, WHEEL_ZOOM_OUT},
    screen::{self, Point},
    Engine, PassOutcome, Recurrence, Strategy,
};
use test_log::test;

fn engine(strategy: Strategy) -> Engine {
    Engine::builder(screen::Size::new(41, 30))
        .with_scale(12.0, 12.0)
        .with_strategy(strategy)
        .with_workers(3)
        .create()
        .unwrap()
}

#[test]
fn strategies_publish_identical_frames_through_a_session() {
    let mut scalar = engine(Strategy::Scalar);
    let mut vectorized = engine(Strategy::Vectorized);

    let session = [
        Command::Zoom {
            factor: KEY_ZOOM_IN,
            anchor: Point::new(10.0, 12.0),
        },
        Command::Pan(Point::new(-3.0, 7.5)),
        Command::AdjustCap(64),
        Command::SelectRecurrence(Recurrence::Julia),
        Command::Zoom {
            factor: WHEEL_ZOOM_OUT,
            anchor: Point::new(40.0, 0.0),
        },
        Command::AdjustCap(-1000),
    ];

    for command in session {
        scalar.submit(command);
        vectorized.submit(command);
        assert!(matches!(scalar.frame(), PassOutcome::Completed(_)));
        assert!(matches!(vectorized.frame(), PassOutcome::Completed(_)));
        assert_eq!(scalar.viewport(), vectorized.viewport());
        assert_eq!(scalar.iterations(), vectorized.iterations());
    }
    assert_eq!(scalar.viewport().iteration_cap(), 32);
}

#[test]
fn zoom_command_keeps_anchor_world_point() {
    let mut engine = engine(Strategy::Vectorized);
    let anchor = Point::new(7.0, 21.0);
    let before = engine.viewport().screen_to_world(anchor);

    engine.submit(Command::Zoom {
        factor: 1.01,
        anchor,
    });
    engine.submit(Command::Zoom {
        factor: 0.9,
        anchor,
    });
    assert_eq!(engine.apply_pending(), 2);

    let after = engine.viewport().screen_to_world(anchor);
    assert!((before.real - after.real).abs() < 1e-9);
    assert!((before.imaginary - after.imaginary).abs() < 1e-9);
}

#[test]
fn frame_bytes_cover_the_grid() {
    let mut engine = engine(Strategy::Vectorized);
    engine.frame();
    assert_eq!(engine.iterations().as_bytes().len(), 41 * 30 * 4);
    assert!(engine.diagnostics().to_string().contains("Maximum iterations: 128"));
}
