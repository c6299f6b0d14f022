//! Synthetic walkthrough: one object enters the geofence, dwells past
//! the threshold and leaves again.
//!
//! Run with `cargo run --example dwell`.

use dwelltrack::{Detection, DwellTracker, Frame, Geofence, SceneConfig};

fn frame_at(cx: f32, cy: f32) -> Frame {
    Frame::new(
        (640, 640),
        vec![Detection::new(cx - 20., cy - 20., cx + 20., cy + 20., 0.92, 0)],
    )
}

fn main() -> dwelltrack::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let fence =
        Geofence::from_tuples(&[(100., 100.), (500., 100.), (500., 500.), (100., 500.)])?;

    let mut tracker = DwellTracker::new();
    tracker.add_scene("cam0", fence, SceneConfig::new(2))?;

    // walk in from outside the fence, dwell, then walk back out
    let path = [
        (300., 60.),
        (300., 105.),
        (300., 150.),
        (300., 150.),
        (300., 150.),
        (300., 150.),
        (300., 105.),
        (300., 60.),
    ];

    for (i, &(x, y)) in path.iter().enumerate() {
        let result = tracker.process("cam0", &frame_at(x, y))?;

        println!(
            "frame {}: {} box(es), {} alert(s)",
            i + 1,
            result.boxes.len(),
            result.alerts.len()
        );
        for alert in &result.alerts {
            println!("  -> {}", alert.message);
        }
    }

    Ok(())
}
