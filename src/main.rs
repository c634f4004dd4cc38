//! Farmer Harvest entry point
//!
//! Headless demo run: loads the level config, plays a few seconds of
//! scripted input and logs what the session reports. A presentation layer
//! (canvas, terminal, ...) drives `Session` the same way from its own frame
//! callback.

use std::time::{SystemTime, UNIX_EPOCH};

use farmer_harvest::input::Key;
use farmer_harvest::{LevelTable, Session};

fn main() {
    env_logger::init();

    let levels = LevelTable::load_or_default("config.json");
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = Session::new(seed, levels);
    session.start();

    // Five seconds at 60 Hz: walk right, then down
    session.key_down(Key::Right);
    for frame in 0..300u32 {
        if frame == 120 {
            session.key_up(Key::Right);
            session.key_down(Key::Down);
        }
        for event in session.frame(1.0 / 60.0) {
            log::info!("frame {frame}: {event:?}");
        }
    }

    let state = session.state();
    log::info!(
        "demo over: phase {:?}, score {}, {} crops on field, {:.1}s left",
        state.phase,
        state.score,
        state.crops.len(),
        state.time_left
    );
}
