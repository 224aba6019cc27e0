//! Fuzz the leveling curve: arbitrary states and deltas must never
//! panic, and the normalization invariant must hold on the way out.

#![no_main]

use libfuzzer_sys::fuzz_target;
use questline::{LevelCurve, LevelState};

fn u64_at(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = *data.get(offset + i).unwrap_or(&0);
    }
    u64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }

    let base = u64_at(data, 0) % 1_000_000 + 1;
    let growth = 1.0 + f64::from(data[32]) / 64.0;
    let curve = LevelCurve::new(base, growth);

    let state = LevelState {
        current_level: (u64_at(data, 8) % u64::from(u32::MAX)) as u32 + 1,
        total_xp: u64_at(data, 16),
        current_xp: u64_at(data, 16).min(base.saturating_sub(1)),
        next_level_xp: base,
    };
    let delta = u64_at(data, 24) % 100_000_000;

    let outcome = curve.apply(state, delta);
    assert!(outcome.state.current_xp < outcome.state.next_level_xp);
    assert!(outcome.state.current_level >= state.current_level);
});
