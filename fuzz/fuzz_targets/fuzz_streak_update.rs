//! Fuzz the streak calculator: any pair of dates and any current streak
//! must produce a coherent update without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use questline::{streak, StreakTransition, StudyDate};

fn date_from(seed: u32) -> Option<StudyDate> {
    let year = 1990 + (seed % 120) as i32;
    let month = seed / 120 % 12 + 1;
    let day = seed / 1440 % 28 + 1;
    StudyDate::from_ymd(year, month, day)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 13 {
        return;
    }

    let last = if data[0] % 2 == 0 {
        date_from(u32::from_le_bytes([data[1], data[2], data[3], data[4]]))
    } else {
        None
    };
    let Some(today) = date_from(u32::from_le_bytes([data[5], data[6], data[7], data[8]])) else {
        return;
    };
    let current = u32::from_le_bytes([data[9], data[10], data[11], data[12]]);

    let update = streak::update(last, today, current);

    match update.transition {
        StreakTransition::Started | StreakTransition::Broken => assert_eq!(update.streak, 1),
        StreakTransition::SameDay => assert_eq!(update.streak, current),
        StreakTransition::Incremented => assert_eq!(update.streak, current.saturating_add(1)),
    }
});
