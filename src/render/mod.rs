/*
AoC Herald: A Discord webhook herald for Advent of Code private leaderboards.
Copyright (C) 2024 AoC Herald contributors

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
pub mod image;
pub mod text;

use chrono::{TimeZone, Utc};

use crate::leaderboard::Completion;

// One character cell in the raster views.
pub const FONT_WIDTH: u32 = 8;
pub const FONT_HEIGHT: u32 = 20;
pub const FONT_SIZE: f32 = 14.0;

pub type Rgb = [u8; 3];

pub const BG: Rgb = [15, 15, 35];
pub const WHITE: Rgb = [204, 204, 204];
pub const GREEN: Rgb = [0, 153, 0];
pub const GREY: Rgb = [51, 51, 51];
pub const GOLD: Rgb = [255, 255, 102];
pub const SILVER: Rgb = [153, 153, 204];

// Base column of the day-number header; day N's digits sit at
// DAY_HEADER_COL + N in both renderers.
pub const DAY_HEADER_COL: usize = 8;

// Column layout for the overall view. The star track sits between the
// rank/score block and the name column; scores up to four digits fit.
pub const OVERALL_STARS_COL: usize = 10;
pub const OVERALL_NAME_COL: usize = 35;
pub const OVERALL_BASE_WIDTH: usize = 36;
pub const OVERALL_HEADER_ROWS: usize = 3;

// Column layout for the daily view.
pub const DAILY_PART1_COL: usize = 8;
pub const DAILY_PART2_COL: usize = 19;
pub const DAILY_NAME_COL: usize = 31;
pub const DAILY_BASE_WIDTH: usize = 32;
pub const DAILY_HEADER_ROWS: usize = 3;

// Fixed fallback canvas when nobody has solved the day's puzzle yet.
pub const NO_SOLUTIONS_WIDTH: usize = 51;
pub const NO_SOLUTIONS_HEIGHT: usize = 4;

pub fn star_rgb(level: Completion) -> Rgb {
    match level {
        Completion::None => GREY,
        Completion::FirstPart => SILVER,
        Completion::BothParts => GOLD,
    }
}

/// Unix timestamp at which the given day's puzzle unlocks: midnight of
/// Dec `day` in a timezone `offset_hours` behind UTC.
pub fn puzzle_unlock_ts(year: i32, day: u32, offset_hours: i64) -> i64 {
    let midnight_utc = Utc
        .with_ymd_and_hms(year, 12, day, 0, 0, 0)
        .single()
        .expect("Valid datetime must be created");
    midnight_utc.timestamp() + offset_hours * 3600
}

/// Formats a star timestamp as the HH:MM:SS elapsed since the puzzle
/// unlocked, or "N/A" when the part is unsolved.
pub fn format_solve_time(star_ts: Option<i64>, unlock_ts: i64) -> String {
    match star_ts {
        Some(ts) => {
            let elapsed = (ts - unlock_ts).max(0);
            format!(
                "{:02}:{:02}:{:02}",
                elapsed / 3600,
                (elapsed % 3600) / 60,
                elapsed % 60
            )
        }
        None => "N/A".to_string(),
    }
}

/// Length of a display string in character cells.
pub fn cell_len(text: &str) -> usize {
    text.chars().count()
}

/// Longest name in a ranked set, in cells. Callers must handle the empty
/// set before asking for a width.
pub fn max_name_len<'a, I>(members: I) -> usize
where
    I: IntoIterator<Item = &'a crate::leaderboard::Member>,
{
    members
        .into_iter()
        .map(|m| cell_len(&m.name))
        .max()
        .unwrap_or(0)
}
