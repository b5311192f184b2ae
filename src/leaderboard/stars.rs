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
use super::{Completion, Member};

/// A run of consecutive days sharing one completion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRun {
    pub level: Completion,
    pub len: usize,
}

/// Run-length encodes a member's star track over days 1..=`day`, so the
/// renderers emit one color change per run instead of one per day. Both
/// renderers consume this; the views must stay visually consistent.
///
/// Run lengths always sum to `day`.
pub fn star_runs(member: &Member, day: u32) -> Vec<StarRun> {
    let mut runs = Vec::new();
    let mut current: Option<StarRun> = None;

    for d in 1..=day {
        let level = member.completion_on(d);
        match &mut current {
            Some(run) if run.level == level => run.len += 1,
            slot => {
                if let Some(run) = slot.take() {
                    runs.push(run);
                }
                *slot = Some(StarRun { level, len: 1 });
            }
        }
    }

    // flush the trailing run; it never ends on a level change
    if let Some(run) = current {
        runs.push(run);
    }

    runs
}
