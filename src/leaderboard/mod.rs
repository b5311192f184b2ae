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
pub mod ranking;
pub mod stars;

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::aoc::models::Leaderboard;

pub const LAST_PUZZLE_DAY: u32 = 25;

/// How much of a day's puzzle a member has solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    None,
    FirstPart,
    BothParts,
}

impl Completion {
    fn from_part_count(parts: usize) -> Self {
        match parts {
            0 => Completion::None,
            1 => Completion::FirstPart,
            _ => Completion::BothParts,
        }
    }
}

/// A normalized leaderboard member. Built once per fetch and treated as
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub score: u32,
    /// Days with at least one star; absent days count as `Completion::None`.
    pub completion: BTreeMap<u32, Completion>,
    /// Solve instants (unix timestamps) for part 1 and part 2 of the
    /// current day, used only by the daily view.
    pub part_times: (Option<i64>, Option<i64>),
}

impl Member {
    pub fn completion_on(&self, day: u32) -> Completion {
        self.completion
            .get(&day)
            .copied()
            .unwrap_or(Completion::None)
    }

    pub fn solved_today(&self) -> bool {
        self.part_times.0.is_some() || self.part_times.1.is_some()
    }
}

/// Filters the raw leaderboard down to the fields the views need.
pub fn normalize(board: &Leaderboard, day: u32) -> Vec<Member> {
    let day_key = day.to_string();

    board
        .members
        .values()
        .map(|raw| {
            let completion = raw
                .completion_day_level
                .iter()
                .filter_map(|(day, parts)| {
                    let day: u32 = day.parse().ok()?;
                    Some((day, Completion::from_part_count(parts.len())))
                })
                .collect();

            let today = raw.completion_day_level.get(&day_key);
            let part_times = (
                today.and_then(|parts| parts.get("1")).map(|p| p.get_star_ts),
                today.and_then(|parts| parts.get("2")).map(|p| p.get_star_ts),
            );

            Member {
                name: raw.name.clone(),
                score: raw.local_score,
                completion,
                part_times,
            }
        })
        .collect()
}

/// The puzzle day a report covers: the day before the invocation date,
/// clamped to the 1..=25 range of the event.
pub fn current_puzzle_day(date: NaiveDate) -> u32 {
    date.day().saturating_sub(1).clamp(1, LAST_PUZZLE_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(json: serde_json::Value) -> Leaderboard {
        serde_json::from_value(json).expect("valid leaderboard JSON")
    }

    #[test]
    fn test_normalize_levels() {
        let board = board_from(serde_json::json!({
            "members": {
                "111": {
                    "name": "alice",
                    "local_score": 42,
                    "completion_day_level": {
                        "1": { "1": { "get_star_ts": 100 }, "2": { "get_star_ts": 200 } },
                        "3": { "1": { "get_star_ts": 300 } }
                    }
                }
            }
        }));

        let members = normalize(&board, 3);
        assert_eq!(members.len(), 1);

        let alice = &members[0];
        assert_eq!(alice.name, "alice");
        assert_eq!(alice.score, 42);
        assert_eq!(alice.completion_on(1), Completion::BothParts);
        assert_eq!(alice.completion_on(2), Completion::None);
        assert_eq!(alice.completion_on(3), Completion::FirstPart);
        // day 3 is the current day, so its part-1 time is carried over
        assert_eq!(alice.part_times, (Some(300), None));
    }

    #[test]
    fn test_unset_day_equals_explicit_none() {
        let board = board_from(serde_json::json!({
            "members": {
                "111": { "name": "bob", "local_score": 0, "completion_day_level": {} }
            }
        }));

        let members = normalize(&board, 5);
        assert_eq!(members[0].completion_on(4), Completion::None);
        assert!(!members[0].solved_today());
    }

    #[test]
    fn test_members_keep_id_order() {
        let board = board_from(serde_json::json!({
            "members": {
                "20": { "name": "second", "local_score": 1 },
                "10": { "name": "first", "local_score": 1 }
            }
        }));

        let members = normalize(&board, 1);
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_current_puzzle_day_clamps() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 12, d).expect("valid date");
        assert_eq!(current_puzzle_day(date(1)), 1);
        assert_eq!(current_puzzle_day(date(2)), 1);
        assert_eq!(current_puzzle_day(date(13)), 12);
        assert_eq!(current_puzzle_day(date(26)), 25);
        assert_eq!(current_puzzle_day(date(31)), 25);
    }
}
