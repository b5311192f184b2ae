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
use super::Member;

/// Orders members by cumulative score, highest first. The sort is stable,
/// so tied members keep their source order.
pub fn sort_overall(members: &mut [Member]) {
    members.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Ranks members by time taken on the current day: everyone with part 2
/// by their part-2 instant, then everyone with only part 1 by their
/// part-1 instant. Members who solved neither do not appear at all.
pub fn rank_daily(members: &[Member]) -> Vec<&Member> {
    let mut ranked: Vec<&Member> = members.iter().filter(|m| m.solved_today()).collect();
    ranked.sort_by_key(|m| daily_key(m));
    ranked
}

fn daily_key(member: &Member) -> (i64, i64) {
    (
        member.part_times.1.unwrap_or(i64::MAX),
        member.part_times.0.unwrap_or(i64::MAX),
    )
}
