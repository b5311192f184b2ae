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
use std::collections::BTreeMap;

use serde::Deserialize;

/// Raw private-leaderboard JSON as served by adventofcode.com.
///
/// Members are keyed by an opaque member id. A `BTreeMap` keeps the
/// iteration order deterministic, which is what the stable sorts
/// downstream rely on for tie-breaking.
#[derive(Debug, Deserialize)]
pub struct Leaderboard {
    pub members: BTreeMap<String, RawMember>,
}

#[derive(Debug, Deserialize)]
pub struct RawMember {
    pub name: String,
    pub local_score: u32,
    /// Day number (as a string) -> part number (as a string) -> star metadata.
    /// Days with no stars are simply absent.
    #[serde(default)]
    pub completion_day_level: BTreeMap<String, BTreeMap<String, PartStar>>,
}

#[derive(Debug, Deserialize)]
pub struct PartStar {
    pub get_star_ts: i64,
}
