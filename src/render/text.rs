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
//! ANSI text renditions of the two views, wrapped in a Discord `ansi`
//! code block. Same column model as the raster views, with SGR escapes
//! standing in for pixel colors.

use crate::leaderboard::{stars::star_runs, Completion, Member, LAST_PUZZLE_DAY};

use super::{
    cell_len, format_solve_time, max_name_len, DAILY_BASE_WIDTH, DAILY_PART1_COL, DAY_HEADER_COL,
    NO_SOLUTIONS_WIDTH, OVERALL_BASE_WIDTH, OVERALL_NAME_COL, OVERALL_STARS_COL,
};

/// Discord's hard message limit; the closing fence is reserved out of it.
pub const MESSAGE_BUDGET: usize = 2000;

const BLOCK_OPEN: &str = "```ansi\n";
const BLOCK_CLOSE: &str = "```";

const RESET: &str = "\u{1b}[0m";
const ANSI_GREY: &str = "\u{1b}[30m";
const ANSI_GREEN: &str = "\u{1b}[32m";
const ANSI_GOLD: &str = "\u{1b}[33m";
const ANSI_SILVER: &str = "\u{1b}[37m";

fn star_ansi(level: Completion) -> &'static str {
    match level {
        Completion::None => ANSI_GREY,
        Completion::FirstPart => ANSI_SILVER,
        Completion::BothParts => ANSI_GOLD,
    }
}

/// Renders the overall ranking as an ANSI message.
pub fn overall_text(ranked: &[Member], day: u32) -> String {
    let width = OVERALL_BASE_WIDTH + max_name_len(ranked);

    let mut out = String::from(BLOCK_OPEN);
    out.push_str(&centered("Overall Leaderboard", width));
    out.push('\n');

    let (tens, units) = day_header_lines(day);
    out.push_str(&tens);
    out.push('\n');
    out.push_str(&units);
    out.push('\n');

    let rows = ranked
        .iter()
        .enumerate()
        .map(|(i, member)| overall_row(i + 1, member, day));
    finish_with_budget(out, rows)
}

/// Renders the current-day ranking as an ANSI message, falling back to a
/// "no solutions" block when nobody qualifies.
pub fn daily_text(ranked: &[&Member], day: u32, unlock_ts: i64) -> String {
    let title = format!("Leaderboard for Day {}", day);
    let mut out = String::from(BLOCK_OPEN);

    if ranked.is_empty() {
        out.push_str(&centered(&title, NO_SOLUTIONS_WIDTH));
        out.push_str("\n\n");
        out.push_str(&centered(
            &format!("No one solved Day {} :(", day),
            NO_SOLUTIONS_WIDTH,
        ));
        out.push('\n');
        out.push_str(BLOCK_CLOSE);
        return out;
    }

    let width = DAILY_BASE_WIDTH + max_name_len(ranked.iter().copied());
    out.push_str(&centered(&title, width));
    out.push('\n');
    out.push_str(&format!(
        "{}{}-Part 1-   {}-Part 2-{}\n",
        " ".repeat(DAILY_PART1_COL),
        ANSI_SILVER,
        ANSI_GOLD,
        RESET
    ));
    out.push_str(&format!(
        "{}{}Time       {}Time{}\n",
        " ".repeat(DAILY_PART1_COL + 4),
        ANSI_SILVER,
        ANSI_GOLD,
        RESET
    ));

    let rows = ranked
        .iter()
        .enumerate()
        .map(|(i, member)| daily_row(i + 1, member, unlock_ts));
    finish_with_budget(out, rows)
}

/// Appends ranked rows until the next one would blow the message budget,
/// then closes the block. Dropped rows are always the trailing ones.
fn finish_with_budget(mut out: String, rows: impl Iterator<Item = String>) -> String {
    for row in rows {
        if cell_len(&out) + cell_len(&row) + BLOCK_CLOSE.len() > MESSAGE_BUDGET {
            break;
        }
        out.push_str(&row);
    }
    out.push_str(BLOCK_CLOSE);
    out
}

fn overall_row(rank: usize, member: &Member, day: u32) -> String {
    let mut row = format!(" {:>2}) {:>4} ", rank, member.score);

    for run in star_runs(member, day) {
        row.push_str(star_ansi(run.level));
        row.push_str(&"*".repeat(run.len));
    }
    row.push_str(RESET);

    let pad = OVERALL_NAME_COL.saturating_sub(OVERALL_STARS_COL + day as usize);
    row.push_str(&" ".repeat(pad));
    row.push_str(&member.name);
    row.push('\n');
    row
}

fn daily_row(rank: usize, member: &Member, unlock_ts: i64) -> String {
    format!(
        " {:>2})    {:>8}   {:>8}    {}\n",
        rank,
        format_solve_time(member.part_times.0, unlock_ts),
        format_solve_time(member.part_times.1, unlock_ts),
        member.name
    )
}

/// Tens digits above units digits for days 1..=25, green until the
/// current day and grey after it, mirroring the raster header.
fn day_header_lines(day: u32) -> (String, String) {
    let mut tens = " ".repeat(DAY_HEADER_COL + 1);
    let mut units = tens.clone();
    tens.push_str(ANSI_GREEN);
    units.push_str(ANSI_GREEN);

    for day_num in 1..=LAST_PUZZLE_DAY {
        if day_num >= 10 {
            tens.push_str(&(day_num / 10).to_string());
        } else {
            tens.push(' ');
        }
        units.push_str(&(day_num % 10).to_string());
        if day_num == day {
            tens.push_str(ANSI_GREY);
            units.push_str(ANSI_GREY);
        }
    }

    tens.push_str(RESET);
    units.push_str(RESET);
    (tens, units)
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(cell_len(text)) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn member(name: &str, score: u32, part_times: (Option<i64>, Option<i64>)) -> Member {
        Member {
            name: name.to_string(),
            score,
            completion: BTreeMap::new(),
            part_times,
        }
    }

    /// Visible text with the SGR escapes removed.
    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for esc in chars.by_ref() {
                    if esc == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered("abcd", 10), "   abcd");
        assert_eq!(centered("too wide for the box", 4), "too wide for the box");
    }

    #[test]
    fn test_overall_is_a_closed_ansi_block() {
        let members = vec![member("alice", 100, (None, None))];
        let out = overall_text(&members, 3);

        assert!(out.starts_with("```ansi\n"));
        assert!(out.ends_with("```"));
    }

    #[test]
    fn test_overall_name_column_alignment() {
        let members = vec![member("alice", 100, (None, None))];
        let out = overall_text(&members, 3);

        let plain = strip_ansi(&out);
        let row = plain
            .lines()
            .find(|line| line.contains("alice"))
            .expect("member row present");
        assert_eq!(row.find("alice"), Some(OVERALL_NAME_COL));
        assert!(row.starts_with("  1)  100 "));
    }

    #[test]
    fn test_overall_star_colors_follow_runs() {
        let mut solver = member("bob", 10, (None, None));
        solver.completion.insert(1, Completion::BothParts);
        solver.completion.insert(2, Completion::BothParts);
        solver.completion.insert(3, Completion::FirstPart);

        let out = overall_text(&[solver], 4);
        // gold run of two, silver run of one, grey run of one
        assert!(out.contains("\u{1b}[33m**\u{1b}[37m*\u{1b}[30m*"));
    }

    #[test]
    fn test_budget_truncates_trailing_rows_only() {
        let members: Vec<Member> = (0..120)
            .map(|i| member(&format!("member_with_a_long_name_{:03}", i), 100, (None, None)))
            .collect();
        let out = overall_text(&members, 25);

        assert!(out.chars().count() <= MESSAGE_BUDGET);
        assert!(out.ends_with("```"));

        // survivors are exactly the top of the ranking, in order
        let included: Vec<usize> = (0..120)
            .filter(|i| out.contains(&format!("member_with_a_long_name_{:03}", i)))
            .collect();
        assert!(!included.is_empty());
        assert!(included.len() < 120);
        assert_eq!(included, (0..included.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_daily_rows_and_times() {
        let unlock = 1_000_000;
        let solved_both = member("speedy", 0, (Some(unlock + 60), Some(unlock + 3600)));
        let solved_one = member("halfway", 0, (Some(unlock + 120), None));
        let ranked = vec![&solved_both, &solved_one];

        let out = daily_text(&ranked, 7, unlock);
        let plain = strip_ansi(&out);

        let first = plain.lines().find(|l| l.contains("speedy")).expect("row");
        assert!(first.contains("00:01:00"));
        assert!(first.contains("01:00:00"));

        let second = plain.lines().find(|l| l.contains("halfway")).expect("row");
        assert!(second.contains("00:02:00"));
        assert!(second.contains("N/A"));
    }

    #[test]
    fn test_daily_empty_renders_no_solutions_block() {
        let out = daily_text(&[], 9, 0);

        assert!(out.starts_with("```ansi\n"));
        assert!(out.contains("Leaderboard for Day 9"));
        assert!(out.contains("No one solved Day 9 :("));
        assert!(out.ends_with("```"));
    }

    #[test]
    fn test_day_header_recolors_at_current_day() {
        let (_, units) = day_header_lines(3);
        // green for days 1-3, grey from day 4 on
        assert!(units.contains("\u{1b}[32m123\u{1b}[30m456"));
    }

    #[test]
    fn test_day_header_starts_at_its_base_column() {
        let (tens, units) = day_header_lines(12);
        // day 1's digit lands at DAY_HEADER_COL + 1 in both lines
        assert_eq!(strip_ansi(&units).find('1'), Some(DAY_HEADER_COL + 1));
        assert_eq!(strip_ansi(&tens).find('1'), Some(DAY_HEADER_COL + 10));
    }
}
