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
use anyhow::{bail, Context as _};
use chrono::{Datelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Image,
    Text,
}

/// Everything the invocation needs from the environment, read once at
/// startup and passed down by parameter. Rendering code never touches
/// the ENV itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub test_mode: bool,
    pub session_cookie: String,
    pub board_code: String,
    pub webhook_url: String,
    pub font_path: String,
    pub output_format: OutputFormat,
    pub event_year: i32,
    /// Hours behind UTC at which puzzles unlock (5 for US/Eastern).
    pub unlock_offset_hours: i64,
    pub test_data_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let test_mode = std::env::var("TEST_MODE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
            || std::env::args().any(|arg| arg == "--test");

        // the session cookie and board code are only needed for a live fetch
        let session_cookie = if test_mode {
            std::env::var("SESSION_COOKIE").unwrap_or_default()
        } else {
            std::env::var("SESSION_COOKIE").context("SESSION_COOKIE was not found in the ENV")?
        };
        let board_code = if test_mode {
            std::env::var("PRIVATE_LEADERBOARD_CODE").unwrap_or_default()
        } else {
            std::env::var("PRIVATE_LEADERBOARD_CODE")
                .context("PRIVATE_LEADERBOARD_CODE was not found in the ENV")?
        };

        let webhook_url =
            std::env::var("WEBHOOK_URL").context("WEBHOOK_URL was not found in the ENV")?;

        let output_format = match std::env::var("OUTPUT_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("image") => OutputFormat::Image,
            Ok(v) if v.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Ok(v) => bail!("Unsupported OUTPUT_FORMAT: {}", v),
            Err(_) => OutputFormat::Image,
        };

        let event_year = match std::env::var("EVENT_YEAR") {
            Ok(v) => v.parse().context("Failed to parse EVENT_YEAR")?,
            Err(_) => Utc::now().year(),
        };

        let unlock_offset_hours = match std::env::var("UNLOCK_OFFSET_HOURS") {
            Ok(v) => v.parse().context("Failed to parse UNLOCK_OFFSET_HOURS")?,
            Err(_) => 5,
        };

        let font_path = std::env::var("FONT_PATH")
            .unwrap_or_else(|_| "SourceCodePro-Regular.ttf".to_string());
        let test_data_path =
            std::env::var("TEST_DATA_PATH").unwrap_or_else(|_| "test_data.json".to_string());

        Ok(Self {
            test_mode,
            session_cookie,
            board_code,
            webhook_url,
            font_path,
            output_format,
            event_year,
            unlock_offset_hours,
            test_data_path,
        })
    }
}
