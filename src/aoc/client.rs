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
use std::time::Duration;

use anyhow::{anyhow, Context};
use tracing::debug;

use crate::aoc::models::Leaderboard;
use crate::config::Config;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the private leaderboard JSON, or reads it from the local
/// fixture file when running in test mode. Any failure here is fatal to
/// the invocation; there is nothing useful to render without the data.
pub async fn fetch_leaderboard(config: &Config) -> anyhow::Result<Leaderboard> {
    if config.test_mode {
        debug!("Test mode: reading leaderboard from {}", config.test_data_path);
        let raw = std::fs::read_to_string(&config.test_data_path)
            .with_context(|| format!("Failed to read test data from {}", config.test_data_path))?;
        return serde_json::from_str(&raw).context("Failed to parse the test leaderboard JSON");
    }

    let request_url = format!(
        "https://adventofcode.com/{}/leaderboard/private/view/{}.json",
        config.event_year, config.board_code
    );
    debug!("Fetching leaderboard from {}", request_url);

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build the HTTP client")?;

    let response = client
        .get(&request_url)
        .header(
            reqwest::header::COOKIE,
            format!("session={}", config.session_cookie),
        )
        .send()
        .await
        .context("Failed to request the leaderboard")?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Server responded with an error: {:?}",
            response.status()
        ));
    }

    response
        .json::<Leaderboard>()
        .await
        .context("Failed to parse the leaderboard JSON")
}
