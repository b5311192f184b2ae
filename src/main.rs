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
mod aoc;
mod config;
mod discord;
mod leaderboard;
mod render;

use anyhow::Context as _;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use config::{Config, OutputFormat};
use discord::Artifact;
use leaderboard::ranking::{rank_daily, sort_overall};

fn setup_tracing() -> anyhow::Result<()> {
    let crate_name = env!("CARGO_CRATE_NAME");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{crate_name}=info")));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout));

    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_tracing().context("Failed to setup tracing")?;

    let config = Config::from_env().context("Failed to load configuration")?;
    let day = leaderboard::current_puzzle_day(Utc::now().date_naive());
    info!("Preparing leaderboard report for day {}", day);

    let board = aoc::client::fetch_leaderboard(&config)
        .await
        .context("Failed to fetch the leaderboard")?;
    let mut members = leaderboard::normalize(&board, day);
    info!("Normalized {} members", members.len());

    let unlock_ts = render::puzzle_unlock_ts(config.event_year, day, config.unlock_offset_hours);

    match config.output_format {
        OutputFormat::Image => {
            let font = render::image::load_font(&config.font_path)
                .context("Failed to load the leaderboard font")?;

            let daily_png = {
                let ranked = rank_daily(&members);
                render::image::daily_image(&ranked, day, unlock_ts, &font)?
            };
            discord::send(
                &config.webhook_url,
                discord::USERNAME,
                Artifact::Png {
                    filename: format!("day{}_leaderboard.png", day),
                    bytes: daily_png,
                },
            )
            .await?;

            sort_overall(&mut members);
            let overall_png = render::image::overall_image(&members, day, &font)?;
            discord::send(
                &config.webhook_url,
                discord::USERNAME,
                Artifact::Png {
                    filename: format!("day{}_overall.png", day),
                    bytes: overall_png,
                },
            )
            .await?;
        }
        OutputFormat::Text => {
            let daily = {
                let ranked = rank_daily(&members);
                render::text::daily_text(&ranked, day, unlock_ts)
            };
            discord::send(&config.webhook_url, discord::USERNAME, Artifact::Message(daily)).await?;

            sort_overall(&mut members);
            let overall = render::text::overall_text(&members, day);
            discord::send(&config.webhook_url, discord::USERNAME, Artifact::Message(overall))
                .await?;
        }
    }

    info!("Leaderboard report delivered");
    Ok(())
}
