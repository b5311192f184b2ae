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
use anyhow::Context as _;
use serenity::builder::{CreateAttachment, ExecuteWebhook};
use serenity::http::Http;
use serenity::model::webhook::Webhook;
use tracing::info;

/// Display name the webhook posts under.
pub const USERNAME: &str = "Advent of Code Leaderboard";

/// A finished render, ready for delivery.
pub enum Artifact {
    Png { filename: String, bytes: Vec<u8> },
    Message(String),
}

/// Posts one artifact to the webhook under the given display name.
/// Failures are fatal to the invocation; there is no retry.
pub async fn send(webhook_url: &str, username: &str, artifact: Artifact) -> anyhow::Result<()> {
    // no bot token needed, the webhook URL carries its own credential
    let http = Http::new("");
    let webhook = Webhook::from_url(&http, webhook_url)
        .await
        .context("Failed to resolve the webhook URL")?;

    let builder = match artifact {
        Artifact::Png { filename, bytes } => {
            info!("Posting {} ({} bytes)", filename, bytes.len());
            ExecuteWebhook::new()
                .username(username)
                .add_file(CreateAttachment::bytes(bytes, filename))
        }
        Artifact::Message(content) => {
            info!("Posting text leaderboard ({} chars)", content.chars().count());
            ExecuteWebhook::new().username(username).content(content)
        }
    };

    webhook
        .execute(&http, false, builder)
        .await
        .context("Failed to execute the webhook")?;

    Ok(())
}
