use std::path::Path;

use anyhow::{Context, Result};
use calevent_core::{Event, RsvpStatus};
use owo_colors::OwoColorize;

use super::{connect, event_json};

pub async fn run(
    config_path: Option<&Path>,
    event_id: String,
    status: RsvpStatus,
    comment: &str,
) -> Result<()> {
    let conn = connect(config_path)?;

    let mut event = Event {
        id: Some(event_id),
        ..Default::default()
    };

    event
        .rsvp(&conn, status, comment)
        .await
        .context("Failed to send RSVP")?;

    eprintln!("{} RSVP sent", "✓".green());
    println!("{}", serde_json::to_string_pretty(&event_json(&event)?)?);
    Ok(())
}
