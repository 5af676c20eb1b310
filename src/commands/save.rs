use std::path::Path;

use anyhow::{Context, Result};
use calevent_core::Endpoint;
use owo_colors::OwoColorize;

use super::{connect, describe_when, event_json, load_event, parse_params, write_event};

pub struct SaveOptions<'a> {
    pub params: &'a [String],
    pub start: Option<Endpoint>,
    pub end: Option<Endpoint>,
    pub write: bool,
}

pub async fn run(config_path: Option<&Path>, file: &Path, options: SaveOptions<'_>) -> Result<()> {
    let SaveOptions {
        params,
        start,
        end,
        write,
    } = options;

    let mut event = load_event(file)?;
    if let Some(start) = start {
        event.set_start(start);
    }
    if let Some(end) = end {
        event.set_end(end);
    }
    let params = parse_params(params)?;
    let conn = connect(config_path)?;

    let action = if event.is_persisted() { "Updated" } else { "Created" };
    let query = (!params.is_empty()).then_some(&params);

    event
        .save(&conn, query)
        .await
        .with_context(|| format!("Failed to save {}", file.display()))?;

    let id = event.id.as_deref().unwrap_or("(no id)");
    eprintln!("{} {} {}", "✓".green(), action, id.bold());
    eprintln!("  {}", format!("when: {}", describe_when(&event)).dimmed());

    if write {
        write_event(file, &event)?;
        eprintln!("  {}", format!("wrote {}", file.display()).dimmed());
    } else {
        println!("{}", serde_json::to_string_pretty(&event_json(&event)?)?);
    }
    Ok(())
}
