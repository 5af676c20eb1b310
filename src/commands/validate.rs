use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::{describe_when, load_event};

pub fn run(file: &Path) -> Result<()> {
    let event = load_event(file)?;

    if let Err(e) = event.validate() {
        anyhow::bail!("{} {}", "Invalid event:".red(), e);
    }

    let body = event.to_wire()?;
    eprintln!("{} {}", "✓".green(), file.display());
    eprintln!("  {}", format!("when: {}", describe_when(&event)).dimmed());
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
