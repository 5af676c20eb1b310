use std::path::Path;

use anyhow::{Context, Result};
use calevent_core::IcsOptions;
use owo_colors::OwoColorize;

use super::{connect, load_event};

pub async fn run(
    config_path: Option<&Path>,
    file: &Path,
    options: IcsOptions,
    output: Option<&Path>,
) -> Result<()> {
    let event = load_event(file)?;
    let conn = connect(config_path)?;

    let ics = event
        .generate_ics(&conn, Some(&options))
        .await
        .with_context(|| format!("Failed to generate ICS for {}", file.display()))?;

    match output {
        Some(path) => {
            std::fs::write(path, &ics)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), path.display());
        }
        None => print!("{ics}"),
    }
    Ok(())
}
