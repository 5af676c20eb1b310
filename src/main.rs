mod commands;

use std::path::PathBuf;

use anyhow::Result;
use calevent_core::{Endpoint, IcsMethod, RsvpStatus};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calevent")]
#[command(about = "Validate, save and export events against a remote scheduling service")]
struct Cli {
    /// Config file (defaults to ~/.config/calevent/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an event file and print the body that would be sent
    Validate { file: PathBuf },
    /// Create (no id) or update (with id) the event in a file
    Save {
        file: PathBuf,

        /// Query parameter to pass along, as key=value (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Override the start (unix timestamp or YYYY-MM-DD)
        #[arg(long)]
        start: Option<Endpoint>,

        /// Override the end (unix timestamp or YYYY-MM-DD)
        #[arg(long)]
        end: Option<Endpoint>,

        /// Write the service's response back into the file
        #[arg(short, long)]
        write: bool,
    },
    /// Respond to an event invitation
    Rsvp {
        event_id: String,

        /// yes, no or maybe
        status: RsvpStatus,

        #[arg(short, long, default_value = "")]
        comment: String,
    },
    /// Render an event file as ICS via the service
    Ics {
        file: PathBuf,

        /// iTIP method (request, publish, reply, add, cancel, refresh, counter, declinecounter)
        #[arg(long)]
        method: Option<IcsMethod>,

        #[arg(long)]
        ical_uid: Option<String>,

        #[arg(long)]
        prodid: Option<String>,

        /// Write the ICS text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a commented default config file
    Init,
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Save {
            file,
            params,
            start,
            end,
            write,
        } => {
            let options = commands::save::SaveOptions {
                params: &params,
                start,
                end,
                write,
            };
            commands::save::run(config_path, &file, options).await
        }
        Commands::Rsvp {
            event_id,
            status,
            comment,
        } => commands::rsvp::run(config_path, event_id, status, &comment).await,
        Commands::Ics {
            file,
            method,
            ical_uid,
            prodid,
            output,
        } => {
            let options = calevent_core::IcsOptions {
                ical_uid,
                method,
                prod_id: prodid,
            };
            commands::ics::run(config_path, &file, options, output.as_deref()).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => commands::config::init(config_path),
            ConfigCommands::Show => commands::config::show(config_path),
        },
    }
}
