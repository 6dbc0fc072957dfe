use clap::{Parser, Subcommand};
use revere::config::{self, FileConfig};
use revere::prelude::*;
use revere::{actions, feed};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default configuration file looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "revere.yml";

/// Classify dashboard notifications into badge counts and display groups
#[derive(Parser, Debug)]
#[command(name = "revere")]
#[command(about = "Classify Revere dashboard notifications")]
#[command(version)]
struct Args {
    /// YAML configuration file (default: $REVERE_CONFIG, then ./revere.yml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference time, e.g. 2026-10-17T14:30:00 (default: local wall clock)
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bell badge count (unread Urgent and Action Needed notifications)
    Badge {
        /// Notification feed (JSON array or JSON Lines); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print notifications grouped for the dropdown
    Digest {
        /// Notification feed (JSON array or JSON Lines); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Priority filter: all, urgent, action_needed, info
        #[arg(short, long)]
        priority: Option<String>,

        /// Output format: json or text
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List the mute scopes offered for a category
    MuteScopes {
        /// Category name, e.g. legislation or client_work
        category: String,
    },

    /// Print the card menu for one notification as JSON
    Actions {
        /// Notification id
        id: String,

        /// Notification feed (JSON array or JSON Lines); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn print_available_commands() {
    println!("Available commands:");
    println!("  badge        Print the bell badge count");
    println!("  digest       Print notifications grouped for the dropdown");
    println!("  mute-scopes  List the mute scopes offered for a category");
    println!("  actions      Print the card menu for one notification");
}

/// Resolve the config file: flag first, then environment variable, then ./revere.yml
fn load_file_config(flag: Option<&Path>) -> anyhow::Result<FileConfig> {
    if let Some(path) = flag {
        return Ok(config::load_config(path)?);
    }
    if let Ok(path) = std::env::var("REVERE_CONFIG") {
        return Ok(config::load_config(Path::new(&path))?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return Ok(config::load_config(default_path)?);
    }
    Ok(FileConfig::default())
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_feed(input: Option<&Path>) -> anyhow::Result<Vec<Notification>> {
    let notifications = match input {
        Some(path) => feed::load_notifications(path)?,
        None => feed::read_notifications(io::stdin().lock())?,
    };
    tracing::info!(count = notifications.len(), "read notification feed");
    Ok(notifications)
}

/// Settings for one run. Commands that ignore the file settings skip loading it,
/// so a missing or broken config file cannot fail them.
fn build_config(
    args: &Args,
    use_file: bool,
    priority: Option<&str>,
    format: Option<&str>,
) -> anyhow::Result<Config> {
    let mut builder = if use_file {
        ConfigBuilder::from_file_config(&load_file_config(args.config.as_deref())?)?
    } else {
        ConfigBuilder::new()
    };

    if let Some(now) = &args.now {
        builder = builder.now_str(now)?;
    }
    if let Some(priority) = priority {
        builder = builder.priority_filter_str(priority)?;
    }
    if let Some(format) = format {
        builder = builder.output_format_str(format)?;
    }

    Ok(builder.build()?)
}

fn run(args: Args) -> anyhow::Result<()> {
    let Some(command) = &args.command else {
        print_available_commands();
        return Ok(());
    };

    let (use_file, priority, format) = match command {
        Command::Digest {
            priority, format, ..
        } => (true, priority.as_deref(), format.as_deref()),
        Command::MuteScopes { .. } => (false, None, None),
        _ => (true, None, None),
    };
    let config = build_config(&args, use_file, priority, format)?;
    init_tracing(&config.log_level);

    match command {
        Command::Badge { input } => {
            let notifications = read_feed(input.as_deref())?;
            println!("{}", compute_badge_count(&notifications));
        }
        Command::Digest { input, .. } => {
            let notifications = read_feed(input.as_deref())?;
            let digest = Digest::build(&notifications, config.priority_filter, config.now());
            match config.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&digest)?),
                OutputFormat::Text => println!("{}", digest.render_text()),
            }
        }
        Command::MuteScopes { category } => {
            let category: Category = category.parse()?;
            for scope in mute_scopes_for(category) {
                println!("{}", scope);
            }
        }
        Command::Actions { id, input } => {
            let notifications = read_feed(input.as_deref())?;
            let notification = notifications
                .iter()
                .find(|n| n.id() == id.as_str())
                .ok_or_else(|| anyhow::anyhow!("No notification with id '{}'", id))?;
            let menu = actions::card_actions(notification, config.now());
            println!("{}", serde_json::to_string_pretty(&menu)?);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    run(Args::parse())
}
