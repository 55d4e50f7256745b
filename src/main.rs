//! arena - console combat loop demo

use std::io;
use std::time::Duration;

use anyhow::Result;
use boundstr::combat::{Arena, ArenaConfig};
use boundstr::theme::Theme;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Turn-based console combat demo
#[derive(Parser, Debug)]
#[command(name = "arena", version, about = "Fight an endless supply of monsters")]
struct Args {
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Milliseconds to pause before each turn
    #[arg(long, default_value_t = 400)]
    turn_delay_ms: u64,

    /// Play a fixed number of rounds instead of prompting after each one
    #[arg(long)]
    rounds: Option<u32>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boundstr=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = ArenaConfig {
        theme: if args.no_color {
            Theme::plain()
        } else {
            Theme::colored()
        },
        pre_turn_delay: Duration::from_millis(args.turn_delay_ms),
        post_turn_delay: Duration::from_millis(args.turn_delay_ms * 2),
        max_rounds: args.rounds,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Arena::new(config).run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
