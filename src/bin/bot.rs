//! Conquest Bot Binary
//!
//! Connects to the game server, registers a player and plays its turns.

use std::sync::Arc;

use clap::Parser;
use conquest::strategy::StrategyKind;
use conquest::{Client, Color, Config, TurnController};
use tracing_subscriber::{fmt, EnvFilter};

/// Conquest Bot
#[derive(Parser, Debug)]
#[command(name = "conquest-bot")]
#[command(about = "Plays a territory-conquest game over the server's text protocol")]
#[command(version)]
struct Args {
    /// Game server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:1234")]
    server: String,

    /// Player name to register
    #[arg(short, long, default_value = "Conquest Bot")]
    name: String,

    /// Player colour, red component
    #[arg(long, default_value = "252")]
    red: u8,

    /// Player colour, green component
    #[arg(long, default_value = "3")]
    green: u8,

    /// Player colour, blue component
    #[arg(long, default_value = "236")]
    blue: u8,

    /// Delay before every STATUS poll, in milliseconds
    #[arg(short, long, default_value = "300")]
    poll_interval_ms: u64,

    /// Delay before ending a turn, in milliseconds
    #[arg(short, long, default_value = "400")]
    action_delay_ms: u64,

    /// Read timeout in milliseconds (0 waits for the server indefinitely)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Decision logic to play with
    #[arg(long, value_enum, default_value_t = StrategyKind::RecruitAndAdvance)]
    strategy: StrategyKind,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,conquest=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Conquest Bot v{}", conquest::VERSION);
    tracing::info!("Server address: {}", args.server);
    tracing::info!("Player: {}", args.name);

    let config = Config::builder()
        .server_addr(&args.server)
        .player_name(&args.name)
        .color(Color::new(args.red, args.green, args.blue))
        .poll_interval_ms(args.poll_interval_ms)
        .action_delay_ms(args.action_delay_ms)
        .read_timeout_ms(args.read_timeout_ms)
        .build();

    if let Err(e) = run(config, args.strategy) {
        tracing::error!("Bot stopped: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config, strategy: StrategyKind) -> conquest::Result<()> {
    config.validate()?;

    let client = Arc::new(Client::connect(&config)?);
    let mut controller = TurnController::new(client, strategy.build(), &config);

    controller.register(config.color)?;
    controller.run()
}
