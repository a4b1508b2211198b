use clap::Parser;
use flank_player::connectors::TerminalConnector;
use flank_player::{play_game, report, Config};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Two-player Othello in the terminal.
#[derive(Parser)]
#[command(name = "flank", version)]
struct Args {
    /// Do not ask about quitting before every move
    #[arg(long, default_value_t = false)]
    no_quit_prompt: bool,

    /// List the legal moves after an illegal one
    #[arg(long, default_value_t = false)]
    hints: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            prompt_quit: !args.no_quit_prompt,
            hints: args.hints,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config::from(&args);
    info!(?config, "starting game");

    let mut connector = TerminalConnector::stdio();
    let outcome = play_game(&mut connector, &config)?;
    println!("{}", report(&outcome));

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
