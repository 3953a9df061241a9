mod broadcaster;
mod message_handler;
mod server_config;

use std::path::PathBuf;

use clap::Parser;
use common::codenames::StaticWordList;
use common::config::ConfigManager;
use common::{SessionRegistry, SessionRng, log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use broadcaster::{Broadcaster, print_replies};
use message_handler::MessageHandler;
use server_config::{DEFAULT_CONFIG_PATH, REPLY_QUEUE_SIZE, ServerConfig};

#[derive(Parser)]
#[command(name = "codenames_server")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: ServerConfig = ConfigManager::from_yaml_file(&args.config).get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Server".to_string()))
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);
    log!("Loaded config from {}", args.config.display());

    let words = match &config.word_list_path {
        Some(path) => StaticWordList::from_file(path)?,
        None => StaticWordList::builtin(),
    };
    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using {} words, seed {}", words.len(), rng.seed());

    let registry = SessionRegistry::new(words, rng, config.rules);
    let (broadcaster, replies) = Broadcaster::channel(REPLY_QUEUE_SIZE);
    let printer = tokio::spawn(print_replies(replies));
    let handler = MessageHandler::new(registry.clone(), broadcaster, config.command.clone());

    log!("Listening for '{}' on stdin", config.command);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => handler.handle_line(&line).await,
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                log!("Shutdown signal received");
                break;
            }
        }
    }

    let open_games = registry.session_count().await;
    drop(handler);
    printer.await?;

    log!("Server shut down with {} unfinished games", open_games);

    Ok(())
}
