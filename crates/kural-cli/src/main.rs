use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use kural_core::Catalog;
use kural_server::state::AppState;

#[derive(Parser)]
#[command(name = "kural", version, about = "Thirukkural wisdom chatbot")]
struct Cli {
    #[arg(long, default_value = "logs", help = "Directory for rolling log files")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP API server")]
    Start {
        #[arg(long, default_value = "0.0.0.0", help = "Address to bind")]
        host: String,
        #[arg(long, default_value = "5000", help = "HTTP API server port")]
        port: u16,
    },
    #[command(about = "Local REPL for testing (no server needed)")]
    Chat,
    #[command(about = "Validate the built-in kural catalog")]
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "kural.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Start { host, port } => {
            let state = AppState::in_memory()?;
            kural_server::serve(state, &format!("{host}:{port}")).await?;
        }
        Commands::Chat => {
            run_repl().await?;
        }
        Commands::Validate => {
            let catalog = Catalog::builtin()?;
            println!(
                "Catalog valid. {} emotions, {} kurals.",
                catalog.emotions().len(),
                catalog.all().len()
            );
        }
    }

    Ok(())
}

async fn run_repl() -> Result<()> {
    let state = AppState::in_memory()?;

    println!("kural REPL. Type 'quit' to exit.");
    println!("---");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input == "quit" || input == "exit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let classification = state.classifier.classify(input);
        let reply = state
            .composer
            .compose(classification, &mut rand::thread_rng());
        state.recorder.record(input, &reply, Utc::now()).await?;

        println!("{}", reply.message);
        println!("  {}", reply.kural.tamil);
        println!("  {}", reply.kural.english);
        println!("{}", reply.follow_up);
    }

    Ok(())
}
