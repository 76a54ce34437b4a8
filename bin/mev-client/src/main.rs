mod cmd;

use clap::{Parser, Subcommand};
use std::future::Future;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[clap(author, version, about = "talk to an external block builder on behalf of a validator", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Register(cmd::register::Command),
    Header(cmd::fetch::HeaderCommand),
    Block(cmd::fetch::BlockCommand),
    Status(cmd::status::Command),
    Config(cmd::config::Command),
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run_task_until_signal(task: impl Future<Output = eyre::Result<()>>) -> eyre::Result<()> {
    setup_logging();

    // impl #[tokio::main]
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("can make runtime")
        .block_on(async move {
            tokio::select! {
                task = task => task,
                _ = signal::ctrl_c() => {
                    tracing::info!("shutting down...");
                    Ok(())
                }
            }
        })
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Register(cmd) => run_task_until_signal(cmd.execute()),
        Commands::Header(cmd) => run_task_until_signal(cmd.execute()),
        Commands::Block(cmd) => run_task_until_signal(cmd.execute()),
        Commands::Status(cmd) => run_task_until_signal(cmd.execute()),
        Commands::Config(cmd) => run_task_until_signal(cmd.execute()),
    }
}
