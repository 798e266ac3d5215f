//! Runs the rating terminal or the dashboard against a rating service.

use chrono::Local;
use clap::{Parser, Subcommand};
use rating_kiosk::console::{ConsoleDashboardView, ConsoleTerminalView};
use rating_kiosk::models::RatingType;
use rating_kiosk::{Dashboard, HttpRatingApi, RatingTerminal};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "kiosk", about = "Satisfaction kiosk terminal and dashboard")]
struct Cli {
    /// Base URL of the rating service
    #[arg(long, env = "KIOSK_SERVER", default_value = "http://127.0.0.1:5000")]
    server: String,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Read 1, 2 or 3 from stdin as button presses
    Terminal,
    /// Print live statistics and today's history
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpRatingApi::new(cli.server)?;

    match cli.mode {
        Mode::Terminal => run_terminal(api).await?,
        Mode::Dashboard => {
            let dashboard = Dashboard::new(api, ConsoleDashboardView);
            let _polling = dashboard.start(&Local::now()).await;
            tokio::signal::ctrl_c().await?;
        }
    }

    info!("kiosk stopped");
    Ok(())
}

async fn run_terminal(api: HttpRatingApi) -> std::io::Result<()> {
    let terminal = RatingTerminal::new(api, ConsoleTerminalView);
    let _watcher = terminal.start().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let rating = line
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(|code| RatingType::try_from(code).ok());
                match rating {
                    Some(rating) => {
                        let terminal = terminal.clone();
                        tokio::spawn(async move {
                            terminal.handle_click(rating).await;
                        });
                    }
                    None => warn!(input = line.trim(), "expected 1, 2 or 3"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
