mod api;
mod consts;
mod country;
mod environment;
mod events;
mod logging;
mod map;
mod rank;
mod runtime;
mod ui;
mod workers;

use crate::api::{CovidApi, CovidApiClient};
use crate::environment::Environment;
use crate::rank::{SortKey, top_n};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Base URL of the statistics API, overriding the default.
        #[arg(long, value_name = "API_URL")]
        api_url: Option<String>,

        /// Seconds between automatic refreshes.
        #[arg(long, value_name = "SECONDS")]
        refresh_secs: Option<u64>,

        /// Fill the dashboard background instead of using the terminal's color.
        #[arg(long)]
        background: bool,
    },
    /// Fetch once and print the top countries to stdout.
    Top {
        /// Base URL of the statistics API, overriding the default.
        #[arg(long, value_name = "API_URL")]
        api_url: Option<String>,

        /// Counter to rank by.
        #[arg(long, value_enum, default_value_t = SortKey::Cases)]
        by: SortKey,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_str = std::env::var("COVIDTOP_API_URL").unwrap_or_default();
    let environment = env_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            refresh_secs,
            background,
        } => {
            let environment = resolve_environment(environment, api_url)?;
            let ui_config = UIConfig {
                with_background_color: background,
                refresh_secs: refresh_secs
                    .unwrap_or(consts::dashboard_consts::fetching::DEFAULT_REFRESH_SECS),
            };
            start(environment, ui_config).await
        }
        Command::Top { api_url, by } => {
            let environment = resolve_environment(environment, api_url)?;
            top(environment, by).await
        }
    }
}

/// A `--api-url` flag takes precedence over the `COVIDTOP_API_URL` variable.
fn resolve_environment(
    environment: Environment,
    api_url: Option<String>,
) -> Result<Environment, Box<dyn Error>> {
    match api_url {
        Some(url) => url.parse::<Environment>().map_err(|_| {
            format!(
                "Invalid API URL: {}. Expected an http:// or https:// base URL.",
                url
            )
            .into()
        }),
        None => Ok(environment),
    }
}

/// Starts the dashboard application.
///
/// # Arguments
/// * `environment` - The API environment to fetch statistics from.
/// * `ui_config` - Display options for the dashboard.
async fn start(environment: Environment, ui_config: UIConfig) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let api: Box<dyn CovidApi> = Box::new(CovidApiClient::new(environment.clone()));
    let handles = runtime::start_fetch_worker(api, Duration::from_secs(ui_config.refresh_secs));
    let app = ui::App::new(
        environment,
        handles.event_receiver,
        handles.data_receiver,
        handles.refresh_sender,
        handles.shutdown_sender,
        ui_config,
    );
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    handles.join_handle.await?;
    Ok(())
}

/// Fetches the country table once and prints the ranked top entries.
async fn top(environment: Environment, by: SortKey) -> Result<(), Box<dyn Error>> {
    let client = CovidApiClient::new(environment);
    let records = client.countries().await?;
    let ranked = top_n(&records, by, consts::dashboard_consts::TOP_COUNTRIES);

    println!("{:<4} {:<24} {:>14}", "#", "Country", by.to_string());
    for (i, record) in ranked.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>14}",
            i + 1,
            record.country,
            by.value(record)
        );
    }
    Ok(())
}
