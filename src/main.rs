use anyhow::Context;
use clap::Parser;
use farm_vision::{cli, config, error, router, session, ui, weather};
use farm_vision::common::{Crop, MarketPriceTable};
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗")?;

    match cli.command.unwrap_or(Commands::Session { classifier: Default::default() }) {
        Commands::Session { classifier } => {
            let mut ui = ui::ConsoleUi::new(config, classifier.build());
            let mut session = session::SessionState::new();
            router::run(&mut session, &mut ui).await?;
            println!("\n👋 Session ended");
        }

        Commands::Prices { crop, market } => {
            let crop: Crop = crop.parse().map_err(error::FarmVisionError::from)?;
            let table = MarketPriceTable::standard();
            ui::print_prices(&table, crop, market.as_deref())?;
        }

        Commands::Weather { location } => {
            let location = location.unwrap_or_else(|| config.default_location.clone());
            let client = weather::OpenWeatherClient::from_config(&config)?;
            let (today, offset) = weather::local_today();

            let spinner = indicatif::ProgressBar::new_spinner();
            spinner.set_message(format!("Fetching forecast for {}...", location));
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));
            let report = weather::weather_report(&client, &location, today, offset).await;
            spinner.finish_and_clear();

            ui::print_weather_summary(&location, &report?);
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("Config:");
                println!("  endpoint: {}", config.weather_endpoint);
                println!("  units: {}", config.units);
                println!("  timeout: {}s", config.timeout_seconds);
                println!("  default location: {}", config.default_location);
                println!("  API key: {}", if config.get_api_key().is_ok() { "set" } else { "not set" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
