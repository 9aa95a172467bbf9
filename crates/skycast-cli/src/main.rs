mod error_mapping;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use skycast_core::{App, AppError, ConfigError, WeatherConfig};
use skycast_weather::{Coordinates, LocationQuery, UnitSystem, WeatherProvider, WeatherSession};

/// Look up the current weather for a city or a position.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City to look up; defaults to your position, then the configured default city
    city: Vec<String>,

    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Display units: metric or imperial (anything else is metric)
    #[arg(long)]
    units: Option<String>,

    /// Keep running and refresh the local clock
    #[arg(long)]
    watch: bool,

    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    skycast_core::init()?;
    let args = Args::parse();

    let mut app = match App::with_config_path(args.config.as_deref()) {
        Ok(app) => app,
        Err(err) => return Ok(report_failure(AppError::from(err))),
    };
    let settings = &app.config().weather;
    let code = run(settings, settings.effective_api_key(), &args).await;
    app.shutdown()?;

    Ok(code)
}

fn report_failure(err: AppError) -> ExitCode {
    tracing::error!("{}", err);
    eprintln!("{}", err.user_message());
    ExitCode::FAILURE
}

/// One lookup against `settings.api_base_url`, printed to stdout
async fn run(settings: &WeatherConfig, api_key: Option<String>, args: &Args) -> ExitCode {
    let Some(api_key) = api_key else {
        return report_failure(ConfigError::MissingApiKey.into());
    };

    let provider = match WeatherProvider::with_base_url(
        api_key,
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    ) {
        Ok(provider) => provider,
        Err(err) => return report_failure(error_mapping::from_lookup_error(err)),
    };

    let unit = UnitSystem::from_name(args.units.as_deref().unwrap_or(&settings.units));
    let mut session = WeatherSession::new(unit);
    session.set_search_text(args.city.join(" "));

    let explicit = args.lat.zip(args.lon).map(|(lat, lon)| Coordinates::new(lat, lon));
    let home = settings
        .home
        .map(|h| Coordinates::new(h.latitude, h.longitude));
    let query = session.search_query().unwrap_or_else(|| {
        LocationQuery::resolve(None, explicit, home, &settings.default_city)
    });

    session.begin(query.clone());
    eprintln!("Loading...");
    let result = provider.fetch(&query).await;

    if let Err(err) = session.finish(result) {
        let app_err = error_mapping::from_lookup_error(err);
        tracing::error!("Lookup for {} failed: {}", query, app_err);
        eprintln!("{}", session.error_message().unwrap_or(app_err.user_message()));
        return ExitCode::FAILURE;
    }

    let Some(view) = session.view(chrono::Utc::now().timestamp()) else {
        return ExitCode::FAILURE;
    };
    println!("{}", view);

    if args.watch {
        watch_clock(&session, Duration::from_secs(settings.clock_refresh_secs)).await;
    }

    ExitCode::SUCCESS
}

/// Re-render the local clock every `period` until Ctrl-C.
async fn watch_clock(session: &WeatherSession, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    // The first tick completes immediately and the report was just printed
    ticker.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(view) = session.view(chrono::Utc::now().timestamp()) {
                    println!("{}", view.headline());
                }
            }
            _ = &mut shutdown => {
                tracing::debug!("Stopping clock refresh");
                break;
            }
        }
    }
}
