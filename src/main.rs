use std::env;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use stopscout::config::AppConfig;
use stopscout::lookup::StopFinder;
use stopscout::models::StopReport;
use stopscout::web;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stopscout=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("--help") | Some("help") => {
            print_usage();
            Ok(())
        }
        Some("serve") => serve(),
        Some(_) => lookup_once(&args.join(" ")),
    }
}

fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    let port = config.server.port;
    // Built before the runtime starts; the adapters' clients are blocking
    let finder = Arc::new(StopFinder::new(config)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    runtime.block_on(web::run(finder, port))
}

fn lookup_once(place_name: &str) -> Result<()> {
    let config = AppConfig::from_env()?;
    let finder = StopFinder::new(config)?;

    match finder.find_stop_near(place_name) {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(error) => {
            eprintln!("Error: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_report(report: &StopReport) {
    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!("Information for: {}", report.place_name);
    println!("Time: {}", report.timestamp);
    println!("{}", rule);

    println!("\nLOCATION");
    println!("  City: {}", report.location.city);
    println!(
        "  Coordinates: ({}, {})",
        report.location.lat, report.location.lon
    );

    println!("\nNEAREST MBTA STATION");
    println!("  Station: {}", report.station.name);
    let accessibility = if report.station.wheelchair_accessible {
        "✓ Wheelchair accessible"
    } else {
        "✗ Not wheelchair accessible"
    };
    println!("  Accessibility: {}", accessibility);

    println!("\nWEATHER CONDITIONS");
    println!(
        "  Temperature: {}°F (feels like {}°F)",
        report.weather.temp, report.weather.feels_like
    );
    println!("  Condition: {}", report.weather.description);
    println!("  Humidity: {}%", report.weather.humidity);
    println!("  Wind Speed: {} mph", report.weather.wind_speed);
    println!("{}\n", rule);
}

fn print_usage() {
    println!("stopscout - nearest MBTA stop and current weather for a place");
    println!();
    println!("Usage:");
    println!("  stopscout <place name>   Look up a place and print the report");
    println!("  stopscout serve          Run the web API server");
    println!();
    println!("Required environment variables (a .env file is honored):");
    println!("  MAPBOX_TOKEN      Mapbox geocoding access token");
    println!("  MBTA_API_KEY      MBTA v3 API key");
    println!("  WEATHER_API_KEY   OpenWeatherMap API key");
}
