//! Station Re-fetch Notifier
//!
//! A single-pass batch job that tells the monitoring API, for every
//! hydrological station in the `estacoes` table, to (re)fetch telemetry
//! and water quality data for yesterday. Two GET calls per station, no
//! retries; call failures are logged and the pass moves on. Intended to
//! be triggered once a day by an external scheduler (cron).
//!
//! Usage:
//!   cargo run --release
//!
//! Environment (a .env file is honored):
//!   DB_SERVER, DB_DATABASE, DB_USERNAME, DB_PASSWORD - database settings
//!   API_BASE_URL - base URL of the monitoring API

use renotify_service::config::Config;
use renotify_service::runner;

fn main() {
    println!("🌊 Station Re-fetch Notifier");
    println!("============================\n");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}\n", e);
            std::process::exit(1);
        }
    };

    match runner::run(&config) {
        Ok(summary) => {
            println!(
                "\n✓ Run complete: {} stations, {} calls ({} ok, {} failed)",
                summary.stations, summary.calls, summary.successes, summary.failures
            );
        }
        Err(e) => {
            eprintln!("\n❌ Run aborted: {}\n", e);
            std::process::exit(1);
        }
    }
}
