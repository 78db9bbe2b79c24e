/// renotify_service: daily re-fetch notifier for hydrological stations.
///
/// Reads the station registry from the `estacoes` table and tells the
/// monitoring API, station by station, to (re)fetch telemetry and water
/// quality data for yesterday. One sequential pass, two GET calls per
/// station, no retries. Meant to be fired by an external cron trigger.
///
/// # Module structure
///
/// ```text
/// renotify_service
/// ├── model   — shared data types (StationRecord, CallOutcome, target date)
/// ├── config  — environment configuration (DB_* settings, API_BASE_URL)
/// ├── db      — PostgreSQL connection + station registry query
/// ├── notify  — notification URL construction + per-call outcome handling
/// └── runner  — single-pass orchestration (connect, read, notify, close)
/// ```

pub mod config;
pub mod db;
pub mod model;
pub mod notify;
pub mod runner;
