/// Shared data types for the notification run.
///
/// Everything here lives for a single pass: the station list is read once,
/// the target date is computed once, and nothing is persisted afterwards.

use chrono::{Duration, NaiveDate};

/// One row from the `estacoes` station registry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    /// Storage-assigned primary key.
    pub id: i32,
    /// External station code (`codigo_hidro`) used by the monitoring API.
    pub hydro_code: String,
}

/// Outcome of a single notification call. Non-fatal by construction:
/// every call resolves to one of these, none of them aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// HTTP 200 received.
    Success,
    /// Any other status code received.
    HttpFailure(u16),
    /// The request never completed (timeout, DNS failure, refused, ...).
    TransportFailure(String),
}

impl CallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success)
    }
}

/// The calendar date every notification call in a run is parameterized
/// with: the day before `today`. Pure day subtraction, so the result is
/// the same regardless of the time of day the run starts.
pub fn target_date(today: NaiveDate) -> NaiveDate {
    today - Duration::days(1)
}

/// Formats a target date the way the monitoring API expects it.
pub fn format_target_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
