/// Monitoring API notification client.
///
/// Handles URL construction and per-call outcome handling for the two
/// re-fetch endpoints the monitoring API exposes per station:
///
///   {base}/api/v1/estacao-monitoramentos/telemetrica
///   {base}/api/v1/estacao-monitoramentos/qualidade
///
/// Both take the station's external code and the target date as query
/// parameters. The response body is never read; only the status code
/// matters. A failed call is logged and the pass moves on — neither
/// endpoint nor station is ever skipped because an earlier call failed.

use crate::model::{CallOutcome, StationRecord};
use chrono::NaiveDate;
use reqwest::blocking::Client;

const TELEMETRY_PATH: &str = "/api/v1/estacao-monitoramentos/telemetrica";
const QUALITY_PATH: &str = "/api/v1/estacao-monitoramentos/qualidade";

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the telemetry re-fetch URL for one station and date.
pub fn build_telemetry_url(base_url: &str, hydro_code: &str, date: NaiveDate) -> String {
    build_url(base_url, TELEMETRY_PATH, hydro_code, date)
}

/// Builds the water quality re-fetch URL for one station and date.
pub fn build_quality_url(base_url: &str, hydro_code: &str, date: NaiveDate) -> String {
    build_url(base_url, QUALITY_PATH, hydro_code, date)
}

fn build_url(base_url: &str, path: &str, hydro_code: &str, date: NaiveDate) -> String {
    format!(
        "{}{}?codigo_estacao={}&data={}",
        base_url.trim_end_matches('/'),
        path,
        urlencoding::encode(hydro_code),
        crate::model::format_target_date(date),
    )
}

/// The two notification URLs for a station, in call order: telemetry
/// first, then quality.
pub fn build_station_urls(base_url: &str, hydro_code: &str, date: NaiveDate) -> [String; 2] {
    [
        build_telemetry_url(base_url, hydro_code, date),
        build_quality_url(base_url, hydro_code, date),
    ]
}

// ---------------------------------------------------------------------------
// Calls
// ---------------------------------------------------------------------------

/// Issues one GET and classifies what happened. This never returns an
/// error: non-200 statuses and transport failures are expected outcomes
/// of a notification pass, not faults that should unwind it.
pub fn call_endpoint(http: &Client, url: &str) -> CallOutcome {
    match http.get(url).send() {
        Ok(response) => {
            let status = response.status().as_u16();
            if status == 200 {
                CallOutcome::Success
            } else {
                CallOutcome::HttpFailure(status)
            }
        }
        Err(e) => CallOutcome::TransportFailure(e.to_string()),
    }
}

/// Notifies both endpoints for one station, logging each outcome tagged
/// with the station's id and code. Returns the outcomes in call order.
pub fn notify_station(
    http: &Client,
    base_url: &str,
    station: &StationRecord,
    date: NaiveDate,
) -> [CallOutcome; 2] {
    build_station_urls(base_url, &station.hydro_code, date).map(|url| {
        let outcome = call_endpoint(http, &url);
        match &outcome {
            CallOutcome::Success => {
                println!("   ✓ station {} ({}): {}", station.id, station.hydro_code, url);
            }
            CallOutcome::HttpFailure(status) => {
                eprintln!(
                    "   ✗ station {} ({}): HTTP {} from {}",
                    station.id, station.hydro_code, status, url
                );
            }
            CallOutcome::TransportFailure(reason) => {
                eprintln!(
                    "   ✗ station {} ({}): request failed for {}: {}",
                    station.id, station.hydro_code, url, reason
                );
            }
        }
        outcome
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    // --- URL construction ---------------------------------------------------

    #[test]
    fn test_telemetry_url_matches_api_contract() {
        let url = build_telemetry_url("https://api.example.org", "12345678", date());
        assert_eq!(
            url,
            "https://api.example.org/api/v1/estacao-monitoramentos/telemetrica?codigo_estacao=12345678&data=2024-03-14"
        );
    }

    #[test]
    fn test_quality_url_matches_api_contract() {
        let url = build_quality_url("https://api.example.org", "87654321", date());
        assert_eq!(
            url,
            "https://api.example.org/api/v1/estacao-monitoramentos/qualidade?codigo_estacao=87654321&data=2024-03-14"
        );
    }

    #[test]
    fn test_station_urls_order_telemetry_before_quality() {
        let [first, second] = build_station_urls("https://api.example.org", "12345678", date());
        assert!(first.contains("/telemetrica?"), "telemetry must be called first");
        assert!(second.contains("/qualidade?"), "quality must be called second");
    }

    #[test]
    fn test_base_url_trailing_slash_does_not_double() {
        let url = build_telemetry_url("https://api.example.org/", "12345678", date());
        assert!(
            url.contains("org/api/v1/"),
            "slash between base and path must not double, got: {}",
            url
        );
    }

    #[test]
    fn test_station_code_is_url_encoded() {
        let url = build_telemetry_url("https://api.example.org", "A B/1", date());
        assert!(
            url.contains("codigo_estacao=A%20B%2F1"),
            "station code must be percent-encoded, got: {}",
            url
        );
    }

    #[test]
    fn test_date_param_is_zero_padded() {
        let first_of_june = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let url = build_quality_url("https://api.example.org", "12345678", first_of_june);
        assert!(url.ends_with("&data=2024-06-01"), "got: {}", url);
    }

    // --- Outcome classification ---------------------------------------------
    // Status-code and short-circuit behavior against a live local server
    // is covered in tests/notify_run.rs.

    #[test]
    fn test_unreachable_endpoint_yields_transport_failure() {
        // Port 1 is never listening; the request must come back as a
        // contained TransportFailure, not an Err or a panic.
        let http = Client::new();
        let outcome = call_endpoint(&http, "http://127.0.0.1:1/api");
        assert!(
            matches!(outcome, CallOutcome::TransportFailure(_)),
            "got: {:?}",
            outcome
        );
    }
}
