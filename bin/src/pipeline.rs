//! Fetch, normalize and collect one availability snapshot.

use carpark_lib::prelude::*;
use tracing::{debug, info};

/// Runs the pipeline up to, but not including, CSV output.
///
/// Any failure aborts before a single row could be written.
pub(crate) async fn collect_report(config: ClientConfig) -> Result<AvailabilityReport> {
    let client = FetchClient::new(config)?;
    let response = client.fetch().await?;

    let mut records = normalize_response(response)?;
    debug!(carparks = records.expected(), "normalizing carparks");

    let report = AvailabilityReport::collect(&mut records).await;
    records.finish()?;
    info!(records = report.len(), "collected availability report");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpark_fetch::testing;
    use std::collections::HashSet;
    use std::time::Duration;

    const TWO_CARPARKS: &str = r#"{
        "items": [{
            "timestamp": "SNAPSHOT",
            "carpark_data": [
                {"carpark_info": [{"total_lots": "50", "lot_type": "C", "lots_available": "10"}],
                 "carpark_number": "A1", "update_datetime": "T1"},
                {"carpark_info": [{"total_lots": "30", "lot_type": "H", "lots_available": "5"}],
                 "carpark_number": "B2", "update_datetime": "T2"}
            ]
        }],
        "api_info": {"status": "healthy"}
    }"#;

    const BAD_COUNT: &str = r#"{
        "items": [{
            "timestamp": "SNAPSHOT",
            "carpark_data": [
                {"carpark_info": [{"total_lots": "50", "lot_type": "C", "lots_available": "10"}],
                 "carpark_number": "A1", "update_datetime": "T1"},
                {"carpark_info": [{"total_lots": "abc", "lot_type": "H", "lots_available": "5"}],
                 "carpark_number": "B2", "update_datetime": "T2"}
            ]
        }],
        "api_info": {"status": "healthy"}
    }"#;

    /// Serves one canned response and returns a config pointing at it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> ClientConfig {
        ClientConfig {
            endpoint: testing::serve_once(status_line, body).await,
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        }
    }

    /// Same flow as `main`, writing into `out` instead of stdout.
    async fn run_into(config: ClientConfig, out: &mut Vec<u8>) -> Result<()> {
        let report = collect_report(config).await?;
        report.write_csv(out)?;
        Ok(())
    }

    #[tokio::test]
    async fn test_two_carparks_round_trip() {
        let config = serve_once("200 OK", TWO_CARPARKS).await;
        let mut out = Vec::new();
        run_into(config, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Timestamp,CarparkNumber,LotsTotal,LotsAvailable,LotType")
        );

        let rows: HashSet<&str> = lines.collect();
        assert_eq!(rows, HashSet::from(["T1,A1,50,10,C", "T2,B2,30,5,H"]));
    }

    #[tokio::test]
    async fn test_empty_carpark_list_writes_header_only() {
        let config = serve_once(
            "200 OK",
            r#"{"items": [{"timestamp": "S", "carpark_data": []}], "api_info": {"status": "healthy"}}"#,
        )
        .await;
        let mut out = Vec::new();
        run_into(config, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Timestamp,CarparkNumber,LotsTotal,LotsAvailable,LotType\n"
        );
    }

    #[tokio::test]
    async fn test_absent_timestamps_still_export() {
        let config = serve_once(
            "200 OK",
            r#"{"items": [{"carpark_data": [{"carpark_info": [{"total_lots": "8", "lot_type": "C", "lots_available": "3"}], "carpark_number": "A1"}]}]}"#,
        )
        .await;
        let mut out = Vec::new();
        run_into(config, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1), Some(",A1,8,3,C"));
    }

    #[tokio::test]
    async fn test_server_error_writes_nothing() {
        let config = serve_once("500 Internal Server Error", "").await;
        let mut out = Vec::new();

        let err = run_into(config, &mut out).await.unwrap_err();
        assert!(matches!(err, CarparkError::Network(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_bad_count_writes_nothing() {
        let config = serve_once("200 OK", BAD_COUNT).await;
        let mut out = Vec::new();

        let err = run_into(config, &mut out).await.unwrap_err();
        assert!(matches!(err, CarparkError::NumericParse(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_fatal() {
        let config = serve_once("200 OK", "<html>maintenance</html>").await;
        let mut out = Vec::new();

        let err = run_into(config, &mut out).await.unwrap_err();
        assert!(matches!(err, CarparkError::Decode(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_no_snapshot_is_fatal() {
        let config =
            serve_once("200 OK", r#"{"items": [], "api_info": {"status": "healthy"}}"#).await;
        let mut out = Vec::new();

        let err = run_into(config, &mut out).await.unwrap_err();
        assert!(matches!(
            err,
            CarparkError::MissingData(MissingDataError::NoSnapshot)
        ));
        assert_eq!(err.to_string(), "no snapshot data");
        assert!(out.is_empty());
    }
}
