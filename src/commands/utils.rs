use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Convert fractional epoch seconds to a UTC instant
pub fn epoch_to_utc(epoch: f64) -> Option<DateTime<Utc>> {
    if !epoch.is_finite() {
        return None;
    }
    let secs = epoch.floor();
    let nanos = (((epoch - secs) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(secs as i64, nanos)
}

/// Render epoch seconds for log lines, e.g. `1754051908 (2025-08-01T12:38:28Z)`
pub fn describe_epoch(epoch: f64) -> String {
    match epoch_to_utc(epoch) {
        Some(at) => format!("{} ({})", epoch, at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => epoch.to_string(),
    }
}

/// Parse an RFC 3339 instant into fractional epoch seconds
pub fn parse_rfc3339_epoch(value: &str) -> Result<f64> {
    let at = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid RFC 3339 time: {}", value))?;
    Ok(at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1e9)
}

/// Display version information
pub fn display_version() {
    println!("ADS-B Snapshot v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Extracts aircraft positions near a point in time from readsb trace archives.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_round_trip_through_rfc3339() {
        let epoch = parse_rfc3339_epoch("2025-08-01T12:38:28Z").unwrap();
        assert_eq!(epoch, 1_754_051_908.0);
        assert_eq!(describe_epoch(epoch), "1754051908 (2025-08-01T12:38:28Z)");
    }

    #[test]
    fn test_fractional_and_offset_times() {
        let epoch = parse_rfc3339_epoch("2025-08-01T14:38:28.5+02:00").unwrap();
        assert_eq!(epoch, 1_754_051_908.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_rfc3339_epoch("yesterday").is_err());
        assert!(epoch_to_utc(f64::NAN).is_none());
        assert_eq!(describe_epoch(f64::INFINITY), "inf");
    }
}
