//! Reading gzip-compressed trace files from disk.

use super::schema::TraceFile;
use crate::utils::error::TraceError;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read and parse one trace file
///
/// **Public** - called once per file by the scanner
///
/// The whole gzip stream is decompressed into memory before parsing.
///
/// # Errors
/// * `TraceError::Open` - file cannot be opened
/// * `TraceError::Decompress` - not gzip, or truncated
/// * `TraceError::Decode` - payload is not a trace document
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<TraceFile, TraceError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| TraceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut payload = Vec::new();
    GzDecoder::new(BufReader::new(file))
        .read_to_end(&mut payload)
        .map_err(|source| TraceError::Decompress {
            path: path.to_path_buf(),
            source,
        })?;

    let trace = parse_trace(&payload).map_err(|source| TraceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Read {} ({} bytes, {} records)",
        path.display(),
        payload.len(),
        trace.trace.len()
    );

    Ok(trace)
}

/// Parse an already-decompressed trace document
pub fn parse_trace(payload: &[u8]) -> Result<TraceFile, serde_json::Error> {
    serde_json::from_slice(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn gzip_file(content: &[u8]) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(content).unwrap();
        encoder.finish().unwrap();
        file
    }

    #[test]
    fn test_read_gzip_trace() {
        let file = gzip_file(br#"{"timestamp": 1000.5, "trace": [[0, 10.0, 20.0, 0, 0, 90]]}"#);

        let trace = read_trace_file(file.path()).unwrap();

        assert_eq!(trace.timestamp, 1000.5);
        assert_eq!(trace.trace.len(), 1);
        assert_eq!(trace.icao, None);
    }

    #[test]
    fn test_plain_json_is_not_gzip() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"timestamp": 0, "trace": []}"#).unwrap();

        let err = read_trace_file(file.path()).unwrap_err();
        assert!(matches!(err, TraceError::Decompress { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = gzip_file(b"{\"timestamp\": 0, \"trace\": [");

        let err = read_trace_file(file.path()).unwrap_err();
        assert!(matches!(err, TraceError::Decode { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_trace_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TraceError::Open { .. }));
        assert!(err.to_string().contains("nope.json"));
    }
}
