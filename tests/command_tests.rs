use adsb_snapshot::commands::{execute_extract, execute_inspect, validate_args, ExtractArgs};
use adsb_snapshot::scanner::ErrorPolicy;
use flate2::write::GzEncoder;
use flate2::Compression;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_trace(path: &Path, json: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(json.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

/// `<tmp>/2025.08.01/traces/08/trace_full_4ca708.json` with two samples
fn archive_fixture() -> (TempDir, PathBuf) {
    let root = TempDir::new().unwrap();
    let traces = root.path().join("2025.08.01/traces");
    write_trace(
        &traces.join("08/trace_full_4ca708.json"),
        r#"{"icao": "4ca708", "timestamp": 1754051900,
            "trace": [[8.2, 53.4213, -6.2701, 3000, 210.5, 95.3, 0],
                      [20.0, 53.43, -6.20, 3400, 212.0, 96.0, 0]]}"#,
    );
    (root, traces)
}

fn args_for(root: &Path, traces: PathBuf) -> ExtractArgs {
    ExtractArgs {
        traces_path: traces,
        output_csv: root.join("2025.08.01.1754051908.csv"),
        target_time: 1_754_051_908.0,
        ..Default::default()
    }
}

#[test]
fn test_default_args_use_literal_constants() {
    let args = ExtractArgs::default();

    assert_eq!(args.traces_path, PathBuf::from("data/archives/2025.12.28/traces"));
    assert_eq!(args.output_csv, PathBuf::from("data/archives/2025.12.28.1754051908.csv"));
    assert_eq!(args.max_planes, 1000);
    assert_eq!(args.window_secs, 1.0);
    assert_eq!(args.error_policy, ErrorPolicy::Abort);
    assert!(!args.stream);
}

#[test]
fn test_validate_args_valid() {
    let (root, traces) = archive_fixture();
    assert!(validate_args(&args_for(root.path(), traces)).is_ok());
}

#[test]
fn test_validate_args_missing_traces() {
    let root = TempDir::new().unwrap();
    let args = args_for(root.path(), root.path().join("nope"));
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_bad_window() {
    let (root, traces) = archive_fixture();
    let args = ExtractArgs {
        window_secs: 0.0,
        ..args_for(root.path(), traces)
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_non_finite_target() {
    let (root, traces) = archive_fixture();
    let args = ExtractArgs {
        target_time: f64::NAN,
        ..args_for(root.path(), traces)
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_is_directory() {
    let (root, traces) = archive_fixture();
    let args = ExtractArgs {
        output_csv: root.path().to_path_buf(),
        ..args_for(root.path(), traces)
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_extract_writes_csv() {
    let (root, traces) = archive_fixture();
    let args = args_for(root.path(), traces);
    let output = args.output_csv.clone();

    let summary = execute_extract(args).unwrap();

    assert_eq!(summary.matches, 1);
    assert_eq!(
        fs::read_to_string(output).unwrap().lines().collect::<Vec<_>>(),
        vec![",lat,lon,heading", "0,53.4213,-6.2701,95.3"]
    );
}

#[test]
fn test_extract_streaming() {
    let (root, traces) = archive_fixture();
    let args = ExtractArgs {
        stream: true,
        ..args_for(root.path(), traces)
    };
    let output = args.output_csv.clone();

    let summary = execute_extract(args).unwrap();

    assert_eq!(summary.matches, 1);
    assert_eq!(fs::read_to_string(output).unwrap().lines().count(), 2);
}

#[test]
fn test_extract_fails_on_corrupt_file() {
    let (root, traces) = archive_fixture();
    fs::write(traces.join("08/broken.json"), b"{}").unwrap();

    assert!(execute_extract(args_for(root.path(), traces.clone())).is_err());

    let args = ExtractArgs {
        error_policy: ErrorPolicy::Skip,
        ..args_for(root.path(), traces)
    };
    let summary = execute_extract(args).unwrap();
    assert_eq!(summary.files_skipped, 1);
    assert_eq!(summary.matches, 1);
}

#[test]
fn test_inspect_trace() {
    let (_root, traces) = archive_fixture();
    assert!(execute_inspect(&traces.join("08/trace_full_4ca708.json")).is_ok());
    assert!(execute_inspect(&traces.join("08/missing.json")).is_err());
}

#[test]
fn test_failed_streaming_extract_keeps_previous_output() {
    let (root, traces) = archive_fixture();
    fs::write(traces.join("08/zz_bad.json"), b"not gzip").unwrap();

    let args = ExtractArgs {
        stream: true,
        ..args_for(root.path(), traces)
    };
    let output = args.output_csv.clone();
    fs::write(&output, "previous good output").unwrap();

    assert!(execute_extract(args).is_err());

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous good output");
    // only the archive directory and the old CSV remain
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 2);
}

#[test]
fn test_failed_streaming_extract_creates_no_output() {
    let (root, traces) = archive_fixture();
    fs::write(traces.join("08/zz_bad.json"), b"not gzip").unwrap();

    let args = ExtractArgs {
        stream: true,
        ..args_for(root.path(), traces)
    };
    let output = args.output_csv.clone();

    assert!(execute_extract(args).is_err());
    assert!(!output.exists());
}
