//! Unit tests for the logger sinks

use chrono::{Local, TimeZone as _};
use consolekit::error::KitError;
use consolekit::log::{Level, LogConfig, Logger};
use consolekit::system::{MockSystem, RealSystem, System as _};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn plain_config(directory: &str) -> LogConfig {
    LogConfig::new(directory).with_color(false)
}

#[test]
fn test_file_name_from_start_time() {
    let system = MockSystem::new();
    let started = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let logger = Logger::with_start_time(plain_config("/logs"), &system, started);

    assert_eq!(logger.file_name(), "Log20240102_030405.txt");
    assert_eq!(
        logger.file_path(),
        PathBuf::from("/logs/Log20240102_030405.txt")
    );
}

#[test]
fn test_each_level_writes_one_tagged_line() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/logs"), &system);

    logger.info("started");
    logger.warn("slow");
    logger.error("failed");
    logger.critical("halted");

    let lines = system.console_lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with(" - INFO  - started"));
    assert!(lines[1].ends_with(" - WARN  - slow"));
    assert!(lines[2].ends_with(" - ERROR - failed"));
    assert!(lines[3].ends_with(" - CRIT  - halted"));

    let contents = system.read_to_string(&logger.file_path()).unwrap();
    let file_lines: Vec<&str> = contents.lines().collect();
    assert_eq!(file_lines, lines);
}

#[test]
fn test_creates_log_directory_on_first_write() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/var/app/Log"), &system);

    assert!(!system.is_dir(Path::new("/var/app/Log")));
    logger.info("hello");
    assert!(system.is_dir(Path::new("/var/app/Log")));
    assert_eq!(system.files(), vec![logger.file_path()]);
}

#[test]
fn test_console_only() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/logs").with_file(false), &system);

    logger.info("hello");

    assert_eq!(system.console_lines().len(), 1);
    assert!(system.files().is_empty());
    assert!(!system.exists(Path::new("/logs")));
}

#[test]
fn test_file_only() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/logs").with_console(false), &system);

    logger.warn("quiet");

    assert!(system.console_lines().is_empty());
    let contents = system.read_to_string(&logger.file_path()).unwrap();
    assert!(contents.ends_with(" - WARN  - quiet\n"));
}

#[test]
fn test_messages_share_one_file() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/logs").with_console(false), &system);

    logger.info("one");
    logger.info("two");

    assert_eq!(system.files().len(), 1);
    let contents = system.read_to_string(&logger.file_path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn test_contents_reads_back_run_log() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/logs").with_console(false), &system);

    assert_eq!(logger.contents().unwrap(), "");

    logger.info("one");
    logger.error("two");

    let contents = logger.contents().unwrap();
    assert_eq!(contents, system.read_to_string(&logger.file_path()).unwrap());
    let lines: Vec<&str> = contents.lines().collect();
    assert!(lines[0].ends_with(" - INFO  - one"));
    assert!(lines[1].ends_with(" - ERROR - two"));
}

#[test]
fn test_contents_of_unreadable_log_file() {
    let started = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let system = MockSystem::new()
        .with_file("/logs/Log20240102_030405.txt", &[0xff, 0xfe])
        .unwrap();
    let logger = Logger::with_start_time(plain_config("/logs"), &system, started);

    let err = logger.contents().unwrap_err();
    assert_eq!(err.exit_code(), 4);
    assert!(err.to_string().contains("Failed to read /logs/Log20240102_030405.txt"));
}

#[test]
fn test_error_payload_on_next_line() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/logs").with_file(false), &system);
    let err = KitError::missing_required(["a"]);

    logger.error_with("could not start", &err);
    logger.log_error(Level::Warn, &err);

    let lines = system.console_lines();
    assert!(lines[0].ends_with(" - ERROR - could not start\nMissing these required options: a"));
    assert!(lines[1].ends_with(" - WARN  - Missing these required options: a"));
}

#[test]
fn test_uncolored_lines_have_no_escape_codes() {
    let system = MockSystem::new();
    let logger = Logger::new(plain_config("/logs").with_file(false), &system);

    logger.critical("plain");

    assert!(!system.console_lines()[0].contains('\u{1b}'));
}

#[test]
fn test_try_log_reports_unwritable_directory() {
    let system = MockSystem::new().with_file("/logs", b"a file").unwrap();
    let logger = Logger::new(plain_config("/logs").with_console(false), &system);

    let err = logger.try_log(Level::Info, "lost").unwrap_err();
    assert_eq!(err.exit_code(), 4);
    assert!(err.to_string().contains("Failed to create log directory /logs"));

    // The non-failing variant swallows the same error
    logger.info("lost");
}

#[test]
fn test_real_filesystem_sink() {
    let temp_dir = TempDir::new().unwrap();
    let directory = temp_dir.path().join("nested").join("Log");
    let system = RealSystem::new();
    let config = LogConfig::new(&directory)
        .with_console(false)
        .with_color(false);
    let logger = Logger::new(config, &system);

    logger.info("first");
    logger.critical("second");

    let entries = system.read_dir(&directory).unwrap();
    assert_eq!(entries, vec![logger.file_path()]);

    let contents = system.read_to_string(&logger.file_path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" - INFO  - first"));
    assert!(lines[1].ends_with(" - CRIT  - second"));
}
