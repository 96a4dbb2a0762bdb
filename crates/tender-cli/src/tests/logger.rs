use crate::logger;

use googletest::prelude::*;
use log::LevelFilter;
use tempfile::TempDir;
use tender_config::{LogLevel, LoggingConfig};

// Installs the process-wide logger, so this is the only test that may do it
#[test]
fn test_file_target_receives_records_at_configured_level() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tender.log");
    let config = LoggingConfig {
        level: LogLevel(LevelFilter::Info),
        file: Some(path.to_string_lossy().into_owned()),
        colored: true,
    };

    logger::initialize(&config).unwrap();
    log::info!("visible record");
    log::debug!("filtered record");
    log::logger().flush();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_that!(written, contains_substring("visible record"));
    assert_that!(written, contains_substring("INFO"));
    assert_that!(written, not(contains_substring("filtered record")));
    // Colors only apply to the terminal
    assert_that!(written, not(contains_substring("\u{1b}[")));
}
