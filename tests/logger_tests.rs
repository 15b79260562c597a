//! Integration tests for logger behavior.

use music_graph::logger::{
    close_file_logging, current_level, init_file_logging, is_file_logging_active, set_level,
    set_level_from_str, Level,
};
use music_graph::{debug, error, info, success, verbose, warn};
use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Level and log file are process-wide; tests that change them run one at a time
static LOGGER_LOCK: Mutex<()> = Mutex::new(());

fn lock_logger() -> MutexGuard<'static, ()> {
    LOGGER_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn level_parse_accepts_valid() {
    let _guard = lock_logger();
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("success"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("DEBUG"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    let _guard = lock_logger();
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    success!("success integration");
    debug!("debug integration");
    verbose!("verbose integration");
    assert!(current_level() <= Level::Debug);
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_records() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("logs").join("musicgraph.log");
    let _guard = lock_logger();

    set_level(Level::Debug);
    assert!(init_file_logging(&path));
    error!("written to file");
    close_file_logging();

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("[ERROR] written to file"));
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_copies_every_level() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("copy.log");
    let _guard = lock_logger();

    set_level(Level::Success);
    assert!(init_file_logging(&path));
    assert!(is_file_logging_active());
    success!("checkpoint reached");
    warn!("relation skipped");
    close_file_logging();
    assert!(!is_file_logging_active());

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("[SUCCESS] checkpoint reached"));
    assert!(content.contains("[WARN] relation skipped"));
}
