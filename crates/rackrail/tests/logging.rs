//! The file logger sees what the emitter reports.
//!
//! Kept in its own test binary: the logger is process-global.

use rackrail::{CssCollector, GridPlugin, init_logger, profile};

#[test]
fn test_emitter_reports_to_file_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rack-rail.log");
    init_logger(&path).unwrap();

    // A second logger cannot be installed.
    assert!(init_logger(dir.path().join("other.log")).is_err());

    let mut config = (*profile("tailwind").unwrap()).clone();
    config.viewports.swap(0, 1);
    GridPlugin::new(&config).emit(&mut CssCollector::new());

    let valid = profile("tailwind").unwrap();
    GridPlugin::new(&valid).emit(&mut CssCollector::new());

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("[ERROR] Rack & Rail: configuration errors detected:"));
    assert!(log.contains("[ERROR]   - Breakpoints must be in ascending order"));
    assert!(log.contains("[ERROR] Rack & Rail: skipping generation due to configuration errors"));
    assert!(log.contains("[INFO] Rack & Rail: generated styles for 4 breakpoints"));
    assert!(log.contains("[DEBUG] Rack & Rail: sm -> "));
}
