//! Configuration tests
//!
//! The round-trip tests guard the TOML template: every field `to_toml`
//! writes must parse back through `FileConfig`, so a template typo fails
//! here instead of on a user's machine.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_template_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn template_carries_every_section() {
    let parsed: FileConfig = toml::from_str(&Config::default().to_toml()).unwrap();

    // Scalar keys present
    assert!(parsed.theme.is_some());
    assert!(parsed.tick_ms.is_some());

    // Sections present with every key written out
    let features = parsed.features.expect("[features] section");
    assert!(features.gallery.is_some());
    assert!(features.calendar.is_some());
    assert!(features.journal.is_some());

    let motion = parsed.motion.expect("[motion] section");
    assert!(motion.swipe_settle_ms.is_some());
    assert!(motion.tab_settle_ms.is_some());
    assert!(motion.threshold_divisor.is_some());

    let logging = parsed.logging.expect("[logging] section");
    assert!(logging.level.is_some());
    assert!(logging.file_enabled.is_some());
    assert!(logging.file_dir.is_some());
    assert!(logging.file_prefix.is_some());
    assert!(logging.file_rotation.is_some());
}

#[test]
fn template_values_survive_the_round_trip() {
    let parsed: FileConfig = toml::from_str(&Config::default().to_toml()).unwrap();
    let motion = MotionConfig::from_file(parsed.motion);

    assert_eq!(motion.swipe_settle_ms, 250);
    assert_eq!(motion.tab_settle_ms, 300);
    assert_eq!(motion.threshold_divisor, 3.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults and merge behavior
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn motion_defaults_match_reference_behavior() {
    let motion = MotionConfig::default();
    assert_eq!(motion.swipe_settle_ms, 250);
    assert_eq!(motion.tab_settle_ms, 300);
    assert_eq!(motion.threshold_divisor, 3.0);

    let tuning = motion.to_tuning();
    assert_eq!(tuning.swipe_settle.as_millis(), 250);
    assert_eq!(tuning.tab_settle.as_millis(), 300);
}

#[test]
fn partial_motion_section_keeps_other_defaults() {
    let file: FileConfig = toml::from_str("[motion]\nswipe_settle_ms = 180\n").unwrap();
    let motion = MotionConfig::from_file(file.motion);
    assert_eq!(motion.swipe_settle_ms, 180);
    assert_eq!(motion.tab_settle_ms, 300);
    assert_eq!(motion.threshold_divisor, 3.0);
}

#[test]
fn nonpositive_threshold_divisor_is_rejected() {
    let file: FileConfig = toml::from_str("[motion]\nthreshold_divisor = 0.0\n").unwrap();
    let motion = MotionConfig::from_file(file.motion);
    assert_eq!(motion.threshold_divisor, 3.0);

    let file: FileConfig = toml::from_str("[motion]\nthreshold_divisor = -2.0\n").unwrap();
    assert_eq!(MotionConfig::from_file(file.motion).threshold_divisor, 3.0);
}

#[test]
fn start_page_parses_from_file() {
    let file: FileConfig = toml::from_str("start_page = \"Gallery\"\n").unwrap();
    assert_eq!(file.start_page.as_deref(), Some("Gallery"));

    // The template leaves it commented out
    let template: FileConfig = toml::from_str(&Config::default().to_toml()).unwrap();
    assert!(template.start_page.is_none());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let file: FileConfig = toml::from_str("theme = \"nord\"\n").unwrap();
    assert_eq!(file.theme.as_deref(), Some("nord"));

    let features = Features::from_file(file.features);
    assert!(features.gallery && features.calendar && features.journal);

    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.level, "info");
    assert!(!logging.file_enabled);
}

#[test]
fn rotation_parses_case_insensitively() {
    let file: FileConfig =
        toml::from_str("[logging]\nfile_rotation = \"HOURLY\"\n").unwrap();
    let logging = LoggingConfig::from_file(file.logging);
    assert_eq!(logging.file_rotation, LogRotation::Hourly);

    // Unknown strings fall back to daily rather than failing startup
    let file: FileConfig =
        toml::from_str("[logging]\nfile_rotation = \"weekly\"\n").unwrap();
    assert_eq!(
        LoggingConfig::from_file(file.logging).file_rotation,
        LogRotation::Daily
    );
}
