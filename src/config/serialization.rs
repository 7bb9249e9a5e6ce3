//! Config serialization to TOML
//!
//! Single source of truth for the config file format. `ensure_config_exists`
//! and `config --reset` both write exactly this template, and the round-trip
//! tests parse it back through `FileConfig`.

use super::Config;

impl Config {
    /// Render the full config file, commented for discoverability.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# pagedeck configuration
# Precedence: environment variables > this file > built-in defaults

# Theme: "auto" (terminal ANSI palette), "dracula", "nord"
theme = "{theme}"

# Frame tick interval in milliseconds. The tick drives settle animations;
# keep it well under the settle durations below.
tick_ms = {tick_ms}

# Page to select right after launch, by tab caption.
# start_page = "Calendar"

[features]
# Each flag adds one page to the deck (Overview is always present).
gallery = {gallery}
calendar = {calendar}
journal = {journal}

[motion]
# Settle durations after a released swipe / a tab selection.
swipe_settle_ms = {swipe_settle_ms}
tab_settle_ms = {tab_settle_ms}
# A release flips a page once it travels page_width / threshold_divisor.
threshold_divisor = {threshold_divisor:.1}

[logging]
# Default level filter when RUST_LOG is unset: error, warn, info, debug, trace
level = "{level}"
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# Rotation: "hourly", "daily", "never"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme,
            tick_ms = self.tick_ms,
            gallery = self.features.gallery,
            calendar = self.features.calendar,
            journal = self.features.journal,
            swipe_settle_ms = self.motion.swipe_settle_ms,
            tab_settle_ms = self.motion.tab_settle_ms,
            threshold_divisor = self.motion.threshold_divisor,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }
}
