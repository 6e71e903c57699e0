//! Path resolution for Logscope state.
//!
//! Simple path resolution with sensible defaults. All paths are under
//! ~/.logscope/ unless LOGSCOPE_HOME overrides the root.

use std::path::PathBuf;

/// Get the Logscope home directory: ~/.logscope
pub fn logscope_home() -> PathBuf {
    if let Ok(override_path) = std::env::var("LOGSCOPE_HOME") {
        return PathBuf::from(override_path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".logscope")
}

/// Get the settings file path: ~/.logscope/settings.json
pub fn default_settings_path() -> PathBuf {
    logscope_home().join("settings.json")
}

/// Get the telemetry tape path: ~/.logscope/telemetry.ndjson
pub fn default_telemetry_path() -> PathBuf {
    logscope_home().join("telemetry.ndjson")
}

/// Ensure the Logscope home directory exists.
pub fn ensure_logscope_home() -> std::io::Result<PathBuf> {
    let home = logscope_home();
    std::fs::create_dir_all(&home)?;
    Ok(home)
}
