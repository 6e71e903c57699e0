//! Persisted display preferences for log rows.

use logscope_store::SettingsStore;
use serde::{Deserialize, Serialize};

/// Stable settings keys, shared with companion panels that render log rows
/// with congruent options. Treat these as a process-wide namespace: another
/// panel editing a key is expected to affect this one on its next render.
pub mod settings_keys {
    pub const SHOW_LABELS: &str = "logscope.explore.logs.showLabels";
    pub const SHOW_TIME: &str = "logscope.explore.logs.showTime";
    pub const WRAP_LOG_MESSAGE: &str = "logscope.explore.logs.wrapLogMessage";
    pub const PRETTIFY_LOG_MESSAGE: &str = "logscope.explore.logs.prettifyLogMessage";
}

/// The four independent row-display booleans.
///
/// Loaded from the store on every render, never cached across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    pub show_labels: bool,
    pub show_time: bool,
    pub wrap_message: bool,
    pub prettify_message: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            show_labels: false,
            show_time: true,
            wrap_message: true,
            prettify_message: false,
        }
    }
}

impl DisplayPreferences {
    /// Read all four preferences. Missing or corrupted entries degrade to
    /// the documented defaults.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            show_labels: store.get_bool(settings_keys::SHOW_LABELS, defaults.show_labels),
            show_time: store.get_bool(settings_keys::SHOW_TIME, defaults.show_time),
            wrap_message: store.get_bool(settings_keys::WRAP_LOG_MESSAGE, defaults.wrap_message),
            prettify_message: store.get_bool(
                settings_keys::PRETTIFY_LOG_MESSAGE,
                defaults.prettify_message,
            ),
        }
    }
}
