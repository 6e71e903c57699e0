//! Logs sample panel core.
//!
//! Renders the outcome of a supplementary logs-sample query alongside a
//! primary query in the explore view. The core is deliberately thin: a pure
//! classification of the current `QueryResponse` into one of five render
//! states, capability-gated construction of the "open in split view" action,
//! a read-only view onto persisted display preferences, and one effectful
//! toggle operation that reports an interaction event.
//!
//! Nothing here executes queries or draws widgets. The panel produces a
//! `PanelDescription` of plain prop structs and the host's collapsible
//! container, row renderer, and error banner consume it.

pub mod action;
pub mod panel;
pub mod prefs;
pub mod resolve;
pub mod telemetry;

pub use action::{build_split_view_action, SplitViewAction};
pub use panel::{
    CollapseProps, DedupStrategy, ErrorBannerProps, LogRowsProps, LogsSamplePanel, PanelBody,
    PanelDescription, PanelInput, ERROR_TITLE, LOADING_MESSAGE, NO_DATA_MESSAGE, PANEL_LABEL,
    SPLIT_VIEW_BUTTON_LABEL,
};
pub use prefs::{settings_keys, DisplayPreferences};
pub use resolve::{resolve, RenderState};
pub use telemetry::{
    EventEnvelope, NdjsonTelemetry, TelemetryError, TelemetrySink, ToggleDirection,
    ToggleInteraction, LOGS_SAMPLE_TOGGLE_EVENT,
};
