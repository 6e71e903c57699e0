//! Panel controller: a stateless projection of caller inputs into one render
//! description.

use std::sync::Arc;

use logscope_protocol::{DataQuery, DataSource, QueryError, QueryResponse, Record};
use logscope_store::SettingsStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{build_split_view_action, SplitViewAction};
use crate::prefs::DisplayPreferences;
use crate::resolve::{resolve, RenderState};
use crate::telemetry::{
    report_interaction, TelemetrySink, ToggleDirection, ToggleInteraction,
    LOGS_SAMPLE_TOGGLE_EVENT,
};

/// Section label shown by the collapsible container.
pub const PANEL_LABEL: &str = "Logs sample";
/// Title handed to the error banner alongside the query error.
pub const ERROR_TITLE: &str = "Failed to load logs sample for this query";
/// Status line while the sample query is in flight.
pub const LOADING_MESSAGE: &str = "Logs sample is loading...";
/// Status line when the sample query finished without results.
pub const NO_DATA_MESSAGE: &str = "No logs sample data.";
/// Label of the capability-gated split-view action.
pub const SPLIT_VIEW_BUTTON_LABEL: &str = "Open logs in split view";

/// Row dedup strategies understood by the row renderer. The sample panel
/// always renders undeduplicated rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DedupStrategy {
    #[default]
    None,
    Exact,
    Numbers,
    Signature,
}

/// Everything the caller hands in per render. The panel owns none of it; in
/// particular, visibility belongs to the parent view and is only mutated
/// through [`LogsSamplePanel::toggle`].
pub struct PanelInput<'a> {
    pub response: Option<&'a QueryResponse>,
    pub enabled: bool,
    pub time_zone: &'a str,
    pub queries: &'a [DataQuery],
    pub datasource: Option<&'a dyn DataSource>,
}

/// Props for the collapsible-container collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollapseProps {
    pub label: &'static str,
    pub is_open: bool,
    pub collapsible: bool,
}

/// Props for the error-display collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBannerProps {
    pub error: QueryError,
    pub title: &'static str,
}

/// Props for the row-rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRowsProps {
    /// Frames flattened in order into a display row bundle.
    pub rows: Vec<Record>,
    pub dedup: DedupStrategy,
    pub show_labels: bool,
    pub show_time: bool,
    pub wrap_message: bool,
    pub prettify_message: bool,
    pub time_zone: String,
    pub enable_details: bool,
}

/// Body of the panel, one variant per render state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelBody {
    Empty,
    Error(ErrorBannerProps),
    Loading,
    NoData,
    Rows {
        rows: LogRowsProps,
        split_view: Option<SplitViewAction>,
    },
}

impl PanelBody {
    /// Canonical status line for body variants that show one.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            PanelBody::Loading => Some(LOADING_MESSAGE),
            PanelBody::NoData => Some(NO_DATA_MESSAGE),
            _ => None,
        }
    }
}

/// Complete render decision for one update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelDescription {
    pub collapse: CollapseProps,
    pub body: PanelBody,
}

/// The logs sample panel controller.
///
/// Holds no render state of its own: `render` is recomputed from scratch on
/// every input change, so every combination of inputs maps to a valid
/// description. The only effectful operation is `toggle`.
pub struct LogsSamplePanel {
    telemetry: Arc<dyn TelemetrySink>,
}

impl LogsSamplePanel {
    pub fn new(telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { telemetry }
    }

    /// Project the current inputs into a render description.
    ///
    /// The split-view action and the display preferences are only computed
    /// for the ready state: the action is meaningless otherwise and the
    /// preference store is not read at all on the other paths.
    pub fn render(&self, input: &PanelInput<'_>, store: &dyn SettingsStore) -> PanelDescription {
        let body = match resolve(input.response) {
            RenderState::Empty => PanelBody::Empty,
            RenderState::Error(error) => PanelBody::Error(ErrorBannerProps {
                error: error.clone(),
                title: ERROR_TITLE,
            }),
            RenderState::Loading => PanelBody::Loading,
            RenderState::NoData => PanelBody::NoData,
            RenderState::Ready(frames) => {
                let split_view = build_split_view_action(input.datasource, input.queries);
                let prefs = DisplayPreferences::load(store);
                let rows: Vec<Record> = frames
                    .iter()
                    .flat_map(|frame| frame.records.iter().cloned())
                    .collect();
                debug!(rows = rows.len(), "logs sample panel ready");
                PanelBody::Rows {
                    rows: LogRowsProps {
                        rows,
                        dedup: DedupStrategy::None,
                        show_labels: prefs.show_labels,
                        show_time: prefs.show_time,
                        wrap_message: prefs.wrap_message,
                        prettify_message: prefs.prettify_message,
                        time_zone: input.time_zone.to_string(),
                        enable_details: true,
                    },
                    split_view,
                }
            }
        };

        PanelDescription {
            collapse: CollapseProps {
                label: PANEL_LABEL,
                is_open: input.enabled,
                collapsible: true,
            },
            body,
        }
    }

    /// Request a visibility change and report the interaction.
    ///
    /// The callback runs first and always runs; the telemetry event is
    /// emitted exactly once afterwards and a sink failure never undoes or
    /// blocks the toggle.
    pub fn toggle(
        &self,
        next_open: bool,
        datasource: Option<&dyn DataSource>,
        on_visibility_change: &mut dyn FnMut(bool),
    ) {
        on_visibility_change(next_open);

        let datasource_type = datasource
            .map(|source| source.source_type().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        report_interaction(
            self.telemetry.as_ref(),
            LOGS_SAMPLE_TOGGLE_EVENT,
            &ToggleInteraction {
                datasource_type,
                direction: ToggleDirection::from_open(next_open),
            },
        );
    }
}
