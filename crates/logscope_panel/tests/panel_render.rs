//! End-to-end panel flow against the real file store and NDJSON telemetry.

use std::sync::Arc;

use logscope_panel::{
    settings_keys, EventEnvelope, LogsSamplePanel, NdjsonTelemetry, PanelBody, PanelInput,
    LOGS_SAMPLE_TOGGLE_EVENT,
};
use logscope_protocol::{
    DataFrame, DataQuery, DataSource, QueryResponse, Record, SupplementaryQuerySupport,
    SupplementaryQueryType,
};
use logscope_store::{FileSettingsStore, SettingsStore};
use serde_json::json;
use tempfile::TempDir;

struct LokiLike;

impl DataSource for LokiLike {
    fn uid(&self) -> &str {
        "loki-main"
    }

    fn source_type(&self) -> &str {
        "loki"
    }

    fn supplementary_queries(&self) -> Option<&dyn SupplementaryQuerySupport> {
        Some(self)
    }
}

impl SupplementaryQuerySupport for LokiLike {
    fn supports(&self, kind: SupplementaryQueryType) -> bool {
        kind == SupplementaryQueryType::LogsSample
    }

    fn derive(&self, kind: SupplementaryQueryType, query: &DataQuery) -> Option<DataQuery> {
        self.supports(kind)
            .then(|| DataQuery::new(query.ref_id.clone(), query.expr.clone()))
    }
}

fn sample_response() -> QueryResponse {
    QueryResponse::done(vec![
        DataFrame::new(vec![
            Record(json!({"ts": "2026-08-29T10:00:00Z", "line": "GET /health 200"})),
            Record(json!({"ts": "2026-08-29T10:00:01Z", "line": "GET /jobs 200"})),
        ]),
        DataFrame::new(vec![Record(
            json!({"ts": "2026-08-29T10:00:02Z", "line": "POST /jobs 201"}),
        )]),
    ])
}

#[test]
fn full_render_and_toggle_flow() {
    let dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(dir.path().join("settings.json"));
    store.set_bool(settings_keys::SHOW_LABELS, true).unwrap();

    let tape_path = dir.path().join("telemetry.ndjson");
    let telemetry = Arc::new(NdjsonTelemetry::open(&tape_path).unwrap());
    let panel = LogsSamplePanel::new(telemetry);

    let response = sample_response();
    let queries = vec![DataQuery::new("A", "{app=\"api\"}")];
    let source = LokiLike;

    let description = panel.render(
        &PanelInput {
            response: Some(&response),
            enabled: true,
            time_zone: "Europe/Berlin",
            queries: &queries,
            datasource: Some(&source),
        },
        &store,
    );

    assert!(description.collapse.is_open);
    match description.body {
        PanelBody::Rows { rows, split_view } => {
            // Two frames flattened in order into three rows.
            assert_eq!(rows.rows.len(), 3);
            assert!(rows.show_labels);
            assert_eq!(rows.time_zone, "Europe/Berlin");
            let action = split_view.expect("loki-like source offers split view");
            assert_eq!(action.datasource_uid, "loki-main");
        }
        other => panic!("expected rows body, got {:?}", other),
    }

    // A collapse followed by a reopen writes two tape events.
    let mut visibility = Vec::new();
    panel.toggle(false, Some(&source), &mut |open| visibility.push(open));
    panel.toggle(true, Some(&source), &mut |open| visibility.push(open));
    assert_eq!(visibility, vec![false, true]);

    let raw = std::fs::read_to_string(&tape_path).unwrap();
    let envelopes: Vec<EventEnvelope> = raw
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(envelopes.len(), 2);
    assert!(envelopes
        .iter()
        .all(|envelope| envelope.event == LOGS_SAMPLE_TOGGLE_EVENT));
    assert_eq!(envelopes[0].payload["type"], "close");
    assert_eq!(envelopes[1].payload["type"], "open");
    assert_eq!(envelopes[0].payload["datasourceType"], "loki");
}

#[test]
fn preference_edit_between_renders_takes_effect() {
    let dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(dir.path().join("settings.json"));
    let telemetry = Arc::new(NdjsonTelemetry::open(&dir.path().join("t.ndjson")).unwrap());
    let panel = LogsSamplePanel::new(telemetry);

    let response = sample_response();
    let base = PanelInput {
        response: Some(&response),
        enabled: true,
        time_zone: "utc",
        queries: &[],
        datasource: None,
    };

    let before = panel.render(&base, &store);
    // A companion panel flips wrapping between our renders.
    store.set_bool(settings_keys::WRAP_LOG_MESSAGE, false).unwrap();
    let after = panel.render(&base, &store);

    let wrap = |description: &logscope_panel::PanelDescription| match &description.body {
        PanelBody::Rows { rows, .. } => rows.wrap_message,
        other => panic!("expected rows body, got {:?}", other),
    };
    assert!(wrap(&before));
    assert!(!wrap(&after));
}
