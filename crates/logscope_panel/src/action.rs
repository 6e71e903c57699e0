//! Capability-gated split-view action.

use logscope_protocol::{
    has_supplementary_query_support, DataQuery, DataSource, SupplementaryQueryType,
};
use serde::{Deserialize, Serialize};

/// Everything the split-view destination needs to re-run the sample query in
/// its own pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitViewAction {
    pub query: DataQuery,
    pub datasource_uid: String,
}

/// Build the "open logs in split view" action, or `None` when the feature is
/// unavailable.
///
/// Unavailable means: no active data source, the source does not declare
/// logs-sample support, or none of the primary queries derives a sample
/// query. None of these is an error.
///
/// Policy: derive the full list, use the first. The split-view destination
/// accepts exactly one query, so extra derived queries are dropped silently.
pub fn build_split_view_action(
    source: Option<&dyn DataSource>,
    queries: &[DataQuery],
) -> Option<SplitViewAction> {
    if !has_supplementary_query_support(source, SupplementaryQueryType::LogsSample) {
        return None;
    }
    let source = source?;
    let support = source.supplementary_queries()?;

    let derived: Vec<DataQuery> = queries
        .iter()
        .filter_map(|query| support.derive(SupplementaryQueryType::LogsSample, query))
        .collect();

    derived.into_iter().next().map(|query| SplitViewAction {
        query,
        datasource_uid: source.uid().to_string(),
    })
}
