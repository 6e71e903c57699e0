//! Response-state resolution.

use logscope_protocol::{DataFrame, LoadingState, QueryError, QueryResponse};

/// One of five mutually exclusive display modes for the panel body.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<'a> {
    /// No response at all: the query has not been issued (e.g. the feature
    /// is disabled upstream). The panel body shows nothing.
    Empty,
    /// The response carries an error, surfaced regardless of `state` or any
    /// partial data.
    Error(&'a QueryError),
    /// The query is still in flight.
    Loading,
    /// The query finished but produced nothing to show.
    NoData,
    /// Frames ready for the row renderer.
    Ready(&'a [DataFrame]),
}

/// Classify the current response into a render state.
///
/// Pure and idempotent: same input, same state, no counters or caches.
/// The conditions short-circuit in this exact order:
/// absent response, error, loading, empty data, ready.
pub fn resolve(response: Option<&QueryResponse>) -> RenderState<'_> {
    let Some(response) = response else {
        return RenderState::Empty;
    };
    if let Some(error) = response.error.as_ref() {
        return RenderState::Error(error);
    }
    if response.state == LoadingState::Loading {
        return RenderState::Loading;
    }
    // A lone empty first frame counts as no data even when later frames
    // would not: the row model is built from the frames in order.
    if response.data.is_empty() || response.data[0].is_empty() {
        return RenderState::NoData;
    }
    RenderState::Ready(&response.data)
}
