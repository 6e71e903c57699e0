//! Data-source capability seam.
//!
//! Data sources are external collaborators that execute queries. The panel
//! core never runs a query; it only asks a source whether it can derive a
//! given supplementary query kind, and lets it do the derivation.

use crate::query::{DataQuery, SupplementaryQueryType};

/// Handle to an active data source instance.
pub trait DataSource {
    /// Stable uid of this source instance.
    fn uid(&self) -> &str;

    /// Plugin type of this source (e.g. "loki"). Used for telemetry labels.
    fn source_type(&self) -> &str;

    /// Capability seam for derived supplementary queries. Sources without
    /// the capability return `None`, which is not an error - the feature is
    /// simply unavailable.
    fn supplementary_queries(&self) -> Option<&dyn SupplementaryQuerySupport> {
        None
    }
}

/// Implemented by data sources that can derive supplementary queries from
/// primary ones.
pub trait SupplementaryQuerySupport {
    /// Whether this source can derive queries of `kind` at all.
    fn supports(&self, kind: SupplementaryQueryType) -> bool;

    /// Derive the supplementary query of `kind` for one primary query.
    /// `None` means this particular query has no derivable counterpart.
    fn derive(&self, kind: SupplementaryQueryType, query: &DataQuery) -> Option<DataQuery>;
}

/// Typed predicate for the capability check. Total over absent sources.
pub fn has_supplementary_query_support(
    source: Option<&dyn DataSource>,
    kind: SupplementaryQueryType,
) -> bool {
    source
        .and_then(|source| source.supplementary_queries())
        .map(|support| support.supports(kind))
        .unwrap_or(false)
}
