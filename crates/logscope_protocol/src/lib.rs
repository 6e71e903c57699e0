//! Canonical query and data-source types for Logscope.
//!
//! Everything the explore panels consume arrives through these types: the
//! outcome of an asynchronous query (`QueryResponse`), the outbound query
//! definitions (`DataQuery`), and the capability seam data sources implement
//! to declare which supplementary query kinds they can derive.

pub mod query;
pub mod response;
pub mod source;

pub use query::{DataQuery, ParseSupplementaryQueryTypeError, SupplementaryQueryType};
pub use response::{DataFrame, LoadingState, QueryError, QueryResponse, Record};
pub use source::{has_supplementary_query_support, DataSource, SupplementaryQuerySupport};
