//! Outbound query definitions and supplementary query kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An outbound query definition plus the identifier of its originating data
/// source. Immutable once built; supplied fresh by the caller on every
/// render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuery {
    /// Caller-assigned reference id, unique within one request (e.g. "A").
    pub ref_id: String,
    /// Query text in the data source's own language.
    pub expr: String,
    /// Uid of the data source this query targets, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource_uid: Option<String>,
}

impl DataQuery {
    pub fn new(ref_id: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            expr: expr.into(),
            datasource_uid: None,
        }
    }

    pub fn with_datasource_uid(mut self, uid: impl Into<String>) -> Self {
        self.datasource_uid = Some(uid.into());
        self
    }
}

/// Kind of supplementary query a data source may derive from a primary
/// query. This is the CANONICAL definition - use this everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementaryQueryType {
    /// A small sample of raw log lines matching the primary query.
    LogsSample,
    /// Log counts over time matching the primary query.
    LogsVolume,
}

impl SupplementaryQueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplementaryQueryType::LogsSample => "logs_sample",
            SupplementaryQueryType::LogsVolume => "logs_volume",
        }
    }
}

impl fmt::Display for SupplementaryQueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("invalid supplementary query type: '{0}'. Expected: logs_sample or logs_volume")]
pub struct ParseSupplementaryQueryTypeError(String);

impl FromStr for SupplementaryQueryType {
    type Err = ParseSupplementaryQueryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logs_sample" => Ok(SupplementaryQueryType::LogsSample),
            "logs_volume" => Ok(SupplementaryQueryType::LogsVolume),
            _ => Err(ParseSupplementaryQueryTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplementary_query_type_round_trips_as_str() {
        for kind in [
            SupplementaryQueryType::LogsSample,
            SupplementaryQueryType::LogsVolume,
        ] {
            assert_eq!(kind.as_str().parse::<SupplementaryQueryType>().unwrap(), kind);
        }
    }

    #[test]
    fn supplementary_query_type_rejects_unknown() {
        assert!("traces_sample".parse::<SupplementaryQueryType>().is_err());
    }

    #[test]
    fn data_query_builder_pins_datasource() {
        let query = DataQuery::new("A", "{app=\"api\"}").with_datasource_uid("loki-1");
        assert_eq!(query.datasource_uid.as_deref(), Some("loki-1"));
    }
}
