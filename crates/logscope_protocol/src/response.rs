//! Fully materialized query outcomes.
//!
//! A `QueryResponse` is a snapshot of a query at one point in time. It holds
//! no identity across renders: the caller hands a fresh value to the panel on
//! every update and asynchronous fetching stays entirely upstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a query at the moment the response was materialized.
/// This is the CANONICAL definition - use this everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadingState {
    /// Query has not been issued yet.
    #[default]
    NotStarted,
    /// Query is in flight.
    Loading,
    /// Query finished; `data` may still be empty (no results).
    Done,
    /// Query failed; the error rides in `QueryResponse::error`.
    Error,
}

impl LoadingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingState::NotStarted => "NOT_STARTED",
            LoadingState::Loading => "LOADING",
            LoadingState::Done => "DONE",
            LoadingState::Error => "ERROR",
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LoadingState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NOT_STARTED" => Ok(LoadingState::NotStarted),
            "LOADING" => Ok(LoadingState::Loading),
            "DONE" => Ok(LoadingState::Done),
            "ERROR" => Ok(LoadingState::Error),
            _ => Err(format!(
                "Invalid loading state: '{}'. Expected: NOT_STARTED, LOADING, DONE, or ERROR",
                s
            )),
        }
    }
}

/// Error carried inside a failed query response. Never thrown: the panel
/// surfaces it as a rendered error state and never retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    pub message: String,
    /// Ref id of the query that failed, when the upstream engine knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    /// HTTP-ish status code from the data source, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ref_id: None,
            status_code: None,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A single record inside a result frame. The panel never inspects record
/// contents, so the payload stays schemaless JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub serde_json::Value);

/// An ordered batch of records produced by query execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl DataFrame {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            name: None,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Outcome of a supplementary query at a point in time.
///
/// Invariant: `error` is present iff `state == LoadingState::Error`. The
/// constructors uphold it; consumers stay total even for values built by
/// hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryResponse {
    pub state: LoadingState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<QueryError>,
    #[serde(default)]
    pub data: Vec<DataFrame>,
}

impl QueryResponse {
    /// Response for a query that has not been issued.
    pub fn not_started() -> Self {
        Self::default()
    }

    /// Response for a query still in flight.
    pub fn loading() -> Self {
        Self {
            state: LoadingState::Loading,
            error: None,
            data: Vec::new(),
        }
    }

    /// Successful response. Empty `frames` means "no results", which is
    /// distinct from "not yet run".
    pub fn done(frames: Vec<DataFrame>) -> Self {
        Self {
            state: LoadingState::Done,
            error: None,
            data: frames,
        }
    }

    /// Failed response. Any partial frames the engine produced before the
    /// failure may still be attached by the caller via `data`.
    pub fn failed(error: QueryError) -> Self {
        Self {
            state: LoadingState::Error,
            error: Some(error),
            data: Vec::new(),
        }
    }
}
