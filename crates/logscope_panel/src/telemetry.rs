//! Interaction telemetry for explore panels.
//!
//! Sinks receive named events with a JSON payload wrapped in a small
//! versioned envelope. Emission is strictly best-effort: a sink failure is
//! logged and swallowed, it never blocks or fails the user interaction that
//! produced the event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Event emitted when the user opens or closes the logs sample section.
pub const LOGS_SAMPLE_TOGGLE_EVENT: &str = "logscope_explore_logs_sample_toggle_clicked";

/// Errors that can occur while writing telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to acquire telemetry writer lock")]
    LockError,
}

/// Destination for interaction events.
pub trait TelemetrySink: Send + Sync {
    fn report(&self, event: &str, payload: &serde_json::Value) -> Result<(), TelemetryError>;
}

/// Direction of a panel toggle interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleDirection {
    Open,
    Close,
}

impl ToggleDirection {
    pub fn from_open(open: bool) -> Self {
        if open {
            ToggleDirection::Open
        } else {
            ToggleDirection::Close
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleDirection::Open => "open",
            ToggleDirection::Close => "close",
        }
    }
}

impl fmt::Display for ToggleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wire payload of the toggle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleInteraction {
    #[serde(rename = "datasourceType")]
    pub datasource_type: String,
    #[serde(rename = "type")]
    pub direction: ToggleDirection,
}

/// Envelope wrapped around every recorded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Envelope schema version (always 1 for now).
    pub schema_version: u32,
    /// Unique identifier for this event (UUID v4).
    pub event_id: String,
    /// Monotonically increasing sequence number within the sink.
    pub seq: u64,
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Event name.
    pub event: String,
    /// Event-specific payload.
    pub payload: serde_json::Value,
}

/// File-backed sink appending one JSON envelope per line.
pub struct NdjsonTelemetry {
    writer: Mutex<BufWriter<std::fs::File>>,
    seq: AtomicU64,
}

impl NdjsonTelemetry {
    pub fn open(path: &Path) -> Result<Self, TelemetryError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            seq: AtomicU64::new(0),
        })
    }
}

impl TelemetrySink for NdjsonTelemetry {
    fn report(&self, event: &str, payload: &serde_json::Value) -> Result<(), TelemetryError> {
        let envelope = EventEnvelope {
            schema_version: 1,
            event_id: Uuid::new_v4().to_string(),
            seq: self.seq.fetch_add(1, Ordering::SeqCst),
            timestamp: Utc::now(),
            event: event.to_string(),
            payload: payload.clone(),
        };
        let line = serde_json::to_string(&envelope)?;

        let mut writer = self.writer.lock().map_err(|_| TelemetryError::LockError)?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Serialize and hand `payload` to the sink, swallowing any failure.
///
/// Interaction reporting must never break the interaction itself, so both
/// serialization and sink errors degrade to a warning.
pub(crate) fn report_interaction<T: Serialize>(sink: &dyn TelemetrySink, event: &str, payload: &T) {
    let payload = match serde_json::to_value(payload) {
        Ok(value) => value,
        Err(err) => {
            warn!("Failed to serialize telemetry payload for {}: {}", event, err);
            return;
        }
    };
    if let Err(err) = sink.report(event, &payload) {
        warn!("Failed to emit telemetry event {}: {}", event, err);
    }
}
