//! Write batches — ordered parameter updates submitted as one logical
//! change, plus the per-entry outcomes reported back to the caller.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::value::{ParamValue, ValueKind};

/// The channel that originated a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteSource {
    /// A remote client application.
    #[default]
    App,
    /// A time-based schedule.
    Schedule,
    /// Startup initialization pushing defaults to hardware.
    Init,
    /// A local actor on the node itself.
    Local,
}

impl std::fmt::Display for WriteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::App => f.write_str("app"),
            Self::Schedule => f.write_str("schedule"),
            Self::Init => f.write_str("init"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// A single proposed parameter update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub param: String,
    pub value: ParamValue,
}

/// An ordered sequence of updates submitted together as one logical write.
///
/// Entries are applied in submission order; nothing is reordered or
/// coalesced, even when several entries target the same parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteBatch {
    pub source: WriteSource,
    pub writes: Vec<WriteRequest>,
}

impl WriteBatch {
    /// Create an empty batch for the given source channel.
    #[must_use]
    pub fn new(source: WriteSource) -> Self {
        Self {
            source,
            writes: Vec::new(),
        }
    }

    /// Create a batch holding a single entry.
    #[must_use]
    pub fn single(source: WriteSource, param: impl Into<String>, value: ParamValue) -> Self {
        Self::new(source).with(param, value)
    }

    /// Append an entry, preserving submission order.
    #[must_use]
    pub fn with(mut self, param: impl Into<String>, value: ParamValue) -> Self {
        self.writes.push(WriteRequest {
            param: param.into(),
            value,
        });
        self
    }

    /// Number of entries in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Whether the batch has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

/// Why a single batch entry was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// The device defines no parameter with the requested name.
    #[error("parameter is not defined on the device")]
    UnknownParam,

    /// The parameter is not writable.
    #[error("parameter is not writable")]
    NotWritable,

    /// The proposed value's type does not match the declared type.
    #[error("expected {expected}, got {got}")]
    TypeMismatch { expected: ValueKind, got: ValueKind },

    /// The proposed numeric value violates the declared bounds.
    #[error("value outside bounds {min}..={max}")]
    OutOfBounds { min: i64, max: i64 },
}

/// Outcome of one batch entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WriteStatus {
    /// The value was committed (and the driver invoked, if routed).
    Applied,
    /// The entry was rejected; the rest of the batch still ran.
    Rejected { reason: RejectReason },
}

impl WriteStatus {
    /// Whether this entry was committed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// The per-entry outcome for one parameter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryOutcome {
    pub param: String,
    #[serde(flatten)]
    pub status: WriteStatus,
}

/// The dispatcher's summary of one processed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteReport {
    pub device_id: DeviceId,
    pub source: WriteSource,
    pub outcomes: Vec<EntryOutcome>,
}

impl WriteReport {
    /// Number of committed entries.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status.is_applied())
            .count()
    }

    /// Number of rejected entries.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.applied()
    }

    /// Whether every entry was committed. An empty batch counts as fully
    /// applied.
    #[must_use]
    pub fn is_fully_applied(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_applied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_source_to_app() {
        assert_eq!(WriteSource::default(), WriteSource::App);
    }

    #[test]
    fn should_display_lowercase_source_names() {
        assert_eq!(WriteSource::App.to_string(), "app");
        assert_eq!(WriteSource::Schedule.to_string(), "schedule");
        assert_eq!(WriteSource::Init.to_string(), "init");
        assert_eq!(WriteSource::Local.to_string(), "local");
    }

    #[test]
    fn should_preserve_entry_order_when_building_batch() {
        let batch = WriteBatch::new(WriteSource::App)
            .with("Power", ParamValue::Bool(true))
            .with("Brightness", ParamValue::Int(80));

        let params: Vec<&str> = batch.writes.iter().map(|w| w.param.as_str()).collect();
        assert_eq!(params, vec!["Power", "Brightness"]);
    }

    #[test]
    fn should_build_single_entry_batch() {
        let batch = WriteBatch::single(WriteSource::Local, "Power", ParamValue::Bool(true));
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_empty());
    }

    #[test]
    fn should_report_empty_batch_as_empty() {
        let batch = WriteBatch::new(WriteSource::Init);
        assert_eq!(batch.len(), 0);
        assert!(batch.is_empty());
    }

    #[test]
    fn should_count_applied_and_rejected_outcomes() {
        let report = WriteReport {
            device_id: DeviceId::new(),
            source: WriteSource::App,
            outcomes: vec![
                EntryOutcome {
                    param: "Power".to_string(),
                    status: WriteStatus::Applied,
                },
                EntryOutcome {
                    param: "Brightness".to_string(),
                    status: WriteStatus::Rejected {
                        reason: RejectReason::OutOfBounds { min: 0, max: 100 },
                    },
                },
            ],
        };

        assert_eq!(report.applied(), 1);
        assert_eq!(report.rejected(), 1);
        assert!(!report.is_fully_applied());
    }

    #[test]
    fn should_treat_empty_report_as_fully_applied() {
        let report = WriteReport {
            device_id: DeviceId::new(),
            source: WriteSource::App,
            outcomes: vec![],
        };
        assert!(report.is_fully_applied());
    }

    #[test]
    fn should_serialize_applied_outcome_with_flat_status() {
        let outcome = EntryOutcome {
            param: "Power".to_string(),
            status: WriteStatus::Applied,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["param"], "Power");
        assert_eq!(json["status"], "applied");
    }

    #[test]
    fn should_serialize_rejection_with_reason() {
        let outcome = EntryOutcome {
            param: "Temperature Set".to_string(),
            status: WriteStatus::Rejected {
                reason: RejectReason::OutOfBounds { min: 15, max: 30 },
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"]["kind"], "out_of_bounds");
        assert_eq!(json["reason"]["min"], 15);
    }

    #[test]
    fn should_format_reject_reasons_for_logs() {
        assert_eq!(
            RejectReason::NotWritable.to_string(),
            "parameter is not writable"
        );
        assert_eq!(
            RejectReason::OutOfBounds { min: 15, max: 30 }.to_string(),
            "value outside bounds 15..=30"
        );
    }
}
