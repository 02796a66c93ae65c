//! Audit event emission.
//!
//! The run committer notifies an external audit-log collaborator after a
//! successful commit. Audit delivery is best-effort: a failed audit write
//! is logged and never rolls back or fails the commit.

use serde::{Deserialize, Serialize};
use tracing::info;

/// An event destined for the external audit-log collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The action performed (e.g. "payroll_run_committed").
    pub action: String,
    /// The entity type the action applies to.
    pub entity_type: String,
    /// The id of the affected entity.
    pub entity_id: String,
    /// Free-form structured metadata about the action.
    pub metadata: serde_json::Value,
}

/// Sink accepting audit events.
///
/// Implementations may deliver to a database, a message bus, or a log;
/// the committer treats any failure as non-fatal.
pub trait AuditSink: Send + Sync {
    /// Records one audit event.
    fn record(&self, event: AuditEvent) -> Result<(), String>;
}

/// An [`AuditSink`] that emits events as structured `tracing` logs.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) -> Result<(), String> {
        info!(
            action = %event.action,
            entity_type = %event.entity_type,
            entity_id = %event.entity_id,
            metadata = %event.metadata,
            "audit event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = AuditEvent {
            action: "payroll_run_committed".to_string(),
            entity_type: "payroll_run".to_string(),
            entity_id: "00000000-0000-0000-0000-000000000000".to_string(),
            metadata: serde_json::json!({"month": 3, "year": 2026}),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"action\":\"payroll_run_committed\""));
        assert!(json.contains("\"month\":3"));
    }

    #[test]
    fn test_tracing_sink_accepts_events() {
        let sink = TracingAuditSink;
        let result = sink.record(AuditEvent {
            action: "payroll_run_committed".to_string(),
            entity_type: "payroll_run".to_string(),
            entity_id: "run_1".to_string(),
            metadata: serde_json::Value::Null,
        });
        assert!(result.is_ok());
    }
}
