//! Domain event infrastructure
//!
//! Commands that change a project raise an event. The service appends a
//! snapshot of each one to an [`EventLog`], oldest first; entries are never
//! edited once written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base trait for all domain events
pub trait DomainEvent: Send + Sync {
    /// Stable snake_case name of the event
    fn event_type(&self) -> &str;

    /// The project the event belongs to
    fn aggregate_id(&self) -> u64;

    fn timestamp(&self) -> DateTime<Utc>;

    /// Optional payload as JSON
    fn data(&self) -> Option<&serde_json::Value>;
}

/// Snapshot of a domain event as kept in the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedEvent {
    pub id: Uuid,
    pub aggregate_id: u64,
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub recorded_at: DateTime<Utc>,
}

impl LoggedEvent {
    /// Snapshot any domain event
    pub fn capture(event: &dyn DomainEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            aggregate_id: event.aggregate_id(),
            event_type: event.event_type().to_string(),
            data: event.data().cloned(),
            recorded_at: event.timestamp(),
        }
    }
}

/// Append-only, in-memory log of domain events
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LoggedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `event` and return it
    pub fn append(&mut self, event: &dyn DomainEvent) -> &LoggedEvent {
        let index = self.entries.len();
        self.entries.push(LoggedEvent::capture(event));
        &self.entries[index]
    }

    /// Every entry, oldest first
    pub fn entries(&self) -> &[LoggedEvent] {
        &self.entries
    }

    /// Entries for one project, oldest first
    pub fn for_aggregate(&self, aggregate_id: u64) -> impl Iterator<Item = &LoggedEvent> {
        self.entries
            .iter()
            .filter(move |e| e.aggregate_id == aggregate_id)
    }

    /// Entries with the given event type, oldest first
    pub fn of_type<'a>(&'a self, event_type: &'a str) -> impl Iterator<Item = &'a LoggedEvent> {
        self.entries.iter().filter(move |e| e.event_type == event_type)
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<&LoggedEvent> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Touched {
        project: u64,
        kind: &'static str,
        payload: Option<serde_json::Value>,
        at: DateTime<Utc>,
    }

    impl DomainEvent for Touched {
        fn event_type(&self) -> &str {
            self.kind
        }

        fn aggregate_id(&self) -> u64 {
            self.project
        }

        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }

        fn data(&self) -> Option<&serde_json::Value> {
            self.payload.as_ref()
        }
    }

    fn touched(project: u64, kind: &'static str) -> Touched {
        Touched {
            project,
            kind,
            payload: None,
            at: Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_append_captures_event() {
        let mut log = EventLog::new();
        let event = Touched {
            payload: Some(serde_json::json!({"starred": true})),
            ..touched(4, "star_changed")
        };

        let entry = log.append(&event).clone();
        assert_eq!(entry.aggregate_id, 4);
        assert_eq!(entry.event_type, "star_changed");
        assert_eq!(entry.data, Some(serde_json::json!({"starred": true})));
        assert_eq!(entry.recorded_at, event.at);
        assert_eq!(log.latest(), Some(&entry));
    }

    #[test]
    fn test_queries_keep_append_order() {
        let mut log = EventLog::new();
        log.append(&touched(1, "project_created"));
        log.append(&touched(2, "star_changed"));
        log.append(&touched(1, "archive_changed"));

        let first: Vec<&str> = log.for_aggregate(1).map(|e| e.event_type.as_str()).collect();
        assert_eq!(first, vec!["project_created", "archive_changed"]);
        assert_eq!(log.of_type("star_changed").count(), 1);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_empty_log() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.for_aggregate(1).count(), 0);
    }

    #[test]
    fn test_logged_event_wire_names() {
        let mut log = EventLog::new();
        let json = serde_json::to_value(log.append(&touched(3, "progress_updated"))).unwrap();
        assert_eq!(json["aggregateId"], 3);
        assert_eq!(json["eventType"], "progress_updated");
        assert!(json.get("data").is_none());
        assert!(json.get("recordedAt").is_some());
    }
}
