// ── In-memory event collection ──
//
// The catalog is the client's snapshot of the backend's event set: loaded
// once (JSON export or future live fetch), then read by the engines. It
// never mutates events and holds no cross-call state beyond the snapshot.

use std::io::Read;
use std::path::Path;

use crate::error::CoreError;
use crate::model::{Event, EventId};

/// An immutable snapshot of the event collection.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Parse a catalog from a JSON array of backend event documents.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, CoreError> {
        let events: Vec<Event> = serde_json::from_reader(reader)?;
        Ok(Self { events })
    }

    /// Load a catalog from a JSON snapshot file.
    pub fn load_from_path(path: &Path) -> Result<Self, CoreError> {
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_json_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            count = catalog.len(),
            "loaded event snapshot"
        );
        Ok(catalog)
    }

    /// All events, in snapshot order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up an event by its backend id.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// Resolve an event by id, falling back to a case-insensitive name
    /// match, the way a user would type either into the shell.
    pub fn find(&self, identifier: &str) -> Result<&Event, CoreError> {
        if let Some(event) = self.events.iter().find(|e| e.id.as_str() == identifier) {
            return Ok(event);
        }
        self.events
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(identifier))
            .ok_or_else(|| CoreError::EventNotFound {
                identifier: identifier.to_owned(),
            })
    }

    /// Distinct tags with event counts, in first-seen order. Feeds the
    /// tag chip row.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for event in &self.events {
            for tag in &event.tags {
                match counts.iter_mut().find(|(name, _)| name == tag) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((tag.clone(), 1)),
                }
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"[
        {
            "id": "evt-1",
            "name": "Summer Basketball Tournament",
            "description": "Join us for an exciting tournament",
            "tags": ["Sports", "Tournament"],
            "status": "open",
            "capacity": 50,
            "waitlistCount": 28
        },
        {
            "id": "evt-2",
            "name": "Art Fair",
            "description": "Local artists showcase",
            "tags": ["Arts"],
            "status": "closed",
            "price": 12.5
        }
    ]"#;

    #[test]
    fn parses_a_json_snapshot() {
        let catalog = EventCatalog::from_json_reader(SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.events()[0].waitlist_count, 28);
    }

    #[test]
    fn load_from_path_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        let catalog = EventCatalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn malformed_snapshot_is_a_json_error() {
        let result = EventCatalog::from_json_reader("{not json".as_bytes());
        assert!(matches!(result, Err(CoreError::Json(_))));
    }

    #[test]
    fn get_by_id() {
        let catalog = EventCatalog::from_json_reader(SNAPSHOT.as_bytes()).unwrap();
        let id = EventId::new("evt-2");
        assert_eq!(catalog.get(&id).unwrap().name, "Art Fair");
        assert!(catalog.get(&EventId::new("evt-404")).is_none());
    }

    #[test]
    fn find_resolves_id_then_name() {
        let catalog = EventCatalog::from_json_reader(SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(catalog.find("evt-1").unwrap().name, "Summer Basketball Tournament");
        assert_eq!(catalog.find("art fair").unwrap().id.as_str(), "evt-2");

        let err = catalog.find("Winter Gala").unwrap_err();
        assert!(matches!(err, CoreError::EventNotFound { identifier } if identifier == "Winter Gala"));
    }

    #[test]
    fn tag_counts_first_seen_order() {
        let catalog = EventCatalog::from_json_reader(SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(
            catalog.tag_counts(),
            vec![
                ("Sports".to_owned(), 1),
                ("Tournament".to_owned(), 1),
                ("Arts".to_owned(), 1)
            ]
        );
    }
}
