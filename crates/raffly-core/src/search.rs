//! Search and tag filtering over an event collection.
//!
//! Stateless transformations: every function takes the full collection and
//! returns a filtered subsequence in the original order, without mutating
//! the source. Text matching is case-insensitive substring containment on
//! name/description — not tokenized or fuzzy.
//!
//! The legacy browse screen treated text and tag filtering as mutually
//! exclusive entry points, so applying one silently discarded the other.
//! That read as a defect rather than a design, so [`EventFilter`] composes
//! both axes with AND semantics; [`filter_by_text`] and [`filter_by_tags`]
//! keep the single-axis contracts for callers that want them.

use crate::model::Event;

/// Sentinel tag meaning "no tag restriction". The chip row renders it as a
/// selectable option, so a selection containing it is a passthrough.
pub const ALL_EVENTS_TAG: &str = "All Events";

/// Case-insensitive substring containment.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches_text(event: &Event, query_lower: &str) -> bool {
    contains_ignore_case(&event.name, query_lower)
        || contains_ignore_case(&event.description, query_lower)
}

fn matches_tags<S: AsRef<str>>(event: &Event, selected: &[S]) -> bool {
    event
        .tags
        .iter()
        .any(|tag| selected.iter().any(|s| s.as_ref() == tag))
}

fn tags_are_passthrough<S: AsRef<str>>(selected: &[S]) -> bool {
    selected.is_empty() || selected.iter().any(|s| s.as_ref() == ALL_EVENTS_TAG)
}

/// Filter by free-text query over name and description.
///
/// An empty query is the identity: every event, original order.
pub fn filter_by_text<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    if query.is_empty() {
        return events.iter().collect();
    }
    let query_lower = query.to_lowercase();
    events
        .iter()
        .filter(|event| matches_text(event, &query_lower))
        .collect()
}

/// Filter by tag selection: keep events whose tag set intersects `selected`.
///
/// An empty selection, or one containing [`ALL_EVENTS_TAG`], is the
/// identity. An event's own tag order never affects inclusion.
pub fn filter_by_tags<'a, S: AsRef<str>>(events: &'a [Event], selected: &[S]) -> Vec<&'a Event> {
    if tags_are_passthrough(selected) {
        return events.iter().collect();
    }
    events
        .iter()
        .filter(|event| matches_tags(event, selected))
        .collect()
}

/// Composed browse filter: text query AND tag selection.
///
/// Either axis left empty is inactive; both empty passes everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub query: String,
    pub tags: Vec<String>,
}

impl EventFilter {
    pub fn new(query: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            query: query.into(),
            tags,
        }
    }

    /// True when neither axis restricts anything.
    pub fn is_passthrough(&self) -> bool {
        self.query.is_empty() && tags_are_passthrough(&self.tags)
    }

    /// Whether a single event passes both axes.
    pub fn matches(&self, event: &Event) -> bool {
        let text_ok = self.query.is_empty() || matches_text(event, &self.query.to_lowercase());
        let tags_ok = tags_are_passthrough(&self.tags) || matches_tags(event, &self.tags);
        text_ok && tags_ok
    }

    /// Apply to a collection, preserving original relative order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let query_lower = self.query.to_lowercase();
        events
            .iter()
            .filter(|event| {
                (self.query.is_empty() || matches_text(event, &query_lower))
                    && (tags_are_passthrough(&self.tags) || matches_tags(event, &self.tags))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventId;

    fn event(id: &str, name: &str, description: &str, tags: &[&str]) -> Event {
        Event {
            id: EventId::new(id),
            name: name.into(),
            description: description.into(),
            tags: tags.iter().map(|&t| t.to_owned()).collect(),
            ..Event::default()
        }
    }

    fn browse_set() -> Vec<Event> {
        vec![
            event(
                "evt-1",
                "Summer Basketball Tournament",
                "Join us for an exciting tournament",
                &["Sports", "Tournament"],
            ),
            event("evt-2", "Art Fair", "Local artists showcase", &["Arts"]),
            event(
                "evt-3",
                "Jazz Night",
                "An evening of live music",
                &["Music"],
            ),
        ]
    }

    fn ids(filtered: &[&Event]) -> Vec<String> {
        filtered.iter().map(|e| e.id.to_string()).collect()
    }

    // ── filter_by_text ──────────────────────────────────────────────

    #[test]
    fn empty_query_is_identity_in_order() {
        let events = browse_set();
        assert_eq!(ids(&filter_by_text(&events, "")), ["evt-1", "evt-2", "evt-3"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let events = browse_set();
        assert_eq!(ids(&filter_by_text(&events, "BASKETBALL")), ["evt-1"]);
    }

    #[test]
    fn query_matches_description_too() {
        let events = browse_set();
        assert_eq!(ids(&filter_by_text(&events, "live music")), ["evt-3"]);
    }

    #[test]
    fn query_excludes_non_matches() {
        let events = browse_set();
        assert_eq!(ids(&filter_by_text(&events, "tournament")), ["evt-1"]);
    }

    // ── filter_by_tags ──────────────────────────────────────────────

    #[test]
    fn empty_selection_is_identity() {
        let events = browse_set();
        let selected: Vec<String> = Vec::new();
        assert_eq!(filter_by_tags(&events, &selected).len(), 3);
    }

    #[test]
    fn all_events_sentinel_is_identity() {
        let events = browse_set();
        let via_sentinel = ids(&filter_by_tags(&events, &[ALL_EVENTS_TAG]));
        let via_empty_text = ids(&filter_by_text(&events, ""));
        assert_eq!(via_sentinel, via_empty_text);
    }

    #[test]
    fn selection_intersects_event_tags() {
        let events = browse_set();
        assert_eq!(
            ids(&filter_by_tags(&events, &["Sports", "Music"])),
            ["evt-1", "evt-3"]
        );
    }

    #[test]
    fn tag_match_is_exact_not_substring() {
        let events = browse_set();
        assert!(filter_by_tags(&events, &["Sport"]).is_empty());
    }

    // ── EventFilter composition ─────────────────────────────────────

    #[test]
    fn passthrough_filter_keeps_everything() {
        let events = browse_set();
        let filter = EventFilter::default();
        assert!(filter.is_passthrough());
        assert_eq!(filter.apply(&events).len(), 3);
    }

    #[test]
    fn axes_compose_with_and_semantics() {
        let events = browse_set();
        // "tournament" matches evt-1 by text, but the tag axis excludes it.
        let filter = EventFilter::new("tournament", vec!["Music".into()]);
        assert!(filter.apply(&events).is_empty());

        let filter = EventFilter::new("tournament", vec!["Sports".into()]);
        assert_eq!(ids(&filter.apply(&events)), ["evt-1"]);
    }

    #[test]
    fn sentinel_disables_only_the_tag_axis() {
        let events = browse_set();
        let filter = EventFilter::new("jazz", vec![ALL_EVENTS_TAG.to_owned()]);
        assert_eq!(ids(&filter.apply(&events)), ["evt-3"]);
    }

    #[test]
    fn matches_agrees_with_apply() {
        let events = browse_set();
        let filter = EventFilter::new("art", vec!["Arts".into()]);
        let applied = filter.apply(&events);
        for event in &events {
            assert_eq!(
                filter.matches(event),
                applied.iter().any(|kept| kept.id == event.id)
            );
        }
    }
}
