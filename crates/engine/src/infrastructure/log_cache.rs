//! Deduplicating store for informational log lines.
//!
//! Remembers the last message emitted per `(entity, field)` so repeated
//! recomputation with an unchanged result stays quiet. Only log output is
//! deduplicated; the values being logged are always recomputed.

use std::collections::HashMap;

use scoped_bonuses_domain::ActorId;

/// Last-message cache keyed by entity and field.
///
/// Entries are never evicted: cardinality is bounded by
/// actors x classes x bonus kinds.
#[derive(Debug, Default)]
pub struct LogDedupCache {
    entries: HashMap<(ActorId, String), String>,
}

impl LogDedupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `(entity, field)` and report whether it should be
    /// emitted, i.e. differs from the last message recorded for that key.
    pub fn should_emit(&mut self, entity: ActorId, field: &str, message: &str) -> bool {
        match self.entries.get_mut(&(entity, field.to_string())) {
            Some(last) if last == message => false,
            Some(last) => {
                *last = message.to_string();
                true
            }
            None => {
                self.entries
                    .insert((entity, field.to_string()), message.to_string());
                true
            }
        }
    }

    /// Last message recorded for `(entity, field)`.
    pub fn last(&self, entity: ActorId, field: &str) -> Option<&str> {
        self.entries
            .get(&(entity, field.to_string()))
            .map(String::as_str)
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

    #[test]
    fn first_message_is_emitted() {
        let mut cache = LogDedupCache::new();
        assert!(cache.should_emit(ActorId::new(), "wizard-dc", "Elara wizard DC +2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn repeated_message_is_suppressed() {
        let mut cache = LogDedupCache::new();
        let actor = ActorId::new();
        assert!(cache.should_emit(actor, "wizard-dc", "Elara wizard DC +2"));
        assert!(!cache.should_emit(actor, "wizard-dc", "Elara wizard DC +2"));
        assert!(!cache.should_emit(actor, "wizard-dc", "Elara wizard DC +2"));
    }

    #[test]
    fn changed_message_is_emitted_and_replaces_the_last() {
        let mut cache = LogDedupCache::new();
        let actor = ActorId::new();
        assert!(cache.should_emit(actor, "wizard-dc", "Elara wizard DC +2"));
        assert!(cache.should_emit(actor, "wizard-dc", "Elara wizard DC +3"));
        assert_eq!(cache.last(actor, "wizard-dc"), Some("Elara wizard DC +3"));
        // Going back to the earlier value is a change too
        assert!(cache.should_emit(actor, "wizard-dc", "Elara wizard DC +2"));
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = LogDedupCache::new();
        let first = ActorId::new();
        let second = ActorId::new();
        assert!(cache.should_emit(first, "wizard-dc", "same"));
        assert!(cache.should_emit(first, "wizard-attack", "same"));
        assert!(cache.should_emit(second, "wizard-dc", "same"));
        assert_eq!(cache.len(), 3);
    }
}
