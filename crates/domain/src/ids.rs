//! Identifier generation for domain entities
//!
//! Entity identifiers are opaque strings. Generation is injected into the
//! [`Factory`](crate::Factory) as a capability rather than called as a hidden
//! global, so tests and fixtures can supply deterministic identifiers.

use uuid::Uuid;

/// A source of fresh entity identifiers.
///
/// The engine relies on the source's collision probability; it performs no
/// collision handling of its own.
pub trait IdSource {
    /// Produce a new identifier, unique per the source's guarantees.
    fn generate(&mut self) -> String;
}

/// Production identifier source backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifier source for tests and fixtures.
///
/// Yields `prefix-0`, `prefix-1`, ... in order.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdSource for SequentialIdSource {
    fn generate(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Derive the deterministic identifier for a named culture.
///
/// Built-in cultures are cross-referenced by identifier from persisted
/// heroes, so the derivation must stay stable: `culture-` plus the name with
/// its first space (only the first) replaced by a hyphen, lower-cased.
pub fn culture_id(name: &str) -> String {
    format!("culture-{}", name.replacen(' ', "-", 1).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_source_yields_distinct_ids() {
        let mut ids = UuidIdSource;
        assert_ne!(ids.generate(), ids.generate());
    }

    #[test]
    fn sequential_source_is_deterministic() {
        let mut ids = SequentialIdSource::new("test");
        assert_eq!(ids.generate(), "test-0");
        assert_eq!(ids.generate(), "test-1");

        let mut again = SequentialIdSource::new("test");
        assert_eq!(again.generate(), "test-0");
    }

    #[test]
    fn culture_id_is_stable() {
        assert_eq!(culture_id("Caelian"), "culture-caelian");
        assert_eq!(culture_id("Caelian"), culture_id("Caelian"));
    }

    #[test]
    fn culture_id_replaces_only_the_first_space() {
        assert_eq!(culture_id("High Kuric Tribe"), "culture-high-kuric tribe");
    }
}
