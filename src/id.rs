//! Entity id generation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for stored entities.
///
/// Ids are opaque strings: a base-36 encoding of the creation time in
/// milliseconds followed by a base-36 encoding of a fresh random value.
/// Uniqueness is probabilistic, which is sufficient for single-owner
/// collections hydrated from local snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u128;
        let noise = rand::random::<u64>();
        Self(format!("{}{}", base36(millis), base36(noise as u128)))
    }

    /// Wrap an existing id string (snapshots, seed datasets, foreign keys).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encode a value in lowercase base-36.
fn base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.reverse();
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base36_zero() {
        assert_eq!(base36(0), "0");
    }

    #[test]
    fn test_base36_round_values() {
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
        assert_eq!(base36(36 * 36), "100");
    }

    #[test]
    fn test_generated_ids_are_non_empty() {
        assert!(!EntityId::generate().as_str().is_empty());
    }

    #[test]
    fn test_rapid_generation_is_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| EntityId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_display_matches_inner() {
        let id = EntityId::from_raw("abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.as_str(), "abc123");
    }
}
