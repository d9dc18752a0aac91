//! Reward definitions and the front table.
//!
//! The front table fixes which reward sits under each slot of the panel.
//! It is not shuffled: slot `i` always reveals `fronts[i]`. The registry
//! keeps the human-readable definitions keyed by [`RewardId`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardId(pub u16);

impl RewardId {
    /// Create a new reward ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for RewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reward({})", self.0)
    }
}

/// Static data about a reward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDefinition {
    pub id: RewardId,
    pub name: String,
}

/// Slot-indexed front table plus definition registry.
///
/// ## Example
///
/// ```
/// use dice_duel::reward::{RewardId, RewardTable};
///
/// let table = RewardTable::new()
///     .with_front("Swift Feet")
///     .with_front("Iron Will");
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.front(1), Some(RewardId::new(1)));
/// assert_eq!(table.name(RewardId::new(0)), Some("Swift Feet"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RewardTable {
    fronts: SmallVec<[RewardId; 8]>,
    definitions: FxHashMap<RewardId, RewardDefinition>,
    next_id: u16,
}

impl RewardTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A table of `count` generic buffs, "Buff 1" through "Buff N".
    #[must_use]
    pub fn numbered_buffs(count: usize) -> Self {
        (1..=count).fold(Self::new(), |table, n| table.with_front(format!("Buff {n}")))
    }

    /// Register a new reward and place it in the next slot.
    ///
    /// IDs are `u16`, so a table holds at most `u16::MAX` fronts; further
    /// fronts are dropped with a warning.
    #[must_use]
    pub fn with_front(mut self, name: impl Into<String>) -> Self {
        let id = RewardId::new(self.next_id);
        let Some(next_id) = self.next_id.checked_add(1) else {
            tracing::warn!(len = self.fronts.len(), "reward table full; front dropped");
            return self;
        };
        self.next_id = next_id;
        self.definitions.insert(
            id,
            RewardDefinition {
                id,
                name: name.into(),
            },
        );
        self.fronts.push(id);
        self
    }

    /// Reward under a slot.
    #[must_use]
    pub fn front(&self, slot: usize) -> Option<RewardId> {
        self.fronts.get(slot).copied()
    }

    /// Look up a reward definition.
    #[must_use]
    pub fn get(&self, id: RewardId) -> Option<&RewardDefinition> {
        self.definitions.get(&id)
    }

    /// Display name of a reward.
    #[must_use]
    pub fn name(&self, id: RewardId) -> Option<&str> {
        self.get(id).map(|d| d.name.as_str())
    }

    /// Number of slots covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fronts.len()
    }

    /// Does the table cover no slots?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fronts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_id() {
        let id = RewardId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(format!("{}", id), "Reward(3)");
    }

    #[test]
    fn test_numbered_buffs() {
        let table = RewardTable::numbered_buffs(5);
        assert_eq!(table.len(), 5);
        for slot in 0..5 {
            let id = table.front(slot).unwrap();
            assert_eq!(table.name(id), Some(format!("Buff {}", slot + 1).as_str()));
        }
        assert_eq!(table.front(5), None);
    }

    #[test]
    fn test_fronts_are_distinct() {
        let table = RewardTable::numbered_buffs(4);
        let ids: Vec<_> = (0..4).filter_map(|s| table.front(s)).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_full_table_drops_front() {
        let mut table = RewardTable::new().with_front("Swift Feet");
        table.next_id = u16::MAX;

        let table = table.with_front("Iron Will");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(RewardId::new(u16::MAX)), None);
        assert_eq!(table.name(RewardId::new(0)), Some("Swift Feet"));
    }

    #[test]
    fn test_empty() {
        let table = RewardTable::new();
        assert!(table.is_empty());
        assert!(table.get(RewardId::new(0)).is_none());
    }
}
