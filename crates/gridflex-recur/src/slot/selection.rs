use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::grid::WeekSlot;
use crate::error::RecurResult;

/// The set of active half-hours in a recurring week.
///
/// Iteration order is by day, then by time of day. Serialises as a list
/// of composite keys; deserialises from either that list or a
/// `{ "key": true }` map, where `false` entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelection {
    slots: BTreeSet<WeekSlot>,
}

impl SlotSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Builds a selection from composite `"{day}-{index}"` keys.
    ///
    /// ## Errors
    /// Returns an error on the first key that is malformed or out of range.
    pub fn from_keys<I, S>(keys: I) -> RecurResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| key.as_ref().parse::<WeekSlot>())
            .collect()
    }

    /// Adds a slot. Returns `true` if it was not already selected.
    pub fn insert(&mut self, slot: WeekSlot) -> bool {
        self.slots.insert(slot)
    }

    /// Removes a slot. Returns `true` if it was selected.
    pub fn remove(&mut self, slot: WeekSlot) -> bool {
        self.slots.remove(&slot)
    }

    /// Flips a slot and returns its new state.
    pub fn toggle(&mut self, slot: WeekSlot) -> bool {
        if self.slots.remove(&slot) {
            false
        } else {
            self.slots.insert(slot);
            true
        }
    }

    /// Sets a slot to the given state.
    pub fn set(&mut self, slot: WeekSlot, selected: bool) {
        if selected {
            self.slots.insert(slot);
        } else {
            self.slots.remove(&slot);
        }
    }

    #[must_use]
    pub fn contains(&self, slot: WeekSlot) -> bool {
        self.slots.contains(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = WeekSlot> + '_ {
        self.slots.iter().copied()
    }

    /// Composite keys in grid order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(WeekSlot::key).collect()
    }
}

impl FromIterator<WeekSlot> for SlotSelection {
    fn from_iter<T: IntoIterator<Item = WeekSlot>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl Extend<WeekSlot> for SlotSelection {
    fn extend<T: IntoIterator<Item = WeekSlot>>(&mut self, iter: T) {
        self.slots.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SlotSelection {
    type Item = WeekSlot;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, WeekSlot>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().copied()
    }
}

impl Serialize for SlotSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(WeekSlot::key))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Keys(Vec<String>),
    Flags(BTreeMap<String, bool>),
}

impl<'de> Deserialize<'de> for SlotSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keys: Vec<String> = match SelectionRepr::deserialize(deserializer)? {
            SelectionRepr::Keys(keys) => keys,
            SelectionRepr::Flags(flags) => flags
                .into_iter()
                .filter_map(|(key, selected)| selected.then_some(key))
                .collect(),
        };
        Self::from_keys(keys).map_err(serde::de::Error::custom)
    }
}
