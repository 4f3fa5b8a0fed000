//! Locally known activities in arrival order.

use shared::{domain::ActivityId, protocol::Activity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    items: Vec<Activity>,
}

/// A record taken out by an optimistic delete, kept until the delete resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    index: usize,
    activity: Activity,
}

impl Removal {
    pub fn activity(&self) -> &Activity {
        &self.activity
    }
}

impl ActivityCollection {
    pub fn from_fetched(items: Vec<Activity>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.items.iter().find(|activity| activity.id == id)
    }

    pub fn ids(&self) -> Vec<ActivityId> {
        self.items.iter().map(|activity| activity.id).collect()
    }

    pub fn append(&mut self, activity: Activity) {
        self.items.push(activity);
    }

    /// Swaps in the server copy of an existing record. Returns `false` when no
    /// entry has that id; the record is not inserted in that case.
    pub fn replace(&mut self, activity: Activity) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == activity.id) {
            Some(slot) => {
                *slot = activity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ActivityId) -> Option<Removal> {
        let index = self.items.iter().position(|activity| activity.id == id)?;
        let activity = self.items.remove(index);
        Some(Removal { index, activity })
    }

    /// Puts a removed record back at its former position, clamped to the
    /// current length. Does nothing if a record with that id is already present.
    pub fn restore(&mut self, removal: Removal) {
        if self.get(removal.activity.id).is_some() {
            return;
        }
        let index = removal.index.min(self.items.len());
        self.items.insert(index, removal.activity);
    }
}

impl<'a> IntoIterator for &'a ActivityCollection {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
