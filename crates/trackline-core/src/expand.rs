//! Expand/collapse state for feed groups.
//!
//! Groups default to expanded: a group is collapsed only when its key has
//! been explicitly set to `false`. The bulk toggle looks at every non-empty
//! group, decides whether *all* of them are currently expanded, and flips
//! them all to the opposite of that aggregate.

use crate::grouping::EventGroup;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// ExpansionState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    groups: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unset keys count as expanded.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.groups.get(key).copied() != Some(false)
    }

    /// Flip one group. An unset key was implicitly expanded, so its first
    /// toggle collapses it.
    pub fn toggle(&mut self, key: &str) {
        let next = !self.is_expanded(key);
        self.groups.insert(key.to_string(), next);
    }

    /// Whether every non-empty group is currently expanded. Vacuously true
    /// when there are no non-empty groups.
    pub fn all_expanded(&self, groups: &[EventGroup<'_>]) -> bool {
        groups
            .iter()
            .filter(|g| !g.is_empty())
            .all(|g| self.is_expanded(&g.key))
    }

    /// Set every non-empty group to the opposite of the aggregate state.
    /// Replaces the whole map, dropping state for keys no longer present.
    pub fn toggle_all(&mut self, groups: &[EventGroup<'_>]) {
        let next = !self.all_expanded(groups);
        self.groups = groups
            .iter()
            .filter(|g| !g.is_empty())
            .map(|g| (g.key.clone(), next))
            .collect();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
