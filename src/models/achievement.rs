//! Achievement badges
//!
//! Badges are permanent: once earned they are never revoked, and earning the
//! same badge twice is a no-op.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// Identifier of a badge, e.g. `"Food-saver"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeId(String);

impl BadgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Badge for staying within a category budget
    pub fn saver(category: Category) -> Self {
        Self(format!("{}-saver", category.name()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label: first `-` becomes a space, then uppercased ("FOOD SAVER")
    pub fn label(&self) -> String {
        self.0.replacen('-', " ", 1).to_uppercase()
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Badges earned during a session, in the order they were earned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementSet {
    badges: Vec<BadgeId>,
}

impl AchievementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, badge: &BadgeId) -> bool {
        self.badges.contains(badge)
    }

    /// Add a badge; returns false if it was already earned
    pub fn insert(&mut self, badge: BadgeId) -> bool {
        if self.contains(&badge) {
            return false;
        }
        self.badges.push(badge);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeId> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saver_badge() {
        let badge = BadgeId::saver(Category::Food);
        assert_eq!(badge.as_str(), "Food-saver");
        assert_eq!(badge.label(), "FOOD SAVER");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = AchievementSet::new();
        assert!(set.insert(BadgeId::saver(Category::Food)));
        assert!(!set.insert(BadgeId::saver(Category::Food)));
        assert!(set.insert(BadgeId::saver(Category::Bills)));

        assert_eq!(set.len(), 2);
        let ids: Vec<_> = set.iter().map(BadgeId::as_str).collect();
        assert_eq!(ids, vec!["Food-saver", "Bills-saver"]);
    }

    #[test]
    fn test_serialization() {
        let mut set = AchievementSet::new();
        set.insert(BadgeId::saver(Category::Education));
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"Education-saver\"]");
    }
}
