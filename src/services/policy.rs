//! Budget notification and badge policy
//!
//! Looks at a budget entry right after an expense has been added to it and
//! decides which alerts to raise and whether a saver badge has been earned.

use crate::config::AlertThresholds;
use crate::events::TrackerEvent;
use crate::models::{AchievementSet, BadgeId, BudgetEntry};

/// Threshold rules applied after every budgeted expense
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationPolicy {
    thresholds: AlertThresholds,
}

impl NotificationPolicy {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Events triggered by the current state of `entry`
    ///
    /// At most one of `BudgetExceeded` / `BudgetWarning` is produced. The
    /// saver badge is checked independently and only offered if `earned`
    /// doesn't hold it yet; the caller records it.
    pub fn evaluate(&self, entry: &BudgetEntry, earned: &AchievementSet) -> Vec<TrackerEvent> {
        let mut events = Vec::new();
        let percent = entry.percent_used();

        if percent > self.thresholds.exceeded_percent {
            events.push(TrackerEvent::BudgetExceeded {
                category: entry.category,
                overage: entry.spent - entry.limit,
            });
        } else if percent > self.thresholds.warning_percent {
            events.push(TrackerEvent::BudgetWarning {
                category: entry.category,
                percent,
            });
        }

        let badge = BadgeId::saver(entry.category);
        if percent <= self.thresholds.saver_badge_percent && !earned.contains(&badge) {
            events.push(TrackerEvent::BadgeEarned {
                badge,
                category: entry.category,
            });
        }

        events
    }
}
