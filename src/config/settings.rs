//! User settings for the expense tracker
//!
//! Manages preferences such as the display currency, budget alert
//! thresholds, and how the scripted assistant replies.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Currency;

/// What happens when a chat message is sent while a reply is still pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplyPolicy {
    /// Every message gets its own reply; several may be in flight at once
    #[default]
    Concurrent,
    /// A new message cancels any reply still in flight
    Supersede,
}

/// Percent-used thresholds driving budget notifications and badges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Above this, a warning is raised
    #[serde(default = "default_warning_percent")]
    pub warning_percent: f64,

    /// Above this, the budget is reported as exceeded
    #[serde(default = "default_exceeded_percent")]
    pub exceeded_percent: f64,

    /// At or below this, the category saver badge is awarded
    #[serde(default = "default_saver_badge_percent")]
    pub saver_badge_percent: f64,
}

fn default_warning_percent() -> f64 {
    80.0
}

fn default_exceeded_percent() -> f64 {
    100.0
}

fn default_saver_badge_percent() -> f64 {
    90.0
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            warning_percent: default_warning_percent(),
            exceeded_percent: default_exceeded_percent(),
            saver_badge_percent: default_saver_badge_percent(),
        }
    }
}

/// Scripted assistant settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Delay before the assistant answers, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    #[serde(default)]
    pub reply_policy: ReplyPolicy,

    /// Fixed RNG seed for reply selection; random when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Pool of canned replies
    #[serde(default = "default_responses")]
    pub responses: Vec<String>,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

/// The stock advice pool
pub fn default_responses() -> Vec<String> {
    [
        "Based on your spending pattern, I recommend allocating 50% of income to needs, 30% to wants, and 20% to savings.",
        "Consider reducing your entertainment expenses by 20% to meet your savings goals.",
        "You're doing great with your food budget! Try to maintain this pattern.",
        "I notice you spend more on weekends. Try planning ahead to stick to your budget.",
        "Your healthcare expenses are well managed. Consider increasing your emergency fund.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            reply_policy: ReplyPolicy::default(),
            seed: None,
            responses: default_responses(),
        }
    }
}

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO code of the currency used for display
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub alerts: AlertThresholds,

    #[serde(default)]
    pub assistant: AssistantSettings,

    /// How many expenses the "recent" list shows
    #[serde(default = "default_recent_expense_limit")]
    pub recent_expense_limit: usize,

    /// `tracing` filter directive used when none is given on the command line
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_recent_expense_limit() -> usize {
    10
}

fn default_log_filter() -> String {
    "expense_tracker=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            alerts: AlertThresholds::default(),
            assistant: AssistantSettings::default(),
            recent_expense_limit: default_recent_expense_limit(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if no file exists
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the configured display currency
    pub fn currency(&self) -> Result<Currency, TrackerError> {
        Currency::find(&self.currency)
            .ok_or_else(|| TrackerError::currency_not_found(&self.currency))
    }

    /// Check the settings are internally consistent
    pub fn validate(&self) -> Result<(), TrackerError> {
        self.currency()?;

        if self.assistant.responses.iter().all(|r| r.trim().is_empty()) {
            return Err(TrackerError::Config(
                "assistant.responses must contain at least one reply".into(),
            ));
        }

        let alerts = &self.alerts;
        let finite = [
            alerts.warning_percent,
            alerts.exceeded_percent,
            alerts.saver_badge_percent,
        ]
        .iter()
        .all(|p| p.is_finite() && *p >= 0.0);
        if !finite {
            return Err(TrackerError::Config(
                "alert thresholds must be non-negative numbers".into(),
            ));
        }
        if alerts.warning_percent >= alerts.exceeded_percent {
            return Err(TrackerError::Config(format!(
                "warning threshold ({}) must be below the exceeded threshold ({})",
                alerts.warning_percent, alerts.exceeded_percent
            )));
        }

        Ok(())
    }
}
