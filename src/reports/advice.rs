//! Static financial tips and the achievements panel

use crate::models::AchievementSet;

/// Kind of advice, shown as a prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipKind {
    Tip,
    Goal,
    Warning,
}

impl TipKind {
    pub fn label(&self) -> &'static str {
        match self {
            TipKind::Tip => "Tip",
            TipKind::Goal => "Goal",
            TipKind::Warning => "Warning",
        }
    }
}

/// A fixed piece of financial advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialTip {
    pub kind: TipKind,
    pub text: &'static str,
}

pub const FINANCIAL_TIPS: &[FinancialTip] = &[
    FinancialTip {
        kind: TipKind::Tip,
        text: "Try to keep your housing costs below 30% of your income.",
    },
    FinancialTip {
        kind: TipKind::Goal,
        text: "Aim to save at least 20% of your income each month.",
    },
    FinancialTip {
        kind: TipKind::Warning,
        text: "Emergency fund should cover 3-6 months of expenses.",
    },
];

pub fn format_tips() -> String {
    let mut output = String::from("Financial Advice\n");
    for tip in FINANCIAL_TIPS {
        output.push_str(&format!("  {}: {}\n", tip.kind.label(), tip.text));
    }
    output
}

/// Display labels for earned badges, oldest first
pub fn badge_labels(achievements: &AchievementSet) -> Vec<String> {
    achievements.iter().map(|b| b.label()).collect()
}

pub fn format_badges(achievements: &AchievementSet) -> String {
    if achievements.is_empty() {
        return "No badges earned yet.\n".to_string();
    }

    let mut output = String::from("Your Achievements\n");
    for label in badge_labels(achievements) {
        output.push_str(&format!("  * {}\n", label));
    }
    output
}
