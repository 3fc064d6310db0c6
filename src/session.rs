//! The tracking session
//!
//! A [`Session`] holds everything one user works with: income, expenses,
//! budgets, earned badges, the assistant transcript and the display
//! currency. Write methods take raw strings, exactly as typed, and validate
//! them here at the boundary. Every write queues notifications that the
//! front-end collects with [`Session::drain_events`].

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::events::TrackerEvent;
use crate::models::{
    AchievementSet, BudgetEntry, Category, ChatMessage, Currency, Expense, Money,
};
use crate::scheduler::{Clock, SystemClock};
use crate::services::{Assistant, AssistantState, BudgetTracker, Ledger, NotificationPolicy};

/// In-memory state for one user session
pub struct Session {
    settings: Settings,
    currency: Currency,
    ledger: Ledger,
    budgets: BudgetTracker,
    achievements: AchievementSet,
    policy: NotificationPolicy,
    assistant: Assistant,
    clock: Box<dyn Clock>,
    events: Vec<TrackerEvent>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("currency", &self.currency.code)
            .field("ledger", &self.ledger)
            .field("budgets", &self.budgets)
            .field("achievements", &self.achievements)
            .field("assistant", &self.assistant)
            .field("queued_events", &self.events.len())
            .finish()
    }
}

impl Session {
    /// Start a session on the wall clock
    ///
    /// Replies are drawn from an RNG seeded with `settings.assistant.seed`
    /// when set, otherwise from entropy.
    pub fn new(settings: Settings) -> TrackerResult<Self> {
        let rng = match settings.assistant.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(settings, Box::new(SystemClock), Box::new(rng))
    }

    /// Start a session with an explicit clock and RNG
    pub fn with_parts(
        settings: Settings,
        clock: Box<dyn Clock>,
        rng: Box<dyn RngCore>,
    ) -> TrackerResult<Self> {
        settings.validate()?;
        let currency = settings.currency()?;
        let assistant = Assistant::new(&settings.assistant, rng);
        let policy = NotificationPolicy::new(settings.alerts);

        debug!(
            currency = currency.code,
            reply_delay_ms = settings.assistant.reply_delay_ms,
            policy = ?settings.assistant.reply_policy,
            "session started"
        );

        Ok(Self {
            settings,
            currency,
            ledger: Ledger::new(),
            budgets: BudgetTracker::new(),
            achievements: AchievementSet::new(),
            policy,
            assistant,
            clock,
            events: Vec::new(),
        })
    }

    // ---- writes ----

    /// Record an expense dated today
    ///
    /// On success the category's budget (if any) is updated before the
    /// notification policy runs, so alerts reflect the new total.
    pub fn add_expense(
        &mut self,
        amount: &str,
        category: &str,
        description: &str,
    ) -> TrackerResult<Expense> {
        let today = self.clock.today();
        let expense = match self.ledger.add_expense(amount, category, description, today) {
            Ok(expense) => expense,
            Err(e) => return Err(self.reject("add expense", e)),
        };

        info!(
            id = %expense.id,
            amount = %expense.amount,
            category = %expense.category,
            "expense added"
        );
        self.events.push(TrackerEvent::ExpenseAdded {
            expense: expense.clone(),
        });

        if let Some(entry) = self.budgets.record_spend(expense.category, expense.amount) {
            let entry = entry.clone();
            self.apply_policy(&entry);
        }

        Ok(expense)
    }

    /// Replace the monthly income; unparsable input becomes zero
    pub fn set_income(&mut self, input: &str) -> Money {
        let income = self.ledger.set_income(input);
        info!(%income, "income set");
        self.events.push(TrackerEvent::IncomeSet { income });
        income
    }

    /// Create a budget, or change the limit of an existing one
    pub fn set_budget(&mut self, category: &str, limit: &str) -> TrackerResult<BudgetEntry> {
        match self.budgets.set_budget(category, limit) {
            Ok(entry) => {
                info!(
                    category = %entry.category,
                    limit = %entry.limit,
                    spent = %entry.spent,
                    "budget set"
                );
                self.events.push(TrackerEvent::BudgetSet {
                    category: entry.category,
                    limit: entry.limit,
                });
                Ok(entry)
            }
            Err(e) => Err(self.reject("set budget", e)),
        }
    }

    /// Switch the display currency; amounts are not converted
    pub fn set_currency(&mut self, code: &str) -> TrackerResult<Currency> {
        let Some(currency) = Currency::find(code) else {
            let reason = if code.trim().is_empty() {
                "Currency is required".to_string()
            } else {
                format!("Unknown currency: {}", code.trim())
            };
            return Err(self.reject("change currency", TrackerError::Validation(reason)));
        };

        self.currency = currency;
        info!(code = currency.code, "currency changed");
        self.events.push(TrackerEvent::CurrencyChanged {
            code: currency.code.to_string(),
        });
        Ok(currency)
    }

    /// Post a chat message; blank text is ignored and returns false
    pub fn send_chat_message(&mut self, text: &str) -> bool {
        let now = self.clock.now();
        self.assistant.send_message(text, now).is_some()
    }

    /// Run every deferred task that has come due and return the new
    /// assistant messages
    pub fn run_due_tasks(&mut self) -> Vec<ChatMessage> {
        let now = self.clock.now();
        self.assistant.deliver_due(now)
    }

    /// When the next deferred task comes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.assistant.next_deadline()
    }

    /// How long until the next deferred task, zero if one is already due
    pub fn time_until_next_task(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_deadline()
            .map(|due| due.saturating_duration_since(now))
    }

    /// Take all queued notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<TrackerEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- reads ----

    pub fn income(&self) -> Money {
        self.ledger.income()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    /// The most recent expenses, newest first, up to the configured limit
    pub fn recent_expenses(&self) -> Vec<&Expense> {
        self.ledger.recent(self.settings.recent_expense_limit)
    }

    pub fn budgets(&self) -> &[BudgetEntry] {
        self.budgets.entries()
    }

    pub fn budget(&self, category: Category) -> Option<&BudgetEntry> {
        self.budgets.get(category)
    }

    pub fn achievements(&self) -> &AchievementSet {
        &self.achievements
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        self.assistant.transcript()
    }

    pub fn assistant_state(&self) -> AssistantState {
        self.assistant.state()
    }

    pub fn pending_replies(&self) -> usize {
        self.assistant.pending_replies()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn total_expenses(&self) -> Money {
        self.ledger.total_expenses()
    }

    pub fn remaining_income(&self) -> Money {
        self.ledger.remaining_income()
    }

    pub fn expense_count(&self) -> usize {
        self.ledger.expense_count()
    }

    pub fn category_total(&self, category: Category) -> Money {
        self.ledger.category_total(category)
    }

    /// Percent of a category's budget used, `None` without a budget
    pub fn percent_used(&self, category: Category) -> Option<f64> {
        self.budgets.percent_used(category)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Format an amount in the current display currency
    pub fn format(&self, amount: Money) -> String {
        self.currency.format(amount)
    }

    fn apply_policy(&mut self, entry: &BudgetEntry) {
        for event in self.policy.evaluate(entry, &self.achievements) {
            match &event {
                TrackerEvent::BadgeEarned { badge, .. } => {
                    if self.achievements.insert(badge.clone()) {
                        info!(badge = %badge, "badge earned");
                    }
                }
                TrackerEvent::BudgetExceeded { category, overage } => {
                    warn!(%category, %overage, "budget exceeded");
                }
                TrackerEvent::BudgetWarning { category, percent } => {
                    info!(%category, percent, "budget warning");
                }
                _ => {}
            }
            self.events.push(event);
        }
    }

    fn reject(&mut self, action: &'static str, err: TrackerError) -> TrackerError {
        let reason = match &err {
            TrackerError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };
        warn!(action, %reason, "rejected");
        self.events
            .push(TrackerEvent::ValidationFailed { action, reason });
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReplyPolicy;
    use crate::events::EventLevel;
    use crate::scheduler::ManualClock;
    use chrono::NaiveDate;

    fn session() -> (Session, ManualClock) {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        let session = Session::with_parts(
            Settings::default(),
            Box::new(clock.clone()),
            Box::new(StdRng::seed_from_u64(42)),
        )
        .unwrap();
        (session, clock)
    }

    #[test]
    fn test_expense_dated_today() {
        let (mut session, _clock) = session();
        let expense = session.add_expense("9.99", "Food", "Snack").unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        assert_eq!(
            session.drain_events(),
            vec![TrackerEvent::ExpenseAdded { expense }]
        );
    }

    #[test]
    fn test_rejected_expense_queues_error() {
        let (mut session, _clock) = session();
        let err = session.add_expense("NaN", "Food", "").unwrap_err();
        assert!(err.is_validation());

        let events = session.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level(), EventLevel::Error);
        assert!(session.expenses().is_empty());
    }

    #[test]
    fn test_badge_recorded_once() {
        let (mut session, _clock) = session();
        session.set_budget("Food", "100").unwrap();
        session.add_expense("10", "Food", "").unwrap();
        session.add_expense("10", "Food", "").unwrap();

        assert_eq!(session.achievements().len(), 1);
        let badges = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, TrackerEvent::BadgeEarned { .. }))
            .count();
        assert_eq!(badges, 1);
    }

    #[test]
    fn test_expense_without_budget_has_no_alerts() {
        let (mut session, _clock) = session();
        session.add_expense("500", "Shopping", "").unwrap();
        let events = session.drain_events();
        assert_eq!(events.len(), 1);
        assert!(session.achievements().is_empty());
    }

    #[test]
    fn test_set_currency() {
        let (mut session, _clock) = session();
        let eur = session.set_currency("eur").unwrap();
        assert_eq!(eur.code, "EUR");
        assert_eq!(session.format(Money::from_cents(150)), "€1.50");

        assert!(session.set_currency("XYZ").unwrap_err().is_validation());
        assert!(session.set_currency("").unwrap_err().is_validation());
        assert_eq!(session.currency().code, "EUR");
    }

    #[test]
    fn test_chat_reply_follows_clock() {
        let (mut session, clock) = session();
        assert!(session.send_chat_message("hello"));
        assert!(!session.send_chat_message("  "));
        assert_eq!(session.assistant_state(), AssistantState::PendingReply);
        assert_eq!(session.time_until_next_task(), Some(Duration::from_secs(1)));

        assert!(session.run_due_tasks().is_empty());
        clock.advance(Duration::from_millis(1000));
        assert_eq!(session.time_until_next_task(), Some(Duration::ZERO));

        let replies = session.run_due_tasks();
        assert_eq!(replies.len(), 1);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.assistant_state(), AssistantState::AwaitingSend);
        assert!(session.next_deadline().is_none());
    }

    #[test]
    fn test_supersede_policy_from_settings() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        let mut settings = Settings::default();
        settings.assistant.reply_policy = ReplyPolicy::Supersede;
        let mut session = Session::with_parts(
            settings,
            Box::new(clock.clone()),
            Box::new(StdRng::seed_from_u64(1)),
        )
        .unwrap();

        session.send_chat_message("first");
        clock.advance(Duration::from_millis(500));
        session.send_chat_message("second");
        clock.advance(Duration::from_secs(2));

        assert_eq!(session.run_due_tasks().len(), 1);
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.currency = "???".into();
        assert!(Session::new(settings).is_err());
    }

    #[test]
    fn test_recent_expenses_limited_by_settings() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        let mut settings = Settings::default();
        settings.recent_expense_limit = 2;
        let mut session = Session::with_parts(
            settings,
            Box::new(clock),
            Box::new(StdRng::seed_from_u64(1)),
        )
        .unwrap();

        for amount in ["1", "2", "3"] {
            session.add_expense(amount, "Other", amount).unwrap();
        }
        let recent: Vec<_> = session
            .recent_expenses()
            .into_iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(recent, vec!["3", "2"]);
    }
}
