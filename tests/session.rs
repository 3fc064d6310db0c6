//! End-to-end behaviour of a tracking session

use std::time::Duration;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use expense_tracker::config::settings::default_responses;
use expense_tracker::config::Settings;
use expense_tracker::models::{Category, Money};
use expense_tracker::scheduler::ManualClock;
use expense_tracker::services::AssistantState;
use expense_tracker::{EventLevel, Session, TrackerEvent};

fn session() -> (Session, ManualClock) {
    let clock = ManualClock::new(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    let session = Session::with_parts(
        Settings::default(),
        Box::new(clock.clone()),
        Box::new(StdRng::seed_from_u64(2024)),
    )
    .unwrap();
    (session, clock)
}

#[test]
fn income_and_expenses_give_remaining() {
    let (mut session, _clock) = session();
    session.set_income("1000");
    session.add_expense("100", "Food", "").unwrap();
    session.add_expense("50", "Food", "").unwrap();

    assert_eq!(session.total_expenses(), Money::from_units(150, 0));
    assert_eq!(session.remaining_income(), Money::from_units(850, 0));
    assert_eq!(session.category_total(Category::Food), Money::from_units(150, 0));
}

#[test]
fn warning_and_badge_at_85_percent() {
    let (mut session, _clock) = session();
    session.set_budget("Food", "100").unwrap();
    session.drain_events();

    session.add_expense("85", "Food", "").unwrap();
    let events = session.drain_events();

    assert!(events.iter().any(|e| matches!(
        e,
        TrackerEvent::BudgetWarning { category: Category::Food, percent }
            if (percent - 85.0).abs() < 1e-9
    )));
    assert!(events.iter().any(|e| matches!(
        e,
        TrackerEvent::BadgeEarned { badge, .. } if badge.as_str() == "Food-saver"
    )));
    assert_eq!(
        session
            .achievements()
            .iter()
            .map(|b| b.as_str())
            .collect::<Vec<_>>(),
        vec!["Food-saver"]
    );
}

#[test]
fn exceeded_at_120_percent_without_badge() {
    let (mut session, _clock) = session();
    session.set_budget("Food", "100").unwrap();
    session.drain_events();

    session.add_expense("120", "Food", "").unwrap();
    let events = session.drain_events();

    assert!(events.contains(&TrackerEvent::BudgetExceeded {
        category: Category::Food,
        overage: Money::from_units(20, 0),
    }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, TrackerEvent::BadgeEarned { .. })));
    assert!(session.achievements().is_empty());

    let alert = events
        .iter()
        .find(|e| matches!(e, TrackerEvent::BudgetExceeded { .. }))
        .unwrap();
    assert_eq!(alert.level(), EventLevel::Error);
    assert_eq!(
        alert.message(&session.currency()),
        "You've exceeded your Food budget by $20.00"
    );
}

#[test]
fn invalid_expenses_are_rejected_without_side_effects() {
    let (mut session, _clock) = session();
    session.set_budget("Food", "100").unwrap();
    session.drain_events();

    assert!(session
        .add_expense("NaN", "Food", "")
        .unwrap_err()
        .is_validation());
    assert!(session
        .add_expense("10", "", "")
        .unwrap_err()
        .is_validation());

    assert!(session.expenses().is_empty());
    assert!(session.budget(Category::Food).unwrap().spent.is_zero());

    let events = session.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| matches!(e, TrackerEvent::ValidationFailed { .. })));
}

#[test]
fn oversized_amounts_are_rejected_before_any_state_changes() {
    let (mut session, _clock) = session();
    session.set_budget("Food", "1").unwrap();
    session.add_expense("900000000000", "Food", "").unwrap();
    session.drain_events();

    assert!(session
        .add_expense("900000000000", "Food", "")
        .unwrap_err()
        .is_validation());
    assert!(session
        .add_expense("90000000000000000", "Food", "")
        .unwrap_err()
        .is_validation());
    assert!(session
        .add_expense("12.349", "Food", "")
        .unwrap_err()
        .is_validation());

    assert_eq!(session.expense_count(), 1);
    assert_eq!(session.total_expenses(), Money::from_units(900_000_000_000, 0));
    assert_eq!(session.budget(Category::Food).unwrap().spent, session.total_expenses());

    let events = session.drain_events();
    assert_eq!(events.len(), 3);
    assert!(events
        .iter()
        .all(|e| matches!(e, TrackerEvent::ValidationFailed { .. })));
}

#[test]
fn budget_update_keeps_spent() {
    let (mut session, _clock) = session();
    session.set_budget("Bills", "100").unwrap();
    session.add_expense("40", "Bills", "Power").unwrap();
    session.set_budget("Bills", "300").unwrap();

    assert_eq!(session.budgets().len(), 1);
    let entry = session.budget(Category::Bills).unwrap();
    assert_eq!(entry.limit, Money::from_units(300, 0));
    assert_eq!(entry.spent, Money::from_units(40, 0));
}

#[test]
fn expenses_before_budget_are_not_counted() {
    let (mut session, _clock) = session();
    session.add_expense("40", "Shopping", "").unwrap();
    session.set_budget("Shopping", "100").unwrap();

    assert!(session.budget(Category::Shopping).unwrap().spent.is_zero());
    assert_eq!(session.percent_used(Category::Shopping), Some(0.0));
}

#[test]
fn zero_limit_reads_as_infinite() {
    let (mut session, _clock) = session();
    session.set_budget("Entertainment", "0").unwrap();
    session.add_expense("5", "Entertainment", "").unwrap();

    assert_eq!(session.percent_used(Category::Entertainment), Some(f64::INFINITY));
}

#[test]
fn chat_reply_arrives_after_delay() {
    let (mut session, clock) = session();
    assert!(session.send_chat_message("hi"));

    assert_eq!(session.transcript().len(), 1);
    assert!(session.transcript()[0].is_user);
    assert_eq!(session.assistant_state(), AssistantState::PendingReply);

    clock.advance(Duration::from_millis(999));
    assert!(session.run_due_tasks().is_empty());

    clock.advance(Duration::from_millis(1));
    let replies = session.run_due_tasks();
    assert_eq!(replies.len(), 1);
    assert!(default_responses().contains(&replies[0].text));

    assert_eq!(session.transcript().len(), 2);
    assert!(!session.transcript()[1].is_user);
    assert_eq!(session.assistant_state(), AssistantState::AwaitingSend);

    clock.advance(Duration::from_secs(10));
    assert!(session.run_due_tasks().is_empty());
}

#[test]
fn overlapping_chats_each_get_a_reply() {
    let (mut session, clock) = session();
    session.send_chat_message("first");
    clock.advance(Duration::from_millis(200));
    session.send_chat_message("second");
    assert_eq!(session.pending_replies(), 2);

    clock.advance(Duration::from_millis(800));
    assert_eq!(session.run_due_tasks().len(), 1);
    clock.advance(Duration::from_millis(200));
    assert_eq!(session.run_due_tasks().len(), 1);

    let users: Vec<_> = session.transcript().iter().map(|m| m.is_user).collect();
    assert_eq!(users, vec![true, true, false, false]);
}

#[test]
fn currency_changes_formatting_only() {
    let (mut session, _clock) = session();
    session.add_expense("12.5", "Food", "").unwrap();
    session.set_currency("INR").unwrap();

    assert_eq!(session.total_expenses(), Money::from_cents(1250));
    assert_eq!(session.format(session.total_expenses()), "₹12.50");
}
