//! Scripted finance assistant
//!
//! The assistant has no understanding of what it is told. Each non-blank
//! message is echoed into the transcript straight away and answered after a
//! fixed delay with a reply drawn from a canned pool.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::{debug, info};

use crate::config::settings::default_responses;
use crate::config::{AssistantSettings, ReplyPolicy};
use crate::models::ChatMessage;
use crate::scheduler::{TaskHandle, TaskQueue};

/// Where the assistant is in its send/reply cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantState {
    /// No reply in flight
    AwaitingSend,
    /// At least one reply is scheduled but has not fired yet
    PendingReply,
}

/// A reply waiting for its delay to elapse
#[derive(Debug)]
struct PendingReply {
    /// Transcript index of the message being answered
    prompt: usize,
}

/// Delayed-reply chat stub
pub struct Assistant {
    transcript: Vec<ChatMessage>,
    responses: Vec<String>,
    delay: Duration,
    policy: ReplyPolicy,
    rng: Box<dyn RngCore>,
    replies: TaskQueue<PendingReply>,
    in_flight: Vec<TaskHandle>,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("transcript", &self.transcript.len())
            .field("delay", &self.delay)
            .field("policy", &self.policy)
            .field("pending", &self.replies.pending())
            .finish()
    }
}

impl Assistant {
    /// Build an assistant from settings, drawing replies from `rng`
    ///
    /// Blank entries in the response pool are ignored; if nothing is left
    /// the stock pool is used.
    pub fn new(settings: &AssistantSettings, rng: Box<dyn RngCore>) -> Self {
        let mut responses: Vec<String> = settings
            .responses
            .iter()
            .filter(|r| !r.trim().is_empty())
            .cloned()
            .collect();
        if responses.is_empty() {
            responses = default_responses();
        }

        Self {
            transcript: Vec::new(),
            responses,
            delay: Duration::from_millis(settings.reply_delay_ms),
            policy: settings.reply_policy,
            rng,
            replies: TaskQueue::new(),
            in_flight: Vec::new(),
        }
    }

    /// Post a user message and schedule the reply
    ///
    /// Blank text is ignored and returns `None`. Under
    /// [`ReplyPolicy::Supersede`] any reply still in flight is cancelled
    /// first.
    pub fn send_message(&mut self, text: &str, now: Instant) -> Option<TaskHandle> {
        if text.trim().is_empty() {
            return None;
        }

        if self.policy == ReplyPolicy::Supersede {
            let cancelled = self.replies.cancel_all();
            if cancelled > 0 {
                debug!(cancelled, "superseded pending replies");
            }
        }

        self.transcript.push(ChatMessage::user(text));
        let prompt = self.transcript.len() - 1;

        let handle = self.replies.schedule(now + self.delay, PendingReply { prompt });
        debug!(
            task = handle.id.value(),
            delay_ms = self.delay.as_millis() as u64,
            "reply scheduled"
        );

        self.in_flight.retain(|h| !h.is_cancelled());
        self.in_flight.push(handle.clone());
        Some(handle)
    }

    /// Deliver every reply whose delay has elapsed by `now`
    ///
    /// Returns the messages appended, in the order they were appended.
    pub fn deliver_due(&mut self, now: Instant) -> Vec<ChatMessage> {
        let mut delivered = Vec::new();

        while let Some(task) = self.replies.pop_due(now) {
            let Some(text) = self.responses.choose(&mut *self.rng).cloned() else {
                break;
            };
            let reply = ChatMessage::assistant(text);
            info!(task = task.id.value(), prompt = task.payload.prompt, "assistant replied");

            self.transcript.push(reply.clone());
            self.in_flight.retain(|h| h.id != task.id);
            delivered.push(reply);
        }

        delivered
    }

    pub fn state(&self) -> AssistantState {
        if self.replies.is_idle() {
            AssistantState::AwaitingSend
        } else {
            AssistantState::PendingReply
        }
    }

    /// When the next reply is due, if any is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.replies.next_deadline()
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.pending()
    }

    /// Handles of replies that have neither fired nor been cancelled
    pub fn in_flight(&self) -> impl Iterator<Item = &TaskHandle> {
        self.in_flight.iter().filter(|h| !h.is_cancelled())
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn policy(&self) -> ReplyPolicy {
        self.policy
    }
}
