//! Session - the message log, the active context, and turn processing.
//!
//! A session is created once per widget activation and lives until the UI
//! is torn down. Replies are not delivered synchronously: each submission
//! schedules its bot message behind a fixed simulated latency, and the UI
//! drives delivery by calling [`Session::poll`]. The engine spawns no
//! threads and holds no timers of its own.
//!
//! Each submission gets an independent due time. Two rapid submissions are
//! independent turns: both classify against the context current at their own
//! submit time, and their replies land in submission order as their due
//! times pass. There is no cancellation for a pending reply.

mod message;

pub use message::*;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use company_kb::KnowledgeBase;

use crate::classifier::classify;
use crate::composer::{self, compose};
use crate::context::ConversationContext;
use crate::suggestions::{self, BACK_TO_MAIN_MENU, CANCEL_BIO_GENERATION};

/// Simulated "thinking" delay between a submission and its bot reply.
pub const REPLY_LATENCY: Duration = Duration::from_millis(800);

/// A reply waiting for its due time.
#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    text: String,
    next_context: ConversationContext,
}

/// A conversation session: the ordered message log, the active context, and
/// the queue of pending replies.
#[derive(Debug, Clone)]
pub struct Session {
    kb: KnowledgeBase,
    context: ConversationContext,
    messages: Vec<Message>,
    pending: VecDeque<PendingReply>,
    latency: Duration,
}

impl Session {
    /// Create a session over the given knowledge base, opening with the
    /// greeting message and the default reply latency.
    pub fn new(kb: KnowledgeBase) -> Self {
        Self::with_latency(kb, REPLY_LATENCY)
    }

    /// Create a session with a custom reply latency. A zero latency makes
    /// every reply deliverable on the next `poll`, which is convenient for
    /// deterministic drivers.
    pub fn with_latency(kb: KnowledgeBase, latency: Duration) -> Self {
        Self {
            kb,
            context: ConversationContext::default(),
            messages: vec![Message::bot(composer::GREETING)],
            pending: VecDeque::new(),
            latency,
        }
    }

    /// The ordered message log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The active conversation context.
    pub fn context(&self) -> ConversationContext {
        self.context
    }

    /// The knowledge base this session reads from.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Quick-reply labels for the active context.
    pub fn suggestions(&self) -> Vec<String> {
        suggestions::for_context(self.context, &self.kb)
    }

    /// True while at least one reply is pending, so the UI can show a
    /// waiting indicator.
    pub fn is_composing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Submit free text, timestamped now.
    pub fn submit(&mut self, text: &str) {
        self.submit_at(text, Instant::now());
    }

    /// Submit free text at an explicit instant.
    ///
    /// Whitespace-only input is a silent no-op. Otherwise the user message
    /// is appended immediately and classification runs against the current
    /// context, but the bot message and the context transition are held back
    /// until the reply's due time passes (see [`Session::poll_at`]), so the
    /// reply and the new suggestion set land together.
    pub fn submit_at(&mut self, text: &str, now: Instant) {
        if text.trim().is_empty() {
            return;
        }

        self.messages.push(Message::user(text));

        let intent = classify(self.context, text, &self.kb);
        self.pending.push_back(PendingReply {
            due: now + self.latency,
            text: compose(&intent, &self.kb),
            next_context: intent.next_context(self.context),
        });
    }

    /// Select a quick-reply label, timestamped now.
    pub fn select_suggestion(&mut self, label: &str) {
        self.select_suggestion_at(label, Instant::now());
    }

    /// Select a quick-reply label at an explicit instant.
    ///
    /// The two forced actions bypass the classifier entirely: they append
    /// their acknowledgement immediately (no user message, no latency) and
    /// reset the context to general. Any other label is submitted as if the
    /// user had typed it.
    pub fn select_suggestion_at(&mut self, label: &str, now: Instant) {
        match label {
            BACK_TO_MAIN_MENU => {
                self.context = ConversationContext::General;
                self.messages.push(Message::bot(composer::BACK_TO_MENU_ACK));
            }
            CANCEL_BIO_GENERATION => {
                self.context = ConversationContext::General;
                self.messages.push(Message::bot(composer::BIO_GEN_CANCELLED));
            }
            _ => self.submit_at(label, now),
        }
    }

    /// Deliver every reply whose due time has passed, as of now.
    pub fn poll(&mut self) -> usize {
        self.poll_at(Instant::now())
    }

    /// Deliver every reply due by `now`, in submission order, applying each
    /// reply's context transition as it lands. Returns the number of replies
    /// delivered.
    pub fn poll_at(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        // Fixed latency keeps the queue in due order, so front-first
        // delivery is submission-order delivery.
        while self.pending.front().map_or(false, |r| r.due <= now) {
            if let Some(reply) = self.pending.pop_front() {
                self.messages.push(Message::bot(reply.text));
                self.context = reply.next_context;
                delivered += 1;
            }
        }
        delivered
    }

    /// The message log serialized as JSON for the rendering layer.
    pub fn transcript_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.messages)
    }
}
