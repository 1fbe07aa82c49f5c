// src/assistant/chat.rs

use crate::assistant::replies;
use crate::catalog::Property;
use crate::search::SearchEngine;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// One assistant turn: the reply text, whether the market-trends widget
/// should accompany it, and the properties the message matched. Matches are
/// computed even for market replies, mirroring the original widget.
#[derive(Debug)]
pub struct AssistantReply<'a> {
    pub content: String,
    pub show_market_trends: bool,
    pub matches: Vec<&'a Property>,
}

/// The reply engine. Stateless; one instance serves every request thread.
#[derive(Debug, Clone, Default)]
pub struct Assistant {
    engine: SearchEngine,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces a reply for one user message, or `None` for blank input
    /// (blank input is ignored, not answered).
    pub fn respond<'a>(&self, message: &str, catalog: &'a [Property]) -> Option<AssistantReply<'a>> {
        if message.trim().is_empty() {
            return None;
        }

        let matches = self.engine.filter(message, catalog);

        let (content, show_market_trends) = if replies::is_market_query(message) {
            (replies::MARKET_TRENDS_REPLY.to_string(), true)
        } else if matches.is_empty() {
            (replies::NO_MATCHES_REPLY.to_string(), false)
        } else {
            (replies::match_count_reply(matches.len()), false)
        };

        Some(AssistantReply {
            content,
            show_market_trends,
            matches,
        })
    }
}

/// An in-memory chat transcript. Nothing is persisted anywhere; dropping the
/// session drops the history.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    matched_ids: Vec<String>,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the user turn, asks the assistant, records the reply turn.
    /// Blank input leaves the transcript untouched.
    pub fn send<'a>(
        &mut self,
        assistant: &Assistant,
        input: &str,
        catalog: &'a [Property],
    ) -> Option<AssistantReply<'a>> {
        let reply = assistant.respond(input, catalog)?;

        self.push(Role::User, input.to_string());
        self.push(Role::Assistant, reply.content.clone());
        self.matched_ids = reply.matches.iter().map(|p| p.id.clone()).collect();

        Some(reply)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Ids of the properties matched by the most recent turn.
    pub fn matched_ids(&self) -> &[String] {
        &self.matched_ids
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.matched_ids.clear();
    }

    fn push(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}
