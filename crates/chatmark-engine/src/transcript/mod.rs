//! # Chat Transcript
//!
//! The driver's conversation state as an explicit value instead of a shared
//! chat-window reference. The driver owns a [`Transcript`], mutates it as
//! user input and backend replies arrive, and renders it with the pure
//! functions here.
//!
//! Bot messages go through the markdown formatter. User messages are only
//! escaped: what a user typed is never expanded as markdown.

pub mod backend;
pub mod error;

use serde::{Deserialize, Serialize};

use crate::{escape::escape_html, format_with, options::FormatOptions};

pub use backend::{AskRequest, BackendReply, Endpoint};
pub use error::TranscriptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

/// Presentation settings for rendered message bubbles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptStyle {
    pub user_avatar: String,
    pub bot_avatar: String,
}

impl Default for TranscriptStyle {
    fn default() -> Self {
        Self {
            user_avatar: "U".to_string(),
            bot_avatar: "J".to_string(),
        }
    }
}

/// Render one message as a chat bubble.
///
/// ```
/// use chatmark_engine::{FormatOptions, Message, Sender, TranscriptStyle, render_message};
///
/// let msg = Message { sender: Sender::Bot, text: "**hi**".into() };
/// let html = render_message(&msg, &FormatOptions::default(), &TranscriptStyle::default());
/// assert!(html.contains(r#"<div class="message-bubble"><strong>hi</strong></div>"#));
/// ```
pub fn render_message(msg: &Message, options: &FormatOptions, style: &TranscriptStyle) -> String {
    let (avatar, body) = match msg.sender {
        Sender::User => (&style.user_avatar, escape_html(&msg.text).into_owned()),
        Sender::Bot => (&style.bot_avatar, format_with(&msg.text, options)),
    };
    format!(
        r#"<div class="message {}"><div class="message-avatar">{}</div><div class="message-bubble">{}</div></div>"#,
        msg.sender.css_class(),
        escape_html(avatar),
        body
    )
}

/// An ordered conversation between the user and the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Append what the user typed, trimmed. Blank input is rejected and the
    /// transcript is left unchanged.
    pub fn push_user(&mut self, text: &str) -> Result<(), TranscriptError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranscriptError::EmptyMessage);
        }
        self.push(Sender::User, text.to_string());
        Ok(())
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(Sender::Bot, text.into());
    }

    /// Append a backend reply as a bot message, answer or error alike.
    pub fn push_reply(&mut self, reply: &BackendReply) -> Result<(), TranscriptError> {
        let text = reply.text().ok_or(TranscriptError::EmptyReply)?;
        if reply.is_error() {
            log::warn!("backend reported an error: {text}");
        }
        self.push(Sender::Bot, text.to_string());
        Ok(())
    }

    /// Forget the conversation. The driver calls this only after the user
    /// confirms, alongside `POST /clear_chat`.
    pub fn clear(&mut self) {
        log::debug!("clearing transcript of {} messages", self.messages.len());
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render every message, oldest first.
    pub fn render_html(&self, options: &FormatOptions, style: &TranscriptStyle) -> String {
        self.messages
            .iter()
            .map(|m| render_message(m, options, style))
            .collect()
    }

    fn push(&mut self, sender: Sender, text: String) {
        log::debug!("appending {sender:?} message ({} bytes)", text.len());
        self.messages.push(Message { sender, text });
    }
}
