//! The chat backend's HTTP surface, modelled without performing any I/O.
//!
//! The driver sends these requests; this module only builds bodies and
//! reads replies so the shapes live in one place.

use serde::{Deserialize, Serialize};

use super::error::TranscriptError;

/// Backend endpoints the chat widget talks to. All are `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Ask a question; form-encoded `message` body.
    Ask,
    /// Drop the server-side conversation memory; no body.
    ClearChat,
    /// Upload a document as multipart field [`Endpoint::UPLOAD_FIELD`].
    Upload,
}

impl Endpoint {
    pub const METHOD: &'static str = "POST";
    pub const UPLOAD_FIELD: &'static str = "file";

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Ask => "/ask",
            Endpoint::ClearChat => "/clear_chat",
            Endpoint::Upload => "/upload",
        }
    }
}

/// A question for [`Endpoint::Ask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    message: String,
}

impl AskRequest {
    pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

    /// Trims the message; a blank message is never sent.
    pub fn new(message: &str) -> Result<Self, TranscriptError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(TranscriptError::EmptyMessage);
        }
        Ok(Self {
            message: message.to_string(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `message=<url-encoded text>`
    pub fn form_body(&self) -> String {
        format!("message={}", urlencoding::encode(&self.message))
    }
}

/// JSON reply from [`Endpoint::Ask`] or [`Endpoint::Upload`]:
/// `{ "answer": ... }` on success, `{ "error": ... }` on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BackendReply {
    /// Parses a reply body. A reply with nothing to show is an error.
    pub fn from_json(body: &str) -> Result<Self, TranscriptError> {
        let reply: BackendReply = serde_json::from_str(body)?;
        if reply.text().is_none() {
            return Err(TranscriptError::EmptyReply);
        }
        Ok(reply)
    }

    /// The text to show as the bot's message: the answer, falling back to
    /// the error so backend failures still reach the user.
    pub fn text(&self) -> Option<&str> {
        self.answer
            .as_deref()
            .filter(|a| !a.is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.is_empty()))
    }

    pub fn is_error(&self) -> bool {
        self.answer.as_deref().is_none_or(str::is_empty) && self.error.is_some()
    }
}
