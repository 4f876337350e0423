use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a success or error notice stays on screen.
pub const NOTICE_DURATION_MS: i64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("The contact form isn't configured on this server")]
    NotConfigured,
    #[error("Message relay rejected the submission ({0})")]
    Rejected(http::StatusCode),
    #[error("Couldn't reach the message relay: {0}")]
    Transport(String),
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trims every field and rejects blanks and malformed addresses.
    pub fn validated(self) -> Result<Self, ContactError> {
        let msg = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        if msg.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if msg.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if msg.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !looks_like_email(&msg.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(msg)
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub expires_at: DateTime<Utc>,
}

/// A single transient notice under the contact form. Showing a new notice
/// replaces the old one and restarts the dismissal clock.
#[derive(Debug, Clone, Default)]
pub struct NoticeBanner {
    current: Option<Notice>,
}

impl NoticeBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: NoticeKind, now: DateTime<Utc>) -> &Notice {
        self.current.insert(Notice {
            kind,
            expires_at: now + TimeDelta::milliseconds(NOTICE_DURATION_MS),
        })
    }

    /// The notice still on screen at `now`, dropping it once expired.
    pub fn visible(&mut self, now: DateTime<Utc>) -> Option<&NoticeKind> {
        if self.current.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.current = None;
        }
        self.current.as_ref().map(|n| &n.kind)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.current.as_ref().map(|n| n.expires_at)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
