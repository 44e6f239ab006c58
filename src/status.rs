//! Status Message
//!
//! The single shared message area for action outcomes. Every message gets a
//! ticket; a hide timer only clears the message it was started for, so a
//! newer message is never hidden by an older timer.

/// Default auto-hide delay
pub const STATUS_HIDE_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS class of the message area
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

/// Currently shown message plus the ticket of the latest `show`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusState {
    current: Option<StatusMessage>,
    ticket: u64,
}

impl StatusState {
    /// Show a message, returning the ticket its hide timer must present
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.ticket += 1;
        self.current = Some(message);
        self.ticket
    }

    /// Hide the message if `ticket` still belongs to it. Returns whether it hid.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn visible(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
