//! Local community chat.
//!
//! Messages exist only in this tab. The seeded entries and the online count
//! are static display values; nothing is sent to or received from anyone.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author label for messages typed in this tab.
pub const LOCAL_USER: &str = "You";

/// Static participant count shown in the chat header.
pub const ONLINE_LABEL: &str = "1,242 Online";

pub const INPUT_PLACEHOLDER: &str = "Air your opinion...";

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub user: String,
    pub text: String,
    /// Display time, `HH:MM`.
    pub time: String,
    /// Posted by the signal bot rather than a person.
    pub is_ai: bool,
}

impl ChatMessage {
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.user == LOCAL_USER
    }
}

/// Append-only message list. Insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// State pre-filled with the fixture conversation.
    #[must_use]
    pub fn seeded() -> Self {
        let seed = |id: &str, user: &str, text: &str, time: &str, is_ai: bool| ChatMessage {
            id: id.to_owned(),
            user: user.to_owned(),
            text: text.to_owned(),
            time: time.to_owned(),
            is_ai,
        };
        Self {
            messages: vec![
                seed(
                    "1",
                    "AlphaWhale",
                    "Polymarket odds on ETH are lagging. $10k is programmed.",
                    "12:44",
                    false,
                ),
                seed(
                    "2",
                    "SolanaIntern",
                    "Just confirmed the x402 reveal. The depth analysis is insane.",
                    "12:45",
                    false,
                ),
                seed(
                    "3",
                    "SignalBot",
                    "New Signal Detected: Super Bowl LIX odds shifting +4.2%",
                    "12:46",
                    true,
                ),
            ],
        }
    }

    /// Append a local message. Whitespace-only input is ignored.
    ///
    /// Returns `true` when a message was added.
    pub fn send(&mut self, text: &str, time: impl Into<String>) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            user: LOCAL_USER.to_owned(),
            text: text.to_owned(),
            time: time.into(),
            is_ai: false,
        });
        true
    }
}
