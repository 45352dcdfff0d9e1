//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`signals`,
//! `chat`). The chat widget never owns its own visibility; it reads this flag
//! and reports closes back through a callback.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dashboard chrome state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub chat_open: bool,
}

impl UiState {
    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }
}
