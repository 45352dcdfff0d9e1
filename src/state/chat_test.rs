use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn seeded_chat_has_fixture_conversation_in_order() {
    let state = ChatState::seeded();
    let users: Vec<&str> = state.messages.iter().map(|m| m.user.as_str()).collect();
    assert_eq!(users, vec!["AlphaWhale", "SolanaIntern", "SignalBot"]);
    assert!(state.messages[2].is_ai);
    assert!(!state.messages[0].is_ai);
    assert!(state.messages.iter().all(|m| !m.is_local()));
}

// =============================================================
// send
// =============================================================

#[test]
fn send_appends_local_message() {
    let mut state = ChatState::seeded();
    let before = state.messages.len();

    assert!(state.send("gm", "09:05"));

    assert_eq!(state.messages.len(), before + 1);
    let last = state.messages.last().unwrap();
    assert_eq!(last.user, "You");
    assert_eq!(last.text, "gm");
    assert_eq!(last.time, "09:05");
    assert!(!last.is_ai);
    assert!(last.is_local());
}

#[test]
fn send_ignores_empty_and_whitespace_input() {
    let mut state = ChatState::seeded();
    let before = state.messages.clone();

    assert!(!state.send("", "09:05"));
    assert!(!state.send("   \t\n", "09:05"));

    assert_eq!(state.messages, before);
}

#[test]
fn send_keeps_text_untrimmed_and_ids_unique() {
    let mut state = ChatState::default();
    state.send("  wagmi ", "10:00");
    state.send("gm", "10:01");
    assert_eq!(state.messages[0].text, "  wagmi ");
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

#[test]
fn chat_chrome_labels() {
    assert_eq!(ONLINE_LABEL, "1,242 Online");
    assert_eq!(INPUT_PLACEHOLDER, "Air your opinion...");
}
