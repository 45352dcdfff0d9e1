pub mod chat_room;
pub mod notice_banner;
pub mod signal_card;
pub mod wallet_button;
