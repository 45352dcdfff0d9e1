//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`signals`, `chat`, `wallet`, `ui`) so individual
//! components can depend on small focused models. Each is a plain struct with
//! update methods; `app` wraps them in `RwSignal`s and provides them as
//! context.

pub mod chat;
pub mod signals;
pub mod ui;
pub mod wallet;
