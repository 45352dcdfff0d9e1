//! Minimal Solana wire layer used by the reveal flow.
//!
//! DESIGN
//! ======
//! The client only ever builds one kind of transaction (a native transfer to
//! the vault) and waits for one commitment level. Keys, hashes and message
//! encoding come from the split-out Solana crates; this module adds the
//! JSON-RPC client and the confirmation poller on top. Signing stays in the
//! wallet.

pub mod confirm;
pub mod pubkey;
pub mod rpc;
pub mod transaction;

pub use pubkey::{Pubkey, PubkeyError, SYSTEM_PROGRAM_ID, parse_address};
pub use transaction::{Hash, Message, TransactionSignature, message_to_base58, transfer_message};
