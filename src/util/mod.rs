//! Small pure helpers shared by pages and components.

pub mod clock;
pub mod format;
