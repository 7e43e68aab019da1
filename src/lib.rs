pub mod config;
pub mod core;
pub mod game;
pub mod ui;

pub use crate::core::error::GuessError;
pub use crate::core::feedback::{classify, classify_str, FeedbackEntry, MatchStatus};
pub use crate::core::syllable::{compose, decompose, Syllable};
pub use crate::core::target::Target;
pub use crate::game::{Session, SessionState};
