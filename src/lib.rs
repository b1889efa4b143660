pub mod config;
pub mod core;
pub mod demo;
pub mod llm;
pub mod session;

pub use crate::core::{Result, SeekError};
pub use session::{ConversationSession, Reply};
