//! chat_core - Core types and configuration for the chat service
//!
//! This crate provides the foundational pieces used across the service crates:
//! - `message` - conversation turns and speaker roles
//! - `config` - layered runtime configuration
//! - `context` - the bounded conversation window sent upstream

pub mod config;
pub mod context;
pub mod message;

// Re-export commonly used types
pub use config::ChatConfig;
pub use context::ContextBuilder;
pub use message::{ChatTurn, Role};
