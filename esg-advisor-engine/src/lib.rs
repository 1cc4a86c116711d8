// Conversation log and message model
pub mod message;

// Keyword-driven canned responder
pub mod responder;

// Offset-based event scheduling
pub mod timeline;

// Staged research progress simulation
pub mod research;

// Conversation session orchestration
pub mod session;

// Swappable advisor configuration
pub mod profile;

// Engine error types
pub mod error;
