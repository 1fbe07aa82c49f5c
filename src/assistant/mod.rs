pub mod chat;
pub mod replies;

pub use chat::{Assistant, AssistantReply, ChatMessage, ChatSession, Role};
