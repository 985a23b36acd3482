// Conversational Responder: two-step matchmaker chat.

pub mod handlers;
pub mod prompts;
pub mod responder;
