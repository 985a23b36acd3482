// Matcher: model-judged compatibility between two users' stored characteristics.

pub mod handlers;
pub mod matcher;
pub mod prompts;
