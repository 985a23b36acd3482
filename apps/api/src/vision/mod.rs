// Image Analyzer: vision-model description of a user's photo.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
