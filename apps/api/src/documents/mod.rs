// Document Assistant: form-filling guidance from extraction results,
// plus the static catalog of downloadable forms.

pub mod assistant;
pub mod catalog;
pub mod handlers;
pub mod prompts;
