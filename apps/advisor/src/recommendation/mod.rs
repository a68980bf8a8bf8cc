// Course recommendation: prompt template, requester pipeline, and the
// form page that drives it. All model calls go through llm_client.

pub mod handlers;
pub mod page;
pub mod prompts;
pub mod requester;
