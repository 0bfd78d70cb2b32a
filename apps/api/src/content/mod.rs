// Content generation: prompt building, section parsing, result formatting,
// text export and the service that ties them to the generative API.
// All upstream calls go through llm_client.

pub mod export;
pub mod formatter;
pub mod handlers;
pub mod prompts;
pub mod sections;
pub mod service;
