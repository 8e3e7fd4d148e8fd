// Job matching: prompt building, reply parsing, and the matcher seam.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod handlers;
pub mod matcher;
pub mod models;
pub mod prompts;
pub mod request_builder;
pub mod response_parser;
pub mod sections;
