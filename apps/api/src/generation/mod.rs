// Response generation pipeline: prompt synthesis → LLM call → reply parsing.
// All LLM calls go through llm_client — no direct backend calls here.

pub mod handlers;
pub mod parser;
pub mod prompt;
pub mod prompts;
