pub mod pipeline;
pub mod protocol;

pub mod code_fence;
pub mod llm_client;
pub mod prompt_builder;
pub mod section_parser;
