pub mod config;
pub mod content;
pub mod document;
pub mod topic;
