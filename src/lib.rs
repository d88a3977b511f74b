//! CareerCraft: career-guidance chatbot backend.

pub mod assessment;
pub mod config;
pub mod error;
pub mod llm;
pub mod store;
