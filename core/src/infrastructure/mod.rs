pub mod guideline;
pub mod llm;
pub mod nutrition;
