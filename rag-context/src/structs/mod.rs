pub mod rag_context_config;
pub mod retrieved_document;
