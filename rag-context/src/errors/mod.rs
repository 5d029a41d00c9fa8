pub mod rag_context_error;
