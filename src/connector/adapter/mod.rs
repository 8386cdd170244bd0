mod in_memory_store;
mod json_file_store;
mod ollama_client;

pub use in_memory_store::*;
pub use json_file_store::*;
pub use ollama_client::*;
