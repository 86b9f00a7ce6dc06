// Ollama backend boundary

mod client;
mod types;

pub use client::OllamaClient;
pub use types::{GenerateRequest, GenerateResponse};
