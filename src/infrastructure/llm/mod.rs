mod mock_generative_backend;
mod ollama_client;

pub use mock_generative_backend::MockGenerativeBackend;
pub use ollama_client::OllamaClient;
