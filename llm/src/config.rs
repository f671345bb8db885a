/// Connection settings for the generation backend.
///
/// Always passed explicitly at client construction so tests can point a
/// client at a mock server; nothing reads the environment implicitly.
#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
}

impl LlmConfig {
    /// Read the backend location from the `OLLAMA_URL` and `OLLAMA_MODEL`
    /// environment variables, falling back to a local default server.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".into()),
            model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "gemma3:27b".into()),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            model: "gemma3:27b".into(),
        }
    }
}
