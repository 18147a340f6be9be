//! Environment-driven configuration and filesystem paths.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Filesystem locations used by the backend.
///
/// The persistence directory holds the vector index; it must exist
/// before any retrieval query runs, so it is created here.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub persist_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Self {
        let data_dir = discover_data_dir();
        let log_dir = data_dir.join("logs");
        let persist_dir = env::var("RAGCHAT_PERSIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("rag_index"));

        for dir in [&data_dir, &log_dir, &persist_dir] {
            let _ = fs::create_dir_all(dir);
        }

        AppPaths {
            data_dir,
            log_dir,
            persist_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

fn discover_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("RAGCHAT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if cfg!(debug_assertions) {
        return env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }

    if cfg!(target_os = "windows") {
        let base = env::var("LOCALAPPDATA")
            .unwrap_or_else(|_| env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string()));
        return PathBuf::from(base).join("Ragchat");
    }

    if cfg!(target_os = "macos") {
        return home_dir()
            .join("Library")
            .join("Application Support")
            .join("Ragchat");
    }

    let xdg = env::var("XDG_DATA_HOME").unwrap_or_else(|_| {
        home_dir()
            .join(".local/share")
            .to_string_lossy()
            .to_string()
    });
    PathBuf::from(xdg).join("ragchat")
}

fn home_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the hosted chat-completion service.
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub chat_model: String,
    pub temperature: f64,
    /// OpenAI-compatible endpoint serving the sentence-embedding model.
    pub embedding_base_url: String,
    pub embedding_model: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// Number of chunks retrieved per query.
    pub top_k: usize,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            groq_api_key: String::new(),
            groq_base_url: "https://api.groq.com/openai/v1".to_string(),
            chat_model: "llama3-70b-8192".to_string(),
            temperature: 0.7,
            embedding_base_url: "http://127.0.0.1:1234".to_string(),
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            chunk_size: 500,
            chunk_overlap: 100,
            top_k: 4,
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var("GROQ_API_KEY") {
            config.groq_api_key = value;
        }
        if let Ok(value) = env::var("GROQ_BASE_URL") {
            config.groq_base_url = value;
        }
        if let Ok(value) = env::var("EMBEDDING_BASE_URL") {
            config.embedding_base_url = value;
        }
        if let Ok(value) = env::var("EMBEDDING_MODEL") {
            config.embedding_model = value;
        }
        config.debug = debug_enabled();
        config
    }
}

/// Whether the DEBUG flag is set. Gates error detail in the
/// serverless error responses.
pub fn debug_enabled() -> bool {
    match env::var("DEBUG") {
        Ok(value) => {
            let value = value.trim().to_ascii_lowercase();
            !value.is_empty() && value != "0" && value != "false"
        }
        Err(_) => false,
    }
}
