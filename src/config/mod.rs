use crate::errors::{NewsError, NewsResult};
use crate::provider::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub cache_path: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let api_key = std::env::var("NEWSDESK_API_KEY")
            .map_err(|_| NewsError::MissingEnvVar("NEWSDESK_API_KEY".to_string()))?;

        let api_url =
            std::env::var("NEWSDESK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        // Default cache snapshot lives next to the executable
        let cache_path = std::env::var("NEWSDESK_CACHE_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("news_cache.json").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./news_cache.json".to_string())
        });

        Ok(Self {
            api_key,
            api_url,
            cache_path,
        })
    }
}
