//! Settings and runtime utilities for the ucol web service.
//!
//! ## Items
//!
//! - [`Settings`] — Process configuration resolved from the environment
//! - [`log()`] — Dual terminal + file logger initialization

use std::path::PathBuf;

/// Process configuration resolved from environment variables.
///
/// `GEMINI_API_KEY` is the one required value; everything else has a
/// sensible default for local development.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// SQL script consumed once at startup to initialize the schema.
    pub schema_path: PathBuf,
    /// Versioned preamble configuration for the chat gateway.
    pub prompt_path: PathBuf,
    /// Credential for the generative-language service.
    pub api_key: String,
    /// Base URL of the generative-language service.
    pub chat_endpoint: String,
    /// Model identifier requested from the service.
    pub chat_model: String,
}

impl Settings {
    /// Resolve settings from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `GEMINI_API_KEY` is not set. The service cannot answer
    /// chat requests without a credential, so startup aborts.
    pub fn from_env() -> Self {
        Self {
            bind: or(std::env::var("BIND_ADDR"), "127.0.0.1:8080"),
            db_path: or(std::env::var("DB_PATH"), "ucol.db").into(),
            schema_path: or(std::env::var("SCHEMA_FILE"), "schema.sql").into(),
            prompt_path: or(std::env::var("PROMPT_FILE"), "prompt.json").into(),
            api_key: std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set"),
            chat_endpoint: or(
                std::env::var("CHAT_ENDPOINT"),
                "https://generativelanguage.googleapis.com",
            ),
            chat_model: or(std::env::var("CHAT_MODEL"), "gemini-2.5-flash"),
        }
    }
}

fn or(var: Result<String, std::env::VarError>, default: &str) -> String {
    var.unwrap_or_else(|_| default.to_string())
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_vars() {
        assert!(or(Err(std::env::VarError::NotPresent), "fallback") == "fallback");
        assert!(or(Ok("set".to_string()), "fallback") == "set");
    }
}
