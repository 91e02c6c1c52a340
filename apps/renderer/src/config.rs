use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Shape of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Nested `CvRecord` JSON.
    Record,
    /// Flat form fields with JSON-encoded lists.
    Form,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub input_format: InputFormat,
    pub output_dir: PathBuf,
    /// Overrides the record's display language when set.
    pub language: Option<String>,
    /// Also write the recorded draw operations as JSON.
    pub layout_dump: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let input_format = match var("CV_INPUT_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("record") => InputFormat::Record,
            Some("form") => InputFormat::Form,
            Some(other) => bail!("CV_INPUT_FORMAT must be 'record' or 'form', got '{other}'"),
        };

        let layout_dump = match var("LAYOUT_DUMP") {
            None => false,
            Some(raw) => parse_bool(&raw).context("LAYOUT_DUMP must be a boolean")?,
        };

        Ok(Config {
            input_path: PathBuf::from(require(&var, "CV_INPUT")?),
            input_format,
            output_dir: PathBuf::from(var("OUTPUT_DIR").unwrap_or_else(|| ".".to_string())),
            language: var("CV_LANGUAGE").filter(|l| !l.trim().is_empty()),
            layout_dump,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: '{other}'"),
    }
}
