use crate::error::IdenticonError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for `identicon_demo`, loaded from a JSON file.
#[derive(Clone, Debug, Deserialize)]
pub struct DemoConfig {
    /// Input string the identicon is derived from.
    pub input: String,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the PNG is written to. Defaults to the current directory.
    pub dir: Option<PathBuf>,
    /// Base name of the PNG (without extension). Defaults to the input.
    pub name: Option<String>,
    /// When set, the per-stage JSON trace is written here.
    pub trace_out: Option<PathBuf>,
}

impl DemoConfig {
    pub fn output_dir(&self) -> &Path {
        self.output.dir.as_deref().unwrap_or(Path::new("."))
    }

    pub fn output_name(&self) -> &str {
        self.output.name.as_deref().unwrap_or(&self.input)
    }
}

pub fn load_config(path: &Path) -> Result<DemoConfig, IdenticonError> {
    let contents = fs::read_to_string(path).map_err(|e| IdenticonError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| IdenticonError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::DemoConfig;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: DemoConfig = serde_json::from_str(r#"{"input": "example"}"#).unwrap();
        assert_eq!(config.input, "example");
        assert_eq!(config.output_dir(), std::path::Path::new("."));
        assert_eq!(config.output_name(), "example");
        assert!(config.output.trace_out.is_none());
    }

    #[test]
    fn full_config_round_trips() {
        let json = r#"{
            "input": "alice@example.org",
            "output": {
                "dir": "avatars",
                "name": "alice",
                "trace_out": "avatars/alice.trace.json"
            }
        }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.output_dir(), std::path::Path::new("avatars"));
        assert_eq!(config.output_name(), "alice");
        assert!(config.output.trace_out.is_some());
    }
}
