use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

// Scoring options live in scoreai_core so the processor owns their defaults
use scoreai_core::ProcessorConfig;

pub const CONFIG_DIR_NAME: &str = "scoreai";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub scoring: ProcessorConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Folder holding the transcribed and scored documents.
    #[serde(default = "PathsConfig::default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "PathsConfig::default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: Self::default_input_dir(),
            output_dir: Self::default_output_dir(),
        }
    }
}

impl PathsConfig {
    fn default_input_dir() -> PathBuf {
        PathBuf::from("input")
    }

    fn default_output_dir() -> PathBuf {
        PathBuf::from("output")
    }
}

impl Config {
    /// `~/scoreai/config.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Load `~/scoreai/config.json`, falling back to built-in defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::default_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate an explicit config file. A missing file is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found at: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.scoring.validate()?;
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME);

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point paths.input_dir at the folder of scored .docx transcripts");
        println!("   2. Set scoring.n_memories to the number of memories per transcript");
        println!("   3. Run 'scoreai run' to write the scoring table");
        println!();
        println!("🔧 Configuration options:");
        println!("   - min_response_length: shorter paragraphs are skipped when locating a response");
        println!("   - tags: the nine scoring codes, in output column order");
        println!("   - on_missing_marker: abort (skip the document) or truncate (keep memories found)");
        println!();
        Ok(())
    }

    /// Write the default config to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreai_core::{DEFAULT_TAGS, MissingMarkerPolicy};

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.scoring.n_memories, 3);
        assert_eq!(config.scoring.min_response_length, 25);
        assert_eq!(config.paths.input_dir, PathBuf::from("input"));
        assert_eq!(config.scoring.on_missing_marker, MissingMarkerPolicy::Abort);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_scoring_section() {
        let json = r#"{
            "paths": { "input_dir": "transcripts" },
            "scoring": { "n_memories": 5, "on_missing_marker": "truncate" }
        }"#;
        let config: Config = serde_json::from_str(json).expect("config should parse");

        assert_eq!(config.paths.input_dir, PathBuf::from("transcripts"));
        assert_eq!(config.paths.output_dir, PathBuf::from("output"));
        assert_eq!(config.scoring.n_memories, 5);
        assert_eq!(config.scoring.min_response_length, 25);
        assert_eq!(
            config.scoring.on_missing_marker,
            MissingMarkerPolicy::Truncate
        );
        assert_eq!(
            config.scoring.tags.iter().collect::<Vec<_>>(),
            DEFAULT_TAGS.to_vec()
        );
    }

    #[test]
    fn wrong_tag_count_is_rejected() {
        let json = r#"{ "scoring": { "tags": ["Int_EV", "Ext_EV"] } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn load_from_validates() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "scoring": { "n_memories": 0 } }"#).expect("write config");

        let err = Config::load_from(&path).expect_err("zero memories is invalid");
        assert!(err.to_string().contains("n_memories"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(Config::load_from(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn template_round_trips_and_is_not_overwritten() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        Config::write_template(&path).expect("template should be written");
        let loaded = Config::load_from(&path).expect("template should load");
        assert_eq!(loaded, Config::default());

        assert!(Config::write_template(&path).is_err());
    }
}
