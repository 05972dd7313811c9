//! Configuration handling for honk-inspect CLI
//!
//! Priority: CLI flags > environment variables > config file > defaults

use anyhow::{Context, Result};
use honk_core::constants::{DETECT_MAX_LOG_N, DETECT_MIN_LOG_N};
use serde::Deserialize;
use std::{env, fs, ops::Range, path::Path, path::PathBuf};

/// Artifact directory override
pub const ENV_ARTIFACT_DIR: &str = "HONK_ARTIFACT_DIR";
/// Default zk flag override
pub const ENV_ZK: &str = "HONK_ZK";

/// Resolved configuration for CLI commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quiet: bool,
    pub json_output: bool,
    /// zk flag used when a command gets neither `--zk` nor `--no-zk`
    pub default_zk: bool,
    pub artifact_dir: PathBuf,
    /// log_n search range for size detection
    pub detect_range: Range<u32>,
}

/// Environment overrides, read once at startup
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvOverrides {
    pub artifact_dir: Option<PathBuf>,
    pub zk: Option<bool>,
}

impl EnvOverrides {
    fn from_env() -> Result<Self> {
        let zk = match env::var(ENV_ZK) {
            Ok(value) => Some(parse_bool(&value).with_context(|| {
                format!("Invalid {} value {:?}, expected true/false", ENV_ZK, value)
            })?),
            Err(_) => None,
        };
        Ok(Self {
            artifact_dir: env::var_os(ENV_ARTIFACT_DIR).map(PathBuf::from),
            zk,
        })
    }
}

impl Config {
    /// Load configuration from file, environment, and CLI args
    pub fn load(common: &super::CommonArgs) -> Result<Self> {
        let file_config = match &common.config {
            // An explicit config path must exist
            Some(path) => Some(ConfigFile::load_from(path)?),
            None => ConfigFile::load().ok(),
        };
        let env = EnvOverrides::from_env()?;
        Self::resolve(common, &env, file_config.as_ref())
    }

    /// Merge the sources in priority order
    pub fn resolve(
        common: &super::CommonArgs,
        env: &EnvOverrides,
        file: Option<&ConfigFile>,
    ) -> Result<Self> {
        let defaults = file.and_then(|f| f.defaults.as_ref());

        let output = common
            .output
            .or_else(|| defaults.and_then(|d| d.output))
            .unwrap_or(super::OutputFormat::Human);

        let default_zk = env
            .zk
            .or_else(|| defaults.and_then(|d| d.zk))
            .unwrap_or(true);

        let artifact_dir = env
            .artifact_dir
            .clone()
            .or_else(|| {
                defaults
                    .and_then(|d| d.artifact_dir.as_deref())
                    .map(expand_tilde)
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let detect = file.and_then(|f| f.detect.as_ref());
        let min_log_n = detect
            .and_then(|d| d.min_log_n)
            .unwrap_or(DETECT_MIN_LOG_N);
        let max_log_n = detect
            .and_then(|d| d.max_log_n)
            .unwrap_or(DETECT_MAX_LOG_N);
        if min_log_n >= max_log_n {
            anyhow::bail!(
                "Invalid [detect] range: min_log_n ({}) must be below max_log_n ({})",
                min_log_n,
                max_log_n
            );
        }

        Ok(Self {
            quiet: common.quiet,
            json_output: output == super::OutputFormat::Json,
            default_zk,
            artifact_dir,
            detect_range: min_log_n..max_log_n,
        })
    }

    /// zk flag for a command, falling back to the configured default
    pub fn zk(&self, zk: bool, no_zk: bool) -> bool {
        match (zk, no_zk) {
            (true, _) => true,
            (_, true) => false,
            _ => self.default_zk,
        }
    }

    /// Artifact directory for a command, `--dir` first
    pub fn artifact_dir(&self, dir: Option<&Path>) -> PathBuf {
        dir.map(Path::to_path_buf)
            .unwrap_or_else(|| self.artifact_dir.clone())
    }

    /// Whether human-readable progress should be printed
    pub fn chatty(&self) -> bool {
        !self.quiet && !self.json_output
    }
}

/// Configuration file structure
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    defaults: Option<DefaultConfig>,
    detect: Option<DetectConfig>,
}

#[derive(Debug, Deserialize)]
struct DefaultConfig {
    zk: Option<bool>,
    output: Option<super::OutputFormat>,
    artifact_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetectConfig {
    min_log_n: Option<u32>,
    max_log_n: Option<u32>,
}

impl ConfigFile {
    fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            anyhow::bail!("Config file not found");
        }
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get config file path
fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("honk-inspect").join("config.toml"))
}

/// Expand ~ to home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommonArgs, OutputFormat};

    fn common() -> CommonArgs {
        CommonArgs {
            output: None,
            quiet: false,
            config: None,
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(&common(), &EnvOverrides::default(), None).unwrap();
        assert!(config.default_zk);
        assert!(!config.json_output);
        assert_eq!(config.artifact_dir, PathBuf::from("."));
        assert_eq!(config.detect_range, DETECT_MIN_LOG_N..DETECT_MAX_LOG_N);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = ConfigFile::parse(
            r#"
            [defaults]
            zk = false
            output = "json"
            artifact_dir = "target/keccak"

            [detect]
            min_log_n = 5
            max_log_n = 20
            "#,
        )
        .unwrap();
        let config = Config::resolve(&common(), &EnvOverrides::default(), Some(&file)).unwrap();
        assert!(!config.default_zk);
        assert!(config.json_output);
        assert_eq!(config.artifact_dir, PathBuf::from("target/keccak"));
        assert_eq!(config.detect_range, 5..20);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = ConfigFile::parse("[defaults]\nzk = false\nartifact_dir = \"a\"\n").unwrap();
        let env = EnvOverrides {
            artifact_dir: Some(PathBuf::from("b")),
            zk: Some(true),
        };
        let config = Config::resolve(&common(), &env, Some(&file)).unwrap();
        assert!(config.default_zk);
        assert_eq!(config.artifact_dir, PathBuf::from("b"));
    }

    #[test]
    fn test_flags_override_everything() {
        let file = ConfigFile::parse("[defaults]\noutput = \"json\"\n").unwrap();
        let mut args = common();
        args.output = Some(OutputFormat::Human);
        args.quiet = true;
        let env = EnvOverrides {
            artifact_dir: Some(PathBuf::from("b")),
            zk: Some(true),
        };
        let config = Config::resolve(&args, &env, Some(&file)).unwrap();
        assert!(!config.json_output);
        assert!(config.quiet);
        assert!(!config.chatty());
        assert!(!config.zk(false, true));
        assert!(config.zk(false, false));
        assert_eq!(
            config.artifact_dir(Some(Path::new("c"))),
            PathBuf::from("c")
        );
        assert_eq!(config.artifact_dir(None), PathBuf::from("b"));
    }

    #[test]
    fn test_invalid_detect_range() {
        let file = ConfigFile::parse("[detect]\nmin_log_n = 10\nmax_log_n = 10\n").unwrap();
        assert!(Config::resolve(&common(), &EnvOverrides::default(), Some(&file)).is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_unknown_output_rejected() {
        assert!(ConfigFile::parse("[defaults]\noutput = \"xml\"\n").is_err());
    }
}
