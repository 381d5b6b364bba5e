//! User configuration for the `medquiz-markup` command line.
//!
//! The only setting is where question banks live. The highlight color table
//! is fixed in the engine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    Write {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("banks_path '{}' is not a directory", banks_path.display())]
    BanksPathNotDirectory { banks_path: PathBuf },

    #[error("No banks directory given and no config file at {}", config_path.display())]
    NoBanksPath { config_path: PathBuf },
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory searched for question bank `*.json` files.
    pub banks_path: PathBuf,
}

impl Config {
    /// Location of the per-user config file.
    pub fn default_path() -> PathBuf {
        let dir = shellexpand::tilde("~/.config/medquiz-markup");
        PathBuf::from(dir.as_ref()).join("config.toml")
    }

    /// Parses config text read from `config_path`.
    ///
    /// `~` and `$VAR` in `banks_path` are expanded, a relative `banks_path` is
    /// taken relative to the config file's directory, and a `banks_path` that
    /// exists but is not a directory is rejected.
    pub fn parse(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let raw: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let mut banks_path = expand(&raw.banks_path);
        if banks_path.is_relative()
            && let Some(base) = config_path.parent()
        {
            banks_path = base.join(banks_path);
        }

        let config = Config { banks_path };
        config.check_banks_path()?;
        Ok(config)
    }

    /// Reads the config at `config_path`; a missing file is `Ok(None)`.
    pub fn read(config_path: &Path) -> Result<Option<Self>, ConfigError> {
        if !config_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, config_path).map(Some)
    }

    /// Writes the config to `config_path`, creating parent directories.
    ///
    /// Refuses to persist a `banks_path` that is not an existing directory.
    pub fn write(&self, config_path: &Path) -> Result<(), ConfigError> {
        if !self.banks_path.is_dir() {
            return Err(ConfigError::BanksPathNotDirectory {
                banks_path: self.banks_path.clone(),
            });
        }

        let write_error = |source| ConfigError::Write {
            config_path: config_path.to_path_buf(),
            source,
        };
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(write_error)
    }

    /// Picks the banks directory: an explicit one wins, else the config file's.
    pub fn resolve_banks_path(
        explicit: Option<PathBuf>,
        config_path: &Path,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = explicit {
            return Ok(dir);
        }
        match Self::read(config_path)? {
            Some(config) => Ok(config.banks_path),
            None => Err(ConfigError::NoBanksPath {
                config_path: config_path.to_path_buf(),
            }),
        }
    }

    fn check_banks_path(&self) -> Result<(), ConfigError> {
        if self.banks_path.exists() && !self.banks_path.is_dir() {
            return Err(ConfigError::BanksPathNotDirectory {
                banks_path: self.banks_path.clone(),
            });
        }
        Ok(())
    }
}

/// Expands `~` and environment variables, keeping the path as written if a
/// variable is undefined.
fn expand(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    shellexpand::full(&text)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn default_path_is_expanded() {
        let path = Config::default_path();
        let path_str = path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/medquiz-markup/config.toml"));
    }

    #[test]
    fn parse_keeps_absolute_banks_path() {
        let temp_dir = TempDir::new().unwrap();
        let content = format!("banks_path = {:?}", temp_dir.path().to_string_lossy());

        let config = Config::parse(&content, Path::new("/etc/medquiz/config.toml")).unwrap();

        assert_eq!(config.banks_path, temp_dir.path());
    }

    #[test]
    fn parse_resolves_relative_banks_path_against_config_dir() {
        let config = Config::parse(
            "banks_path = \"banks\"",
            Path::new("/home/me/.config/medquiz-markup/config.toml"),
        )
        .unwrap();

        assert_eq!(
            config.banks_path,
            PathBuf::from("/home/me/.config/medquiz-markup/banks")
        );
    }

    #[test]
    fn parse_expands_env_vars() {
        unsafe {
            env::set_var("MEDQUIZ_TEST_ROOT", "/srv/medquiz");
        }

        let config = Config::parse(
            "banks_path = \"$MEDQUIZ_TEST_ROOT/banks\"",
            Path::new("/etc/config.toml"),
        )
        .unwrap();

        assert_eq!(config.banks_path, PathBuf::from("/srv/medquiz/banks"));

        unsafe {
            env::remove_var("MEDQUIZ_TEST_ROOT");
        }
    }

    #[test]
    fn parse_keeps_undefined_var_literal() {
        let config = Config::parse(
            "banks_path = \"/x/$MEDQUIZ_DEFINITELY_UNSET_VAR\"",
            Path::new("/etc/config.toml"),
        )
        .unwrap();

        assert_eq!(
            config.banks_path,
            PathBuf::from("/x/$MEDQUIZ_DEFINITELY_UNSET_VAR")
        );
    }

    #[test]
    fn parse_rejects_banks_path_that_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("bank.json");
        fs::write(&file, "{}").unwrap();
        let content = format!("banks_path = {:?}", file.to_string_lossy());

        let result = Config::parse(&content, &temp_dir.path().join("config.toml"));

        assert!(matches!(
            result,
            Err(ConfigError::BanksPathNotDirectory { banks_path }) if banks_path == file
        ));
    }

    #[test]
    fn parse_rejects_unknown_keys_and_bad_toml() {
        let path = Path::new("/etc/config.toml");

        assert!(matches!(
            Config::parse("banks_path = \"/b\"\nnotes_path = \"/n\"", path),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            Config::parse("banks_path = [not valid", path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn read_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();

        let result = Config::read(&temp_dir.path().join("nonexistent.toml")).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested/config.toml");
        let config = Config {
            banks_path: temp_dir.path().to_path_buf(),
        };

        config.write(&config_path).unwrap();

        assert_eq!(Config::read(&config_path).unwrap(), Some(config));
    }

    #[test]
    fn write_refuses_missing_banks_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            banks_path: temp_dir.path().join("missing"),
        };

        let result = config.write(&temp_dir.path().join("config.toml"));

        assert!(matches!(
            result,
            Err(ConfigError::BanksPathNotDirectory { .. })
        ));
        assert!(!temp_dir.path().join("config.toml").exists());
    }

    #[test]
    fn resolve_prefers_explicit_dir() {
        let resolved =
            Config::resolve_banks_path(Some(PathBuf::from("/given")), Path::new("/nope.toml"))
                .unwrap();

        assert_eq!(resolved, PathBuf::from("/given"));
    }

    #[test]
    fn resolve_falls_back_to_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::create_dir(temp_dir.path().join("banks")).unwrap();
        fs::write(&config_path, "banks_path = \"banks\"").unwrap();

        let resolved = Config::resolve_banks_path(None, &config_path).unwrap();

        assert_eq!(resolved, temp_dir.path().join("banks"));
    }

    #[test]
    fn resolve_without_dir_or_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let result = Config::resolve_banks_path(None, &config_path);

        assert!(matches!(
            result,
            Err(ConfigError::NoBanksPath { config_path: p }) if p == config_path
        ));
    }
}
