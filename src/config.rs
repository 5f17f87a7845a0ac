//! Docket configuration.
//!
//! Loaded from `~/.docket/config.toml` unless a path is given explicitly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::Deserialize;

use crate::fetch::Source;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHome,

    #[error(
        "no config file found at {}\n\
         Create one with at minimum:\n\n\
         [source]\n\
         file = \"/path/to/shipments.json\"",
        path.display()
    )]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown time zone '{name}': {source}")]
    TimeZone { name: String, source: jiff::Error },
}

/// Docket configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Where shipments are fetched from.
    pub source: Source,

    /// IANA time zone that defines calendar days.
    /// The system zone is used when omitted.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Default `tracing` filter directive; `DOCKET_LOG` overrides it.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from `path`, or from `~/.docket/config.toml` when `None`.
    ///
    /// A relative `file` source is resolved against the config file's directory.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path().ok_or(ConfigError::NoHome)?,
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::Missing { path });
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Invalid {
            path: path.clone(),
            source,
        })?;

        if let Source::File(file) = &mut config.source
            && file.is_relative()
            && let Some(dir) = path.parent()
        {
            *file = dir.join(&*file);
        }

        Ok(config)
    }

    /// The Docket home directory: `~/.docket/`.
    pub fn home() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".docket"))
    }

    /// The config file path: `~/.docket/config.toml`.
    pub fn path() -> Option<PathBuf> {
        Self::home().map(|h| h.join("config.toml"))
    }

    /// The time zone that defines calendar days.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name).map_err(|source| ConfigError::TimeZone {
                name: name.clone(),
                source,
            }),
            None => Ok(TimeZone::system()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_file_source_with_defaults() {
        let (_dir, path) = write_config("[source]\nfile = \"/data/shipments.json\"\n");

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.source, Source::File(PathBuf::from("/data/shipments.json")));
        assert_eq!(config.time_zone, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn loads_command_source_and_options() {
        let (_dir, path) = write_config(
            "time-zone = \"Europe/Amsterdam\"\n\
             log-filter = \"docket=debug\"\n\
             [source]\n\
             command = [\"curl\", \"-s\", \"https://example.test/shipments\"]\n",
        );

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(
            config.source,
            Source::Command(vec![
                "curl".to_string(),
                "-s".to_string(),
                "https://example.test/shipments".to_string(),
            ])
        );
        assert_eq!(config.time_zone.as_deref(), Some("Europe/Amsterdam"));
        assert_eq!(config.log_filter, "docket=debug");
    }

    #[test]
    fn relative_file_source_is_resolved_against_config_dir() {
        let (dir, path) = write_config("[source]\nfile = \"shipments.json\"\n");

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.source, Source::File(dir.path().join("shipments.json")));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
        assert!(err.to_string().contains("[source]"));
    }

    #[test]
    fn config_without_source_is_invalid() {
        let (_dir, path) = write_config("time-zone = \"UTC\"\n");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn unknown_time_zone_is_rejected() {
        let (_dir, path) =
            write_config("time-zone = \"Atlantis/Harbor\"\n[source]\nfile = \"/x.json\"\n");
        let config = Config::load(Some(&path)).unwrap();
        assert!(matches!(config.time_zone(), Err(ConfigError::TimeZone { .. })));
    }
}
