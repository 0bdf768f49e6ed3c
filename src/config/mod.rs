mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

pub const ENV_VAR: &str = "GVSORT_CONFIG";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub processor: ProcessorConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProcessorConfig {
    #[serde(rename = "groupSort", default)]
    pub group_sort: Vec<String>,
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = fs::File::open(path.as_ref()).map_err(|err| ConfigError::FileOpen {
            path: path.as_ref().into(),
            err,
        })?;
        Self::from_file(path.as_ref(), file)
    }

    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("gvsort").join("config.yaml"))
    }

    /// `--config`, then `$GVSORT_CONFIG`, then the user config directory.
    pub fn detect(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::detect_from(explicit, std::env::var_os(ENV_VAR).map(PathBuf::from), Self::default_path())
    }

    fn detect_from(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config from --config");
            return Self::from_path(path);
        }
        if let Some(path) = from_env {
            tracing::debug!(path = %path.display(), "loading config from {}", ENV_VAR);
            return Self::from_path(path);
        }
        let path = match default_path {
            Some(path) => path,
            None => return Ok(Config::default()),
        };
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => match err.kind() {
                io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "no config file found, using defaults");
                    return Ok(Config::default());
                }
                _ => return Err(ConfigError::FileOpen { path, err }),
            },
        };
        Self::from_file(&path, file)
    }

    pub fn patterns(self, overrides: Vec<String>) -> Vec<String> {
        if overrides.is_empty() {
            self.processor.group_sort
        } else {
            overrides
        }
    }

    fn from_file(path: &Path, mut file: fs::File) -> Result<Self, ConfigError> {
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|err| ConfigError::FileRead {
            path: path.into(),
            err,
        })?;
        let config = Self::from_yaml(&contents).map_err(|err| ConfigError::FileDeserialize {
            path: path.into(),
            err,
        })?;
        tracing::debug!(path = %path.display(), patterns = ?config.processor.group_sort, "loaded config");
        Ok(config)
    }

    fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // a stream with no document at all is an error for serde_yaml, not `None`
        let has_document = contents
            .lines()
            .map(str::trim)
            .any(|line| !(line.is_empty() || line.starts_with('#') || line == "---" || line == "..."));
        if !has_document {
            return Ok(Config::default());
        }
        let config: Option<Config> = serde_yaml::from_str(contents)?;
        Ok(config.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_group_sort() {
        let yaml = "processor:\n  groupSort:\n  - custom.example.com\n  - \"\"\n  - k8s.io\n  ignoreTypes: []\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.processor.group_sort, vec!["custom.example.com", "", "k8s.io"]);
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let config: Config = serde_yaml::from_str("render:\n  kubernetesVersion: \"1.30\"\n").unwrap();
        assert_eq!(config, Config::default());
        let config: Config = serde_yaml::from_str("processor: {}\n").unwrap();
        assert!(config.processor.group_sort.is_empty());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Config::detect(Some(Path::new("/nonexistent/gvsort.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileOpen { .. }));
    }

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn comment_only_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in &[
            ("comment.yaml", "# no overrides yet\n"),
            ("blank.yaml", "\n\n"),
            ("empty.yaml", ""),
            ("marker.yaml", "---\n# nothing\n"),
            ("null.yaml", "~\n"),
        ] {
            let path = write(dir.path(), name, contents);
            assert_eq!(Config::from_path(&path).unwrap(), Config::default(), "{}", name);
        }
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "bad.yaml", "processor:\n  groupSort: 3\n");
        let err = Config::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileDeserialize { .. }));
    }

    #[test]
    fn lookup_order() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = write(dir.path(), "explicit.yaml", "processor:\n  groupSort: [explicit.io]\n");
        let from_env = write(dir.path(), "env.yaml", "processor:\n  groupSort: [env.io]\n");
        let default_path = write(dir.path(), "default.yaml", "processor:\n  groupSort: [default.io]\n");
        let group_sort = |config: Config| config.processor.group_sort;

        let config = Config::detect_from(Some(&explicit), Some(from_env.clone()), Some(default_path.clone()));
        assert_eq!(group_sort(config.unwrap()), vec!["explicit.io"]);

        let config = Config::detect_from(None, Some(from_env.clone()), Some(default_path.clone()));
        assert_eq!(group_sort(config.unwrap()), vec!["env.io"]);

        let config = Config::detect_from(None, None, Some(default_path));
        assert_eq!(group_sort(config.unwrap()), vec!["default.io"]);
    }

    #[test]
    fn missing_files_fall_back_to_defaults_only_at_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");

        let config = Config::detect_from(None, None, Some(missing.clone())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::detect_from(None, None, None).unwrap(), Config::default());

        // a path named by the environment must exist
        let err = Config::detect_from(None, Some(missing), None).unwrap_err();
        assert!(matches!(err, ConfigError::FileOpen { .. }));
    }

    #[test]
    fn command_line_patterns_replace_configured() {
        let config = Config {
            processor: ProcessorConfig {
                group_sort: vec!["".into(), "k8s.io".into()],
            },
        };
        assert_eq!(config.clone().patterns(vec![]), vec!["", "k8s.io"]);
        assert_eq!(config.patterns(vec!["example.com".into()]), vec!["example.com"]);
    }
}
