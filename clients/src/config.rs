//! Translator settings: built-in defaults, an optional TOML file and
//! command-line overrides, resolved in that order of increasing precedence.

use std::path::{Path, PathBuf};

use sbvr_owl_ontology::serializer::{Format, UnknownFormat};
use serde::Deserialize;
use thiserror::Error;

/// Input document read when none is given.
pub const DEFAULT_INPUT: &str = "sbvr.xml";
/// Output document written when none is given.
pub const DEFAULT_OUTPUT: &str = "ontology.owl";
/// Namespace prefix used when none is given.
pub const DEFAULT_PREFIX: &str =
    "http://desibo.frsf.utn.edu.ar/ontologies/2014/8/untitled-ontology-122";
/// Configuration file read, if present, when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "sbvr2owl.toml";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    FileRead {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The `format` key names no known format.
    #[error(transparent)]
    Format(#[from] UnknownFormat),
}

/// Contents of a configuration file. Every key is optional.
///
/// ```toml
/// input = "dieta.xml"
/// output = "dieta.owl"
/// prefix = "http://example.org/dieta"
/// format = "turtle"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// SBVR document to read.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Ontology document to write.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Namespace prefix of the ontology.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Output format name.
    #[serde(default)]
    pub format: Option<String>,
}

impl FileConfig {
    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Loads the configuration file at `path` if it exists, or returns an
    /// empty configuration otherwise.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`FileConfig::from_file`] for a file that exists.
    pub fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--input`
    pub input: Option<PathBuf>,
    /// `--output`
    pub output: Option<PathBuf>,
    /// `--prefix`
    pub prefix: Option<String>,
    /// `--format`
    pub format: Option<Format>,
}

/// Fully resolved translator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SBVR document to read.
    pub input: PathBuf,
    /// Ontology document to write.
    pub output: PathBuf,
    /// Namespace prefix of the ontology.
    pub prefix: String,
    /// Output format.
    pub format: Format,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            prefix: DEFAULT_PREFIX.to_owned(),
            format: Format::default(),
        }
    }
}

impl Settings {
    /// Resolves every setting from the command line, then the file, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] if the file names an unknown format
    /// that the command line does not override.
    pub fn resolve(cli: &Overrides, file: &FileConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let format = match (cli.format, &file.format) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse()?,
            (None, None) => defaults.format,
        };
        Ok(Self {
            input: cli
                .input
                .clone()
                .or_else(|| file.input.clone())
                .unwrap_or(defaults.input),
            output: cli
                .output
                .clone()
                .or_else(|| file.output.clone())
                .unwrap_or(defaults.output),
            prefix: cli
                .prefix
                .clone()
                .or_else(|| file.prefix.clone())
                .unwrap_or(defaults.prefix),
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let settings = Settings::resolve(&Overrides::default(), &FileConfig::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.output, PathBuf::from("ontology.owl"));
        assert_eq!(settings.format, Format::RdfXml);
    }

    #[test]
    fn command_line_beats_file_beats_default() {
        let file: FileConfig = toml::from_str(
            r#"
            input = "dieta.xml"
            prefix = "http://example.org/file"
            format = "turtle"
            "#,
        )
        .unwrap();
        let cli = Overrides {
            prefix: Some("http://example.org/cli".to_owned()),
            ..Overrides::default()
        };
        let settings = Settings::resolve(&cli, &file).unwrap();
        assert_eq!(settings.input, PathBuf::from("dieta.xml"));
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.prefix, "http://example.org/cli");
        assert_eq!(settings.format, Format::Turtle);
    }

    #[test]
    fn unknown_file_format_is_an_error_unless_overridden() {
        let file = FileConfig {
            format: Some("n3".to_owned()),
            ..FileConfig::default()
        };
        assert!(matches!(
            Settings::resolve(&Overrides::default(), &file),
            Err(ConfigError::Format(_))
        ));

        let cli = Overrides {
            format: Some(Format::JsonLd),
            ..Overrides::default()
        };
        assert_eq!(Settings::resolve(&cli, &file).unwrap().format, Format::JsonLd);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("outptu = \"x.owl\"").is_err());
    }

    #[test]
    fn missing_optional_file_is_empty() {
        let config = FileConfig::from_optional_file(Path::new("no/such/sbvr2owl.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(matches!(
            FileConfig::from_file(Path::new("no/such/sbvr2owl.toml")),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
