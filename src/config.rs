use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".trexrc.json";

/// Journal file name prefix used when no explicit name is configured.
pub const JOURNAL_FILE_PREFIX: &str = "journal";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_translation_file_name")]
    pub translation_file_name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,
    #[serde(default = "default_metadata_file_name")]
    pub metadata_file_name: String,
    /// Fixed journal file name. When unset, each journal gets a timestamped name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_file_name: Option<String>,
    #[serde(default = "default_key_column")]
    pub key_column: String,
    /// Locale → display column name overrides.
    #[serde(default)]
    pub locale_columns: BTreeMap<String, String>,
    #[serde(default)]
    pub show_deleted: bool,
    #[serde(default)]
    pub show_old_values: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_locales_dir() -> String {
    "./locales".to_string()
}

fn default_translation_file_name() -> String {
    "translation.js".to_string()
}

fn default_output_dir() -> String {
    "./export".to_string()
}

fn default_output_file_name() -> String {
    "translations.csv".to_string()
}

fn default_metadata_file_name() -> String {
    "metadata.csv".to_string()
}

fn default_key_column() -> String {
    "TRANSLATION_KEY".to_string()
}

fn default_delimiter() -> char {
    ','
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            translation_file_name: default_translation_file_name(),
            output_dir: default_output_dir(),
            output_file_name: default_output_file_name(),
            metadata_file_name: default_metadata_file_name(),
            journal_file_name: None,
            key_column: default_key_column(),
            locale_columns: BTreeMap::new(),
            show_deleted: false,
            show_old_values: false,
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The delimiter must be a plain ASCII character, and the locale column
    /// overrides must stay invertible: no two locales may share a display
    /// name, and none may reuse the key column name. The three artifacts must
    /// not share a file name, or one would overwrite another.
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            bail!(
                "Invalid 'delimiter': {:?} (expected a single ASCII character other than a quote or line break)",
                self.delimiter
            );
        }

        if self.key_column.trim().is_empty() {
            bail!("'keyColumn' must not be empty");
        }

        if self.output_file_name == self.metadata_file_name {
            bail!(
                "'outputFileName' and 'metadataFileName' are both \"{}\"",
                self.output_file_name
            );
        }
        if let Some(journal) = &self.journal_file_name {
            let artifacts = [
                ("outputFileName", &self.output_file_name),
                ("metadataFileName", &self.metadata_file_name),
            ];
            for (field, name) in artifacts {
                if journal == name {
                    bail!("'journalFileName' and '{}' are both \"{}\"", field, journal);
                }
            }
        }

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (locale, column) in &self.locale_columns {
            if column.trim().is_empty() {
                bail!("Empty column name for locale \"{}\" in 'localeColumns'", locale);
            }
            if column == &self.key_column {
                bail!(
                    "Column name \"{}\" for locale \"{}\" in 'localeColumns' clashes with 'keyColumn'",
                    column,
                    locale
                );
            }
            if let Some(other) = seen.insert(column, locale) {
                bail!(
                    "Locales \"{}\" and \"{}\" share the column name \"{}\" in 'localeColumns'",
                    other,
                    locale,
                    column
                );
            }
        }

        Ok(())
    }

    /// Delimiter as a byte. Only meaningful after [`Config::validate`].
    pub fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter).unwrap_or(b',')
    }

    pub fn locales_path(&self) -> PathBuf {
        PathBuf::from(&self.locales_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.output_file_name)
    }

    pub fn metadata_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.metadata_file_name)
    }

    /// Journal path: the configured name, or `journal_<timestamp>.csv`.
    pub fn journal_path(&self, generated_at: &DateTime<Local>) -> PathBuf {
        let file_name = match &self.journal_file_name {
            Some(name) => name.clone(),
            None => format!(
                "{}_{}.csv",
                JOURNAL_FILE_PREFIX,
                generated_at.format("%Y%m%d%H%M%S")
            ),
        };
        Path::new(&self.output_dir).join(file_name)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
