use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".gdlocalerc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extension of C# sources; interpolated strings are stripped before scanning.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Extension of scene files, scanned verbatim.
    #[serde(default = "default_markup_extension")]
    pub markup_extension: String,
    /// Project-relative list of path suffixes skipped by tree scans.
    #[serde(default = "default_exclusion_file")]
    pub exclusion_file: String,
    #[serde(default = "default_languages_dir")]
    pub languages_dir: String,
    #[serde(default = "default_language_file_extension")]
    pub language_file_extension: String,
    /// Language columns used when no CSV exists yet.
    #[serde(default = "default_languages")]
    pub default_languages: Vec<String>,
    #[serde(default = "default_output_csv")]
    pub output_csv: String,
}

fn default_source_extension() -> String {
    "cs".to_string()
}

fn default_markup_extension() -> String {
    "tscn".to_string()
}

fn default_exclusion_file() -> String {
    ".vscode/locale_tokens_blacklist.txt".to_string()
}

fn default_languages_dir() -> String {
    "assets".to_string()
}

fn default_language_file_extension() -> String {
    "tres".to_string()
}

fn default_languages() -> Vec<String> {
    ["EN_US", "PT_BR"].map(String::from).to_vec()
}

fn default_output_csv() -> String {
    "locale_tokens.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            markup_extension: default_markup_extension(),
            exclusion_file: default_exclusion_file(),
            languages_dir: default_languages_dir(),
            language_file_extension: default_language_file_extension(),
            default_languages: default_languages(),
            output_csv: default_output_csv(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The two scanned extensions must be non-empty and distinct, and language
    /// names must not collide with the fixed `token`/`origin` columns.
    pub fn validate(&self) -> Result<()> {
        let source = self.source_extension.trim_start_matches('.');
        let markup = self.markup_extension.trim_start_matches('.');

        if source.is_empty() || markup.is_empty() {
            bail!("'sourceExtension' and 'markupExtension' must not be empty");
        }
        if source.eq_ignore_ascii_case(markup) {
            bail!(
                "'sourceExtension' and 'markupExtension' must differ (both are \"{}\")",
                source
            );
        }

        for lang in &self.default_languages {
            if lang.is_empty() || lang == "token" || lang == "origin" {
                bail!("Invalid language in 'defaultLanguages': \"{}\"", lang);
            }
        }

        Ok(())
    }

    /// Absolute location of the exclusion list for a project.
    pub fn exclusion_path(&self, root: &Path) -> PathBuf {
        root.join(&self.exclusion_file)
    }

    /// Location of the dictionary resource file for one language.
    pub fn language_file(&self, root: &Path, language: &str) -> PathBuf {
        let extension = self.language_file_extension.trim_start_matches('.');
        root.join(&self.languages_dir)
            .join(format!("{}.{}", language, extension))
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
    /// Directory holding the config file, if one was found.
    pub config_dir: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.config_dir.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                config_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            config_dir: None,
        }),
    }
}
