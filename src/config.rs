use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::detect::{DEFAULT_SCRIPT_PATTERN, TextDetector};

pub const CONFIG_FILE_NAME: &str = ".zhscanrc.json";

/// Scan configuration.
///
/// Every key is optional in the config file; a missing key keeps its default
/// and a present key replaces the default wholesale (arrays are not merged).
/// Keys used by source-rewriting tools (`importStatement`, `callStatement`)
/// are accepted and ignored.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_output_dir", alias = "targetDir")]
    pub output_dir: String,
    #[serde(default, alias = "exclude")]
    pub exclude_patterns: Vec<String>,
    #[serde(default = "default_auto_assign_id", alias = "autoZhKey")]
    pub auto_assign_id: bool,
    #[serde(default = "default_script_detection_pattern")]
    pub script_detection_pattern: String,
    /// Scan string arguments of ordinary function calls.
    #[serde(default, alias = "callExpression")]
    pub scan_call_arguments: bool,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_logging_namespaces")]
    pub logging_namespaces: Vec<String>,
    #[serde(default = "default_render_namespaces")]
    pub render_namespaces: Vec<String>,
    #[serde(default = "default_reserved_attributes")]
    pub reserved_attributes: Vec<String>,
    /// Abort the whole run on the first file that fails to parse.
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_output_dir() -> String {
    "i18n-messages".to_string()
}

fn default_auto_assign_id() -> bool {
    true
}

fn default_script_detection_pattern() -> String {
    DEFAULT_SCRIPT_PATTERN.to_string()
}

fn default_locale() -> String {
    "zh-CH".to_string()
}

fn default_logging_namespaces() -> Vec<String> {
    vec!["console".to_string()]
}

fn default_render_namespaces() -> Vec<String> {
    vec!["React".to_string()]
}

fn default_reserved_attributes() -> Vec<String> {
    vec!["defaultMessage".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            exclude_patterns: Vec::new(),
            auto_assign_id: default_auto_assign_id(),
            script_detection_pattern: default_script_detection_pattern(),
            scan_call_arguments: false,
            locale: default_locale(),
            logging_namespaces: default_logging_namespaces(),
            render_namespaces: default_render_namespaces(),
            reserved_attributes: default_reserved_attributes(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `excludePatterns` or the
    /// `scriptDetectionPattern` regex is invalid.
    pub fn validate(&self) -> Result<()> {
        // Patterns without wildcards are literal path prefixes and always valid.
        for pattern in &self.exclude_patterns {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'excludePatterns': \"{}\"", pattern)
                })?;
            }
        }

        self.detector()
            .context("Invalid 'scriptDetectionPattern'")?;

        Ok(())
    }

    pub fn detector(&self) -> Result<TextDetector> {
        TextDetector::from_pattern(&self.script_detection_pattern)
    }

    /// File name of the catalog artifact, e.g. `zh-CH.json`.
    pub fn catalog_file_name(&self) -> String {
        format!("{}.json", self.locale)
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
            config.validate()?;
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
