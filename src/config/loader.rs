// Configuration loader - part of the library surface, not all reached from the binary
#![allow(dead_code)]

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse TOML config")]
    Toml(#[from] toml::de::Error),
}

/// Configuration for a gostrict analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target directories to analyze, relative to the project root
    pub targets: Vec<PathBuf>,

    /// Path patterns to exclude from analysis entirely
    pub exclude: Vec<String>,

    /// Per-rule enablement and exclusions
    pub rules: RulesConfig,

    /// Thresholds for the limit rules
    pub limits: LimitsConfig,

    /// Report configuration
    pub report: ReportConfig,
}

/// Enablement flag and file exclusions for a single rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleToggle {
    /// Whether the rule runs at all
    pub enabled: bool,

    /// Path patterns this rule ignores (the rule neither collects from
    /// nor reports on matching files)
    pub exclude: Vec<String>,
}

impl Default for RuleToggle {
    fn default() -> Self {
        Self {
            enabled: true,
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub dead_code: RuleToggle,
    pub naming: RuleToggle,
    pub max_params: RuleToggle,
    pub func_len: RuleToggle,
    pub complexity: RuleToggle,
    pub nesting: RuleToggle,
}

impl RulesConfig {
    /// Look up a toggle by rule name
    pub fn get(&self, rule: &str) -> Option<&RuleToggle> {
        match rule {
            "dead-code" => Some(&self.dead_code),
            "naming" => Some(&self.naming),
            "max-params" => Some(&self.max_params),
            "func-len" => Some(&self.func_len),
            "complexity" => Some(&self.complexity),
            "nesting" => Some(&self.nesting),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of parameters per function
    pub max_params: usize,

    /// Maximum number of body lines per function
    pub max_func_lines: usize,

    /// Cyclomatic complexity at which a function is reported
    pub max_complexity: usize,

    /// Maximum block nesting depth
    pub max_nesting: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_params: 5,
            max_func_lines: 35,
            max_complexity: 10,
            max_nesting: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,

    /// Group results by: file, rule
    pub group_by: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            group_by: "file".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: vec![],
            exclude: vec![
                "**/vendor/**".to_string(),
                "**/testdata/**".to_string(),
                "**/.git/**".to_string(),
            ],
            rules: RulesConfig::default(),
            limits: LimitsConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
            .into_diagnostic()?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .map_err(ConfigError::from)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .map_err(ConfigError::from)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .map_err(ConfigError::from)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".gostrict.yml",
            ".gostrict.yaml",
            ".gostrict.toml",
            "gostrict.yml",
            "gostrict.yaml",
            "gostrict.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check if a path matches a global exclusion pattern
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }

    /// Whether a rule is globally enabled
    pub fn rule_enabled(&self, rule: &str) -> bool {
        self.rules.get(rule).map(|t| t.enabled).unwrap_or(false)
    }

    /// Whether a rule skips the given file (per-rule exclusion patterns)
    pub fn rule_excludes_file(&self, rule: &str, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.rules
            .get(rule)
            .map(|t| t.exclude.iter().any(|pattern| glob_match(pattern, &path_str)))
            .unwrap_or(false)
    }
}

/// Simple glob matching for patterns like "*_gen.go" or "**/vendor/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    // Handle simple wildcard patterns
    if pattern.starts_with('*') && !pattern.contains('/') {
        // Pattern like "*_gen.go" matches "api_gen.go"
        let suffix = &pattern[1..];
        return text.ends_with(suffix);
    }

    if pattern.ends_with('*') && !pattern.contains('/') {
        // Pattern like "zz_*" matches "zz_generated"
        let prefix = &pattern[..pattern.len() - 1];
        return text.starts_with(prefix);
    }

    // Handle path patterns with **
    if pattern.contains("**") {
        let cleaned = pattern.replace("**/", "").replace("/**", "");

        // If pattern is like "**/vendor/**", check if "/vendor/" is in the path
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = cleaned.trim_matches('/');
            // Must match as a complete directory name, not substring
            let dir_pattern = format!("/{}/", dir_name);
            return text.contains(&dir_pattern);
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if prefix.is_empty() && suffix.is_empty() {
                return true; // Pattern is just "**"
            }

            if prefix.is_empty() {
                return text.ends_with(suffix) || text.contains(&format!("/{}", suffix));
            }

            if suffix.is_empty() {
                return text.starts_with(prefix) || text.contains(&format!("{}/", prefix));
            }

            return (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                && (text.ends_with(suffix) || text.contains(&format!("/{}", suffix)));
        }
    }

    // Exact match
    text == pattern
}
