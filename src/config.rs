//! Configuration loading and management.
//!
//! The default configuration file is `skillscan.toml` in the current
//! working directory. Every field carries a default so the file can be
//! omitted entirely; use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use skillscan::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(config.categories.execution);
//! ```
//!
//! # File format
//!
//! ```toml
//! [categories]
//! financial = false   # skip wallet-drain rules for non-crypto skills
//!
//! [manifest]
//! structural = false  # SKILL.md still gets the pattern pass
//! ```

use crate::finding::Category;
use std::path::Path;

/// Scanner configuration, loaded from `skillscan.toml`.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Per-category rule toggles.
    pub categories: CategoriesConfig,
    /// Manifest-specific analysis toggles.
    pub manifest: ManifestConfig,
}

/// Per-category on/off toggles for the pattern rules.
///
/// Every category defaults to **enabled**. Set a field to `false` in the
/// TOML config file to drop that category's rules from the scan.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CategoriesConfig {
    /// Dangerous command execution (eval, destructive deletes, sudo).
    pub execution: bool,
    /// Data exfiltration (pipe-to-shell, environment uploads).
    pub exfiltration: bool,
    /// Hardcoded credentials and key material.
    pub secrets: bool,
    /// Prompt injection directed at the agent runtime.
    pub prompt_injection: bool,
    /// Cryptocurrency wallet drain patterns.
    pub financial: bool,
    /// Suspicious network endpoints (raw IPs, throwaway TLDs, tunnels).
    pub network: bool,
    /// Sensitive filesystem access.
    pub file_ops: bool,
}

/// Toggles for manifest structural checks.
///
/// When [`structural`](ManifestConfig::structural) is `false`, `SKILL.md`
/// files skip the structural heuristics but still receive the generic
/// pattern pass like any other file.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Set to `false` to disable missing-description and related checks.
    pub structural: bool,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        CategoriesConfig {
            execution: true,
            exfiltration: true,
            secrets: true,
            prompt_injection: true,
            financial: true,
            network: true,
            file_ops: true,
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig { structural: true }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `skillscan.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use skillscan::config::Config;
    ///
    /// // Explicit path
    /// let cfg = Config::load(Some(Path::new("my-config.toml")))?;
    ///
    /// // Auto-detect or default
    /// let cfg = Config::load(None)?;
    /// # Ok::<(), String>(())
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("skillscan.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Returns `true` if rules in `category` should run.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillscan::config::Config;
    /// use skillscan::finding::Category;
    ///
    /// let config = Config::default();
    /// assert!(config.is_category_enabled(Category::Execution));
    /// ```
    pub fn is_category_enabled(&self, category: Category) -> bool {
        match category {
            Category::Execution => self.categories.execution,
            Category::Exfiltration => self.categories.exfiltration,
            Category::Secrets => self.categories.secrets,
            Category::PromptInjection => self.categories.prompt_injection,
            Category::Financial => self.categories.financial,
            Category::Network => self.categories.network,
            Category::FileOps => self.categories.file_ops,
            // Structural manifest checks are gated by [manifest].structural,
            // not by a category toggle.
            Category::Manifest => true,
        }
    }
}
