//! Configuration loading from ezgroups.toml.

use serde::Deserialize;
use std::{fs, path::Path};
use tracing::debug;

use crate::error::{GroupsError, GroupsResult, IoResultExt};

/// File name looked up in the target directory.
pub const CONFIG_FILE: &str = "ezgroups.toml";

/// Main configuration structure for ezgroups.toml.
#[derive(Debug, Deserialize, Default)]
pub struct GroupsConfig {
    /// Applications whose group layout should be reported.
    pub apps: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl GroupsConfig {
    /// Whether the config asks for JSON output.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from ezgroups.toml if it exists.
///
/// Malformed TOML is reported as [`GroupsError::Config`] carrying the file path.
pub fn load_config(root: &Path) -> GroupsResult<Option<GroupsConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let cfg = toml::from_str(&content).map_err(|e| GroupsError::config(&path, e.to_string()))?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg: GroupsConfig = toml::from_str(
            r#"
            apps = ["billing", "search"]

            [output]
            format = "JSON"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.apps.as_deref(), Some(&["billing".to_string(), "search".to_string()][..]));
        assert!(cfg.wants_json());
    }

    #[test]
    fn test_defaults_to_plain() {
        let cfg: GroupsConfig = toml::from_str("").unwrap();
        assert!(cfg.apps.is_none());
        assert!(!cfg.wants_json());

        let cfg: GroupsConfig = toml::from_str("[output]\nformat = \"plain\"").unwrap();
        assert!(!cfg.wants_json());
    }
}
