use std::path::PathBuf;

use clap::ValueEnum;

#[derive(serde::Serialize, serde::Deserialize, Default)]
pub(crate) struct AppConfig {
    #[serde(default)]
    pub browse: BrowseConfig,
}

#[derive(serde::Serialize, serde::Deserialize, Default)]
pub(crate) struct BrowseConfig {
    #[serde(default)]
    pub insert_left: bool,
    #[serde(default)]
    pub default_mode: ModeKind,
    /// Refuse scenarios whose chains break the device ordering rules
    #[serde(default)]
    pub strict: bool,
}

impl BrowseConfig {
    /// `--insert-left` / `--insert-right` win over the file
    pub fn resolve_insert_left(&self, insert_left: bool, insert_right: bool) -> bool {
        match (insert_left, insert_right) {
            (true, _) => true,
            (false, true) => false,
            (false, false) => self.insert_left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ModeKind {
    Hotswap,
    #[default]
    Insert,
}

pub(crate) fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chainbrowse")
        .join("config.toml")
}

pub(crate) fn load_config() -> AppConfig {
    let path = config_path();
    std::fs::read_to_string(&path)
        .ok()
        .and_then(|s| parse_config(&s))
        .unwrap_or_default()
}

fn parse_config(s: &str) -> Option<AppConfig> {
    match toml::from_str(s) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring malformed config: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(!config.browse.insert_left);
        assert!(!config.browse.strict);
        assert_eq!(config.browse.default_mode, ModeKind::Insert);
    }

    #[test]
    fn test_browse_section() {
        let config = parse_config("[browse]\ninsert_left = true\ndefault_mode = \"hotswap\"\n").unwrap();
        assert!(config.browse.insert_left);
        assert_eq!(config.browse.default_mode, ModeKind::Hotswap);
    }

    #[test]
    fn test_insert_side_flags_override_file() {
        let left = parse_config("[browse]\ninsert_left = true\n").unwrap().browse;
        assert!(left.resolve_insert_left(false, false));
        assert!(!left.resolve_insert_left(false, true));

        let right = BrowseConfig::default();
        assert!(!right.resolve_insert_left(false, false));
        assert!(right.resolve_insert_left(true, false));
    }

    #[test]
    fn test_malformed_config_is_ignored() {
        assert!(parse_config("[browse\ninsert_left = yes").is_none());
    }
}
