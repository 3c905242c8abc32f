use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Config;

/// Environment variable overriding the search service base URL.
pub const SERVER_ENV: &str = "DOCSIM_SERVER";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub server: Option<ServerConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub locale: Option<String>,
    pub links: Option<String>,
    pub theme: Option<String>,
}

/// Platform config directory path: `<config_dir>/docsim/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("docsim").join("config.toml"))
}

/// Load config by cascading CWD `.docsim.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".docsim.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        server: Some(ServerConfig {
            base_url: overlay
                .server
                .as_ref()
                .and_then(|s| s.base_url.clone())
                .or_else(|| base.server.as_ref().and_then(|s| s.base_url.clone())),
        }),
        display: Some(DisplayConfig {
            locale: overlay
                .display
                .as_ref()
                .and_then(|d| d.locale.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.locale.clone())),
            links: overlay
                .display
                .as_ref()
                .and_then(|d| d.links.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.links.clone())),
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
    }
}

/// Fill `config` from the values present in `file_cfg`.
/// Missing or empty values keep the current setting; unknown locale or
/// link-set names are logged and ignored.
pub fn apply_to_config(file_cfg: &ConfigFile, config: &mut Config) {
    if let Some(server) = &file_cfg.server
        && let Some(url) = &server.base_url
        && !url.trim().is_empty()
    {
        config.base_url = url.trim().to_string();
    }

    if let Some(disp) = &file_cfg.display {
        if let Some(locale) = &disp.locale {
            match locale.parse() {
                Ok(l) => config.locale = l,
                Err(e) => tracing::warn!(error = %e, "ignoring display.locale"),
            }
        }
        if let Some(links) = &disp.links {
            match links.parse() {
                Ok(l) => config.link_set = l,
                Err(e) => tracing::warn!(error = %e, "ignoring display.links"),
            }
        }
        if let Some(theme) = &disp.theme
            && !theme.is_empty()
        {
            config.theme = theme.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Locale, LinkSet};

    #[test]
    fn partial_file_parses() {
        let cfg: ConfigFile = toml::from_str("[server]\nbase_url = \"http://search:8000\"\n").unwrap();
        assert_eq!(
            cfg.server.unwrap().base_url.as_deref(),
            Some("http://search:8000")
        );
        assert!(cfg.display.is_none());
    }

    #[test]
    fn overlay_wins_and_base_fills_gaps() {
        let base: ConfigFile = toml::from_str(
            "[server]\nbase_url = \"http://a:8000\"\n[display]\nlocale = \"bg\"\ntheme = \"modern\"\n",
        )
        .unwrap();
        let overlay: ConfigFile =
            toml::from_str("[server]\nbase_url = \"http://b:8000\"\n").unwrap();

        let merged = merge(base, overlay);
        assert_eq!(
            merged.server.unwrap().base_url.as_deref(),
            Some("http://b:8000")
        );
        let display = merged.display.unwrap();
        assert_eq!(display.locale.as_deref(), Some("bg"));
        assert_eq!(display.theme.as_deref(), Some("modern"));
        assert!(display.links.is_none());
    }

    #[test]
    fn apply_sets_present_values_only() {
        let file: ConfigFile = toml::from_str(
            "[display]\nlocale = \"bg\"\nlinks = \"download-only\"\n",
        )
        .unwrap();
        let mut config = Config::default();
        apply_to_config(&file, &mut config);
        assert_eq!(config.locale, Locale::Bulgarian);
        assert_eq!(config.link_set, LinkSet::DownloadOnly);
        assert_eq!(config.base_url, crate::DEFAULT_BASE_URL);
        assert_eq!(config.theme, "hacker");
    }

    #[test]
    fn apply_ignores_unknown_names_and_blank_url() {
        let file: ConfigFile = toml::from_str(
            "[server]\nbase_url = \"  \"\n[display]\nlocale = \"klingon\"\nlinks = \"all\"\n",
        )
        .unwrap();
        let mut config = Config::default();
        apply_to_config(&file, &mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_path_reads_and_rejects() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[display]\ntheme = \"modern\"\n").unwrap();
        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[display\n").unwrap();

        let cfg = load_from_path(&good).unwrap();
        assert_eq!(cfg.display.unwrap().theme.as_deref(), Some("modern"));
        assert!(load_from_path(&bad).is_none());
        assert!(load_from_path(&dir.path().join("missing.toml")).is_none());
    }
}
