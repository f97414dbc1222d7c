//! Engine configuration loading.

use std::path::Path;

use roster_types::EngineConfig;

use crate::error::ConfigError;

/// Load and parse a TOML config file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse TOML config text.
pub fn parse_config(content: &str) -> Result<EngineConfig, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = parse_config(
            r#"
            facet_ttl_secs = 60
            stealth_terms = ["stealth", "unannounced"]

            [weights]
            college = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.facet_ttl_secs, 60);
        assert_eq!(cfg.stealth_terms, ["stealth", "unannounced"]);
        assert_eq!(cfg.weights.college, 0.3);
        assert_eq!(cfg.weights.company, 0.18);
        assert_eq!(cfg.reddit_domains, EngineConfig::default().reddit_domains);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reddit_domains = [\"reddit.com\"]").unwrap();
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.reddit_domains, ["reddit.com"]);
    }

    #[test]
    fn reports_path_on_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "facet_ttl_secs = \"soon\"").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));

        let missing = load_config(Path::new("/nonexistent/roster.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
