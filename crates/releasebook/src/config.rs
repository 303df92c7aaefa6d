use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::fs;

/// Settings from `releasebook.toml`. Everything is optional, command line flags win.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// The changelog data file to read
    pub(crate) data: Option<PathBuf>,
    /// Where `render` and `browse` write the page
    pub(crate) output: Option<PathBuf>,
    /// Where to look up the project's display name
    pub(crate) package_json: Option<PathBuf>,
    /// Parsed when a command runs, so a bad value is reported with the valid choices
    pub(crate) sort: Option<String>,
    pub(crate) view: Option<String>,
}

impl Config {
    pub(crate) const DEFAULT_PATH: &'static str = "releasebook.toml";
    const DEFAULT_DATA: &'static str = "changelog.json";
    const DEFAULT_OUTPUT: &'static str = "release-notes.html";
    const DEFAULT_PACKAGE_JSON: &'static str = "package.json";

    /// Load the config at `path`, falling back to defaults if there's no file.
    ///
    /// ## Errors
    /// 1. The file exists but isn't valid TOML in the expected shape
    pub(crate) fn load(path: &Path) -> Result<Self, Error> {
        let Ok(source_code) = fs::read(path) else {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        };
        toml::from_str(&source_code).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA))
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_OUTPUT))
    }

    pub(crate) fn package_json_path(&self) -> PathBuf {
        self.package_json
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PACKAGE_JSON))
    }
}

#[derive(Debug, Diagnostic, Error)]
pub(crate) enum Error {
    #[error("Invalid config in {path}: {source}")]
    #[diagnostic(
        code(config::toml),
        help(
            "Check the TOML is valid. Supported keys are `data`, `output`, `package_json`, `sort`, and `view`."
        )
    )]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(Config::DEFAULT_PATH)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_path(), PathBuf::from("changelog.json"));
        assert_eq!(config.output_path(), PathBuf::from("release-notes.html"));
        assert_eq!(config.package_json_path(), PathBuf::from("package.json"));
    }

    #[test]
    fn full_config() {
        let config: Config = toml::from_str(
            r#"
            data = "docs/releases.json"
            output = "site/index.html"
            package_json = "web/package.json"
            sort = "changes"
            view = "list"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                data: Some("docs/releases.json".into()),
                output: Some("site/index.html".into()),
                package_json: Some("web/package.json".into()),
                sort: Some("changes".into()),
                view: Some("list".into()),
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Config::DEFAULT_PATH);
        std::fs::write(&path, "colour = \"blue\"").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::Toml { .. })));
    }

    #[test]
    fn sort_and_view_must_be_strings() {
        assert!(toml::from_str::<Config>("sort = 3").is_err());
        assert!(toml::from_str::<Config>("view = [\"grid\"]").is_err());
    }
}
