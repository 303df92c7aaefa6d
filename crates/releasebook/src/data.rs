use std::path::{Path, PathBuf};

use miette::Diagnostic;
use releasebook_core::{ChangelogData, ReleaseStore};
use thiserror::Error;
use tracing::debug;

use crate::fs;

/// Read the changelog data file into a store.
pub(crate) fn load(path: &Path) -> Result<ReleaseStore, Error> {
    let content = fs::read(path)?;
    let data = ChangelogData::from_json(&content).map_err(|source| Error::Deserialize {
        path: path.to_path_buf(),
        source,
    })?;
    if data.stats.is_none() {
        debug!("{} has no stats, computing them", path.display());
    }
    let store = ReleaseStore::from(data);
    debug!("Loaded {} releases from {}", store.len(), path.display());
    Ok(store)
}

#[derive(Debug, Diagnostic, Error)]
pub(crate) enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fs(#[from] fs::Error),
    #[error("Error deserializing {path}: {source}")]
    #[diagnostic(
        code(data::deserialize),
        help(
            "The data file must be a JSON object with a `releases` array and an optional `stats` object"
        )
    )]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
