//! Looks up the project's display name. Nothing here can fail the run: every problem is logged
//! and the page keeps its default title.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::fs;

#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
}

/// The `name` from the `package.json` at `path`, if there's a usable one.
pub(crate) fn project_name(path: &Path) -> Option<String> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("{err}, keeping the default title");
            return None;
        }
    };
    let package: PackageJson = match serde_json::from_str(&content) {
        Ok(package) => package,
        Err(err) => {
            warn!("Could not parse {}: {err}", path.display());
            return None;
        }
    };
    let name = package.name.filter(|name| !name.trim().is_empty());
    match &name {
        Some(name) => debug!("Using project name {name:?} from {}", path.display()),
        None => warn!("{} has no `name`", path.display()),
    }
    name
}
