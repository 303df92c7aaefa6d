//! File access for the CLI. Writes go through [`RunType`] so `--dry-run` never touches disk.

use std::{
    io,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;
use tracing::trace;

/// Whether this invocation may actually write anything.
#[derive(Clone, Copy, Debug)]
pub(crate) enum RunType<T> {
    /// Report what would be written, perform no I/O
    DryRun(T),
    Real(T),
}

impl<T> RunType<T> {
    #[must_use]
    pub(crate) fn of<R>(&self, new_value: R) -> RunType<R> {
        match self {
            RunType::DryRun(_) => RunType::DryRun(new_value),
            RunType::Real(_) => RunType::Real(new_value),
        }
    }
}

/// Writes `contents` to `path` for a real run, or prints a summary of the write for a dry run.
pub(crate) fn write(to_write: RunType<&str>, path: &Path) -> Result<(), Error> {
    match to_write {
        RunType::DryRun(contents) => {
            println!("Would write {} bytes to {}", contents.len(), path.display());
            Ok(())
        }
        RunType::Real(contents) => {
            trace!("Writing {} bytes to {}", contents.len(), path.display());
            std::fs::write(path, contents).map_err(|source| Error::CannotWrite {
                path: path.into(),
                source,
            })
        }
    }
}

/// Read a whole input file (data, config, or `package.json`) as text.
pub(crate) fn read(path: &Path) -> Result<String, Error> {
    trace!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| Error::CannotRead {
        path: path.into(),
        source,
    })
}

#[derive(Debug, Diagnostic, Error)]
pub(crate) enum Error {
    #[error("Could not write the page to {path}: {source}")]
    #[diagnostic(
        code(fs::cannot_write),
        help("Pick another location with `--output` or the `output` config key.")
    )]
    CannotWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read {path}: {source}")]
    #[diagnostic(
        code(fs::cannot_read),
        help("Check the path, it's resolved relative to the current directory.")
    )]
    CannotRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
