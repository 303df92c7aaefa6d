use std::{cmp::Reverse, fmt::Display, str::FromStr};

#[cfg(feature = "miette")]
use miette::Diagnostic;
use thiserror::Error;

use crate::{date, release::Release, version};

/// How the visible releases are ordered. Every ordering puts the newest or largest first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortKey {
    #[default]
    Date,
    Version,
    Changes,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Date, Self::Version, Self::Changes];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Version => "version",
            Self::Changes => "changes",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[cfg_attr(feature = "miette", derive(Diagnostic))]
#[error("Unknown sort key {0:?}")]
#[cfg_attr(
    feature = "miette",
    diagnostic(
        code(pipeline::sort_key),
        help("Releases can be sorted by `date`, `version`, or `changes`")
    )
)]
pub struct UnknownSortKey(String);

/// Filter `releases` by `search_term` and order the survivors by `sort_key`.
///
/// The search is a case-insensitive substring match against the version, summary, and raw
/// content of each release. Sorting is stable so releases with equal keys keep their relative
/// order from `releases`.
#[must_use]
pub fn apply(releases: &[Release], search_term: &str, sort_key: SortKey) -> Vec<Release> {
    let needle = search_term.to_lowercase();
    let mut filtered: Vec<Release> = releases
        .iter()
        .filter(|release| matches(release, &needle))
        .cloned()
        .collect();

    match sort_key {
        // `None` sorts below every `Some`, so undated releases land at the end.
        SortKey::Date => filtered.sort_by_key(|release| Reverse(date::parse(&release.date))),
        SortKey::Version => filtered.sort_by(|a, b| version::compare(&b.version, &a.version)),
        SortKey::Changes => filtered.sort_by_key(|release| Reverse(release.change_count)),
    }
    filtered
}

/// `needle` must already be lowercase.
fn matches(release: &Release, needle: &str) -> bool {
    needle.is_empty()
        || [&release.version, &release.summary, &release.raw_content]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
}
