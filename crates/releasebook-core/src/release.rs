use serde::Deserialize;

use crate::version;

/// A single versioned entry in a changelog.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Release {
    pub version: String,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    pub summary: String,
    /// Free-form category label like "feature" or "hotfix"
    pub tag: String,
    /// The declared number of changes, never reconciled with `raw_content`
    pub change_count: u64,
    /// One change per line, bullets start with `- `
    pub raw_content: String,
}

/// Aggregate numbers shown next to the release list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_releases: u64,
    pub total_changes: u64,
    pub latest_version: String,
}

impl SummaryStats {
    pub const UNKNOWN_VERSION: &'static str = "Unknown";

    /// Derive stats from the releases themselves, for data files that don't include them.
    #[must_use]
    pub fn compute(releases: &[Release]) -> Self {
        let latest_version = releases
            .iter()
            .max_by(|a, b| version::compare(&a.version, &b.version))
            .map_or_else(
                || Self::UNKNOWN_VERSION.to_string(),
                |release| release.version.clone(),
            );
        Self {
            total_releases: releases.len() as u64,
            total_changes: releases.iter().map(|release| release.change_count).sum(),
            latest_version,
        }
    }
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            total_releases: 0,
            total_changes: 0,
            latest_version: Self::UNKNOWN_VERSION.to_string(),
        }
    }
}

/// The on-disk shape of a changelog data file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ChangelogData {
    pub releases: Vec<Release>,
    pub stats: Option<SummaryStats>,
}

impl ChangelogData {
    /// Parse a changelog data file.
    ///
    /// # Errors
    ///
    /// If `content` isn't a JSON object in the expected shape
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

/// The immutable source of every release, loaded once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReleaseStore {
    releases: Vec<Release>,
    stats: SummaryStats,
}

impl ReleaseStore {
    #[must_use]
    pub fn new(releases: Vec<Release>, stats: SummaryStats) -> Self {
        Self { releases, stats }
    }

    #[must_use]
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    #[must_use]
    pub fn stats(&self) -> &SummaryStats {
        &self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// The first release whose version matches exactly.
    #[must_use]
    pub fn find(&self, version: &str) -> Option<&Release> {
        self.releases
            .iter()
            .find(|release| release.version == version)
    }
}

impl From<ChangelogData> for ReleaseStore {
    fn from(data: ChangelogData) -> Self {
        let stats = data
            .stats
            .unwrap_or_else(|| SummaryStats::compute(&data.releases));
        Self::new(data.releases, stats)
    }
}
