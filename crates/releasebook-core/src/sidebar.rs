use indexmap::IndexMap;
use time::Date;

use crate::{date, release::Release};

/// All the releases published in one calendar month.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGroup {
    /// `YYYY-MM`, or empty for releases without a readable date
    pub key: String,
    pub label: String,
    /// In the order they appear in the source collection
    pub releases: Vec<Release>,
    pub is_current_month: bool,
}

impl MonthGroup {
    pub const UNKNOWN_LABEL: &'static str = "Unknown date";
}

/// Partition `releases` by month, newest month first.
///
/// `today` decides which group (if any) is flagged as the current month.
#[must_use]
pub fn group_by_month(releases: &[Release], today: Date) -> Vec<MonthGroup> {
    let current_key = date::month_key(today);
    let mut groups: IndexMap<String, MonthGroup> = IndexMap::new();
    for release in releases {
        let parsed = date::parse(&release.date);
        let key = parsed.map(date::month_key).unwrap_or_default();
        groups
            .entry(key)
            .or_insert_with_key(|key| MonthGroup {
                key: key.clone(),
                label: parsed.map_or_else(
                    || MonthGroup::UNKNOWN_LABEL.to_string(),
                    date::month_label,
                ),
                releases: Vec::new(),
                is_current_month: *key == current_key,
            })
            .releases
            .push(release.clone());
    }
    let mut groups: Vec<MonthGroup> = groups.into_values().collect();
    groups.sort_by(|a, b| b.key.cmp(&a.key));
    groups
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::date;

    use super::*;
    use crate::release::sample;

    fn release(version: &str, date: &str) -> Release {
        Release {
            version: version.into(),
            date: date.into(),
            ..Release::default()
        }
    }

    #[test]
    fn sample_groups() {
        let store = sample::store();
        let groups = group_by_month(store.releases(), date!(2025 - 01 - 20));

        let summary: Vec<(&str, &str, usize, bool)> = groups
            .iter()
            .map(|group| {
                (
                    group.key.as_str(),
                    group.label.as_str(),
                    group.releases.len(),
                    group.is_current_month,
                )
            })
            .collect();
        assert_eq!(
            summary,
            [
                ("2025-01", "January 2025", 2, true),
                ("2024-12", "December 2024", 4, false),
            ]
        );
    }

    #[test]
    fn every_release_is_in_exactly_one_group() {
        let store = sample::store();
        let groups = group_by_month(store.releases(), date!(2030 - 01 - 01));
        let total: usize = groups.iter().map(|group| group.releases.len()).sum();
        assert_eq!(total, store.len());
        assert!(groups.iter().all(|group| !group.is_current_month));
    }

    #[test]
    fn groups_keep_source_order() {
        let releases = [
            release("early", "2024-05-01"),
            release("late", "2024-05-30"),
            release("other", "2023-01-01"),
            release("middle", "2024-05-15"),
        ];
        let groups = group_by_month(&releases, date!(2024 - 05 - 02));
        let may: Vec<&str> = groups[0]
            .releases
            .iter()
            .map(|release| release.version.as_str())
            .collect();
        assert_eq!(may, ["early", "late", "middle"]);
        assert_eq!(groups[1].key, "2023-01");
    }

    #[test]
    fn keys_descend_across_years() {
        let releases = [
            release("a", "2023-11-01"),
            release("b", "2024-02-01"),
            release("c", "2023-12-01"),
        ];
        let keys: Vec<String> = group_by_month(&releases, date!(2024 - 01 - 01))
            .into_iter()
            .map(|group| group.key)
            .collect();
        assert_eq!(keys, ["2024-02", "2023-12", "2023-11"]);
    }

    #[test]
    fn unreadable_dates_group_last() {
        let releases = [
            release("a", "whenever"),
            release("b", "2024-02-01"),
            release("c", ""),
        ];
        let groups = group_by_month(&releases, date!(2024 - 01 - 01));
        assert_eq!(groups.len(), 2);
        let unknown = &groups[1];
        assert_eq!(unknown.key, "");
        assert_eq!(unknown.label, MonthGroup::UNKNOWN_LABEL);
        assert_eq!(unknown.releases.len(), 2);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_month(&[], date!(2024 - 01 - 01)).is_empty());
    }
}
