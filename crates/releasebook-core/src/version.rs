//! Ordering for dotted numeric version strings like `1.10.2`.

use std::{cmp::Ordering, fmt::Display, iter};

/// Three-way comparison of two dotted versions.
///
/// Components are compared numerically from left to right. A component that is missing or isn't
/// a non-negative integer counts as `0`, so `1.2` equals `1.2.0` and `1.0.0-beta` equals `1.0.0`.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut a = components(a);
    let mut b = components(b);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (left, right) => match left.unwrap_or(0).cmp(&right.unwrap_or(0)) {
                Ordering::Equal => {}
                ordering => return ordering,
            },
        }
    }
}

fn components(version: &str) -> impl Iterator<Item = u64> + '_ {
    version.split('.').map(parse_component)
}

fn parse_component(component: &str) -> u64 {
    component.trim().parse().unwrap_or(0)
}

/// The first `N` components of `version`, zero-filled. Unlike [`compare`], each component only
/// needs to start with digits, so `1-beta` counts as `1`.
fn leading<const N: usize>(version: &str) -> [u64; N] {
    let mut parts = version
        .split('.')
        .map(leading_digits)
        .chain(iter::repeat(0));
    std::array::from_fn(|_| parts.next().unwrap_or(0))
}

fn leading_digits(component: &str) -> u64 {
    let component = component.trim_start();
    let end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    component[..end].parse().unwrap_or(0)
}

/// The icon shown next to a release, picked from how significant its version looks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VersionIcon {
    /// Any release with a non-zero major version
    Rocket,
    /// `0.x` with a non-zero minor version
    Star,
    /// `0.0.x` past patch 50
    Medal,
    Tag,
}

impl VersionIcon {
    const MEDAL_PATCH_THRESHOLD: u64 = 50;

    #[must_use]
    pub fn for_version(version: &str) -> Self {
        let [major, minor, patch] = leading::<3>(version);
        if major > 0 {
            Self::Rocket
        } else if minor > 0 {
            Self::Star
        } else if patch > Self::MEDAL_PATCH_THRESHOLD {
            Self::Medal
        } else {
            Self::Tag
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Rocket => "ph ph-duotone ph-rocket-launch",
            Self::Star => "ph ph-duotone ph-star",
            Self::Medal => "ph ph-duotone ph-medal",
            Self::Tag => "ph ph-duotone ph-tag",
        }
    }
}

impl Display for VersionIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trailing_zeros_are_ignored() {
        assert_eq!(compare("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare("1.2.0.0", "1.2"), Ordering::Equal);
    }

    #[test]
    fn components_compare_numerically() {
        assert_eq!(compare("1.10.0", "1.9.0"), Ordering::Greater);
        assert_eq!(compare("1.9.0", "1.10.0"), Ordering::Less);
    }

    #[test]
    fn major_wins_over_lower_components() {
        assert_eq!(compare("2.0.0", "1.9.9"), Ordering::Greater);
    }

    #[test]
    fn extra_non_zero_component_is_newer() {
        assert_eq!(compare("1.2.0.1", "1.2"), Ordering::Greater);
    }

    #[test]
    fn prerelease_suffix_counts_as_zero() {
        // Known imprecision: "0-beta" doesn't parse, so it's treated as 0.
        assert_eq!(compare("1.0.0-beta", "1.0.0"), Ordering::Equal);
        assert_eq!(compare("1.0.1-beta", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(compare("", "0"), Ordering::Equal);
        assert_eq!(compare("abc", "0.0.1"), Ordering::Less);
    }

    #[test]
    fn icons() {
        assert_eq!(VersionIcon::for_version("1.2.0"), VersionIcon::Rocket);
        assert_eq!(VersionIcon::for_version("0.3.0"), VersionIcon::Star);
        assert_eq!(VersionIcon::for_version("0.0.51"), VersionIcon::Medal);
        assert_eq!(VersionIcon::for_version("0.0.50"), VersionIcon::Tag);
        assert_eq!(VersionIcon::for_version("nonsense"), VersionIcon::Tag);
    }

    #[test]
    fn icons_read_leading_digits() {
        assert_eq!(VersionIcon::for_version("1-beta.0"), VersionIcon::Rocket);
        assert_eq!(VersionIcon::for_version("0.2rc1"), VersionIcon::Star);
        assert_eq!(VersionIcon::for_version("0.0.60-alpha"), VersionIcon::Medal);
        assert_eq!(VersionIcon::for_version("v1.0.0"), VersionIcon::Tag);
        assert_eq!(compare("1-beta.0", "0.0.0"), Ordering::Equal);
    }
}
