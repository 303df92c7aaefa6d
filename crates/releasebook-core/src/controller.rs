use std::{fmt::Display, str::FromStr};

#[cfg(feature = "miette")]
use miette::Diagnostic;
use thiserror::Error;
use time::{Date, OffsetDateTime};
use tracing::{debug, trace};

use crate::{
    date,
    markup::format_bullets,
    pipeline::{self, SortKey},
    release::{Release, ReleaseStore, SummaryStats},
    sidebar::{MonthGroup, group_by_month},
};

pub const DEFAULT_TITLE: &str = "Release Notes";

/// How the release list is laid out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(UnknownViewMode(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[cfg_attr(feature = "miette", derive(Diagnostic))]
#[error("Unknown view mode {0:?}")]
#[cfg_attr(
    feature = "miette",
    diagnostic(code(controller::view_mode), help("The view must be `grid` or `list`"))
)]
pub struct UnknownViewMode(String);

/// Transient UI state for one browsing session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_key: SortKey,
    pub view_mode: ViewMode,
    /// Derived from the store on every search or sort change, never edited in place
    pub filtered_releases: Vec<Release>,
}

impl ViewState {
    /// Start with every release visible, in the order they were loaded.
    #[must_use]
    pub fn new(store: &ReleaseStore) -> Self {
        Self {
            search_term: String::new(),
            sort_key: SortKey::default(),
            view_mode: ViewMode::default(),
            filtered_releases: store.releases().to_vec(),
        }
    }
}

/// Everything a user can do to the browser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    SetView(ViewMode),
    SearchInput(String),
    SortChange(SortKey),
    OpenDetail(String),
    CloseDetail,
    /// The project's display name became available
    SetTitle(String),
}

/// Aggregate numbers for the stats panel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stats {
    /// Counted from the store rather than taken from the data file
    pub total_releases: usize,
    pub total_changes: u64,
    pub latest_version: String,
}

/// The contents of the release detail modal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Detail {
    pub version: String,
    pub date: String,
    pub change_count: u64,
    pub tag: String,
    pub summary: String,
    pub raw_content: String,
    /// Pre-rendered, escaped HTML of `raw_content`
    pub content: String,
}

impl From<&Release> for Detail {
    fn from(release: &Release) -> Self {
        Self {
            version: release.version.clone(),
            date: date::format_date(&release.date),
            change_count: release.change_count,
            tag: release.tag.clone(),
            summary: release.summary.clone(),
            raw_content: release.raw_content.clone(),
            content: format_bullets(&release.raw_content),
        }
    }
}

/// One complete snapshot of what the page should show.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Render {
    pub title: String,
    pub view_mode: ViewMode,
    pub releases: Vec<Release>,
    /// Like "Showing 2 of 6 releases"
    pub results_count: String,
    /// Set only when there's nothing to show
    pub empty_message: Option<&'static str>,
    pub sidebar: Vec<MonthGroup>,
    pub stats: Stats,
    pub detail: Option<Detail>,
}

impl Render {
    pub const NO_MATCHES: &'static str = "Try adjusting your search criteria";
    pub const NO_RELEASES: &'static str = "No releases have been published yet";
}

/// Owns the release store and the view state for one browser instance.
#[derive(Clone, Debug)]
pub struct Controller {
    store: ReleaseStore,
    state: ViewState,
    /// The release shown in the detail modal
    detail: Option<Detail>,
    title: String,
}

impl Controller {
    #[must_use]
    pub fn new(store: ReleaseStore) -> Self {
        Self {
            state: ViewState::new(&store),
            store,
            detail: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Apply `event` and render the result as of now.
    pub fn handle(&mut self, event: Event) -> Render {
        self.dispatch(event);
        self.render()
    }

    /// Apply `event` without rendering.
    pub fn dispatch(&mut self, event: Event) {
        trace!("Handling {event:?}");
        match event {
            Event::SetView(mode) => self.set_view(mode),
            Event::SearchInput(term) => self.on_search_input(term),
            Event::SortChange(key) => self.on_sort_change(key),
            Event::OpenDetail(version) => self.open_detail(&version),
            Event::CloseDetail => self.close_detail(),
            Event::SetTitle(name) => self.set_title(&name),
        }
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    pub fn on_search_input(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.recompute();
    }

    pub fn on_sort_change(&mut self, key: SortKey) {
        self.state.sort_key = key;
        self.recompute();
    }

    /// Show the release with exactly this version. Unknown versions leave the detail as it was.
    pub fn open_detail(&mut self, version: &str) {
        match self.store.find(version) {
            Some(release) => self.detail = Some(Detail::from(release)),
            None => debug!("No release with version {version:?}, not opening detail"),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Replace the default title with one built from the project's package name.
    pub fn set_title(&mut self, package_name: &str) {
        self.title = display_title(package_name);
    }

    fn recompute(&mut self) {
        self.state.filtered_releases = pipeline::apply(
            self.store.releases(),
            &self.state.search_term,
            self.state.sort_key,
        );
    }

    /// Render using the current UTC date to pick the current month.
    #[must_use]
    pub fn render(&self) -> Render {
        self.render_at(OffsetDateTime::now_utc().date())
    }

    #[must_use]
    pub fn render_at(&self, today: Date) -> Render {
        let releases = self.state.filtered_releases.clone();
        let empty_message = match (releases.is_empty(), self.state.search_term.is_empty()) {
            (false, _) => None,
            (true, true) => Some(Render::NO_RELEASES),
            (true, false) => Some(Render::NO_MATCHES),
        };
        let supplied = self.store.stats();
        Render {
            title: self.title.clone(),
            view_mode: self.state.view_mode,
            results_count: format!(
                "Showing {shown} of {total} releases",
                shown = releases.len(),
                total = self.store.len()
            ),
            releases,
            empty_message,
            sidebar: group_by_month(self.store.releases(), today),
            stats: Stats {
                total_releases: self.store.len(),
                total_changes: supplied.total_changes,
                latest_version: if supplied.latest_version.is_empty() {
                    SummaryStats::UNKNOWN_VERSION.to_string()
                } else {
                    supplied.latest_version.clone()
                },
            },
            detail: self.detail.clone(),
        }
    }
}

/// Turn a package name like `git-changelog-manager` into "Git Changelog Manager Release Notes".
#[must_use]
pub fn display_title(package_name: &str) -> String {
    let name = package_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{name} {DEFAULT_TITLE}")
}
