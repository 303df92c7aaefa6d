pub mod controller;
pub mod date;
pub mod markup;
pub mod pipeline;
mod release;
pub mod render;
pub mod sidebar;
pub mod version;

pub use controller::{
    Controller, DEFAULT_TITLE, Detail, Event, Render, Stats, UnknownViewMode, ViewMode, ViewState,
};
pub use markup::format_bullets;
pub use pipeline::{SortKey, UnknownSortKey, apply};
pub use release::{ChangelogData, Release, ReleaseStore, SummaryStats};
pub use sidebar::{MonthGroup, group_by_month};
