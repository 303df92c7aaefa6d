//! HTML fragments for each part of the page. All release text is escaped before it's written.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use itertools::Itertools;

use crate::{
    controller::{Detail, Render, Stats, ViewMode},
    date::format_date,
    release::Release,
    sidebar::MonthGroup,
    version::VersionIcon,
};

/// The release cards shown in grid mode.
#[must_use]
pub fn grid(releases: &[Release]) -> String {
    releases.iter().map(card).join("\n")
}

fn card(release: &Release) -> String {
    let date = format_date(&release.date);
    format!(
        r##"<div id="{id}" class="release-card" data-version="{id}">
  <div class="release-header">
    <div class="release-icon"><i class="{icon}"></i></div>
    <div class="release-info">
      <h3 class="release-version">{version}</h3>
      <p class="release-date">{date}</p>
    </div>
    <div class="release-tag"><span class="tag-label">{tag}</span></div>
  </div>
  <div class="release-body">
    <div class="release-summary"><p>{summary}</p></div>
  </div>
  <div class="release-footer">
    <div class="release-stats">
      <span class="stat-item"><i class="ph ph-duotone ph-list-bullets"></i> {changes} changes</span>
      <span class="stat-item"><i class="ph ph-duotone ph-calendar"></i> {date}</span>
    </div>
    <div class="release-actions">
      <a class="action-btn primary" href="#detail-{id}">View Release</a>
    </div>
  </div>
</div>"##,
        id = attr(&release.version),
        icon = VersionIcon::for_version(&release.version),
        version = text(&release.version),
        date = text(&date),
        tag = text(&release.tag),
        summary = text(&release.summary),
        changes = release.change_count,
    )
}

/// The compact rows shown in list mode.
#[must_use]
pub fn list(releases: &[Release]) -> String {
    releases.iter().map(row).join("\n")
}

fn row(release: &Release) -> String {
    format!(
        r##"<div id="{id}" class="release-row" data-version="{id}">
  <div class="release-list-header">
    <div class="release-icon"><i class="{icon}"></i></div>
    <div class="release-info">
      <h3 class="release-version">{version}</h3>
      <p class="release-summary">{summary}</p>
    </div>
    <div class="release-meta">
      <span class="release-date">{date}</span>
      <span class="release-changes">{changes} changes</span>
      <span class="release-tag">{tag}</span>
    </div>
    <div class="release-actions"><a class="action-btn primary" href="#detail-{id}">View</a></div>
  </div>
</div>"##,
        id = attr(&release.version),
        icon = VersionIcon::for_version(&release.version),
        version = text(&release.version),
        summary = text(&release.summary),
        date = text(&format_date(&release.date)),
        changes = release.change_count,
        tag = text(&release.tag),
    )
}

/// The "Releases by Month" navigation. The current month starts expanded.
#[must_use]
pub fn sidebar(groups: &[MonthGroup], total_releases: usize) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"sidebar-section\">\n<h3>📅 Releases by Month</h3>\n");
    writeln!(
        out,
        "<div class=\"sidebar-summary\"><span class=\"total-releases\">{total_releases} total releases</span></div>"
    )
    .ok();
    out.push_str("<div class=\"release-groups\">\n");
    for group in groups {
        writeln!(
            out,
            "<details class=\"month-group\"{open}>\n<summary class=\"month-summary\"><span class=\"month-name\">{name}</span><span class=\"month-count\">{count} releases</span></summary>\n<div class=\"month-releases\">",
            open = if group.is_current_month { " open" } else { "" },
            name = text(&group.label),
            count = group.releases.len(),
        )
        .ok();
        for release in &group.releases {
            writeln!(
                out,
                "<a href=\"#{id}\" class=\"release-link\"><div class=\"release-version\">{version}</div><div class=\"release-date\">{date}</div></a>",
                id = attr(&release.version),
                version = text(&release.version),
                date = text(&format_date(&release.date)),
            )
            .ok();
        }
        out.push_str("</div>\n</details>\n");
    }
    out.push_str("</div>\n</div>");
    out
}

#[must_use]
pub fn stats(stats: &Stats) -> String {
    format!(
        r#"<div class="stats">
  <div class="stat"><span class="stat-label">Releases</span><span id="statTotalReleases" class="stat-value">{releases}</span></div>
  <div class="stat"><span class="stat-label">Changes</span><span id="statTotalChanges" class="stat-value">{changes}</span></div>
  <div class="stat"><span class="stat-label">Latest</span><span id="statLatestVersion" class="stat-value">{latest}</span></div>
</div>"#,
        releases = stats.total_releases,
        changes = stats.total_changes,
        latest = text(&stats.latest_version),
    )
}

/// The release modal. `detail.content` is already escaped HTML. Closed modals are only shown
/// while their anchor is the URL fragment.
#[must_use]
pub fn detail(detail: &Detail, open: bool) -> String {
    format!(
        r##"<div id="detail-{id}" class="modal-overlay{open}">
  <div class="modal">
    <h2 class="modal-title">{version}</h2>
    <div class="modal-meta">
      <div class="meta-item"><i class="ph ph-duotone ph-calendar"></i> {date}</div>
      <div class="meta-item"><i class="ph ph-duotone ph-list-bullets"></i> {changes} changes</div>
      <div class="meta-item"><i class="ph ph-duotone ph-tag"></i> {tag}</div>
    </div>
    <div class="modal-summary"><p>{summary}</p></div>
    <div class="modal-content">{content}</div>
    <a class="modal-close" href="#">Close</a>
  </div>
</div>"##,
        id = attr(&detail.version),
        open = if open { " open" } else { "" },
        version = text(&detail.version),
        date = text(&detail.date),
        changes = detail.change_count,
        tag = text(&detail.tag),
        summary = text(&detail.summary),
        content = detail.content,
    )
}

/// One modal per visible release so every "View" link has a target, plus the open one.
fn modals(render: &Render) -> String {
    let open = render.detail.as_ref();
    let closed = render
        .releases
        .iter()
        .filter(|release| open.is_none_or(|open| open.version != release.version))
        .unique_by(|release| release.version.as_str())
        .map(|release| detail(&Detail::from(release), false));
    open.map(|open| detail(open, true))
        .into_iter()
        .chain(closed)
        .join("\n")
}

/// A complete standalone HTML document for one render.
#[must_use]
pub fn page(render: &Render) -> String {
    let releases = match (render.empty_message, render.view_mode) {
        (Some(message), _) => format!(
            "<div id=\"emptyState\" class=\"empty-state\"><p id=\"emptyMessage\">{}</p></div>",
            text(message)
        ),
        (None, ViewMode::Grid) => format!(
            "<div id=\"releasesGrid\" class=\"releases-grid\">\n{}\n</div>",
            grid(&render.releases)
        ),
        (None, ViewMode::List) => format!(
            "<div id=\"releasesList\" class=\"releases-list\">\n{}\n</div>",
            list(&render.releases)
        ),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
.modal-overlay {{ display: none; }}
.modal-overlay.open, .modal-overlay:target {{ display: flex; }}
</style>
</head>
<body>
<aside id="sidebarReleases">
{sidebar}
</aside>
<main>
<h1 id="appTitle">{title}</h1>
{stats}
<p id="resultsCount">{count}</p>
{releases}
</main>
{modal}
</body>
</html>
"#,
        title = text(&render.title),
        sidebar = sidebar(&render.sidebar, render.stats.total_releases),
        stats = stats(&render.stats),
        count = text(&render.results_count),
        modal = modals(render),
    )
}
