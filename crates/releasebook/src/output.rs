//! Plain text views of a render for the terminal.

use std::fmt::Write;

use releasebook_core::{Render, date::format_date};

/// One line per visible release, then the results count.
pub(crate) fn release_lines(render: &Render) -> String {
    let mut out = String::new();
    if let Some(message) = render.empty_message {
        writeln!(out, "{message}").ok();
    }
    for release in &render.releases {
        writeln!(
            out,
            "{version}  {date}  {changes} changes  {tag}  {summary}",
            version = release.version,
            date = release.date,
            changes = release.change_count,
            tag = release.tag,
            summary = release.summary,
        )
        .ok();
    }
    out.push_str(&render.results_count);
    out
}

/// The month groups, newest first, with the current month marked.
pub(crate) fn month_lines(render: &Render) -> String {
    let mut out = String::new();
    for group in &render.sidebar {
        writeln!(
            out,
            "{label} ({count} releases){current}",
            label = group.label,
            count = group.releases.len(),
            current = if group.is_current_month { " *" } else { "" },
        )
        .ok();
        for release in &group.releases {
            writeln!(
                out,
                "  {version}  {date}",
                version = release.version,
                date = format_date(&release.date)
            )
            .ok();
        }
    }
    write!(out, "{} total releases", render.stats.total_releases).ok();
    out
}

/// The detail modal as text. Bullets are shown as written.
pub(crate) fn detail_lines(render: &Render) -> Option<String> {
    let detail = render.detail.as_ref()?;
    Some(format!(
        "{version} ({date}, {changes} changes, {tag})\n{summary}\n\n{raw_content}",
        version = detail.version,
        date = detail.date,
        changes = detail.change_count,
        tag = detail.tag,
        summary = detail.summary,
        raw_content = detail.raw_content,
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use releasebook_core::{ChangelogData, Controller, Event};
    use time::macros::date;

    use super::*;

    fn controller() -> Controller {
        let data = ChangelogData::from_json(
            r#"{"releases": [
                {"version": "1.1.0", "date": "2024-02-10", "summary": "Second", "tag": "feature", "changeCount": 2, "rawContent": "- b"},
                {"version": "1.0.0", "date": "2024-01-05", "summary": "First", "tag": "major", "changeCount": 1, "rawContent": "- a"}
            ]}"#,
        )
        .unwrap();
        Controller::new(data.into())
    }

    #[test]
    fn lists_releases() {
        let render = controller().render_at(date!(2024 - 02 - 11));
        assert_eq!(
            release_lines(&render),
            "1.1.0  2024-02-10  2 changes  feature  Second\n1.0.0  2024-01-05  1 changes  major  First\nShowing 2 of 2 releases"
        );
    }

    #[test]
    fn lists_empty_state() {
        let mut controller = controller();
        controller.dispatch(Event::SearchInput("zzz".into()));
        let render = controller.render_at(date!(2024 - 02 - 11));
        assert_eq!(
            release_lines(&render),
            "Try adjusting your search criteria\nShowing 0 of 2 releases"
        );
    }

    #[test]
    fn lists_months() {
        let render = controller().render_at(date!(2024 - 02 - 11));
        assert_eq!(
            month_lines(&render),
            "February 2024 (1 releases) *\n  1.1.0  Feb 10, 2024\nJanuary 2024 (1 releases)\n  1.0.0  Jan 5, 2024\n2 total releases"
        );
    }

    #[test]
    fn shows_detail() {
        let mut controller = controller();
        assert_eq!(detail_lines(&controller.render()), None);
        controller.dispatch(Event::OpenDetail("1.0.0".into()));
        assert_eq!(
            detail_lines(&controller.render()).as_deref(),
            Some("1.0.0 (Jan 5, 2024, 1 changes, major)\nFirst\n\n- a")
        );
    }
}
