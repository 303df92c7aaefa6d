use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const RELEASE_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a release date, returning `None` for anything that isn't `YYYY-MM-DD`.
#[must_use]
pub fn parse(date: &str) -> Option<Date> {
    Date::parse(date.trim(), RELEASE_DATE).ok()
}

/// The sidebar grouping key for a date, like `2025-01`.
#[must_use]
pub fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

/// A display label like "January 2025".
#[must_use]
pub fn month_label(date: Date) -> String {
    format!("{} {}", date.month(), date.year())
}

/// Format a release date for display like "Jan 4, 2025".
///
/// Dates that can't be parsed are shown exactly as written.
#[must_use]
pub fn format_date(date: &str) -> String {
    let Some(parsed) = parse(date) else {
        return date.to_string();
    };
    let month = parsed.month().to_string();
    format!(
        "{short_month} {day}, {year}",
        short_month = month.get(..3).unwrap_or(&month),
        day = parsed.day(),
        year = parsed.year()
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse("2025-01-04"), Some(date!(2025 - 01 - 04)));
        assert_eq!(parse("2025-13-04"), None);
        assert_eq!(parse("yesterday"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn month_keys_are_zero_padded() {
        assert_eq!(month_key(date!(2024 - 03 - 15)), "2024-03");
    }

    #[test]
    fn labels() {
        assert_eq!(month_label(date!(2024 - 12 - 01)), "December 2024");
        assert_eq!(format_date("2025-01-04"), "Jan 4, 2025");
        assert_eq!(format_date("2024-12-28"), "Dec 28, 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("someday"), "someday");
    }
}
