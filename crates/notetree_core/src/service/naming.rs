//! New note file naming.

use chrono::NaiveDate;

/// Composes `<YYMMDD>-<description>.md`, replacing every space in
/// `description` with `-`.
pub fn note_file_name(date: NaiveDate, description: &str) -> String {
    format!("{}-{}.md", date.format("%y%m%d"), description.replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::note_file_name;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(
            note_file_name(date(), "standup rust tips"),
            "240307-standup-rust-tips.md"
        );
    }

    #[test]
    fn every_space_is_replaced_including_runs() {
        assert_eq!(note_file_name(date(), "a  b"), "240307-a--b.md");
        assert_eq!(note_file_name(date(), ""), "240307-.md");
    }
}
