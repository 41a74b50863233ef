//! Title and work item extraction.

use log::trace;

use trackplan_core::fragment::Line;

/// Glyphs that open a work item line: open square, filled square, ballot
/// box, hyphen and bullet.
const BULLETS: [char; 5] = ['\u{25A1}', '\u{25A0}', '\u{2610}', '-', '\u{2022}'];

/// Title and work items found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSummary {
    title: String,
    items: Vec<String>,
}

impl ExtractedSummary {
    /// The first line mentioning "summary", or empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Bulleted lines with their glyph removed, in corpus order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

fn strip_bullet(text: &str) -> Option<&str> {
    text.strip_prefix(BULLETS).map(str::trim_start)
}

/// Pull the title and bulleted work items out of a line corpus.
///
/// # Examples
///
/// ```
/// # use trackplan::extract::extract_summary;
/// # use trackplan_core::fragment::Line;
/// let lines = vec![
///     Line::new(700, vec!["47km Supersite Summary".into()]),
///     Line::new(680, vec!["\u{25A1}".into(), "Maintenance tamp".into()]),
/// ];
/// let summary = extract_summary(&lines);
/// assert_eq!(summary.title(), "47km Supersite Summary");
/// assert_eq!(summary.items(), ["Maintenance tamp"]);
/// ```
pub fn extract_summary(lines: &[Line]) -> ExtractedSummary {
    let mut summary = ExtractedSummary::default();

    for line in lines {
        let joined = line.joined();
        let text = joined.trim();

        if summary.title.is_empty() && text.to_lowercase().contains("summary") {
            summary.title = text.to_string();
        }
        if let Some(item) = strip_bullet(text) {
            summary.items.push(item.to_string());
        }
    }

    trace!(title = summary.title.as_str(), items = summary.items.len(); "Extracted summary");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line {
        Line::new(0, text.split(' ').map(str::to_string).collect())
    }

    #[test]
    fn test_first_summary_line_wins() {
        let summary = extract_summary(&[
            line("Possession notice"),
            line("47km Supersite SUMMARY"),
            line("Summary of changes"),
        ]);
        assert_eq!(summary.title(), "47km Supersite SUMMARY");
    }

    #[test]
    fn test_no_title() {
        let summary = extract_summary(&[line("Possession notice")]);
        assert_eq!(summary.title(), "");
        assert!(summary.items().is_empty());
    }

    #[test]
    fn test_every_bullet_glyph() {
        let summary = extract_summary(&[
            line("\u{25A1} Rerail 1000m"),
            line("\u{25A0} Maintenance tamp"),
            line("\u{2610} Remove weigh bridge"),
            line("- Video Imaging"),
            line("\u{2022} Test and commissioning"),
            line("* not a bullet"),
        ]);
        assert_eq!(
            summary.items(),
            [
                "Rerail 1000m",
                "Maintenance tamp",
                "Remove weigh bridge",
                "Video Imaging",
                "Test and commissioning",
            ]
        );
    }

    #[test]
    fn test_glyph_without_space() {
        let summary = extract_summary(&[line("\u{2022}Rerail")]);
        assert_eq!(summary.items(), ["Rerail"]);
    }

    #[test]
    fn test_bullet_line_can_also_be_title() {
        let summary = extract_summary(&[line("- Summary of works")]);
        assert_eq!(summary.title(), "- Summary of works");
        assert_eq!(summary.items(), ["Summary of works"]);
    }

    #[test]
    fn test_leading_whitespace_before_glyph() {
        let lines = vec![Line::new(0, vec![" ".into(), "\u{25A1} Tamp".into()])];
        let summary = extract_summary(&lines);
        assert_eq!(summary.items(), ["Tamp"]);
    }
}
