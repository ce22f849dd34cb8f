//! Locating labeled Markdown sections.

use tracing::trace;

use crate::parser::{boundary, heading};

/// A recognized section label and the spellings accepted for it.
///
/// Variants are matched ASCII case-insensitively against the start of a
/// heading's text, in order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Keyword {
    name: &'static str,
    variants: &'static [&'static str],
}

impl Keyword {
    /// Define a keyword from its canonical name and accepted spellings.
    pub const fn new(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, variants }
    }

    /// The canonical name of the section.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The accepted spellings, tried in order.
    pub const fn variants(&self) -> &'static [&'static str] {
        self.variants
    }
}

/// Common section keywords
impl Keyword {
    /// `## Details` or `## Detail`
    pub const DETAILS: Keyword = Keyword::new("Details", &["Details", "Detail"]);
    /// `## Breaking Changes`, `## Breaking Change` or `## Breaking`
    pub const BREAKING_CHANGES: Keyword = Keyword::new(
        "Breaking Changes",
        &["Breaking Changes", "Breaking Change", "Breaking"],
    );
    /// `## References`, `## Reference` or `## Ref`
    pub const REFERENCES: Keyword =
        Keyword::new("References", &["References", "Reference", "Ref"]);
    /// `## Changelog`
    pub const CHANGELOG: Keyword = Keyword::new("Changelog", &["Changelog"]);
}

/// The outcome of looking for a section.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Section<'a> {
    found: bool,
    content: &'a str,
}

impl<'a> Section<'a> {
    fn present(content: &'a str) -> Self {
        Self {
            found: true,
            content: content.trim(),
        }
    }

    /// Whether a heading for the keyword was present.
    pub const fn is_found(&self) -> bool {
        self.found
    }

    /// The trimmed text below the heading; empty when missing.
    pub const fn content(&self) -> &'a str {
        self.content
    }

    /// The content, unless the section is missing or blank.
    pub fn non_empty(&self) -> Option<&'a str> {
        (!self.content.is_empty()).then_some(self.content)
    }
}

#[derive(Clone, Copy, Debug)]
enum ScanState {
    Searching,
    InSection { start: usize },
}

/// Find the first section headed by `keyword` in `text`.
///
/// A heading is a line made of one or more `#`, one or more spaces and one of
/// the keyword's variants; the rest of that line is ignored. The section runs
/// until the next line starting with `#`s followed by a space, or the end of
/// the text. A `#` anywhere else in a line is plain content.
///
/// ```rust
/// use pr_commit_message::{locate, Keyword};
///
/// let text = "## Details\nmessage #1\n## Other\nline";
/// let section = locate(text, &Keyword::DETAILS);
/// assert!(section.is_found());
/// assert_eq!(section.content(), "message #1");
/// ```
pub fn locate<'a>(text: &'a str, keyword: &Keyword) -> Section<'a> {
    let mut state = ScanState::Searching;
    let mut offset = 0;
    let mut end = text.len();

    for line in text.split_inclusive('\n') {
        let next = offset + line.len();
        match state {
            ScanState::Searching => {
                if heading(&mut &*line, keyword.variants()).is_ok() {
                    state = ScanState::InSection { start: next };
                }
            }
            ScanState::InSection { .. } => {
                if boundary(&mut &*line).is_ok() {
                    end = offset;
                    break;
                }
            }
        }
        offset = next;
    }

    let section = match state {
        ScanState::Searching => Section::default(),
        ScanState::InSection { start } => Section::present(&text[start..end]),
    };
    trace!(
        keyword = keyword.name(),
        found = section.is_found(),
        len = section.content().len(),
        "located section"
    );
    section
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_missing() {
        let section = locate("", &Keyword::DETAILS);
        assert!(!section.is_found());
        assert_eq!(section.content(), "");

        let section = locate("line 1\nline 2\n## Other Section\nline 3", &Keyword::DETAILS);
        assert!(!section.is_found());
        assert_eq!(section.content(), "");
    }

    #[test]
    fn test_heading_at_end_of_text() {
        let section = locate("line 1\n## Details", &Keyword::DETAILS);
        assert!(section.is_found());
        assert_eq!(section.content(), "");
        assert_eq!(section.non_empty(), None);

        let section = locate("## Details\n", &Keyword::DETAILS);
        assert!(section.is_found());
        assert_eq!(section.content(), "");
    }

    #[test]
    fn test_empty_sections() {
        let text = indoc! {"
            ### Details
            ### Breaking Changes
            ### References"};

        for keyword in [
            Keyword::DETAILS,
            Keyword::BREAKING_CHANGES,
            Keyword::REFERENCES,
        ] {
            let section = locate(text, &keyword);
            assert!(section.is_found(), "{}", keyword.name());
            assert_eq!(section.content(), "", "{}", keyword.name());
        }
    }

    #[test]
    fn test_rest_of_heading_line_is_not_content() {
        let section = locate("## Details for reviewers\nmessage", &Keyword::DETAILS);
        assert_eq!(section.content(), "message");
    }

    #[test]
    fn test_first_heading_wins() {
        let text = indoc! {"
            ## Details
            first
            ## Details
            second"};
        assert_eq!(locate(text, &Keyword::DETAILS).content(), "first");
    }

    #[test]
    fn test_repeated_heading_stays_with_owner() {
        // A `#` line without a following space does not end the section.
        let text = indoc! {"
            ## Changelog
            one
            #Changelog
            two"};
        assert_eq!(
            locate(text, &Keyword::CHANGELOG).content(),
            "one\n#Changelog\ntwo"
        );
    }

    #[test]
    fn test_any_heading_depth_is_a_boundary() {
        let text = indoc! {"
            ### References
            ref1
            ###### deeply nested
            other"};
        assert_eq!(locate(text, &Keyword::REFERENCES).content(), "ref1");

        let text = "# References\nref1\n# Top";
        assert_eq!(locate(text, &Keyword::REFERENCES).content(), "ref1");
    }

    #[test]
    fn test_inline_hashes_are_content() {
        let text = indoc! {"
            ## Details
            message #1
            message ### 123
            see #42 ## done
            ## Other Section"};
        assert_eq!(
            locate(text, &Keyword::DETAILS).content(),
            "message #1\nmessage ### 123\nsee #42 ## done"
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "## Details\r\nmessage 1\r\nmessage 2\r\n## Other\r\nline";
        assert_eq!(
            locate(text, &Keyword::DETAILS).content(),
            "message 1\r\nmessage 2"
        );
    }

    #[test]
    fn test_custom_keyword() {
        const SUMMARY: Keyword = Keyword::new("Summary", &["Summary", "TL;DR"]);

        let section = locate("## tl;dr\nshort\n## More\nlong", &SUMMARY);
        assert_eq!(section.non_empty(), Some("short"));
    }

    #[test]
    fn test_deterministic() {
        let text = "## Breaking\n  a\n\n## Ref\nb";
        assert_eq!(
            locate(text, &Keyword::BREAKING_CHANGES),
            locate(text, &Keyword::BREAKING_CHANGES)
        );
    }
}
