//! Conventional commit title normalization.

use unicase::UniCase;

use crate::parser::type_prefix;

/// Commit type when introducing new features.
pub const FEAT: &str = "feat";

/// Long form of [`FEAT`], rewritten during normalization.
pub const FEATURE: &str = "feature";

/// Normalize a pull request title into a conventional commit title.
///
/// A leading `type:` token is lower-cased and padded to `type: subject`, with
/// `feature` shortened to `feat`. Titles without one are only trimmed.
///
/// ```rust
/// use pr_commit_message::normalize_title;
///
/// assert_eq!(normalize_title("  Feature :  add tests "), "feat: add tests");
/// assert_eq!(normalize_title("fix(api): keep scope"), "fix(api): keep scope");
/// ```
pub fn normalize_title(title: &str) -> String {
    let title = title.trim();

    let Ok((ty, subject)) = type_prefix(&mut &*title) else {
        return title.to_owned();
    };

    let ty = if UniCase::new(ty) == UniCase::new(FEATURE) {
        FEAT.to_owned()
    } else {
        ty.to_lowercase()
    };
    let subject = subject.trim();
    if subject.is_empty() {
        format!("{ty}:")
    } else {
        format!("{ty}: {subject}")
    }
}
