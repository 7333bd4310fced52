//! Breadcrumb-aware parsing of category search terms.
//!
//! Typeahead widgets echo a picked category back as its breadcrumb
//! (`Electronics >> Phones`), and users keep typing after the separator. Only
//! the last two meaningful segments matter for the next lookup.

use crate::catalog::models::BREADCRUMB_SEPARATOR;

/// The last two meaningful segments of a search term.
///
/// `leaf` is what the user is currently typing; `parent` is the nearest
/// non-empty segment before it (empty when the term has no breadcrumb, or
/// when every earlier segment is blank).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermQuery {
    pub leaf: String,
    pub parent: String,
}

/// Split a search term on the breadcrumb separator and take the trailing
/// leaf/parent pair, walking backward over blank parent segments.
///
/// Terms without a separator parse as `{ leaf: term, parent: "" }`.
pub fn parse_term(term: &str) -> TermQuery {
    let term = term.trim();
    let mut leaf = term.to_string();
    let mut parent = String::new();

    if term.contains(BREADCRUMB_SEPARATOR) {
        let segments: Vec<&str> = term.split(BREADCRUMB_SEPARATOR).collect();
        let mut end = segments.len();
        while end > 1 {
            leaf = segments[end - 1].trim().to_string();
            parent = segments[end - 2].trim().to_string();

            if !parent.is_empty() {
                break;
            }
            end -= 1;
        }
    }

    TermQuery { leaf, parent }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(term: &str) -> (String, String) {
        let q = parse_term(term);
        (q.leaf, q.parent)
    }

    #[test]
    fn plain_term_has_no_parent() {
        assert_eq!(
            parsed("Electronics"),
            ("Electronics".to_string(), String::new())
        );
    }

    #[test]
    fn takes_last_two_segments() {
        assert_eq!(
            parsed("Electronics >> Phones >> Smart"),
            ("Smart".to_string(), "Phones".to_string())
        );
    }

    #[test]
    fn trailing_separator_leaves_empty_leaf() {
        assert_eq!(
            parsed("Electronics >> "),
            (String::new(), "Electronics".to_string())
        );
    }

    #[test]
    fn blank_segments_are_skipped_backward() {
        // The leaf slides back along with the parent scan, matching how the
        // admin widget re-submits partially erased breadcrumbs.
        assert_eq!(
            parsed("Electronics >> >> Phones"),
            (String::new(), "Electronics".to_string())
        );
    }

    #[test]
    fn all_blank_parents_leave_parent_empty() {
        assert_eq!(parsed(" >> >> Phones"), (String::new(), String::new()));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            parsed("  Electronics >> Pho  "),
            ("Pho".to_string(), "Electronics".to_string())
        );
    }
}
