//! Author-name simplification.

use regex_lite::Captures;

use super::{Simplification, Simplifier};

impl Simplifier {
    /// Drop a middle initial and normalize `Last, First` ordering.
    ///
    /// `Robert R. McCammon` and `McCammon, Robert R.` both become
    /// `Robert McCammon`; a trailing suffix such as `Jr.` is preserved.
    pub fn simplify_author(&self, author: &str) -> Simplification {
        let author = author.trim();

        if let Some(caps) = self.forward_name.captures(author) {
            return Simplification::from_candidate(&join_name(&caps), author);
        }

        if let Some(caps) = self.inverted_name.captures(author) {
            return Simplification::from_candidate(&join_name(&caps), author);
        }

        Simplification::Unchanged
    }
}

fn join_name(caps: &Captures<'_>) -> String {
    let mut name = [caps.name("first"), caps.name("last")]
        .into_iter()
        .flatten()
        .map(|m| m.as_str().trim())
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(suffix) = caps.name("suffix") {
        name.push(' ');
        name.push_str(suffix.as_str());
    }
    name
}

#[cfg(test)]
mod tests {
    use super::super::{simplify_author, SimplifierRules};
    use super::*;

    #[test]
    fn test_middle_initial_removed() {
        assert_eq!(
            simplify_author("Robert R. McCammon"),
            Some("Robert McCammon".to_string())
        );
    }

    #[test]
    fn test_suffix_preserved() {
        assert_eq!(
            simplify_author("Martin L. King Jr."),
            Some("Martin King Jr.".to_string())
        );
    }

    #[test]
    fn test_inverted_name_normalized() {
        assert_eq!(
            simplify_author("McCammon, Robert R."),
            Some("Robert McCammon".to_string())
        );
        assert_eq!(
            simplify_author("Le Guin, Ursula K."),
            Some("Ursula Le Guin".to_string())
        );
    }

    #[test]
    fn test_inverted_name_without_initial_is_swapped() {
        assert_eq!(
            simplify_author("Herbert, Frank"),
            Some("Frank Herbert".to_string())
        );
    }

    #[test]
    fn test_inverted_name_with_suffix() {
        assert_eq!(
            simplify_author("King, Martin L., Jr."),
            Some("Martin King Jr.".to_string())
        );
    }

    #[test]
    fn test_multi_word_first_name() {
        assert_eq!(
            simplify_author("Mary Ann B. Shaffer"),
            Some("Mary Ann Shaffer".to_string())
        );
    }

    #[test]
    fn test_inverted_multi_word_first_name() {
        assert_eq!(
            simplify_author("Shaffer, Mary Ann B."),
            Some("Mary Ann Shaffer".to_string())
        );
        assert_eq!(
            simplify_author("King, Martin Luther Jr."),
            Some("Martin Luther King Jr.".to_string())
        );
        // A bare suffix is not a second first name
        assert_eq!(
            simplify_author("King, Martin Jr"),
            Some("Martin King Jr".to_string())
        );
    }

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(simplify_author("Frank Herbert"), None);
        assert_eq!(simplify_author("Brandon Sanderson"), None);
        assert_eq!(simplify_author(""), None);
    }

    #[test]
    fn test_initials_only_first_name_unchanged() {
        assert_eq!(simplify_author("J. R. R. Tolkien"), None);
        assert_eq!(simplify_author("Tolkien, J. R. R."), None);
    }

    #[test]
    fn test_unknown_suffix_unchanged() {
        assert_eq!(simplify_author("Martin L. King Esq."), None);
    }

    #[test]
    fn test_custom_suffix_vocabulary() {
        let rules = SimplifierRules {
            name_suffixes: vec!["PhD".to_string()],
            ..Default::default()
        };
        let simplifier = Simplifier::new(rules).unwrap();
        assert_eq!(
            simplifier.simplify_author("Jane Q. Doe PhD"),
            Simplification::Simplified("Jane Doe PhD".to_string())
        );
        assert_eq!(
            simplifier.simplify_author("Martin L. King Jr."),
            Simplification::Unchanged
        );
    }
}
