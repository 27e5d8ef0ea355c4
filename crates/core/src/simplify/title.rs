//! Title simplification.

use super::{Simplification, Simplifier};

impl Simplifier {
    /// Reduce a catalog title to its most searchable form.
    ///
    /// Rules, first match wins:
    /// 1. `Main: Suffix` where the subtitle equals `Suffix`: a series marker
    ///    leaves the title unchanged, a descriptive subtitle yields `Main`,
    ///    any other subtitle is used as-is.
    /// 2. `Main: Suffix` where `Main` is the series name yields `Suffix`.
    /// 3. `Title (Annotation)` yields `Title`.
    pub fn simplify_title(
        &self,
        title: &str,
        subtitle: Option<&str>,
        series_name: Option<&str>,
    ) -> Simplification {
        let title = title.trim();

        if let Some((main, suffix)) = title.split_once(": ") {
            let suffix = suffix.trim();

            if subtitle.map(str::trim) == Some(suffix) {
                if self.is_series_marker(suffix) {
                    return Simplification::Unchanged;
                }
                if self.rules.is_descriptive(suffix) {
                    return Simplification::from_candidate(main, title);
                }
                return Simplification::from_candidate(suffix, title);
            }

            if let Some(series) = series_name {
                if main.trim().to_lowercase() == series.trim().to_lowercase() {
                    return Simplification::from_candidate(suffix, title);
                }
            }
        }

        self.strip_trailing_annotation(title)
    }

    /// Whether the text is a bare series/volume marker such as `Book 1`.
    pub fn is_series_marker(&self, text: &str) -> bool {
        self.series_marker.is_match(text.trim())
    }

    /// Nested or unbalanced trailing groups are left alone.
    fn strip_trailing_annotation(&self, title: &str) -> Simplification {
        match self
            .trailing_annotation
            .captures(title)
            .and_then(|caps| caps.name("title"))
        {
            Some(main) => Simplification::from_candidate(main.as_str(), title),
            None => Simplification::Unchanged,
        }
    }
}
