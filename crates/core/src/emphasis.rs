//! Keyword emphasis within rendered text.

use std::cmp::Reverse;

use regex::Regex;

use crate::slide::TextRun;

/// Splits text into runs, marking whole-word, case-insensitive keyword matches.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    pattern: Option<Regex>,
}

impl KeywordMatcher {
    /// Build a matcher for a slide's keywords.
    ///
    /// Longer keywords take precedence over their prefixes. If the pattern
    /// cannot be built, emphasis is disabled and text renders plain.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut terms: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();
        if terms.is_empty() {
            return Self::default();
        }
        terms.sort_by(|a, b| Reverse(a.len()).cmp(&Reverse(b.len())).then_with(|| a.cmp(b)));
        terms.dedup();

        let source = format!(r"(?i)\b(?:{})\b", terms.join("|"));
        match Regex::new(&source) {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(e) => {
                log::warn!("Keyword emphasis disabled for this slide: {}", e);
                Self::default()
            }
        }
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Split text into plain and emphasized runs. The runs concatenate back
    /// to the input.
    pub fn runs(&self, text: &str) -> Vec<TextRun> {
        let Some(pattern) = &self.pattern else {
            return vec![TextRun::plain(text)];
        };

        let mut runs = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                runs.push(TextRun::plain(&text[last..m.start()]));
            }
            runs.push(TextRun::emphasized(m.as_str()));
            last = m.end();
        }
        if last < text.len() || runs.is_empty() {
            runs.push(TextRun::plain(&text[last..]));
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphasized(runs: &[TextRun]) -> Vec<&str> {
        runs.iter()
            .filter(|r| r.emphasis)
            .map(|r| r.text.as_str())
            .collect()
    }

    #[test]
    fn test_whole_word_case_insensitive() {
        let matcher = KeywordMatcher::new(&["GST"]);
        let runs = matcher.runs("The gst council met; GSTN was not discussed.");

        assert_eq!(emphasized(&runs), vec!["gst"]);
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, "The gst council met; GSTN was not discussed.");
    }

    #[test]
    fn test_longer_keyword_wins() {
        let matcher = KeywordMatcher::new(&["Supreme", "Supreme Court"]);
        let runs = matcher.runs("The Supreme Court ruled.");
        assert_eq!(emphasized(&runs), vec!["Supreme Court"]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let matcher = KeywordMatcher::new(&["Article 370 (J&K)", "a.b"]);
        assert!(matcher.is_active());
        assert!(emphasized(&matcher.runs("axb is not a.b")) == vec!["a.b"]);
    }

    #[test]
    fn test_no_keywords_gives_single_plain_run() {
        let matcher = KeywordMatcher::new::<&str>(&[]);
        assert!(!matcher.is_active());
        assert_eq!(matcher.runs("Text"), vec![TextRun::plain("Text")]);

        let blank = KeywordMatcher::new(&["  "]);
        assert!(!blank.is_active());
    }

    #[test]
    fn test_match_at_both_ends() {
        let matcher = KeywordMatcher::new(&["policy"]);
        let runs = matcher.runs("Policy shapes policy");
        assert_eq!(
            runs,
            vec![
                TextRun::emphasized("Policy"),
                TextRun::plain(" shapes "),
                TextRun::emphasized("policy"),
            ]
        );
    }
}
