use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;
use regex::Regex;
use std::borrow::Cow;

/// Parser that matches a regular expression anchored at the current position
///
/// The match must begin at offset zero of the remaining view; a match further
/// in is a mismatch. The matched text becomes the value and everything after
/// it the remainder. Taking a pre-built [`Regex`] keeps compilation failures
/// at composition time, in the caller's hands.
///
/// # Note
/// A pattern that can match the empty string (e.g. `x*`) succeeds without
/// consuming input. Feeding such a pattern to `many` never terminates; see
/// [`crate::many`].
pub struct Pattern {
    regex: Regex,
    description: String,
}

impl Pattern {
    pub fn new(regex: Regex) -> Self {
        let description = format!("pattern /{}/", regex.as_str());
        Pattern { regex, description }
    }

    /// Replace the auto-generated expectation text with a human description
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<'src> Parser<'src> for Pattern {
    type Output = Cow<'src, str>;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        if let Some(found) = self.regex.find(input.remaining()) {
            if found.start() == 0 {
                let rest = input.advance(found.end());
                return Ok(Parsed::new(Cow::Borrowed(found.as_str()), rest));
            }
        }
        Err(Mismatch::at(self.expectation(), input))
    }

    fn expectation(&self) -> String {
        self.description.clone()
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(regex: Regex) -> Pattern {
    Pattern::new(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern_str: &str) -> Regex {
        Regex::new(pattern_str).unwrap()
    }

    #[test]
    fn test_alternation_matches() {
        let parser = pattern(re("foo|bar"));
        let parsed = parser.parse("foo").unwrap();
        assert_eq!(parsed.into_value(), "foo");
    }

    #[test]
    fn test_alternation_mismatch() {
        let parser = pattern(re("foo|bar"));
        let mismatch = parser.parse("baz").unwrap_err();
        assert_eq!(mismatch.expected, "pattern /foo|bar/");
        assert_eq!(mismatch.received, "\"baz\"");
    }

    #[test]
    fn test_match_is_anchored_at_view_start() {
        let parser = pattern(re("[0-9]+"));
        // The digits appear later in the input, so the anchored match fails
        assert!(parser.parse("ab12").is_err());

        let parsed = parser.parse("12ab").unwrap();
        assert_eq!(parsed.value(), "12");
        assert_eq!(parsed.remainder().unwrap(), "ab");
    }

    #[test]
    fn test_described_replaces_expectation() {
        let parser = pattern(re("[0-9]")).described("digit");
        let mismatch = parser.parse("x").unwrap_err();
        assert_eq!(mismatch.expected, "digit");
    }

    #[test]
    fn test_mismatch_on_empty_input() {
        let parser = pattern(re("[0-9]"));
        let mismatch = parser.parse("").unwrap_err();
        assert_eq!(mismatch.received, "end of input");
    }

    #[test]
    fn test_zero_width_match_consumes_nothing() {
        let parser = pattern(re("x*"));
        let parsed = parser.parse("yyy").unwrap();
        assert_eq!(parsed.value(), "");
        assert_eq!(parsed.remainder().unwrap(), "yyy");
    }
}
