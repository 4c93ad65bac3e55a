//! Ready-made pattern parsers for common text elements
//!
//! Each constructor hands out a fresh [`Pattern`] over a regex compiled once
//! per process.

use crate::pattern::{Pattern, pattern};
use once_cell::sync::Lazy;
use regex::Regex;

static ANY_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(".").unwrap());
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").unwrap());
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Any single character except a line break
pub fn any_char() -> Pattern {
    pattern(ANY_CHAR.clone()).described("character")
}

/// A single decimal digit
pub fn digit() -> Pattern {
    pattern(DIGIT.clone()).described("digit")
}

/// A single ASCII letter
pub fn letter() -> Pattern {
    pattern(LETTER.clone()).described("letter")
}

/// One or more whitespace characters
pub fn whitespace() -> Pattern {
    pattern(WHITESPACE.clone()).described("whitespace")
}
