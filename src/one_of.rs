use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::{BoxedParser, Parser};

/// Parser combinator that tries each alternative against the same original
/// position; the first success wins
///
/// Mismatches from failed alternatives are caught and discarded. When every
/// alternative fails, the reported expectation is the disjunction of each
/// alternative's own expectation.
pub struct OneOf<'src, T> {
    parsers: Vec<BoxedParser<'src, T>>,
}

impl<'src, T> OneOf<'src, T> {
    pub fn new(parsers: Vec<BoxedParser<'src, T>>) -> Self {
        OneOf { parsers }
    }
}

impl<'src, T> Parser<'src> for OneOf<'src, T> {
    type Output = T;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        for parser in &self.parsers {
            if let Ok(parsed) = parser.attempt(input) {
                return Ok(parsed);
            }
        }
        Err(Mismatch::at(self.expectation(), input))
    }

    fn expectation(&self) -> String {
        self.parsers
            .iter()
            .map(|parser| parser.expectation())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<'src, T>(parsers: Vec<BoxedParser<'src, T>>) -> OneOf<'src, T> {
    OneOf::new(parsers)
}
