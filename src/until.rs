use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that consumes elements greedily until the given parser
/// matches the remaining input
///
/// The terminating match is probed, not consumed: the accumulated prefix is
/// the value and the remainder starts exactly where the probe succeeded.
/// Fails if input is exhausted before the probe ever matches.
pub struct Until<P> {
    parser: P,
}

impl<P> Until<P> {
    pub fn new(parser: P) -> Self {
        Until { parser }
    }
}

impl<'src, P> Parser<'src> for Until<P>
where
    P: Parser<'src>,
{
    type Output = Cow<'src, str>;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        let mut cursor = input;
        loop {
            if self.parser.attempt(cursor).is_ok() {
                let prefix = input.span_until(cursor);
                return Ok(Parsed::new(Cow::Borrowed(prefix), cursor));
            }
            match cursor.split_first() {
                Some((_, rest)) => cursor = rest,
                None => return Err(Mismatch::at(self.expectation(), cursor)),
            }
        }
    }

    fn expectation(&self) -> String {
        format!("input preceding {}", self.parser.expectation())
    }
}

/// Convenience function to create an Until parser
pub fn until<'src, P>(parser: P) -> Until<P>
where
    P: Parser<'src>,
{
    Until::new(parser)
}
