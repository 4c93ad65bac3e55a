use crate::combine::Combine;
use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;

/// Parser combinator that makes a match optional
///
/// Inner success passes through unchanged; inner failure is caught and
/// yields the [`Combine`]-empty value with nothing consumed.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
    P::Output: Combine,
{
    type Output = P::Output;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        match self.parser.attempt(input) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Ok(Parsed::new(P::Output::empty(), input)),
        }
    }

    fn expectation(&self) -> String {
        format!("optional {}", self.parser.expectation())
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
{
    Optional::new(parser)
}
