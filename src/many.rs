use crate::combine::Combine;
use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;

/// Parser combinator that applies a parser repeatedly until it fails or
/// input is exhausted, folding the matches with [`Combine`]
///
/// Always succeeds: the terminating mismatch is caught and discarded, and
/// zero matches yield the empty value.
///
/// # Note
/// The inner parser must not be able to succeed on non-empty input while
/// consuming nothing (e.g. `pattern` over `x*`): each zero-width success
/// re-enters the loop at the same position and the repetition never
/// terminates. This is a caller obligation, not a runtime check.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
    P::Output: Combine,
{
    type Output = P::Output;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        let mut cursor = input;
        let mut value = P::Output::empty();
        while !cursor.is_empty() {
            let mut probe = cursor;
            match probe.apply(&self.parser) {
                Ok(piece) => {
                    value.combine(piece);
                    cursor = probe;
                }
                Err(_) => break,
            }
        }
        Ok(Parsed::new(value, cursor))
    }

    fn expectation(&self) -> String {
        format!("zero or more of {}", self.parser.expectation())
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}
