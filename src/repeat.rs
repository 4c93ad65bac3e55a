use crate::combine::Combine;
use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;

/// Parser combinator that applies a parser an exact number of times,
/// chaining like a sequence
///
/// Any application failing makes the whole repeat fail, with that mismatch
/// propagated unchanged.
pub struct Repeat<P> {
    parser: P,
    count: usize,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Repeat { parser, count }
    }
}

impl<'src, P> Parser<'src> for Repeat<P>
where
    P: Parser<'src>,
    P::Output: Combine,
{
    type Output = P::Output;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        let mut cursor = input;
        let mut value = P::Output::empty();
        for _ in 0..self.count {
            let piece = cursor.apply(&self.parser)?;
            value.combine(piece);
        }
        Ok(Parsed::new(value, cursor))
    }

    fn expectation(&self) -> String {
        format!("{} repeated {} times", self.parser.expectation(), self.count)
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<'src, P>(parser: P, count: usize) -> Repeat<P>
where
    P: Parser<'src>,
{
    Repeat::new(parser, count)
}
