use crate::combine::Combine;
use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::{BoxedParser, Parser};

/// Parser combinator that applies each sub-parser in turn over advancing
/// input, folding the values with [`Combine`]
///
/// The first sub-parser failure propagates unchanged. The advanced cursor is
/// local to the attempt, so a failure never exposes the intermediate
/// consumption to the caller.
pub struct Sequence<'src, T> {
    parsers: Vec<BoxedParser<'src, T>>,
}

impl<'src, T> Sequence<'src, T> {
    pub fn new(parsers: Vec<BoxedParser<'src, T>>) -> Self {
        Sequence { parsers }
    }
}

impl<'src, T> Parser<'src> for Sequence<'src, T>
where
    T: Combine,
{
    type Output = T;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        let mut cursor = input;
        let mut value = T::empty();
        for parser in &self.parsers {
            let piece = cursor.apply(parser)?;
            value.combine(piece);
        }
        Ok(Parsed::new(value, cursor))
    }

    fn expectation(&self) -> String {
        self.parsers
            .iter()
            .map(|parser| parser.expectation())
            .collect::<Vec<_>>()
            .join(" then ")
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'src, T>(parsers: Vec<BoxedParser<'src, T>>) -> Sequence<'src, T> {
    Sequence::new(parsers)
}
