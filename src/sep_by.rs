use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;

/// Parser combinator that matches items separated by another parser
///
/// Separators are consumed only between items: each round probes
/// separator-then-item on a scratch cursor and publishes it only when the
/// whole round matches, so a trailing separator is left unconsumed. Zero
/// items is a valid (empty) result.
pub struct SepBy<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> SepBy<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SepBy { parser, separator }
    }
}

impl<'src, P, S> Parser<'src> for SepBy<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        let mut items = Vec::new();
        let mut cursor = input;

        loop {
            let mut probe = cursor;
            if !items.is_empty() && probe.apply(&self.separator).is_err() {
                break;
            }
            match probe.apply(&self.parser) {
                Ok(item) => {
                    items.push(item);
                    cursor = probe;
                }
                Err(_) => break,
            }
        }

        Ok(Parsed::new(items, cursor))
    }

    fn expectation(&self) -> String {
        format!(
            "{} separated by {}",
            self.parser.expectation(),
            self.separator.expectation()
        )
    }
}

/// Convenience function to create a SepBy parser
pub fn sep_by<'src, P, S>(parser: P, separator: S) -> SepBy<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    SepBy::new(parser, separator)
}
