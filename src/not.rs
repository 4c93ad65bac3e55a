use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that consumes exactly one element if the given parser
/// would fail at the current position
///
/// The probe's mismatch is caught and discarded; the probe's success makes
/// `not` fail, reporting what the probe matched. Never consumes more than
/// one element.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'src, P> Parser<'src> for Not<P>
where
    P: Parser<'src>,
{
    type Output = Cow<'src, str>;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        match self.parser.attempt(input) {
            Ok(parsed) => {
                let matched = match parsed.remainder() {
                    Some(rest) => input.span_until(rest),
                    None => input.remaining(),
                };
                Err(Mismatch::new(self.expectation(), format!("{:?}", matched)))
            }
            Err(_) => match input.split_first() {
                Some((element, rest)) => Ok(Parsed::new(Cow::Borrowed(element), rest)),
                None => Err(Mismatch::at(self.expectation(), input)),
            },
        }
    }

    fn expectation(&self) -> String {
        format!("not {}", self.parser.expectation())
    }
}

/// Convenience function to create a Not parser
pub fn not<'src, P>(parser: P) -> Not<P>
where
    P: Parser<'src>,
{
    Not::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::constant;

    #[test]
    fn test_not_fails_when_probe_matches() {
        let parser = not(constant("h"));
        let mismatch = parser.parse("hh").unwrap_err();
        assert_eq!(mismatch.expected, "not \"h\"");
        assert_eq!(mismatch.received, "\"h\"");
    }

    #[test]
    fn test_not_consumes_exactly_one_element() {
        let parser = not(constant("h"));
        let parsed = parser.parse("ah").unwrap();
        assert_eq!(parsed.value(), "a");
        assert_eq!(parsed.remainder().unwrap(), "h");
    }

    #[test]
    fn test_not_reports_multi_element_probe_match() {
        let parser = not(constant("hey"));
        let mismatch = parser.parse("heyo").unwrap_err();
        assert_eq!(mismatch.received, "\"hey\"");
    }

    #[test]
    fn test_not_is_never_greedy() {
        let parser = not(constant("h"));
        let parsed = parser.parse("aaaaaahh!!!").unwrap();
        assert_eq!(parsed.value(), "a");
        assert_eq!(parsed.remainder().unwrap(), "aaaaahh!!!");
    }

    #[test]
    fn test_not_on_empty_input_fails() {
        // The probe fails at end of input, but there is no element to consume
        let parser = not(constant("h"));
        let mismatch = parser.parse("").unwrap_err();
        assert_eq!(mismatch.received, "end of input");
    }

    #[test]
    fn test_not_multibyte_element() {
        let parser = not(constant("h"));
        let parsed = parser.parse("🦀h").unwrap();
        assert_eq!(parsed.value(), "🦀");
        assert_eq!(parsed.remainder().unwrap(), "h");
    }
}
