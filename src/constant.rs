use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact literal at the current position
pub struct Constant {
    literal: String,
}

impl Constant {
    pub fn new(literal: impl Into<String>) -> Self {
        Constant {
            literal: literal.into(),
        }
    }
}

impl<'src> Parser<'src> for Constant {
    type Output = Cow<'src, str>;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        let remaining = input.remaining();
        if remaining.starts_with(self.literal.as_str()) {
            let rest = input.advance(self.literal.len());
            Ok(Parsed::new(Cow::Borrowed(input.span_until(rest)), rest))
        } else if remaining.is_empty() {
            Err(Mismatch::at(self.expectation(), input))
        } else {
            // Report the actual prefix of matching length, or the whole
            // input when shorter
            let want = self.literal.chars().count();
            let prefix: String = remaining.chars().take(want).collect();
            Err(Mismatch::new(self.expectation(), format!("{:?}", prefix)))
        }
    }

    fn expectation(&self) -> String {
        format!("{:?}", self.literal)
    }
}

/// Convenience function to create a Constant parser
pub fn constant(literal: impl Into<String>) -> Constant {
    Constant::new(literal)
}
