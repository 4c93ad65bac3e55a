use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that succeeds only at the end of input
///
/// Appended to a sequence, it asserts that nothing unconsumed survives.
pub struct Eof;

impl Eof {
    pub fn new() -> Self {
        Eof
    }
}

impl Default for Eof {
    fn default() -> Self {
        Eof::new()
    }
}

impl<'src> Parser<'src> for Eof {
    type Output = Cow<'src, str>;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        if input.is_empty() {
            Ok(Parsed::Complete(Cow::Borrowed("")))
        } else {
            Err(Mismatch::at(self.expectation(), input))
        }
    }

    fn expectation(&self) -> String {
        "end of input".to_string()
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof::new()
}
