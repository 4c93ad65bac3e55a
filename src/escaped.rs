use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that matches an escape marker followed by any one
/// element, yielding the post-marker element only
///
/// A building block for quoted-content grammars: `escaped('\\')` turns
/// `\"` into `"`.
pub struct Escaped {
    marker: char,
}

impl Escaped {
    pub fn new(marker: char) -> Self {
        Escaped { marker }
    }
}

impl<'src> Parser<'src> for Escaped {
    type Output = Cow<'src, str>;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        if !input.remaining().starts_with(self.marker) {
            return Err(Mismatch::at(self.expectation(), input));
        }
        let after_marker = input.advance(self.marker.len_utf8());
        match after_marker.split_first() {
            Some((element, rest)) => Ok(Parsed::new(Cow::Borrowed(element), rest)),
            None => Err(Mismatch::at(self.expectation(), input)),
        }
    }

    fn expectation(&self) -> String {
        format!("{:?} followed by any element", self.marker)
    }
}

/// Convenience function to create an Escaped parser
pub fn escaped(marker: char) -> Escaped {
    Escaped::new(marker)
}
