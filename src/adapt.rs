use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;
use crate::parser::Parser;
use std::borrow::Cow;

/// Adapter that lifts a plain function into the parser protocol
///
/// The function receives a mutable cursor and sequences matches explicitly
/// through [`Input::apply`]. Its bare return value is auto-wrapped by the
/// cursor's final position: consuming everything yields a complete result,
/// stopping early yields a partial one with the rest as remainder. Because
/// the cursor the caller holds is only replaced on overall success, a failure
/// inside the function leaks no partial consumption.
///
/// Adapting a recursive `fn` item is the crate's mechanism for recursive
/// grammars.
pub struct Adapted<F> {
    func: F,
    description: Cow<'static, str>,
}

impl<F> Adapted<F> {
    pub fn new(func: F) -> Self {
        Adapted {
            func,
            description: Cow::Borrowed("adapted parser"),
        }
    }

    /// Set the expectation text reported when this parser is composed into
    /// mismatch reports
    pub fn described(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }
}

impl<'src, F, T> Parser<'src> for Adapted<F>
where
    F: Fn(&mut Input<'src>) -> Result<T, Mismatch>,
{
    type Output = T;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        let mut cursor = input;
        let value = (self.func)(&mut cursor)?;
        Ok(Parsed::new(value, cursor))
    }

    fn expectation(&self) -> String {
        self.description.to_string()
    }
}

/// Convenience function to create an Adapted parser
pub fn adapt<'src, F, T>(func: F) -> Adapted<F>
where
    F: Fn(&mut Input<'src>) -> Result<T, Mismatch>,
{
    Adapted::new(func)
}
