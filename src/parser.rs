use crate::error::Mismatch;
use crate::input::Input;
use crate::parsed::Parsed;

/// Core parser trait for parser combinators
///
/// Anything that can take an [`Input`] and either produce a [`Parsed`] value
/// or fail with a [`Mismatch`] is a parser. Every combinator in this crate is
/// one implementation; [`crate::adapt`] lifts an arbitrary function into the
/// trait. Parsers are immutable once composed: each invocation owns its
/// cursor, so one parser value can be invoked any number of times, from any
/// thread, without reset.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given input position
    ///
    /// Returns the parsed value, wrapped as `Partial` when unconsumed input
    /// survives, or fails with a mismatch. Failures never expose partially
    /// consumed input: the cursor a caller holds is untouched.
    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch>;

    /// Human-readable description of what this parser accepts
    ///
    /// Composed into mismatch reports, e.g. the disjunction a failed
    /// [`crate::one_of`] renders.
    fn expectation(&self) -> String;

    /// Run the parser over a complete source string
    fn parse(&self, source: &'src str) -> Result<Parsed<'src, Self::Output>, Mismatch>
    where
        Self: Sized,
    {
        self.attempt(Input::new(source))
    }

    /// Erase the concrete parser type, for storing mixed parsers in lists
    fn boxed(self) -> BoxedParser<'src, Self::Output>
    where
        Self: Sized + 'src,
    {
        Box::new(self)
    }
}

/// Type-erased parser, the element type of `sequence` and `one_of` lists
pub type BoxedParser<'src, T> = Box<dyn Parser<'src, Output = T> + 'src>;

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        (**self).attempt(input)
    }

    fn expectation(&self) -> String {
        (**self).expectation()
    }
}

impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn attempt(&self, input: Input<'src>) -> Result<Parsed<'src, Self::Output>, Mismatch> {
        (**self).attempt(input)
    }

    fn expectation(&self) -> String {
        (**self).expectation()
    }
}
