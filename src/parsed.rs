use crate::input::Input;

/// Successful outcome of a parse attempt
///
/// A `Complete` value fully accounts for the input it was applied to. A
/// `Partial` value carries the unconsumed remainder explicitly; the remainder
/// is never empty, so "nothing left" never needs a sentinel value. The only
/// classifying constructor is [`Parsed::new`], which upholds that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<'src, T> {
    /// The match fully accounted for its input
    Complete(T),
    /// The match succeeded with unconsumed input left over
    Partial {
        value: T,
        remainder: Input<'src>,
    },
}

impl<'src, T> Parsed<'src, T> {
    /// Wrap `value`, classifying by whether `rest` still holds content
    pub fn new(value: T, rest: Input<'src>) -> Self {
        if rest.is_empty() {
            Parsed::Complete(value)
        } else {
            Parsed::Partial {
                value,
                remainder: rest,
            }
        }
    }

    /// Borrow the parsed value
    pub fn value(&self) -> &T {
        match self {
            Parsed::Complete(value) => value,
            Parsed::Partial { value, .. } => value,
        }
    }

    /// Take the parsed value, discarding any remainder
    pub fn into_value(self) -> T {
        match self {
            Parsed::Complete(value) => value,
            Parsed::Partial { value, .. } => value,
        }
    }

    /// The unconsumed remainder, if any survives
    pub fn remainder(&self) -> Option<Input<'src>> {
        match self {
            Parsed::Complete(_) => None,
            Parsed::Partial { remainder, .. } => Some(*remainder),
        }
    }

    /// Transform the parsed value, preserving completeness
    pub fn map<U, F>(self, f: F) -> Parsed<'src, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Parsed::Complete(value) => Parsed::Complete(f(value)),
            Parsed::Partial { value, remainder } => Parsed::Partial {
                value: f(value),
                remainder,
            },
        }
    }
}
