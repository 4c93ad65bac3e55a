use crate::input::Input;
use thiserror::Error;

/// Failure value produced when a parser rejects its input
///
/// A mismatch is terminal for the attempt that produced it and carries no
/// recovery state: just a description of what was expected and a rendering of
/// what was actually there. Combinators that try alternatives catch and
/// discard mismatches; everything else propagates them unchanged, so the
/// outermost call surfaces the first unrecovered mismatch verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} but received {received}")]
pub struct Mismatch {
    /// Description of what the failing parser would have accepted
    pub expected: String,
    /// Rendering of the input actually encountered
    pub received: String,
}

impl Mismatch {
    pub fn new(expected: impl Into<String>, received: impl Into<String>) -> Self {
        Mismatch {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Mismatch reported at a cursor position, rendering the remaining input
    /// (or `end of input` when nothing remains)
    pub fn at(expected: impl Into<String>, input: Input<'_>) -> Self {
        let received = if input.is_empty() {
            "end of input".to_string()
        } else {
            format!("{:?}", input.remaining())
        };
        Mismatch::new(expected, received)
    }
}
