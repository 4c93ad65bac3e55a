//! # TextComb - Parser Combinator Library
//!
//! A parser combinator library for building recursive-descent parsers over
//! text from small reusable pieces.
//!
//! TextComb provides composable, type-safe parsers that combine into complex
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing failures are handled through `Result` types
//! - **Precise diagnostics**: Every failure is a `Mismatch` carrying what was
//!   expected and what was actually received, formatted for human display
//! - **Explicit remainders**: A successful parse distinguishes complete
//!   consumption from a partial match with leftover input
//! - **Composability**: Parsers are immutable values, composed once and
//!   invoked any number of times
//!
//! Parsers are built from the atomic constructors [`constant`], [`eof`] and
//! [`pattern`], combined with [`sequence`], [`one_of`], [`repeat`], [`many`],
//! [`not`], [`until`], [`escaped`], [`optional`] and [`sep_by`], and invoked
//! with [`Parser::parse`]. Hand-written composite parsers are lifted into the
//! [`Parser`] trait with [`adapt`], sequencing their own matches through
//! [`Input::apply`].

pub mod adapt;
pub mod combine;
pub mod constant;
pub mod eof;
pub mod error;
pub mod escaped;
pub mod input;
pub mod many;
pub mod map;
pub mod not;
pub mod one_of;
pub mod optional;
pub mod parsed;
pub mod parser;
pub mod pattern;
pub mod repeat;
pub mod sep_by;
pub mod sequence;
pub mod text;
pub mod until;

pub use adapt::{Adapted, adapt};
pub use combine::Combine;
pub use constant::{Constant, constant};
pub use eof::{Eof, eof};
pub use error::Mismatch;
pub use escaped::{Escaped, escaped};
pub use input::Input;
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use not::{Not, not};
pub use one_of::{OneOf, one_of};
pub use optional::{Optional, optional};
pub use parsed::Parsed;
pub use parser::{BoxedParser, Parser};
pub use pattern::{Pattern, pattern};
pub use repeat::{Repeat, repeat};
pub use sep_by::{SepBy, sep_by};
pub use sequence::{Sequence, sequence};
pub use until::{Until, until};
