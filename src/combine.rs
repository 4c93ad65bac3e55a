use std::borrow::Cow;

/// Associative append over the value domains sequencing combinators fold into
///
/// `sequence`, `repeat` and `many` chain sub-parsers over advancing input and
/// aggregate the values they produce. The aggregation is an associative
/// append starting from an empty value: concatenation for text, extension for
/// vectors. Any value domain implementing this trait can flow through those
/// combinators.
pub trait Combine {
    /// The identity of the append operation
    fn empty() -> Self;

    /// Append `piece` onto the running value
    fn combine(&mut self, piece: Self);
}

impl Combine for String {
    fn empty() -> Self {
        String::new()
    }

    fn combine(&mut self, piece: Self) {
        self.push_str(&piece);
    }
}

/// Borrowed matched slices stay borrowed until a second non-empty piece
/// forces an owned concatenation
impl<'src> Combine for Cow<'src, str> {
    fn empty() -> Self {
        Cow::Borrowed("")
    }

    fn combine(&mut self, piece: Self) {
        if piece.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = piece;
        } else {
            self.to_mut().push_str(&piece);
        }
    }
}

impl<T> Combine for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(&mut self, mut piece: Self) {
        self.append(&mut piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_combine() {
        let mut value = String::empty();
        value.combine("foo".to_string());
        value.combine("bar".to_string());
        assert_eq!(value, "foobar");
    }

    #[test]
    fn test_cow_single_piece_stays_borrowed() {
        let mut value = Cow::empty();
        value.combine(Cow::Borrowed("foo"));
        assert!(matches!(value, Cow::Borrowed("foo")));
    }

    #[test]
    fn test_cow_two_pieces_concatenate() {
        let mut value: Cow<'_, str> = Cow::Borrowed("foo");
        value.combine(Cow::Borrowed("bar"));
        assert_eq!(value, "foobar");
        assert!(matches!(value, Cow::Owned(_)));
    }

    #[test]
    fn test_cow_empty_piece_is_ignored() {
        let mut value: Cow<'_, str> = Cow::Borrowed("foo");
        value.combine(Cow::Borrowed(""));
        assert!(matches!(value, Cow::Borrowed("foo")));
    }

    #[test]
    fn test_vec_combine() {
        let mut value = Vec::empty();
        value.combine(vec![1, 2]);
        value.combine(vec![3]);
        assert_eq!(value, vec![1, 2, 3]);
    }
}
