//! End-to-end tests composing the combinators into small grammars

use pretty_assertions::assert_eq;
use regex::Regex;
use std::borrow::Cow;
use textcomb::{
    Input, Mismatch, adapt, constant, eof, escaped, many, not, one_of, pattern, sep_by, sequence,
    until, Parser,
};

/// Quoted string with backslash escapes: the body is any run of escape pairs
/// and ordinary (non-quote) elements between two quote marks.
fn quoted_body<'src>(input: &mut Input<'src>) -> Result<Cow<'src, str>, Mismatch> {
    input.apply(&constant("\""))?;
    let body = input.apply(&many(one_of(vec![
        escaped('\\').boxed(),
        not(constant("\"")).boxed(),
    ])))?;
    input.apply(&constant("\""))?;
    Ok(body)
}

#[test]
fn quoted_string_with_escapes() {
    let parser = adapt(quoted_body).described("quoted string");
    let parsed = parser.parse(r#""say \"hi\"" and more"#).unwrap();
    assert_eq!(parsed.value(), "say \"hi\"");
    assert_eq!(parsed.remainder().unwrap(), " and more");
}

#[test]
fn unterminated_quoted_string_fails_cleanly() {
    let parser = adapt(quoted_body).described("quoted string");
    let mismatch = parser.parse(r#""say hi"#).unwrap_err();
    assert_eq!(mismatch.expected, "\"\\\"\"");
    assert_eq!(mismatch.received, "end of input");
}

/// Nested parens via a recursive adapted function, counting depth.
fn nesting<'src>(input: &mut Input<'src>) -> Result<usize, Mismatch> {
    input.apply(&constant("("))?;
    let inner = input.apply(&adapt(nesting)).unwrap_or(0);
    input.apply(&constant(")"))?;
    Ok(inner + 1)
}

#[test]
fn recursive_grammar_counts_nesting_depth() {
    let parser = adapt(nesting);
    assert_eq!(parser.parse("((()))").unwrap().into_value(), 3);
    assert_eq!(parser.parse("()").unwrap().into_value(), 1);

    let parsed = parser.parse("(())!").unwrap();
    assert_eq!(parsed.value(), &2);
    assert_eq!(parsed.remainder().unwrap(), "!");

    assert!(parser.parse("((())").is_err());
}

#[test]
fn comma_separated_words_with_terminator() {
    let word = pattern(Regex::new("[a-z]+").unwrap()).described("word");
    let parser = sep_by(word, constant(","));

    let parsed = parser.parse("a,bb,ccc|rest").unwrap();
    let words: Vec<&str> = parsed.value().iter().map(|word| word.as_ref()).collect();
    assert_eq!(words, vec!["a", "bb", "ccc"]);
    assert_eq!(parsed.remainder().unwrap(), "|rest");
}

#[test]
fn line_comment_grammar() {
    let comment = adapt(|input: &mut Input<'_>| {
        input.apply(&constant("//"))?;
        input.apply(&until(one_of(vec![constant("\n").boxed(), eof().boxed()])))
    })
    .described("line comment");

    let parsed = comment.parse("// hello\ncode").unwrap();
    assert_eq!(parsed.value(), " hello");
    assert_eq!(parsed.remainder().unwrap(), "\ncode");

    let parsed = comment.parse("// at end of file").unwrap();
    assert_eq!(parsed.into_value(), " at end of file");
}

#[test]
fn sequence_with_trailing_eof_accepts_exact_input_only() {
    let parser = sequence(vec![constant("foo").boxed(), eof().boxed()]);
    assert!(parser.parse("foo").is_ok());
    assert!(parser.parse("food").is_err());
}

#[test]
fn composed_parser_is_reusable_across_invocations() {
    let word = pattern(Regex::new("[a-z]+").unwrap()).described("word");
    let parser = sequence(vec![word.boxed(), constant("!").boxed()]);

    let first = parser.parse("hey!").unwrap();
    let second = parser.parse("hey!").unwrap();
    assert_eq!(first, second);

    // A failed invocation in between leaks no state into the next
    assert!(parser.parse("123").is_err());
    let third = parser.parse("hey!").unwrap();
    assert_eq!(first, third);
}

#[test]
fn mismatch_renders_for_human_display() {
    let parser = one_of(vec![constant("cat").boxed(), constant("dog").boxed()]);
    let mismatch = parser.parse("fish").unwrap_err();
    assert_eq!(
        mismatch.to_string(),
        "expected \"cat\" or \"dog\" but received \"fish\""
    );
}
