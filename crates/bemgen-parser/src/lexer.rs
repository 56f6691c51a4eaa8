//! Token-level parsers for BEM identifiers.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::recognize,
    multi::many0,
    sequence::pair,
    IResult,
};

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Parse a BEM word: `[a-z0-9]+(-[a-z0-9]+)*`.
///
/// A hyphen is only consumed when a word character follows it, so `--`
/// is left for the modifier delimiter of the two-dashes convention.
pub fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(is_word_char),
        many0(pair(char('-'), take_while1(is_word_char))),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_simple() {
        assert_eq!(word("button"), Ok(("", "button")));
        assert_eq!(word("my-block__x"), Ok(("__x", "my-block")));
    }

    #[test]
    fn test_word_stops_before_double_dash() {
        assert_eq!(word("button--size_l"), Ok(("--size_l", "button")));
    }

    #[test]
    fn test_word_rejects_uppercase_start() {
        assert!(word("Button").is_err());
        assert!(word("-button").is_err());
    }
}
