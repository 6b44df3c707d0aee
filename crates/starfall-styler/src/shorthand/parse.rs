//! Breakpoint shorthand key parsing.
//!
//! Shorthand keys follow the grammar `:sf-min(<tier>)` / `:sf-max(<tier>)`,
//! tokenized with `cssparser`. A tier is an identifier (`sm`) or an unsigned
//! integer with an optional identifier suffix (`2xl`). Any key not starting
//! with [`SHORTHAND_PREFIX`] is an ordinary key and is left alone; a key that
//! does start with it must parse or it is reported as malformed.

use std::fmt;

use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::error::{StyleError, StyleResult};
use crate::theme::Breakpoints;

/// Prefix reserved for breakpoint shorthands.
pub const SHORTHAND_PREFIX: &str = ":sf-";

/// Which side of a breakpoint a shorthand targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Wider than the tier: `@media (min-width: W+1px)`.
    Min,
    /// Up to and including the tier: `@media (max-width: Wpx)`.
    Max,
}

impl Bound {
    fn function_name(self) -> &'static str {
        match self {
            Bound::Min => "sf-min",
            Bound::Max => "sf-max",
        }
    }

    fn media_feature(self) -> &'static str {
        match self {
            Bound::Min => "min-width",
            Bound::Max => "max-width",
        }
    }

    /// The pixel edge of the media query for a tier of the given width.
    ///
    /// `Min` sits one pixel above `Max` so the two windows never overlap.
    pub fn edge(self, width: u32) -> u32 {
        match self {
            Bound::Min => width.saturating_add(1),
            Bound::Max => width,
        }
    }
}

/// A parsed breakpoint shorthand such as `:sf-max(sm)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shorthand {
    pub bound: Bound,
    pub tier: String,
}

impl Shorthand {
    /// Parses a style key.
    ///
    /// Returns `Ok(None)` for keys that are not shorthands.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MalformedShorthand`] when a `:sf-` key does not
    /// match the grammar or names an unknown shorthand function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use starfall_styler::{Bound, Shorthand};
    ///
    /// let shorthand = Shorthand::parse(":sf-min(md)").unwrap().unwrap();
    /// assert_eq!(shorthand.bound, Bound::Min);
    /// assert_eq!(shorthand.tier, "md");
    ///
    /// assert_eq!(Shorthand::parse(":hover").unwrap(), None);
    /// ```
    pub fn parse(key: &str) -> StyleResult<Option<Shorthand>> {
        if !is_shorthand_key(key) {
            return Ok(None);
        }

        // cssparser closes blocks implicitly at end of input.
        if !key.trim_end().ends_with(')') {
            return Err(malformed(key, "missing closing parenthesis".to_string()));
        }

        let mut input = ParserInput::new(key);
        let mut parser = Parser::new(&mut input);
        let (function, tier) = parser
            .parse_entirely(shorthand_tokens)
            .map_err(|err| malformed(key, describe(&err)))?;

        let bound = match function.as_str() {
            "sf-min" => Bound::Min,
            "sf-max" => Bound::Max,
            other => {
                return Err(malformed(
                    key,
                    format!("unknown shorthand function '{}'", other),
                ))
            }
        };

        Ok(Some(Shorthand { bound, tier }))
    }

    /// The canonical media-query key for this shorthand under `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownBreakpoint`] if the theme has no width
    /// for the tier.
    pub fn canonical_key<T: Breakpoints + ?Sized>(&self, theme: &T) -> StyleResult<String> {
        let width = theme
            .breakpoint_width(&self.tier)
            .ok_or_else(|| StyleError::UnknownBreakpoint {
                key: self.to_string(),
                tier: self.tier.clone(),
            })?;
        Ok(media_query_key(self.bound, width))
    }
}

impl fmt::Display for Shorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}({})", self.bound.function_name(), self.tier)
    }
}

/// Whether `key` claims to be a breakpoint shorthand.
pub fn is_shorthand_key(key: &str) -> bool {
    key.starts_with(SHORTHAND_PREFIX)
}

/// Builds a canonical media-query key, e.g. `@media (max-width: 600px)`.
pub fn media_query_key(bound: Bound, width: u32) -> String {
    format!("@media ({}: {}px)", bound.media_feature(), bound.edge(width))
}

fn shorthand_tokens<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<(String, String), ParseError<'i, ()>> {
    parser.expect_colon()?;
    let function = parser.expect_function()?.to_ascii_lowercase();
    let tier = parser.parse_nested_block::<_, _, ()>(|block| {
        let start = block.position();
        let location = block.current_source_location();
        let token = block.next()?.clone();
        match token {
            Token::Ident(ref tier) => Ok(String::from(&**tier)),
            // Tiers like `2xl` lex as a dimension; keep the source text.
            Token::Number {
                has_sign: false,
                int_value: Some(_),
                ..
            }
            | Token::Dimension {
                has_sign: false,
                int_value: Some(_),
                ..
            } => Ok(block.slice_from(start).trim().to_string()),
            other => Err(location.new_unexpected_token_error(other)),
        }
    })?;
    Ok((function, tier))
}

fn describe(err: &ParseError<'_, ()>) -> String {
    match &err.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => format!(
            "unexpected {:?} at column {}",
            token, err.location.column
        ),
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_string()
        }
        _ => format!("invalid syntax at column {}", err.location.column),
    }
}

fn malformed(key: &str, reason: String) -> StyleError {
    StyleError::MalformedShorthand {
        key: key.to_string(),
        reason,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn min_and_max_windows_do_not_overlap(width in 0u32..100_000) {
            prop_assert_eq!(Bound::Min.edge(width), Bound::Max.edge(width) + 1);
        }

        #[test]
        fn parsed_tier_round_trips_through_display(tier in "[a-z][a-z0-9]{0,6}") {
            let key = format!(":sf-max({})", tier);
            let shorthand = Shorthand::parse(&key).unwrap().unwrap();
            prop_assert_eq!(&shorthand.tier, &tier);
            prop_assert_eq!(shorthand.to_string(), key);
        }
    }
}
