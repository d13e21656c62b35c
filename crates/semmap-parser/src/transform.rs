//! Parsing of SVG `transform` and coordinate attribute values.
//!
//! Only the translation part of a transform matters for locating shapes and
//! labels; rotations, scales and other functions around it are ignored.

use semmap_core::geometry::Point;
use winnow::{
    ModalResult, Parser as _,
    ascii::{multispace0, multispace1},
    combinator::{alt, separated_pair, terminated},
    token::take_while,
};

const TRANSLATE: &str = "translate(";

/// A number as the drawing tool writes it: digits, dots and minus signs.
fn number(input: &mut &str) -> ModalResult<f32> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '.' || c == '-')
        .try_map(str::parse::<f32>)
        .parse_next(input)
}

/// Whitespace between the two arguments, optionally around a single comma.
fn separator(input: &mut &str) -> ModalResult<()> {
    alt(((multispace0, ',', multispace0).void(), multispace1.void())).parse_next(input)
}

/// The arguments after `translate(` up to and including the closing paren.
fn translate_args(input: &mut &str) -> ModalResult<Point> {
    terminated(separated_pair(number, separator, number), ')')
        .map(|(x, y)| Point::new(x, y))
        .parse_next(input)
}

/// Extracts the translation pair from a `transform` attribute value.
///
/// Every `translate(` occurrence is tried in order and the first one with two
/// numeric arguments wins. Returns `None` when no occurrence qualifies.
///
/// # Examples
///
/// ```
/// # use semmap_parser::transform::parse_translate;
/// let p = parse_translate("translate(500 300) rotate(0 26.7 26.2)").unwrap();
/// assert_eq!((p.x(), p.y()), (500.0, 300.0));
///
/// assert!(parse_translate("rotate(45)").is_none());
/// assert!(parse_translate("translate(10)").is_none());
/// ```
pub fn parse_translate(transform: &str) -> Option<Point> {
    transform.match_indices(TRANSLATE).find_map(|(start, _)| {
        let mut input = &transform[start + TRANSLATE.len()..];
        translate_args(&mut input).ok()
    })
}

/// Parses a single coordinate attribute such as `x="48.8"`.
///
/// Surrounding whitespace is allowed; anything else that is not a plain
/// number yields `None`.
pub fn parse_coordinate(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok()
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    /// Any pair written the way the drawing tool writes it parses back.
    fn check_written_pair_parses(x: f32, y: f32, suffix: &str) -> Result<(), TestCaseError> {
        let transform = format!("translate({x} {y}){suffix}");
        let parsed = parse_translate(&transform);

        prop_assert!(parsed.is_some(), "failed to parse {transform}");
        let p = parsed.unwrap();
        prop_assert!(approx_eq!(f32, p.x(), x));
        prop_assert!(approx_eq!(f32, p.y(), y));
        Ok(())
    }

    proptest! {
        #[test]
        fn written_pair_parses(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            suffix in prop::sample::select(vec!["", " rotate(0 26.7 26.2)", " scale(1)"]),
        ) {
            check_written_pair_parses(x, y, suffix)?;
        }

        #[test]
        fn arbitrary_input_never_panics(s in "\\PC*") {
            let _ = parse_translate(&s);
        }
    }
}
