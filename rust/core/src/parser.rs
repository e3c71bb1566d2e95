//! Attribute micro-grammars
//!
//! nom parsers for the attribute payloads a floor plan carries: style
//! declarations, transform lists, path point data, and rect geometry.
//! Numbers go through `fast-float` rather than nom's float parser.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::map,
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use smallvec::SmallVec;
use svgplan_geometry::{Point2, StyleMap, Transform2D};

use crate::error::{Result, SvgError};

/// Transform argument lists top out at matrix's six values.
type Args = SmallVec<[f64; 6]>;

/// Float literal via fast-float; sign, decimals, and exponents accepted.
fn number(input: &str) -> IResult<&str, f64> {
    match fast_float::parse_partial::<f64, _>(input) {
        Ok((value, consumed)) if consumed > 0 => Ok((&input[consumed..], value)),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Float,
        ))),
    }
}

/// `x,y` with no interior whitespace, as Inkscape emits coordinate pairs.
fn coordinate_pair(input: &str) -> IResult<&str, (f64, f64)> {
    map(tuple((number, char(','), number)), |(x, _, y)| (x, y))(input)
}

/// Commas and/or whitespace between transform arguments.
fn arg_sep(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c == ',' || c.is_whitespace())(input)
}

fn arg_list(input: &str) -> IResult<&str, Args> {
    map(separated_list1(arg_sep, number), SmallVec::from_vec)(input)
}

/// One `name(arg, ...)` transform term.
fn transform_term(input: &str) -> IResult<&str, (&str, Args)> {
    pair(
        preceded(multispace0, take_while1(|c: char| c.is_ascii_alphabetic())),
        delimited(
            preceded(multispace0, char('(')),
            delimited(multispace0, arg_list, multispace0),
            char(')'),
        ),
    )(input)
}

fn transform_terms(input: &str) -> IResult<&str, Vec<(&str, Args)>> {
    many0(terminated(
        transform_term,
        take_while(|c: char| c == ',' || c.is_whitespace()),
    ))(input)
}

/// Parse a `transform` attribute.
///
/// Terms fold left-to-right onto the identity by field overwrite, not by
/// matrix product: `matrix` sets all six coefficients, `translate` the
/// offsets, `scale` the diagonal. A one-argument `translate` zeroes the y
/// offset; a one-argument `scale` applies to both axes. Unknown function
/// names and wrong arities are errors.
pub fn parse_transform(value: &str) -> Result<Transform2D> {
    let (rest, terms) = match transform_terms(value) {
        Ok(parsed) => parsed,
        Err(_) => return Err(SvgError::Transform(value.to_string())),
    };
    if !rest.trim().is_empty() {
        return Err(SvgError::Transform(value.to_string()));
    }

    let mut t = Transform2D::IDENTITY;
    for (name, args) in &terms {
        match (*name, args.as_slice()) {
            ("matrix", [a, b, c, d, e, f]) => {
                t = Transform2D::new(*a, *b, *c, *d, *e, *f);
            }
            ("translate", [tx]) => {
                t.e = *tx;
                t.f = 0.0;
            }
            ("translate", [tx, ty]) => {
                t.e = *tx;
                t.f = *ty;
            }
            ("scale", [s]) => {
                t.a = *s;
                t.d = *s;
            }
            ("scale", [sx, sy]) => {
                t.a = *sx;
                t.d = *sy;
            }
            _ => return Err(SvgError::Transform(value.to_string())),
        }
    }

    Ok(t)
}

/// Parse a `style` attribute into a key/value map.
///
/// Entries are `property:value` separated by `;`. Empty entries (as left
/// by a trailing semicolon) are allowed; a non-empty entry without a colon
/// is an error.
pub fn parse_style(value: &str) -> Result<StyleMap> {
    let mut style = StyleMap::default();
    for entry in value.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once(':') {
            Some((key, val)) => {
                style.insert(key.trim().to_string(), val.trim().to_string());
            }
            None => return Err(SvgError::Style(entry.to_string())),
        }
    }
    Ok(style)
}

/// Parse path `d` data into boundary vertices.
///
/// Coordinate pairs become vertices; single-letter commands carry no
/// coordinates here and are stepped over. A token starting with lowercase
/// `m` switches the pairs to relative, resolved by prefix sums from the
/// first point. A final point repeating the first is dropped, so closed
/// outlines come back open.
pub fn parse_path_points(value: &str) -> Result<Vec<Point2<f64>>> {
    let mut points: Vec<Point2<f64>> = Vec::new();
    let mut relative = false;

    for token in value.split_whitespace() {
        if token.contains(',') {
            match coordinate_pair(token) {
                Ok(("", (x, y))) => points.push(Point2::new(x, y)),
                _ => return Err(SvgError::Path(token.to_string())),
            }
        } else if token.starts_with('m') {
            relative = true;
        }
    }

    if relative && !points.is_empty() {
        let mut anchor = points[0];
        for p in points.iter_mut().skip(1) {
            *p = Point2::new(p.x + anchor.x, p.y + anchor.y);
            anchor = *p;
        }
    }

    if points.len() >= 2 && points.first() == points.last() {
        points.pop();
    }

    Ok(points)
}

/// Expand rect geometry to its four corners in drawing order.
pub fn rect_corners(x: f64, y: f64, width: f64, height: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(x, y),
        Point2::new(x + width, y),
        Point2::new(x + width, y + height),
        Point2::new(x, y + height),
    ]
}

/// A bare numeric attribute (`x`, `width`, ...).
pub fn parse_number(value: &str) -> Result<f64> {
    match fast_float::parse::<f64, _>(value.trim()) {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(SvgError::Number(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_accepts_signs_and_exponents() {
        assert_eq!(number("1.5,rest"), Ok((",rest", 1.5)));
        assert_eq!(number("-2"), Ok(("", -2.0)));
        assert_eq!(number("1e3 x"), Ok((" x", 1000.0)));
        assert!(number("z").is_err());
    }

    #[test]
    fn test_parse_style_entries() {
        let style = parse_style("fill:#ff0000;stroke:none").unwrap();
        assert_eq!(style.get("fill").map(String::as_str), Some("#ff0000"));
        assert_eq!(style.get("stroke").map(String::as_str), Some("none"));
    }

    #[test]
    fn test_parse_style_allows_trailing_semicolon() {
        let style = parse_style("fill:#000;").unwrap();
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_parse_style_rejects_entries_without_colon() {
        assert!(matches!(parse_style("filled"), Err(SvgError::Style(_))));
    }

    #[test]
    fn test_parse_transform_matrix() {
        let t = parse_transform("matrix(1,2,3,4,5,6)").unwrap();
        assert_eq!(t, Transform2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn test_parse_transform_translate() {
        let t = parse_transform("translate(10,-20)").unwrap();
        assert_eq!(t, Transform2D::translation(10.0, -20.0));

        let one_arg = parse_transform("translate(7)").unwrap();
        assert_eq!(one_arg, Transform2D::translation(7.0, 0.0));
    }

    #[test]
    fn test_parse_transform_scale() {
        assert_eq!(parse_transform("scale(2)").unwrap(), Transform2D::scaling(2.0, 2.0));
        assert_eq!(
            parse_transform("scale(2, 0.5)").unwrap(),
            Transform2D::scaling(2.0, 0.5)
        );
    }

    #[test]
    fn test_parse_transform_terms_overwrite_left_to_right() {
        // Not a matrix product: each term just writes its fields.
        let t = parse_transform("matrix(2,0,0,2,5,5) translate(10,20)").unwrap();
        assert_eq!(t, Transform2D::new(2.0, 0.0, 0.0, 2.0, 10.0, 20.0));

        let t = parse_transform("translate(10,20) scale(3)").unwrap();
        assert_eq!(t, Transform2D::new(3.0, 0.0, 0.0, 3.0, 10.0, 20.0));
    }

    #[test]
    fn test_parse_transform_accepts_whitespace_separators() {
        let t = parse_transform("matrix( 1 0 0 1 10 20 )").unwrap();
        assert_eq!(t, Transform2D::translation(10.0, 20.0));
    }

    #[test]
    fn test_parse_transform_empty_value_is_identity() {
        assert_eq!(parse_transform("").unwrap(), Transform2D::IDENTITY);
    }

    #[test]
    fn test_parse_transform_rejects_unknown_functions() {
        assert!(matches!(
            parse_transform("rotate(45)"),
            Err(SvgError::Transform(_))
        ));
        assert!(matches!(
            parse_transform("matrix(1,2,3)"),
            Err(SvgError::Transform(_))
        ));
        assert!(matches!(
            parse_transform("garbage"),
            Err(SvgError::Transform(_))
        ));
    }

    #[test]
    fn test_parse_path_absolute_points() {
        let points = parse_path_points("M 0,0 10,0 10,10 0,10").unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_parse_path_relative_points_prefix_sum() {
        // Deltas accumulate from the first point onward.
        let points = parse_path_points("m 1,1 1,0 0,1 -1,0 z").unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Point2::new(1.0, 1.0));
        assert_eq!(points[1], Point2::new(2.0, 1.0));
        assert_eq!(points[2], Point2::new(2.0, 2.0));
        assert_eq!(points[3], Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_parse_path_drops_closing_repeat_of_first_point() {
        let points = parse_path_points("M 0,0 5,0 5,5 0,5 0,0").unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points.last(), Some(&Point2::new(0.0, 5.0)));
    }

    #[test]
    fn test_parse_path_close_command_is_ignored() {
        let points = parse_path_points("M 0,0 5,0 5,5 Z").unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_parse_path_rejects_malformed_pairs() {
        assert!(matches!(
            parse_path_points("M 0,0 1,2,3"),
            Err(SvgError::Path(_))
        ));
        assert!(matches!(parse_path_points("M a,b"), Err(SvgError::Path(_))));
    }

    #[test]
    fn test_parse_path_empty_data() {
        assert!(parse_path_points("").unwrap().is_empty());
        assert!(parse_path_points("M Z").unwrap().is_empty());
    }

    #[test]
    fn test_rect_corners_in_drawing_order() {
        let corners = rect_corners(1.0, 2.0, 3.0, 4.0);
        assert_eq!(corners[0], Point2::new(1.0, 2.0));
        assert_eq!(corners[1], Point2::new(4.0, 2.0));
        assert_eq!(corners[2], Point2::new(4.0, 6.0));
        assert_eq!(corners[3], Point2::new(1.0, 6.0));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 4.25 ").unwrap(), 4.25);
        assert!(matches!(parse_number("wide"), Err(SvgError::Number(_))));
    }
}
