// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimal SVG document model
//!
//! Parses just enough XML for Inkscape floor plans: nested elements with
//! attributes. Prolog, comments, DOCTYPE, CDATA, and text content are
//! consumed and dropped. Namespace prefixes are kept in element names as
//! written; matching happens on local names.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until, take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::value,
    multi::many0,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};
use rustc_hash::FxHashMap;

use crate::error::{Result, SvgError};

/// One markup element: name, attributes, child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Qualified name as written, prefix included (`svg:path`, `g`).
    pub name: String,
    pub attributes: FxHashMap<String, String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Element name with any namespace prefix stripped.
    pub fn local_name(&self) -> &str {
        match self.name.rsplit_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Attribute value by exact attribute name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Depth-first search of the subtree for an element with this `id`
    /// attribute. The element itself is not a candidate.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        for child in &self.children {
            if child.attr("id") == Some(id) {
                return Some(child);
            }
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }
}

/// Parse a complete document and return its root element.
pub fn parse_document(input: &str) -> Result<Element> {
    match preceded(misc, terminated(element, misc))(input) {
        Ok((rest, root)) if rest.is_empty() => Ok(root),
        Ok((rest, _)) => Err(SvgError::Markup {
            offset: input.len() - rest.len(),
            message: "trailing content after document element".to_string(),
        }),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(SvgError::Markup {
            offset: input.len() - e.input.len(),
            message: "malformed element structure".to_string(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(SvgError::Markup {
            offset: input.len(),
            message: "unexpected end of input".to_string(),
        }),
    }
}

fn name_char(c: char) -> bool {
    c.is_alphanumeric() || c == ':' || c == '-' || c == '_' || c == '.'
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), tuple((tag("<!--"), take_until("-->"), tag("-->"))))(input)
}

fn processing_instruction(input: &str) -> IResult<&str, ()> {
    value((), tuple((tag("<?"), take_until("?>"), tag("?>"))))(input)
}

fn doctype(input: &str) -> IResult<&str, ()> {
    value((), tuple((tag("<!DOCTYPE"), take_until(">"), char('>'))))(input)
}

fn cdata(input: &str) -> IResult<&str, ()> {
    value((), tuple((tag("<![CDATA["), take_until("]]>"), tag("]]>"))))(input)
}

/// Skippable content between elements: whitespace, text runs, comments,
/// processing instructions, CDATA, and the document type declaration.
fn misc(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            comment,
            cdata,
            doctype,
            processing_instruction,
            value((), is_not("<")),
        ))),
    )(input)
}

/// `name="value"` or `name='value'`; predefined entities are unescaped.
fn attribute(input: &str) -> IResult<&str, (String, String)> {
    let (input, name) = take_while1(name_char)(input)?;
    let (input, _) = delimited(multispace0, char('='), multispace0)(input)?;
    let (input, raw) = alt((
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
    ))(input)?;

    Ok((input, (name.to_string(), unescape(raw))))
}

/// Replace the five predefined XML entities. `&amp;` is handled last so
/// sequences like `&amp;lt;` come out as literal `&lt;`.
fn unescape(raw: &str) -> String {
    if memchr::memchr(b'&', raw.as_bytes()).is_none() {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn element(input: &str) -> IResult<&str, Element> {
    let (input, _) = char('<')(input)?;
    let (input, name) = take_while1(name_char)(input)?;
    let (input, attributes) = many0(preceded(multispace1, attribute))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, self_closing) = alt((value(true, tag("/>")), value(false, char('>'))))(input)?;

    let attributes: FxHashMap<String, String> = attributes.into_iter().collect();

    if self_closing {
        return Ok((
            input,
            Element {
                name: name.to_string(),
                attributes,
                children: Vec::new(),
            },
        ));
    }

    let (input, children) = child_elements(input)?;
    let (input, _) = tuple((tag("</"), tag(name), multispace0, char('>')))(input)?;

    Ok((
        input,
        Element {
            name: name.to_string(),
            attributes,
            children,
        },
    ))
}

fn child_elements(input: &str) -> IResult<&str, Vec<Element>> {
    preceded(misc, many0(terminated(element, misc)))(input)
}
