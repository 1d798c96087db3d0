use nom::branch::alt;
use nom::character::complete::{anychar, char};
use nom::combinator::{map, value};
use nom::multi::{many0, many1};
use nom::IResult;

use crate::alphabet::{ANY_ONE, ANY_RUN};

/// A wildcard pattern, one element per position of the input.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Pattern {
    pub(crate) elements: Vec<Element>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Element {
    Literal(char),
    /// `?`: exactly one letter.
    AnyOne,
    /// `*`: zero or more letters. A run of stars parses to a single `AnyRun`.
    AnyRun,
}

impl Pattern {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl From<&str> for Pattern {
    fn from(input: &str) -> Self {
        // every character is a wildcard or a literal, so `pattern` never rejects input
        pattern(input).map(|(_, p)| p).unwrap_or_default()
    }
}

pub fn pattern(input: &str) -> IResult<&str, Pattern> {
    map(
        many0(element),
        |x| Pattern { elements: x },
    )(input)
}

fn any_one(input: &str) -> IResult<&str, Element> {
    value(Element::AnyOne, char(ANY_ONE))(input)
}

fn any_run(input: &str) -> IResult<&str, Element> {
    value(Element::AnyRun, many1(char(ANY_RUN)))(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    use Element::*;

    alt((
        any_one,
        any_run,
        // literal has to come last, anychar accepts the metacharacters too
        map(anychar, Literal),
    ))(input)
}
