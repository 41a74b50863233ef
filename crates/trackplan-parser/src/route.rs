//! Route sentence parsing.
//!
//! Work notices usually describe the possession as "between `<from>` and
//! `<to>`". [`parse_route_sentence`] finds the first such phrase anywhere in a
//! sentence.

use winnow::{
    Parser as _,
    ascii::Caseless,
    error::{ContextError, ErrMode},
    token::{literal, take_till, take_while},
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// The two ends of a worksite route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    from: String,
    to: String,
}

impl Route {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

fn whitespace1<'src>(input: &mut &'src str) -> IResult<&'src str> {
    take_while(1.., char::is_whitespace).parse_next(input)
}

fn word<'src>(input: &mut &'src str) -> IResult<&'src str> {
    take_till(1.., char::is_whitespace).parse_next(input)
}

/// `between <word> and <word>`
fn route<'src>(input: &mut &'src str) -> IResult<Route> {
    let (_, _, from, _, _, _, to) = (
        literal(Caseless("between")),
        whitespace1,
        word,
        whitespace1,
        literal(Caseless("and")),
        whitespace1,
        word,
    )
        .parse_next(input)?;

    Ok(Route {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Finds the first `between <from> and <to>` phrase, case-insensitively.
///
/// `from` and `to` are single whitespace-delimited tokens.
///
/// # Examples
///
/// ```
/// let route = trackplan_parser::parse_route_sentence(
///     "Possession BETWEEN WAN:P11A and WAS:P11B from 0400",
/// )
/// .unwrap();
/// assert_eq!(route.from(), "WAN:P11A");
/// assert_eq!(route.to(), "WAS:P11B");
///
/// assert!(trackplan_parser::parse_route_sentence("no route here").is_none());
/// ```
pub fn parse_route_sentence(sentence: &str) -> Option<Route> {
    sentence.char_indices().find_map(|(start, _)| {
        let mut input = &sentence[start..];
        route(&mut input).ok()
    })
}
