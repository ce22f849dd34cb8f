use winnow::ascii::{space0, Caseless};
use winnow::combinator::{preceded, trace};
use winnow::error::{ContextError, ErrMode, ModalResult, StrContext};
use winnow::token::{literal, rest, take_while};
use winnow::Parser;

// <marker>          ::= "#"+
fn marker<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., '#')
        .context(StrContext::Label(MARKER))
        .parse_next(i)
}

pub(crate) const MARKER: &str = "marker";

// <heading>         ::= <marker>, " "+, <variant>, <any UTF8-octets>*
//
// Only the prefix up to and including the matched variant is consumed.
pub(crate) fn heading<'i>(i: &mut &'i str, variants: &[&str]) -> ModalResult<&'i str> {
    trace("heading", |i: &mut &'i str| {
        (marker, take_while(1.., ' ')).void().parse_next(i)?;
        variant(i, variants)
    })
    .parse_next(i)
}

// <variant>         ::= <any of the keyword variants, ASCII case-insensitive>
fn variant<'i>(i: &mut &'i str, variants: &[&str]) -> ModalResult<&'i str> {
    for v in variants {
        let matched: ModalResult<&'i str> = literal(Caseless(*v)).parse_next(i);
        if matched.is_ok() {
            return matched;
        }
    }
    Err(ErrMode::Backtrack(ContextError::new()))
}

// <boundary>        ::= <marker>, " "
pub(crate) fn boundary(i: &mut &str) -> ModalResult<()> {
    trace("boundary", (marker, ' ').void()).parse_next(i)
}

// <word>            ::= [A-Za-z0-9_]+
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// <type_prefix>     ::= <whitespace>*, <word>, <whitespace>*, ":", <whitespace>*, <subject>
pub(crate) fn type_prefix<'i>(i: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    trace(
        "type_prefix",
        (
            preceded(space0, take_while(1.., is_word)).context(StrContext::Label(TYPE)),
            preceded((space0, ':', space0), rest),
        ),
    )
    .parse_next(i)
}

pub(crate) const TYPE: &str = "type";
