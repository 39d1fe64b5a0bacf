//! Splitting raw IRC lines.
//!
//! This is the boundary between a socket and the message layer: a line of
//! the form `[':' prefix SPACE] command [SPACE params...] [SPACE ':' trailing]`
//! is split into its prefix, command token and parameters. The trailing
//! parameter may contain spaces and is never re-split. Message tags are not
//! supported.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use crate::error::MessageParseError;

/// RFC 2812: at most 15 parameters.
pub const MAX_PARAMS: usize = 15;

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the command token (everything up to the first space).
fn parse_command(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != ' ' && c != '\r' && c != '\n')(input)
}

/// Parse parameters from the remaining input after the command.
///
/// Multiple consecutive spaces are treated as a single separator. As in
/// RFC 2812 the [`MAX_PARAMS`]th parameter is trailing even without a
/// leading `:` and takes the rest of the line.
fn parse_params(input: &str) -> SmallVec<[&str; MAX_PARAMS]> {
    let mut params: SmallVec<[&str; MAX_PARAMS]> = SmallVec::new();
    let mut rest = input;

    while rest.starts_with(' ') {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() || rest.starts_with(['\r', '\n']) {
            break;
        }

        let trailing = match rest.strip_prefix(':') {
            Some(after_colon) => Some(after_colon),
            None if params.len() + 1 == MAX_PARAMS => Some(rest),
            None => None,
        };
        if let Some(trailing) = trailing {
            // Trailing parameter - everything until line end
            let end = trailing.find(['\r', '\n']).unwrap_or(trailing.len());
            params.push(&trailing[..end]);
            break;
        }

        let end = rest.find([' ', '\r', '\n']).unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    params
}

/// A raw line split into borrowed parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// The sender, empty when the line has no prefix.
    pub prefix: &'a str,
    /// The command token as sent.
    pub command: &'a str,
    /// Parameters, the trailing one already stripped of its colon.
    pub params: SmallVec<[&'a str; MAX_PARAMS]>,
}

impl<'a> RawLine<'a> {
    /// Split a raw line.
    ///
    /// Leading whitespace and a trailing CRLF are ignored.
    ///
    /// ```
    /// use irc_message::line::RawLine;
    ///
    /// let line = RawLine::parse(":nick!u@h PRIVMSG #rust :hello there\r\n").unwrap();
    /// assert_eq!(line.prefix, "nick!u@h");
    /// assert_eq!(line.command, "PRIVMSG");
    /// assert_eq!(line.params.as_slice(), &["#rust", "hello there"]);
    /// ```
    pub fn parse(input: &'a str) -> Result<Self, MessageParseError> {
        let line = input.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let (rest, prefix) = split_head(line.trim_start()).map_err(|e| {
            let position = match &e {
                nom::Err::Error(inner) | nom::Err::Failure(inner) => {
                    line.len() - inner.input.len()
                }
                nom::Err::Incomplete(_) => line.len(),
            };
            MessageParseError::MalformedLine {
                position,
                context: "parsing prefix".to_owned(),
            }
        })?;

        let (rest, command) = parse_command(rest).map_err(|_| MessageParseError::MissingCommand)?;

        Ok(Self {
            prefix: prefix.unwrap_or_default(),
            command,
            params: parse_params(rest),
        })
    }
}

/// Split off the prefix. A line that starts with `:` must carry one.
fn split_head(input: &str) -> IResult<&str, Option<&str>> {
    if !input.starts_with(':') {
        return Ok((input, None));
    }
    let (input, prefix) = parse_prefix(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Some(prefix)))
}
