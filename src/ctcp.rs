//! CTCP (Client-to-Client Protocol) framing.
//!
//! CTCP payloads are carried inside PRIVMSG and NOTICE bodies, wrapped in the
//! `\x01` delimiter. This layer only detects the framing and the `ACTION`
//! token; other CTCP sub-protocols are left to the caller.
//!
//! # Example
//!
//! ```
//! use irc_message::ctcp;
//!
//! assert_eq!(ctcp::unframe("\x01ACTION waves\x01"), Some("ACTION waves"));
//! assert_eq!(ctcp::action_text("ACTION waves"), Some("waves"));
//! assert_eq!(ctcp::frame("VERSION"), "\x01VERSION\x01");
//! ```

/// The CTCP delimiter character (`\x01`).
pub const CTCP_DELIM: char = '\x01';

/// Token that introduces a CTCP action, including the separating space.
pub const ACTION_TOKEN: &str = "ACTION ";

/// Check if a message body is CTCP-framed.
#[inline]
pub fn is_ctcp(text: &str) -> bool {
    text.starts_with(CTCP_DELIM)
}

/// Strip the CTCP delimiters from a message body.
///
/// Returns `None` if the body is not CTCP-framed. A missing closing
/// delimiter is tolerated.
pub fn unframe(text: &str) -> Option<&str> {
    let inner = text.strip_prefix(CTCP_DELIM)?;
    Some(inner.strip_suffix(CTCP_DELIM).unwrap_or(inner))
}

/// Wrap text in CTCP delimiters.
pub fn frame(text: &str) -> String {
    let mut framed = String::with_capacity(text.len() + 2);
    framed.push(CTCP_DELIM);
    framed.push_str(text);
    framed.push(CTCP_DELIM);
    framed
}

/// Extract the action text from an unframed CTCP payload.
pub fn action_text(inner: &str) -> Option<&str> {
    inner.strip_prefix(ACTION_TOKEN)
}
